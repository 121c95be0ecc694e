use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Units the weather values are requested and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitSystem {
    Metric,
    #[default]
    Imperial,
    Uk,
}

impl UnitSystem {
    pub fn temperature_in_celsius(self) -> bool {
        matches!(self, Self::Metric | Self::Uk)
    }

    pub fn wind_in_kph(self) -> bool {
        matches!(self, Self::Metric)
    }

    pub fn eto_in_mm(self) -> bool {
        matches!(self, Self::Metric | Self::Uk)
    }
}

impl FromStr for UnitSystem {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        Ok(match s.as_str() {
            "uk" => Self::Uk,
            "si" => Self::Metric,
            _ if s.starts_with('m') => Self::Metric,
            _ => Self::Imperial,
        })
    }
}

impl From<String> for UnitSystem {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(units) => units,
            Err(never) => match never {},
        }
    }
}

impl From<UnitSystem> for String {
    fn from(units: UnitSystem) -> String {
        units.to_string()
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Uk => "uk",
        };
        f.write_str(name)
    }
}

/// Values reported by the forecast and current-conditions nodes.
///
/// Ids are unique within one node, not across nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    DayOfWeek,
    TempMax,
    TempMin,
    Humidity,
    HumidityMax,
    HumidityMin,
    Pressure,
    Coverage,
    Intensity,
    Weather,
    Clouds,
    WindSpeed,
    GustSpeed,
    Precipitation,
    SnowDepth,
    WindMax,
    WindMin,
    ChanceOfPrecipitation,
    UvIndex,
    Eto,
    Temperature,
    DewPoint,
    HeatIndex,
    WindChill,
    FeelsLike,
    CurrentWindSpeed,
    WindDirection,
    Visibility,
    SolarRadiation,
}

impl Driver {
    pub const DAILY: [Driver; 20] = [
        Driver::DayOfWeek,
        Driver::TempMax,
        Driver::TempMin,
        Driver::Humidity,
        Driver::HumidityMax,
        Driver::HumidityMin,
        Driver::Pressure,
        Driver::Coverage,
        Driver::Intensity,
        Driver::Weather,
        Driver::Clouds,
        Driver::WindSpeed,
        Driver::GustSpeed,
        Driver::Precipitation,
        Driver::SnowDepth,
        Driver::WindMax,
        Driver::WindMin,
        Driver::ChanceOfPrecipitation,
        Driver::UvIndex,
        Driver::Eto,
    ];

    pub const OBSERVATION: [Driver; 17] = [
        Driver::Temperature,
        Driver::Humidity,
        Driver::Pressure,
        Driver::CurrentWindSpeed,
        Driver::GustSpeed,
        Driver::WindDirection,
        Driver::Visibility,
        Driver::Precipitation,
        Driver::DewPoint,
        Driver::HeatIndex,
        Driver::WindChill,
        Driver::FeelsLike,
        Driver::SolarRadiation,
        Driver::Coverage,
        Driver::Intensity,
        Driver::Weather,
        Driver::Clouds,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Driver::DayOfWeek => "GV19",
            Driver::TempMax | Driver::HeatIndex => "GV0",
            Driver::TempMin | Driver::WindChill => "GV1",
            Driver::FeelsLike => "GV2",
            Driver::Humidity => "CLIHUM",
            Driver::HumidityMax => "GV16",
            Driver::HumidityMin => "GV17",
            Driver::Pressure => "BARPRES",
            Driver::Coverage => "GV11",
            Driver::Intensity => "GV12",
            Driver::Weather => "GV13",
            Driver::Clouds => "GV14",
            Driver::WindSpeed => "SPEED",
            Driver::CurrentWindSpeed => "GV4",
            Driver::GustSpeed => "GV5",
            Driver::Precipitation => "GV6",
            Driver::SnowDepth | Driver::Visibility => "GV15",
            Driver::WindMax => "GV7",
            Driver::WindMin => "GV8",
            Driver::ChanceOfPrecipitation => "GV18",
            Driver::UvIndex => "UV",
            Driver::Eto => "GV20",
            Driver::Temperature => "CLITEMP",
            Driver::DewPoint => "DEWPT",
            Driver::WindDirection => "WINDDIR",
            Driver::SolarRadiation => "SOLRAD",
        }
    }
}

/// Unit of measure id of `driver` when reporting in `units`.
pub fn uom(units: UnitSystem, driver: Driver) -> u16 {
    use UnitSystem::*;

    match driver {
        Driver::TempMax
        | Driver::TempMin
        | Driver::Temperature
        | Driver::DewPoint
        | Driver::HeatIndex
        | Driver::WindChill
        | Driver::FeelsLike => {
            if units.temperature_in_celsius() {
                4 // °C
            } else {
                17 // °F
            }
        }
        Driver::WindSpeed
        | Driver::CurrentWindSpeed
        | Driver::GustSpeed
        | Driver::WindMax
        | Driver::WindMin => {
            if units.wind_in_kph() {
                32 // kph
            } else {
                48 // mph
            }
        }
        Driver::Precipitation => match units {
            Metric => 82, // mm
            Imperial | Uk => 105, // inches
        },
        Driver::SnowDepth => match units {
            Metric | Uk => 82,
            Imperial => 105,
        },
        Driver::Visibility => match units {
            Metric => 83, // km
            Imperial | Uk => 116, // miles
        },
        Driver::Eto => {
            if units.eto_in_mm() {
                106 // mm/day
            } else {
                120 // inches/day
            }
        }
        Driver::Humidity
        | Driver::HumidityMax
        | Driver::HumidityMin
        | Driver::Clouds
        | Driver::ChanceOfPrecipitation => 22, // %
        Driver::Pressure => 117, // mb
        Driver::WindDirection => 76, // degrees
        Driver::SolarRadiation => 74, // W/m^2
        Driver::DayOfWeek
        | Driver::Coverage
        | Driver::Intensity
        | Driver::Weather => 25, // index
        Driver::UvIndex => 71,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unit_systems() {
        let parse = |s: &str| s.parse::<UnitSystem>().unwrap();
        assert_eq!(parse("metric"), UnitSystem::Metric);
        assert_eq!(parse("SI"), UnitSystem::Metric);
        assert_eq!(parse("Metres"), UnitSystem::Metric);
        assert_eq!(parse("uk"), UnitSystem::Uk);
        assert_eq!(parse("imperial"), UnitSystem::Imperial);
        assert_eq!(parse("us"), UnitSystem::Imperial);
        assert_eq!(parse("whatever"), UnitSystem::Imperial);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let units: UnitSystem = serde_json::from_str("\"Metric\"").unwrap();
        assert_eq!(units, UnitSystem::Metric);
        assert_eq!(serde_json::to_string(&UnitSystem::Uk).unwrap(), "\"uk\"");
    }

    #[test]
    fn driver_ids_are_unique_per_node() {
        for drivers in [&Driver::DAILY[..], &Driver::OBSERVATION[..]] {
            let mut ids: Vec<&str> = drivers.iter().map(|d| d.id()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), drivers.len());
        }
        assert_eq!(Driver::HeatIndex.id(), Driver::TempMax.id());
    }

    #[test]
    fn uom_table() {
        assert_eq!(uom(UnitSystem::Metric, Driver::TempMax), 4);
        assert_eq!(uom(UnitSystem::Imperial, Driver::TempMin), 17);
        assert_eq!(uom(UnitSystem::Uk, Driver::TempMax), 4);
        assert_eq!(uom(UnitSystem::Metric, Driver::WindSpeed), 32);
        assert_eq!(uom(UnitSystem::Uk, Driver::GustSpeed), 48);
        assert_eq!(uom(UnitSystem::Uk, Driver::Precipitation), 105);
        assert_eq!(uom(UnitSystem::Uk, Driver::SnowDepth), 82);
        assert_eq!(uom(UnitSystem::Metric, Driver::Eto), 106);
        assert_eq!(uom(UnitSystem::Imperial, Driver::Eto), 120);
        assert_eq!(uom(UnitSystem::Imperial, Driver::DewPoint), 17);
        assert_eq!(uom(UnitSystem::Uk, Driver::FeelsLike), 4);
        assert_eq!(uom(UnitSystem::Metric, Driver::CurrentWindSpeed), 32);
        assert_eq!(uom(UnitSystem::Metric, Driver::Visibility), 83);
        assert_eq!(uom(UnitSystem::Uk, Driver::Visibility), 116);
        let all = [UnitSystem::Metric, UnitSystem::Imperial, UnitSystem::Uk];
        for units in all {
            assert_eq!(uom(units, Driver::WindDirection), 76);
            assert_eq!(uom(units, Driver::SolarRadiation), 74);
            assert_eq!(uom(units, Driver::Pressure), 117);
            assert_eq!(uom(units, Driver::Weather), 25);
            assert_eq!(uom(units, Driver::Humidity), 22);
        }
    }
}
