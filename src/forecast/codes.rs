use super::ForecastError;

const UNKNOWN_PRECIPITATION: u8 = 22;
const MODERATE: u8 = 0;
const UNKNOWN_COVERAGE: u8 = 16;

pub fn weather_code(code: &str) -> u8 {
    match code {
        "A" => 0,   // hail
        "BD" => 1,  // blowing dust
        "BN" => 2,  // blowing sand
        "BR" => 3,  // mist
        "BS" => 4,  // blowing snow
        "BY" => 5,  // blowing spray
        "F" => 6,   // fog
        "FR" => 7,  // frost
        "H" => 8,   // haze
        "IC" => 9,  // ice crystals
        "IF" => 10, // ice fog
        "IP" => 11, // ice pellets / sleet
        "K" => 12,  // smoke
        "L" => 13,  // drizzle
        "R" => 14,  // rain
        "RW" => 15, // rain showers
        "RS" => 16, // rain/snow mix
        "SI" => 17, // snow/sleet mix
        "WM" => 18, // wintry mix
        "S" => 19,  // snow
        "SW" => 20, // snow showers
        "T" => 21,  // thunderstorms
        "VA" => 23, // volcanic ash
        "WP" => 24, // waterspouts
        "ZF" => 25, // freezing fog
        "ZL" => 26, // freezing drizzle
        "ZR" => 27, // freezing rain
        "ZY" => 28, // freezing spray
        "CL" => 29, // clear
        "FW" => 30, // fair
        "SC" => 31, // partly cloudy
        "BK" => 32, // mostly cloudy
        "OV" => 33, // overcast
        _ => UNKNOWN_PRECIPITATION,
    }
}

pub fn intensity_code(code: &str) -> u8 {
    match code {
        "VL" => 1,
        "L" => 2,
        "H" => 3,
        "VH" => 4,
        _ => MODERATE,
    }
}

pub fn coverage_code(code: &str) -> u8 {
    match code {
        "AR" => 0,  // areas of
        "BR" => 1,  // brief
        "C" => 2,   // chance of
        "D" => 3,   // definite
        "FQ" => 4,  // frequent
        "IN" => 5,  // intermittent
        "IS" => 6,  // isolated
        "L" => 7,   // likely
        "NM" => 8,  // numerous
        "O" => 9,   // occasional
        "PA" => 10, // patchy
        "PD" => 11, // periods of
        "S" => 12,  // slight chance
        "SC" => 13, // scattered
        "VC" => 14, // in the vicinity
        "WD" => 15, // widespread
        _ => UNKNOWN_COVERAGE,
    }
}

/// Indices decoded from a "coverage:intensity:weather" string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodedWeather {
    pub coverage: u8,
    pub intensity: u8,
    pub weather: u8,
}

impl CodedWeather {
    pub fn parse(coded: &str) -> Result<Self, ForecastError> {
        let mut parts = coded.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(coverage), Some(intensity), Some(weather)) => {
                Ok(CodedWeather {
                    coverage: coverage_code(coverage),
                    intensity: intensity_code(intensity),
                    weather: weather_code(weather),
                })
            }
            _ => Err(ForecastError::MalformedWeatherCode(coded.to_string())),
        }
    }
}
