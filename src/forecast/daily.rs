use chrono::{DateTime, Datelike, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::codes::CodedWeather;
use super::uom::{uom, Driver, UnitSystem};
use super::{find, round_to, ForecastError, Reading};
use crate::config::SiteConfig;
use crate::pet::penman_monteith::{compute_eto, EToInput};
use crate::units::{f_to_c, kph_to_ms, mm_to_inch, mph_to_ms};

/// One forecast day, with values in the site's unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub timestamp: i64, // unix seconds
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity_max: f64,
    pub humidity_min: f64,
    pub pressure: f64,
    pub sky: f64,
    pub wind_speed: f64,
    pub gust_speed: f64,
    pub precipitation: f64,
    pub wind_max: f64,
    pub wind_min: f64,
    #[serde(default)]
    pub snow: Option<f64>,
    pub uv_index: f64,
    pub pop: f64,
    pub weather_coded: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub day_of_year: u32,
    pub eto_mm: Option<f64>,
    pub readings: Vec<Reading>,
}

impl DailyReport {
    pub fn get(&self, driver: Driver) -> Option<f64> {
        self.reading(driver).map(|r| r.value)
    }

    pub fn reading(&self, driver: Driver) -> Option<&Reading> {
        find(&self.readings, driver)
    }
}

/// ETo (mm/day) for a forecast day without solar radiation.
pub fn forecast_eto(
    forecast: &DailyForecast,
    day_of_year: u32,
    site: &SiteConfig,
) -> f64 {
    let (temp_max, temp_min) = if site.units.temperature_in_celsius() {
        (forecast.temp_max, forecast.temp_min)
    } else {
        info!("converting temperatures from Fahrenheit for ETo");
        (f_to_c(forecast.temp_max), f_to_c(forecast.temp_min))
    };
    let wind_speed = if site.units.wind_in_kph() {
        kph_to_ms(forecast.wind_speed)
    } else {
        mph_to_ms(forecast.wind_speed)
    };

    compute_eto(&EToInput {
        temp_max,
        temp_min,
        solar_radiation: None,
        wind_speed,
        elevation: site.elevation,
        humidity_max: forecast.humidity_max,
        humidity_min: forecast.humidity_min,
        latitude: site.latitude,
        canopy_coefficient: site.plant_type,
        day_of_year,
        mean_temp: None,
    })
}

/// Driver readings of a forecast day.
///
/// A non-finite ETo is left out of the report.
pub fn daily_report(
    forecast: &DailyForecast,
    site: &SiteConfig,
) -> Result<DailyReport, ForecastError> {
    let date: DateTime<Utc> = DateTime::from_timestamp(forecast.timestamp, 0)
        .ok_or(ForecastError::InvalidTimestamp(forecast.timestamp))?;
    let coded = CodedWeather::parse(&forecast.weather_coded)?;
    let units = site.units;
    debug!("forecast for {date}, coded weather {}", forecast.weather_coded);

    let mut readings = Vec::with_capacity(Driver::DAILY.len());
    let mut push = |driver: Driver, value: f64, precision: i32| {
        readings.push(Reading {
            driver,
            value: round_to(value, precision),
            uom: uom(units, driver),
        })
    };

    push(
        Driver::DayOfWeek,
        date.weekday().num_days_from_sunday() as f64,
        0,
    );
    push(Driver::TempMax, forecast.temp_max, 1);
    push(Driver::TempMin, forecast.temp_min, 1);
    push(
        Driver::Humidity,
        (forecast.humidity_max + forecast.humidity_min) / 2.,
        1,
    );
    push(Driver::HumidityMax, forecast.humidity_max, 0);
    push(Driver::HumidityMin, forecast.humidity_min, 0);
    push(Driver::Pressure, forecast.pressure, 1);
    push(Driver::Coverage, coded.coverage as f64, 0);
    push(Driver::Intensity, coded.intensity as f64, 0);
    push(Driver::Weather, coded.weather as f64, 0);
    push(Driver::Clouds, forecast.sky, 0);
    push(Driver::WindSpeed, forecast.wind_speed, 1);
    push(Driver::GustSpeed, forecast.gust_speed, 1);
    push(Driver::Precipitation, forecast.precipitation, 1);
    if let Some(snow) = forecast.snow {
        // metric snowfall comes in cm
        let snow = if units == UnitSystem::Metric { snow * 10. } else { snow };
        push(Driver::SnowDepth, snow, 2);
    }
    push(Driver::WindMax, forecast.wind_max, 1);
    push(Driver::WindMin, forecast.wind_min, 1);
    push(Driver::ChanceOfPrecipitation, forecast.pop, 1);
    push(Driver::UvIndex, forecast.uv_index, 1);

    let day_of_year = date.ordinal();
    let eto = forecast_eto(forecast, day_of_year, site);
    let eto_mm = if eto.is_finite() {
        info!("ETo = {:.3} mm/day ({:.4} in/day)", eto, mm_to_inch(eto));
        if units.eto_in_mm() {
            push(Driver::Eto, eto, 2);
        } else {
            push(Driver::Eto, mm_to_inch(eto), 3);
        }
        Some(eto)
    } else {
        warn!(
            "unable to compute ETo for day {day_of_year} of {date}, got {eto}"
        );
        None
    };

    Ok(DailyReport {
        day_of_year,
        eto_mm,
        readings,
    })
}
