use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::codes::CodedWeather;
use super::uom::{uom, Driver};
use super::{find, round_to, ForecastError, Reading};
use crate::config::SiteConfig;

/// Current weather at the site, with values in the site's unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: i64, // unix seconds
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64, // mb
    pub wind_speed: f64,
    pub gust_speed: f64,
    pub wind_direction: f64, // degrees
    pub visibility: f64,
    pub precipitation: f64,
    pub dewpoint: f64,
    pub heat_index: f64,
    pub wind_chill: f64,
    pub feels_like: f64,
    /// W/m^2, not every station measures it.
    #[serde(default)]
    pub solar_radiation: Option<f64>,
    pub sky: f64,
    pub weather_coded: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObservationReport {
    pub observed_at: DateTime<Utc>,
    pub readings: Vec<Reading>,
}

impl ObservationReport {
    pub fn get(&self, driver: Driver) -> Option<f64> {
        self.reading(driver).map(|r| r.value)
    }

    pub fn reading(&self, driver: Driver) -> Option<&Reading> {
        find(&self.readings, driver)
    }
}

/// Driver readings of the current conditions.
pub fn observation_report(
    observation: &Observation,
    site: &SiteConfig,
) -> Result<ObservationReport, ForecastError> {
    let observed_at = DateTime::from_timestamp(observation.timestamp, 0)
        .ok_or(ForecastError::InvalidTimestamp(observation.timestamp))?;
    let coded = CodedWeather::parse(&observation.weather_coded)?;
    let units = site.units;
    debug!(
        "observation at {observed_at}, coded weather {}",
        observation.weather_coded
    );

    let mut readings = Vec::with_capacity(Driver::OBSERVATION.len());
    let mut push = |driver: Driver, value: f64, precision: i32| {
        readings.push(Reading {
            driver,
            value: round_to(value, precision),
            uom: uom(units, driver),
        })
    };

    push(Driver::Temperature, observation.temperature, 1);
    push(Driver::Humidity, observation.humidity, 0);
    push(Driver::Pressure, observation.pressure, 1);
    push(Driver::CurrentWindSpeed, observation.wind_speed, 1);
    push(Driver::GustSpeed, observation.gust_speed, 1);
    push(Driver::WindDirection, observation.wind_direction, 0);
    push(Driver::Visibility, observation.visibility, 1);
    push(Driver::Precipitation, observation.precipitation, 2);
    push(Driver::DewPoint, observation.dewpoint, 1);
    push(Driver::HeatIndex, observation.heat_index, 1);
    push(Driver::WindChill, observation.wind_chill, 1);
    push(Driver::FeelsLike, observation.feels_like, 1);
    match observation.solar_radiation {
        Some(watts) => push(Driver::SolarRadiation, watts, 0),
        None => debug!("no solar radiation in the observation"),
    }
    push(Driver::Coverage, coded.coverage as f64, 0);
    push(Driver::Intensity, coded.intensity as f64, 0);
    push(Driver::Weather, coded.weather as f64, 0);
    push(Driver::Clouds, observation.sky, 0);

    info!(
        "{} {units} readings observed at {observed_at}",
        readings.len()
    );

    Ok(ObservationReport {
        observed_at,
        readings,
    })
}
