//! Translation of daily forecasts and current observations into node driver
//! readings.

pub mod codes;
pub mod conditions;
pub mod daily;
pub mod uom;

use thiserror::Error;

use uom::Driver;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("invalid forecast timestamp {0}")]
    InvalidTimestamp(i64),
    #[error("expected 'coverage:intensity:weather', got '{0}'")]
    MalformedWeatherCode(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub driver: Driver,
    pub value: f64,
    pub uom: u16,
}

fn find(readings: &[Reading], driver: Driver) -> Option<&Reading> {
    readings.iter().find(|r| r.driver == driver)
}

fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round() / factor
}
