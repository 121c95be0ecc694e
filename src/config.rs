use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forecast::uom::UnitSystem;
use crate::pet::penman_monteith::Site;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn default_plant_type() -> f64 {
    0.23
}

/// Location of the forecast and the surface ETo is computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub latitude: f64, // degrees
    #[serde(default)]
    pub longitude: f64, // degrees
    #[serde(default)]
    pub elevation: f64, // m
    /// Canopy coefficient of the surface, 0.23 for reference grass.
    #[serde(default = "default_plant_type")]
    pub plant_type: f64,
    #[serde(default)]
    pub units: UnitSystem,
}

impl SiteConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(s)?;
        config.validate()?;
        info!(
            "site at ({}, {}), {} m, plant type {}, {} units",
            config.latitude,
            config.longitude,
            config.elevation,
            config.plant_type,
            config.units
        );
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("latitude", self.latitude, -90., 90.)?;
        check_range("longitude", self.longitude, -180., 180.)?;
        check_range("plant_type", self.plant_type, 0., 1.)?;
        if !self.elevation.is_finite() {
            return Err(ConfigError::Invalid {
                field: "elevation",
                reason: format!("{} is not finite", self.elevation),
            });
        }
        Ok(())
    }

    pub fn site(&self) -> Site {
        Site {
            elevation: self.elevation,
            latitude: self.latitude,
            canopy_coefficient: self.plant_type,
        }
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is outside [{min}, {max}]"),
        })
    }
}
