//! Default inputs and input limits of the front end.
//!
//! The configuration is a JSON document; every field is optional and falls
//! back to the built-in value when omitted.
use crate::errors::MethanolError;
use crate::operating_point::OperatingPoint;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "methanol_check";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Closed interval of accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub gas_rate: Range,
    pub temperature: Range,
    pub upstream_pressure: Range,
    pub downstream_pressure: Range,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            gas_rate: Range::new(0.0, 1000.0),
            temperature: Range::new(-50.0, 150.0),
            upstream_pressure: Range::new(0.0, 5000.0),
            downstream_pressure: Range::new(0.0, 1500.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: OperatingPoint,
    pub limits: InputLimits,
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self, MethanolError> {
        serde_json::from_str(s).map_err(|e| MethanolError::Config(e.to_string()))
    }

    pub fn read(path: &Path) -> Result<Self, MethanolError> {
        debug!("Reading configuration from {:?}", path);
        let s = std::fs::read_to_string(path)?;
        let config = Config::from_json(&s)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration from `path` if given, else from the user's
    /// configuration directory if that file exists, else the built-in one.
    pub fn load(path: Option<&Path>) -> Result<Self, MethanolError> {
        if let Some(p) = path {
            return Config::read(p);
        }
        match default_config_path() {
            Some(p) if p.is_file() => Config::read(&p),
            _ => {
                info!("No configuration file found, using the built-in defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), MethanolError> {
        let l = &self.limits;
        for (name, r) in &[
            ("gas_rate", l.gas_rate),
            ("temperature", l.temperature),
            ("upstream_pressure", l.upstream_pressure),
            ("downstream_pressure", l.downstream_pressure),
        ] {
            if !(r.min <= r.max) {
                return Err(MethanolError::Config(format!(
                    "Limit [{}] has min [{}] above max [{}]",
                    name, r.min, r.max
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, MethanolError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `<config dir>/methanol_check/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
