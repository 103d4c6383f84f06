//! Configuration types for loading simulation settings from YAML.
//!
//! - [`ParametersConfig`] – physical constants and the tick length
//! - [`CentralConfig`]    – the star every run is built around
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 6.673e-11            # gravitational constant
//!   seconds_per_tick: 86400 # physical seconds integrated per tick
//!   min_distance: 1.0       # pairs closer than this are skipped
//!
//! central:
//!   mass: 1.989e30          # kg
//! ```
//!
//! Every field is optional; missing ones take the built-in defaults.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::{GRAVITATIONAL_CONSTANT, SECONDS_PER_DAY};

/// Mass of the Sun in kg
pub const SOLAR_MASS: f64 = 1.989e30;

#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,                // gravitational constant
    pub seconds_per_tick: f64, // physical seconds per tick
    pub min_distance: f64,     // close-pair cutoff in metres
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            seconds_per_tick: SECONDS_PER_DAY,
            min_distance: 1.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CentralConfig {
    pub mass: f64, // kg
}

impl Default for CentralConfig {
    fn default() -> Self {
        Self { mass: SOLAR_MASS }
    }
}

/// Top-level configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub central: CentralConfig,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SimError> {
        serde_yaml::from_reader(reader).map_err(SimError::ConfigParse)
    }

    pub fn load(path: &Path) -> Result<Self, SimError> {
        let file = File::open(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}
