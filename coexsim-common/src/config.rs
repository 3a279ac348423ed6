//! Antenna parameter objects
//!
//! This module provides the configuration record that simulation drivers hand
//! to antenna pattern implementations.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Antenna radiation pattern selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum AntennaPatternKind {
    /// ITU-R RS.1861 Figure 9c, EESS sensor antenna for 23.6-24 GHz (sensor type F4)
    #[default]
    #[serde(rename = "ITU-R RS.1861 Figure 9c", alias = "rs1861_fig9c")]
    Rs1861Fig9c,
}

impl fmt::Display for AntennaPatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntennaPatternKind::Rs1861Fig9c => write!(f, "ITU-R RS.1861 Figure 9c"),
        }
    }
}

/// Antenna configuration.
///
/// Only `peak_gain` feeds the gain computation. The remaining fields describe
/// the station the pattern belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaConfig {
    /// Radiation pattern to build
    #[serde(default)]
    pub pattern: AntennaPatternKind,
    /// Center frequency in MHz
    #[serde(default = "default_frequency_mhz")]
    pub frequency_mhz: f64,
    /// Peak (boresight) gain G_m in dBi
    #[serde(alias = "antenna_gain")]
    pub peak_gain: f64,
}

fn default_frequency_mhz() -> f64 {
    23_800.0
}

impl AntennaConfig {
    /// Creates an RS.1861 Figure 9c configuration at 23.8 GHz.
    ///
    /// # Arguments
    /// * `peak_gain` - Boresight gain in dBi
    pub fn rs1861_fig9c(peak_gain: f64) -> Self {
        Self {
            pattern: AntennaPatternKind::Rs1861Fig9c,
            frequency_mhz: default_frequency_mhz(),
            peak_gain,
        }
    }

    /// Sets the center frequency.
    pub fn with_frequency_mhz(mut self, frequency_mhz: f64) -> Self {
        self.frequency_mhz = frequency_mhz;
        self
    }

    /// Checks that the numeric fields are usable.
    ///
    /// # Returns
    /// * `Ok(())` - Peak gain is finite and frequency is positive
    /// * `Err(Error::Config)` - Otherwise
    pub fn validate(&self) -> Result<(), Error> {
        if !self.peak_gain.is_finite() {
            return Err(Error::Config(format!(
                "peak_gain must be a finite number, got {}",
                self.peak_gain
            )));
        }
        if !(self.frequency_mhz.is_finite() && self.frequency_mhz > 0.0) {
            return Err(Error::Config(format!(
                "frequency_mhz must be positive, got {}",
                self.frequency_mhz
            )));
        }
        Ok(())
    }

    /// Parses an antenna configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use coexsim_common::{AntennaConfig, AntennaPatternKind};
    ///
    /// let yaml = r#"
    /// pattern: ITU-R RS.1861 Figure 9c
    /// frequency_mhz: 23800
    /// antenna_gain: 50
    /// "#;
    ///
    /// let config = AntennaConfig::from_yaml(yaml).unwrap();
    /// assert_eq!(config.pattern, AntennaPatternKind::Rs1861Fig9c);
    /// assert_eq!(config.peak_gain, 50.0);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads an antenna configuration from a YAML file.
    ///
    /// # Example
    /// ```no_run
    /// use coexsim_common::AntennaConfig;
    ///
    /// let config = AntennaConfig::from_yaml_file("config/eess_sensor.yaml").unwrap();
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }
}
