//! Configuration loading
//!
//! The config file is compiled into the image and already validated by
//! build.rs; parsing it again at boot only guards against the two
//! readers disagreeing.

use defmt::*;
use dhtstat_core::config::{parse_config, ThermostatConfig};

/// Embedded configuration (compiled into firmware)
/// Edit thermostat.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../thermostat.toml");

/// Parse the embedded config, falling back to defaults on error
pub fn load() -> ThermostatConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Configuration loaded: {}", config);
            config
        }
        Err(e) => {
            warn!("thermostat.toml rejected ({}), using defaults", e);
            ThermostatConfig::default()
        }
    }
}
