//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary rule
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::SalarySlipProcessor;
use crate::error::{EngineError, EngineResult};
use crate::zones::DangerZoneRegistry;

use super::types::{PayRates, ZonesConfig};

/// Loads and provides access to salary rule configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── rates.yaml   # Transportation allowance and danger pay amounts
/// └── zones.yaml   # Duty stations classified as danger zones
/// ```
///
/// # Example
///
/// ```no_run
/// use business_rules::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Danger pay: ${}", loader.rates().danger_pay);
///
/// let processor = loader.processor();
/// # Ok::<(), business_rules::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: PayRates,
    zones: DangerZoneRegistry,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<PayRates>(&path.join("rates.yaml"))?;
        let zones_config = Self::load_yaml::<ZonesConfig>(&path.join("zones.yaml"))?;
        let zones = DangerZoneRegistry::new(&zones_config.danger_zones);

        info!(
            path = %path.display(),
            transportation_allowance = %rates.transportation_allowance,
            danger_pay = %rates.danger_pay,
            danger_zones = zones.len(),
            "Loaded salary rule configuration"
        );

        Ok(Self { rates, zones })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the configured pay rates.
    pub fn rates(&self) -> PayRates {
        self.rates
    }

    /// Returns the configured danger zone registry.
    pub fn zone_registry(&self) -> &DangerZoneRegistry {
        &self.zones
    }

    /// Builds a salary slip processor from this configuration.
    pub fn processor(&self) -> SalarySlipProcessor<DangerZoneRegistry> {
        SalarySlipProcessor::with_rates(self.zones.clone(), self.rates)
    }
}
