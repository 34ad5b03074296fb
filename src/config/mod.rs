//! Configuration loading for the salary rules.
//!
//! This module loads pay rates and the danger zone list from YAML files.
//! When no configuration is loaded, [`PayRates::default`] supplies the
//! process-wide constants.
//!
//! # Example
//!
//! ```no_run
//! use business_rules::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Transportation allowance: {}", config.rates().transportation_allowance);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayRates, ZonesConfig};
