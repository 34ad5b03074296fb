//! Configuration types for the salary rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_DANGER_PAY, DEFAULT_TRANSPORTATION_ALLOWANCE};

/// Fixed amounts used by the salary rules.
///
/// Loaded from `rates.yaml`. Any field left out falls back to the
/// process-wide default constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayRates {
    /// The full transportation allowance paid to office workers.
    #[serde(default = "default_transportation_allowance")]
    pub transportation_allowance: Decimal,
    /// The fixed danger pay amount.
    #[serde(default = "default_danger_pay")]
    pub danger_pay: Decimal,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            transportation_allowance: DEFAULT_TRANSPORTATION_ALLOWANCE,
            danger_pay: DEFAULT_DANGER_PAY,
        }
    }
}

fn default_transportation_allowance() -> Decimal {
    DEFAULT_TRANSPORTATION_ALLOWANCE
}

fn default_danger_pay() -> Decimal {
    DEFAULT_DANGER_PAY
}

/// Danger zone configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZonesConfig {
    /// Station names classified as danger zones.
    #[serde(default)]
    pub danger_zones: Vec<String>,
}
