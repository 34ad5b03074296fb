//! Employee model and related types.
//!
//! This module defines the Employee struct and WorkPlatform enum
//! used as input to the salary rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Where an employee performs their work.
///
/// The platform drives the transportation allowance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPlatform {
    /// Works from the office every day.
    #[default]
    Office,
    /// Works entirely remotely.
    Remote,
    /// Splits time between office and remote.
    Hybrid,
}

impl WorkPlatform {
    /// Returns the snake_case name used in configuration and audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkPlatform::Office => "office",
            WorkPlatform::Remote => "remote",
            WorkPlatform::Hybrid => "hybrid",
        }
    }
}

/// Represents an employee for a single salary calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The daily wage.
    pub wage: Decimal,
    /// The number of days worked in the period.
    pub working_days: u32,
    /// Where the employee works.
    #[serde(default)]
    pub work_platform: WorkPlatform,
    /// Explicit danger flag; when set, danger pay applies regardless of location.
    #[serde(default)]
    pub is_danger: bool,
    /// The named location the employee is assigned to.
    #[serde(default)]
    pub duty_station: String,
}

impl Employee {
    /// Checks the record invariants.
    ///
    /// Returns `InvalidEmployee` if the wage is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use business_rules::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     wage: Decimal::new(-1, 0),
    ///     ..Default::default()
    /// };
    /// assert!(employee.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.wage.is_sign_negative() && !self.wage.is_zero() {
            return Err(EngineError::InvalidEmployee {
                field: "wage".to_string(),
                message: format!("cannot be negative (got {})", self.wage),
            });
        }
        Ok(())
    }
}
