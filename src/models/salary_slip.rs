//! Salary slip models.
//!
//! This module contains the [`SalarySlip`] type that captures every salary
//! component computed for an employee, plus the [`AuditStep`] records that
//! explain how each component was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single step in the audit trail recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a salary calculation.
///
/// # Example
///
/// ```
/// use business_rules::models::SalarySlip;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let slip = SalarySlip {
///     slip_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     basic_salary: Decimal::new(1000, 0),
///     transportation_allowance: Decimal::new(250, 0),
///     danger_pay: Decimal::ZERO,
///     gross_pay: Decimal::new(1250, 0),
///     audit_steps: vec![],
/// };
/// assert_eq!(slip.components_total(), slip.gross_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySlip {
    /// Unique identifier for this slip.
    pub slip_id: Uuid,
    /// When the slip was calculated.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the slip.
    pub engine_version: String,
    /// Wage multiplied by working days.
    pub basic_salary: Decimal,
    /// Allowance determined by the work platform.
    pub transportation_allowance: Decimal,
    /// Danger pay, if any.
    pub danger_pay: Decimal,
    /// Sum of all components.
    pub gross_pay: Decimal,
    /// Rule decisions in the order they were applied.
    pub audit_steps: Vec<AuditStep>,
}

impl SalarySlip {
    /// Recomputes the sum of the individual components.
    pub fn components_total(&self) -> Decimal {
        self.basic_salary + self.transportation_allowance + self.danger_pay
    }
}
