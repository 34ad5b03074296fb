//! Salary slip processing.
//!
//! [`SalarySlipProcessor`] is the entry point for the salary rules. It owns the
//! injected zone classifier and the pay rates, checks that an employee was
//! supplied, and delegates to the individual rule functions.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PayRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, SalarySlip};
use crate::zones::ZoneClassifier;

use super::basic_salary::calculate_basic_salary;
use super::danger_pay::calculate_danger_pay;
use super::transportation_allowance::calculate_transportation_allowance;

/// Computes salary components for employees.
///
/// Every calculation takes an `Option<&Employee>` and fails with
/// `MissingArgument` when it is `None`, before any rule is evaluated.
///
/// # Example
///
/// ```
/// use business_rules::calculation::SalarySlipProcessor;
/// use business_rules::models::{Employee, WorkPlatform};
/// use rust_decimal::Decimal;
///
/// let processor = SalarySlipProcessor::new(|station: &str| station == "Juba");
/// let employee = Employee {
///     wage: Decimal::new(50, 0),
///     working_days: 20,
///     work_platform: WorkPlatform::Remote,
///     duty_station: "Juba".to_string(),
///     ..Default::default()
/// };
///
/// assert_eq!(processor.calculate_basic_salary(Some(&employee))?, Decimal::new(1000, 0));
/// assert_eq!(processor.calculate_transportation_allowance(Some(&employee))?, Decimal::ZERO);
/// assert_eq!(processor.calculate_danger_pay(Some(&employee))?, Decimal::new(1000, 0));
/// # Ok::<(), business_rules::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SalarySlipProcessor<Z> {
    zones: Z,
    rates: PayRates,
}

impl<Z: ZoneClassifier> SalarySlipProcessor<Z> {
    /// Creates a processor using the default pay rates.
    pub fn new(zones: Z) -> Self {
        Self::with_rates(zones, PayRates::default())
    }

    /// Creates a processor with explicit pay rates.
    pub fn with_rates(zones: Z, rates: PayRates) -> Self {
        Self { zones, rates }
    }

    /// Returns the injected zone classifier.
    pub fn zones(&self) -> &Z {
        &self.zones
    }

    /// Returns the pay rates in use.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }

    /// Returns wage multiplied by working days.
    pub fn calculate_basic_salary(&self, employee: Option<&Employee>) -> EngineResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_basic_salary(employee, 1)?.amount)
    }

    /// Returns the transportation allowance for the employee's work platform.
    pub fn calculate_transportation_allowance(
        &self,
        employee: Option<&Employee>,
    ) -> EngineResult<Decimal> {
        let employee = require(employee)?;
        Ok(
            calculate_transportation_allowance(employee, self.rates.transportation_allowance, 1)
                .amount,
        )
    }

    /// Returns danger pay, consulting the zone classifier only for unflagged employees.
    pub fn calculate_danger_pay(&self, employee: Option<&Employee>) -> EngineResult<Decimal> {
        let employee = require(employee)?;
        Ok(calculate_danger_pay(employee, &self.zones, self.rates.danger_pay, 1).amount)
    }

    /// Runs every salary rule and returns the full slip with its audit trail.
    pub fn calculate_salary_slip(&self, employee: Option<&Employee>) -> EngineResult<SalarySlip> {
        let employee = require(employee)?;
        let start_time = Instant::now();

        let basic = calculate_basic_salary(employee, 1)?;
        let transportation =
            calculate_transportation_allowance(employee, self.rates.transportation_allowance, 2);
        let danger = calculate_danger_pay(employee, &self.zones, self.rates.danger_pay, 3);

        let gross_pay = basic
            .amount
            .checked_add(transportation.amount)
            .and_then(|subtotal| subtotal.checked_add(danger.amount))
            .ok_or_else(|| {
                warn!(basic_salary = %basic.amount, "Gross pay overflowed");
                EngineError::InvalidEmployee {
                    field: "wage".to_string(),
                    message: "gross pay overflows".to_string(),
                }
            })?;

        let slip = SalarySlip {
            slip_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            basic_salary: basic.amount,
            transportation_allowance: transportation.amount,
            danger_pay: danger.amount,
            gross_pay,
            audit_steps: vec![basic.audit_step, transportation.audit_step, danger.audit_step],
        };

        info!(
            slip_id = %slip.slip_id,
            gross_pay = %slip.gross_pay,
            duration_us = start_time.elapsed().as_micros(),
            "Salary slip calculated"
        );

        Ok(slip)
    }
}

fn require(employee: Option<&Employee>) -> EngineResult<&Employee> {
    employee.ok_or_else(|| {
        warn!("Salary calculation requested without an employee");
        EngineError::missing("employee")
    })
}
