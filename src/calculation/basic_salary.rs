//! Basic salary calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee};

/// The result of calculating basic salary, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct BasicSalaryResult {
    /// Wage multiplied by working days.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates basic salary as `wage × working_days`.
///
/// No rounding is applied beyond standard decimal arithmetic.
///
/// # Errors
///
/// Returns `InvalidEmployee` if the wage is negative or the product does not
/// fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use business_rules::calculation::calculate_basic_salary;
/// use business_rules::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     wage: Decimal::new(50, 0),
///     working_days: 20,
///     ..Default::default()
/// };
///
/// let result = calculate_basic_salary(&employee, 1)?;
/// assert_eq!(result.amount, Decimal::new(1000, 0));
/// # Ok::<(), business_rules::error::EngineError>(())
/// ```
pub fn calculate_basic_salary(
    employee: &Employee,
    step_number: u32,
) -> EngineResult<BasicSalaryResult> {
    employee.validate()?;

    let days = Decimal::from(employee.working_days);
    let amount = employee
        .wage
        .checked_mul(days)
        .ok_or_else(|| EngineError::InvalidEmployee {
            field: "wage".to_string(),
            message: format!(
                "{} x {} working days overflows",
                employee.wage, employee.working_days
            ),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "basic_salary".to_string(),
        rule_name: "Basic Salary".to_string(),
        input: serde_json::json!({
            "wage": employee.wage.normalize().to_string(),
            "working_days": employee.working_days
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            employee.wage.normalize(),
            employee.working_days,
            amount.normalize()
        ),
    };

    Ok(BasicSalaryResult { amount, audit_step })
}
