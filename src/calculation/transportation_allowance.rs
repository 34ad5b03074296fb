//! Transportation allowance calculation.
//!
//! The allowance depends only on the employee's work platform: office workers
//! receive the full amount, hybrid workers half, and remote workers nothing.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Employee, WorkPlatform};

/// The full transportation allowance paid to office workers.
pub const DEFAULT_TRANSPORTATION_ALLOWANCE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// The result of calculating transportation allowance.
#[derive(Debug, Clone)]
pub struct TransportationAllowanceResult {
    /// The allowance amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the share of the full allowance a work platform earns.
pub fn platform_share(platform: WorkPlatform) -> Decimal {
    match platform {
        WorkPlatform::Office => Decimal::ONE,
        WorkPlatform::Hybrid => Decimal::new(5, 1),
        WorkPlatform::Remote => Decimal::ZERO,
    }
}

/// Calculates the transportation allowance for an employee.
///
/// # Arguments
///
/// * `employee` - The employee to calculate the allowance for
/// * `full_allowance` - The amount paid to office workers
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use business_rules::calculation::calculate_transportation_allowance;
/// use business_rules::models::{Employee, WorkPlatform};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     work_platform: WorkPlatform::Hybrid,
///     ..Default::default()
/// };
///
/// let result = calculate_transportation_allowance(&employee, Decimal::new(500, 0), 1);
/// assert_eq!(result.amount, Decimal::new(250, 0));
/// ```
pub fn calculate_transportation_allowance(
    employee: &Employee,
    full_allowance: Decimal,
    step_number: u32,
) -> TransportationAllowanceResult {
    let platform = employee.work_platform;
    let amount = full_allowance * platform_share(platform);

    let reasoning = match platform {
        WorkPlatform::Office => {
            format!("Office worker receives full allowance ${}", amount.normalize())
        }
        WorkPlatform::Hybrid => format!(
            "Hybrid worker receives half of ${} = ${}",
            full_allowance.normalize(),
            amount.normalize()
        ),
        WorkPlatform::Remote => "Remote worker receives no transportation allowance".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "transportation_allowance".to_string(),
        rule_name: "Transportation Allowance".to_string(),
        input: serde_json::json!({
            "work_platform": platform.as_str(),
            "full_allowance": full_allowance.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    TransportationAllowanceResult { amount, audit_step }
}
