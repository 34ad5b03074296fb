//! Danger pay calculation.
//!
//! Danger pay is a fixed amount paid either because the employee is flagged
//! as working in danger, or because their duty station is classified as a
//! danger zone. The explicit flag always wins and skips the zone lookup.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AuditStep, Employee};
use crate::zones::ZoneClassifier;

/// The fixed danger pay amount.
pub const DEFAULT_DANGER_PAY: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// The result of calculating danger pay.
#[derive(Debug, Clone)]
pub struct DangerPayResult {
    /// The danger pay amount, zero when not eligible.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates danger pay for an employee.
///
/// If `employee.is_danger` is set, `danger_pay` is returned without consulting
/// `zones`. Otherwise the duty station is looked up once and `danger_pay` is
/// returned if it is a danger zone, zero if not.
///
/// # Examples
///
/// ```
/// use business_rules::calculation::calculate_danger_pay;
/// use business_rules::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     duty_station: "Juba".to_string(),
///     ..Default::default()
/// };
/// let zones = |station: &str| station == "Juba";
///
/// let result = calculate_danger_pay(&employee, &zones, Decimal::new(1000, 0), 1);
/// assert_eq!(result.amount, Decimal::new(1000, 0));
/// ```
pub fn calculate_danger_pay<Z: ZoneClassifier + ?Sized>(
    employee: &Employee,
    zones: &Z,
    danger_pay: Decimal,
    step_number: u32,
) -> DangerPayResult {
    let (eligible, in_danger_zone, reasoning) = if employee.is_danger {
        (
            true,
            None,
            "Employee is flagged as working in danger".to_string(),
        )
    } else {
        let in_zone = zones.is_danger_zone(&employee.duty_station);
        debug!(
            duty_station = %employee.duty_station,
            in_danger_zone = in_zone,
            "Classified duty station"
        );
        let reasoning = if in_zone {
            format!("Duty station '{}' is a danger zone", employee.duty_station)
        } else {
            format!("Duty station '{}' is not a danger zone", employee.duty_station)
        };
        (in_zone, Some(in_zone), reasoning)
    };

    let amount = if eligible { danger_pay } else { Decimal::ZERO };

    let audit_step = AuditStep {
        step_number,
        rule_id: "danger_pay".to_string(),
        rule_name: "Danger Pay".to_string(),
        input: serde_json::json!({
            "is_danger": employee.is_danger,
            "duty_station": employee.duty_station,
            "danger_pay": danger_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible": eligible,
            "in_danger_zone": in_danger_zone,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    DangerPayResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::DangerZoneRegistry;
    use proptest::prelude::*;
    use std::cell::Cell;

    /// Classifier double that records how often it was consulted.
    struct CountingClassifier {
        answer: bool,
        calls: Cell<u32>,
    }

    impl CountingClassifier {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl ZoneClassifier for CountingClassifier {
        fn is_danger_zone(&self, _station: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }
    }

    fn create_test_employee(is_danger: bool, duty_station: &str) -> Employee {
        Employee {
            is_danger,
            duty_station: duty_station.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_flagged_employee_gets_danger_pay_without_lookup() {
        let employee = create_test_employee(true, "Amman");
        let zones = CountingClassifier::new(false);

        let result = calculate_danger_pay(&employee, &zones, DEFAULT_DANGER_PAY, 1);

        assert_eq!(result.amount, DEFAULT_DANGER_PAY);
        assert_eq!(zones.calls.get(), 0);
        assert!(result.audit_step.output["in_danger_zone"].is_null());
        assert!(result.audit_step.output["eligible"].as_bool().unwrap());
    }

    #[test]
    fn test_unflagged_employee_in_danger_zone() {
        let employee = create_test_employee(false, "Juba");
        let zones = CountingClassifier::new(true);

        let result = calculate_danger_pay(&employee, &zones, DEFAULT_DANGER_PAY, 1);

        assert_eq!(result.amount, DEFAULT_DANGER_PAY);
        assert_eq!(zones.calls.get(), 1);
        assert!(result.audit_step.reasoning.contains("is a danger zone"));
    }

    #[test]
    fn test_unflagged_employee_outside_danger_zone() {
        let employee = create_test_employee(false, "Amman");
        let zones = CountingClassifier::new(false);

        let result = calculate_danger_pay(&employee, &zones, DEFAULT_DANGER_PAY, 1);

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(zones.calls.get(), 1);
        assert!(!result.audit_step.output["eligible"].as_bool().unwrap());
        assert!(result.audit_step.reasoning.contains("is not a danger zone"));
    }

    #[test]
    fn test_lookup_receives_duty_station() {
        let employee = create_test_employee(false, "Mogadishu");
        let zones = |station: &str| station == "Mogadishu";

        let result = calculate_danger_pay(&employee, &zones, DEFAULT_DANGER_PAY, 1);
        assert_eq!(result.amount, DEFAULT_DANGER_PAY);
    }

    #[test]
    fn test_works_with_registry() {
        let registry = DangerZoneRegistry::new(["Kabul"]);

        let inside = create_test_employee(false, "kabul");
        let outside = create_test_employee(false, "Oslo");

        assert_eq!(
            calculate_danger_pay(&inside, &registry, DEFAULT_DANGER_PAY, 1).amount,
            DEFAULT_DANGER_PAY
        );
        assert_eq!(
            calculate_danger_pay(&outside, &registry, DEFAULT_DANGER_PAY, 1).amount,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_default_danger_pay_value() {
        assert_eq!(DEFAULT_DANGER_PAY, Decimal::new(1000, 0));
    }

    proptest! {
        #[test]
        fn prop_flag_always_wins(station in ".*", answer in any::<bool>()) {
            let employee = create_test_employee(true, &station);
            let zones = CountingClassifier::new(answer);

            let result = calculate_danger_pay(&employee, &zones, DEFAULT_DANGER_PAY, 1);

            prop_assert_eq!(result.amount, DEFAULT_DANGER_PAY);
            prop_assert_eq!(zones.calls.get(), 0);
        }

        #[test]
        fn prop_unflagged_follows_classifier(station in ".*", answer in any::<bool>()) {
            let employee = create_test_employee(false, &station);
            let zones = CountingClassifier::new(answer);

            let result = calculate_danger_pay(&employee, &zones, DEFAULT_DANGER_PAY, 1);

            let expected = if answer { DEFAULT_DANGER_PAY } else { Decimal::ZERO };
            prop_assert_eq!(result.amount, expected);
            prop_assert_eq!(zones.calls.get(), 1);
        }
    }
}
