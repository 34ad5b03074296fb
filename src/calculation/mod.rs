//! Calculation logic for the salary rules.
//!
//! This module contains the individual rule functions for basic salary,
//! transportation allowance and danger pay, and the [`SalarySlipProcessor`]
//! that applies them to an employee.

mod basic_salary;
mod danger_pay;
mod salary_slip;
mod transportation_allowance;

pub use basic_salary::{BasicSalaryResult, calculate_basic_salary};
pub use danger_pay::{DEFAULT_DANGER_PAY, DangerPayResult, calculate_danger_pay};
pub use salary_slip::SalarySlipProcessor;
pub use transportation_allowance::{
    DEFAULT_TRANSPORTATION_ALLOWANCE, TransportationAllowanceResult,
    calculate_transportation_allowance, platform_share,
};
