//! Core data models for the business rules engine.
//!
//! This module contains the employee and issue inputs and the salary slip output.

mod employee;
mod issue;
mod salary_slip;

pub use employee::{Employee, WorkPlatform};
pub use issue::{Category, Issue, IssueDraft, Priority};
pub use salary_slip::{AuditStep, SalarySlip};
