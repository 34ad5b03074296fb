//! Business rules for payroll and support tickets.
//!
//! This crate provides two independent rule sets: salary component
//! calculation (basic salary, transportation allowance and danger pay) and
//! support ticket key generation.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod zones;
