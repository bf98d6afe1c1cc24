//! Salary slip normalization engine.
//!
//! This crate turns a partially-populated monthly payroll record into a
//! fully-resolved salary slip: provident fund, professional tax, per-day pay,
//! loss-of-pay deduction, the basic/HRA/fuel allowance split, gross and net
//! salary, and leave-balance defaults, all under a configurable
//! compensation policy.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
