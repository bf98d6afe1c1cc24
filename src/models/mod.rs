//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod history;
mod pf_applicability;
mod salary_slip;
mod year_month;

pub use audit::{AuditStep, AuditTrace, AuditWarning, SlipComputation};
pub use employee::{AttendanceSummary, EmployeeRecord};
pub use history::{HistoryFilter, PayrollSummary};
pub use pf_applicability::PfApplicability;
pub use salary_slip::{SalarySlip, SalarySlipInput};
pub use year_month::YearMonth;
