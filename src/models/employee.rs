//! Employee master data and monthly attendance figures.
//!
//! These are the inputs a payroll run starts from when no slip exists yet
//! for the month; see [`crate::calculation::draft_slip`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PfApplicability;

/// Payroll-relevant fields of an employee profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Department name.
    #[serde(default)]
    pub department: String,
    /// Job title.
    #[serde(default)]
    pub designation: String,
    /// Monthly contracted salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_salary: Decimal,
    /// Provident fund flag; absent means applicable.
    #[serde(default)]
    pub pf_applicable: PfApplicability,
    /// Total paid leave entitlement, if overridden for this employee.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_leaves: Option<Decimal>,
    /// Casual leave entitlement, if overridden.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub casual_leaves_total: Option<Decimal>,
    /// Sick leave entitlement, if overridden.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sick_leaves_total: Option<Decimal>,
}

impl EmployeeRecord {
    /// Returns `"First Last"`, trimmed when either part is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::{EmployeeRecord, PfApplicability};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeRecord {
    ///     employee_id: "EMP001".to_string(),
    ///     first_name: "Asha".to_string(),
    ///     last_name: "Rao".to_string(),
    ///     department: "Engineering".to_string(),
    ///     designation: "Developer".to_string(),
    ///     base_salary: Decimal::from(25000),
    ///     pf_applicable: PfApplicability::Applicable,
    ///     total_leaves: None,
    ///     casual_leaves_total: None,
    ///     sick_leaves_total: None,
    /// };
    /// assert_eq!(employee.full_name(), "Asha Rao");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Attendance and pay adjustments for one employee in one month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Days the employee checked in.
    pub days_present: u32,
    /// Loss-of-pay days.
    pub lop_days: Decimal,
    /// Paid leave days used.
    pub paid_leave_used: Decimal,
    /// Bonus for the month.
    pub bonus: Decimal,
}
