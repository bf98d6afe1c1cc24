//! Salary history filter and summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Criteria for selecting slips out of a payroll history.
///
/// Every criterion is optional; unset criteria match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    /// Match slips for this employee only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Match slips whose `department` field equals this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Match slips whose `yearMonth` falls in this year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Match slips whose `yearMonth` falls in this month (1-12).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

/// Aggregated figures over a set of resolved slips.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    /// Number of slips aggregated.
    pub total_slips: usize,
    /// Sum of gross salaries.
    pub total_gross_salary: Decimal,
    /// Sum of net salaries.
    pub total_net_salary: Decimal,
    /// Mean net salary, rounded to whole currency units; zero when empty.
    pub average_net_salary: Decimal,
    /// Sum of provident fund deductions.
    #[serde(rename = "totalPF")]
    pub total_pf: Decimal,
    /// Sum of professional tax deductions.
    pub total_professional_tax: Decimal,
    /// Sum of bonuses.
    pub total_bonus: Decimal,
    /// Sum of all deductions (PF, professional tax, absent deduction).
    pub total_deductions: Decimal,
}
