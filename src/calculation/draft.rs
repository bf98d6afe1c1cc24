//! Draft slip generation.
//!
//! When a month has no slip yet, payroll builds one from the employee
//! profile and the month's attendance figures. The draft carries the
//! display fields a printed slip needs and is then passed to
//! [`super::normalize_with_policy`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{AttendanceSummary, EmployeeRecord, SalarySlipInput, YearMonth};

/// Builds the raw slip for `employee` in `period`.
///
/// The month length is the calendar length of `period` rather than the
/// policy default, so February slips divide by 28 or 29.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{draft_slip, normalize};
/// use salary_engine::models::{AttendanceSummary, EmployeeRecord, PfApplicability, YearMonth};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord {
///     employee_id: "EMP001".to_string(),
///     first_name: "Asha".to_string(),
///     last_name: "Rao".to_string(),
///     department: "Engineering".to_string(),
///     designation: "Developer".to_string(),
///     base_salary: Decimal::from(31000),
///     pf_applicable: PfApplicability::Applicable,
///     total_leaves: None,
///     casual_leaves_total: None,
///     sick_leaves_total: None,
/// };
/// let period: YearMonth = "2026-10".parse().unwrap();
///
/// let draft = draft_slip(&employee, period, &AttendanceSummary::default(), Utc::now());
/// assert_eq!(draft.days_in_month, Some(31));
///
/// let slip = normalize(&draft);
/// assert_eq!(slip.per_day_salary, Decimal::from(1000));
/// assert_eq!(slip.extra_str("monthName"), Some("October 2026"));
/// ```
pub fn draft_slip(
    employee: &EmployeeRecord,
    period: YearMonth,
    attendance: &AttendanceSummary,
    generated_at: DateTime<Utc>,
) -> SalarySlipInput {
    let mut extra = Map::new();
    extra.insert("employeeName".to_string(), Value::from(employee.full_name()));
    extra.insert("department".to_string(), Value::from(employee.department.clone()));
    extra.insert("designation".to_string(), Value::from(employee.designation.clone()));
    extra.insert("yearMonth".to_string(), Value::from(period.to_string()));
    extra.insert("monthName".to_string(), Value::from(period.label()));
    extra.insert("daysPresent".to_string(), Value::from(attendance.days_present));
    extra.insert(
        "generatedAt".to_string(),
        Value::from(generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
    );

    debug!(
        employee_id = %employee.employee_id,
        year_month = %period,
        "Drafted salary slip"
    );

    SalarySlipInput {
        employee_id: Some(employee.employee_id.clone()),
        base_salary: Some(employee.base_salary),
        pf_applicable: Some(employee.pf_applicable),
        lop_days: Some(attendance.lop_days),
        days_in_month: Some(period.days_in_month()),
        bonus: Some(attendance.bonus),
        paid_leave_used: Some(attendance.paid_leave_used),
        total_leaves: employee.total_leaves,
        casual_leaves_total: employee.casual_leaves_total,
        sick_leaves_total: employee.sick_leaves_total,
        extra,
        ..Default::default()
    }
}
