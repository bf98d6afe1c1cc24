//! Salary slip models.
//!
//! This module contains [`SalarySlipInput`], the raw monthly payroll record
//! as supplied by a payroll store or a freshly drafted slip, and
//! [`SalarySlip`], the fully-resolved record the engine returns.
//!
//! Both serialize with the camelCase field names payroll records use on the
//! wire. Fields the engine does not know about (employee name, department,
//! month label and so on) are kept in `extra` and passed through unchanged.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::PfApplicability;

/// A raw, partially-populated salary slip.
///
/// Every field is optional. Previously computed amounts (`pfAmount`,
/// `grossSalary`, ...) are accepted so a resolved slip can be fed back in,
/// but normalization ignores them.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalarySlipInput;
///
/// let slip: SalarySlipInput = serde_json::from_str(r#"{
///     "employeeId": "EMP001",
///     "employeeName": "Asha Rao",
///     "baseSalary": 25000,
///     "pfApplicable": "pending",
///     "lopDays": 2
/// }"#).unwrap();
///
/// assert_eq!(slip.employee_id.as_deref(), Some("EMP001"));
/// assert_eq!(slip.extra["employeeName"], "Asha Rao");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlipInput {
    /// Opaque employee identifier, not used by the computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Monthly contracted salary.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_salary: Option<Decimal>,
    /// Provident fund flag in its boolean-or-string form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_applicable: Option<PfApplicability>,
    /// Loss-of-pay days in the period.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub lop_days: Option<Decimal>,
    /// Calendar length of the pay month.
    #[serde(
        default,
        deserialize_with = "deserialize_whole_days",
        skip_serializing_if = "Option::is_none"
    )]
    pub days_in_month: Option<u32>,
    /// Bonus added on top of gross salary.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub bonus: Option<Decimal>,
    /// Paid leave days taken so far.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_leave_used: Option<Decimal>,
    /// Total paid leave entitlement.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_leaves: Option<Decimal>,
    /// Casual leave entitlement.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub casual_leaves_total: Option<Decimal>,
    /// Sick leave entitlement.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sick_leaves_total: Option<Decimal>,
    /// Remaining paid leave, if the store already tracks it.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub leaves_remaining: Option<Decimal>,

    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub pf_amount: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub professional_tax: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub per_day_salary: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub absent_deduction: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub basic: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub hra: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fuel_allowance: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub gross_salary: Option<Decimal>,
    /// Ignored on input; recomputed.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub net_salary: Option<Decimal>,

    /// Every other field on the record, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fully-resolved salary slip.
///
/// Input fields are carried over exactly as supplied (absent stays absent);
/// derived amounts and leave balances are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlip {
    /// Opaque employee identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Monthly contracted salary, as supplied.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_salary: Option<Decimal>,
    /// Provident fund flag, as supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf_applicable: Option<PfApplicability>,
    /// Loss-of-pay days, as supplied.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub lop_days: Option<Decimal>,
    /// Month length, as supplied.
    #[serde(
        default,
        deserialize_with = "deserialize_whole_days",
        skip_serializing_if = "Option::is_none"
    )]
    pub days_in_month: Option<u32>,
    /// Bonus, as supplied.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub bonus: Option<Decimal>,
    /// Paid leave used, as supplied.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_leave_used: Option<Decimal>,

    /// Provident fund deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub pf_amount: Decimal,
    /// Professional tax deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub professional_tax: Decimal,
    /// Base salary divided by the month length.
    #[serde(with = "rust_decimal::serde::float")]
    pub per_day_salary: Decimal,
    /// Loss-of-pay deduction.
    #[serde(with = "rust_decimal::serde::float")]
    pub absent_deduction: Decimal,
    /// Basic pay component.
    #[serde(with = "rust_decimal::serde::float")]
    pub basic: Decimal,
    /// House rent allowance component.
    #[serde(with = "rust_decimal::serde::float")]
    pub hra: Decimal,
    /// Residual allowance absorbing rounding.
    #[serde(with = "rust_decimal::serde::float")]
    pub fuel_allowance: Decimal,
    /// `basic + hra + fuel_allowance`.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_salary: Decimal,
    /// `gross_salary + bonus`.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_salary: Decimal,

    /// Total paid leave entitlement.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_leaves: Decimal,
    /// Casual leave entitlement.
    #[serde(with = "rust_decimal::serde::float")]
    pub casual_leaves_total: Decimal,
    /// Sick leave entitlement.
    #[serde(with = "rust_decimal::serde::float")]
    pub sick_leaves_total: Decimal,
    /// Remaining paid leave.
    #[serde(with = "rust_decimal::serde::float")]
    pub leaves_remaining: Decimal,

    /// Every other field from the input record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SalarySlip {
    /// Sum of PF, professional tax and absent deduction.
    ///
    /// This is the "Total Deductions" line of a printed slip.
    pub fn total_deductions(&self) -> Decimal {
        self.pf_amount
            .saturating_add(self.professional_tax)
            .saturating_add(self.absent_deduction)
    }

    /// Returns a pass-through field as a string, if present and textual.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

impl From<&SalarySlip> for SalarySlipInput {
    fn from(slip: &SalarySlip) -> Self {
        SalarySlipInput {
            employee_id: slip.employee_id.clone(),
            base_salary: slip.base_salary,
            pf_applicable: slip.pf_applicable,
            lop_days: slip.lop_days,
            days_in_month: slip.days_in_month,
            bonus: slip.bonus,
            paid_leave_used: slip.paid_leave_used,
            total_leaves: Some(slip.total_leaves),
            casual_leaves_total: Some(slip.casual_leaves_total),
            sick_leaves_total: Some(slip.sick_leaves_total),
            leaves_remaining: Some(slip.leaves_remaining),
            pf_amount: Some(slip.pf_amount),
            professional_tax: Some(slip.professional_tax),
            per_day_salary: Some(slip.per_day_salary),
            absent_deduction: Some(slip.absent_deduction),
            basic: Some(slip.basic),
            hra: Some(slip.hra),
            fuel_allowance: Some(slip.fuel_allowance),
            gross_salary: Some(slip.gross_salary),
            net_salary: Some(slip.net_salary),
            extra: slip.extra.clone(),
        }
    }
}

/// Reads a month length written either as an integer or as a whole-valued
/// float such as `30.0`. Fractional, negative and non-numeric values are
/// rejected.
fn deserialize_whole_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let days = match &value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|days| days.fract() == 0.0 && *days >= 0.0 && *days <= f64::from(u32::MAX))
                .map(|days| days as u64)
        }),
        _ => None,
    };

    days.and_then(|days| u32::try_from(days).ok())
        .map(Some)
        .ok_or_else(|| {
            D::Error::custom(format!(
                "invalid daysInMonth {}: expected a whole number of days",
                value
            ))
        })
}
