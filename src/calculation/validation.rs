//! Payroll input validation.
//!
//! Normalization tolerates any input. Services that accept slips from
//! outside (a payroll upload, an API) call [`validate_input`] first to reject
//! records that would produce arithmetically consistent but meaningless
//! slips.

use rust_decimal::Decimal;

use crate::config::CompensationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::SalarySlipInput;

/// Largest magnitude accepted for any amount or day count on a slip.
///
/// Well inside the decimal range, so no rule can overflow on a validated slip.
pub const MAX_INPUT_MAGNITUDE: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Longest month a slip may declare.
const MAX_DAYS_IN_MONTH: u32 = 31;

/// Checks that a raw slip holds values a payroll run can stand behind.
///
/// Rejects negative `baseSalary`, `bonus`, `lopDays` and `paidLeaveUsed`,
/// any amount or leave figure whose magnitude exceeds
/// [`MAX_INPUT_MAGNITUDE`], a `daysInMonth` outside 1..=31, and more
/// loss-of-pay days than days in the month (using the policy default when
/// the slip carries no month length).
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::validate_input;
/// use salary_engine::config::CompensationPolicy;
/// use salary_engine::models::SalarySlipInput;
/// use rust_decimal::Decimal;
///
/// let policy = CompensationPolicy::standard();
/// assert!(validate_input(&SalarySlipInput::default(), &policy).is_ok());
///
/// let negative = SalarySlipInput {
///     base_salary: Some(Decimal::from(-1)),
///     ..Default::default()
/// };
/// assert!(validate_input(&negative, &policy).is_err());
/// ```
pub fn validate_input(slip: &SalarySlipInput, policy: &CompensationPolicy) -> EngineResult<()> {
    let amounts = [
        ("baseSalary", slip.base_salary),
        ("bonus", slip.bonus),
        ("lopDays", slip.lop_days),
        ("paidLeaveUsed", slip.paid_leave_used),
    ];
    for (field, value) in amounts {
        if let Some(value) = value {
            if value < Decimal::ZERO {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
        }
    }

    let magnitudes = [
        ("baseSalary", slip.base_salary),
        ("bonus", slip.bonus),
        ("lopDays", slip.lop_days),
        ("paidLeaveUsed", slip.paid_leave_used),
        ("totalLeaves", slip.total_leaves),
        ("casualLeavesTotal", slip.casual_leaves_total),
        ("sickLeavesTotal", slip.sick_leaves_total),
        ("leavesRemaining", slip.leaves_remaining),
    ];
    for (field, value) in magnitudes {
        if let Some(value) = value {
            if value.abs() > MAX_INPUT_MAGNITUDE {
                return Err(invalid(
                    field,
                    format!("{} exceeds the limit of {}", value, MAX_INPUT_MAGNITUDE),
                ));
            }
        }
    }

    if slip.days_in_month == Some(0) {
        return Err(invalid("daysInMonth", "must be positive".to_string()));
    }
    if let Some(days) = slip.days_in_month.filter(|days| *days > MAX_DAYS_IN_MONTH) {
        return Err(invalid(
            "daysInMonth",
            format!("{} exceeds {} days", days, MAX_DAYS_IN_MONTH),
        ));
    }

    let days_in_month = slip.days_in_month.unwrap_or(policy.default_days_in_month);
    if let Some(lop_days) = slip.lop_days {
        if lop_days > Decimal::from(days_in_month) {
            return Err(invalid(
                "lopDays",
                format!(
                    "{} loss-of-pay days exceed the {} days in the month",
                    lop_days, days_in_month
                ),
            ));
        }
    }

    Ok(())
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidPayrollInput {
        field: field.to_string(),
        message,
    }
}
