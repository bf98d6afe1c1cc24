//! Per-day salary and loss-of-pay deduction.
//!
//! Each loss-of-pay day is deducted at the rounded per-day salary, so the
//! deduction is `round(round(base / days) * lop_days)`.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning};

use super::{SaturatingArithmetic, round_currency};

/// The result of the per-day salary rule.
#[derive(Debug, Clone)]
pub struct PerDaySalaryResult {
    /// Base salary divided by the month length, rounded.
    pub per_day_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the absent deduction rule.
#[derive(Debug, Clone)]
pub struct AbsentDeductionResult {
    /// The loss-of-pay deduction, rounded.
    pub amount: Decimal,
    /// Set when the deduction overflowed the decimal range.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the per-day salary.
///
/// `days_in_month` must be positive; input resolution guarantees this.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_per_day_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_per_day_salary(Decimal::from(20000), 30, 1);
/// assert_eq!(result.per_day_salary, Decimal::from(667));
/// ```
pub fn calculate_per_day_salary(
    base_salary: Decimal,
    days_in_month: u32,
    step_number: u32,
) -> PerDaySalaryResult {
    let days = Decimal::from(days_in_month.max(1));
    let per_day_salary = round_currency(base_salary / days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "per_day_salary".to_string(),
        rule_name: "Per-Day Salary".to_string(),
        policy_ref: "default_days_in_month".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "days_in_month": days_in_month,
        }),
        output: serde_json::json!({
            "per_day_salary": per_day_salary.normalize().to_string(),
        }),
        reasoning: format!(
            "{} / {} days = {}",
            base_salary.normalize(),
            days_in_month,
            per_day_salary.normalize()
        ),
    };

    PerDaySalaryResult {
        per_day_salary,
        audit_step,
    }
}

/// Calculates the loss-of-pay deduction from the rounded per-day salary.
///
/// A product beyond the decimal range is pinned at the limit and reported
/// through `warning`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_absent_deduction;
/// use rust_decimal::Decimal;
///
/// let result = calculate_absent_deduction(Decimal::from(33), Decimal::from(30), 1);
/// assert_eq!(result.amount, Decimal::from(990));
/// ```
pub fn calculate_absent_deduction(
    per_day_salary: Decimal,
    lop_days: Decimal,
    step_number: u32,
) -> AbsentDeductionResult {
    let mut arithmetic = SaturatingArithmetic::default();
    let amount = round_currency(arithmetic.mul(per_day_salary, lop_days));

    let reasoning = if lop_days.is_zero() {
        "No loss-of-pay days - no absent deduction".to_string()
    } else {
        format!(
            "{} LOP days x {} = {}",
            lop_days.normalize(),
            per_day_salary.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "absent_deduction".to_string(),
        rule_name: "Absent Deduction".to_string(),
        policy_ref: "-".to_string(),
        input: serde_json::json!({
            "per_day_salary": per_day_salary.normalize().to_string(),
            "lop_days": lop_days.normalize().to_string(),
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
        }),
        reasoning,
    };

    AbsentDeductionResult {
        amount,
        warning: arithmetic.warning("Absent Deduction"),
        audit_step,
    }
}
