//! Net pay and earnings breakdown.
//!
//! Net pay is what remains of the base salary after PF, professional tax and
//! the absent deduction, floored at zero. It is then split into basic, HRA
//! and a fuel allowance that absorbs the rounding remainder, so the three
//! components always add up to gross salary exactly.

use rust_decimal::Decimal;

use crate::config::EarningsSplit;
use crate::models::{AuditStep, AuditWarning};

use super::{SaturatingArithmetic, round_currency};

/// Warning code raised when deductions exceed the base salary.
pub const NET_PAY_CLAMPED: &str = "NET_PAY_CLAMPED";

/// The result of the net pay rule.
#[derive(Debug, Clone)]
pub struct NetPayResult {
    /// Net pay before bonus, never negative.
    pub net_pay: Decimal,
    /// Clamping and overflow warnings, in that order.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of splitting net pay into earnings components.
#[derive(Debug, Clone)]
pub struct EarningsSplitResult {
    /// Basic pay.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Residual allowance.
    pub fuel_allowance: Decimal,
    /// `basic + hra + fuel_allowance`.
    pub gross_salary: Decimal,
    /// Set when a component overflowed the decimal range.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates net pay before bonus.
///
/// A difference beyond the decimal range is pinned at the limit before
/// clamping, and both events are reported in `warnings`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_net_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_net_pay(
///     Decimal::from(1000), Decimal::from(120), Decimal::from(200), Decimal::from(990), 1);
/// assert_eq!(result.net_pay, Decimal::ZERO);
/// assert_eq!(result.warnings.len(), 1);
/// ```
pub fn calculate_net_pay(
    base_salary: Decimal,
    pf_amount: Decimal,
    professional_tax: Decimal,
    absent_deduction: Decimal,
    step_number: u32,
) -> NetPayResult {
    let mut arithmetic = SaturatingArithmetic::default();
    let unclamped = arithmetic.sub(base_salary, pf_amount);
    let unclamped = arithmetic.sub(unclamped, professional_tax);
    let unclamped = arithmetic.sub(unclamped, absent_deduction);
    let net_pay = unclamped.max(Decimal::ZERO);

    let clamped = unclamped < Decimal::ZERO;
    let warning = clamped.then(|| {
        AuditWarning::new(
            NET_PAY_CLAMPED,
            format!(
                "Deductions exceed base salary by {}; net pay set to 0",
                (-unclamped).normalize()
            ),
            "medium",
        )
    });

    let reasoning = format!(
        "{} - {} PF - {} PT - {} absent = {}{}",
        base_salary.normalize(),
        pf_amount.normalize(),
        professional_tax.normalize(),
        absent_deduction.normalize(),
        net_pay.normalize(),
        if clamped { " (clamped at zero)" } else { "" }
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        policy_ref: "-".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "pf_amount": pf_amount.normalize().to_string(),
            "professional_tax": professional_tax.normalize().to_string(),
            "absent_deduction": absent_deduction.normalize().to_string(),
        }),
        output: serde_json::json!({
            "net_pay": net_pay.normalize().to_string(),
            "clamped": clamped,
        }),
        reasoning,
    };

    NetPayResult {
        net_pay,
        warnings: warning
            .into_iter()
            .chain(arithmetic.warning("Net Pay"))
            .collect(),
        audit_step,
    }
}

/// Splits net pay into basic, HRA and fuel allowance.
///
/// `basic = round(net_pay * basic_ratio)`, `hra = round(basic * hra_ratio_of_basic)`
/// and the fuel allowance takes whatever is left, floored at zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::split_earnings;
/// use salary_engine::config::CompensationPolicy;
/// use rust_decimal::Decimal;
///
/// let split = split_earnings(Decimal::from(17400), &CompensationPolicy::standard().earnings, 1);
/// assert_eq!(split.basic, Decimal::from(5220));
/// assert_eq!(split.hra, Decimal::from(3654));
/// assert_eq!(split.fuel_allowance, Decimal::from(8526));
/// assert_eq!(split.gross_salary, Decimal::from(17400));
/// ```
pub fn split_earnings(
    net_pay: Decimal,
    split: &EarningsSplit,
    step_number: u32,
) -> EarningsSplitResult {
    let mut arithmetic = SaturatingArithmetic::default();
    let basic = round_currency(arithmetic.mul(net_pay, split.basic_ratio));
    let hra = round_currency(arithmetic.mul(basic, split.hra_ratio_of_basic));
    let remainder = arithmetic.sub(net_pay, basic);
    let fuel_allowance = arithmetic.sub(remainder, hra).max(Decimal::ZERO);
    let components = arithmetic.add(basic, hra);
    let gross_salary = arithmetic.add(components, fuel_allowance);

    let audit_step = AuditStep {
        step_number,
        rule_id: "earnings_split".to_string(),
        rule_name: "Earnings Split".to_string(),
        policy_ref: "earnings".to_string(),
        input: serde_json::json!({
            "net_pay": net_pay.normalize().to_string(),
            "basic_ratio": split.basic_ratio.normalize().to_string(),
            "hra_ratio_of_basic": split.hra_ratio_of_basic.normalize().to_string(),
        }),
        output: serde_json::json!({
            "basic": basic.normalize().to_string(),
            "hra": hra.normalize().to_string(),
            "fuel_allowance": fuel_allowance.normalize().to_string(),
            "gross_salary": gross_salary.normalize().to_string(),
        }),
        reasoning: format!(
            "Basic {} x {} = {}; HRA {} x {} = {}; fuel allowance {} - {} - {} = {}",
            net_pay.normalize(),
            split.basic_ratio.normalize(),
            basic.normalize(),
            basic.normalize(),
            split.hra_ratio_of_basic.normalize(),
            hra.normalize(),
            net_pay.normalize(),
            basic.normalize(),
            hra.normalize(),
            fuel_allowance.normalize()
        ),
    };

    EarningsSplitResult {
        basic,
        hra,
        fuel_allowance,
        gross_salary,
        warning: arithmetic.warning("Earnings Split"),
        audit_step,
    }
}
