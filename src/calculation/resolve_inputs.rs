//! Input resolution.
//!
//! A raw slip may omit any field. Before the arithmetic runs, every input
//! the engine reads is resolved into a [`ResolvedInputs`] value with the
//! policy defaults applied.

use rust_decimal::Decimal;

use crate::config::CompensationPolicy;
use crate::models::{AuditStep, AuditWarning, PfApplicability, SalarySlipInput};

/// Warning code raised when a slip carries `daysInMonth = 0`.
pub const DAYS_IN_MONTH_DEFAULTED: &str = "DAYS_IN_MONTH_DEFAULTED";

/// The typed inputs the pay rules compute from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// Monthly contracted salary (0 when absent).
    pub base_salary: Decimal,
    /// Loss-of-pay days (0 when absent).
    pub lop_days: Decimal,
    /// Month length; the policy default when absent or zero.
    pub days_in_month: u32,
    /// Bonus (0 when absent).
    pub bonus: Decimal,
    /// Provident fund flag (applicable when absent).
    pub pf_applicability: PfApplicability,
}

/// The result of resolving inputs, including the audit step.
#[derive(Debug, Clone)]
pub struct InputResolution {
    /// The resolved inputs.
    pub inputs: ResolvedInputs,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
    /// Warnings about tolerated inputs.
    pub warnings: Vec<AuditWarning>,
}

/// Resolves a raw slip's computation inputs against the policy defaults.
///
/// Absent numeric fields resolve to zero, an absent month length resolves to
/// `policy.default_days_in_month`, and an absent PF flag resolves to
/// [`PfApplicability::Applicable`]. A month length of zero cannot divide a
/// salary, so it is treated as absent and a warning is recorded.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::resolve_inputs;
/// use salary_engine::config::CompensationPolicy;
/// use salary_engine::models::{PfApplicability, SalarySlipInput};
/// use rust_decimal::Decimal;
///
/// let resolution = resolve_inputs(&SalarySlipInput::default(), &CompensationPolicy::standard(), 1);
///
/// assert_eq!(resolution.inputs.base_salary, Decimal::ZERO);
/// assert_eq!(resolution.inputs.days_in_month, 30);
/// assert_eq!(resolution.inputs.pf_applicability, PfApplicability::Applicable);
/// ```
pub fn resolve_inputs(
    slip: &SalarySlipInput,
    policy: &CompensationPolicy,
    step_number: u32,
) -> InputResolution {
    let mut warnings = Vec::new();

    let days_in_month = match slip.days_in_month {
        Some(0) => {
            warnings.push(AuditWarning::new(
                DAYS_IN_MONTH_DEFAULTED,
                format!(
                    "daysInMonth of 0 replaced with policy default {}",
                    policy.default_days_in_month
                ),
                "low",
            ));
            policy.default_days_in_month
        }
        Some(days) => days,
        None => policy.default_days_in_month,
    };

    let inputs = ResolvedInputs {
        base_salary: slip.base_salary.unwrap_or(Decimal::ZERO),
        lop_days: slip.lop_days.unwrap_or(Decimal::ZERO),
        days_in_month,
        bonus: slip.bonus.unwrap_or(Decimal::ZERO),
        pf_applicability: slip.pf_applicable.unwrap_or_default(),
    };

    let defaulted: Vec<&str> = [
        ("baseSalary", slip.base_salary.is_none()),
        ("lopDays", slip.lop_days.is_none()),
        ("daysInMonth", !matches!(slip.days_in_month, Some(d) if d > 0)),
        ("bonus", slip.bonus.is_none()),
        ("pfApplicable", slip.pf_applicable.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, was_defaulted)| was_defaulted.then_some(name))
    .collect();

    let reasoning = if defaulted.is_empty() {
        "All inputs supplied".to_string()
    } else {
        format!("Defaults applied for: {}", defaulted.join(", "))
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "resolve_inputs".to_string(),
        rule_name: "Input Resolution".to_string(),
        policy_ref: "default_days_in_month".to_string(),
        input: serde_json::json!({
            "employee_id": slip.employee_id,
            "defaulted_fields": defaulted,
        }),
        output: serde_json::json!({
            "base_salary": inputs.base_salary.normalize().to_string(),
            "lop_days": inputs.lop_days.normalize().to_string(),
            "days_in_month": inputs.days_in_month,
            "bonus": inputs.bonus.normalize().to_string(),
            "pf_applicability": inputs.pf_applicability.as_str(),
        }),
        reasoning,
    };

    InputResolution {
        inputs,
        audit_step,
        warnings,
    }
}
