//! Salary slip normalization.
//!
//! This module chains the individual pay rules into the full computation
//! that turns a raw [`SalarySlipInput`] into a resolved [`SalarySlip`].
//! Each rule consumes the already-rounded outputs of the rules before it:
//!
//! 1. input resolution
//! 2. provident fund
//! 3. per-day salary
//! 4. absent deduction
//! 5. professional tax
//! 6. net pay (clamped at zero)
//! 7. earnings split (basic, HRA, fuel allowance, gross)
//! 8. leave balance
//!
//! Net salary is gross salary plus bonus. Arithmetic that would leave the
//! decimal range saturates and raises an `AMOUNT_SATURATED` warning, so
//! normalization never panics.

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::CompensationPolicy;
use crate::models::{AuditTrace, SalarySlip, SalarySlipInput, SlipComputation};

use super::{
    SaturatingArithmetic, apply_professional_tax, calculate_absent_deduction, calculate_net_pay,
    calculate_per_day_salary, calculate_provident_fund, resolve_inputs, resolve_leave_balance,
    split_earnings,
};

/// Normalizes a slip under the standard compensation policy.
///
/// The input is only borrowed; a new slip is returned. Normalization never
/// fails: missing fields take their defaults and over-deduction is clamped.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::normalize;
/// use salary_engine::models::SalarySlipInput;
/// use rust_decimal::Decimal;
///
/// let slip = normalize(&SalarySlipInput {
///     base_salary: Some(Decimal::from(20000)),
///     ..Default::default()
/// });
///
/// assert_eq!(slip.pf_amount, Decimal::from(2400));
/// assert_eq!(slip.gross_salary, Decimal::from(17400));
/// assert_eq!(slip.basic + slip.hra + slip.fuel_allowance, slip.gross_salary);
/// ```
pub fn normalize(slip: &SalarySlipInput) -> SalarySlip {
    normalize_with_policy(slip, &CompensationPolicy::standard())
}

/// Normalizes a slip under the given compensation policy.
pub fn normalize_with_policy(slip: &SalarySlipInput, policy: &CompensationPolicy) -> SalarySlip {
    normalize_with_trace(slip, policy).slip
}

/// Normalizes a slip and records every rule applied.
///
/// Audit steps are numbered from 1 in the order the rules run.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::normalize_with_trace;
/// use salary_engine::config::CompensationPolicy;
/// use salary_engine::models::SalarySlipInput;
///
/// let computation = normalize_with_trace(&SalarySlipInput::default(), &CompensationPolicy::standard());
///
/// assert_eq!(computation.policy_name, "standard");
/// assert_eq!(computation.audit_trace.steps.len(), 8);
/// assert_eq!(computation.audit_trace.steps[0].rule_id, "resolve_inputs");
/// ```
pub fn normalize_with_trace(slip: &SalarySlipInput, policy: &CompensationPolicy) -> SlipComputation {
    let start_time = Instant::now();
    let mut steps = Vec::with_capacity(8);
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let resolution = resolve_inputs(slip, policy, step_number);
    let inputs = resolution.inputs;
    steps.push(resolution.audit_step);
    warnings.extend(resolution.warnings);
    step_number += 1;

    let pf = calculate_provident_fund(
        inputs.base_salary,
        inputs.pf_applicability,
        &policy.provident_fund,
        step_number,
    );
    steps.push(pf.audit_step);
    warnings.extend(pf.warning);
    step_number += 1;

    let per_day = calculate_per_day_salary(inputs.base_salary, inputs.days_in_month, step_number);
    steps.push(per_day.audit_step);
    step_number += 1;

    let absent = calculate_absent_deduction(per_day.per_day_salary, inputs.lop_days, step_number);
    steps.push(absent.audit_step);
    warnings.extend(absent.warning);
    step_number += 1;

    let professional_tax = apply_professional_tax(policy.professional_tax, step_number);
    steps.push(professional_tax.audit_step);
    step_number += 1;

    let net_pay = calculate_net_pay(
        inputs.base_salary,
        pf.amount,
        professional_tax.amount,
        absent.amount,
        step_number,
    );
    steps.push(net_pay.audit_step);
    warnings.extend(net_pay.warnings);
    step_number += 1;

    let earnings = split_earnings(net_pay.net_pay, &policy.earnings, step_number);
    steps.push(earnings.audit_step);
    warnings.extend(earnings.warning);
    step_number += 1;

    let leave = resolve_leave_balance(slip, &policy.leave_defaults, step_number);
    steps.push(leave.audit_step);
    warnings.extend(leave.warning);

    let mut arithmetic = SaturatingArithmetic::default();
    let net_salary = arithmetic.add(earnings.gross_salary, inputs.bonus);
    warnings.extend(arithmetic.warning("Net Salary"));

    for warning in &warnings {
        warn!(
            employee_id = slip.employee_id.as_deref().unwrap_or("-"),
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    let resolved = SalarySlip {
        employee_id: slip.employee_id.clone(),
        base_salary: slip.base_salary,
        pf_applicable: slip.pf_applicable,
        lop_days: slip.lop_days,
        days_in_month: slip.days_in_month,
        bonus: slip.bonus,
        paid_leave_used: slip.paid_leave_used,
        pf_amount: pf.amount,
        professional_tax: professional_tax.amount,
        per_day_salary: per_day.per_day_salary,
        absent_deduction: absent.amount,
        basic: earnings.basic,
        hra: earnings.hra,
        fuel_allowance: earnings.fuel_allowance,
        gross_salary: earnings.gross_salary,
        net_salary,
        total_leaves: leave.balance.total_leaves,
        casual_leaves_total: leave.balance.casual_leaves_total,
        sick_leaves_total: leave.balance.sick_leaves_total,
        leaves_remaining: leave.balance.leaves_remaining,
        extra: slip.extra.clone(),
    };

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        employee_id = resolved.employee_id.as_deref().unwrap_or("-"),
        policy = %policy.name,
        gross_salary = %resolved.gross_salary,
        net_salary = %resolved.net_salary,
        duration_us,
        "Salary slip normalized"
    );

    SlipComputation {
        slip: resolved,
        policy_name: policy.name.clone(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

/// Normalizes many slips independently, preserving their order.
///
/// Slips share nothing, so callers may equally split a batch across threads
/// and call [`normalize_with_policy`] on each part.
pub fn normalize_batch(slips: &[SalarySlipInput], policy: &CompensationPolicy) -> Vec<SalarySlip> {
    let resolved: Vec<SalarySlip> = slips
        .iter()
        .map(|slip| normalize_with_policy(slip, policy))
        .collect();

    debug!(count = resolved.len(), policy = %policy.name, "Normalized slip batch");
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PfApplicability;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn slip(base_salary: Decimal, pf: PfApplicability) -> SalarySlipInput {
        SalarySlipInput {
            base_salary: Some(base_salary),
            pf_applicable: Some(pf),
            ..Default::default()
        }
    }

    fn assert_derived_eq(left: &SalarySlip, right: &SalarySlip) {
        assert_eq!(left.pf_amount, right.pf_amount);
        assert_eq!(left.professional_tax, right.professional_tax);
        assert_eq!(left.per_day_salary, right.per_day_salary);
        assert_eq!(left.absent_deduction, right.absent_deduction);
        assert_eq!(left.basic, right.basic);
        assert_eq!(left.hra, right.hra);
        assert_eq!(left.fuel_allowance, right.fuel_allowance);
        assert_eq!(left.gross_salary, right.gross_salary);
        assert_eq!(left.net_salary, right.net_salary);
        assert_eq!(left.total_leaves, right.total_leaves);
        assert_eq!(left.casual_leaves_total, right.casual_leaves_total);
        assert_eq!(left.sick_leaves_total, right.sick_leaves_total);
        assert_eq!(left.leaves_remaining, right.leaves_remaining);
    }

    #[test]
    fn test_empty_slip_yields_defaults() {
        let result = normalize(&SalarySlipInput::default());

        assert_eq!(result.pf_amount, Decimal::ZERO);
        assert_eq!(result.professional_tax, dec!(200));
        assert_eq!(result.per_day_salary, Decimal::ZERO);
        assert_eq!(result.absent_deduction, Decimal::ZERO);
        assert_eq!(result.basic, Decimal::ZERO);
        assert_eq!(result.hra, Decimal::ZERO);
        assert_eq!(result.fuel_allowance, Decimal::ZERO);
        assert_eq!(result.gross_salary, Decimal::ZERO);
        assert_eq!(result.net_salary, Decimal::ZERO);
        assert_eq!(result.total_leaves, dec!(6));
        assert_eq!(result.casual_leaves_total, dec!(4));
        assert_eq!(result.sick_leaves_total, dec!(2));
        assert_eq!(result.leaves_remaining, dec!(6));
        assert_eq!(result.base_salary, None);
    }

    #[test]
    fn test_full_computation_below_pf_ceiling() {
        let input = SalarySlipInput {
            lop_days: Some(dec!(2)),
            bonus: Some(dec!(1000)),
            ..slip(dec!(20000), PfApplicability::Applicable)
        };

        let result = normalize(&input);

        assert_eq!(result.pf_amount, dec!(2400));
        assert_eq!(result.per_day_salary, dec!(667));
        assert_eq!(result.absent_deduction, dec!(1334));
        assert_eq!(result.basic, dec!(4820));
        assert_eq!(result.hra, dec!(3374));
        assert_eq!(result.fuel_allowance, dec!(7872));
        assert_eq!(result.gross_salary, dec!(16066));
        assert_eq!(result.net_salary, dec!(17066));
    }

    #[test]
    fn test_full_computation_above_pf_ceiling() {
        let result = normalize(&slip(dec!(50000), PfApplicability::Applicable));

        // 50000 - 3600 - 200 = 46200; basic 13860; hra 9702; fuel 22638
        assert_eq!(result.pf_amount, dec!(3600));
        assert_eq!(result.basic, dec!(13860));
        assert_eq!(result.hra, dec!(9702));
        assert_eq!(result.fuel_allowance, dec!(22638));
        assert_eq!(result.gross_salary, dec!(46200));
        assert_eq!(result.net_salary, dec!(46200));
    }

    #[test]
    fn test_pf_tiers() {
        assert_eq!(
            normalize(&slip(dec!(20000), PfApplicability::Applicable)).pf_amount,
            dec!(2400)
        );
        assert_eq!(
            normalize(&slip(dec!(50000), PfApplicability::Applicable)).pf_amount,
            dec!(3600)
        );
        assert_eq!(
            normalize(&slip(dec!(50000), PfApplicability::NotApplicable)).pf_amount,
            Decimal::ZERO
        );
        assert_eq!(
            normalize(&slip(dec!(50000), PfApplicability::Pending)).pf_amount,
            dec!(3600)
        );
    }

    #[test]
    fn test_heavy_deduction_clamps_to_bonus_only() {
        let input = SalarySlipInput {
            lop_days: Some(dec!(30)),
            days_in_month: Some(30),
            bonus: Some(dec!(500)),
            ..slip(dec!(1000), PfApplicability::Applicable)
        };

        let computation = normalize_with_trace(&input, &CompensationPolicy::standard());
        let result = &computation.slip;

        assert_eq!(result.pf_amount, dec!(120));
        assert_eq!(result.per_day_salary, dec!(33));
        assert_eq!(result.absent_deduction, dec!(990));
        assert_eq!(result.gross_salary, Decimal::ZERO);
        assert_eq!(result.net_salary, dec!(500));
        assert!(computation.audit_trace.has_warning("NET_PAY_CLAMPED"));
    }

    #[test]
    fn test_previous_derived_values_are_ignored() {
        let input = SalarySlipInput {
            pf_amount: Some(dec!(1)),
            gross_salary: Some(dec!(99999)),
            net_salary: Some(dec!(99999)),
            ..slip(dec!(20000), PfApplicability::Applicable)
        };

        let result = normalize(&input);

        assert_eq!(result.pf_amount, dec!(2400));
        assert_eq!(result.gross_salary, dec!(17400));
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let input = SalarySlipInput {
            lop_days: Some(dec!(3)),
            days_in_month: Some(31),
            bonus: Some(dec!(750)),
            paid_leave_used: Some(dec!(2)),
            ..slip(dec!(27500), PfApplicability::Pending)
        };

        let once = normalize(&input);
        let twice = normalize(&SalarySlipInput::from(&once));

        assert_derived_eq(&once, &twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = SalarySlipInput {
            lop_days: Some(dec!(1)),
            ..slip(dec!(20000), PfApplicability::Applicable)
        };
        let before = input.clone();

        let _ = normalize(&input);

        assert_eq!(input, before);
        assert_eq!(input.pf_amount, None);
    }

    #[test]
    fn test_pass_through_fields_survive() {
        let mut input = slip(dec!(20000), PfApplicability::Applicable);
        input.employee_id = Some("EMP001".to_string());
        input
            .extra
            .insert("employeeName".to_string(), json!("Asha Rao"));
        input
            .extra
            .insert("monthName".to_string(), json!("October 2026"));

        let result = normalize(&input);

        assert_eq!(result.employee_id.as_deref(), Some("EMP001"));
        assert_eq!(result.base_salary, Some(dec!(20000)));
        assert_eq!(result.pf_applicable, Some(PfApplicability::Applicable));
        assert_eq!(result.extra_str("employeeName"), Some("Asha Rao"));
        assert_eq!(result.extra_str("monthName"), Some("October 2026"));
    }

    #[test]
    fn test_zero_days_in_month_uses_default_and_keeps_raw_value() {
        let input = SalarySlipInput {
            days_in_month: Some(0),
            ..slip(dec!(30000), PfApplicability::NotApplicable)
        };

        let computation = normalize_with_trace(&input, &CompensationPolicy::standard());

        assert_eq!(computation.slip.per_day_salary, dec!(1000));
        assert_eq!(computation.slip.days_in_month, Some(0));
        assert!(computation.audit_trace.has_warning("DAYS_IN_MONTH_DEFAULTED"));
    }

    #[test]
    fn test_custom_policy_is_applied() {
        let mut policy = CompensationPolicy::standard();
        policy.name = "no-pt".to_string();
        policy.professional_tax = Decimal::ZERO;

        let computation =
            normalize_with_trace(&slip(dec!(10000), PfApplicability::NotApplicable), &policy);

        assert_eq!(computation.policy_name, "no-pt");
        assert_eq!(computation.slip.professional_tax, Decimal::ZERO);
        assert_eq!(computation.slip.gross_salary, dec!(10000));
    }

    #[test]
    fn test_trace_steps_are_numbered_in_order() {
        let computation = normalize_with_trace(
            &slip(dec!(20000), PfApplicability::Applicable),
            &CompensationPolicy::standard(),
        );

        let rule_ids: Vec<&str> = computation
            .audit_trace
            .steps
            .iter()
            .map(|step| step.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "resolve_inputs",
                "provident_fund",
                "per_day_salary",
                "absent_deduction",
                "professional_tax",
                "net_pay",
                "earnings_split",
                "leave_balance",
            ]
        );

        for (index, step) in computation.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
        assert!(computation.audit_trace.warnings.is_empty());
        assert_eq!(computation.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec![
            slip(dec!(20000), PfApplicability::Applicable),
            slip(dec!(50000), PfApplicability::NotApplicable),
            SalarySlipInput::default(),
        ];

        let results = normalize_batch(&inputs, &CompensationPolicy::standard());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].pf_amount, dec!(2400));
        assert_eq!(results[1].pf_amount, Decimal::ZERO);
        assert_eq!(results[2].net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_extreme_salary_and_absence_do_not_panic() {
        let input: SalarySlipInput = serde_json::from_str(
            r#"{"baseSalary": 100000000000000000000, "lopDays": 1000000000000}"#,
        )
        .unwrap();

        let computation = normalize_with_trace(&input, &CompensationPolicy::standard());
        let result = &computation.slip;

        assert_eq!(result.absent_deduction, Decimal::MAX);
        assert_eq!(result.gross_salary, Decimal::ZERO);
        assert_eq!(result.basic + result.hra + result.fuel_allowance, result.gross_salary);
        assert!(computation.audit_trace.has_warning("AMOUNT_SATURATED"));
        assert!(computation.audit_trace.has_warning("NET_PAY_CLAMPED"));
    }

    #[test]
    fn test_extreme_negative_inputs_do_not_panic() {
        let input = SalarySlipInput {
            base_salary: Some(Decimal::MIN),
            lop_days: Some(Decimal::MAX),
            bonus: Some(Decimal::MAX),
            ..Default::default()
        };

        let computation = normalize_with_trace(&input, &CompensationPolicy::standard());
        let result = &computation.slip;

        assert_eq!(result.absent_deduction, Decimal::MIN);
        assert_eq!(result.basic + result.hra + result.fuel_allowance, result.gross_salary);
        assert_eq!(result.net_salary, Decimal::MAX);
        assert!(computation.audit_trace.has_warning("AMOUNT_SATURATED"));
    }
}
