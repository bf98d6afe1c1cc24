//! Provident fund deduction.
//!
//! PF is charged unless the employee is explicitly marked not applicable.
//! Below the wage ceiling the contribution is a percentage of base salary;
//! at or above it a flat amount applies.

use rust_decimal::Decimal;

use crate::config::ProvidentFundPolicy;
use crate::models::{AuditStep, AuditWarning, PfApplicability};

use super::{SaturatingArithmetic, round_currency};

/// The result of the PF rule, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct ProvidentFundResult {
    /// The PF deduction, in whole currency units.
    pub amount: Decimal,
    /// Set when the rate amount overflowed the decimal range.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the provident fund deduction for a month.
///
/// # Arguments
///
/// * `base_salary` - The resolved monthly base salary
/// * `applicability` - The employee's PF flag
/// * `policy` - PF rate, wage ceiling and flat amount
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_provident_fund;
/// use salary_engine::config::CompensationPolicy;
/// use salary_engine::models::PfApplicability;
/// use rust_decimal::Decimal;
///
/// let policy = CompensationPolicy::standard();
///
/// let below = calculate_provident_fund(
///     Decimal::from(20000), PfApplicability::Applicable, &policy.provident_fund, 1);
/// assert_eq!(below.amount, Decimal::from(2400));
///
/// let above = calculate_provident_fund(
///     Decimal::from(50000), PfApplicability::Pending, &policy.provident_fund, 1);
/// assert_eq!(above.amount, Decimal::from(3600));
/// ```
pub fn calculate_provident_fund(
    base_salary: Decimal,
    applicability: PfApplicability,
    policy: &ProvidentFundPolicy,
    step_number: u32,
) -> ProvidentFundResult {
    let mut arithmetic = SaturatingArithmetic::default();

    let (amount, tier, reasoning) = if !applicability.is_deducted() {
        (
            Decimal::ZERO,
            "not_applicable",
            "PF not applicable for this employee - no deduction".to_string(),
        )
    } else if base_salary < policy.wage_ceiling {
        let amount = round_currency(arithmetic.mul(base_salary, policy.rate));
        (
            amount,
            "rate",
            format!(
                "{} x {} = {} (below ceiling {})",
                base_salary.normalize(),
                policy.rate.normalize(),
                amount.normalize(),
                policy.wage_ceiling.normalize()
            ),
        )
    } else {
        (
            policy.flat_amount,
            "flat",
            format!(
                "Base salary {} at or above ceiling {} - flat PF {}",
                base_salary.normalize(),
                policy.wage_ceiling.normalize(),
                policy.flat_amount.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "provident_fund".to_string(),
        rule_name: "Provident Fund".to_string(),
        policy_ref: "provident_fund".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "pf_applicability": applicability.as_str(),
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string(),
            "tier": tier,
        }),
        reasoning,
    };

    ProvidentFundResult {
        amount,
        warning: arithmetic.warning("Provident Fund"),
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompensationPolicy;
    use rust_decimal_macros::dec;

    fn pf_policy() -> ProvidentFundPolicy {
        CompensationPolicy::standard().provident_fund
    }

    #[test]
    fn test_below_ceiling_charges_twelve_percent() {
        let result =
            calculate_provident_fund(dec!(20000), PfApplicability::Applicable, &pf_policy(), 1);

        assert_eq!(result.amount, dec!(2400));
        assert!(result.warning.is_none());
        assert_eq!(result.audit_step.output["tier"], "rate");
        assert!(result.audit_step.reasoning.contains("20000 x 0.12 = 2400"));
    }

    #[test]
    fn test_above_ceiling_charges_flat_amount() {
        let result =
            calculate_provident_fund(dec!(50000), PfApplicability::Applicable, &pf_policy(), 1);

        assert_eq!(result.amount, dec!(3600));
        assert_eq!(result.audit_step.output["tier"], "flat");
    }

    #[test]
    fn test_exactly_at_ceiling_charges_flat_amount() {
        let result =
            calculate_provident_fund(dec!(30000), PfApplicability::Applicable, &pf_policy(), 1);

        assert_eq!(result.amount, dec!(3600));
    }

    #[test]
    fn test_just_below_ceiling_rounds_rate_amount() {
        // 29999 * 0.12 = 3599.88
        let result =
            calculate_provident_fund(dec!(29999), PfApplicability::Applicable, &pf_policy(), 1);

        assert_eq!(result.amount, dec!(3600));
        assert_eq!(result.audit_step.output["tier"], "rate");
    }

    #[test]
    fn test_not_applicable_charges_nothing() {
        let result = calculate_provident_fund(
            dec!(50000),
            PfApplicability::NotApplicable,
            &pf_policy(),
            1,
        );

        assert_eq!(result.amount, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("not applicable"));
    }

    #[test]
    fn test_pending_is_charged_like_applicable() {
        let pending =
            calculate_provident_fund(dec!(50000), PfApplicability::Pending, &pf_policy(), 1);
        let applicable =
            calculate_provident_fund(dec!(50000), PfApplicability::Applicable, &pf_policy(), 1);

        assert_eq!(pending.amount, applicable.amount);
        assert_eq!(pending.audit_step.input["pf_applicability"], "pending");
    }

    #[test]
    fn test_rate_midpoint_rounds_up() {
        // 12362.5 * 0.12 = 1483.5
        let result =
            calculate_provident_fund(dec!(12362.5), PfApplicability::Applicable, &pf_policy(), 1);

        assert_eq!(result.amount, dec!(1484));
    }

    #[test]
    fn test_custom_policy_values() {
        let policy = ProvidentFundPolicy {
            rate: dec!(0.10),
            wage_ceiling: dec!(15000),
            flat_amount: dec!(1800),
        };

        assert_eq!(
            calculate_provident_fund(dec!(10000), PfApplicability::Applicable, &policy, 1).amount,
            dec!(1000)
        );
        assert_eq!(
            calculate_provident_fund(dec!(15000), PfApplicability::Applicable, &policy, 1).amount,
            dec!(1800)
        );
    }

    #[test]
    fn test_overflowing_rate_amount_saturates() {
        let policy = ProvidentFundPolicy {
            rate: dec!(2),
            wage_ceiling: Decimal::MAX,
            flat_amount: dec!(1800),
        };

        let result =
            calculate_provident_fund(Decimal::MIN, PfApplicability::Applicable, &policy, 1);

        assert_eq!(result.amount, Decimal::MIN);
        assert_eq!(result.warning.unwrap().code, "AMOUNT_SATURATED");
    }
}
