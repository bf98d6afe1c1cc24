//! Leave balance defaults.
//!
//! Leave entitlements are only filled in when the slip does not carry them.
//! Remaining leave defaults to the total entitlement minus paid leave used.

use rust_decimal::Decimal;

use crate::config::LeaveDefaults;
use crate::models::{AuditStep, AuditWarning, SalarySlipInput};

use super::SaturatingArithmetic;

/// Leave figures printed on a slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveBalance {
    /// Total paid leave entitlement.
    pub total_leaves: Decimal,
    /// Casual leave entitlement.
    pub casual_leaves_total: Decimal,
    /// Sick leave entitlement.
    pub sick_leaves_total: Decimal,
    /// Remaining paid leave.
    pub leaves_remaining: Decimal,
}

/// The result of resolving leave figures, including the audit step.
#[derive(Debug, Clone)]
pub struct LeaveBalanceResult {
    /// The resolved leave figures.
    pub balance: LeaveBalance,
    /// Set when the remaining balance overflowed the decimal range.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves leave entitlements and the remaining balance.
///
/// An explicit `leavesRemaining` on the slip is kept as-is, even when it
/// disagrees with `totalLeaves - paidLeaveUsed`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::resolve_leave_balance;
/// use salary_engine::config::CompensationPolicy;
/// use salary_engine::models::SalarySlipInput;
/// use rust_decimal::Decimal;
///
/// let slip = SalarySlipInput {
///     total_leaves: Some(Decimal::from(10)),
///     paid_leave_used: Some(Decimal::from(3)),
///     ..Default::default()
/// };
/// let result = resolve_leave_balance(&slip, &CompensationPolicy::standard().leave_defaults, 1);
/// assert_eq!(result.balance.leaves_remaining, Decimal::from(7));
/// ```
pub fn resolve_leave_balance(
    slip: &SalarySlipInput,
    defaults: &LeaveDefaults,
    step_number: u32,
) -> LeaveBalanceResult {
    let total_leaves = slip.total_leaves.unwrap_or(defaults.total);
    let casual_leaves_total = slip.casual_leaves_total.unwrap_or(defaults.casual);
    let sick_leaves_total = slip.sick_leaves_total.unwrap_or(defaults.sick);
    let paid_leave_used = slip.paid_leave_used.unwrap_or(Decimal::ZERO);

    let mut arithmetic = SaturatingArithmetic::default();

    let (leaves_remaining, reasoning) = match slip.leaves_remaining {
        Some(remaining) => (
            remaining,
            format!("Remaining leave {} taken from the slip", remaining.normalize()),
        ),
        None => {
            let remaining = arithmetic.sub(total_leaves, paid_leave_used);
            (
                remaining,
                format!(
                    "{} total - {} used = {} remaining",
                    total_leaves.normalize(),
                    paid_leave_used.normalize(),
                    remaining.normalize()
                ),
            )
        }
    };

    let balance = LeaveBalance {
        total_leaves,
        casual_leaves_total,
        sick_leaves_total,
        leaves_remaining,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_balance".to_string(),
        rule_name: "Leave Balance".to_string(),
        policy_ref: "leave_defaults".to_string(),
        input: serde_json::json!({
            "total_leaves_supplied": slip.total_leaves.is_some(),
            "leaves_remaining_supplied": slip.leaves_remaining.is_some(),
            "paid_leave_used": paid_leave_used.normalize().to_string(),
        }),
        output: serde_json::json!({
            "total_leaves": total_leaves.normalize().to_string(),
            "casual_leaves_total": casual_leaves_total.normalize().to_string(),
            "sick_leaves_total": sick_leaves_total.normalize().to_string(),
            "leaves_remaining": leaves_remaining.normalize().to_string(),
        }),
        reasoning,
    };

    LeaveBalanceResult {
        balance,
        warning: arithmetic.warning("Leave Balance"),
        audit_step,
    }
}
