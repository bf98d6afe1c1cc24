//! Professional tax.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the professional tax rule.
#[derive(Debug, Clone)]
pub struct ProfessionalTaxResult {
    /// The professional tax for the period.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the fixed per-period professional tax.
///
/// The tax does not depend on salary; it is taken straight from the policy.
pub fn apply_professional_tax(flat_amount: Decimal, step_number: u32) -> ProfessionalTaxResult {
    let audit_step = AuditStep {
        step_number,
        rule_id: "professional_tax".to_string(),
        rule_name: "Professional Tax".to_string(),
        policy_ref: "professional_tax".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "amount": flat_amount.normalize().to_string(),
        }),
        reasoning: format!("Flat professional tax of {}", flat_amount.normalize()),
    };

    ProfessionalTaxResult {
        amount: flat_amount,
        audit_step,
    }
}
