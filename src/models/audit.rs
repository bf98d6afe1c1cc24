//! Audit trace models.
//!
//! Every rule the engine applies can record an [`AuditStep`] describing its
//! input, its output and a one-line explanation, so a printed slip can be
//! traced back to the policy that produced each figure.

use serde::{Deserialize, Serialize};

use super::SalarySlip;

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The policy setting(s) the rule read.
    pub policy_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were tolerated but probably deserve a look,
/// such as deductions exceeding the base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for one normalization.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.find_step("provident_fund").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the first step recorded for `rule_id`.
    pub fn find_step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }

    /// Returns true if a warning with `code` was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|warning| warning.code == code)
    }
}

/// A resolved slip together with the trace of how it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipComputation {
    /// The resolved slip.
    pub slip: SalarySlip,
    /// The name of the compensation policy used.
    pub policy_name: String,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Sample".to_string(),
            policy_ref: "professional_tax".to_string(),
            input: json!({}),
            output: json!({ "amount": "200" }),
            reasoning: "Flat professional tax of 200".to_string(),
        }
    }

    #[test]
    fn test_find_step_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![
                sample_step(1, "resolve_inputs"),
                sample_step(2, "professional_tax"),
            ],
            warnings: vec![],
            duration_us: 5,
        };

        let step = trace.find_step("professional_tax").unwrap();
        assert_eq!(step.step_number, 2);
        assert!(trace.find_step("provident_fund").is_none());
    }

    #[test]
    fn test_has_warning() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning::new(
                "NET_PAY_CLAMPED",
                "Deductions exceed base salary",
                "medium",
            )],
            duration_us: 0,
        };

        assert!(trace.has_warning("NET_PAY_CLAMPED"));
        assert!(!trace.has_warning("DAYS_IN_MONTH_DEFAULTED"));
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = sample_step(3, "professional_tax");
        let value = serde_json::to_value(&step).unwrap();

        assert_eq!(value["step_number"], 3);
        assert_eq!(value["rule_id"], "professional_tax");
        assert_eq!(value["output"]["amount"], "200");
    }
}
