//! Provident fund applicability flag.
//!
//! Payroll records carry `pfApplicable` as either a boolean or a string.
//! This module turns that loose representation into [`PfApplicability`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Whether provident fund is deducted for an employee.
///
/// Only an explicit boolean `false` or the string `"false"` disables PF.
/// `"pending"` is kept distinct from `Applicable` but is charged the same way.
///
/// # Example
///
/// ```
/// use salary_engine::models::PfApplicability;
/// use serde_json::json;
///
/// assert_eq!(PfApplicability::from(&json!(false)), PfApplicability::NotApplicable);
/// assert_eq!(PfApplicability::from(&json!("false")), PfApplicability::NotApplicable);
/// assert_eq!(PfApplicability::from(&json!("pending")), PfApplicability::Pending);
/// assert_eq!(PfApplicability::from(&json!(true)), PfApplicability::Applicable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PfApplicability {
    /// PF is deducted.
    #[default]
    Applicable,
    /// PF is not deducted.
    NotApplicable,
    /// Enrolment not yet confirmed.
    Pending,
}

impl PfApplicability {
    /// Returns true when the PF rule should charge a contribution.
    pub fn is_deducted(self) -> bool {
        !matches!(self, PfApplicability::NotApplicable)
    }

    /// Returns the snake_case label used in audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            PfApplicability::Applicable => "applicable",
            PfApplicability::NotApplicable => "not_applicable",
            PfApplicability::Pending => "pending",
        }
    }
}

impl From<&Value> for PfApplicability {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(false) => PfApplicability::NotApplicable,
            Value::String(s) if s == "false" => PfApplicability::NotApplicable,
            Value::String(s) if s == "pending" => PfApplicability::Pending,
            _ => PfApplicability::Applicable,
        }
    }
}

impl From<bool> for PfApplicability {
    fn from(applicable: bool) -> Self {
        if applicable {
            PfApplicability::Applicable
        } else {
            PfApplicability::NotApplicable
        }
    }
}

impl Serialize for PfApplicability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PfApplicability::Applicable => serializer.serialize_bool(true),
            PfApplicability::NotApplicable => serializer.serialize_bool(false),
            PfApplicability::Pending => serializer.serialize_str("pending"),
        }
    }
}

impl<'de> Deserialize<'de> for PfApplicability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(PfApplicability::from(&raw))
    }
}
