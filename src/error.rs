//! Error types for the salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Normalization itself never fails; these errors come from loading a
//! compensation policy, parsing a pay month, or validating payroll input at
//! a service boundary.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A compensation policy parsed but holds values the engine cannot use.
    #[error("Invalid compensation policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A payroll record failed boundary validation.
    #[error("Invalid payroll input field '{field}': {message}")]
    InvalidPayrollInput {
        /// The slip field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay month string was not of the form `YYYY-MM`.
    #[error("Invalid year-month '{value}': expected YYYY-MM")]
    InvalidYearMonth {
        /// The rejected value.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "earnings.basic_ratio".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid compensation policy field 'earnings.basic_ratio': must be between 0 and 1"
        );
    }

    #[test]
    fn test_invalid_payroll_input_displays_field_and_message() {
        let error = EngineError::InvalidPayrollInput {
            field: "baseSalary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll input field 'baseSalary': must not be negative"
        );
    }

    #[test]
    fn test_invalid_year_month_displays_value() {
        let error = EngineError::InvalidYearMonth {
            value: "2026/10".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid year-month '2026/10': expected YYYY-MM"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidPayrollInput {
                field: "lopDays".to_string(),
                message: "must not be negative".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
