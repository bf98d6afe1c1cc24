//! Policy loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a
//! compensation policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::CompensationPolicy;

/// The file name the loader looks for inside a policy directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and provides access to a compensation policy.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// └── policy.yaml   # PF, professional tax, earnings split, leave defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard")?;
/// println!("Loaded policy: {}", loader.policy().name);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: CompensationPolicy,
}

impl ConfigLoader {
    /// Loads the policy from `policy.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `policy.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML or misses a field (`ConfigParseError`)
    /// - a value is out of range (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let policy = Self::load_yaml::<CompensationPolicy>(&policy_path)?;
        policy.validate()?;

        info!(
            policy = %policy.name,
            path = %policy_path.display(),
            "Loaded compensation policy"
        );

        Ok(Self { policy })
    }

    /// Wraps an already-built policy, validating it first.
    pub fn from_policy(policy: CompensationPolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> CompensationPolicy {
        self.policy
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            policy: CompensationPolicy::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "salary-engine-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().name, "standard");
    }

    #[test]
    fn test_shipped_policy_matches_standard() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy(), &CompensationPolicy::standard());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join(POLICY_FILE_NAME), "name: [unterminated").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_out_of_range_policy_returns_invalid_policy() {
        let dir = scratch_dir("out-of-range");
        let mut policy = CompensationPolicy::standard();
        policy.earnings.hra_ratio_of_basic = dec!(2);
        fs::write(
            dir.join(POLICY_FILE_NAME),
            serde_yaml::to_string(&policy).unwrap(),
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "earnings.hra_ratio_of_basic");
            }
            other => panic!("Expected InvalidPolicy error, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_from_policy_validates() {
        let mut policy = CompensationPolicy::standard();
        policy.default_days_in_month = 0;

        assert!(ConfigLoader::from_policy(policy).is_err());
    }

    #[test]
    fn test_default_loader_holds_standard_policy() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.into_policy(), CompensationPolicy::standard());
    }
}
