//! Compensation policy configuration.
//!
//! This module holds the business constants the engine computes with
//! (provident fund rate and cap, professional tax, earnings split, leave
//! defaults) and loads them from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/standard").unwrap();
//! println!("Professional tax: {}", loader.policy().professional_tax);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{CompensationPolicy, EarningsSplit, LeaveDefaults, ProvidentFundPolicy};
