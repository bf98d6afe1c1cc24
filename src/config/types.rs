//! Compensation policy types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from `policy.yaml` files. The standard policy is also
//! available in code through [`CompensationPolicy::standard`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Provident fund deduction rules.
///
/// Salaries below the wage ceiling contribute `rate` of the base salary;
/// salaries at or above it contribute the flat amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidentFundPolicy {
    /// Contribution rate applied below the ceiling (e.g. 0.12).
    pub rate: Decimal,
    /// Base salary from which the flat amount applies instead of the rate.
    pub wage_ceiling: Decimal,
    /// Flat monthly contribution at or above the ceiling.
    pub flat_amount: Decimal,
}

/// Ratios used to split net pay into earnings components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSplit {
    /// Share of net pay paid as basic.
    pub basic_ratio: Decimal,
    /// HRA as a share of basic.
    pub hra_ratio_of_basic: Decimal,
}

/// Leave entitlements filled in when a slip does not carry its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDefaults {
    /// Total paid leaves per year.
    pub total: Decimal,
    /// Casual leaves per year.
    pub casual: Decimal,
    /// Sick leaves per year.
    pub sick: Decimal,
}

/// The complete set of business constants the engine computes with.
///
/// # Example
///
/// ```
/// use salary_engine::config::CompensationPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = CompensationPolicy::standard();
/// assert_eq!(policy.professional_tax, Decimal::from(200));
/// assert_eq!(policy.default_days_in_month, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationPolicy {
    /// A short name identifying the policy (e.g. "standard").
    pub name: String,
    /// Provident fund rules.
    pub provident_fund: ProvidentFundPolicy,
    /// Fixed professional tax per pay period.
    pub professional_tax: Decimal,
    /// Earnings split ratios.
    pub earnings: EarningsSplit,
    /// Month length used when a slip carries none.
    pub default_days_in_month: u32,
    /// Leave entitlement defaults.
    pub leave_defaults: LeaveDefaults,
}

impl CompensationPolicy {
    /// Returns the standard policy: 12% PF below 30000 with a 3600 flat cap,
    /// 200 professional tax, 30/70 earnings split, 30-day months and 6/4/2 leaves.
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            provident_fund: ProvidentFundPolicy {
                rate: Decimal::new(12, 2),
                wage_ceiling: Decimal::from(30_000),
                flat_amount: Decimal::from(3_600),
            },
            professional_tax: Decimal::from(200),
            earnings: EarningsSplit {
                basic_ratio: Decimal::new(30, 2),
                hra_ratio_of_basic: Decimal::new(70, 2),
            },
            default_days_in_month: 30,
            leave_defaults: LeaveDefaults {
                total: Decimal::from(6),
                casual: Decimal::from(4),
                sick: Decimal::from(2),
            },
        }
    }

    /// Checks that every value is usable by the engine.
    ///
    /// Amounts must be non-negative, ratios must lie in `0..=1` and the
    /// default month length must be positive.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("provident_fund.rate", self.provident_fund.rate),
            ("provident_fund.wage_ceiling", self.provident_fund.wage_ceiling),
            ("provident_fund.flat_amount", self.provident_fund.flat_amount),
            ("professional_tax", self.professional_tax),
            ("leave_defaults.total", self.leave_defaults.total),
            ("leave_defaults.casual", self.leave_defaults.casual),
            ("leave_defaults.sick", self.leave_defaults.sick),
        ];
        for (field, value) in non_negative {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(invalid(field, format!("must not be negative, got {}", value)));
            }
        }

        let ratios = [
            ("provident_fund.rate", self.provident_fund.rate),
            ("earnings.basic_ratio", self.earnings.basic_ratio),
            ("earnings.hra_ratio_of_basic", self.earnings.hra_ratio_of_basic),
        ];
        for (field, value) in ratios {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(invalid(field, format!("must be between 0 and 1, got {}", value)));
            }
        }

        if self.default_days_in_month == 0 {
            return Err(invalid("default_days_in_month", "must be positive".to_string()));
        }

        Ok(())
    }
}

impl Default for CompensationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.to_string(),
        message,
    }
}
