//! Overflow-safe amount arithmetic.
//!
//! Slips come from outside the engine, so a product or difference of two
//! amounts can fall outside the `Decimal` range. Rules do their arithmetic
//! through [`SaturatingArithmetic`], which pins such results to
//! `Decimal::MAX` or `Decimal::MIN` and remembers that it did.

use rust_decimal::Decimal;

use crate::models::AuditWarning;

/// Warning code raised when an amount hit the limits of the decimal range.
pub const AMOUNT_SATURATED: &str = "AMOUNT_SATURATED";

/// Checked `Decimal` operations that saturate instead of panicking.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::SaturatingArithmetic;
/// use rust_decimal::Decimal;
///
/// let mut arithmetic = SaturatingArithmetic::default();
/// assert_eq!(arithmetic.mul(Decimal::from(6), Decimal::from(7)), Decimal::from(42));
/// assert!(!arithmetic.saturated());
///
/// assert_eq!(arithmetic.mul(Decimal::MAX, Decimal::from(2)), Decimal::MAX);
/// assert!(arithmetic.saturated());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturatingArithmetic {
    saturated: bool,
}

impl SaturatingArithmetic {
    /// `lhs + rhs`, saturating at the decimal bounds.
    pub fn add(&mut self, lhs: Decimal, rhs: Decimal) -> Decimal {
        match lhs.checked_add(rhs) {
            Some(sum) => sum,
            None => {
                self.saturated = true;
                lhs.saturating_add(rhs)
            }
        }
    }

    /// `lhs - rhs`, saturating at the decimal bounds.
    pub fn sub(&mut self, lhs: Decimal, rhs: Decimal) -> Decimal {
        match lhs.checked_sub(rhs) {
            Some(difference) => difference,
            None => {
                self.saturated = true;
                lhs.saturating_sub(rhs)
            }
        }
    }

    /// `lhs * rhs`, saturating at the decimal bounds.
    pub fn mul(&mut self, lhs: Decimal, rhs: Decimal) -> Decimal {
        match lhs.checked_mul(rhs) {
            Some(product) => product,
            None => {
                self.saturated = true;
                lhs.saturating_mul(rhs)
            }
        }
    }

    /// Returns true once any operation has saturated.
    pub fn saturated(&self) -> bool {
        self.saturated
    }

    /// The warning to record for `rule_name`, if anything saturated.
    pub fn warning(&self, rule_name: &str) -> Option<AuditWarning> {
        self.saturated.then(|| {
            AuditWarning::new(
                AMOUNT_SATURATED,
                format!(
                    "{} exceeded the supported amount range; result pinned at the limit",
                    rule_name
                ),
                "high",
            )
        })
    }
}
