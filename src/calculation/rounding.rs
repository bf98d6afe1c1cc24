//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole currency units, half away from zero.
///
/// Every derived amount on a slip goes through this function exactly once,
/// at the step that produces it. Ties always move away from zero, so
/// `0.5` becomes `1` and `-0.5` becomes `-1`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::round_currency;
///
/// assert_eq!(round_currency(dec!(666.666)), dec!(667));
/// assert_eq!(round_currency(dec!(2.5)), dec!(3));
/// assert_eq!(round_currency(dec!(-2.5)), dec!(-3));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
