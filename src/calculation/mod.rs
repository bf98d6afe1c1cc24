//! Calculation logic for the salary engine.
//!
//! This module contains the individual pay rules (input resolution,
//! provident fund, per-day salary, absent deduction, professional tax, net
//! pay, earnings split, leave balance), overflow-safe amount arithmetic,
//! the normalization pipeline that chains them, boundary validation, draft
//! slip generation, and payroll history summaries.

mod absent_deduction;
mod draft;
mod earnings_split;
mod history;
mod leave_balance;
mod normalize;
mod professional_tax;
mod provident_fund;
mod resolve_inputs;
mod rounding;
mod saturating;
mod validation;

pub use absent_deduction::{
    AbsentDeductionResult, PerDaySalaryResult, calculate_absent_deduction,
    calculate_per_day_salary,
};
pub use draft::draft_slip;
pub use earnings_split::{
    EarningsSplitResult, NET_PAY_CLAMPED, NetPayResult, calculate_net_pay, split_earnings,
};
pub use history::{filter_history, summarize_history};
pub use leave_balance::{LeaveBalance, LeaveBalanceResult, resolve_leave_balance};
pub use normalize::{normalize, normalize_batch, normalize_with_policy, normalize_with_trace};
pub use professional_tax::{ProfessionalTaxResult, apply_professional_tax};
pub use provident_fund::{ProvidentFundResult, calculate_provident_fund};
pub use resolve_inputs::{DAYS_IN_MONTH_DEFAULTED, InputResolution, ResolvedInputs, resolve_inputs};
pub use rounding::round_currency;
pub use saturating::{AMOUNT_SATURATED, SaturatingArithmetic};
pub use validation::{MAX_INPUT_MAGNITUDE, validate_input};
