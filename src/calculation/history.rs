//! Salary history filtering and summary.
//!
//! A payroll history is a list of resolved slips. Callers narrow it with a
//! [`HistoryFilter`] and aggregate it into a [`PayrollSummary`] for the
//! totals row of a history view.

use rust_decimal::Decimal;

use crate::models::{HistoryFilter, PayrollSummary, SalarySlip, YearMonth};

use super::round_currency;

impl HistoryFilter {
    /// Returns true when `slip` satisfies every criterion that is set.
    ///
    /// Year and month criteria read the slip's `yearMonth` field; a slip
    /// without a parseable `yearMonth` never matches them.
    pub fn matches(&self, slip: &SalarySlip) -> bool {
        if let Some(employee_id) = &self.employee_id {
            if slip.employee_id.as_deref() != Some(employee_id.as_str()) {
                return false;
            }
        }

        if let Some(department) = &self.department {
            if slip.extra_str("department") != Some(department.as_str()) {
                return false;
            }
        }

        if self.year.is_some() || self.month.is_some() {
            let period = slip
                .extra_str("yearMonth")
                .and_then(|value| value.parse::<YearMonth>().ok());
            let Some(period) = period else {
                return false;
            };
            if self.year.is_some_and(|year| year != period.year()) {
                return false;
            }
            if self.month.is_some_and(|month| month != period.month()) {
                return false;
            }
        }

        true
    }
}

impl PayrollSummary {
    /// Summarizes a slice of resolved slips.
    pub fn from_slips(slips: &[SalarySlip]) -> Self {
        summarize_history(slips)
    }
}

/// Returns the slips matching `filter`, in input order.
pub fn filter_history<'a>(slips: &'a [SalarySlip], filter: &HistoryFilter) -> Vec<&'a SalarySlip> {
    slips.iter().filter(|slip| filter.matches(slip)).collect()
}

/// Aggregates resolved slips into summary totals.
///
/// Totals saturate at the decimal bounds rather than overflow.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{normalize, summarize_history};
/// use salary_engine::models::SalarySlipInput;
/// use rust_decimal::Decimal;
///
/// let slips = vec![
///     normalize(&SalarySlipInput { base_salary: Some(Decimal::from(20000)), ..Default::default() }),
///     normalize(&SalarySlipInput { base_salary: Some(Decimal::from(50000)), ..Default::default() }),
/// ];
///
/// let summary = summarize_history(slips.iter());
/// assert_eq!(summary.total_slips, 2);
/// assert_eq!(summary.total_pf, Decimal::from(6000));
/// ```
pub fn summarize_history<'a, I>(slips: I) -> PayrollSummary
where
    I: IntoIterator<Item = &'a SalarySlip>,
{
    let mut summary = PayrollSummary::default();

    for slip in slips {
        summary.total_slips += 1;
        summary.total_gross_salary = summary.total_gross_salary.saturating_add(slip.gross_salary);
        summary.total_net_salary = summary.total_net_salary.saturating_add(slip.net_salary);
        summary.total_pf = summary.total_pf.saturating_add(slip.pf_amount);
        summary.total_professional_tax = summary
            .total_professional_tax
            .saturating_add(slip.professional_tax);
        summary.total_bonus = summary
            .total_bonus
            .saturating_add(slip.bonus.unwrap_or(Decimal::ZERO));
        summary.total_deductions = summary
            .total_deductions
            .saturating_add(slip.total_deductions());
    }

    if summary.total_slips > 0 {
        summary.average_net_salary =
            round_currency(summary.total_net_salary / Decimal::from(summary.total_slips));
    }

    summary
}
