use super::types::{InvestmentInput, InvestmentYearRecord, LedgerSummary};

/// Upper bound on the rows reserved up front; longer ledgers grow as they go.
const PREALLOCATED_YEARS: u32 = 1_024;

/// Projects `inputs` year by year.
///
/// The annual contribution is folded into the capital base once, before the
/// first year, and is not added again. The return percentage is scaled by 100
/// twice: once into a rate and again when computing each year's interest.
///
/// Years are numbered with `u32`, so a duration above `u32::MAX` is clamped to
/// `u32::MAX` rows. The loop is otherwise unbounded; callers taking durations
/// from users should cap them first (the API and CLI stop at
/// `MAX_DURATION_YEARS`).
pub fn calculate_investment_results(inputs: &InvestmentInput) -> Vec<InvestmentYearRecord> {
    if inputs.investment_duration_years <= 0 {
        return Vec::new();
    }
    let years = u32::try_from(inputs.investment_duration_years).unwrap_or(u32::MAX);

    let interest_rate = inputs.expected_return_percent / 100.0;
    let mut invested_capital = inputs.initial_investment + inputs.annual_investment;
    let mut total_interest = 0.0;

    let mut results = Vec::with_capacity(ledger_capacity(years));
    for year in 1..=years {
        let interest = invested_capital * (interest_rate / 100.0);
        total_interest += interest;
        let investment_value = invested_capital + interest;

        results.push(InvestmentYearRecord {
            year,
            invested_capital,
            interest,
            total_interest,
            investment_value,
        });

        invested_capital = investment_value;
    }
    results
}

fn ledger_capacity(years: u32) -> usize {
    years.min(PREALLOCATED_YEARS) as usize
}

pub fn summarize_ledger(records: &[InvestmentYearRecord]) -> Option<LedgerSummary> {
    let first = records.first()?;
    let last = records.last()?;
    Some(LedgerSummary {
        years: last.year,
        invested_capital: first.invested_capital,
        total_interest: last.total_interest,
        final_value: last.investment_value,
    })
}
