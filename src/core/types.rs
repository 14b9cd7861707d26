use serde::Serialize;

/// Parameters submitted by the input form.
///
/// `expected_return_percent` is a plain percentage (`7.0` means 7%).
/// A duration of zero or less projects no years.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentInput {
    pub initial_investment: f64,
    pub annual_investment: f64,
    #[serde(rename = "expectedReturn")]
    pub expected_return_percent: f64,
    #[serde(rename = "duration")]
    pub investment_duration_years: i64,
}

/// One row of the ledger.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentYearRecord {
    pub year: u32,
    /// Capital base at the start of the year.
    pub invested_capital: f64,
    pub interest: f64,
    pub total_interest: f64,
    /// `invested_capital + interest`.
    pub investment_value: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub years: u32,
    pub invested_capital: f64,
    pub total_interest: f64,
    pub final_value: f64,
}
