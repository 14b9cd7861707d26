mod engine;
mod store;
mod types;

pub use engine::{calculate_investment_results, summarize_ledger};
pub use store::InputStore;
pub use types::{InvestmentInput, InvestmentYearRecord, LedgerSummary};
