//! Errors raised when user-entered values are turned into an [`InvestmentInput`].
//!
//! The projection itself never fails; these only guard the API and CLI
//! boundaries.
//!
//! [`InvestmentInput`]: crate::core::InvestmentInput

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be >= 0")]
    Negative { field: &'static str },

    #[error("expectedReturn must be > -100")]
    ReturnTooLow,

    #[error("duration must be between 0 and {max} years")]
    DurationOutOfRange { max: i64 },

    #[error("Invalid payload: {0}")]
    Payload(String),
}
