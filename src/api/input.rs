use clap::Args;
use serde::Deserialize;

use crate::core::InvestmentInput;
use crate::error::InputError;

pub const MAX_DURATION_YEARS: i64 = 1_000;

/// Negative values parse so `build_input` can report them by field name.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long, allow_negative_numbers = true, help = "Principal invested at year 0")]
    pub initial_investment: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = 0.0,
        help = "Contribution added to the capital base once, before the first year"
    )]
    pub annual_investment: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Expected annual return in percent, e.g. 5"
    )]
    pub expected_return: f64,
    #[arg(long, allow_negative_numbers = true, help = "Number of years to project")]
    pub duration: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestmentPayload {
    initial_investment: Option<f64>,
    annual_investment: Option<f64>,
    #[serde(alias = "expectedReturnPercent", alias = "expected_return")]
    expected_return: Option<f64>,
    #[serde(alias = "investmentDuration", alias = "investmentDurationYears")]
    duration: Option<i64>,
}

/// Matches the input form: every field starts at zero.
pub fn default_args_for_api() -> ProjectArgs {
    ProjectArgs {
        initial_investment: 0.0,
        annual_investment: 0.0,
        expected_return: 0.0,
        duration: 0,
    }
}

pub fn build_input(args: ProjectArgs) -> Result<InvestmentInput, InputError> {
    for (field, value) in [
        ("initialInvestment", args.initial_investment),
        ("annualInvestment", args.annual_investment),
        ("expectedReturn", args.expected_return),
    ] {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field });
        }
    }

    if args.initial_investment < 0.0 {
        return Err(InputError::Negative {
            field: "initialInvestment",
        });
    }

    if args.annual_investment < 0.0 {
        return Err(InputError::Negative {
            field: "annualInvestment",
        });
    }

    if args.expected_return <= -100.0 {
        return Err(InputError::ReturnTooLow);
    }

    if !(0..=MAX_DURATION_YEARS).contains(&args.duration) {
        return Err(InputError::DurationOutOfRange {
            max: MAX_DURATION_YEARS,
        });
    }

    Ok(InvestmentInput {
        initial_investment: args.initial_investment,
        annual_investment: args.annual_investment,
        expected_return_percent: args.expected_return,
        investment_duration_years: args.duration,
    })
}

pub fn input_from_payload(payload: InvestmentPayload) -> Result<InvestmentInput, InputError> {
    let mut args = default_args_for_api();

    if let Some(v) = payload.initial_investment {
        args.initial_investment = v;
    }
    if let Some(v) = payload.annual_investment {
        args.annual_investment = v;
    }
    if let Some(v) = payload.expected_return {
        args.expected_return = v;
    }
    if let Some(v) = payload.duration {
        args.duration = v;
    }

    build_input(args)
}

#[cfg(test)]
pub(crate) fn input_from_json(json: &str) -> Result<InvestmentInput, InputError> {
    let payload = serde_json::from_str::<InvestmentPayload>(json)
        .map_err(|e| InputError::Payload(e.to_string()))?;
    input_from_payload(payload)
}
