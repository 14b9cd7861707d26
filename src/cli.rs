use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;
use thiserror::Error;

use crate::api::{ProjectArgs, ProjectionResponse, build_input, build_projection_response};
use crate::error::InputError;

#[derive(Parser, Debug)]
#[command(
    name = "invest",
    about = "Investment growth projection (yearly interest ledger + HTTP API)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print the ledger for one set of inputs
    Project {
        #[command(flatten)]
        args: ProjectArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Invalid arguments exit with 2, output failures with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Input(_) => 2,
            CliError::Render(_) => 1,
        }
    }
}

pub fn run_projection(args: ProjectArgs, format: OutputFormat) -> Result<String, CliError> {
    let input = build_input(args)?;
    let response = build_projection_response(Some(input));
    Ok(match format {
        OutputFormat::Table => render_table(&response),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&response)?),
    })
}

pub fn render_table(response: &ProjectionResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:>16}  {:>14}  {:>16}  {:>16}",
        "Year", "Investment Value", "Interest", "Total Interest", "Invested Capital"
    );
    for row in &response.years {
        let _ = writeln!(
            out,
            "{:>4}  {:>16.2}  {:>14.2}  {:>16.2}  {:>16.2}",
            row.year, row.investment_value, row.interest, row.total_interest, row.invested_capital
        );
    }
    match response.summary {
        Some(summary) => {
            let _ = writeln!(
                out,
                "\nAfter {} year(s): value {:.2}, interest {:.2}",
                summary.years, summary.final_value, summary.total_interest
            );
        }
        None => out.push_str("\nNo years to project.\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(duration: i64) -> ProjectArgs {
        ProjectArgs {
            initial_investment: 1_000.0,
            annual_investment: 0.0,
            expected_return: 100.0,
            duration,
        }
    }

    #[test]
    fn cli_parses_project_flags() {
        let cli = Cli::try_parse_from([
            "invest",
            "project",
            "--initial-investment",
            "1500",
            "--expected-return",
            "6.5",
            "--duration",
            "12",
            "--format",
            "json",
        ])
        .expect("valid flags");

        match cli.command {
            Command::Project { args, format } => {
                assert_eq!(args.initial_investment, 1_500.0);
                assert_eq!(args.annual_investment, 0.0);
                assert_eq!(args.expected_return, 6.5);
                assert_eq!(args.duration, 12);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_serve_defaults_port() {
        let cli = Cli::try_parse_from(["invest", "serve"]).expect("valid flags");
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8080);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn table_lists_one_line_per_year_plus_summary() {
        let table = run_projection(args(3), OutputFormat::Table).expect("valid input");
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("Investment Value"));
        assert!(lines[1].trim_start().starts_with("1 "));
        assert!(lines[1].contains("1010.00"));
        assert!(lines[3].trim_start().starts_with("3 "));
        assert!(table.contains("After 3 year(s)"));
    }

    #[test]
    fn table_for_zero_duration_says_nothing_to_project() {
        let table = run_projection(args(0), OutputFormat::Table).expect("valid input");
        assert!(table.contains("No years to project."));
    }

    #[test]
    fn json_output_is_parseable() {
        let json = run_projection(args(2), OutputFormat::Json).expect("valid input");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json output");
        assert_eq!(value["years"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn invalid_flags_surface_input_error() {
        let mut bad = args(5);
        bad.annual_investment = -10.0;
        let err = run_projection(bad, OutputFormat::Table).expect_err("negative contribution");
        assert!(matches!(
            err,
            CliError::Input(InputError::Negative {
                field: "annualInvestment"
            })
        ));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "annualInvestment must be >= 0");
    }

    #[test]
    fn cli_accepts_negative_return_and_validates_other_negatives() {
        let cli = Cli::try_parse_from([
            "invest",
            "project",
            "--initial-investment",
            "1000",
            "--expected-return",
            "-5",
            "--duration",
            "3",
        ])
        .expect("negative return is a value, not a flag");

        let Command::Project { args, format } = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(args.expected_return, -5.0);
        let table = run_projection(args, format).expect("return above -100 is valid");
        assert!(table.contains("After 3 year(s)"));

        let cli = Cli::try_parse_from([
            "invest",
            "project",
            "--initial-investment",
            "-1",
            "--expected-return",
            "5",
            "--duration",
            "-2",
        ])
        .expect("negative values reach validation");
        let Command::Project { args, format } = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(args.duration, -2);
        let err = run_projection(args, format).expect_err("negative principal");
        assert!(err.to_string().contains("initialInvestment"));
    }
}
