//! Command-line interface for the Wayfare destination and route assessor.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod analyze;
mod error;
mod route;
mod sources;

pub use error::CliError;

use analyze::{AnalyzeArgs, run_analyze_with};
use route::{RouteArgs, run_route_with};

const ARG_LAT: &str = "lat";
const ARG_LNG: &str = "lng";
const ARG_FROM_LAT: &str = "from-lat";
const ARG_FROM_LNG: &str = "from-lng";
const ARG_TO_LAT: &str = "to-lat";
const ARG_TO_LNG: &str = "to-lng";
const ARG_OBSERVATIONS: &str = "observations";
const ENV_ANALYZE_LAT: &str = "WAYFARE_CMDS_ANALYZE_LAT";
const ENV_ANALYZE_LNG: &str = "WAYFARE_CMDS_ANALYZE_LNG";
const ENV_ANALYZE_OBSERVATIONS: &str = "WAYFARE_CMDS_ANALYZE_OBSERVATIONS";
const ENV_ROUTE_FROM_LAT: &str = "WAYFARE_CMDS_ROUTE_FROM_LAT";
const ENV_ROUTE_FROM_LNG: &str = "WAYFARE_CMDS_ROUTE_FROM_LNG";
const ENV_ROUTE_TO_LAT: &str = "WAYFARE_CMDS_ROUTE_TO_LAT";
const ENV_ROUTE_TO_LNG: &str = "WAYFARE_CMDS_ROUTE_TO_LNG";
const ENV_ROUTE_OBSERVATIONS: &str = "WAYFARE_CMDS_ROUTE_OBSERVATIONS";

/// Run the Wayfare CLI with the current process arguments and environment,
/// writing results to standard output.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, configuration cannot be
/// merged, the observation file cannot be loaded, or output cannot be
/// written. Source failures during analysis are not errors; they produce
/// fallback records in the output.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Analyze(args) => run_analyze_with(args, writer),
        Command::Route(args) => run_route_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfare",
    about = "Destination health, safety and route risk assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse a single destination.
    Analyze(AnalyzeArgs),
    /// Plan a route and assess its risk.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
