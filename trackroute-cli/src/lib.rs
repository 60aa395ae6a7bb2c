//! Command-line interface for planning railway maintenance routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod error;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_WAYPOINTS: &str = "waypoints";
const ARG_STRATEGY: &str = "strategy";
const ARG_FORMAT: &str = "format";
const ARG_SEED: &str = "seed";
const ARG_GENERATIONS: &str = "generations";
const ARG_POPULATION: &str = "population";
const ARG_MUTATION_RATE: &str = "mutation-rate";
const ARG_CROSSOVER: &str = "crossover";
const ARG_START_TIME: &str = "start-time";
const ARG_OUTPUT: &str = "output";
const ENV_WAYPOINTS: &str = "TRACKROUTE_CMDS_PLAN_WAYPOINTS";

/// Run the Trackroute CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration, planning or
/// output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(CliError::Logging)
}

#[derive(Debug, Parser)]
#[command(
    name = "trackroute",
    about = "Plan cable maintenance routes across railway waypoints",
    version
)]
struct Cli {
    /// Log progress at info level.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order waypoints into a route and export it.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
