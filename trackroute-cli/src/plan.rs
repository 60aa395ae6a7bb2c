//! Plan command implementation for the Trackroute CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, FixedOffset};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trackroute_core::{OptimizedRoute, RoutePlanner, Waypoint, calculate_arrival_times};
use trackroute_export::{ExportFormat, render};
use trackroute_fs::{open_utf8_file, write_utf8_file};
use trackroute_solver::{Crossover, GeneticConfig, Strategy};

use crate::{
    ARG_CROSSOVER, ARG_FORMAT, ARG_GENERATIONS, ARG_MUTATION_RATE, ARG_OUTPUT, ARG_POPULATION,
    ARG_SEED, ARG_START_TIME, ARG_STRATEGY, ARG_WAYPOINTS, CliError, ENV_WAYPOINTS,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order a JSON array of waypoints into a maintenance route. \
                 The first waypoint is the start. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Plan a route through a set of waypoints"
)]
#[ortho_config(prefix = "TRACKROUTE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file holding an array of waypoints.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) waypoints: Option<Utf8PathBuf>,
    /// Ordering strategy: nearest-neighbour, genetic or priority.
    #[arg(long = ARG_STRATEGY, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<String>,
    /// Output format: json, gpx or kml.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Seed for the genetic strategy.
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Generations for the genetic strategy.
    #[arg(long = ARG_GENERATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) generations: Option<usize>,
    /// Population size for the genetic strategy.
    #[arg(long = ARG_POPULATION, value_name = "count")]
    #[serde(default)]
    pub(crate) population: Option<usize>,
    /// Mutation probability for the genetic strategy.
    #[arg(long = ARG_MUTATION_RATE, value_name = "rate")]
    #[serde(default)]
    pub(crate) mutation_rate: Option<f64>,
    /// Crossover operator for the genetic strategy: segment-copy or order.
    #[arg(long = ARG_CROSSOVER, value_name = "name")]
    #[serde(default)]
    pub(crate) crossover: Option<String>,
    /// Departure time (RFC 3339); adds arrival times to JSON output.
    #[arg(long = ARG_START_TIME, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) start_time: Option<String>,
    /// Write the route to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the waypoint JSON file.
    pub(crate) waypoints: Utf8PathBuf,
    pub(crate) strategy: Strategy,
    pub(crate) format: ExportFormat,
    pub(crate) genetic: GeneticConfig,
    pub(crate) start_time: Option<DateTime<FixedOffset>>,
    /// Destination file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.waypoints, ARG_WAYPOINTS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match trackroute_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let waypoints = args.waypoints.ok_or(CliError::MissingArgument {
            field: ARG_WAYPOINTS,
            env: ENV_WAYPOINTS,
        })?;
        let strategy = args
            .strategy
            .as_deref()
            .map(str::parse::<Strategy>)
            .transpose()?
            .unwrap_or_default();
        let format = args
            .format
            .as_deref()
            .map(str::parse::<ExportFormat>)
            .transpose()?
            .unwrap_or_default();
        let start_time = args
            .start_time
            .map(|value| {
                DateTime::parse_from_rfc3339(&value)
                    .map_err(|source| CliError::InvalidStartTime { value, source })
            })
            .transpose()?;

        let defaults = GeneticConfig::default();
        let mutation_rate = args.mutation_rate.unwrap_or(defaults.mutation_rate);
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(CliError::InvalidMutationRate {
                value: mutation_rate,
            });
        }
        let crossover = args
            .crossover
            .map(parse_crossover)
            .transpose()?
            .unwrap_or(defaults.crossover);
        let genetic = GeneticConfig {
            population_size: args.population.unwrap_or(defaults.population_size),
            generations: args.generations.unwrap_or(defaults.generations),
            mutation_rate,
            crossover,
            seed: args.seed,
        };

        Ok(Self {
            waypoints,
            strategy,
            format,
            genetic,
            start_time,
            output: args.output,
        })
    }
}

fn parse_crossover(value: String) -> Result<Crossover, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "segment-copy" | "segment" => Ok(Crossover::SegmentCopy),
        "order" | "ox" => Ok(Crossover::Order),
        _ => Err(CliError::InvalidCrossover { value }),
    }
}

/// JSON document printed for `--format json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlanReport {
    #[serde(flatten)]
    pub(crate) route: OptimizedRoute,
    /// One timestamp per waypoint when a start time was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) arrivals: Option<Vec<DateTime<FixedOffset>>>,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let route = execute_plan(&config)?;
    let document = render_document(&config, route)?;
    emit(&config, &document, writer)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(config: &PlanConfig) -> Result<OptimizedRoute, CliError> {
    let waypoints = load_waypoints(&config.waypoints)?;
    let optimizer = config
        .strategy
        .optimizer(config.genetic, RoutePlanner::default());
    let route = optimizer
        .optimize(&waypoints)
        .map_err(|source| CliError::Plan {
            path: config.waypoints.clone(),
            source,
        })?;
    info!(
        "planned {} route over {} waypoints: {:.1} km, {:.0} min",
        route.optimization_method,
        route.waypoints.len(),
        route.total_distance,
        route.total_duration
    );
    Ok(route)
}

fn render_document(config: &PlanConfig, route: OptimizedRoute) -> Result<String, CliError> {
    match config.format {
        ExportFormat::Json => {
            let arrivals = config
                .start_time
                .map(|start| calculate_arrival_times(&route, start));
            let report = PlanReport { route, arrivals };
            serde_json::to_string_pretty(&report).map_err(CliError::SerialiseReport)
        }
        format => Ok(render(&route, format)?),
    }
}

fn emit(config: &PlanConfig, document: &str, writer: &mut dyn Write) -> Result<(), CliError> {
    let payload = format!("{document}\n");
    if let Some(path) = &config.output {
        write_utf8_file(path, &payload).map_err(|source| CliError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        info!("wrote {} route to {path}", config.format);
        return Ok(());
    }
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteStdout)
}

/// Loads a JSON array of [`Waypoint`] values from disk.
pub(super) fn load_waypoints(path: &Utf8Path) -> Result<Vec<Waypoint>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenWaypoints {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseWaypoints {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
