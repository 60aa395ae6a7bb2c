//! Error types emitted by the Trackroute CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use trackroute_core::RouteError;
use trackroute_export::{ExportError, UnknownFormat};
use trackroute_solver::UnknownStrategy;

/// Errors emitted by the Trackroute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The logger could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass <path> or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// The strategy name is not recognised.
    #[error(transparent)]
    InvalidStrategy(#[from] UnknownStrategy),
    /// The output format is not recognised.
    #[error(transparent)]
    InvalidFormat(#[from] UnknownFormat),
    /// The crossover operator is not recognised.
    #[error("unknown crossover '{value}' (expected segment-copy or order)")]
    InvalidCrossover {
        /// Value as supplied.
        value: String,
    },
    /// The mutation rate lies outside `[0, 1]`.
    #[error("mutation rate {value} must lie between 0 and 1")]
    InvalidMutationRate {
        /// Rate as supplied.
        value: f64,
    },
    /// The start time is not an RFC 3339 timestamp.
    #[error("start time {value:?} is not an RFC 3339 timestamp: {source}")]
    InvalidStartTime {
        /// Value as supplied.
        value: String,
        /// Underlying timestamp parse error.
        #[source]
        source: chrono::ParseError,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option name as spelled on the command line.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option name as spelled on the command line.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option name as spelled on the command line.
        field: &'static str,
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the waypoint file failed.
    #[error("failed to open waypoints at {path:?}: {source}")]
    OpenWaypoints {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Waypoint JSON could not be decoded.
    #[error("failed to parse waypoints JSON at {path:?}: {source}")]
    ParseWaypoints {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The optimiser rejected the waypoint set.
    #[error("cannot plan a route from {path:?}: {source}")]
    Plan {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Reason the route could not be built.
        #[source]
        source: RouteError,
    },
    /// Serialising the JSON report failed.
    #[error("failed to serialise route report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Rendering GPX or KML failed.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Writing the output file failed.
    #[error("failed to write route to {path:?}: {source}")]
    WriteOutput {
        /// Path involved in the failure.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Writing to stdout failed.
    #[error("failed to write route output: {0}")]
    WriteStdout(#[source] std::io::Error),
}
