//! Facade crate for the Trackroute maintenance route planner.
//!
//! This crate re-exports the core domain types and exposes the optimisation
//! strategies and GIS exporters behind feature flags.
//!
//! # Examples
//!
//! Plan Delhi to Mumbai, project arrivals and export the route. This needs the
//! default `solver` and `export` features.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use trackroute::{
//!     Terrain, Waypoint, calculate_arrival_times, export_route_to_gpx, export_route_to_kml,
//!     optimize_route_nearest_neighbour,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let route = optimize_route_nearest_neighbour(&[
//!     Waypoint::new("S", "Delhi", 28.6139, 77.2090),
//!     Waypoint::new("M", "Mumbai", 19.0760, 72.8777),
//! ])?;
//! let [segment] = route.segments.as_slice() else {
//!     return Err("expected exactly one segment".into());
//! };
//! assert!((segment.distance - 1148.1).abs() < 2.0);
//! assert_eq!(segment.terrain, Terrain::Road);
//!
//! let departure = Utc.with_ymd_and_hms(2024, 2, 12, 6, 0, 0).single().ok_or("departure")?;
//! let arrivals = calculate_arrival_times(&route, departure);
//! assert_eq!(arrivals.first(), Some(&departure));
//! assert_eq!(arrivals.len(), 2);
//!
//! let gpx = export_route_to_gpx(&route)?;
//! assert_eq!(gpx.matches("<trkpt ").count(), 2);
//! let kml = export_route_to_kml(&route);
//! assert!(kml.contains("77.209,28.6139,0 72.8777,19.076,0"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use trackroute_core::{
    Difficulty, DifficultyThresholds, OptimizationMethod, OptimizedRoute, Optimizer,
    PlanningParams, RouteError, RoutePlanner, RouteSegment, SpeedProfile, Terrain, Waypoint,
    WaypointKind, build_route, calculate_arrival_times, geodesy,
};

#[cfg(feature = "solver")]
pub use trackroute_solver::{
    Crossover, GeneticConfig, GeneticOptimizer, NearestNeighbourOptimizer, PriorityOptimizer,
    Strategy, optimize_route_genetic, optimize_route_nearest_neighbour, optimize_route_priority,
};

#[cfg(feature = "export")]
pub use trackroute_export::{
    ExportError, ExportFormat, GpxOptions, KmlOptions, export_route_to_gpx, export_route_to_kml, render,
};
