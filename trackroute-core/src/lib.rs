//! Core domain types for the Trackroute maintenance route planner.
//!
//! The crate holds the waypoint model, the great-circle distance kernel, the
//! route builder and the arrival projector. Optimisation strategies live in
//! `trackroute-solver` and implement the [`Optimizer`] trait defined here;
//! exporters live in `trackroute-export`.
//!
//! Every operation is a pure, synchronous function over in-memory values.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod arrival;
mod builder;
pub mod geodesy;
mod optimizer;
mod params;
mod route;
mod terrain;
mod waypoint;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use arrival::calculate_arrival_times;
pub use builder::{RoutePlanner, build_route};
pub use optimizer::{MIN_WAYPOINTS, Optimizer, RouteError, ensure_routable};
pub use params::{
    DEFAULT_FUEL_COST_PER_KM, DifficultyThresholds, FALLBACK_SPEED_KMH, PlanningParams,
    SpeedProfile,
};
pub use route::{OptimizationMethod, OptimizedRoute, RouteSegment};
pub use terrain::{Difficulty, Terrain};
pub use waypoint::{Waypoint, WaypointKind};
