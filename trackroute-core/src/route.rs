//! Built routes: segments between consecutive waypoints plus aggregates.

use std::fmt;
use std::time::Duration;

use crate::{Difficulty, Terrain, Waypoint};

/// One directed hop between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RouteSegment {
    /// Departure waypoint.
    pub from: Waypoint,
    /// Arrival waypoint.
    pub to: Waypoint,
    /// Great-circle distance in kilometres.
    pub distance: f64,
    /// Estimated travel time in minutes.
    pub duration: f64,
    /// Terrain crossed.
    pub terrain: Terrain,
    /// Difficulty derived from the distance.
    pub difficulty: Difficulty,
}

impl RouteSegment {
    /// Travel time as a [`Duration`], saturating for unrepresentable values.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "segment durations are stored as fractional minutes"
    )]
    pub fn travel_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration * 60.0).unwrap_or_default()
    }
}

/// Strategy that produced an [`OptimizedRoute`].
///
/// # Examples
/// ```
/// use trackroute_core::OptimizationMethod;
///
/// assert_eq!(OptimizationMethod::NearestNeighbour.label(), "Nearest Neighbor");
/// assert_eq!(OptimizationMethod::Custom("Manual".into()).to_string(), "Manual");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum OptimizationMethod {
    /// Greedy nearest-neighbour tour.
    NearestNeighbour,
    /// Simplified genetic algorithm.
    Genetic,
    /// Descending priority order.
    Priority,
    /// Caller-supplied ordering with its own label.
    Custom(String),
}

impl OptimizationMethod {
    /// Human-readable label reported with the route.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::NearestNeighbour => "Nearest Neighbor",
            Self::Genetic => "Genetic Algorithm",
            Self::Priority => "Priority-based",
            Self::Custom(label) => label.as_str(),
        }
    }
}

impl fmt::Display for OptimizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for OptimizationMethod {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Nearest Neighbor" => Self::NearestNeighbour,
            "Genetic Algorithm" => Self::Genetic,
            "Priority-based" => Self::Priority,
            _ => Self::Custom(label),
        }
    }
}

impl From<OptimizationMethod> for String {
    fn from(method: OptimizationMethod) -> Self {
        match method {
            OptimizationMethod::Custom(label) => label,
            known => known.label().to_owned(),
        }
    }
}

/// The result of applying an optimisation strategy.
///
/// Routes are built by [`RoutePlanner`](crate::RoutePlanner) and are never
/// mutated afterwards; `segments.len()` is always `waypoints.len() - 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OptimizedRoute {
    /// Final visiting order; the first waypoint is the fixed start.
    pub waypoints: Vec<Waypoint>,
    /// Hops between consecutive waypoints.
    pub segments: Vec<RouteSegment>,
    /// Sum of segment distances in kilometres.
    pub total_distance: f64,
    /// Sum of segment durations in minutes.
    pub total_duration: f64,
    /// `total_distance` multiplied by the fuel rate.
    pub estimated_fuel_cost: f64,
    /// Strategy label.
    pub optimization_method: OptimizationMethod,
}

impl OptimizedRoute {
    /// The fixed starting waypoint, if any.
    #[must_use]
    pub fn start(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Identifiers in visiting order.
    #[must_use]
    pub fn waypoint_ids(&self) -> Vec<&str> {
        self.waypoints.iter().map(|w| w.id.as_str()).collect()
    }

    /// Total travel time as a [`Duration`].
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "route durations are stored as fractional minutes"
    )]
    pub fn travel_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.total_duration * 60.0).unwrap_or_default()
    }
}
