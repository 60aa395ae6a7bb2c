//! Strategy selection and convenience entry points.

use std::fmt;
use std::str::FromStr;

use trackroute_core::{OptimizedRoute, Optimizer, RouteError, RoutePlanner, Waypoint};

use crate::{GeneticConfig, GeneticOptimizer, NearestNeighbourOptimizer, PriorityOptimizer};

/// Names the available ordering strategies.
///
/// # Examples
/// ```
/// use trackroute_solver::Strategy;
///
/// let strategy: Strategy = "genetic".parse().expect("known strategy");
/// assert_eq!(strategy, Strategy::Genetic);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`NearestNeighbourOptimizer`].
    #[default]
    NearestNeighbour,
    /// [`GeneticOptimizer`].
    Genetic,
    /// [`PriorityOptimizer`].
    Priority,
}

impl Strategy {
    /// Every strategy in declaration order.
    pub const ALL: [Self; 3] = [Self::NearestNeighbour, Self::Genetic, Self::Priority];

    /// Command-line spelling of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NearestNeighbour => "nearest-neighbour",
            Self::Genetic => "genetic",
            Self::Priority => "priority",
        }
    }

    /// Instantiate the optimizer for this strategy.
    ///
    /// `genetic` is only consulted by [`Strategy::Genetic`].
    #[must_use]
    pub fn optimizer(self, genetic: GeneticConfig, planner: RoutePlanner) -> Box<dyn Optimizer> {
        match self {
            Self::NearestNeighbour => Box::new(NearestNeighbourOptimizer::with_planner(planner)),
            Self::Genetic => Box::new(GeneticOptimizer::new(genetic).with_planner(planner)),
            Self::Priority => Box::new(PriorityOptimizer::with_planner(planner)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected nearest-neighbour, genetic or priority)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest-neighbour" | "nearest-neighbor" | "nearest" => Ok(Self::NearestNeighbour),
            "genetic" => Ok(Self::Genetic),
            "priority" => Ok(Self::Priority),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

/// Order `waypoints` greedily by proximity using default parameters.
///
/// # Errors
///
/// Returns [`RouteError::InsufficientWaypoints`] for fewer than two
/// waypoints.
pub fn optimize_route_nearest_neighbour(
    waypoints: &[Waypoint],
) -> Result<OptimizedRoute, RouteError> {
    NearestNeighbourOptimizer::default().optimize(waypoints)
}

/// Order `waypoints` with an unseeded genetic search using default settings.
///
/// The default segment-copy crossover can repeat or drop waypoints; use
/// [`GeneticOptimizer`] with [`Crossover::Order`](crate::Crossover::Order)
/// when every waypoint must be visited once.
///
/// # Errors
///
/// Returns [`RouteError::InsufficientWaypoints`] for fewer than two
/// waypoints.
pub fn optimize_route_genetic(waypoints: &[Waypoint]) -> Result<OptimizedRoute, RouteError> {
    GeneticOptimizer::default().optimize(waypoints)
}

/// Order `waypoints` by descending priority using default parameters.
///
/// # Errors
///
/// Returns [`RouteError::InsufficientWaypoints`] for fewer than two
/// waypoints.
pub fn optimize_route_priority(waypoints: &[Waypoint]) -> Result<OptimizedRoute, RouteError> {
    PriorityOptimizer::default().optimize(waypoints)
}
