//! Greedy nearest-neighbour ordering.

use trackroute_core::geodesy::distance_km;
use trackroute_core::{
    OptimizationMethod, OptimizedRoute, Optimizer, RouteError, RoutePlanner, Waypoint,
    ensure_routable,
};

/// Visits the closest unvisited waypoint at every step.
///
/// Ties keep the earliest candidate in input order, so the ordering is fully
/// deterministic.
///
/// # Examples
/// ```
/// use trackroute_core::{Optimizer, Waypoint};
/// use trackroute_solver::NearestNeighbourOptimizer;
///
/// # fn main() -> Result<(), trackroute_core::RouteError> {
/// let route = NearestNeighbourOptimizer::default().optimize(&[
///     Waypoint::new("s", "Start", 0.0, 0.0),
///     Waypoint::new("far", "Far", 0.0, 2.0),
///     Waypoint::new("near", "Near", 0.0, 1.0),
/// ])?;
/// assert_eq!(route.waypoint_ids(), ["s", "near", "far"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbourOptimizer {
    planner: RoutePlanner,
}

impl NearestNeighbourOptimizer {
    /// Construct an optimizer that builds routes with `planner`.
    #[must_use]
    pub const fn with_planner(planner: RoutePlanner) -> Self {
        Self { planner }
    }

    /// Order `waypoints` greedily from the first entry.
    #[must_use]
    pub fn order(waypoints: &[Waypoint]) -> Vec<Waypoint> {
        let Some((start, rest)) = waypoints.split_first() else {
            return Vec::new();
        };

        let mut unvisited: Vec<&Waypoint> = rest.iter().collect();
        let mut ordered = Vec::with_capacity(waypoints.len());
        ordered.push(start.clone());
        let mut current = start;

        while !unvisited.is_empty() {
            let mut nearest = 0;
            let mut nearest_distance = f64::INFINITY;
            for (index, candidate) in unvisited.iter().enumerate() {
                let distance = distance_km(current, candidate);
                if distance < nearest_distance {
                    nearest = index;
                    nearest_distance = distance;
                }
            }
            current = unvisited.remove(nearest);
            ordered.push(current.clone());
        }

        ordered
    }
}

impl Optimizer for NearestNeighbourOptimizer {
    fn method(&self) -> OptimizationMethod {
        OptimizationMethod::NearestNeighbour
    }

    fn optimize(&self, waypoints: &[Waypoint]) -> Result<OptimizedRoute, RouteError> {
        ensure_routable(waypoints)?;
        self.planner.build(Self::order(waypoints), self.method())
    }
}
