//! Ordering by descending waypoint priority.

use std::cmp::Ordering;

use trackroute_core::{
    OptimizationMethod, OptimizedRoute, Optimizer, RouteError, RoutePlanner, Waypoint,
    ensure_routable,
};

/// Keeps the start fixed and visits the remaining waypoints from highest to
/// lowest priority.
///
/// Missing priorities count as zero. The sort is stable: equal priorities
/// keep their input order. A `NaN` priority is treated as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityOptimizer {
    planner: RoutePlanner,
}

impl PriorityOptimizer {
    /// Construct an optimizer that builds routes with `planner`.
    #[must_use]
    pub const fn with_planner(planner: RoutePlanner) -> Self {
        Self { planner }
    }

    /// Order `waypoints` by priority behind the first entry.
    #[must_use]
    pub fn order(waypoints: &[Waypoint]) -> Vec<Waypoint> {
        let Some((start, rest)) = waypoints.split_first() else {
            return Vec::new();
        };
        let mut remaining = rest.to_vec();
        remaining.sort_by(|a, b| {
            sort_key(b)
                .partial_cmp(&sort_key(a))
                .unwrap_or(Ordering::Equal)
        });

        let mut ordered = Vec::with_capacity(waypoints.len());
        ordered.push(start.clone());
        ordered.extend(remaining);
        ordered
    }
}

fn sort_key(waypoint: &Waypoint) -> f64 {
    let priority = waypoint.priority_or_default();
    if priority.is_nan() { 0.0 } else { priority }
}

impl Optimizer for PriorityOptimizer {
    fn method(&self) -> OptimizationMethod {
        OptimizationMethod::Priority
    }

    fn optimize(&self, waypoints: &[Waypoint]) -> Result<OptimizedRoute, RouteError> {
        ensure_routable(waypoints)?;
        self.planner.build(Self::order(waypoints), self.method())
    }
}
