//! Ordering strategies plug into the planner through [`Optimizer`].

use thiserror::Error;

use crate::{OptimizationMethod, OptimizedRoute, Waypoint};

/// Smallest waypoint list a route can be built from.
pub const MIN_WAYPOINTS: usize = 2;

/// Errors returned by [`Optimizer::optimize`] and the route builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Fewer than [`MIN_WAYPOINTS`] waypoints were supplied.
    #[error("at least {MIN_WAYPOINTS} waypoints required, got {found}")]
    InsufficientWaypoints {
        /// Number of waypoints actually supplied.
        found: usize,
    },
}

/// Reject waypoint lists that cannot form a route.
///
/// # Errors
///
/// Returns [`RouteError::InsufficientWaypoints`] when `waypoints` holds fewer
/// than [`MIN_WAYPOINTS`] entries.
pub const fn ensure_routable(waypoints: &[Waypoint]) -> Result<(), RouteError> {
    if waypoints.len() < MIN_WAYPOINTS {
        return Err(RouteError::InsufficientWaypoints {
            found: waypoints.len(),
        });
    }
    Ok(())
}

/// Reorder waypoints into a route.
///
/// The first waypoint is the fixed start and implementations never move it.
/// Implementations must return [`RouteError::InsufficientWaypoints`] for
/// short input rather than panicking, and must be `Send + Sync` so a boxed
/// optimiser can be shared between threads.
///
/// The route always holds one entry per input waypoint. Only strategies that
/// permute their input visit each waypoint exactly once; a genetic search
/// using positional segment-copy crossover may repeat some waypoints and
/// drop others. Select order crossover where a permutation is required.
pub trait Optimizer: Send + Sync {
    /// Strategy label attached to produced routes.
    fn method(&self) -> OptimizationMethod;

    /// Produce a route starting at the first waypoint.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InsufficientWaypoints`] for fewer than two
    /// waypoints.
    fn optimize(&self, waypoints: &[Waypoint]) -> Result<OptimizedRoute, RouteError>;
}
