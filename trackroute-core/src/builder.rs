//! Turn an ordered waypoint sequence into a segmented route.

use log::debug;

use crate::geodesy::{classify_terrain, distance_km, estimate_duration_minutes_with};
use crate::optimizer::ensure_routable;
use crate::{OptimizationMethod, OptimizedRoute, PlanningParams, RouteError, RouteSegment, Waypoint};

/// Builds [`OptimizedRoute`] values using a fixed set of planning parameters.
///
/// # Examples
/// ```
/// use trackroute_core::{OptimizationMethod, RoutePlanner, Waypoint};
///
/// # fn main() -> Result<(), trackroute_core::RouteError> {
/// let planner = RoutePlanner::default();
/// let route = planner.build(
///     vec![
///         Waypoint::new("a", "A", 0.0, 0.0),
///         Waypoint::new("b", "B", 0.0, 0.1),
///     ],
///     OptimizationMethod::Custom("Manual".into()),
/// )?;
/// assert_eq!(route.segments.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoutePlanner {
    params: PlanningParams,
}

impl RoutePlanner {
    /// Construct a planner with explicit parameters.
    #[must_use]
    pub const fn new(params: PlanningParams) -> Self {
        Self { params }
    }

    /// Parameters used by this planner.
    #[must_use]
    pub const fn params(&self) -> &PlanningParams {
        &self.params
    }

    /// Build a route visiting `ordered` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InsufficientWaypoints`] for fewer than two
    /// waypoints.
    #[expect(
        clippy::float_arithmetic,
        reason = "route aggregates are floating-point sums"
    )]
    pub fn build(
        &self,
        ordered: Vec<Waypoint>,
        method: OptimizationMethod,
    ) -> Result<OptimizedRoute, RouteError> {
        ensure_routable(&ordered)?;

        let segments: Vec<RouteSegment> = ordered
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(self.segment(from, to)),
                _ => None,
            })
            .collect();

        let mut total_distance = 0.0;
        let mut total_duration = 0.0;
        for segment in &segments {
            total_distance += segment.distance;
            total_duration += segment.duration;
        }
        let estimated_fuel_cost = total_distance * self.params.fuel_cost_per_km;

        debug!(
            "built {method} route: {} segments, {total_distance:.3} km, {total_duration:.1} min",
            segments.len()
        );

        Ok(OptimizedRoute {
            waypoints: ordered,
            segments,
            total_distance,
            total_duration,
            estimated_fuel_cost,
            optimization_method: method,
        })
    }

    fn segment(&self, from: &Waypoint, to: &Waypoint) -> RouteSegment {
        let distance = distance_km(from, to);
        let terrain = classify_terrain(from, to);
        let duration = estimate_duration_minutes_with(&self.params.speeds, distance, terrain);
        RouteSegment {
            from: from.clone(),
            to: to.clone(),
            distance,
            duration,
            terrain,
            difficulty: self.params.difficulty.classify(distance),
        }
    }
}

/// Build a route with the default planning parameters.
///
/// # Errors
///
/// Returns [`RouteError::InsufficientWaypoints`] for fewer than two
/// waypoints.
pub fn build_route(
    ordered: Vec<Waypoint>,
    method: OptimizationMethod,
) -> Result<OptimizedRoute, RouteError> {
    RoutePlanner::default().build(ordered, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, SpeedProfile, Terrain, WaypointKind};
    use rstest::{fixture, rstest};

    #[fixture]
    fn corridor() -> Vec<Waypoint> {
        vec![
            Waypoint::new("LKO", "Lucknow", 26.8467, 80.9462).with_kind(WaypointKind::Station),
            Waypoint::new("KNP", "Kanpur", 26.4499, 80.3319).with_kind(WaypointKind::Station),
            Waypoint::new("J7", "Joint 7", 26.4600, 80.3500).with_kind(WaypointKind::Joint),
            Waypoint::new("M2", "Depot", 26.2000, 80.1000).with_kind(WaypointKind::Maintenance),
        ]
    }

    #[rstest]
    fn aggregates_match_segments(corridor: Vec<Waypoint>) {
        let route = build_route(corridor, OptimizationMethod::Priority).expect("route");
        assert_eq!(route.segments.len(), route.waypoints.len() - 1);
        let distance: f64 = route.segments.iter().map(|s| s.distance).sum();
        let duration: f64 = route.segments.iter().map(|s| s.duration).sum();
        assert!((route.total_distance - distance).abs() < 1e-6);
        assert!((route.total_duration - duration).abs() < 1e-6);
        assert!((route.estimated_fuel_cost - route.total_distance * 0.15).abs() < 1e-6);
    }

    #[rstest]
    fn segments_carry_terrain_and_difficulty(corridor: Vec<Waypoint>) {
        let route = build_route(corridor, OptimizationMethod::Priority).expect("route");
        let terrains: Vec<_> = route.segments.iter().map(|s| s.terrain).collect();
        assert_eq!(terrains, vec![Terrain::Rail, Terrain::Field, Terrain::Field]);
        let difficulties: Vec<_> = route.segments.iter().map(|s| s.difficulty).collect();
        assert_eq!(
            difficulties,
            vec![Difficulty::Difficult, Difficulty::Easy, Difficulty::Moderate]
        );
    }

    #[rstest]
    fn identical_points_give_zero_segment() {
        let a = Waypoint::new("a", "A", 12.0, 77.0);
        let route = build_route(vec![a.clone(), a], OptimizationMethod::NearestNeighbour)
            .expect("degenerate route is valid");
        let segment = route.segments.first().expect("one segment");
        assert!(segment.distance.abs() < f64::EPSILON);
        assert!(segment.duration.abs() < f64::EPSILON);
        assert_eq!(segment.difficulty, Difficulty::Easy);
    }

    #[rstest]
    fn custom_params_change_duration_and_cost(corridor: Vec<Waypoint>) {
        let params = PlanningParams {
            speeds: SpeedProfile {
                road_kmh: 30.0,
                rail_kmh: 80.0,
                field_kmh: 10.0,
            },
            fuel_cost_per_km: 1.0,
            ..PlanningParams::default()
        };
        let default_route =
            build_route(corridor.clone(), OptimizationMethod::Priority).expect("route");
        let custom_route = RoutePlanner::new(params)
            .build(corridor, OptimizationMethod::Priority)
            .expect("route");
        assert!((custom_route.estimated_fuel_cost - custom_route.total_distance).abs() < 1e-9);
        let rail_default = default_route.segments.first().expect("segment").duration;
        let rail_custom = custom_route.segments.first().expect("segment").duration;
        assert!((rail_default - 2.0 * rail_custom).abs() < 1e-9);
    }

    #[rstest]
    fn rejects_single_waypoint() {
        let err = build_route(
            vec![Waypoint::new("a", "A", 0.0, 0.0)],
            OptimizationMethod::NearestNeighbour,
        )
        .expect_err("single waypoint");
        assert_eq!(err, RouteError::InsufficientWaypoints { found: 1 });
    }
}
