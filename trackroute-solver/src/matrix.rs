//! Pairwise distance lookup over a fixed waypoint slice.

use trackroute_core::Waypoint;
use trackroute_core::geodesy::distance_km;

/// Row-major table of great-circle distances in kilometres.
#[derive(Debug, Clone)]
pub(crate) struct DistanceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn new(waypoints: &[Waypoint]) -> Self {
        let cells = waypoints
            .iter()
            .flat_map(|from| waypoints.iter().map(move |to| distance_km(from, to)))
            .collect();
        Self {
            size: waypoints.len(),
            cells,
        }
    }

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "indices are bounded by the matrix size"
    )]
    pub(crate) fn get(&self, from: usize, to: usize) -> f64 {
        self.cells
            .get(from * self.size + to)
            .copied()
            .unwrap_or_default()
    }

    /// Length of the open path visiting `tour` in order.
    #[expect(
        clippy::float_arithmetic,
        reason = "tour lengths are floating-point sums"
    )]
    pub(crate) fn tour_length(&self, tour: &[usize]) -> f64 {
        tour.windows(2)
            .map(|pair| match pair {
                [from, to] => self.get(*from, *to),
                _ => 0.0,
            })
            .sum()
    }
}
