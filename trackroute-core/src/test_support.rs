//! Waypoint fixtures shared by unit tests, behaviour tests and benchmarks.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use crate::{Waypoint, WaypointKind};

/// Construct an untyped waypoint named after its identifier.
///
/// # Examples
/// ```rust
/// use trackroute_core::test_support::waypoint;
///
/// let w = waypoint("J1", 26.0, 80.0);
/// assert_eq!(w.name, "J1");
/// assert!(w.kind.is_none());
/// ```
#[must_use]
pub fn waypoint(id: &str, lat: f64, lng: f64) -> Waypoint {
    Waypoint::new(id, id, lat, lng)
}

/// Construct a station waypoint.
#[must_use]
pub fn station(id: &str, lat: f64, lng: f64) -> Waypoint {
    waypoint(id, lat, lng).with_kind(WaypointKind::Station)
}

/// Construct a cable joint waypoint.
#[must_use]
pub fn joint(id: &str, lat: f64, lng: f64) -> Waypoint {
    waypoint(id, lat, lng).with_kind(WaypointKind::Joint)
}

/// Delhi followed by Mumbai, neither typed.
#[must_use]
pub fn delhi_mumbai() -> Vec<Waypoint> {
    vec![
        Waypoint::new("S", "Delhi", 28.6139, 77.2090),
        Waypoint::new("M", "Mumbai", 19.0760, 72.8777),
    ]
}

/// A Lucknow-based maintenance round mixing stations, joints and sites.
#[must_use]
pub fn lucknow_division() -> Vec<Waypoint> {
    vec![
        station("LKO", 26.8467, 80.9462),
        joint("J-114", 26.7810, 80.8820).with_priority(2.0),
        station("BBK", 26.9330, 81.1950).with_priority(1.0),
        waypoint("M-07", 26.6000, 80.6500)
            .with_kind(WaypointKind::Maintenance)
            .with_priority(3.0)
            .with_estimated_time(45.0),
        station("UNA", 26.5400, 80.4900),
        joint("J-221", 26.9900, 81.0400).with_priority(2.0),
        station("KNP", 26.4499, 80.3319).with_priority(1.0),
    ]
}

/// `count` untyped waypoints on a deterministic spiral around Lucknow.
///
/// The spiral keeps distinct points at distinct distances from the start,
/// which avoids ties in greedy strategies.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fixture coordinates are generated with floating-point offsets"
)]
pub fn spiral(count: u32) -> Vec<Waypoint> {
    (0..count)
        .map(|i| {
            let step = f64::from(i);
            let radius = 0.05 * step;
            let angle = step * 0.7;
            waypoint(
                &format!("W{i}"),
                26.8467 + radius * angle.sin(),
                80.9462 + radius * angle.cos(),
            )
        })
        .collect()
}
