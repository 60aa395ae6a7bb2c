//! Great-circle distance, travel time and terrain primitives.
//!
//! Everything here is a pure function of its inputs. Coordinates are WGS84
//! decimal degrees and are not range-checked.

use geo::{Coord, Intersects, Rect};

use crate::{SpeedProfile, Terrain, Waypoint, WaypointKind};

/// Mean Earth radius used by the Haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate length of one degree of latitude, in kilometres.
pub const KM_PER_DEGREE: f64 = 111.32;

/// Great-circle distance between two waypoints in kilometres.
///
/// # Examples
/// ```
/// use trackroute_core::{Waypoint, geodesy::distance_km};
///
/// let delhi = Waypoint::new("S", "Delhi", 28.6139, 77.2090);
/// let mumbai = Waypoint::new("M", "Mumbai", 19.0760, 72.8777);
/// let km = distance_km(&delhi, &mumbai);
/// assert!((1146.0..1150.0).contains(&km));
/// assert_eq!(distance_km(&delhi, &delhi), 0.0);
/// ```
#[must_use]
pub fn distance_km(a: &Waypoint, b: &Waypoint) -> f64 {
    haversine_km(a.location(), b.location())
}

/// Haversine distance between two `x = lng`, `y = lat` coordinates.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.y.to_radians().cos() * b.y.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}

/// Sum of consecutive great-circle distances along `waypoints`.
///
/// Sequences shorter than two waypoints have zero length.
#[must_use]
pub fn tour_distance_km(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| match pair {
            [from, to] => distance_km(from, to),
            _ => 0.0,
        })
        .sum()
}

/// Minutes needed to cover `distance_km` on `terrain` at the default speeds.
///
/// # Examples
/// ```
/// use trackroute_core::{Terrain, geodesy::estimate_duration_minutes};
///
/// assert_eq!(estimate_duration_minutes(60.0, Terrain::Road), 60.0);
/// assert_eq!(estimate_duration_minutes(10.0, Terrain::Field), 30.0);
/// assert_eq!(estimate_duration_minutes(0.0, Terrain::Rail), 0.0);
/// ```
#[must_use]
pub fn estimate_duration_minutes(distance_km: f64, terrain: Terrain) -> f64 {
    estimate_duration_minutes_with(&SpeedProfile::default(), distance_km, terrain)
}

/// Minutes needed to cover `distance_km` on `terrain` using `speeds`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "durations derive from floating-point distances and speeds"
)]
pub fn estimate_duration_minutes_with(
    speeds: &SpeedProfile,
    distance_km: f64,
    terrain: Terrain,
) -> f64 {
    distance_km / speeds.speed_kmh(terrain) * 60.0
}

/// Terrain between two waypoints.
///
/// Rules, first match wins: both stations is rail; either endpoint a joint
/// is field; anything else is road. A station paired with a joint is
/// therefore field.
#[must_use]
pub fn classify_terrain(from: &Waypoint, to: &Waypoint) -> Terrain {
    if from.is(&WaypointKind::Station) && to.is(&WaypointKind::Station) {
        Terrain::Rail
    } else if from.is(&WaypointKind::Joint) || to.is(&WaypointKind::Joint) {
        Terrain::Field
    } else {
        Terrain::Road
    }
}

/// Initial great-circle bearing from `from` to `to`, in degrees `[0, 360)`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "bearing calculation is floating-point trigonometry"
)]
pub fn bearing_degrees(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let d_lng = (to.x - from.x).to_radians();
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative angles.
    if bearing >= 360.0 { 0.0 } else { bearing }
}

/// Whether `point` lies within `radius_km` of `centre` (inclusive).
#[must_use]
pub fn within_geofence(point: Coord<f64>, centre: Coord<f64>, radius_km: f64) -> bool {
    haversine_km(point, centre) <= radius_km
}

/// Approximate circular geofence polygon around `centre`.
///
/// Vertices start due north and proceed clockwise. The radius is converted
/// to degrees with [`KM_PER_DEGREE`] on both axes, so the ring is only
/// circular near the equator.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "ring vertices are computed with floating-point trigonometry"
)]
pub fn geofence_ring(centre: Coord<f64>, radius_km: f64, points: u32) -> Vec<Coord<f64>> {
    let radius_deg = radius_km / KM_PER_DEGREE;
    (0..points)
        .map(|i| {
            let angle = (f64::from(i) * 360.0 / f64::from(points)).to_radians();
            Coord {
                x: centre.x + radius_deg * angle.sin(),
                y: centre.y + radius_deg * angle.cos(),
            }
        })
        .collect()
}

/// Bounding rectangle of `waypoints`, or `None` when empty.
///
/// # Examples
/// ```
/// use trackroute_core::{Waypoint, geodesy::bounds};
///
/// let rect = bounds(&[
///     Waypoint::new("a", "A", 10.0, 20.0),
///     Waypoint::new("b", "B", 12.0, 18.0),
/// ])
/// .expect("non-empty input");
/// assert_eq!(rect.min().x, 18.0);
/// assert_eq!(rect.max().y, 12.0);
/// assert!(bounds(&[]).is_none());
/// ```
#[must_use]
pub fn bounds(waypoints: &[Waypoint]) -> Option<Rect<f64>> {
    let mut locations = waypoints.iter().map(Waypoint::location);
    let first = locations.next()?;
    let (min, max) = locations.fold((first, first), |(min, max), c| {
        (
            Coord {
                x: min.x.min(c.x),
                y: min.y.min(c.y),
            },
            Coord {
                x: max.x.max(c.x),
                y: max.y.max(c.y),
            },
        )
    });
    Some(Rect::new(min, max))
}

/// Waypoints inside `rect`; points on the boundary are kept.
#[must_use]
pub fn filter_within(waypoints: &[Waypoint], rect: &Rect<f64>) -> Vec<Waypoint> {
    waypoints
        .iter()
        .filter(|waypoint| rect.intersects(&waypoint.location()))
        .cloned()
        .collect()
}
