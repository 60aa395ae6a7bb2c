//! Project a built route onto a clock.

use chrono::{DateTime, TimeDelta, TimeZone};
use log::warn;

use crate::OptimizedRoute;

/// Arrival time at every waypoint of `route` when departing at `start`.
///
/// Element 0 is `start` itself; each later element advances the previous one
/// by the matching segment duration. Durations are applied in whole
/// milliseconds with the fractional part truncated, step by step. The time
/// zone of `start` is preserved.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use trackroute_core::{OptimizationMethod, Waypoint, arrival::calculate_arrival_times, build_route};
///
/// # fn main() -> Result<(), trackroute_core::RouteError> {
/// let route = build_route(
///     vec![
///         Waypoint::new("a", "A", 0.0, 0.0),
///         Waypoint::new("b", "B", 0.0, 1.0),
///     ],
///     OptimizationMethod::NearestNeighbour,
/// )?;
/// let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
/// let arrivals = calculate_arrival_times(&route, start);
/// assert_eq!(arrivals.len(), 2);
/// assert_eq!(arrivals[0], start);
/// assert!(arrivals[1] > start);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn calculate_arrival_times<Tz: TimeZone>(
    route: &OptimizedRoute,
    start: DateTime<Tz>,
) -> Vec<DateTime<Tz>> {
    let mut arrivals = Vec::with_capacity(route.segments.len() + 1);
    let mut current = start;
    for segment in &route.segments {
        arrivals.push(current.clone());
        let step = minutes_to_delta(segment.duration);
        current = match current.clone().checked_add_signed(step) {
            Some(next) => next,
            None => {
                warn!(
                    "arrival after segment {} -> {} overflows the calendar; holding previous time",
                    segment.from.id, segment.to.id
                );
                current
            }
        };
    }
    arrivals.push(current);
    arrivals
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "fractional minutes are truncated to whole milliseconds"
)]
fn minutes_to_delta(minutes: f64) -> TimeDelta {
    let millis = (minutes * 60_000.0).trunc() as i64;
    TimeDelta::try_milliseconds(millis.max(0)).unwrap_or_else(TimeDelta::zero)
}
