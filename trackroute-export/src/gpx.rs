//! GPX 1.1 track export.

use ::gpx::{Gpx, GpxVersion, Track, TrackSegment};
use geo::Point;
use trackroute_core::{OptimizedRoute, Waypoint};

use crate::ExportError;

/// Document-level names written into a GPX export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpxOptions {
    /// Value of the `creator` attribute on the root element.
    pub creator: String,
    /// Name of the single track.
    pub track_name: String,
}

impl Default for GpxOptions {
    fn default() -> Self {
        Self {
            creator: "Railway Management System".to_owned(),
            track_name: "Maintenance Route".to_owned(),
        }
    }
}

/// Render `route` as a GPX 1.1 document with default names.
///
/// The document holds one track with one segment and a `trkpt` per waypoint
/// in visiting order, each named after its waypoint.
///
/// # Errors
///
/// Returns [`ExportError::Gpx`] if the document cannot be serialised.
///
/// # Examples
/// ```
/// use trackroute_core::{OptimizationMethod, Waypoint, build_route};
/// use trackroute_export::export_route_to_gpx;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = build_route(
///     vec![
///         Waypoint::new("S", "Delhi", 28.6139, 77.209),
///         Waypoint::new("M", "Mumbai", 19.076, 72.8777),
///     ],
///     OptimizationMethod::NearestNeighbour,
/// )?;
/// let gpx = export_route_to_gpx(&route)?;
/// assert!(gpx.contains(r#"xmlns="http://www.topografix.com/GPX/1/1""#));
/// assert_eq!(gpx.matches("<trkpt ").count(), 2);
/// # Ok(())
/// # }
/// ```
pub fn export_route_to_gpx(route: &OptimizedRoute) -> Result<String, ExportError> {
    export_route_to_gpx_with(route, &GpxOptions::default())
}

/// Render `route` as GPX using the names in `options`.
///
/// # Errors
///
/// Returns [`ExportError::Gpx`] if the document cannot be serialised.
pub fn export_route_to_gpx_with(
    route: &OptimizedRoute,
    options: &GpxOptions,
) -> Result<String, ExportError> {
    let mut segment = TrackSegment::default();
    segment
        .points
        .extend(route.waypoints.iter().map(track_point));

    let document = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(options.creator.clone()),
        tracks: vec![Track {
            name: Some(options.track_name.clone()),
            segments: vec![segment],
            ..Track::default()
        }],
        ..Gpx::default()
    };

    let mut buffer = Vec::new();
    ::gpx::write(&document, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn track_point(waypoint: &Waypoint) -> ::gpx::Waypoint {
    let mut point = ::gpx::Waypoint::new(Point::new(waypoint.lng, waypoint.lat));
    point.name = Some(waypoint.name.clone());
    point
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trackroute_core::test_support::{lucknow_division, station};
    use trackroute_core::{OptimizationMethod, build_route};

    #[fixture]
    fn route() -> OptimizedRoute {
        build_route(lucknow_division(), OptimizationMethod::Priority).expect("routable")
    }

    fn unbuilt(waypoints: Vec<Waypoint>) -> OptimizedRoute {
        OptimizedRoute {
            waypoints,
            segments: Vec::new(),
            total_distance: 0.0,
            total_duration: 0.0,
            estimated_fuel_cost: 0.0,
            optimization_method: OptimizationMethod::Custom("Manual".into()),
        }
    }

    fn parse(document: &str) -> Gpx {
        ::gpx::read(document.as_bytes()).expect("exported GPX parses")
    }

    fn only_segment(document: &Gpx) -> &TrackSegment {
        assert_eq!(document.tracks.len(), 1);
        let track = document.tracks.first().expect("one track");
        assert_eq!(track.segments.len(), 1);
        track.segments.first().expect("one segment")
    }

    #[rstest]
    fn root_carries_gpx_11_namespace(route: OptimizedRoute) {
        let gpx = export_route_to_gpx(&route).expect("serialisable");
        assert!(gpx.starts_with("<?xml"));
        assert!(gpx.contains(r#"xmlns="http://www.topografix.com/GPX/1/1""#));
        assert!(gpx.contains(r#"version="1.1""#));
        assert_eq!(parse(&gpx).version, GpxVersion::Gpx11);
    }

    #[rstest]
    fn one_track_point_per_waypoint_in_visiting_order(route: OptimizedRoute) {
        let gpx = export_route_to_gpx(&route).expect("serialisable");
        let document = parse(&gpx);
        let names: Vec<Option<&str>> = only_segment(&document)
            .points
            .iter()
            .map(|point| point.name.as_deref())
            .collect();
        let expected: Vec<Option<&str>> = route
            .waypoints
            .iter()
            .map(|w| Some(w.name.as_str()))
            .collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    fn points_keep_latitude_and_longitude(route: OptimizedRoute) {
        let gpx = export_route_to_gpx(&route).expect("serialisable");
        let document = parse(&gpx);
        for (point, waypoint) in only_segment(&document).points.iter().zip(&route.waypoints) {
            assert_eq!(point.point().y(), waypoint.lat);
            assert_eq!(point.point().x(), waypoint.lng);
        }
    }

    #[rstest]
    fn default_names_are_written(route: OptimizedRoute) {
        let gpx = export_route_to_gpx(&route).expect("serialisable");
        let document = parse(&gpx);
        assert_eq!(document.creator.as_deref(), Some("Railway Management System"));
        assert_eq!(
            document.tracks.first().and_then(|t| t.name.as_deref()),
            Some("Maintenance Route")
        );
    }

    #[rstest]
    fn options_override_names_and_are_escaped(route: OptimizedRoute) {
        let options = GpxOptions {
            creator: "Depot <North>".to_owned(),
            track_name: "Night shift".to_owned(),
        };
        let gpx = export_route_to_gpx_with(&route, &options).expect("serialisable");
        assert!(!gpx.contains("<North>"));
        let document = parse(&gpx);
        assert_eq!(document.creator.as_deref(), Some("Depot <North>"));
        assert_eq!(
            document.tracks.first().and_then(|t| t.name.as_deref()),
            Some("Night shift")
        );
    }

    #[rstest]
    fn waypoint_names_are_escaped() {
        let route = unbuilt(vec![
            Waypoint::new("a", "Signal & Telecom", 26.0, 80.0),
            Waypoint::new("b", "Joint <B>", 26.1, 80.1),
        ]);
        let gpx = export_route_to_gpx(&route).expect("serialisable");
        assert!(gpx.contains("Signal &amp; Telecom"));
        assert!(!gpx.contains("Joint <B>"));
        let document = parse(&gpx);
        let names: Vec<Option<&str>> = only_segment(&document)
            .points
            .iter()
            .map(|point| point.name.as_deref())
            .collect();
        assert_eq!(names, [Some("Signal & Telecom"), Some("Joint <B>")]);
    }

    #[rstest]
    fn empty_route_has_one_empty_segment() {
        let gpx = export_route_to_gpx(&unbuilt(Vec::new())).expect("serialisable");
        assert!(!gpx.contains("<trkpt"));
        let document = parse(&gpx);
        assert!(only_segment(&document).points.is_empty());
    }

    #[rstest]
    fn single_waypoint_route_has_one_point() {
        let gpx = export_route_to_gpx(&unbuilt(vec![station("LKO", 26.8467, 80.9462)]))
            .expect("serialisable");
        assert_eq!(gpx.matches("<trkpt ").count(), 1);
        let document = parse(&gpx);
        let point = only_segment(&document).points.first().expect("one point");
        assert_eq!(point.point().y(), 26.8467);
        assert_eq!(point.point().x(), 80.9462);
        assert_eq!(point.name.as_deref(), Some("LKO"));
    }
}
