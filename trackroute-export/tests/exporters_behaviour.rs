//! Behavioural tests for the GPX and KML exporters using rstest-bdd.

use std::cell::RefCell;

use gpx::{Gpx, TrackSegment};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use trackroute_core::test_support::station;
use trackroute_core::{OptimizationMethod, OptimizedRoute, Waypoint, build_route};
use trackroute_export::{ExportFormat, render};

#[derive(Debug, Default)]
struct ExportWorld {
    route: RefCell<Option<OptimizedRoute>>,
    document: RefCell<String>,
}

impl ExportWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn export(&self, format: ExportFormat) {
        let route = self.route.borrow().clone().expect("route recorded");
        let document = render(&route, format).expect("export succeeds");
        self.document.replace(document);
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn parsed_gpx(&self) -> Gpx {
        gpx::read(self.document.borrow().as_bytes()).expect("exported GPX parses")
    }

    fn coordinates(&self) -> String {
        let document = self.document.borrow();
        document
            .split_once("<coordinates>")
            .and_then(|(_, rest)| rest.split_once("</coordinates>"))
            .map_or_else(String::new, |(body, _)| body.trim().to_owned())
    }
}

#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn only_segment(document: &Gpx) -> &TrackSegment {
    assert_eq!(document.tracks.len(), 1);
    let track = document.tracks.first().expect("one track");
    assert_eq!(track.segments.len(), 1);
    track.segments.first().expect("one segment")
}

fn route_of(waypoints: Vec<Waypoint>) -> OptimizedRoute {
    OptimizedRoute {
        waypoints,
        segments: Vec::new(),
        total_distance: 0.0,
        total_duration: 0.0,
        estimated_fuel_cost: 0.0,
        optimization_method: OptimizationMethod::Custom("Manual".into()),
    }
}

#[fixture]
fn world() -> ExportWorld {
    ExportWorld::default()
}

#[given("a three stop route from Lucknow to Kanpur")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_three_stops(world: &ExportWorld) {
    let route = build_route(
        vec![
            station("LKO", 26.8467, 80.9462),
            station("UNA", 26.54, 80.49),
            station("KNP", 26.4499, 80.3319),
        ],
        OptimizationMethod::Custom("Manual".into()),
    )
    .expect("three waypoints are routable");
    world.route.replace(Some(route));
}

#[given("a route without waypoints")]
fn given_empty_route(world: &ExportWorld) {
    world.route.replace(Some(route_of(Vec::new())));
}

#[given("a route holding only Lucknow")]
fn given_single_waypoint(world: &ExportWorld) {
    world
        .route
        .replace(Some(route_of(vec![station("LKO", 26.8467, 80.9462)])));
}

#[when("the route is exported as GPX")]
fn when_gpx(world: &ExportWorld) {
    world.export(ExportFormat::Gpx);
}

#[when("the route is exported as KML")]
fn when_kml(world: &ExportWorld) {
    world.export(ExportFormat::Kml);
}

#[then("the document lists 3 track points in visiting order")]
fn then_three_points(world: &ExportWorld) {
    assert_eq!(world.document.borrow().matches("<trkpt ").count(), 3);
    let document = world.parsed_gpx();
    let names: Vec<Option<&str>> = only_segment(&document)
        .points
        .iter()
        .map(|point| point.name.as_deref())
        .collect();
    assert_eq!(names, [Some("LKO"), Some("UNA"), Some("KNP")]);
}

#[then("every track point carries its waypoint position")]
fn then_positions(world: &ExportWorld) {
    let document = world.parsed_gpx();
    let positions: Vec<(f64, f64)> = only_segment(&document)
        .points
        .iter()
        .map(|point| (point.point().y(), point.point().x()))
        .collect();
    assert_eq!(
        positions,
        [(26.8467, 80.9462), (26.54, 80.49), (26.4499, 80.3319)]
    );
}

#[then("the coordinates hold 3 lng,lat,0 triples")]
fn then_triples(world: &ExportWorld) {
    assert_eq!(
        world.coordinates(),
        "80.9462,26.8467,0 80.49,26.54,0 80.3319,26.4499,0"
    );
}

#[then("the document is a well-formed GPX skeleton")]
fn then_skeleton(world: &ExportWorld) {
    assert!(!world.document.borrow().contains("<trkpt"));
    let document = world.parsed_gpx();
    assert!(only_segment(&document).points.is_empty());
}

#[then("the document lists 1 track point at Lucknow")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_single_point(world: &ExportWorld) {
    let document = world.parsed_gpx();
    let segment = only_segment(&document);
    assert_eq!(segment.points.len(), 1);
    let point = segment.points.first().expect("one point");
    assert_eq!(point.name.as_deref(), Some("LKO"));
    assert_eq!((point.point().y(), point.point().x()), (26.8467, 80.9462));
}

#[then("the KML elements are balanced")]
fn then_kml_balanced(world: &ExportWorld) {
    let document = world.document.borrow();
    for (open, close) in [
        ("<kml ", "</kml>"),
        ("<Document>", "</Document>"),
        ("<Placemark>", "</Placemark>"),
        ("<LineString>", "</LineString>"),
        ("<coordinates>", "</coordinates>"),
    ] {
        assert_eq!(document.matches(open).count(), 1, "{open}");
        assert_eq!(document.matches(close).count(), 1, "{close}");
        assert!(document.find(open) < document.find(close), "{open}");
    }
}

#[then("the coordinates are empty")]
fn then_no_coordinates(world: &ExportWorld) {
    assert_eq!(world.coordinates(), "");
}

#[then("the coordinates hold the single triple 80.9462,26.8467,0")]
fn then_single_triple(world: &ExportWorld) {
    assert_eq!(world.coordinates(), "80.9462,26.8467,0");
}

#[scenario(path = "tests/features/exporters.feature", index = 0)]
fn gpx_three_stops(world: ExportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exporters.feature", index = 1)]
fn kml_three_stops(world: ExportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exporters.feature", index = 2)]
fn gpx_empty_route(world: ExportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exporters.feature", index = 3)]
fn kml_empty_route(world: ExportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exporters.feature", index = 4)]
fn gpx_single_waypoint(world: ExportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/exporters.feature", index = 5)]
fn kml_single_waypoint(world: ExportWorld) {
    let _ = world;
}
