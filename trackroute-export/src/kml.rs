//! KML 2.2 line-string export.

use trackroute_core::OptimizedRoute;

use crate::xml::escape;

/// Document-level names written into a KML export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmlOptions {
    /// Name of the enclosing `Document`.
    pub document_name: String,
    /// Name of the route `Placemark`.
    pub placemark_name: String,
}

impl Default for KmlOptions {
    fn default() -> Self {
        Self {
            document_name: "Railway Maintenance Route".to_owned(),
            placemark_name: "Route".to_owned(),
        }
    }
}

/// Render `route` as a KML 2.2 document with default names.
///
/// One placemark carries a `LineString` whose coordinates are
/// space-separated `lng,lat,0` triples in visiting order.
#[must_use]
pub fn export_route_to_kml(route: &OptimizedRoute) -> String {
    export_route_to_kml_with(route, &KmlOptions::default())
}

/// Render `route` as KML using the names in `options`.
#[must_use]
pub fn export_route_to_kml_with(route: &OptimizedRoute, options: &KmlOptions) -> String {
    let coordinates: Vec<String> = route
        .waypoints
        .iter()
        .map(|waypoint| format!("{},{},0", waypoint.lng, waypoint.lat))
        .collect();

    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n",
            "  <Document>\n",
            "    <name>{document}</name>\n",
            "    <Placemark>\n",
            "      <name>{placemark}</name>\n",
            "      <LineString>\n",
            "        <coordinates>\n",
            "          {coordinates}\n",
            "        </coordinates>\n",
            "      </LineString>\n",
            "    </Placemark>\n",
            "  </Document>\n",
            "</kml>"
        ),
        document = escape(&options.document_name),
        placemark = escape(&options.placemark_name),
        coordinates = coordinates.join(" "),
    )
}
