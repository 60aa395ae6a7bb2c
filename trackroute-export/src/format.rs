//! Output format selection.

use std::fmt;
use std::str::FromStr;

use log::debug;
use trackroute_core::OptimizedRoute;

use crate::{export_route_to_gpx, export_route_to_kml};

/// Document formats a route can be rendered to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Pretty-printed JSON of the whole route.
    #[default]
    Json,
    /// GPX 1.1 track.
    Gpx,
    /// KML 2.2 line string.
    Kml,
}

impl ExportFormat {
    /// Lowercase name, also used as the file extension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Gpx => "gpx",
            Self::Kml => "kml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognised format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format '{0}' (expected json, gpx or kml)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "gpx" => Ok(Self::Gpx),
            "kml" => Ok(Self::Kml),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

/// Errors raised while rendering a route.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// JSON serialisation failed.
    #[error("failed to serialise route as JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The GPX writer rejected the document.
    #[error("failed to write GPX: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
    /// The GPX writer produced bytes that are not UTF-8.
    #[error("GPX output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render `route` in `format`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if JSON serialisation fails and
/// [`ExportError::Gpx`] if the GPX writer fails. KML rendering cannot fail.
pub fn render(route: &OptimizedRoute, format: ExportFormat) -> Result<String, ExportError> {
    debug!(
        "rendering {} waypoint route as {format}",
        route.waypoints.len()
    );
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(route)?),
        ExportFormat::Gpx => export_route_to_gpx(route),
        ExportFormat::Kml => Ok(export_route_to_kml(route)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use trackroute_core::test_support::delhi_mumbai;
    use trackroute_core::{OptimizationMethod, build_route};

    #[rstest]
    #[case("json", ExportFormat::Json)]
    #[case("GPX", ExportFormat::Gpx)]
    #[case(" kml", ExportFormat::Kml)]
    fn parses_names(#[case] input: &str, #[case] expected: ExportFormat) {
        assert_eq!(input.parse::<ExportFormat>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_names() {
        assert_eq!(
            "shp".parse::<ExportFormat>(),
            Err(UnknownFormat("shp".to_owned()))
        );
    }

    #[rstest]
    fn json_uses_camel_case_route_fields() {
        let route = build_route(delhi_mumbai(), OptimizationMethod::NearestNeighbour)
            .expect("routable");
        let json = render(&route, ExportFormat::Json).expect("serialisable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["optimizationMethod"], "Nearest Neighbor");
        assert!(value["totalDistance"].as_f64().is_some());
        assert_eq!(value["waypoints"].as_array().map(Vec::len), Some(2));
    }

    #[rstest]
    #[case(ExportFormat::Gpx, "<gpx ")]
    #[case(ExportFormat::Kml, "<kml ")]
    fn xml_formats_dispatch(#[case] format: ExportFormat, #[case] marker: &str) {
        let route =
            build_route(delhi_mumbai(), OptimizationMethod::Priority).expect("routable");
        let document = render(&route, format).expect("route renders");
        assert!(document.contains(marker));
    }
}
