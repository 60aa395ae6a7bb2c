//! Waypoints: the named points a maintenance route visits.

use std::fmt;

use geo::Coord;

/// Category of a waypoint.
///
/// The category drives terrain classification. Labels outside the four known
/// categories are preserved verbatim in [`WaypointKind::Other`] and classify
/// like an untyped waypoint.
///
/// # Examples
/// ```
/// use trackroute_core::WaypointKind;
///
/// assert_eq!(WaypointKind::from("station"), WaypointKind::Station);
/// assert_eq!(WaypointKind::from("depot"), WaypointKind::Other("depot".into()));
/// assert_eq!(WaypointKind::Joint.as_str(), "joint");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum WaypointKind {
    /// A railway station.
    Station,
    /// A cable joint, usually reached across open ground.
    Joint,
    /// A maintenance site.
    Maintenance,
    /// A user-defined point.
    Custom,
    /// Any other label supplied by the caller.
    Other(String),
}

impl WaypointKind {
    /// Return the label used in waypoint files.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Station => "station",
            Self::Joint => "joint",
            Self::Maintenance => "maintenance",
            Self::Custom => "custom",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl From<&str> for WaypointKind {
    fn from(label: &str) -> Self {
        match label {
            "station" => Self::Station,
            "joint" => Self::Joint,
            "maintenance" => Self::Maintenance,
            "custom" => Self::Custom,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for WaypointKind {
    fn from(label: String) -> Self {
        match Self::from(label.as_str()) {
            Self::Other(_) => Self::Other(label),
            known => known,
        }
    }
}

impl From<WaypointKind> for String {
    fn from(kind: WaypointKind) -> Self {
        match kind {
            WaypointKind::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for WaypointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named geographic point of interest used as a routing input.
///
/// Coordinates are WGS84 decimal degrees. No range validation is performed;
/// out-of-range values produce meaningless but well-defined distances.
///
/// # Examples
/// ```
/// use trackroute_core::{Waypoint, WaypointKind};
///
/// let delhi = Waypoint::new("NDLS", "New Delhi", 28.6139, 77.2090)
///     .with_kind(WaypointKind::Station)
///     .with_priority(3.0);
///
/// assert_eq!(delhi.location().x, 77.2090);
/// assert_eq!(delhi.priority_or_default(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Waypoint {
    /// Caller-assigned identifier; opaque to the planner.
    pub id: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Human-readable label.
    pub name: String,
    /// Optional category, serialised as `type`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<WaypointKind>,
    /// Visiting priority; only the priority strategy reads it.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub priority: Option<f64>,
    /// Advisory time on site in minutes. Carried through unchanged.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub estimated_time: Option<f64>,
}

impl Waypoint {
    /// Construct an untyped waypoint without priority or time estimate.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            name: name.into(),
            kind: None,
            priority: None,
            estimated_time: None,
        }
    }

    /// Set the waypoint category.
    #[must_use]
    pub fn with_kind(mut self, kind: WaypointKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the visiting priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the advisory time on site, in minutes.
    #[must_use]
    pub fn with_estimated_time(mut self, minutes: f64) -> Self {
        self.estimated_time = Some(minutes);
        self
    }

    /// Position as a `geo` coordinate with `x = lng` and `y = lat`.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    /// Priority with absent values treated as zero.
    #[must_use]
    pub fn priority_or_default(&self) -> f64 {
        self.priority.unwrap_or_default()
    }

    /// Whether the waypoint carries the given known category.
    #[must_use]
    pub fn is(&self, kind: &WaypointKind) -> bool {
        self.kind.as_ref() == Some(kind)
    }
}
