//! Coarse terrain and difficulty classes attached to route segments.
//!
//! # Examples
//! ```
//! use trackroute_core::{Difficulty, Terrain};
//!
//! assert_eq!(Terrain::Rail.as_str(), "rail");
//! assert_eq!(Difficulty::Moderate.to_string(), "moderate");
//! ```

use std::fmt;
use std::str::FromStr;

/// Terrain crossed by a segment; determines the assumed travel speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Terrain {
    /// Public roads between sites.
    Road,
    /// Along the track between two stations.
    Rail,
    /// Open ground, typically towards a cable joint.
    Field,
}

impl Terrain {
    /// Return the terrain as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Rail => "rail",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Terrain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "road" => Ok(Self::Road),
            "rail" => Ok(Self::Rail),
            "field" => Ok(Self::Field),
            _ => Err(format!("unknown terrain '{s}'")),
        }
    }
}

/// Difficulty of a segment, derived from its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Difficulty {
    /// Short hop.
    Easy,
    /// Medium distance.
    Moderate,
    /// Long haul.
    Difficult,
}

impl Difficulty {
    /// Return the difficulty as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
