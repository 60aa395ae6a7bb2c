//! Planning parameters: terrain speeds, difficulty thresholds and fuel rate.
//!
//! The defaults reproduce the fixed tables used by the maintenance planner.
//! Callers that need different assumptions construct [`PlanningParams`]
//! explicitly and pass it to [`RoutePlanner`](crate::RoutePlanner).

use log::warn;

use crate::{Difficulty, Terrain};

/// Speed used when a configured terrain speed is unusable.
pub const FALLBACK_SPEED_KMH: f64 = 40.0;

/// Illustrative fuel rate in currency units per kilometre.
pub const DEFAULT_FUEL_COST_PER_KM: f64 = 0.15;

/// Average travel speed per terrain, in km/h.
///
/// # Examples
/// ```
/// use trackroute_core::{SpeedProfile, Terrain};
///
/// let speeds = SpeedProfile::default();
/// assert_eq!(speeds.speed_kmh(Terrain::Road), 60.0);
/// assert_eq!(speeds.speed_kmh(Terrain::Field), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SpeedProfile {
    /// Speed on roads.
    pub road_kmh: f64,
    /// Speed along the track.
    pub rail_kmh: f64,
    /// Speed across open ground.
    pub field_kmh: f64,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            road_kmh: 60.0,
            rail_kmh: 40.0,
            field_kmh: 20.0,
        }
    }
}

impl SpeedProfile {
    /// Speed for `terrain`.
    ///
    /// Speeds that are not finite and positive fall back to
    /// [`FALLBACK_SPEED_KMH`].
    #[must_use]
    pub fn speed_kmh(&self, terrain: Terrain) -> f64 {
        let configured = match terrain {
            Terrain::Road => self.road_kmh,
            Terrain::Rail => self.rail_kmh,
            Terrain::Field => self.field_kmh,
        };
        if configured.is_finite() && configured > 0.0 {
            configured
        } else {
            warn!(
                "unusable {terrain} speed {configured} km/h; using {FALLBACK_SPEED_KMH} km/h instead"
            );
            FALLBACK_SPEED_KMH
        }
    }
}

/// Distance thresholds separating segment difficulty classes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct DifficultyThresholds {
    /// Segments strictly longer than this are at least moderate.
    pub moderate_above_km: f64,
    /// Segments strictly longer than this are difficult.
    pub difficult_above_km: f64,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            moderate_above_km: 20.0,
            difficult_above_km: 50.0,
        }
    }
}

impl DifficultyThresholds {
    /// Classify a segment of `distance_km`.
    ///
    /// # Examples
    /// ```
    /// use trackroute_core::{Difficulty, DifficultyThresholds};
    ///
    /// let thresholds = DifficultyThresholds::default();
    /// assert_eq!(thresholds.classify(20.0), Difficulty::Easy);
    /// assert_eq!(thresholds.classify(50.0), Difficulty::Moderate);
    /// assert_eq!(thresholds.classify(50.1), Difficulty::Difficult);
    /// ```
    #[must_use]
    pub fn classify(&self, distance_km: f64) -> Difficulty {
        if distance_km > self.difficult_above_km {
            Difficulty::Difficult
        } else if distance_km > self.moderate_above_km {
            Difficulty::Moderate
        } else {
            Difficulty::Easy
        }
    }
}

/// Everything the route builder needs besides the waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PlanningParams {
    /// Terrain speed table.
    pub speeds: SpeedProfile,
    /// Difficulty thresholds.
    pub difficulty: DifficultyThresholds,
    /// Fuel cost per kilometre.
    pub fuel_cost_per_km: f64,
}

impl Default for PlanningParams {
    fn default() -> Self {
        Self {
            speeds: SpeedProfile::default(),
            difficulty: DifficultyThresholds::default(),
            fuel_cost_per_km: DEFAULT_FUEL_COST_PER_KM,
        }
    }
}
