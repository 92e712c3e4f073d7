#![forbid(unsafe_code)]

//! Snap tuning knobs.
//!
//! Three distances govern snapping and they must not be conflated:
//!
//! | Knob | Default | Meaning |
//! |------|---------|---------|
//! | `tolerance` | 5 mm | A candidate offset strictly below this is applied. |
//! | `guide_epsilon` | 0.1 mm | Coordinates this close count as "the same" when emitting and deduplicating guides. |
//! | `proximity_threshold` | 20 mm | Radius for highlighting near alignments without moving anything. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default snap-acceptance tolerance.
pub const DEFAULT_SNAP_TOLERANCE_MM: f64 = 5.0;
/// Default guide-equality epsilon.
pub const GUIDE_MATCH_EPSILON_MM: f64 = 0.1;
/// Default proximity-highlight threshold.
pub const PROXIMITY_THRESHOLD_MM: f64 = 20.0;

/// Configuration for the snap engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Snap-acceptance tolerance. Zero disables snapping.
    pub tolerance: f64,
    /// Guide-equality epsilon.
    pub guide_epsilon: f64,
    /// Proximity-highlight threshold.
    pub proximity_threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SNAP_TOLERANCE_MM,
            guide_epsilon: GUIDE_MATCH_EPSILON_MM,
            proximity_threshold: PROXIMITY_THRESHOLD_MM,
        }
    }
}

impl SnapConfig {
    /// Set the snap-acceptance tolerance.
    ///
    /// [`validate`](Self::validate) requires the proximity threshold to be at
    /// least the tolerance; past [`PROXIMITY_THRESHOLD_MM`], raise it too with
    /// [`with_proximity_threshold`](Self::with_proximity_threshold).
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the guide-equality epsilon.
    #[must_use]
    pub fn with_guide_epsilon(mut self, epsilon: f64) -> Self {
        self.guide_epsilon = epsilon;
        self
    }

    /// Set the proximity-highlight threshold. Must not be below the tolerance.
    #[must_use]
    pub fn with_proximity_threshold(mut self, threshold: f64) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    /// Check the knobs are finite, non-negative, and ordered sensibly.
    pub fn validate(&self) -> Result<(), SnapConfigError> {
        let fields = [
            ("tolerance", self.tolerance),
            ("guide_epsilon", self.guide_epsilon),
            ("proximity_threshold", self.proximity_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SnapConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(SnapConfigError::Negative { field, value });
            }
        }
        if self.guide_epsilon == 0.0 {
            return Err(SnapConfigError::ZeroGuideEpsilon);
        }
        if self.proximity_threshold < self.tolerance {
            return Err(SnapConfigError::ProximityBelowTolerance {
                proximity: self.proximity_threshold,
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }
}

/// Rejected snap configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapConfigError {
    /// A knob is NaN or infinite.
    NonFinite { field: &'static str },
    /// A knob is below zero.
    Negative { field: &'static str, value: f64 },
    /// Guides can never match with a zero epsilon.
    ZeroGuideEpsilon,
    /// Highlight radius smaller than the snap radius.
    ProximityBelowTolerance { proximity: f64, tolerance: f64 },
}

impl fmt::Display for SnapConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "{field} must be finite"),
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::ZeroGuideEpsilon => write!(f, "guide_epsilon must be greater than zero"),
            Self::ProximityBelowTolerance {
                proximity,
                tolerance,
            } => write!(
                f,
                "proximity_threshold ({proximity}) must be at least tolerance ({tolerance})"
            ),
        }
    }
}

impl std::error::Error for SnapConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_distinct_and_valid() {
        let config = SnapConfig::default();
        assert_eq!(config.tolerance, 5.0);
        assert_eq!(config.guide_epsilon, 0.1);
        assert_eq!(config.proximity_threshold, 20.0);
        assert!(config.guide_epsilon < config.tolerance);
        assert!(config.tolerance < config.proximity_threshold);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_sets_fields() {
        let config = SnapConfig::default()
            .with_tolerance(8.0)
            .with_guide_epsilon(0.5)
            .with_proximity_threshold(30.0);
        assert_eq!(config.tolerance, 8.0);
        assert_eq!(config.guide_epsilon, 0.5);
        assert_eq!(config.proximity_threshold, 30.0);
    }

    #[test]
    fn zero_tolerance_disables_snapping_but_is_valid() {
        assert_eq!(SnapConfig::default().with_tolerance(0.0).validate(), Ok(()));
    }

    #[test]
    fn rejects_nan() {
        let err = SnapConfig::default()
            .with_tolerance(f64::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err, SnapConfigError::NonFinite { field: "tolerance" });
        assert_eq!(err.to_string(), "tolerance must be finite");
    }

    #[test]
    fn rejects_negative() {
        let err = SnapConfig::default()
            .with_guide_epsilon(-0.1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            SnapConfigError::Negative {
                field: "guide_epsilon",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_epsilon() {
        let err = SnapConfig::default()
            .with_guide_epsilon(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, SnapConfigError::ZeroGuideEpsilon);
    }

    #[test]
    fn rejects_proximity_below_tolerance() {
        let err = SnapConfig::default()
            .with_tolerance(25.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            SnapConfigError::ProximityBelowTolerance {
                proximity: 20.0,
                tolerance: 25.0
            }
        );
    }

    #[test]
    fn larger_tolerance_needs_larger_proximity() {
        let config = SnapConfig::default().with_tolerance(25.0);
        assert!(config.validate().is_err());
        let config = config.with_proximity_threshold(25.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SnapConfig = serde_json::from_str(r#"{"tolerance": 3.0}"#).unwrap();
        assert_eq!(config.tolerance, 3.0);
        assert_eq!(config.guide_epsilon, GUIDE_MATCH_EPSILON_MM);
        assert_eq!(config.proximity_threshold, PROXIMITY_THRESHOLD_MM);
    }
}
