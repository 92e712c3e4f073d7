#![forbid(unsafe_code)]

//! Guide descriptors handed to the presentation layer.
//!
//! Guides serialize internally tagged by `type`:
//!
//! ```json
//! {"type":"vertical","position":1500.0,"alignmentType":"center"}
//! {"type":"spacing-x","position":550.0,"regions":[{"start":100.0,"size":50.0}, ...]}
//! ```

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::target::AlignmentKind;

/// One equal-gap bracket of a spacing guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapRegion {
    /// Where the gap begins along the snapping axis.
    pub start: f64,
    /// Gap length.
    pub size: f64,
}

impl GapRegion {
    #[inline]
    pub const fn new(start: f64, size: f64) -> Self {
        Self { start, size }
    }
}

/// A visual explanation of an alignment or equal spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AlignmentGuide {
    /// Line at an x coordinate.
    Vertical {
        position: f64,
        #[serde(rename = "alignmentType")]
        alignment: AlignmentKind,
    },
    /// Line at a y coordinate.
    Horizontal {
        position: f64,
        #[serde(rename = "alignmentType")]
        alignment: AlignmentKind,
    },
    /// Equal horizontal gaps, drawn at a y coordinate.
    SpacingX {
        position: f64,
        regions: Vec<GapRegion>,
    },
    /// Equal vertical gaps, drawn at an x coordinate.
    SpacingY {
        position: f64,
        regions: Vec<GapRegion>,
    },
}

impl AlignmentGuide {
    /// Alignment line for a coordinate on `axis`.
    pub fn line(axis: Axis, position: f64, alignment: AlignmentKind) -> Self {
        match axis {
            Axis::X => Self::Vertical {
                position,
                alignment,
            },
            Axis::Y => Self::Horizontal {
                position,
                alignment,
            },
        }
    }

    /// Equal-spacing bracket along `axis`, drawn at the cross-axis `position`.
    pub fn spacing(axis: Axis, position: f64, regions: Vec<GapRegion>) -> Self {
        match axis {
            Axis::X => Self::SpacingX { position, regions },
            Axis::Y => Self::SpacingY { position, regions },
        }
    }

    /// The axis whose snapping this guide explains.
    pub fn axis(&self) -> Axis {
        match self {
            Self::Vertical { .. } | Self::SpacingX { .. } => Axis::X,
            Self::Horizontal { .. } | Self::SpacingY { .. } => Axis::Y,
        }
    }

    pub fn position(&self) -> f64 {
        match self {
            Self::Vertical { position, .. }
            | Self::Horizontal { position, .. }
            | Self::SpacingX { position, .. }
            | Self::SpacingY { position, .. } => *position,
        }
    }

    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Vertical { .. } | Self::Horizontal { .. })
    }

    /// Gap regions of a spacing guide; empty for lines.
    pub fn regions(&self) -> &[GapRegion] {
        match self {
            Self::SpacingX { regions, .. } | Self::SpacingY { regions, .. } => regions.as_slice(),
            Self::Vertical { .. } | Self::Horizontal { .. } => &[],
        }
    }

    /// Alignment kind of a line guide.
    pub fn alignment(&self) -> Option<AlignmentKind> {
        match self {
            Self::Vertical { alignment, .. } | Self::Horizontal { alignment, .. } => {
                Some(*alignment)
            }
            Self::SpacingX { .. } | Self::SpacingY { .. } => None,
        }
    }

    /// Whether `other` is a line of the same orientation within `epsilon`.
    ///
    /// The alignment kind is ignored. Spacing guides never duplicate.
    fn duplicates(&self, other: &AlignmentGuide, epsilon: f64) -> bool {
        self.is_line()
            && std::mem::discriminant(self) == std::mem::discriminant(other)
            && (self.position() - other.position()).abs() < epsilon
    }
}

/// Ordered guide collection that drops near-duplicate lines on insert.
///
/// Spacing guides are always appended, one per reproduced relationship.
#[derive(Debug, Clone)]
pub(crate) struct GuideList {
    epsilon: f64,
    guides: Vec<AlignmentGuide>,
}

impl GuideList {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            guides: Vec::new(),
        }
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Append unless a line at the same place is already present.
    pub fn push(&mut self, guide: AlignmentGuide) -> bool {
        if self
            .guides
            .iter()
            .any(|existing| existing.duplicates(&guide, self.epsilon))
        {
            return false;
        }
        self.guides.push(guide);
        true
    }

    pub fn into_vec(self) -> Vec<AlignmentGuide> {
        self.guides
    }
}
