#![forbid(unsafe_code)]

//! Axis projection helpers.
//!
//! Snapping runs the same algorithm once per axis. Projecting a rectangle onto
//! an axis gives a [`Span`]; the X pass reads left/width, the Y pass reads
//! top/height.

use serde::{Deserialize, Serialize};
use wallplan_core::{Dimensions, Position, Rect, intervals_overlap};

use crate::target::AlignmentKind;

/// Snapping axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal movement; aligned by vertical guide lines.
    X,
    /// Vertical movement; aligned by horizontal guide lines.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Alignment kinds for the near edge, center, and far edge.
    #[inline]
    pub const fn kinds(self) -> [AlignmentKind; 3] {
        match self {
            Self::X => [
                AlignmentKind::Left,
                AlignmentKind::Center,
                AlignmentKind::Right,
            ],
            Self::Y => [
                AlignmentKind::Top,
                AlignmentKind::Middle,
                AlignmentKind::Bottom,
            ],
        }
    }

    /// Coordinate of `position` along this axis.
    #[inline]
    pub fn coordinate(self, position: Position) -> f64 {
        match self {
            Self::X => position.x,
            Self::Y => position.y,
        }
    }

    /// Length of `dimensions` along this axis.
    #[inline]
    pub fn extent(self, dimensions: Dimensions) -> f64 {
        match self {
            Self::X => dimensions.width,
            Self::Y => dimensions.height,
        }
    }

    /// Project a rectangle onto this axis.
    #[inline]
    pub(crate) fn span(self, rect: &Rect) -> Span {
        Span::new(self.coordinate(rect.position), self.extent(rect.dimensions))
    }
}

/// A 1-D interval `[start, start + extent)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Span {
    pub start: f64,
    pub extent: f64,
}

impl Span {
    #[inline]
    pub const fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    #[inline]
    pub fn end(self) -> f64 {
        self.start + self.extent
    }

    #[inline]
    pub fn center(self) -> f64 {
        self.start + self.extent / 2.0
    }

    /// Near edge, center, and far edge, in the order of [`Axis::kinds`].
    #[inline]
    pub fn anchors(self) -> [f64; 3] {
        [self.start, self.center(), self.end()]
    }

    #[inline]
    pub fn overlaps(self, other: Span) -> bool {
        intervals_overlap(self.start, self.end(), other.start, other.end())
    }
}
