#![forbid(unsafe_code)]

//! Snap targets: coordinates a moving frame may lock onto.

use serde::{Deserialize, Serialize};
use wallplan_core::{Dimensions, Rect};

use crate::axis::Axis;
use crate::frame::Frame;

/// Which edge or center a coordinate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentKind {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl AlignmentKind {
    /// Axis the kind belongs to.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Center | Self::Right => Axis::X,
            Self::Top | Self::Middle | Self::Bottom => Axis::Y,
        }
    }
}

/// A candidate coordinate tagged with the edge it represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub position: f64,
    pub kind: AlignmentKind,
}

impl SnapTarget {
    #[inline]
    pub const fn new(position: f64, kind: AlignmentKind) -> Self {
        Self { position, kind }
    }
}

/// Build the target list for one axis.
///
/// The wall's near edge, centerline, and far edge come first, followed by
/// the near edge, center, and far edge of every sibling in order.
pub fn build_targets(axis: Axis, wall: Dimensions, siblings: &[&Frame]) -> Vec<SnapTarget> {
    let kinds = axis.kinds();
    let mut targets = Vec::with_capacity(3 * (siblings.len() + 1));
    let rects = std::iter::once(Rect::from_dimensions(wall)).chain(siblings.iter().map(|f| f.rect));
    for rect in rects {
        let anchors = axis.span(&rect).anchors();
        for (position, kind) in anchors.into_iter().zip(kinds) {
            targets.push(SnapTarget::new(position, kind));
        }
    }
    targets
}
