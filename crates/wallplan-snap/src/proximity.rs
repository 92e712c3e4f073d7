#![forbid(unsafe_code)]

//! Proximity highlighting.
//!
//! Unlike the snap engine this never moves anything. It reports which
//! same-kind edges of the moving frame are *near* a sibling's or the wall's,
//! using the wider proximity threshold, so the canvas can hint at an
//! alignment before the frame is close enough to snap.

use wallplan_core::{Dimensions, Rect};

use crate::axis::Axis;
use crate::frame::{Frame, exclude_self};
use crate::guide::AlignmentGuide;

/// Same-kind alignments of `moving` within `threshold`.
///
/// Siblings are checked first, in order, then the wall. Each comparison
/// pairs like with like: left with left, center with center, and so on.
/// Results are not deduplicated.
pub fn detect_alignments(
    moving: &Frame,
    frames: &[Frame],
    wall: Dimensions,
    threshold: f64,
) -> Vec<AlignmentGuide> {
    let mut guides = Vec::new();
    let references = exclude_self(moving.id, frames)
        .into_iter()
        .map(|f| f.rect)
        .chain(std::iter::once(Rect::from_dimensions(wall)));

    for reference in references {
        for axis in [Axis::X, Axis::Y] {
            let ours = axis.span(&moving.rect).anchors();
            let theirs = axis.span(&reference).anchors();
            for ((ours, theirs), kind) in ours.into_iter().zip(theirs).zip(axis.kinds()) {
                if (ours - theirs).abs() < threshold {
                    guides.push(AlignmentGuide::line(axis, theirs, kind));
                }
            }
        }
    }
    guides
}
