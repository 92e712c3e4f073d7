#![forbid(unsafe_code)]

//! Caller-side drag bookkeeping.
//!
//! The engine is stateless; something still has to remember where the drag
//! started and what the last snap produced so the drop can apply it. A
//! [`SnapDrag`] lives for one gesture and is dropped when it ends.

use wallplan_core::placement::clamp_to_wall;
use wallplan_core::{Dimensions, Position, trace};

use crate::engine::{SnapEngine, SnapResult};
use crate::frame::Frame;
use crate::guide::AlignmentGuide;

/// One in-progress drag of a frame.
#[derive(Debug, Clone)]
pub struct SnapDrag {
    moving: Frame,
    last: Option<SnapResult>,
}

impl SnapDrag {
    /// Start dragging `moving` from its current position.
    pub fn begin(moving: Frame) -> Self {
        trace!(frame = %moving.id, "drag started");
        Self { moving, last: None }
    }

    /// Where the frame was when the drag began.
    #[inline]
    pub fn origin(&self) -> Position {
        self.moving.rect.position
    }

    /// The frame being dragged, at its original position.
    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.moving
    }

    /// Snap the frame at `origin + delta` (delta in wall millimeters).
    pub fn update(
        &mut self,
        delta: Position,
        frames: &[Frame],
        wall: Dimensions,
        engine: &SnapEngine,
    ) -> &SnapResult {
        let proposed = self.origin().offset(delta);
        let result = engine.snap(&self.moving, proposed, frames, wall);
        self.last.insert(result)
    }

    /// Guides from the latest update; empty before the first one.
    pub fn guides(&self) -> &[AlignmentGuide] {
        match &self.last {
            Some(result) => &result.guides,
            None => &[],
        }
    }

    /// Latest snap result, if any update happened.
    #[inline]
    pub fn last(&self) -> Option<&SnapResult> {
        self.last.as_ref()
    }

    /// End the drag and return where the frame should land.
    ///
    /// The last snapped position is kept on the wall. A drag that never moved
    /// lands back at its origin.
    pub fn finish(self, wall: Dimensions) -> Position {
        let landed = match &self.last {
            Some(result) => clamp_to_wall(result.position(), self.moving.rect.dimensions, wall),
            None => self.origin(),
        };
        trace!(frame = %self.moving.id, x = landed.x, y = landed.y, "drag finished");
        landed
    }

    /// Abort the drag; the frame returns to its origin.
    pub fn cancel(self) -> Position {
        trace!(frame = %self.moving.id, "drag cancelled");
        self.origin()
    }
}
