#![forbid(unsafe_code)]

//! Frames placed on the wall.

use std::fmt;

use serde::{Deserialize, Serialize};
use wallplan_core::Rect;

/// Opaque frame instance identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(u64);

impl FrameId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// A frame instance: identity plus its rectangle on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    pub rect: Rect,
}

impl Frame {
    pub const fn new(id: FrameId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// Siblings of `moving`: every frame whose id differs from it.
///
/// Callers may pass the full frame list, the moving frame included.
pub fn exclude_self(moving: FrameId, frames: &[Frame]) -> Vec<&Frame> {
    frames.iter().filter(|f| f.id != moving).collect()
}
