#![forbid(unsafe_code)]

//! Snapping and alignment guides for frames dragged across a wall.
//!
//! - [`compute_snap`] / [`SnapEngine`] - corrected drop position plus guides
//! - [`detect_alignments`] - non-snapping proximity highlights
//! - [`SnapDrag`] - per-gesture bookkeeping for callers
//!
//! ```
//! use wallplan_snap::{AlignmentGuide, AlignmentKind, Frame, FrameId, compute_snap};
//! use wallplan_core::{Dimensions, Position};
//!
//! let wall = Dimensions::new(3000.0, 2500.0);
//! let moving = Frame::new(FrameId::new(1), 0.0, 0.0, 200.0, 100.0);
//! let result = compute_snap(&moving, Position::new(1402.0, 500.0), &[], wall, 5.0);
//!
//! assert_eq!(result.x, 1400.0);
//! assert_eq!(
//!     result.guides,
//!     vec![AlignmentGuide::Vertical { position: 1500.0, alignment: AlignmentKind::Center }]
//! );
//! ```

pub mod axis;
pub mod config;
pub mod drag;
pub mod engine;
pub mod frame;
pub mod guide;
pub mod proximity;
pub mod target;

pub use axis::Axis;
pub use config::{
    DEFAULT_SNAP_TOLERANCE_MM, GUIDE_MATCH_EPSILON_MM, PROXIMITY_THRESHOLD_MM, SnapConfig,
    SnapConfigError,
};
pub use drag::SnapDrag;
pub use engine::{SnapEngine, SnapResult, compute_snap};
pub use frame::{Frame, FrameId, exclude_self};
pub use guide::{AlignmentGuide, GapRegion};
pub use proximity::detect_alignments;
pub use target::{AlignmentKind, SnapTarget, build_targets};
