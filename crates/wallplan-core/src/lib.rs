#![forbid(unsafe_code)]

//! Core: geometry primitives, viewport transforms, placement rules, and logging.

pub mod geometry;
pub mod logging;
pub mod placement;
pub mod viewport;

pub use geometry::{Dimensions, Edges, Position, Rect, edges_of, intervals_overlap};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
