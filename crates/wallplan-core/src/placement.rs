#![forbid(unsafe_code)]

//! Wall placement rules applied outside the snap engine.

use crate::geometry::{Dimensions, Position};

/// Default wall width (3 m).
pub const DEFAULT_WALL_WIDTH_MM: f64 = 3000.0;
/// Default wall height (2.5 m).
pub const DEFAULT_WALL_HEIGHT_MM: f64 = 2500.0;

/// The wall size a fresh project starts with.
pub const DEFAULT_WALL: Dimensions = Dimensions::new(DEFAULT_WALL_WIDTH_MM, DEFAULT_WALL_HEIGHT_MM);

/// Keep a frame of `dimensions` fully on the wall.
///
/// A frame larger than the wall is pinned to the top-left corner.
pub fn clamp_to_wall(position: Position, dimensions: Dimensions, wall: Dimensions) -> Position {
    Position::new(
        position.x.min(wall.width - dimensions.width).max(0.0),
        position.y.min(wall.height - dimensions.height).max(0.0),
    )
}

/// Drop point for a newly added frame: centered on the wall, never negative.
pub fn centered_on_wall(dimensions: Dimensions, wall: Dimensions) -> Position {
    Position::new(
        (wall.width / 2.0 - dimensions.width / 2.0).max(0.0),
        (wall.height / 2.0 - dimensions.height / 2.0).max(0.0),
    )
}
