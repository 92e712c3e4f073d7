#![forbid(unsafe_code)]

//! Screen ↔ wall coordinate transforms.
//!
//! The wall is drawn at `pixel_ratio * zoom` screen pixels per millimeter,
//! shifted by a pan offset in screen pixels. Pointer deltas arrive in screen
//! pixels and must be divided back into millimeters before they reach the
//! snap engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Position};

/// Smallest allowed zoom factor (10%).
pub const MIN_ZOOM: f64 = 0.1;
/// Largest allowed zoom factor (300%).
pub const MAX_ZOOM: f64 = 3.0;
/// Increment used by [`Viewport::zoom_in`] and [`Viewport::zoom_out`].
pub const ZOOM_STEP: f64 = 0.1;

/// Share of the viewport the wall occupies when fitted.
const FIT_PADDING: f64 = 0.9;

/// Failure computing a viewport transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    /// The wall has a non-positive width or height.
    EmptyWall { width: f64, height: f64 },
    /// The on-screen viewport has a non-positive width or height.
    EmptyViewport { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWall { width, height } => {
                write!(f, "wall has no area ({width}x{height} mm)")
            }
            Self::EmptyViewport { width, height } => {
                write!(f, "viewport has no area ({width}x{height} px)")
            }
        }
    }
}

impl std::error::Error for ViewportError {}

/// Pixels per millimeter that fit the whole wall inside the viewport with a
/// small margin.
pub fn fit_pixel_ratio(wall: Dimensions, viewport: Dimensions) -> Result<f64, ViewportError> {
    if wall.is_empty() {
        return Err(ViewportError::EmptyWall {
            width: wall.width,
            height: wall.height,
        });
    }
    if viewport.is_empty() {
        return Err(ViewportError::EmptyViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let ratio_x = viewport.width * FIT_PADDING / wall.width;
    let ratio_y = viewport.height * FIT_PADDING / wall.height;
    Ok(ratio_x.min(ratio_y))
}

/// Convert a length on the wall to screen pixels.
#[inline]
pub fn mm_to_pixels(mm: f64, pixel_ratio: f64, zoom: f64) -> f64 {
    mm * pixel_ratio * zoom
}

/// Convert a screen length to millimeters on the wall.
#[inline]
pub fn pixels_to_mm(pixels: f64, pixel_ratio: f64, zoom: f64) -> f64 {
    pixels / (pixel_ratio * zoom)
}

/// Zoom and pan state of the wall canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom: f64,
    /// Pan offset in screen pixels.
    pub pan: Position,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Position::default(),
        }
    }
}

impl Viewport {
    /// Create a viewport; `zoom` is clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
    pub fn new(zoom: f64, pan: Position) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            pan,
        }
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Screen point to wall millimeters.
    pub fn screen_to_wall(&self, screen: Position, pixel_ratio: f64) -> Position {
        let scale = pixel_ratio * self.zoom;
        Position::new((screen.x - self.pan.x) / scale, (screen.y - self.pan.y) / scale)
    }

    /// Wall millimeters to a screen point.
    pub fn wall_to_screen(&self, wall: Position, pixel_ratio: f64) -> Position {
        let scale = pixel_ratio * self.zoom;
        Position::new(wall.x * scale + self.pan.x, wall.y * scale + self.pan.y)
    }

    /// Convert a pointer movement in screen pixels into a wall delta.
    ///
    /// Pan does not apply to deltas.
    pub fn pointer_delta_to_wall(&self, delta: Position, pixel_ratio: f64) -> Position {
        Position::new(
            pixels_to_mm(delta.x, pixel_ratio, self.zoom),
            pixels_to_mm(delta.y, pixel_ratio, self.zoom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn fit_ratio_uses_tighter_axis() {
        let ratio = fit_pixel_ratio(
            Dimensions::new(3000.0, 2500.0),
            Dimensions::new(1000.0, 500.0),
        )
        .unwrap();
        // 500 * 0.9 / 2500 = 0.18 < 1000 * 0.9 / 3000 = 0.3
        assert!((ratio - 0.18).abs() < EPS);
    }

    #[test]
    fn fit_ratio_rejects_empty_wall() {
        let err = fit_pixel_ratio(Dimensions::new(0.0, 2500.0), Dimensions::new(800.0, 600.0))
            .unwrap_err();
        assert_eq!(
            err,
            ViewportError::EmptyWall {
                width: 0.0,
                height: 2500.0
            }
        );
        assert!(err.to_string().contains("wall has no area"));
    }

    #[test]
    fn fit_ratio_rejects_empty_viewport() {
        let err = fit_pixel_ratio(Dimensions::new(3000.0, 2500.0), Dimensions::new(800.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, ViewportError::EmptyViewport { .. }));
    }

    #[test]
    fn zoom_is_clamped() {
        assert_eq!(Viewport::new(10.0, Position::default()).zoom(), MAX_ZOOM);
        assert_eq!(Viewport::new(0.0, Position::default()).zoom(), MIN_ZOOM);

        let mut vp = Viewport::new(MAX_ZOOM, Position::default());
        vp.zoom_in();
        assert_eq!(vp.zoom(), MAX_ZOOM);

        let mut vp = Viewport::new(MIN_ZOOM, Position::default());
        vp.zoom_out();
        assert_eq!(vp.zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_steps() {
        let mut vp = Viewport::default();
        vp.zoom_in();
        assert!((vp.zoom() - 1.1).abs() < EPS);
        vp.zoom_out();
        vp.zoom_out();
        assert!((vp.zoom() - 0.9).abs() < EPS);
    }

    #[test]
    fn screen_wall_round_trip() {
        let vp = Viewport::new(2.0, Position::new(40.0, -10.0));
        let wall = Position::new(1234.5, 678.0);
        let back = vp.screen_to_wall(vp.wall_to_screen(wall, 0.25), 0.25);
        assert!((back.x - wall.x).abs() < EPS);
        assert!((back.y - wall.y).abs() < EPS);
    }

    #[test]
    fn pointer_delta_ignores_pan() {
        let vp = Viewport::new(0.5, Position::new(300.0, 300.0));
        let delta = vp.pointer_delta_to_wall(Position::new(20.0, -10.0), 0.2);
        // 20 / (0.2 * 0.5) = 200
        assert!((delta.x - 200.0).abs() < EPS);
        assert!((delta.y + 100.0).abs() < EPS);
    }

    #[test]
    fn mm_pixel_conversions_invert() {
        let px = mm_to_pixels(100.0, 0.3, 1.5);
        assert!((px - 45.0).abs() < EPS);
        assert!((pixels_to_mm(px, 0.3, 1.5) - 100.0).abs() < EPS);
    }
}
