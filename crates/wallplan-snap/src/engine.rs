#![forbid(unsafe_code)]

//! Snap engine.
//!
//! Given a frame being dragged, the position the pointer proposes, the other
//! frames on the wall, and the wall size, compute a corrected position and the
//! guides explaining it.
//!
//! # Algorithm
//!
//! Each axis is resolved in turn, X first:
//!
//! 1. Targets: the wall's near edge, centerline, and far edge, then every
//!    sibling's near edge, center, and far edge.
//! 2. Alignment: the proposed near edge, center, and far edge are each tested
//!    against every target, whatever its kind. A right edge may land on a
//!    target tagged `center`.
//! 3. Spacing: siblings sharing the frame's row (for X) or column (for Y)
//!    form a chain sorted along the axis. For each adjacent pair the frame may
//!    sit one gap before the first, one gap after the second, or centered
//!    between them.
//! 4. Commit: the smallest offset strictly below the tolerance wins, alignment
//!    and spacing alike; ties keep the first candidate found.
//!
//! The Y column is chosen from the *resolved* X extent, so a diagonal drag
//! settles onto a corner in one pass. The X row uses the proposed Y extent.
//!
//! Guides are emitted from the final rectangle after both axes settle. Every
//! target within the guide epsilon produces a line (one per coordinate), and
//! every reproduced spacing relationship produces a bracket.
//!
//! # Invariants
//!
//! 1. A resolved coordinate is either the proposed one or lies strictly within
//!    the tolerance of it.
//! 2. The moving frame is never its own target.
//! 3. No two line guides of the same orientation lie within the epsilon.
//! 4. The engine holds no state; equal inputs give equal outputs.

use serde::{Deserialize, Serialize};
use wallplan_core::{Dimensions, Position, Rect, debug, debug_span, trace, warn};

use crate::axis::{Axis, Span};
use crate::config::{GUIDE_MATCH_EPSILON_MM, SnapConfig, SnapConfigError};
use crate::frame::{Frame, exclude_self};
use crate::guide::{AlignmentGuide, GapRegion, GuideList};
use crate::proximity::detect_alignments;
use crate::target::{SnapTarget, build_targets};

/// Corrected position plus the guides explaining it.
///
/// When nothing snapped, `x`/`y` equal the proposed position; `guides` may
/// still hold coincidental alignments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub guides: Vec<AlignmentGuide>,
}

impl SnapResult {
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Snap `moving` at `proposed` against `frames` on a wall of size `wall`.
///
/// `frames` may include `moving` itself; it is filtered out by id. Guides
/// match within [`GUIDE_MATCH_EPSILON_MM`].
pub fn compute_snap(
    moving: &Frame,
    proposed: Position,
    frames: &[Frame],
    wall: Dimensions,
    tolerance: f64,
) -> SnapResult {
    snap_frame(
        moving,
        proposed,
        frames,
        wall,
        tolerance,
        GUIDE_MATCH_EPSILON_MM,
    )
}

/// Snap engine bound to a validated [`SnapConfig`].
#[derive(Debug, Clone, Default)]
pub struct SnapEngine {
    config: SnapConfig,
}

impl SnapEngine {
    /// Create an engine, rejecting an invalid configuration.
    pub fn new(config: SnapConfig) -> Result<Self, SnapConfigError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected snap config");
            return Err(err);
        }
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Snap `moving` at `proposed`. See [`compute_snap`].
    pub fn snap(
        &self,
        moving: &Frame,
        proposed: Position,
        frames: &[Frame],
        wall: Dimensions,
    ) -> SnapResult {
        snap_frame(
            moving,
            proposed,
            frames,
            wall,
            self.config.tolerance,
            self.config.guide_epsilon,
        )
    }

    /// Near alignments within the proximity threshold, without snapping.
    pub fn proximity(
        &self,
        moving: &Frame,
        frames: &[Frame],
        wall: Dimensions,
    ) -> Vec<AlignmentGuide> {
        detect_alignments(moving, frames, wall, self.config.proximity_threshold)
    }
}

fn snap_frame(
    moving: &Frame,
    proposed: Position,
    frames: &[Frame],
    wall: Dimensions,
    tolerance: f64,
    epsilon: f64,
) -> SnapResult {
    let span = debug_span!("snap", frame = %moving.id);
    let _guard = span.enter();

    let siblings = exclude_self(moving.id, frames);
    let proposed_rect = moving.rect.moved_to(proposed);

    let x_plan = AxisPlan::build(Axis::X, wall, &siblings, Axis::Y.span(&proposed_rect));
    let x = x_plan.resolve(Axis::X.span(&proposed_rect), tolerance);

    let resolved_x = Span::new(x, moving.rect.dimensions.width);
    let y_plan = AxisPlan::build(Axis::Y, wall, &siblings, resolved_x);
    let y = y_plan.resolve(Axis::Y.span(&proposed_rect), tolerance);

    let settled = moving.rect.moved_to(Position::new(x, y));
    let mut guides = GuideList::new(epsilon);
    x_plan.emit_guides(&settled, &mut guides);
    y_plan.emit_guides(&settled, &mut guides);

    let result = SnapResult {
        x,
        y,
        guides: guides.into_vec(),
    };
    debug!(
        x = result.x,
        y = result.y,
        guides = result.guides.len(),
        "snap resolved"
    );
    result
}

/// Targets and spacing pairs for one axis.
#[derive(Debug)]
struct AxisPlan {
    axis: Axis,
    targets: Vec<SnapTarget>,
    pairs: Vec<GapPair>,
}

impl AxisPlan {
    /// `cross` is the moving frame's extent on the other axis; it picks the
    /// siblings that share a row or column with it.
    fn build(axis: Axis, wall: Dimensions, siblings: &[&Frame], cross: Span) -> Self {
        let targets = build_targets(axis, wall, siblings);

        let mut chain: Vec<Span> = siblings
            .iter()
            .filter(|f| axis.cross().span(&f.rect).overlaps(cross))
            .map(|f| axis.span(&f.rect))
            .collect();
        chain.sort_by(|a, b| a.start.total_cmp(&b.start));
        let pairs = chain
            .windows(2)
            .map(|w| GapPair { a: w[0], b: w[1] })
            .collect();

        Self {
            axis,
            targets,
            pairs,
        }
    }

    fn resolve(&self, proposed: Span, tolerance: f64) -> f64 {
        let mut closest = Closest::new(tolerance);
        let [near, center, far] = proposed.anchors();
        let extent = proposed.extent;

        for target in &self.targets {
            let at = target.position;
            closest.offer(at, at - near);
            closest.offer(at - extent / 2.0, at - center);
            closest.offer(at - extent, at - far);
        }
        for pair in &self.pairs {
            for coordinate in [pair.before(extent), pair.after(), pair.centered(extent)] {
                closest.offer(coordinate, coordinate - proposed.start);
            }
        }

        match closest.best {
            Some(hit) => {
                trace!(
                    axis = ?self.axis,
                    from = proposed.start,
                    to = hit.coordinate,
                    delta = hit.delta,
                    "axis snapped"
                );
                hit.coordinate
            }
            None => proposed.start,
        }
    }

    fn emit_guides(&self, settled: &Rect, guides: &mut GuideList) {
        let epsilon = guides.epsilon();
        let span = self.axis.span(settled);
        let cross_center = self.axis.cross().span(settled).center();
        let anchors = span.anchors();

        for target in &self.targets {
            if anchors
                .iter()
                .any(|anchor| (anchor - target.position).abs() < epsilon)
            {
                guides.push(AlignmentGuide::line(self.axis, target.position, target.kind));
            }
        }

        for pair in &self.pairs {
            let gap = pair.gap();
            let (a, b) = (pair.a, pair.b);

            if (span.end() - (a.start - gap)).abs() < epsilon {
                guides.push(AlignmentGuide::spacing(
                    self.axis,
                    cross_center,
                    vec![GapRegion::new(span.end(), gap), GapRegion::new(a.end(), gap)],
                ));
            }
            if (span.start - (b.end() + gap)).abs() < epsilon {
                guides.push(AlignmentGuide::spacing(
                    self.axis,
                    cross_center,
                    vec![GapRegion::new(a.end(), gap), GapRegion::new(b.end(), gap)],
                ));
            }

            let leading = span.start - a.end();
            let trailing = b.start - span.end();
            // A zero-extent frame "centered" in the gap would just halve it.
            if (leading - trailing).abs() < epsilon && (leading - gap / 2.0).abs() > epsilon {
                guides.push(AlignmentGuide::spacing(
                    self.axis,
                    cross_center,
                    vec![
                        GapRegion::new(a.end(), leading),
                        GapRegion::new(span.end(), leading),
                    ],
                ));
            }
        }
    }
}

/// Two neighbours adjacent in a spacing chain, `a` before `b`.
#[derive(Debug, Clone, Copy)]
struct GapPair {
    a: Span,
    b: Span,
}

impl GapPair {
    #[inline]
    fn gap(self) -> f64 {
        self.b.start - self.a.end()
    }

    /// Near edge that leaves one gap between the frame and `a`.
    #[inline]
    fn before(self, extent: f64) -> f64 {
        self.a.start - self.gap() - extent
    }

    /// Near edge that leaves one gap after `b`.
    #[inline]
    fn after(self) -> f64 {
        self.b.end() + self.gap()
    }

    /// Near edge that splits the space between `a` and `b` evenly.
    #[inline]
    fn centered(self, extent: f64) -> f64 {
        (self.b.start + self.a.end() - extent) / 2.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    coordinate: f64,
    delta: f64,
}

/// Smallest accepted offset seen so far on one axis.
#[derive(Debug)]
struct Closest {
    tolerance: f64,
    best: Option<Candidate>,
}

impl Closest {
    fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            best: None,
        }
    }

    fn offer(&mut self, coordinate: f64, delta: f64) {
        let magnitude = delta.abs();
        if magnitude >= self.tolerance {
            return;
        }
        if self.best.is_some_and(|best| magnitude >= best.delta.abs()) {
            return;
        }
        self.best = Some(Candidate { coordinate, delta });
    }
}
