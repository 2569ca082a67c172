//! Movement resolution engine
//!
//! [`resolve`] turns a requested displacement into the maximal safe one:
//! the mover's path is probed one unit step at a time (so a fast mover
//! cannot tunnel through a thin obstacle), and the first blocking shape is
//! reported alongside the last safe sub-displacement. Non-vertical line
//! blockers get a second mode: instead of stepping, the vertical delta is
//! computed from the line's slope equation so the mover lands exactly on
//! the ramp surface in one step, flagged as teleporting when the snap
//! exceeds the configured threshold.
//!
//! The engine is deliberately forgiving about input: it never validates
//! shape extents, an empty candidate set is trivially non-colliding, and an
//! unsupported shape pair simply never blocks (see [`crate::geometry`]).

use crate::config::ResolveConfig;
use crate::geometry;
use crate::shapes::{Line, Shape};
use crate::space::ShapeHandle;

/// Outcome of resolving a displacement against a candidate slice
///
/// `blocking_index` points into the candidate slice passed to [`resolve`].
/// A resolved delta equal to the requested one with no blocker is a clean
/// move; a zero delta with a blocker means the mover was already stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Safe horizontal displacement
    pub resolve_x: i32,
    /// Safe vertical displacement
    pub resolve_y: i32,
    /// Index of the first blocking candidate, if any
    pub blocking_index: Option<usize>,
    /// True when the vertical delta snapped onto a ramp surface rather than
    /// sliding there step by step
    pub teleporting: bool,
}

impl Resolution {
    /// True iff a blocking shape was found
    pub fn colliding(&self) -> bool {
        self.blocking_index.is_some()
    }
}

/// Outcome of [`SubCollection::resolve`], carrying the blocking shape
///
/// [`SubCollection::resolve`]: crate::space::SubCollection::resolve
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult<'s> {
    /// Safe horizontal displacement
    pub resolve_x: i32,
    /// Safe vertical displacement
    pub resolve_y: i32,
    /// True when the vertical delta snapped onto a ramp surface
    pub teleporting: bool,
    other: Option<(ShapeHandle, &'s Shape)>,
}

impl<'s> CollisionResult<'s> {
    pub(crate) fn new(
        resolution: Resolution,
        other: Option<(ShapeHandle, &'s Shape)>,
    ) -> Self {
        Self {
            resolve_x: resolution.resolve_x,
            resolve_y: resolution.resolve_y,
            teleporting: resolution.teleporting,
            other,
        }
    }

    /// True iff a blocking shape was found
    ///
    /// Note a resolved delta equal to the requested delta is a valid
    /// non-colliding outcome, distinct from a zero-delta colliding one.
    pub fn colliding(&self) -> bool {
        self.other.is_some()
    }

    /// Handle of the blocking shape, if any
    pub fn other_handle(&self) -> Option<ShapeHandle> {
        self.other.map(|(handle, _)| handle)
    }

    /// The blocking shape, if any
    pub fn other_shape(&self) -> Option<&'s Shape> {
        self.other.map(|(_, shape)| shape)
    }

    /// Whether a teleporting outcome is an acceptable snap-to-slope
    ///
    /// The usual caller policy: reject upward snaps taller than
    /// `config.max_snap_height` of the mover's height and treat them as no
    /// collision. Downward snaps and ordinary step resolutions are always
    /// acceptable.
    pub fn is_plausible_snap(&self, mover_height: i32, config: &ResolveConfig) -> bool {
        if !self.teleporting || self.resolve_y >= 0 {
            return true;
        }
        f64::from(-self.resolve_y) <= f64::from(config.max_snap_height) * f64::from(mover_height)
    }
}

/// Resolve an attempted move of `moving` by `(dx, dy)` against `candidates`
///
/// The candidates are probed in slice order and the first blocker at the
/// earliest colliding step wins; that tie-break is order dependent and
/// should not be leaned on as a strong guarantee. `moving` itself is
/// skipped if it appears among the candidates. The mover is never mutated;
/// applying the resolved delta is the caller's job.
pub fn resolve(
    moving: &Shape,
    dx: i32,
    dy: i32,
    candidates: &[&Shape],
    config: &ResolveConfig,
) -> Resolution {
    let mut out = Resolution {
        resolve_x: dx,
        resolve_y: dy,
        blocking_index: None,
        teleporting: false,
    };

    if candidates.is_empty() {
        return out;
    }

    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        // zero requested delta degenerates to a pure overlap check
        out.blocking_index = first_hit(moving, 0, 0, candidates);
        return out;
    }

    for i in 1..=steps {
        let sub_x = step_delta(dx, i, steps);
        let sub_y = step_delta(dy, i, steps);

        if let Some(index) = first_hit(moving, sub_x, sub_y, candidates) {
            out.blocking_index = Some(index);

            if dy != 0 {
                if let Shape::Line(line) = candidates[index] {
                    if let Some(snap) = ramp_snap(moving, dx, line) {
                        out.resolve_x = dx;
                        out.resolve_y = snap;
                        out.teleporting = snap.abs() > config.teleport_threshold;
                        return out;
                    }
                }
            }

            out.resolve_x = step_delta(dx, i - 1, steps);
            out.resolve_y = step_delta(dy, i - 1, steps);
            return out;
        }
    }

    out
}

/// Proportional sub-displacement after `i` of `steps` unit steps
fn step_delta(total: i32, i: i32, steps: i32) -> i32 {
    (i64::from(total) * i64::from(i) / i64::from(steps)) as i32
}

/// Index of the first candidate the mover hits at the given offset
///
/// Extends the pairwise dispatch with the engine-internal segment test so
/// line obstacles block rectangular movers during stepping, even though the
/// public rectangle-line pair stays fail-closed.
fn first_hit(moving: &Shape, dx: i32, dy: i32, candidates: &[&Shape]) -> Option<usize> {
    candidates.iter().position(|candidate| {
        if std::ptr::eq(*candidate, moving) {
            return false;
        }
        if geometry::colliding_at(moving, dx, dy, candidate) {
            return true;
        }
        if let (Shape::Rectangle(r), Shape::Line(l)) = (moving, candidate) {
            return geometry::segment_intersects_rect(
                l.common.x,
                l.common.y,
                l.x2,
                l.y2,
                r.common.x + dx,
                r.common.y + dy,
                r.w,
                r.h,
            );
        }
        false
    })
}

/// Vertical delta that puts the mover's bottom exactly on the line surface
///
/// Evaluates the slope equation at both edges of the mover's horizontal
/// span (clamped to the segment) and lands on the topmost surface height.
/// Vertical lines have no slope equation and line movers no horizontal
/// span; those fall back to ordinary stepping.
fn ramp_snap(moving: &Shape, dx: i32, line: &Line) -> Option<i32> {
    if line.is_vertical() {
        return None;
    }

    let (left, right, bottom) = match moving {
        Shape::Rectangle(r) => (r.common.x, r.common.x + r.w, r.common.y + r.h),
        Shape::Circle(c) => (
            c.common.x - c.radius,
            c.common.x + c.radius,
            c.common.y + c.radius,
        ),
        Shape::Line(_) => return None,
    };

    let x_min = line.common.x.min(line.x2);
    let x_max = line.common.x.max(line.x2);
    let edge_a = line.y_at((left + dx).clamp(x_min, x_max));
    let edge_b = line.y_at((right + dx).clamp(x_min, x_max));
    let surface = edge_a.min(edge_b);

    Some(surface.round() as i32 - bottom)
}
