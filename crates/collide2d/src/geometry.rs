//! Geometry kernel
//!
//! Pure, stateless intersection tests over shape data. Every unordered
//! primitive pair is implemented exactly once; [`colliding_at`] collapses
//! the double dispatch into a single exhaustive match and swaps arguments
//! for the reversed orders. Pairs with no direct test (rectangle-line,
//! line-line) fail closed: they log a diagnostic and report no collision so
//! a stray shape never crashes the frame loop.
//!
//! All tests take the probing shape's hypothetical offset as plain
//! parameters, so probing never mutates a shape.

use crate::shapes::Shape;
use log::warn;

/// Euclidean distance between two points, in the shapes' integer unit
///
/// Computed in `f64` and truncated toward zero. Truncation (rather than
/// rounding) is load-bearing for boundary-exact collisions: two circles
/// whose exact center distance is fractionally above the radius sum still
/// collide, matching the closed `<=` tests below.
pub fn distance(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    let dx = f64::from(x2 - x1);
    let dy = f64::from(y2 - y1);
    (dx * dx + dy * dy).sqrt() as i32
}

/// Test whether `shape`, hypothetically translated by `(dx, dy)`, collides
/// with `other`
///
/// This is the single entry point behind both `is_colliding` and
/// `would_be_colliding`; the offset is applied arithmetically, so the
/// probing shape is observably untouched even when the test bails out.
pub fn colliding_at(shape: &Shape, dx: i32, dy: i32, other: &Shape) -> bool {
    match (shape, other) {
        (Shape::Rectangle(a), Shape::Rectangle(b)) => rects_overlap(
            a.common.x + dx,
            a.common.y + dy,
            a.w,
            a.h,
            b.common.x,
            b.common.y,
            b.w,
            b.h,
        ),
        (Shape::Circle(a), Shape::Circle(b)) => circles_overlap(
            a.common.x + dx,
            a.common.y + dy,
            a.radius,
            b.common.x,
            b.common.y,
            b.radius,
        ),
        (Shape::Circle(c), Shape::Rectangle(r)) => circle_rect_overlap(
            c.common.x + dx,
            c.common.y + dy,
            c.radius,
            r.common.x,
            r.common.y,
            r.w,
            r.h,
        ),
        (Shape::Rectangle(r), Shape::Circle(c)) => circle_rect_overlap(
            c.common.x,
            c.common.y,
            c.radius,
            r.common.x + dx,
            r.common.y + dy,
            r.w,
            r.h,
        ),
        (Shape::Circle(c), Shape::Line(l)) => circle_line_overlap(
            c.common.x + dx,
            c.common.y + dy,
            c.radius,
            l.common.x,
            l.common.y,
            l.x2,
            l.y2,
        ),
        (Shape::Line(l), Shape::Circle(c)) => circle_line_overlap(
            c.common.x,
            c.common.y,
            c.radius,
            l.common.x + dx,
            l.common.y + dy,
            l.x2 + dx,
            l.y2 + dy,
        ),
        (a, b) => {
            warn!(
                "no collision test for {} against {}; reporting no collision",
                a.kind(),
                b.kind()
            );
            false
        }
    }
}

/// Test whether two shapes currently overlap
pub fn is_colliding(shape: &Shape, other: &Shape) -> bool {
    colliding_at(shape, 0, 0, other)
}

/// Separating-axis test on two AABBs, top-left origin
///
/// Strict inequalities: shapes merely sharing an edge do not collide, which
/// lets a shape rest flush against another.
pub fn rects_overlap(
    ax: i32,
    ay: i32,
    aw: i32,
    ah: i32,
    bx: i32,
    by: i32,
    bw: i32,
    bh: i32,
) -> bool {
    ax > bx - aw && ay > by - ah && ax < bx + bw && ay < by + bh
}

/// Circles collide iff the center distance is within the radius sum
pub fn circles_overlap(ax: i32, ay: i32, ar: i32, bx: i32, by: i32, br: i32) -> bool {
    distance(ax, ay, bx, by) <= ar + br
}

/// Circle against rectangle: clamp the center to the rectangle's bounds and
/// compare the distance to that closest point against the radius
pub fn circle_rect_overlap(cx: i32, cy: i32, radius: i32, rx: i32, ry: i32, rw: i32, rh: i32) -> bool {
    let closest_x = cx.clamp(rx, rx + rw);
    let closest_y = cy.clamp(ry, ry + rh);
    distance(cx, cy, closest_x, closest_y) <= radius
}

/// Circle against line segment
///
/// The endpoints and the circle center form a triangle. Either endpoint
/// inside the radius collides immediately. Otherwise the triangle's height
/// over the segment (via Heron's formula) rules the circle out when it
/// exceeds the radius. A perpendicular-distance test alone gives false
/// positives when the foot of the perpendicular falls outside the finite
/// segment, so within the height a law-of-cosines refinement rechecks using
/// the longer center-to-endpoint side: if a leg of the circle's radius from
/// that side would still fit inside the segment's length, the segment
/// really does reach the circle.
pub fn circle_line_overlap(cx: i32, cy: i32, radius: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
    let ac = f64::from(distance(cx, cy, x1, y1));
    let cb = f64::from(distance(cx, cy, x2, y2));
    let ba = f64::from(distance(x1, y1, x2, y2));
    let radius = f64::from(radius);

    if ac <= radius || cb <= radius {
        return true;
    }

    let p = (ac + cb + ba) / 2.0;
    let height = 2.0 * (p * (p - ac) * (p - cb) * (p - ba)).sqrt() / ba;

    // NaN height (degenerate zero-length segment past the endpoint check)
    // fails this comparison and reports no collision.
    if height <= radius {
        let cos_c = ac.mul_add(ac, cb.mul_add(cb, -(ba * ba))) / (2.0 * ac * cb);
        let primary = ac.max(cb);
        let reach = primary
            .mul_add(primary, radius.mul_add(radius, -(2.0 * primary * radius * cos_c)))
            .sqrt();
        if ba >= reach {
            return true;
        }
    }

    false
}

/// Liang-Barsky clip of a segment against the open interior of a rectangle.
///
/// Used by the resolver so line obstacles block rectangular movers during
/// stepping; it is deliberately not part of the public pairwise dispatch,
/// which stays fail-closed for rectangle-line per the engine's contract.
/// Touching the boundary (including a segment collinear with an edge) is
/// not a hit, consistent with the strict rectangle test.
pub(crate) fn segment_intersects_rect(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    rx: i32,
    ry: i32,
    rw: i32,
    rh: i32,
) -> bool {
    let dx = f64::from(x2 - x1);
    let dy = f64::from(y2 - y1);
    let p = [-dx, dx, -dy, dy];
    let q = [
        f64::from(x1 - rx),
        f64::from(rx + rw - x1),
        f64::from(y1 - ry),
        f64::from(ry + rh - y1),
    ];

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for i in 0..4 {
        if p[i] == 0.0 {
            if q[i] <= 0.0 {
                return false;
            }
        } else {
            let r = q[i] / p[i];
            if p[i] < 0.0 {
                if r > t1 {
                    return false;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return false;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }

    t0 < t1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line, Rectangle};

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Shape {
        Shape::Rectangle(Rectangle::new(x, y, w, h, 0.5, 1.0, vec![], vec![]))
    }

    fn circle(x: i32, y: i32, radius: i32) -> Shape {
        Shape::Circle(Circle::new(x, y, radius, 0.5, 1.0, vec![], vec![]))
    }

    fn line(x: i32, y: i32, x2: i32, y2: i32) -> Shape {
        Shape::Line(Line::new(x, y, x2, y2, 0.5, 1.0, vec![], vec![]))
    }

    #[test]
    fn test_distance_truncates_toward_zero() {
        assert_eq!(distance(0, 0, 3, 4), 5);
        assert_eq!(distance(0, 0, 1, 1), 1); // sqrt(2) = 1.41..
        assert_eq!(distance(5, 5, 0, 10), 7); // sqrt(50) = 7.07..
        assert_eq!(distance(2, 3, 2, 3), 0);
    }

    #[test]
    fn test_rect_rect_overlap_and_flush_edges() {
        let a = rect(0, 0, 10, 10);
        assert!(is_colliding(&a, &rect(5, 5, 10, 10)));
        assert!(is_colliding(&a, &rect(-5, -5, 10, 10)));
        // sharing an edge is resting flush, not colliding
        assert!(!is_colliding(&a, &rect(10, 0, 10, 10)));
        assert!(!is_colliding(&a, &rect(0, 10, 10, 10)));
        assert!(!is_colliding(&a, &rect(30, 0, 10, 10)));
    }

    #[test]
    fn test_rect_rect_symmetry() {
        let a = rect(0, 0, 10, 10);
        let b = rect(7, 3, 4, 4);
        assert_eq!(is_colliding(&a, &b), is_colliding(&b, &a));

        let c = rect(40, 40, 4, 4);
        assert_eq!(is_colliding(&a, &c), is_colliding(&c, &a));
    }

    #[test]
    fn test_circle_circle() {
        // distance 8 <= 5 + 4
        assert!(is_colliding(&circle(0, 0, 5), &circle(8, 0, 4)));
        // distance 11 > 9
        assert!(!is_colliding(&circle(0, 0, 5), &circle(11, 0, 4)));
        // exact touch: distance 9 == 9
        assert!(is_colliding(&circle(0, 0, 5), &circle(9, 0, 4)));
    }

    #[test]
    fn test_circle_rect_clamps_to_closest_point() {
        let r = rect(10, 10, 20, 20);
        // closest point is the (10, 10) corner, distance sqrt(2*4) = 2.8 -> 2
        assert!(is_colliding(&circle(8, 8, 3), &r));
        assert!(!is_colliding(&circle(4, 4, 3), &r));
        // center inside the rectangle clamps to itself
        assert!(is_colliding(&circle(20, 20, 1), &r));
        // dispatch works from the rectangle side too
        assert_eq!(
            is_colliding(&r, &circle(8, 8, 3)),
            is_colliding(&circle(8, 8, 3), &r)
        );
    }

    #[test]
    fn test_circle_line_perpendicular_distance() {
        let c = circle(5, 5, 3);
        // horizontal segment 5 below the center: distance 5 > 3
        assert!(!is_colliding(&c, &line(0, 10, 10, 10)));
        // segment through the center: distance 0
        assert!(is_colliding(&c, &line(0, 5, 10, 5)));
    }

    #[test]
    fn test_circle_line_endpoint_within_radius() {
        let c = circle(5, 5, 3);
        assert!(is_colliding(&c, &line(6, 6, 40, 40)));
    }

    #[test]
    fn test_circle_line_foot_outside_segment() {
        // The infinite line through (10,0)-(20,0) passes within the radius
        // of a circle at (0,2), but the foot of the perpendicular lands at
        // x=0, outside the finite segment. The refinement must reject it.
        let c = circle(0, 2, 3);
        assert!(!is_colliding(&c, &line(10, 0, 20, 0)));
        // same configuration with the segment long enough to reach
        assert!(is_colliding(&c, &line(-2, 0, 20, 0)));
    }

    #[test]
    fn test_degenerate_geometry() {
        // zero-length line away from the circle: no collision, no panic
        assert!(!is_colliding(&circle(0, 0, 3), &line(10, 10, 10, 10)));
        // zero-length line at the center collides via the endpoint check
        assert!(is_colliding(&circle(0, 0, 3), &line(0, 0, 0, 0)));
        // zero-radius circle on the segment
        assert!(is_colliding(&circle(5, 5, 0), &line(0, 5, 10, 5)));
        // zero-extent rectangle never overlaps under strict bounds
        assert!(!is_colliding(&rect(5, 5, 0, 0), &rect(0, 0, 10, 10)));
    }

    #[test]
    fn test_unsupported_pairs_fail_closed() {
        let r = rect(0, 0, 10, 10);
        let l = line(0, 0, 10, 10);
        assert!(!is_colliding(&r, &l));
        assert!(!is_colliding(&l, &r));
        assert!(!is_colliding(&l, &line(0, 10, 10, 0)));
    }

    #[test]
    fn test_colliding_at_offsets_only_the_prober() {
        let a = rect(0, 0, 10, 10);
        let b = rect(30, 0, 10, 10);
        assert!(!colliding_at(&a, 0, 0, &b));
        assert!(colliding_at(&a, 25, 0, &b));
        // offsetting a line prober moves both endpoints
        let l = line(0, 5, 10, 5);
        let c = circle(50, 5, 3);
        assert!(colliding_at(&l, 42, 0, &c));
    }

    #[test]
    fn test_segment_intersects_rect_interior_only() {
        // crossing the box
        assert!(segment_intersects_rect(-5, 5, 15, 5, 0, 0, 10, 10));
        // fully outside
        assert!(!segment_intersects_rect(-5, 20, 15, 20, 0, 0, 10, 10));
        // collinear with the bottom edge: touching, not intersecting
        assert!(!segment_intersects_rect(-5, 10, 15, 10, 0, 0, 10, 10));
        // diagonal ramp clipping a corner region
        assert!(segment_intersects_rect(0, 12, 12, 0, 0, 0, 10, 10));
        // endpoint strictly inside
        assert!(segment_intersects_rect(5, 5, 40, 40, 0, 0, 10, 10));
    }
}
