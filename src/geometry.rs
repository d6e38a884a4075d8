//! Geometric primitives: orientation, in-circle, and the bounding-box statistics
//! used to size the bounding triangle.
//!
//! Both predicates return a signed `{+1, 0, -1}` rather than a plain boolean, so
//! a caller can plug in an exact/robust predicate implementation later without
//! changing the rest of the core.

use crate::constants::{BOUNDING_TRIANGLE_SHIFT, MIN_WIDTH_HEIGHT, PREDICATE_EPSILON};
use crate::data_structures::Point;

/// Sign of the signed area of `(p, q, r)`. `+1` means `r` is strictly left of the
/// directed edge `p -> q` (i.e. `(p, q, r)` is CCW), `-1` strictly right, `0`
/// collinear within [`PREDICATE_EPSILON`].
pub fn orient(p: Point, q: Point, r: Point) -> i32 {
    let det = (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x);
    sign(det)
}

/// Sign of the in-circle determinant for the CCW triangle `(a, b, c)` against `p`.
/// `+1` means `p` is strictly inside the circumcircle of `(a, b, c)`.
///
/// Ties (near-zero determinant) resolve to `0`, which callers must treat as "not
/// strictly inside".
pub fn in_circle(a: Point, b: Point, c: Point, p: Point) -> i32 {
    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;

    let det = ax * (by * c2 - b2 * cy) - ay * (bx * c2 - b2 * cx) + a2 * (bx * cy - by * cx);
    sign(det)
}

fn sign(value: f64) -> i32 {
    if value > PREDICATE_EPSILON {
        1
    } else if value < -PREDICATE_EPSILON {
        -1
    } else {
        0
    }
}

/// Bounding-box centre and half-extent statistics used to place the bounding
/// triangle: `(cx, cy, M)` where `M = max(width, height, MinWidthHeight)`.
pub fn point_stats(points: &[Point]) -> (f64, f64, f64) {
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    if points.is_empty() {
        return (0.0, 0.0, MIN_WIDTH_HEIGHT);
    }

    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    let m = (max_x - min_x).max(max_y - min_y).max(MIN_WIDTH_HEIGHT);
    (cx, cy, m)
}

/// Which corner of the bounding triangle to compute coordinates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundingCorner {
    LowerRight,
    LowerLeft,
    Upper,
}

/// Computes the coordinates of one bounding-triangle corner from the input
/// statistics.
pub fn bounding_triangle_coords(points: &[Point], which: BoundingCorner) -> Point {
    let (cx, cy, m) = point_stats(points);
    let s = BOUNDING_TRIANGLE_SHIFT;
    match which {
        BoundingCorner::LowerRight => Point::new(cx + s * m, cy - m),
        BoundingCorner::LowerLeft => Point::new(cx - s * m, cy - m),
        BoundingCorner::Upper => Point::new(cx, cy + m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orient_detects_ccw_and_cw() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 0.0);
        let left = Point::new(0.0, 1.0);
        let right = Point::new(0.0, -1.0);
        assert_eq!(orient(p, q, left), 1);
        assert_eq!(orient(p, q, right), -1);
    }

    #[test]
    fn orient_detects_collinear() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 0.0);
        let r = Point::new(2.0, 0.0);
        assert_eq!(orient(p, q, r), 0);
    }

    #[test]
    fn orient_is_antisymmetric_under_swap() {
        let p = Point::new(0.3, -1.2);
        let q = Point::new(4.1, 2.0);
        let r = Point::new(-2.0, 5.0);
        assert_eq!(orient(p, q, r), -orient(q, p, r));
    }

    #[test]
    fn in_circle_detects_centre_point() {
        // unit circle around the origin, CCW
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let c = Point::new(-1.0, 0.0);
        assert_eq!(in_circle(a, b, c, Point::new(0.0, 0.0)), 1);
        assert_eq!(in_circle(a, b, c, Point::new(10.0, 10.0)), -1);
    }

    #[test]
    fn bounding_triangle_contains_all_points() {
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(-3.0, 2.0),
            Point::new(4.0, -5.0),
        ];
        let lr = bounding_triangle_coords(&points, BoundingCorner::LowerRight);
        let ll = bounding_triangle_coords(&points, BoundingCorner::LowerLeft);
        let up = bounding_triangle_coords(&points, BoundingCorner::Upper);
        // CCW order is (lr, up, ll); every input point must be strictly inside.
        for p in &points {
            assert_eq!(orient(lr, up, *p), 1);
            assert_eq!(orient(up, ll, *p), 1);
            assert_eq!(orient(ll, lr, *p), 1);
        }
    }
}
