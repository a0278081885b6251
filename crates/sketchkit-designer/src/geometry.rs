//! Geometry engine: pure hit-testing and derivation functions.
//!
//! Everything here is stateless. The per-kind shape types in [`crate::model`]
//! call into these helpers for both hit-testing and render-path construction,
//! so a shape is always hit exactly where it is painted.

use crate::model::{DesignerShape, Group, ObjectRef, Point, SceneObject, Shape};

/// Distance under which a point counts as touching a line-like stroke.
pub const HIT_TOLERANCE: f64 = 5.0;

/// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
pub type Bounds = (f64, f64, f64, f64);

/// Returns true if `point` hits `shape`.
pub fn hit_test(point: Point, shape: &Shape) -> bool {
    shape.contains_point(point)
}

/// Returns true if any member of `group` is hit.
pub fn hit_test_group(point: Point, group: &Group) -> bool {
    group.members().iter().any(|m| hit_test(point, m))
}

/// Hit-tests a borrowed scene object of either variant.
pub fn hit_test_object(point: Point, object: ObjectRef<'_>) -> bool {
    match object {
        ObjectRef::Shape(shape) => hit_test(point, shape),
        ObjectRef::Group(group) => hit_test_group(point, group),
    }
}

/// Hit-tests an owned scene object of either variant.
pub fn hit_test_owned(point: Point, object: &SceneObject) -> bool {
    hit_test_object(point, object.borrowed())
}

/// Shortest distance from `p` to the segment `a`-`b`.
///
/// The projection is clamped to the segment, so points beyond an endpoint
/// measure to that endpoint. A zero-length segment degrades to point distance.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance_to(&closest)
}

/// True if `p` lies strictly within [`HIT_TOLERANCE`] of the segment `a`-`b`.
pub fn near_segment(p: Point, a: Point, b: Point) -> bool {
    distance_to_segment(p, a, b) < HIT_TOLERANCE
}

/// True if `p` is near any consecutive segment of `points`.
///
/// A single-point trace is treated as a zero-length segment.
pub fn near_polyline(p: Point, points: &[Point]) -> bool {
    match points {
        [] => false,
        [only] => near_segment(p, *only, *only),
        _ => points.windows(2).any(|w| near_segment(p, w[0], w[1])),
    }
}

/// Normalizes two opposite corners into `(min_x, min_y, max_x, max_y)`.
pub fn normalized_bounds(a: Point, b: Point) -> Bounds {
    (a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

/// Inclusive containment test against normalized bounds.
pub fn point_in_bounds(p: Point, bounds: Bounds) -> bool {
    let (min_x, min_y, max_x, max_y) = bounds;
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Center and radii of the ellipse inscribed in the box spanned by `a` and `b`.
pub fn ellipse_center_radii(a: Point, b: Point) -> (Point, f64, f64) {
    let center = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let rx = (b.x - a.x).abs() / 2.0;
    let ry = (b.y - a.y).abs() / 2.0;
    (center, rx, ry)
}

/// Tests `p` against the ellipse `(dx/rx)² + (dy/ry)² ≤ 1`.
///
/// An ellipse with a zero radius has collapsed onto a segment (or a point);
/// it is hit-tested like a line so it stays pickable.
pub fn point_in_ellipse(p: Point, center: Point, rx: f64, ry: f64) -> bool {
    if rx == 0.0 || ry == 0.0 {
        let a = Point::new(center.x - rx, center.y - ry);
        let b = Point::new(center.x + rx, center.y + ry);
        return near_segment(p, a, b);
    }
    let dx = (p.x - center.x) / rx;
    let dy = (p.y - center.y) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Radius of a circle given its center and a point on its edge.
pub fn circle_radius(center: Point, edge: Point) -> f64 {
    (edge.x - center.x).hypot(edge.y - center.y)
}

/// True if the squared distance to `center` is at most `radius²`.
pub fn point_in_circle(p: Point, center: Point, radius: f64) -> bool {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Even-odd ray casting against a closed polygon.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Bounds of a point set, or `None` when empty.
pub fn bounding_box(points: &[Point]) -> Option<Bounds> {
    let first = points.first()?;
    Some(points.iter().skip(1).fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    ))
}

/// Union of two bounds.
pub fn union_bounds(a: Bounds, b: Bounds) -> Bounds {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}
