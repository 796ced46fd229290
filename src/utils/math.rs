//! Additional math helpers layered on top of `glam`.

use glam::DVec2;

use crate::core::Aabb;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    let d = b - a;
    d.x.hypot(d.y)
}

/// Clamps `value` into `[lo, hi]`, favouring `lo` when the range is inverted.
#[inline]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    lo.max(value.min(hi))
}

/// Closest point of a rectangle to `point`, clamping each axis independently.
/// Points inside the rectangle map to themselves.
#[inline]
pub fn closest_point_on_rect(point: DVec2, rect: &Aabb) -> DVec2 {
    DVec2::new(
        clamp(point.x, rect.min.x, rect.max.x),
        clamp(point.y, rect.min.y, rect.max.y),
    )
}

/// Post-collision speeds of a 1-D elastic collision between masses `m1`, `m2`
/// moving at `v1`, `v2`.
#[inline]
pub fn elastic_1d(v1: f64, v2: f64, m1: f64, m2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1p = (v1 * (m1 - m2) + 2.0 * m2 * v2) / total;
    let v2p = (v2 * (m2 - m1) + 2.0 * m1 * v1) / total;
    (v1p, v2p)
}
