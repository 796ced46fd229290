use glam::DVec2;

use crate::utils::math::elastic_1d;

/// Elastic exchange between two bodies along a unit contact `normal`.
///
/// Both velocities are projected on the normal, the 1-D elastic formula is
/// applied to the projections, and only the normal component of each velocity
/// changes. Tangential components are left alone, so momentum and kinetic
/// energy of the pair are preserved.
#[inline]
pub fn exchange_along_normal(
    velocity_a: &mut DVec2,
    mass_a: f64,
    velocity_b: &mut DVec2,
    mass_b: f64,
    normal: DVec2,
) {
    let va = velocity_a.dot(normal);
    let vb = velocity_b.dot(normal);
    let (va_after, vb_after) = elastic_1d(va, vb, mass_a, mass_b);
    *velocity_a += normal * (va_after - va);
    *velocity_b += normal * (vb_after - vb);
}
