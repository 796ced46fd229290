use glam::DVec2;

use super::types::{Aabb, BodyKind};

/// Kinematic view shared by particles and blocks.
///
/// Wall containment and integration are written once against this trait.
/// The "reference point" is whatever `position()` returns: the centre for a
/// particle, the top-left corner for a block.
pub trait Body {
    const KIND: BodyKind;

    fn position(&self) -> DVec2;
    fn position_mut(&mut self) -> &mut DVec2;
    fn velocity(&self) -> DVec2;
    fn velocity_mut(&mut self) -> &mut DVec2;
    fn mass(&self) -> f64;
    fn aabb(&self) -> Aabb;

    /// Inclusive range the reference point may occupy inside an arena of size
    /// `arena` without any edge crossing a wall.
    fn position_limits(&self, arena: DVec2) -> (DVec2, DVec2);

    /// Advances the body by one tick of its own velocity.
    #[inline]
    fn integrate(&mut self) {
        let velocity = self.velocity();
        *self.position_mut() += velocity;
    }

    #[inline]
    fn momentum(&self) -> DVec2 {
        self.velocity() * self.mass()
    }

    #[inline]
    fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity().length_squared()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.position().is_finite() && self.velocity().is_finite()
    }
}
