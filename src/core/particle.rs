use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::types::{Aabb, BodyKind, Color};
use crate::error::{Error, Result};

/// A gas particle: a small frictionless disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Centre of the disc.
    pub position: DVec2,
    /// Displacement per tick.
    pub velocity: DVec2,
    pub radius: f64,
    pub mass: f64,
    pub color: Color,
    /// Index of the block this particle was last resolved against.
    ///
    /// A lookup key into the world's block list, valid until the next reset.
    /// The next particle-block pass that meets the same block clears it and
    /// skips the pair once.
    pub last_hit_block: Option<usize>,
}

impl Particle {
    /// Creates a particle after validating radius, mass and finiteness.
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, mass: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "particle radius must be finite and > 0".into(),
            ));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidConfig(
                "particle mass must be finite and > 0".into(),
            ));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(Error::InvalidConfig(
                "particle position and velocity must be finite".into(),
            ));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            mass,
            color: Color::particle(50),
            last_hit_block: None,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Body for Particle {
    const KIND: BodyKind = BodyKind::Particle;

    #[inline]
    fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    fn position_mut(&mut self) -> &mut DVec2 {
        &mut self.position
    }

    #[inline]
    fn velocity(&self) -> DVec2 {
        self.velocity
    }

    #[inline]
    fn velocity_mut(&mut self) -> &mut DVec2 {
        &mut self.velocity
    }

    #[inline]
    fn mass(&self) -> f64 {
        self.mass
    }

    fn aabb(&self) -> Aabb {
        let extent = DVec2::splat(self.radius);
        Aabb::new(self.position - extent, self.position + extent)
    }

    fn position_limits(&self, arena: DVec2) -> (DVec2, DVec2) {
        let inset = DVec2::splat(self.radius);
        (inset, arena - inset)
    }
}
