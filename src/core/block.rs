use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::types::{Aabb, BodyKind, Color};
use crate::error::{Error, Result};

/// Heavy axis-aligned rectangle pushed around by the gas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner.
    pub position: DVec2,
    pub velocity: DVec2,
    /// Width and height.
    pub size: DVec2,
    pub mass: f64,
    pub color: Color,
}

impl Block {
    pub fn new(position: DVec2, size: DVec2, mass: f64) -> Result<Self> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "block width and height must be finite and > 0".into(),
            ));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidConfig(
                "block mass must be finite and > 0".into(),
            ));
        }
        if !position.is_finite() {
            return Err(Error::InvalidConfig("block position must be finite".into()));
        }
        Ok(Self {
            position,
            velocity: DVec2::ZERO,
            size,
            mass,
            color: Color::BLOCK,
        })
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn center(&self) -> DVec2 {
        self.position + self.size * 0.5
    }
}

impl Body for Block {
    const KIND: BodyKind = BodyKind::Block;

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
        Aabb::from_corner(self.position, self.size)
    }

    fn position_limits(&self, arena: DVec2) -> (DVec2, DVec2) {
        (DVec2::ZERO, arena - self.size)
    }
}
