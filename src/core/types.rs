use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Display color carried by every body. Physics never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fill used for blocks.
    pub const BLOCK: Color = Color::rgb(200, 30, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Particle tint: full blue with a variable green channel.
    pub const fn particle(green: u8) -> Self {
        Self::rgb(0, green, 255)
    }
}

/// Which collection a body belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Particle,
    Block,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Particle => f.write_str("particle"),
            BodyKind::Block => f.write_str("block"),
        }
    }
}

/// Axis-aligned bounding box in arena coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn from_corner(corner: DVec2, size: DVec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test where shared edges count as touching.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || other.max.x < self.min.x
            || self.max.y < other.min.y
            || other.max.y < self.min.y)
    }

    /// Smallest penetration depth on each axis, assuming the boxes intersect.
    pub fn penetration(&self, other: &Aabb) -> DVec2 {
        let depth_x = (self.max.x - other.min.x).min(other.max.x - self.min.x);
        let depth_y = (self.max.y - other.min.y).min(other.max.y - self.min.y);
        DVec2::new(depth_x, depth_y)
    }
}
