use serde::{Deserialize, Serialize};

use crate::{
    core::Block,
    error::{Error, Result},
};

/// Global velocity damping applied to blocks once per tick. Always in `[0, 1]`.
///
/// `0` leaves blocks coasting forever, `1` stops them dead after every tick.
/// The gas itself is frictionless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Friction(f64);

impl Friction {
    pub const NONE: Friction = Friction(0.0);

    pub fn new(coefficient: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&coefficient) {
            return Err(Error::InvalidConfig(format!(
                "friction must be within [0, 1], got {coefficient}"
            )));
        }
        Ok(Self(coefficient))
    }

    pub fn coefficient(self) -> f64 {
        self.0
    }

    /// Factor applied to block velocities.
    #[inline]
    pub fn damping_factor(self) -> f64 {
        1.0 - self.0
    }

    pub fn apply(self, blocks: &mut [Block]) {
        let factor = self.damping_factor();
        for block in blocks {
            block.velocity *= factor;
        }
    }
}

impl TryFrom<f64> for Friction {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Friction> for f64 {
    fn from(friction: Friction) -> f64 {
        friction.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn damping_scales_block_velocity() -> Result<()> {
        let mut blocks = vec![Block::new(DVec2::ZERO, DVec2::splat(10.0), 5.0)?
            .with_velocity(DVec2::new(4.0, -2.0))];
        Friction::new(0.25)?.apply(&mut blocks);
        assert_eq!(blocks[0].velocity, DVec2::new(3.0, -1.5));
        Ok(())
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(Friction::new(-0.1).is_err());
        assert!(Friction::new(1.5).is_err());
        assert!(Friction::new(f64::NAN).is_err());
        assert!(Friction::new(1.0).is_ok());
    }

    #[test]
    fn converts_to_and_from_plain_numbers() -> Result<()> {
        let friction = Friction::try_from(0.4)?;
        assert_eq!(f64::from(friction), 0.4);
        assert!(Friction::try_from(-1.0).is_err());
        Ok(())
    }

    #[test]
    fn zero_friction_is_identity() -> Result<()> {
        let mut blocks = vec![Block::new(DVec2::ZERO, DVec2::splat(10.0), 5.0)?
            .with_velocity(DVec2::new(0.3, 0.7))];
        Friction::NONE.apply(&mut blocks);
        assert_eq!(blocks[0].velocity, DVec2::new(0.3, 0.7));
        Ok(())
    }
}
