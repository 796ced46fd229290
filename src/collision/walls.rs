use glam::DVec2;

use crate::core::Body;

/// Keeps a body inside the arena `[0, arena.x] x [0, arena.y]`.
///
/// Each axis is handled on its own: if the body poked through the low wall
/// it is placed flush against it, otherwise the high wall is checked the same
/// way. The velocity component on a clamped axis is reflected. Returns `true`
/// when any axis was clamped.
///
/// Clamping targets the exact limit reported by [`Body::position_limits`], so
/// a second call on an already contained body changes nothing.
pub fn contain<B: Body>(body: &mut B, arena: DVec2) -> bool {
    let (lo, hi) = body.position_limits(arena);
    let mut clamped = false;

    for axis in 0..2 {
        let p = body.position()[axis];
        let limit = if p < lo[axis] {
            lo[axis]
        } else if p > hi[axis] {
            hi[axis]
        } else {
            continue;
        };
        body.position_mut()[axis] = limit;
        let v = body.velocity()[axis];
        body.velocity_mut()[axis] = -v;
        clamped = true;
    }

    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Block, Particle};
    use crate::error::Result;

    const ARENA: DVec2 = DVec2::new(100.0, 80.0);

    #[test]
    fn particle_reflects_off_left_wall() -> Result<()> {
        let mut p = Particle::new(DVec2::new(2.0, 40.0), DVec2::new(-3.0, 1.0), 4.0, 1.0)?;
        assert!(contain(&mut p, ARENA));
        assert_eq!(p.position, DVec2::new(4.0, 40.0));
        assert_eq!(p.velocity, DVec2::new(3.0, 1.0));
        Ok(())
    }

    #[test]
    fn block_clamped_on_both_axes() -> Result<()> {
        let mut b = Block::new(DVec2::new(95.0, -2.0), DVec2::new(10.0, 10.0), 5.0)?
            .with_velocity(DVec2::new(2.0, -1.0));
        assert!(contain(&mut b, ARENA));
        assert_eq!(b.position, DVec2::new(90.0, 0.0));
        assert_eq!(b.velocity, DVec2::new(-2.0, 1.0));
        Ok(())
    }

    #[test]
    fn contained_body_is_untouched() -> Result<()> {
        let mut p = Particle::new(DVec2::new(50.0, 40.0), DVec2::new(-3.0, 1.0), 4.0, 1.0)?;
        let before = p.clone();
        assert!(!contain(&mut p, ARENA));
        assert_eq!(p, before);
        Ok(())
    }

    #[test]
    fn second_call_is_a_no_op() -> Result<()> {
        let mut p = Particle::new(DVec2::new(99.3, 79.9), DVec2::new(0.7, 0.3), 0.35, 1.0)?;
        contain(&mut p, ARENA);
        let once = p.clone();
        assert!(!contain(&mut p, ARENA));
        assert_eq!(p, once);
        Ok(())
    }
}
