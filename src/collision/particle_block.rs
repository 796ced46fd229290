use crate::{
    collision::response::exchange_along_normal,
    config::CONTACT_EPSILON,
    core::{Block, Body, BodyKind, Particle},
    error::{Error, Result},
    utils::math::closest_point_on_rect,
};

/// Outcome of testing one particle against one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContact {
    /// The pair was resolved last time; the marker was cleared and the pair skipped.
    Cooldown,
    /// No usable contact (apart, or the closest point is too near the centre).
    Separated,
    /// Velocities exchanged and the particle rolled back.
    Resolved,
}

/// Tests `particle` (at `particle_index`) against `block` (at `block_index`).
///
/// On contact the particle and block exchange momentum elastically along the
/// normal from the particle centre to the closest point of the rectangle.
/// The particle is then moved back by its whole pre-contact velocity and
/// remembers `block_index`, so the same pairing is skipped once on the next
/// pass.
///
/// # Errors
/// [`Error::NonFinite`] if the particle position is no longer finite.
pub fn collide_particle_block(
    particle: &mut Particle,
    particle_index: usize,
    block: &mut Block,
    block_index: usize,
) -> Result<BlockContact> {
    if particle.last_hit_block == Some(block_index) {
        particle.last_hit_block = None;
        return Ok(BlockContact::Cooldown);
    }

    if !particle.position.is_finite() {
        return Err(Error::NonFinite {
            body: BodyKind::Particle,
            index: particle_index,
        });
    }

    let closest = closest_point_on_rect(particle.position, &block.aabb());
    let offset = closest - particle.position;
    let dist2 = offset.length_squared();

    // A centre sitting on or inside the rectangle has no stable normal.
    if dist2 < CONTACT_EPSILON || dist2 > particle.radius * particle.radius {
        return Ok(BlockContact::Separated);
    }

    let normal = offset / dist2.sqrt();
    let incoming = particle.velocity;
    exchange_along_normal(
        &mut particle.velocity,
        particle.mass,
        &mut block.velocity,
        block.mass,
        normal,
    );

    // Undo this tick's displacement rather than projecting out of the block.
    particle.position -= incoming;
    particle.last_hit_block = Some(block_index);
    Ok(BlockContact::Resolved)
}

/// Tests every particle against every block, particles in the outer loop.
pub fn resolve_particle_blocks(particles: &mut [Particle], blocks: &mut [Block]) -> Result<usize> {
    let mut resolved = 0;
    for (i, particle) in particles.iter_mut().enumerate() {
        for (j, block) in blocks.iter_mut().enumerate() {
            if collide_particle_block(particle, i, block, j)? == BlockContact::Resolved {
                resolved += 1;
            }
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn block() -> Result<Block> {
        Block::new(DVec2::new(100.0, 100.0), DVec2::new(50.0, 80.0), 1000.0)
    }

    #[test]
    fn heavy_block_reflects_particle() -> Result<()> {
        let mut b = block()?;
        let mut p = Particle::new(DVec2::new(97.0, 120.0), DVec2::new(5.0, 0.0), 4.0, 1.0)?;

        let outcome = collide_particle_block(&mut p, 0, &mut b, 0)?;

        assert_eq!(outcome, BlockContact::Resolved);
        assert!((p.velocity.x + 5.0).abs() < 0.02);
        assert_eq!(p.velocity.y, 0.0);
        assert_eq!(p.position, DVec2::new(92.0, 120.0));
        assert_eq!(p.last_hit_block, Some(0));
        assert!(b.velocity.x > 0.0);
        Ok(())
    }

    #[test]
    fn cooldown_skips_once() -> Result<()> {
        let mut b = block()?;
        let mut p = Particle::new(DVec2::new(97.0, 120.0), DVec2::new(5.0, 0.0), 4.0, 1.0)?;
        p.last_hit_block = Some(3);

        assert_eq!(collide_particle_block(&mut p, 0, &mut b, 3)?, BlockContact::Cooldown);
        assert_eq!(p.last_hit_block, None);
        assert_eq!(p.velocity, DVec2::new(5.0, 0.0));
        Ok(())
    }

    #[test]
    fn centre_inside_block_is_ignored() -> Result<()> {
        let mut b = block()?;
        let mut p = Particle::new(DVec2::new(120.0, 120.0), DVec2::new(5.0, 0.0), 4.0, 1.0)?;
        assert_eq!(collide_particle_block(&mut p, 0, &mut b, 0)?, BlockContact::Separated);
        assert_eq!(p.last_hit_block, None);
        Ok(())
    }

    #[test]
    fn out_of_reach_is_separated() -> Result<()> {
        let mut b = block()?;
        let mut p = Particle::new(DVec2::new(90.0, 120.0), DVec2::new(5.0, 0.0), 4.0, 1.0)?;
        assert_eq!(collide_particle_block(&mut p, 0, &mut b, 0)?, BlockContact::Separated);
        Ok(())
    }

    #[test]
    fn nan_position_halts() -> Result<()> {
        let mut b = block()?;
        let mut p = Particle::new(DVec2::new(97.0, 120.0), DVec2::ZERO, 4.0, 1.0)?;
        p.position.x = f64::NAN;
        let err = collide_particle_block(&mut p, 7, &mut b, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFinite {
                body: BodyKind::Particle,
                index: 7
            }
        ));
        Ok(())
    }

    #[test]
    fn particle_block_exchange_conserves_energy() -> Result<()> {
        let mut b = Block::new(DVec2::new(100.0, 100.0), DVec2::new(50.0, 80.0), 3.0)?
            .with_velocity(DVec2::new(-0.5, 0.25));
        let mut p = Particle::new(DVec2::new(97.5, 97.0), DVec2::new(2.0, 1.5), 4.0, 1.0)?;
        let e0 = p.kinetic_energy() + b.kinetic_energy();
        let m0 = p.momentum() + b.momentum();

        assert_eq!(collide_particle_block(&mut p, 0, &mut b, 0)?, BlockContact::Resolved);

        assert!((p.kinetic_energy() + b.kinetic_energy() - e0).abs() < 1e-12);
        assert!((p.momentum() + b.momentum() - m0).length() < 1e-12);
        Ok(())
    }
}
