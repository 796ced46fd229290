use crate::{
    collision::{pair_mut, response::exchange_along_normal},
    core::Particle,
    utils::math::distance,
};

/// Resolves one particle-particle contact. Returns `true` if the discs
/// overlapped and were resolved.
///
/// Coincident centres are skipped: there is no usable normal.
pub fn collide_particles(a: &mut Particle, b: &mut Particle) -> bool {
    let dist = distance(a.position, b.position);
    let reach = a.radius + b.radius;
    if dist >= reach || dist == 0.0 {
        return false;
    }

    let normal = (b.position - a.position) / dist;
    exchange_along_normal(&mut a.velocity, a.mass, &mut b.velocity, b.mass, normal);

    // Split the overlap so the discs end up exactly touching.
    let push = normal * ((reach - dist) * 0.5);
    a.position -= push;
    b.position += push;
    true
}

/// Visits every pair `i < j` in index order, mutating in place.
///
/// Later pairs observe the velocity and position changes of earlier pairs
/// in the same pass; trajectories depend on this order.
pub fn resolve_particle_pairs(particles: &mut [Particle]) -> usize {
    let mut resolved = 0;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let (a, b) = pair_mut(particles, i, j);
            if collide_particles(a, b) {
                resolved += 1;
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Body;
    use crate::error::Result;
    use glam::DVec2;

    fn particle(x: f64, y: f64, vx: f64, vy: f64, mass: f64) -> Result<Particle> {
        Particle::new(DVec2::new(x, y), DVec2::new(vx, vy), 4.0, mass)
    }

    #[test]
    fn head_on_equal_masses_swap_and_separate() -> Result<()> {
        let mut a = particle(100.0, 50.0, 1.0, 0.0, 1.0)?;
        let mut b = particle(106.0, 50.0, -1.0, 0.0, 1.0)?;

        assert!(collide_particles(&mut a, &mut b));

        assert!((a.velocity - DVec2::new(-1.0, 0.0)).length() < 1e-12);
        assert!((b.velocity - DVec2::new(1.0, 0.0)).length() < 1e-12);
        assert!((distance(a.position, b.position) - 8.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn separated_or_coincident_pairs_are_skipped() -> Result<()> {
        let mut a = particle(0.0, 0.0, 1.0, 0.0, 1.0)?;
        let mut b = particle(8.0, 0.0, -1.0, 0.0, 1.0)?;
        assert!(!collide_particles(&mut a, &mut b));

        let mut c = particle(5.0, 5.0, 1.0, 0.0, 1.0)?;
        let mut d = particle(5.0, 5.0, -1.0, 0.0, 1.0)?;
        assert!(!collide_particles(&mut c, &mut d));
        assert_eq!(c.velocity, DVec2::new(1.0, 0.0));
        Ok(())
    }

    #[test]
    fn unequal_masses_conserve_momentum_and_energy() -> Result<()> {
        let mut a = particle(10.0, 10.0, 2.0, 0.5, 1.0)?;
        let mut b = particle(15.0, 13.0, -1.0, 0.25, 3.0)?;
        let p0 = a.momentum() + b.momentum();
        let e0 = a.kinetic_energy() + b.kinetic_energy();

        assert!(collide_particles(&mut a, &mut b));

        assert!((a.momentum() + b.momentum() - p0).length() < 1e-12);
        assert!((a.kinetic_energy() + b.kinetic_energy() - e0).abs() < 1e-12);
        assert!((distance(a.position, b.position) - 8.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn pass_counts_each_overlapping_pair() -> Result<()> {
        let mut particles = vec![
            particle(10.0, 10.0, 0.0, 0.0, 1.0)?,
            particle(16.0, 10.0, 0.0, 0.0, 1.0)?,
            particle(60.0, 60.0, 0.0, 0.0, 1.0)?,
        ];
        assert_eq!(resolve_particle_pairs(&mut particles), 1);
        assert_eq!(particles[2].position, DVec2::new(60.0, 60.0));
        Ok(())
    }
}
