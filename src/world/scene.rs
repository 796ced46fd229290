use glam::DVec2;
use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};

use crate::{
    config::{SceneConfig, PARTICLE_GREEN_RANGE},
    core::{Block, Color, Particle},
    error::{Error, Result},
};

/// Freshly generated population for a world.
#[derive(Debug, Clone)]
pub struct Scene {
    pub particles: Vec<Particle>,
    pub blocks: Vec<Block>,
    /// Seed the particle RNG was started from.
    pub seed: u64,
}

impl Scene {
    /// Validates `config` and builds the initial bodies.
    ///
    /// Particles are scattered uniformly over the arena, inset by their
    /// radius, with each velocity component uniform in
    /// `[-initial_speed_bound, initial_speed_bound]`. Blocks form a single
    /// horizontal row, centred in the arena and at rest.
    pub fn generate(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);

        let particles = spawn_particles(config, &mut rng)?;
        let blocks = spawn_blocks(config)?;

        log::debug!(
            "generated scene: {} particles, {} blocks, arena {}x{}, seed {}",
            particles.len(),
            blocks.len(),
            config.arena_width,
            config.arena_height,
            seed
        );

        Ok(Self {
            particles,
            blocks,
            seed,
        })
    }
}

/// Uniform sampler over `[low, high]`; a range rand cannot sample is a config error.
fn inclusive(name: &str, low: f64, high: f64) -> Result<Uniform<f64>> {
    Uniform::new_inclusive(low, high).map_err(|e| {
        Error::InvalidConfig(format!("cannot sample {name} from [{low}, {high}]: {e}"))
    })
}

fn spawn_particles(config: &SceneConfig, rng: &mut StdRng) -> Result<Vec<Particle>> {
    let arena = config.arena();
    let r = config.particle_radius;
    let bound = config.initial_speed_bound;

    let x = inclusive("particle x", r, arena.x - r)?;
    let y = inclusive("particle y", r, arena.y - r)?;
    let speed = inclusive("velocity component", -bound, bound)?;
    let green = Uniform::new(PARTICLE_GREEN_RANGE.start, PARTICLE_GREEN_RANGE.end)
        .map_err(|e| Error::InvalidConfig(format!("cannot sample particle tint: {e}")))?;

    let mut particles = Vec::with_capacity(config.particle_count);
    for _ in 0..config.particle_count {
        let position = DVec2::new(x.sample(rng), y.sample(rng));
        let velocity = DVec2::new(speed.sample(rng), speed.sample(rng));
        let green = green.sample(rng);
        particles.push(
            Particle::new(position, velocity, r, config.particle_mass)?
                .with_color(Color::particle(green)),
        );
    }
    Ok(particles)
}

fn spawn_blocks(config: &SceneConfig) -> Result<Vec<Block>> {
    let arena = config.arena();
    let size = DVec2::new(config.block_width, config.block_height);
    let left = (arena.x - config.block_row_width()) / 2.0;
    let top = (arena.y - size.y) / 2.0;
    let pitch = size.x + config.block_gap;

    (0..config.block_count)
        .map(|i| {
            let corner = DVec2::new(left + i as f64 * pitch, top);
            Block::new(corner, size, config.block_mass)
        })
        .collect()
}
