use glam::DVec2;

use crate::{
    config::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH},
    core::{Block, Body, Particle},
    dynamics::Friction,
    error::{Error, Result},
    world::World,
};

/// Assembles a world from hand-placed bodies instead of a generated scene.
///
/// Bodies are kept exactly where they are put; nothing is contained or
/// separated until the first tick.
pub struct WorldBuilder {
    arena: DVec2,
    particles: Vec<Particle>,
    blocks: Vec<Block>,
    friction: f64,
    parallel: bool,
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            arena: DVec2::new(DEFAULT_ARENA_WIDTH as f64, DEFAULT_ARENA_HEIGHT as f64),
            particles: Vec::new(),
            blocks: Vec::new(),
            friction: 0.0,
            parallel: false,
        }
    }

    pub fn arena(mut self, width: f64, height: f64) -> Self {
        self.arena = DVec2::new(width, height);
        self
    }

    pub fn particle(mut self, particle: Particle) -> Self {
        self.particles.push(particle);
        self
    }

    pub fn particles(mut self, particles: impl IntoIterator<Item = Particle>) -> Self {
        self.particles.extend(particles);
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn build(self) -> Result<World> {
        if !self.arena.is_finite() || self.arena.min_element() <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "arena must be finite and non-empty, got {}x{}",
                self.arena.x, self.arena.y
            )));
        }
        if let Some(i) = self.particles.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidConfig(format!("particle #{i} is not finite")));
        }
        if let Some(i) = self.blocks.iter().position(|b| !b.is_finite()) {
            return Err(Error::InvalidConfig(format!("block #{i} is not finite")));
        }
        let friction = Friction::new(self.friction)?;

        let mut world = World::from_parts(self.arena, self.particles, self.blocks, friction, 0);
        world.set_parallel_enabled(self.parallel);
        Ok(world)
    }
}
