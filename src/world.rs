use std::time::Instant;

use glam::DVec2;

use crate::{
    collision::{resolve_block_pairs, resolve_particle_blocks, resolve_particle_pairs},
    config::SceneConfig,
    core::{Block, Body, BodyKind, Particle},
    dynamics::{Friction, Integrator},
    error::{Error, Result},
    utils::{
        logging::{warn_if_tick_budget_exceeded, Phase},
        profiling::{PhaseTimer, StepProfiler},
    },
};

pub mod builder;
pub mod scene;

pub use builder::WorldBuilder;
pub use scene::Scene;

/// Owns every body in the arena and advances them one tick at a time.
///
/// A tick runs these phases in order, each over the whole population:
///
/// 1. particles move by their velocity and are contained by the walls;
/// 2. blocks do the same;
/// 3. every particle pair `i < j` is resolved;
/// 4. every particle is tested against every block;
/// 5. every block pair `i < j` is resolved;
/// 6. block velocities are damped by the friction coefficient.
///
/// Phases 3–5 visit pairs in index order and update bodies in place, so a
/// pair sees the effects of the pairs resolved before it. Only phases 1–2,
/// where bodies do not interact, may run on the rayon pool.
pub struct World {
    particles: Vec<Particle>,
    blocks: Vec<Block>,
    integrator: Integrator,
    friction: Friction,
    seed: u64,
    tick: u64,
    profile: StepProfiler,
    tick_budget_ms: Option<f64>,
    fault: Option<(BodyKind, usize)>,
}

impl World {
    /// Builds a world from a scene configuration.
    pub fn new(config: &SceneConfig) -> Result<Self> {
        let scene = Scene::generate(config)?;
        Ok(Self::from_parts(
            config.arena(),
            scene.particles,
            scene.blocks,
            config.friction,
            scene.seed,
        ))
    }

    pub fn builder() -> WorldBuilder {
        WorldBuilder::new()
    }

    pub(crate) fn from_parts(
        arena: DVec2,
        particles: Vec<Particle>,
        blocks: Vec<Block>,
        friction: Friction,
        seed: u64,
    ) -> Self {
        Self {
            particles,
            blocks,
            integrator: Integrator::new(arena),
            friction,
            seed,
            tick: 0,
            profile: StepProfiler::default(),
            tick_budget_ms: None,
            fault: None,
        }
    }

    /// Discards every body and regenerates the population from `config`.
    ///
    /// On error the world is left exactly as it was. A successful reset also
    /// clears a halted state.
    pub fn reset(&mut self, config: &SceneConfig) -> Result<()> {
        let scene = Scene::generate(config)?;
        let parallel = self.integrator.parallel();

        self.particles = scene.particles;
        self.blocks = scene.blocks;
        self.integrator = Integrator::new(config.arena());
        self.integrator.set_parallel(parallel);
        self.friction = config.friction;
        self.seed = scene.seed;
        self.tick = 0;
        self.profile = StepProfiler::default();
        self.fault = None;
        Ok(())
    }

    /// Advances the world by one tick.
    ///
    /// # Errors
    /// [`Error::NonFinite`] when a body coordinate stops being finite. The
    /// world is then halted: every later call returns the same error without
    /// touching any body until [`World::reset`] succeeds.
    pub fn step(&mut self) -> Result<()> {
        if let Some((body, index)) = self.fault {
            return Err(Error::NonFinite { body, index });
        }

        let started = Instant::now();
        let tick = self.tick + 1;
        let mut profile = StepProfiler {
            particle_count: self.particles.len(),
            block_count: self.blocks.len(),
            ..StepProfiler::default()
        };

        {
            let _t = PhaseTimer::new(Phase::Integrate, tick, &mut profile.integrate_time);
            self.integrator.step(&mut self.particles);
            self.integrator.step(&mut self.blocks);
        }
        {
            let _t = PhaseTimer::new(Phase::ParticlePairs, tick, &mut profile.particle_pairs_time);
            profile.particle_contacts = resolve_particle_pairs(&mut self.particles);
        }
        {
            let _t = PhaseTimer::new(Phase::ParticleBlock, tick, &mut profile.particle_block_time);
            match resolve_particle_blocks(&mut self.particles, &mut self.blocks) {
                Ok(count) => profile.particle_block_contacts = count,
                Err(err) => return Err(self.halt(err)),
            }
        }
        {
            let _t = PhaseTimer::new(Phase::BlockPairs, tick, &mut profile.block_pairs_time);
            profile.block_contacts = resolve_block_pairs(&mut self.blocks);
        }
        {
            let _t = PhaseTimer::new(Phase::Friction, tick, &mut profile.friction_time);
            self.friction.apply(&mut self.blocks);
        }

        if let Some((body, index)) = self.find_non_finite() {
            return Err(self.halt(Error::NonFinite { body, index }));
        }

        self.tick = tick;
        profile.total_time = started.elapsed();
        if let Some(budget) = self.tick_budget_ms {
            warn_if_tick_budget_exceeded(self.tick, profile.total_time, budget);
        }
        self.profile = profile;
        Ok(())
    }

    /// Runs `ticks` steps, stopping at the first error.
    pub fn run(&mut self, ticks: u64) -> Result<()> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(())
    }

    fn halt(&mut self, err: Error) -> Error {
        if let Error::NonFinite { body, index } = err {
            log::error!(
                "{body} #{index} has a non-finite coordinate at tick {}; halting",
                self.tick
            );
            self.fault = Some((body, index));
        }
        err
    }

    fn find_non_finite(&self) -> Option<(BodyKind, usize)> {
        if let Some(i) = self.particles.iter().position(|p| !p.is_finite()) {
            return Some((BodyKind::Particle, i));
        }
        self.blocks
            .iter()
            .position(|b| !b.is_finite())
            .map(|i| (BodyKind::Block, i))
    }

    /// Updates the block damping coefficient; must lie in `[0, 1]`.
    pub fn set_friction(&mut self, value: f64) -> Result<()> {
        self.friction = Friction::new(value)?;
        Ok(())
    }

    pub fn friction(&self) -> f64 {
        self.friction.coefficient()
    }

    /// Enables or disables rayon for the integration phase.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    /// Warn through `log` whenever a tick takes longer than `budget_ms`.
    pub fn set_tick_budget(&mut self, budget_ms: Option<f64>) {
        self.tick_budget_ms = budget_ms;
    }

    /// Particles in index order. The iterator can be cloned to restart it.
    pub fn particles(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Blocks in index order. The iterator can be cloned to restart it.
    pub fn blocks(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn arena(&self) -> DVec2 {
        self.integrator.arena()
    }

    /// Seed the current population was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks completed since the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Timings and contact counts of the last completed tick.
    pub fn profile(&self) -> &StepProfiler {
        &self.profile
    }

    pub fn is_halted(&self) -> bool {
        self.fault.is_some()
    }

    /// Sum of `m * v` over every body.
    pub fn total_momentum(&self) -> DVec2 {
        self.particles.iter().map(Body::momentum).sum::<DVec2>()
            + self.blocks.iter().map(Body::momentum).sum::<DVec2>()
    }

    /// Sum of `m * |v|^2 / 2` over every body.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Body::kinetic_energy).sum::<f64>()
            + self.blocks.iter().map(Body::kinetic_energy).sum::<f64>()
    }
}
