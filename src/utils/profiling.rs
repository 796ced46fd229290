use std::time::{Duration, Instant};

use super::logging::{trace_phase, Phase};

/// Timing and contact counts gathered over a single tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepProfiler {
    pub integrate_time: Duration,
    pub particle_pairs_time: Duration,
    pub particle_block_time: Duration,
    pub block_pairs_time: Duration,
    pub friction_time: Duration,
    pub total_time: Duration,

    pub particle_count: usize,
    pub block_count: usize,
    pub particle_contacts: usize,
    pub particle_block_contacts: usize,
    pub block_contacts: usize,
}

impl StepProfiler {
    pub fn contact_count(&self) -> usize {
        self.particle_contacts + self.particle_block_contacts + self.block_contacts
    }

    /// Time spent in `phase` during the tick.
    pub fn phase_time(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Integrate => self.integrate_time,
            Phase::ParticlePairs => self.particle_pairs_time,
            Phase::ParticleBlock => self.particle_block_time,
            Phase::BlockPairs => self.block_pairs_time,
            Phase::Friction => self.friction_time,
        }
    }

    /// Logs the profile at `info` level.
    pub fn report(&self) {
        let total_us = self.total_time.as_micros() as f64;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "particles: {}, blocks: {}, contacts: {} (pp {}, pb {}, bb {})",
            self.particle_count,
            self.block_count,
            self.contact_count(),
            self.particle_contacts,
            self.particle_block_contacts,
            self.block_contacts
        );
        let shares: Vec<String> = Phase::ALL
            .iter()
            .map(|&phase| {
                let share = self.phase_time(phase).as_micros() as f64 / total_us * 100.0;
                format!("{phase} {share:.1}%")
            })
            .collect();
        log::info!(
            "tick {:.2} ms | {}",
            self.total_time.as_secs_f64() * 1000.0,
            shares.join(" | ")
        );
    }
}

/// Adds the lifetime of the guard to `output` and traces it under `phase`.
pub struct PhaseTimer<'a> {
    phase: Phase,
    tick: u64,
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn new(phase: Phase, tick: u64, output: &'a mut Duration) -> Self {
        Self {
            phase,
            tick,
            start: Instant::now(),
            output,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        *self.output += elapsed;
        trace_phase(self.tick, self.phase, elapsed);
    }
}
