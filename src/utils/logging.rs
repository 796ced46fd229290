use std::fmt;
use std::time::Duration;

use log::{log_enabled, trace, warn, Level};

/// Stages of a tick, in the order [`World::step`](crate::World::step) runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Integrate,
    ParticlePairs,
    ParticleBlock,
    BlockPairs,
    Friction,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Integrate,
        Phase::ParticlePairs,
        Phase::ParticleBlock,
        Phase::BlockPairs,
        Phase::Friction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Integrate => "integrate",
            Phase::ParticlePairs => "particle pairs",
            Phase::ParticleBlock => "particle-block",
            Phase::BlockPairs => "block pairs",
            Phase::Friction => "friction",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Traces the wall time one phase of `tick` took.
pub fn trace_phase(tick: u64, phase: Phase, elapsed: Duration) {
    if log_enabled!(Level::Trace) {
        trace!("tick {tick} {phase}: {} µs", elapsed.as_micros());
    }
}

/// Warns when a tick took longer than `budget_ms`. Returns whether it did.
pub fn warn_if_tick_budget_exceeded(tick: u64, duration: Duration, budget_ms: f64) -> bool {
    let elapsed_ms = duration.as_secs_f64() * 1000.0;
    if elapsed_ms <= budget_ms {
        return false;
    }
    warn!("tick {tick} took {elapsed_ms:.2} ms, budget is {budget_ms:.2} ms");
    true
}
