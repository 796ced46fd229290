use glam::DVec2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{collision::walls::contain, core::Body};

/// Explicit one-tick integrator: every body moves by its velocity and is
/// then pushed back inside the arena.
///
/// Bodies are independent in this phase, so the parallel path produces the
/// same state as the sequential one.
#[derive(Debug, Clone)]
pub struct Integrator {
    arena: DVec2,
    parallel: bool,
}

impl Integrator {
    pub fn new(arena: DVec2) -> Self {
        Self {
            arena,
            parallel: false,
        }
    }

    pub fn arena(&self) -> DVec2 {
        self.arena
    }

    /// Requests the rayon path. Ignored when the `parallel` feature is off.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled && cfg!(feature = "parallel");
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Moves one body and contains it. Returns whether a wall was hit.
    #[inline]
    pub fn advance<B: Body>(&self, body: &mut B) -> bool {
        body.integrate();
        contain(body, self.arena)
    }

    /// Advances a whole collection; returns the number of wall contacts.
    pub fn step<B: Body + Send>(&self, bodies: &mut [B]) -> usize {
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return bodies
                    .par_iter_mut()
                    .map(|body| self.advance(body))
                    .filter(|&hit| hit)
                    .count();
            }
        }

        bodies
            .iter_mut()
            .map(|body| self.advance(body))
            .filter(|&hit| hit)
            .count()
    }
}
