//! Per-tick dynamics: integration with wall containment, and block friction.

pub mod friction;
pub mod integrator;

pub use friction::Friction;
pub use integrator::Integrator;
