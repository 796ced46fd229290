//! Body records: gas particles, blocks, and the shared kinematic trait.

pub mod block;
pub mod body;
pub mod particle;
pub mod types;

pub use block::Block;
pub use body::Body;
pub use particle::Particle;
pub use types::{Aabb, BodyKind, Color};
