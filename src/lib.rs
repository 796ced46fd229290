//! Brownian – a 2D collision engine for a particle gas pushing heavy blocks.
//!
//! Thousands of small discs bounce elastically off each other, the arena
//! walls, and a handful of axis-aligned blocks. The blocks collect the
//! momentum of the gas and drift the way a pollen grain does under a
//! microscope. The crate owns the physics only; a renderer drives it by
//! calling [`World::step`] once per frame and reading bodies back through
//! [`World::particles`] and [`World::blocks`].
//!
//! ```no_run
//! use brownian::{SceneConfig, World};
//!
//! # fn main() -> brownian::Result<()> {
//! let mut world = World::new(&SceneConfig::default().with_seed(7))?;
//! for _ in 0..600 {
//!     world.step()?;
//! }
//! for block in world.blocks() {
//!     println!("block at {:?}", block.position);
//! }
//! # Ok(())
//! # }
//! ```

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use collision::{Axis, BlockContact};
pub use config::SceneConfig;
pub use core::{Aabb, Block, Body, BodyKind, Color, Particle};
pub use dynamics::{Friction, Integrator};
pub use error::{Error, Result};
pub use utils::profiling::StepProfiler;
pub use world::{Scene, World, WorldBuilder};
