//! Global configuration constants and the scene description consumed by
//! [`World::reset`](crate::world::World::reset).

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::dynamics::Friction;
use crate::error::{Error, Result};

/// Default arena width in world units.
pub const DEFAULT_ARENA_WIDTH: u32 = 1900;

/// Default arena height in world units.
pub const DEFAULT_ARENA_HEIGHT: u32 = 1340;

/// Radius of a gas particle.
pub const DEFAULT_PARTICLE_RADIUS: f64 = 4.0;

/// Mass of a gas particle.
pub const DEFAULT_PARTICLE_MASS: f64 = 1.0;

/// Squared closest-point distance below which a particle-block contact is ignored.
pub const CONTACT_EPSILON: f64 = 0.1;

pub const DEFAULT_PARTICLE_COUNT: usize = 350;
pub const DEFAULT_INITIAL_SPEED_BOUND: f64 = 5.0;
pub const DEFAULT_BLOCK_COUNT: usize = 1;
pub const DEFAULT_BLOCK_WIDTH: f64 = 250.0;
pub const DEFAULT_BLOCK_HEIGHT: f64 = 500.0;
pub const DEFAULT_BLOCK_GAP: f64 = 40.0;
pub const DEFAULT_BLOCK_MASS: f64 = 600.0;
pub const DEFAULT_FRICTION: Friction = Friction::NONE;

/// Green channel range used to tint particles.
pub const PARTICLE_GREEN_RANGE: std::ops::Range<u8> = 50..200;

/// Everything needed to (re)build a world.
///
/// Missing fields fall back to the defaults above when deserialised, so a
/// scene file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub block_count: usize,
    /// Particle velocity components are drawn from `[-bound, bound]`.
    pub initial_speed_bound: f64,
    pub block_width: f64,
    pub block_height: f64,
    /// Horizontal spacing between neighbouring blocks in the row.
    pub block_gap: f64,
    pub block_mass: f64,
    pub arena_width: u32,
    pub arena_height: u32,
    pub particle_radius: f64,
    pub particle_mass: f64,
    /// Block damping; out-of-range values are rejected while parsing.
    pub friction: Friction,
    /// RNG seed; `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            block_count: DEFAULT_BLOCK_COUNT,
            initial_speed_bound: DEFAULT_INITIAL_SPEED_BOUND,
            block_width: DEFAULT_BLOCK_WIDTH,
            block_height: DEFAULT_BLOCK_HEIGHT,
            block_gap: DEFAULT_BLOCK_GAP,
            block_mass: DEFAULT_BLOCK_MASS,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            particle_mass: DEFAULT_PARTICLE_MASS,
            friction: DEFAULT_FRICTION,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Parses a TOML scene description and validates it.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SceneConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn with_particles(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_blocks(mut self, count: usize) -> Self {
        self.block_count = count;
        self
    }

    pub fn with_block_size(mut self, width: f64, height: f64) -> Self {
        self.block_width = width;
        self.block_height = height;
        self
    }

    pub fn with_block_gap(mut self, gap: f64) -> Self {
        self.block_gap = gap;
        self
    }

    pub fn with_block_mass(mut self, mass: f64) -> Self {
        self.block_mass = mass;
        self
    }

    pub fn with_arena(mut self, width: u32, height: u32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    pub fn with_speed_bound(mut self, bound: f64) -> Self {
        self.initial_speed_bound = bound;
        self
    }

    pub fn with_friction(mut self, friction: Friction) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn arena(&self) -> DVec2 {
        DVec2::new(self.arena_width as f64, self.arena_height as f64)
    }

    /// Total width of the block row including gaps.
    pub fn block_row_width(&self) -> f64 {
        if self.block_count == 0 {
            return 0.0;
        }
        let n = self.block_count as f64;
        n * self.block_width + (n - 1.0) * self.block_gap
    }

    /// Rejects configurations that would produce degenerate physics.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f64) -> Result<()> {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
            Ok(())
        }

        if self.arena_width == 0 || self.arena_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "arena must be non-empty, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        positive("initial_speed_bound", self.initial_speed_bound)?;
        if !(2.0 * self.initial_speed_bound).is_finite() {
            return Err(Error::InvalidConfig(format!(
                "initial_speed_bound {} is too large to sample from",
                self.initial_speed_bound
            )));
        }
        positive("particle_radius", self.particle_radius)?;
        positive("particle_mass", self.particle_mass)?;
        positive("block_width", self.block_width)?;
        positive("block_height", self.block_height)?;
        positive("block_mass", self.block_mass)?;
        if !self.block_gap.is_finite() || self.block_gap < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "block_gap must be finite and >= 0, got {}",
                self.block_gap
            )));
        }

        let arena = self.arena();
        if 2.0 * self.particle_radius > arena.min_element() {
            return Err(Error::InvalidConfig(format!(
                "particle diameter {} does not fit the {}x{} arena",
                2.0 * self.particle_radius,
                self.arena_width,
                self.arena_height
            )));
        }
        if self.block_count > 0 {
            if self.block_height > arena.y {
                return Err(Error::InvalidConfig(format!(
                    "block_height {} exceeds arena height {}",
                    self.block_height, self.arena_height
                )));
            }
            let row = self.block_row_width();
            if row > arena.x {
                return Err(Error::InvalidConfig(format!(
                    "row of {} blocks is {row} wide, arena is {}",
                    self.block_count, self.arena_width
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() -> Result<()> {
        SceneConfig::default().validate()
    }

    #[test]
    fn non_positive_mass_rejected() {
        let err = SceneConfig::default()
            .with_block_mass(0.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("block_mass"));
    }

    #[test]
    fn oversized_row_rejected() {
        let err = SceneConfig::default()
            .with_blocks(10)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("row of 10 blocks"));
    }

    #[test]
    fn friction_outside_unit_interval_rejected_while_parsing() -> Result<()> {
        let err = SceneConfig::from_toml_str("friction = 1.2").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
        assert!(err.to_string().contains("friction must be within [0, 1]"));

        let config = SceneConfig::from_toml_str("friction = 1.0")?;
        assert_eq!(config.friction.coefficient(), 1.0);
        Ok(())
    }

    #[test]
    fn friction_round_trips_as_a_plain_number() -> Result<()> {
        let config = SceneConfig::default().with_friction(Friction::new(0.25)?);
        let text = toml::to_string(&config).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        assert!(text.contains("friction = 0.25"));
        assert_eq!(SceneConfig::from_toml_str(&text)?.friction, config.friction);
        Ok(())
    }

    #[test]
    fn speed_bound_too_large_to_sample_rejected() {
        let err = SceneConfig::default()
            .with_speed_bound(1.0e308)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg.contains("initial_speed_bound")));
        assert!(SceneConfig::default().with_speed_bound(1.0e300).validate().is_ok());
    }

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("brownian-{}-{name}", std::process::id()))
    }

    #[test]
    fn load_reads_scene_file() -> Result<()> {
        let path = scratch_path("scene.toml");
        std::fs::write(&path, "particle_count = 12
block_count = 0
seed = 5
")?;
        let loaded = SceneConfig::load(&path);
        std::fs::remove_file(&path)?;

        let config = loaded?;
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.block_count, 0);
        assert_eq!(config.seed, Some(5));
        Ok(())
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SceneConfig::load(scratch_path("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound));
        assert!(!err.is_fatal());
    }

    #[test]
    fn row_width_counts_gaps() {
        let config = SceneConfig::default()
            .with_blocks(3)
            .with_block_size(100.0, 50.0)
            .with_block_gap(10.0);
        assert_eq!(config.block_row_width(), 320.0);
        assert_eq!(SceneConfig::default().with_blocks(0).block_row_width(), 0.0);
    }

    #[test]
    fn partial_toml_uses_defaults() -> Result<()> {
        let config = SceneConfig::from_toml_str(
            r#"
            particle_count = 1200
            block_count = 2
            friction = 0.05
            seed = 42
            "#,
        )?;
        assert_eq!(config.particle_count, 1200);
        assert_eq!(config.block_count, 2);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.block_mass, DEFAULT_BLOCK_MASS);
        assert_eq!(config.arena_width, DEFAULT_ARENA_WIDTH);
        Ok(())
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SceneConfig::from_toml_str("particle_count = \"many\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn invalid_toml_values_fail_validation() {
        let err = SceneConfig::from_toml_str("block_width = -3.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
