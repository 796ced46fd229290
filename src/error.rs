use thiserror::Error;

use crate::core::BodyKind;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation engine.
///
/// Only [`Error::InvalidConfig`], [`Error::ConfigParse`] and [`Error::Io`] are
/// recoverable. [`Error::NonFinite`] means the resolver produced a corrupted
/// state; the world refuses to step again until it is reset.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected scene configuration or runtime parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A body coordinate became NaN or infinite during a tick.
    #[error("non-finite coordinate on {body} #{index}; simulation halted")]
    NonFinite { body: BodyKind, index: usize },

    /// Malformed TOML scene description.
    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),

    /// Failure reading a scene file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error leaves the world in an unusable state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::NonFinite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_names_the_field() {
        let e = Error::InvalidConfig("block_mass must be finite and > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("block_mass"));
        assert!(!e.is_fatal());
    }

    #[test]
    fn non_finite_is_fatal() {
        let e = Error::NonFinite {
            body: BodyKind::Particle,
            index: 3,
        };
        assert!(e.is_fatal());
        assert!(e.to_string().contains("particle #3"));
    }
}
