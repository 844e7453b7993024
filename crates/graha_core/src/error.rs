//! Error types for longitude computation.

use thiserror::Error;

/// Errors from the Sun, Moon and planet longitude models.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Planet identifier outside Mercury, Venus, Mars, Jupiter, Saturn.
    #[error("unknown planet: {0:?}")]
    UnknownPlanet(String),
    /// NaN or infinity entered or left a computation.
    #[error("non-finite value in {0} computation")]
    DomainOverflow(&'static str),
}
