//! Error types for civil time conversion.

use thiserror::Error;

/// Errors from civil instant construction, Julian Day conversion, or
/// UTC offset lookup.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Civil fields or UTC offset cannot be turned into a valid UTC instant.
    #[error("invalid instant: {0}")]
    InvalidInstant(&'static str),
    /// Country name is not present in the UTC offset table.
    #[error("unknown country: {0:?}")]
    UnknownCountry(String),
}
