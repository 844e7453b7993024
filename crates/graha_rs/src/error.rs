//! Error type for the snapshot API.

use graha_core::EphemerisError;
use graha_time::TimeError;
use graha_vedic_base::VedicError;
use thiserror::Error;

/// Any failure while building a [`crate::Snapshot`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GrahaError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
}
