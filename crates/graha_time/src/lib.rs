//! Civil time handling for the graha engine.
//!
//! This crate provides:
//! - Civil date/time + UTC offset → Julian Day conversion
//! - Julian centuries since J2000.0
//! - A `CivilInstant` type validated at construction time
//! - The static country → UTC offset table used by callers that only know
//!   a country name

pub mod civil;
pub mod error;
pub mod julian;
pub mod zone;

pub use civil::CivilInstant;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_JULIAN_YEAR, J1950_JD, J2000_JD, jd_to_centuries, julian_day,
};
pub use zone::{ALL_COUNTRY_OFFSETS, ZoneSpec, utc_offset_for_country};
