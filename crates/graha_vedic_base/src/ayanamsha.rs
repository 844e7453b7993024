//! Ayanamsha and the tropical/sidereal frame conversion.
//!
//! A single linear precession model anchored at 1950-01-01 00:00 UTC:
//!
//! ```text
//! ayanamsha(JD) = 23.25° + years_since_1950 × 50.29″/yr + Δψ(T)
//! ```
//!
//! where Δψ is the one-term nutation-in-longitude correction also applied
//! to the Moon. Sidereal longitude is `(tropical − ayanamsha) mod 360`.

use graha_core::EphemerisError;
use graha_frames::{normalize_360, nutation_longitude_correction_deg};
use graha_time::{DAYS_PER_JULIAN_YEAR, J1950_JD, jd_to_centuries};
use log::trace;

use crate::error::VedicError;

/// Ayanamsha at the 1950-01-01 reference epoch, in degrees.
pub const AYANAMSHA_AT_J1950_DEG: f64 = 23.25;

/// General precession rate in arcseconds per Julian year.
pub const PRECESSION_RATE_ARCSEC_PER_YEAR: f64 = 50.29;

/// Ayanamsha without the nutation term, in degrees.
pub fn mean_ayanamsha_deg(jd: f64) -> f64 {
    let years = (jd - J1950_JD) / DAYS_PER_JULIAN_YEAR;
    AYANAMSHA_AT_J1950_DEG + years * PRECESSION_RATE_ARCSEC_PER_YEAR / 3600.0
}

/// Ayanamsha in degrees at Julian Day `jd`, nutation included.
///
/// The value is not reduced modulo 360; within any realistic date range it
/// stays well inside (0, 360).
///
/// # Errors
/// `DomainOverflow` for a non-finite JD.
pub fn ayanamsha_deg(jd: f64) -> Result<f64, VedicError> {
    if !jd.is_finite() {
        return Err(EphemerisError::DomainOverflow("ayanamsha").into());
    }
    let mean = mean_ayanamsha_deg(jd);
    let nutation = nutation_longitude_correction_deg(jd_to_centuries(jd));
    trace!("ayanamsha jd={jd:.6} mean={mean:.6} nutation={nutation:+.6}");
    Ok(mean + nutation)
}

/// Sidereal longitude for a tropical longitude and a known ayanamsha.
pub fn sidereal_from_tropical(tropical_deg: f64, ayanamsha: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsha)
}

/// Tropical longitude for a sidereal longitude and a known ayanamsha.
/// Exact inverse of [`sidereal_from_tropical`] modulo 360.
pub fn tropical_from_sidereal(sidereal_deg: f64, ayanamsha: f64) -> f64 {
    normalize_360(sidereal_deg + ayanamsha)
}

/// Tropical → sidereal at `jd`.
pub fn tropical_to_sidereal(tropical_deg: f64, jd: f64) -> Result<f64, VedicError> {
    Ok(sidereal_from_tropical(tropical_deg, ayanamsha_deg(jd)?))
}

/// Sidereal → tropical at `jd`.
pub fn sidereal_to_tropical(sidereal_deg: f64, jd: f64) -> Result<f64, VedicError> {
    Ok(tropical_from_sidereal(sidereal_deg, ayanamsha_deg(jd)?))
}
