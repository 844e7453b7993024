//! Shared helpers for the equal-width ecliptic divisions.

use graha_core::EphemerisError;
use graha_frames::normalize_360;

use crate::error::VedicError;

/// Pass a finite angle through; NaN or infinity is a `DomainOverflow`
/// tagged with `what`.
pub(crate) fn require_finite(value: f64, what: &'static str) -> Result<f64, VedicError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::DomainOverflow(what).into())
    }
}

/// Split a longitude into `(index, offset)` for `count` equal buckets of
/// `width` degrees starting at 0°. The index is clamped to `count - 1` so a
/// value that rounds up to 360.0 stays in the last bucket.
pub(crate) fn bucket(lon_deg: f64, width: f64, count: u8) -> (u8, f64) {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / width).floor() as u8).min(count - 1);
    (idx, lon - idx as f64 * width)
}

/// Moon − Sun elongation in degrees [0, 360).
pub fn elongation_deg(sun_lon_deg: f64, moon_lon_deg: f64) -> f64 {
    normalize_360(moon_lon_deg - sun_lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elongation_wraps() {
        assert!((elongation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((elongation_deg(10.0, 350.0) - 340.0).abs() < 1e-12);
        assert_eq!(elongation_deg(123.0, 123.0), 0.0);
    }

    #[test]
    fn first_and_last_bucket() {
        assert_eq!(bucket(0.0, 30.0, 12), (0, 0.0));
        let (idx, off) = bucket(359.999, 30.0, 12);
        assert_eq!(idx, 11);
        assert!((off - 29.999).abs() < 1e-9);
    }

    #[test]
    fn negative_wraps() {
        let (idx, off) = bucket(-15.0, 30.0, 12);
        assert_eq!(idx, 11);
        assert!((off - 15.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_is_domain_overflow() {
        assert_eq!(require_finite(12.5, "angle"), Ok(12.5));
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                require_finite(bad, "angle"),
                Err(VedicError::Ephemeris(EphemerisError::DomainOverflow("angle")))
            ));
        }
    }

    #[test]
    fn exact_boundary_starts_next_bucket() {
        assert_eq!(bucket(45.0, 45.0, 8), (1, 0.0));
        assert_eq!(bucket(720.0, 45.0, 8), (0, 0.0));
    }
}
