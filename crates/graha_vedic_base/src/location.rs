//! Observer location.

use crate::error::VedicError;

/// Geographic location of the observer.
///
/// The longitude models are geocentric, so the location does not change any
/// computed angle. It is validated and carried through to results for the
/// caller's records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    ///
    /// # Errors
    /// [`VedicError::InvalidLocation`] for non-finite or out-of-range input.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid() {
        let loc = GeoLocation::new(28.6139, 77.209).unwrap();
        assert_eq!(loc.latitude_deg, 28.6139);
        assert!(GeoLocation::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            GeoLocation::new(91.0, 0.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(GeoLocation::new(0.0, -180.5).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }
}
