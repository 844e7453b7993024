//! Tropical ecliptic longitudes of the Sun, Moon and the five naked-eye
//! planets.
//!
//! - [`sun`]: mean longitude + equation of center (Meeus Ch. 25, low precision)
//! - [`moon`]: truncated Meeus Ch. 47 periodic series (34 longitude terms)
//!   plus a single-term nutation correction
//! - [`planets`]: mean motion plus one perturbation harmonic per planet
//!
//! The planetary model is a coarse approximation, good to a few degrees.
//! It is meant for sign/rashi-level calendar work, not for precision
//! ephemerides.

pub mod body;
pub mod error;
pub mod moon;
pub mod planets;
pub mod sun;

pub use body::{ALL_BODIES, ALL_PLANETS, Body};
pub use error::EphemerisError;
pub use moon::{
    LONGITUDE_TERMS, LunarArguments, eccentricity_factor, lunar_arguments, moon_longitude_deg,
    periodic_longitude_sum,
};
pub use planets::{OrbitalElements, Perturbation, planet_longitude_deg};
pub use sun::{sun_equation_of_center_deg, sun_longitude_deg, sun_mean_anomaly_deg, sun_mean_longitude_deg};

/// Tropical ecliptic longitude in degrees [0, 360) for any supported body.
pub fn tropical_longitude_deg(body: Body, jd: f64) -> Result<f64, EphemerisError> {
    match body {
        Body::Sun => sun_longitude_deg(jd),
        Body::Moon => moon_longitude_deg(jd),
        _ => planet_longitude_deg(jd, body),
    }
}

/// Reject a non-finite Julian Day before any trigonometry runs.
pub(crate) fn ensure_finite_jd(jd: f64, context: &'static str) -> Result<(), EphemerisError> {
    if jd.is_finite() {
        Ok(())
    } else {
        Err(EphemerisError::DomainOverflow(context))
    }
}

/// Reject a non-finite result.
pub(crate) fn ensure_finite(value: f64, context: &'static str) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::DomainOverflow(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_direct_calls() {
        let jd = 2_460_000.5;
        assert_eq!(
            tropical_longitude_deg(Body::Sun, jd).unwrap(),
            sun_longitude_deg(jd).unwrap()
        );
        assert_eq!(
            tropical_longitude_deg(Body::Moon, jd).unwrap(),
            moon_longitude_deg(jd).unwrap()
        );
        assert_eq!(
            tropical_longitude_deg(Body::Mars, jd).unwrap(),
            planet_longitude_deg(jd, Body::Mars).unwrap()
        );
    }

    #[test]
    fn all_bodies_in_range() {
        for &body in &ALL_BODIES {
            for i in -20..=20 {
                let jd = 2_451_545.0 + i as f64 * 1234.567;
                let lon = tropical_longitude_deg(body, jd).unwrap();
                assert!(
                    (0.0..360.0).contains(&lon),
                    "{body:?} at jd {jd}: {lon} out of range"
                );
            }
        }
    }

    #[test]
    fn non_finite_jd_is_domain_overflow() {
        for &body in &ALL_BODIES {
            assert!(matches!(
                tropical_longitude_deg(body, f64::NAN),
                Err(EphemerisError::DomainOverflow(_))
            ));
            assert!(matches!(
                tropical_longitude_deg(body, f64::INFINITY),
                Err(EphemerisError::DomainOverflow(_))
            ));
        }
    }
}
