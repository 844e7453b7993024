//! Simplified planetary longitudes.
//!
//! `λ = L0 + n·T`, reduced to [0, 360), plus one sine harmonic of that mean
//! longitude. This is neither a Keplerian solution nor a perturbation
//! theory: errors of several degrees are normal (the Mars term alone is
//! ±10.7 deg). The coefficients are kept as-is so that sign and rashi
//! placements stay stable across releases.

use graha_frames::normalize_360;
use graha_time::jd_to_centuries;

use crate::body::Body;
use crate::error::EphemerisError;
use crate::{ensure_finite, ensure_finite_jd};

/// Single-harmonic correction `amplitude · sin(harmonic · λ_mean)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    pub amplitude_deg: f64,
    pub harmonic: f64,
}

/// Mean orbital elements at J2000.0.
///
/// Only `mean_longitude_deg`, `mean_motion_deg_per_century` and the
/// perturbation feed the longitude; the shape elements are carried as
/// reference data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_longitude_deg: f64,
    pub mean_motion_deg_per_century: f64,
    pub perturbation: Perturbation,
}

impl OrbitalElements {
    /// Elements for one of the five planets, `None` for the Sun and Moon.
    pub const fn of(body: Body) -> Option<Self> {
        let (a, e, i, l0, n, amplitude_deg, harmonic) = match body {
            Body::Mercury => (0.387, 0.206, 7.0, 252.25, 149_472.67, 3.0, 2.0),
            Body::Venus => (0.723, 0.007, 3.4, 181.98, 58_517.82, 0.8, 3.0),
            Body::Mars => (1.524, 0.093, 1.85, 355.43, 19_140.30, 10.7, 1.0),
            Body::Jupiter => (5.203, 0.048, 1.3, 34.33, 3_034.91, 5.5, 1.0),
            Body::Saturn => (9.537, 0.054, 2.49, 50.08, 1_222.11, 6.4, 1.0),
            Body::Sun | Body::Moon => return None,
        };
        Some(Self {
            semi_major_axis_au: a,
            eccentricity: e,
            inclination_deg: i,
            mean_longitude_deg: l0,
            mean_motion_deg_per_century: n,
            perturbation: Perturbation {
                amplitude_deg,
                harmonic,
            },
        })
    }

    /// Mean longitude in degrees [0, 360) at `t` Julian centuries since J2000.0.
    pub fn mean_longitude_at(&self, t: f64) -> f64 {
        normalize_360(self.mean_longitude_deg + self.mean_motion_deg_per_century * t)
    }

    /// Perturbed longitude in degrees [0, 360).
    pub fn longitude_at(&self, t: f64) -> f64 {
        let mean = self.mean_longitude_at(t);
        let p = self.perturbation;
        normalize_360(mean + p.amplitude_deg * (p.harmonic * mean).to_radians().sin())
    }
}

/// Tropical ecliptic longitude of a planet in degrees [0, 360).
///
/// # Errors
/// [`EphemerisError::UnknownPlanet`] for the Sun or Moon,
/// [`EphemerisError::DomainOverflow`] for a non-finite `jd`.
pub fn planet_longitude_deg(jd: f64, planet: Body) -> Result<f64, EphemerisError> {
    let elements = OrbitalElements::of(planet)
        .ok_or_else(|| EphemerisError::UnknownPlanet(planet.name().to_string()))?;
    ensure_finite_jd(jd, "planetary")?;
    ensure_finite(elements.longitude_at(jd_to_centuries(jd)), "planetary")
}
