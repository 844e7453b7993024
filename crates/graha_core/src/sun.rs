//! Low-precision solar longitude.
//!
//! Geometric mean longitude plus the equation of center, from Meeus,
//! *Astronomical Algorithms* (2nd ed.), Ch. 25. Accuracy about 0.01 deg.
//! No aberration or nutation is applied.

use graha_frames::normalize_360;
use graha_time::jd_to_centuries;

use crate::error::EphemerisError;
use crate::{ensure_finite, ensure_finite_jd};

/// Geometric mean longitude of the Sun, L0, in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.46646 + 36000.76983 * t + 0.0003032 * t * t)
}

/// Mean anomaly of the Sun, M, in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.52911 + 35999.05029 * t - 0.0001537 * t * t)
}

/// Equation of center C in degrees for mean anomaly `m_deg`.
pub fn sun_equation_of_center_deg(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// Tropical ecliptic longitude of the Sun in degrees [0, 360).
pub fn sun_longitude_deg(jd: f64) -> Result<f64, EphemerisError> {
    ensure_finite_jd(jd, "solar")?;
    let t = jd_to_centuries(jd);
    let l0 = sun_mean_longitude_deg(t);
    let c = sun_equation_of_center_deg(t, sun_mean_anomaly_deg(t));
    ensure_finite(normalize_360(l0 + c), "solar")
}
