//! Mean lunar node argument and the single-term nutation correction.
//!
//! Ω = 125.04452 − 1934.136261·T (Meeus, *Astronomical Algorithms*,
//! Ch. 22, truncated to the linear term). The nutation in longitude is
//! reduced to its dominant 18.6-year term, −17.2″·sin Ω ≈ −0.00478°·sin Ω.

/// Amplitude of the dominant nutation-in-longitude term, in degrees.
pub const NUTATION_LONGITUDE_AMPLITUDE_DEG: f64 = 0.00478;

/// Mean longitude of the Moon's ascending node in degrees, not normalized.
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_node_longitude_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t
}

/// Nutation correction in ecliptic longitude, in degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn nutation_longitude_correction_deg(t: f64) -> f64 {
    -NUTATION_LONGITUDE_AMPLITUDE_DEG * mean_node_longitude_deg(t).to_radians().sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omega_at_j2000() {
        assert_eq!(mean_node_longitude_deg(0.0), 125.04452);
    }

    #[test]
    fn omega_regresses() {
        assert!(mean_node_longitude_deg(0.01) < mean_node_longitude_deg(0.0));
    }

    #[test]
    fn correction_at_j2000() {
        // -0.00478 * sin(125.04452 deg) = -0.0039134...
        let c = nutation_longitude_correction_deg(0.0);
        assert!((c - (-0.003_913_4)).abs() < 1e-6, "c = {c}");
    }

    #[test]
    fn correction_bounded() {
        for i in -50..=50 {
            let t = i as f64 * 0.1;
            let c = nutation_longitude_correction_deg(t);
            assert!(c.abs() <= NUTATION_LONGITUDE_AMPLITUDE_DEG + 1e-15, "t={t}: {c}");
        }
    }
}
