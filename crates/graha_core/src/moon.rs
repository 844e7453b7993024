//! Lunar longitude from a truncated Meeus periodic series.
//!
//! Fundamental arguments and the 34 largest longitude terms of Meeus,
//! *Astronomical Algorithms* (2nd ed.), Ch. 47, Table 47.A. The additive
//! A1/A2/A3 terms are omitted. A single-term nutation correction is applied
//! to the sum. Accuracy is a few hundredths of a degree.

use graha_frames::{normalize_360, nutation_longitude_correction_deg};
use graha_time::jd_to_centuries;

use crate::error::EphemerisError;
use crate::{ensure_finite, ensure_finite_jd};

/// Longitude series coefficients, in millionths of a degree.
///
/// Each row: `[nD, nM, nM', nF, coefficient]`. Terms whose `nM` is ±1 are
/// scaled by E, ±2 by E².
#[rustfmt::skip]
pub static LONGITUDE_TERMS: [[f64; 5]; 34] = [
    // nD    nM    nM'   nF    coefficient
    [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [ 2.0,  0.0,  0.0,  0.0,    658_314.0],
    [ 0.0,  0.0,  2.0,  0.0,    213_618.0],
    [ 0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [ 0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [ 2.0,  0.0, -2.0,  0.0,     58_793.0],
    [ 2.0, -1.0, -1.0,  0.0,     57_066.0],
    [ 2.0,  0.0,  1.0,  0.0,     53_322.0],
    [ 2.0, -1.0,  0.0,  0.0,     45_758.0],
    [ 0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [ 1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [ 0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [ 2.0,  0.0,  0.0, -2.0,     15_327.0],
    [ 0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [ 0.0,  0.0,  1.0, -2.0,     10_980.0],
    [ 4.0,  0.0, -1.0,  0.0,     10_675.0],
    [ 0.0,  0.0,  3.0,  0.0,     10_034.0],
    [ 4.0,  0.0, -2.0,  0.0,      8_548.0],
    [ 2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [ 2.0,  1.0,  0.0,  0.0,     -6_766.0],
    [ 1.0,  0.0, -1.0,  0.0,     -5_163.0],
    [ 1.0,  1.0,  0.0,  0.0,      4_987.0],
    [ 2.0, -1.0,  1.0,  0.0,      4_036.0],
    [ 2.0,  0.0,  2.0,  0.0,      3_994.0],
    [ 4.0,  0.0,  0.0,  0.0,      3_861.0],
    [ 2.0,  0.0, -3.0,  0.0,      3_665.0],
    [ 0.0,  1.0, -2.0,  0.0,     -2_689.0],
    [ 2.0,  0.0, -1.0,  2.0,     -2_602.0],
    [ 2.0, -1.0, -2.0,  0.0,      2_390.0],
    [ 1.0,  0.0,  1.0,  0.0,     -2_348.0],
    [ 2.0, -2.0,  0.0,  0.0,      2_236.0],
    [ 0.0,  1.0,  2.0,  0.0,     -2_120.0],
    [ 0.0,  2.0,  0.0,  0.0,     -2_069.0],
];

/// Fundamental lunar arguments in degrees, each reduced to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L'.
    pub mean_longitude: f64,
    /// Mean elongation of the Moon D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
    /// Moon's argument of latitude F.
    pub latitude_argument: f64,
}

/// Fundamental arguments at `t` Julian centuries since J2000.0.
pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    LunarArguments {
        mean_longitude: normalize_360(
            218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
        ),
        elongation: normalize_360(
            297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
        ),
        sun_anomaly: normalize_360(
            357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        ),
        moon_anomaly: normalize_360(
            134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
        ),
        latitude_argument: normalize_360(
            93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        ),
    }
}

/// Earth orbit eccentricity factor E applied to terms containing M.
pub fn eccentricity_factor(t: f64) -> f64 {
    1.0 - 0.002516 * t - 0.0000074 * t * t
}

/// Contribution of one table row, in millionths of a degree.
///
/// `d`, `m`, `mp`, `f` are in radians.
fn term_value(term: &[f64; 5], d: f64, m: f64, mp: f64, f: f64, e: f64) -> f64 {
    let angle = term[0] * d + term[1] * m + term[2] * mp + term[3] * f;
    let scale = match term[1].abs() as u8 {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };
    term[4] * scale * angle.sin()
}

/// Σl: the periodic longitude sum in millionths of a degree.
pub fn periodic_longitude_sum(args: &LunarArguments, e: f64) -> f64 {
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    LONGITUDE_TERMS
        .iter()
        .map(|term| term_value(term, d, m, mp, f, e))
        .sum()
}

/// Tropical ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_longitude_deg(jd: f64) -> Result<f64, EphemerisError> {
    ensure_finite_jd(jd, "lunar")?;
    let t = jd_to_centuries(jd);
    let args = lunar_arguments(t);
    let sum = periodic_longitude_sum(&args, eccentricity_factor(t));
    let lon = args.mean_longitude + sum / 1_000_000.0 + nutation_longitude_correction_deg(t);
    ensure_finite(normalize_360(lon), "lunar")
}
