//! Degree normalization and DMS conversion.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can round tiny negative inputs up to exactly 360.0; that
/// case folds back to 0.0 so bucket lookups never see 360.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone). A
    /// seconds carry at the very end of a range can reach 30 or 360.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds [0.0, 59.995), may include fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Smallest seconds value that `{:05.2}` prints as 60.00.
const SECONDS_CARRY: f64 = 59.995;

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value. Seconds that would
/// display as 60.00 carry into the minutes (and minutes into the degrees).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let mut degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let mut minutes = remainder.floor() as u8;
    let mut seconds = (remainder - minutes as f64) * 60.0;
    if seconds >= SECONDS_CARRY {
        seconds = 0.0;
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            degrees += 1;
        }
    }
    Dms {
        degrees,
        minutes,
        seconds,
    }
}
