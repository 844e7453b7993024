//! Julian Day computation from civil date/time.
//!
//! Gregorian calendar → JD using the standard Meeus formulation
//! (*Astronomical Algorithms*, 2nd ed., Ch. 7). The civil hour is shifted
//! to UTC first, rolling the day by at most one in either direction.

use log::trace;

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1950-01-01 00:00 UTC, the ayanamsha reference epoch.
pub const J1950_JD: f64 = 2_433_282.5;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Day for a civil date and decimal hour observed at `utc_offset_hours`.
///
/// The offset is subtracted from `hour`; a result below 0 or at/above 24
/// moves the day back or forward by exactly one. Calendar legality of
/// `month`/`day` is not checked here: an out-of-range day simply continues
/// the day count (day 0 is the last day of the previous month). Use
/// [`crate::CivilInstant`] when the fields come from untrusted input.
///
/// # Errors
/// [`TimeError::InvalidInstant`] if `hour` or the offset is non-finite, or
/// the UTC hour still lies outside [0, 24) after one rollover.
pub fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
    utc_offset_hours: f64,
) -> Result<f64, TimeError> {
    if !hour.is_finite() {
        return Err(TimeError::InvalidInstant("hour must be finite"));
    }
    if !utc_offset_hours.is_finite() {
        return Err(TimeError::InvalidInstant("UTC offset must be finite"));
    }

    let mut utc_hour = hour - utc_offset_hours;
    let day_in = day;
    let mut day = day as f64;
    if utc_hour < 0.0 {
        utc_hour += 24.0;
        day -= 1.0;
    } else if utc_hour >= 24.0 {
        utc_hour -= 24.0;
        day += 1.0;
    }
    if day != f64::from(day_in) {
        trace!("offset {utc_offset_hours}h rolled {year}-{month:02}-{day_in:02} to day {day}");
    }
    if !(0.0..24.0).contains(&utc_hour) {
        return Err(TimeError::InvalidInstant(
            "UTC hour outside [0, 24) after day rollover",
        ));
    }

    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    // Gregorian century correction
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    Ok((365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + utc_hour / 24.0
        + b
        - 1524.5)
}
