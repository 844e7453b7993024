//! Civil (local wall-clock) date/time with its UTC offset.
//!
//! `CivilInstant` is the validated input to the engine. The Julian Day is
//! derived from it on demand and never cached.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::error::TimeError;
use crate::julian::julian_day;

/// Largest accepted UTC offset magnitude, in hours.
const MAX_OFFSET_HOURS: f64 = 24.0;

/// Civil date/time at minute resolution, observed at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CivilInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Hours east of UTC, may be fractional (e.g. 5.75 for Nepal).
    pub utc_offset_hours: f64,
}

impl CivilInstant {
    /// Build a civil instant, rejecting dates that do not exist in the
    /// proleptic Gregorian calendar.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidInstant("date does not exist in the calendar"));
        }
        if hour >= 24 {
            return Err(TimeError::InvalidInstant("hour must be in 0..24"));
        }
        if minute >= 60 {
            return Err(TimeError::InvalidInstant("minute must be in 0..60"));
        }
        validate_offset(utc_offset_hours)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours,
        })
    }

    /// Build from a chrono civil date/time. Seconds are dropped.
    pub fn from_naive(dt: NaiveDateTime, utc_offset_hours: f64) -> Result<Self, TimeError> {
        validate_offset(utc_offset_hours)?;
        Ok(Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            utc_offset_hours,
        })
    }

    /// Local hour of day as a decimal (12:30 → 12.5).
    pub fn hour_decimal(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Civil calendar date.
    pub fn date(&self) -> Result<NaiveDate, TimeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(TimeError::InvalidInstant("date does not exist in the calendar"))
    }

    /// Civil weekday of the local date.
    pub fn weekday(&self) -> Result<Weekday, TimeError> {
        Ok(self.date()?.weekday())
    }

    /// Julian Day (UTC) of this instant.
    pub fn julian_day(&self) -> Result<f64, TimeError> {
        julian_day(
            self.year,
            self.month,
            self.day,
            self.hour_decimal(),
            self.utc_offset_hours,
        )
    }
}

fn validate_offset(utc_offset_hours: f64) -> Result<(), TimeError> {
    if !utc_offset_hours.is_finite() {
        return Err(TimeError::InvalidInstant("UTC offset must be finite"));
    }
    if utc_offset_hours.abs() > MAX_OFFSET_HOURS {
        return Err(TimeError::InvalidInstant("UTC offset must lie within ±24 h"));
    }
    Ok(())
}

impl std::fmt::Display for CivilInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let total_minutes = (self.utc_offset_hours.abs() * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            sign,
            total_minutes / 60,
            total_minutes % 60
        )
    }
}
