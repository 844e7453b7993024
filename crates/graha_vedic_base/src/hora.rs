//! Chaldean planetary hours.
//!
//! Each weekday is ruled by one of the seven classical grahas. The civil
//! day is split into a fixed daytime half (06:00-18:00) and nighttime half
//! (18:00-06:00) of 12 one-hour slots each; slot 0 at 06:00 belongs to the
//! day ruler and each following slot steps once through the Chaldean order.
//! Sunrise is not computed: the split is purely clock-based.

use chrono::Weekday;
use graha_time::TimeError;

use crate::error::VedicError;
use crate::graha::Graha;

/// Day rulers, Monday first.
pub const WEEKDAY_RULERS: [Graha; 7] = [
    Graha::Chandra,
    Graha::Mangal,
    Graha::Budha,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Surya,
];

/// Chaldean order, slowest to fastest apparent motion.
pub const CHALDEAN_ORDER: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Budha,
    Graha::Chandra,
];

/// Planetary hour result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlanetaryHourInfo {
    /// Ruler of the current hour.
    pub ruler: Graha,
    /// Ruler of the weekday.
    pub day_ruler: Graha,
    /// Slot since 06:00: 0-11 daytime, 12-23 nighttime.
    pub hour_index: u8,
}

/// Ruler of a weekday.
pub fn day_ruler(weekday: Weekday) -> Graha {
    WEEKDAY_RULERS[weekday.num_days_from_monday() as usize]
}

/// Position of each day ruler in [`CHALDEAN_ORDER`], Monday first.
const WEEKDAY_CHALDEAN_START: [usize; 7] = [6, 2, 5, 1, 4, 0, 3];

/// Slot for a civil hour: `hour − 6` in daytime, `(hour − 18) mod 12 + 12`
/// at night.
pub fn hour_slot(hour: u32) -> Result<u8, VedicError> {
    if hour >= 24 {
        return Err(TimeError::InvalidInstant("hour must be in 0..24").into());
    }
    let h = hour as i32;
    let slot = if (6..18).contains(&h) {
        h - 6
    } else {
        (h - 18).rem_euclid(12) + 12
    };
    Ok(slot as u8)
}

/// Planetary hour for a civil weekday and hour of day (0-23).
///
/// # Errors
/// [`VedicError::Time`] if `hour` is 24 or more.
pub fn planetary_hour(weekday: Weekday, hour: u32) -> Result<PlanetaryHourInfo, VedicError> {
    let hour_index = hour_slot(hour)?;
    let day = weekday.num_days_from_monday() as usize;
    let day_ruler = WEEKDAY_RULERS[day];
    let start = WEEKDAY_CHALDEAN_START[day];
    let ruler = CHALDEAN_ORDER[(start + hour_index as usize) % 7];
    Ok(PlanetaryHourInfo {
        ruler,
        day_ruler,
        hour_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_sunrise_hour_is_sun() {
        let h = planetary_hour(Weekday::Sun, 6).unwrap();
        assert_eq!(h.day_ruler, Graha::Surya);
        assert_eq!(h.ruler, Graha::Surya);
        assert_eq!(h.hour_index, 0);
    }

    #[test]
    fn every_day_starts_with_its_ruler() {
        let mut wd = Weekday::Mon;
        for ruler in WEEKDAY_RULERS {
            let h = planetary_hour(wd, 6).unwrap();
            assert_eq!(h.ruler, ruler, "{wd}");
            wd = wd.succ();
        }
    }

    #[test]
    fn chaldean_start_table_matches_rulers() {
        for (day, ruler) in WEEKDAY_RULERS.iter().enumerate() {
            assert_eq!(CHALDEAN_ORDER[WEEKDAY_CHALDEAN_START[day]], *ruler);
        }
    }

    #[test]
    fn sunday_second_hour_is_venus() {
        assert_eq!(planetary_hour(Weekday::Sun, 7).unwrap().ruler, Graha::Shukra);
        assert_eq!(planetary_hour(Weekday::Sun, 8).unwrap().ruler, Graha::Budha);
    }

    #[test]
    fn slots() {
        assert_eq!(hour_slot(6).unwrap(), 0);
        assert_eq!(hour_slot(17).unwrap(), 11);
        assert_eq!(hour_slot(18).unwrap(), 12);
        assert_eq!(hour_slot(23).unwrap(), 17);
        assert_eq!(hour_slot(0).unwrap(), 18);
        assert_eq!(hour_slot(5).unwrap(), 23);
    }

    #[test]
    fn all_slots_distinct() {
        let mut seen = [false; 24];
        for h in 0..24 {
            let s = hour_slot(h).unwrap() as usize;
            assert!(!seen[s], "slot {s} repeated");
            seen[s] = true;
        }
    }

    #[test]
    fn saturday_night() {
        // Saturn starts at 0; slot 12 at 18:00 lands on (0 + 12) % 7 = 5.
        let h = planetary_hour(Weekday::Sat, 18).unwrap();
        assert_eq!(h.day_ruler, Graha::Shani);
        assert_eq!(h.ruler, Graha::Budha);
    }

    #[test]
    fn hour_out_of_range() {
        assert!(matches!(
            planetary_hour(Weekday::Mon, 24),
            Err(VedicError::Time(TimeError::InvalidInstant(_)))
        ));
    }
}
