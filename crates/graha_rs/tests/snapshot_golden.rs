//! End-to-end tests through `positions_for`.

use chrono::{NaiveDate, NaiveDateTime};
use graha_rs::*;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn sunday_six_am_hour_belongs_to_sun() {
    // 2024-01-07 is a Sunday.
    let snap = positions_for(dt(2024, 1, 7, 6, 0), 19.076, 72.8777, "India").unwrap();
    assert_eq!(snap.planetary_hour.day_ruler, Graha::Surya);
    assert_eq!(snap.planetary_hour.ruler, Graha::Surya);
}

#[test]
fn same_instant_in_two_zones() {
    // 2024-03-10 05:30 in Delhi is 2024-03-10 00:00 UTC.
    let delhi = positions_for(dt(2024, 3, 10, 5, 30), 28.61, 77.21, "India").unwrap();
    let london = positions_for(dt(2024, 3, 10, 0, 0), 51.5, -0.12, "UK").unwrap();
    assert_eq!(delhi.jd, london.jd);
    for (a, b) in delhi.positions.iter().zip(&london.positions) {
        assert_eq!(a.tropical_deg, b.tropical_deg, "{}", a.graha);
    }
    // Civil hour differs, so the planetary hour does too.
    assert_ne!(delhi.planetary_hour.hour_index, london.planetary_hour.hour_index);
}

#[test]
fn offset_rolls_into_previous_utc_day() {
    // 02:00 on Jan 1 in Tokyo is 17:00 on Dec 31 UTC.
    let tokyo = positions_for(dt(2024, 1, 1, 2, 0), 35.68, 139.69, "Japan").unwrap();
    let utc = positions_for(dt(2023, 12, 31, 17, 0), 0.0, 0.0, 0.0).unwrap();
    assert_eq!(tokyo.jd, utc.jd);
    // Weekday is the local civil one: Monday in Tokyo, Sunday in UTC.
    assert_eq!(tokyo.planetary_hour.day_ruler, Graha::Chandra);
    assert_eq!(utc.planetary_hour.day_ruler, Graha::Surya);
}

#[test]
fn every_longitude_in_range_over_a_year() {
    let start = dt(2024, 1, 1, 0, 0);
    for day in 0..366 {
        let when = start + chrono::Duration::hours(day * 24 + (day % 24));
        let snap = positions_for(when, 0.0, 0.0, 0.0).unwrap();
        for p in &snap.positions {
            assert!((0.0..360.0).contains(&p.tropical_deg), "{when} {}", p.graha);
            assert!((0.0..360.0).contains(&p.sidereal_deg), "{when} {}", p.graha);
            assert!(p.sign.degrees_in_sign < 30.0);
            assert!(p.rashi.degrees_in_rashi < 30.0);
        }
        assert!((1..=30).contains(&snap.tithi.tithi_number));
        assert!((1..=4).contains(&snap.moon_nakshatra.pada));
    }
}

#[test]
fn jd_monotonic_across_the_day() {
    let mut prev = f64::NEG_INFINITY;
    for minute in (0..24 * 60).step_by(7) {
        let when = dt(2024, 2, 28, 0, 0) + chrono::Duration::minutes(minute);
        let snap = positions_for(when, 0.0, 0.0, "Nepal").unwrap();
        assert!(snap.jd >= prev, "{when}");
        prev = snap.jd;
    }
}

#[test]
fn sidereal_is_tropical_minus_ayanamsha() {
    let snap = positions_for(dt(2025, 8, 15, 12, 0), 0.0, 0.0, 2.0).unwrap();
    for p in &snap.positions {
        let back = normalize_360(p.sidereal_deg + snap.ayanamsha_deg);
        let mut diff = (back - p.tropical_deg).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(diff < 1e-9, "{}", p.graha);
    }
}

#[test]
fn full_moon_evening_2024_01_25() {
    // 20:24 IST = 14:54 UTC, about three hours before the full moon.
    let snap = positions_for(dt(2024, 1, 25, 20, 24), 28.61, 77.21, "India").unwrap();
    assert_eq!(snap.tithi.to_string(), "Shukla Purnima");
    assert!(snap.moon_phase.illumination_pct > 99.9);
    assert_eq!(snap.moon().rashi.rashi, Rashi::Karka);
    assert_eq!(snap.moon_nakshatra.nakshatra, Nakshatra::Pushya);
}

#[test]
fn rahu_ketu_opposed() {
    let snap = positions_for(dt(2030, 5, 5, 5, 5), 0.0, 0.0, 0.0).unwrap();
    let rahu = snap.position(Graha::Rahu).tropical_deg;
    let ketu = snap.position(Graha::Ketu).tropical_deg;
    assert!((normalize_360(ketu - rahu) - 180.0).abs() < 1e-9);
}

#[test]
fn errors_are_typed() {
    assert!(matches!(
        positions_for(dt(2024, 1, 1, 0, 0), 0.0, 0.0, "Narnia"),
        Err(GrahaError::Time(TimeError::UnknownCountry(_)))
    ));
    assert!(matches!(
        positions_for(dt(2024, 1, 1, 0, 0), 0.0, 200.0, 0.0),
        Err(GrahaError::Vedic(VedicError::InvalidLocation(_)))
    ));
    assert!(matches!(
        positions_for(dt(2024, 1, 1, 0, 0), 0.0, 0.0, f64::NAN),
        Err(GrahaError::Time(TimeError::InvalidInstant(_)))
    ));
}
