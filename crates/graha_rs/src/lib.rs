//! One-call snapshot of the sky for a civil date, time and place.
//!
//! [`positions_for`] runs the whole pipeline: civil time → Julian Day →
//! Sun, Moon, five planets and the lunar nodes → ayanamsha → sidereal
//! longitudes → sign, rashi, nakshatra, moon phase, tithi and planetary
//! hour. The individual steps stay callable through the re-exports below.
//!
//! The planetary model is a coarse mean-motion approximation, accurate to a
//! few degrees. It is suitable for sign- and rashi-level calendar work, not
//! for precision ephemerides.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use graha_rs::*;
//!
//! let dt = NaiveDate::from_ymd_opt(2024, 3, 20)
//!     .and_then(|d| d.and_hms_opt(8, 36, 0))
//!     .unwrap();
//! let snap = positions_for(dt, 28.6139, 77.209, ZoneSpec::OffsetHours(5.5)).unwrap();
//! println!("Sun in {} / {}", snap.sun().sign.sign, snap.sun().rashi.rashi);
//! println!("{} ({:.1}% lit)", snap.tithi, snap.moon_phase.illumination_pct);
//! ```

pub mod convenience;
pub mod error;
pub mod snapshot;

pub use convenience::{graha_longitude, positions_for, snapshot};
pub use error::GrahaError;
pub use snapshot::{GrahaPosition, Snapshot};

// Building blocks, so callers need only this crate.
pub use graha_core::{
    Body, EphemerisError, moon_longitude_deg, planet_longitude_deg, sun_longitude_deg,
    tropical_longitude_deg,
};
pub use graha_frames::{Dms, deg_to_dms, normalize_360};
pub use graha_time::{
    ALL_COUNTRY_OFFSETS, CivilInstant, TimeError, ZoneSpec, julian_day, utc_offset_for_country,
};
pub use graha_vedic_base::{
    ALL_GRAHAS, GeoLocation, Graha, LunarNode, MoonPhase, MoonPhaseInfo, Nakshatra,
    NakshatraInfo, Paksha, PlanetaryHourInfo, Rashi, RashiInfo, SignInfo, TithiInfo, TithiName,
    VedicError, ZodiacSign, ayanamsha_deg, lunar_node_deg, moon_phase, nakshatra_from_longitude,
    planetary_hour, rashi_from_longitude, sidereal_to_tropical, sign_from_longitude, tithi,
    tropical_to_sidereal, try_moon_phase_from_elongation, try_nakshatra_from_longitude,
    try_rashi_from_longitude, try_sign_from_longitude, try_tithi_from_elongation,
};
