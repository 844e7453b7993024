//! Sidereal frame and Vedic calendar derivations built on the longitude
//! models in `graha_core`.
//!
//! This crate provides:
//! - Rahu/Ketu mean node longitudes
//! - Ayanamsha and tropical/sidereal conversion
//! - Tropical zodiac sign, rashi and nakshatra/pada lookup
//! - Moon phase with illumination, and tithi with paksha
//! - Chaldean planetary hours
//! - Validated observer location
//!
//! Every lookup is a pure function of its angle (or weekday and hour)
//! arguments; nothing is cached between calls.

pub mod ayanamsha;
pub mod error;
pub mod graha;
pub mod hora;
pub mod location;
pub mod lunar_nodes;
pub mod moon_phase;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
mod util;
pub mod zodiac;

pub use ayanamsha::{
    AYANAMSHA_AT_J1950_DEG, PRECESSION_RATE_ARCSEC_PER_YEAR, ayanamsha_deg, mean_ayanamsha_deg,
    sidereal_from_tropical, sidereal_to_tropical, tropical_from_sidereal, tropical_to_sidereal,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use hora::{
    CHALDEAN_ORDER, PlanetaryHourInfo, WEEKDAY_RULERS, day_ruler, hour_slot, planetary_hour,
};
pub use location::GeoLocation;
pub use lunar_nodes::{ALL_NODES, LunarNode, ketu_deg, lunar_node_deg, rahu_deg};
pub use moon_phase::{
    ALL_MOON_PHASES, MoonPhase, MoonPhaseInfo, PHASE_SPAN_DEG, illumination_pct, moon_phase,
    moon_phase_from_elongation, try_moon_phase_from_elongation,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, BOUNDARY_TOLERANCE_DEG, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_from_tropical, try_nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude, rashi_from_tropical,
    try_rashi_from_longitude,
};
pub use tithi::{
    TITHI_SPAN_DEG, Paksha, TithiInfo, TithiName, tithi, tithi_from_elongation,
    try_tithi_from_elongation,
};
pub use util::elongation_deg;
pub use zodiac::{
    ALL_SIGNS, Element, Quality, SignInfo, ZodiacSign, sign_from_longitude,
    try_sign_from_longitude,
};
