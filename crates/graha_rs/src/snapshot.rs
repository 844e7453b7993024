//! Aggregate result records.

use graha_time::CivilInstant;
use graha_vedic_base::{
    GeoLocation, Graha, MoonPhaseInfo, NakshatraInfo, PlanetaryHourInfo, RashiInfo, SignInfo,
    TithiInfo, rashi_from_longitude, sidereal_from_tropical, sign_from_longitude,
};

/// Position of one graha in both zodiacs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Tropical ecliptic longitude in degrees [0, 360).
    pub tropical_deg: f64,
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub sidereal_deg: f64,
    /// Tropical sign of `tropical_deg`.
    pub sign: SignInfo,
    /// Rashi of `sidereal_deg`.
    pub rashi: RashiInfo,
}

impl GrahaPosition {
    /// Derive sidereal longitude, sign and rashi from a tropical longitude.
    pub fn from_tropical(graha: Graha, tropical_deg: f64, ayanamsha_deg: f64) -> Self {
        let sidereal_deg = sidereal_from_tropical(tropical_deg, ayanamsha_deg);
        Self {
            graha,
            tropical_deg,
            sidereal_deg,
            sign: sign_from_longitude(tropical_deg),
            rashi: rashi_from_longitude(sidereal_deg),
        }
    }
}

/// Everything computed for one civil instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub instant: CivilInstant,
    pub location: GeoLocation,
    /// Julian Day (UTC) of `instant`.
    pub jd: f64,
    /// Ayanamsha used for every sidereal value, in degrees.
    pub ayanamsha_deg: f64,
    /// One entry per graha, in [`graha_vedic_base::ALL_GRAHAS`] order.
    pub positions: [GrahaPosition; 9],
    /// Nakshatra and pada of the sidereal Moon.
    pub moon_nakshatra: NakshatraInfo,
    pub moon_phase: MoonPhaseInfo,
    pub tithi: TithiInfo,
    /// Planetary hour of the local civil weekday and hour.
    pub planetary_hour: PlanetaryHourInfo,
}

impl Snapshot {
    /// Position record for `graha`.
    pub fn position(&self, graha: Graha) -> &GrahaPosition {
        &self.positions[graha.index() as usize]
    }

    pub fn sun(&self) -> &GrahaPosition {
        self.position(Graha::Surya)
    }

    pub fn moon(&self) -> &GrahaPosition {
        self.position(Graha::Chandra)
    }
}
