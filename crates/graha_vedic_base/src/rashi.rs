//! Rashi (sidereal zodiac sign) lookup.
//!
//! The sidereal ecliptic is divided into 12 rashis of 30° each, starting
//! from Mesha at 0°. Each rashi has a planetary lord by the usual Vedic
//! convention.

use std::fmt;

use graha_frames::{Dms, deg_to_dms};

use crate::ayanamsha::tropical_to_sidereal;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::{bucket, require_finite};

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrishchika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Lord (ruling graha) of the rashi.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrishchika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Budha,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RashiInfo {
    /// The rashi.
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), and so on. Input outside
/// [0, 360) is normalized first. The input must be finite; see
/// [`try_rashi_from_longitude`] for unchecked sources.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let (idx, degrees_in_rashi) = bucket(sidereal_lon_deg, 30.0, 12);
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

/// [`rashi_from_longitude`] that rejects NaN and infinite longitudes.
///
/// # Errors
/// `DomainOverflow` for a non-finite longitude.
pub fn try_rashi_from_longitude(sidereal_lon_deg: f64) -> Result<RashiInfo, VedicError> {
    Ok(rashi_from_longitude(require_finite(sidereal_lon_deg, "rashi longitude")?))
}

/// Convenience: rashi from a tropical longitude at Julian Day `jd`.
pub fn rashi_from_tropical(tropical_lon_deg: f64, jd: f64) -> Result<RashiInfo, VedicError> {
    try_rashi_from_longitude(tropical_to_sidereal(tropical_lon_deg, jd)?)
}
