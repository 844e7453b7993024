//! Tropical zodiac signs with element, quality and traditional ruler.
//!
//! Signs are 30° slices of the tropical ecliptic starting at the vernal
//! equinox. Use [`crate::rashi`] for the sidereal (Vedic) counterpart.

use std::fmt;

use graha_frames::{Dms, deg_to_dms};

use crate::error::VedicError;
use crate::util::{bucket, require_finite};

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

/// The 12 tropical zodiac signs from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element cycles Fire, Earth, Air, Water from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Quality cycles Cardinal, Fixed, Mutable from Aries.
    pub const fn quality(self) -> Quality {
        match self.index() % 3 {
            0 => Quality::Cardinal,
            1 => Quality::Fixed,
            _ => Quality::Mutable,
        }
    }

    /// Traditional ruler, with the modern co-ruler where one is assigned.
    pub const fn ruler(self) -> &'static str {
        match self {
            Self::Aries => "Mars",
            Self::Taurus => "Venus",
            Self::Gemini => "Mercury",
            Self::Cancer => "Moon",
            Self::Leo => "Sun",
            Self::Virgo => "Mercury",
            Self::Libra => "Venus",
            Self::Scorpio => "Mars/Pluto",
            Self::Sagittarius => "Jupiter",
            Self::Capricorn => "Saturn",
            Self::Aquarius => "Saturn/Uranus",
            Self::Pisces => "Jupiter/Neptune",
        }
    }

    /// Longitude where the sign begins.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tropical sign position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignInfo {
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Determine the tropical sign for a finite tropical ecliptic longitude.
pub fn sign_from_longitude(tropical_lon_deg: f64) -> SignInfo {
    let (idx, degrees_in_sign) = bucket(tropical_lon_deg, 30.0, 12);
    SignInfo {
        sign: ALL_SIGNS[idx as usize],
        sign_index: idx,
        dms: deg_to_dms(degrees_in_sign),
        degrees_in_sign,
    }
}

/// [`sign_from_longitude`] that rejects NaN and infinite longitudes.
///
/// # Errors
/// `DomainOverflow` for a non-finite longitude.
pub fn try_sign_from_longitude(tropical_lon_deg: f64) -> Result<SignInfo, VedicError> {
    Ok(sign_from_longitude(require_finite(tropical_lon_deg, "sign longitude")?))
}
