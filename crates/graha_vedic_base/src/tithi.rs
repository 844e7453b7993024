//! Tithi (lunar day) from the Moon − Sun elongation.
//!
//! Thirty tithis of 12° each make up a synodic month. Tithi `k` is the one
//! that completes when the elongation reaches `12k`°, so 180° closes tithi
//! 15 (Shukla Purnima) and 360° closes tithi 30 (Krishna Amavasya). An
//! elongation of exactly 0° is the first instant of tithi 1 of the next
//! cycle.

use std::fmt;

use crate::error::VedicError;
use crate::util::{elongation_deg, require_finite};

/// Width of one tithi in degrees.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paksha {
    /// Waxing fortnight, tithis 1-15.
    Shukla,
    /// Waning fortnight, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names. The fifteenth tithi is Purnima in Shukla paksha and
/// Amavasya in Krishna paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TithiName {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// Names of tithis 1-14 within either paksha.
const PAKSHA_TITHIS: [TithiName; 14] = [
    TithiName::Pratipada,
    TithiName::Dwitiya,
    TithiName::Tritiya,
    TithiName::Chaturthi,
    TithiName::Panchami,
    TithiName::Shashthi,
    TithiName::Saptami,
    TithiName::Ashtami,
    TithiName::Navami,
    TithiName::Dashami,
    TithiName::Ekadashi,
    TithiName::Dwadashi,
    TithiName::Trayodashi,
    TithiName::Chaturdashi,
];

impl TithiName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Name for a tithi position 1-15 within a paksha.
    pub const fn for_position(paksha: Paksha, tithi_in_paksha: u8) -> Self {
        match (paksha, tithi_in_paksha) {
            (Paksha::Shukla, 15) => Self::Purnima,
            (Paksha::Krishna, 15) => Self::Amavasya,
            (_, n) => {
                let i = if n == 0 { 0 } else { (n - 1) as usize };
                PAKSHA_TITHIS[if i > 13 { 13 } else { i }]
            }
        }
    }
}

/// Tithi classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TithiInfo {
    /// Tithi number in the month, 1-30.
    pub tithi_number: u8,
    pub paksha: Paksha,
    /// Position within the paksha, 1-15.
    pub tithi_in_paksha: u8,
    pub name: TithiName,
    /// Moon − Sun elongation in degrees [0, 360).
    pub elongation_deg: f64,
    /// Degrees of elongation elapsed in this tithi, (0, 12].
    pub degrees_in_tithi: f64,
}

impl fmt::Display for TithiInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.paksha.name(), self.name.name())
    }
}

/// Tithi for a finite Moon − Sun elongation in degrees.
pub fn tithi_from_elongation(elongation: f64) -> TithiInfo {
    let diff = elongation_deg(0.0, elongation);
    let number = ((diff / TITHI_SPAN_DEG).ceil() as u8).clamp(1, 30);
    let (paksha, tithi_in_paksha) = if number <= 15 {
        (Paksha::Shukla, number)
    } else {
        (Paksha::Krishna, number - 15)
    };
    TithiInfo {
        tithi_number: number,
        paksha,
        tithi_in_paksha,
        name: TithiName::for_position(paksha, tithi_in_paksha),
        elongation_deg: diff,
        degrees_in_tithi: diff - (number - 1) as f64 * TITHI_SPAN_DEG,
    }
}

/// [`tithi_from_elongation`] that rejects NaN and infinite elongations.
///
/// # Errors
/// `DomainOverflow` for a non-finite elongation.
pub fn try_tithi_from_elongation(elongation: f64) -> Result<TithiInfo, VedicError> {
    Ok(tithi_from_elongation(require_finite(elongation, "tithi elongation")?))
}

/// Tithi from Sun and Moon longitudes (same frame for both).
pub fn tithi(sun_lon_deg: f64, moon_lon_deg: f64) -> TithiInfo {
    tithi_from_elongation(elongation_deg(sun_lon_deg, moon_lon_deg))
}
