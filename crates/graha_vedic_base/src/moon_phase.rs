//! Eight-fold moon phase and illuminated fraction.
//!
//! The Moon−Sun elongation is cut into eight 45° phases starting with New
//! Moon at 0°. Illumination uses the phase-angle approximation
//! `(1 − cos elongation) / 2`.

use std::fmt;

use crate::error::VedicError;
use crate::util::{bucket, elongation_deg, require_finite};

/// Width of one phase bucket in degrees.
pub const PHASE_SPAN_DEG: f64 = 45.0;

/// The eight named moon phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

pub const ALL_MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Tithi range that usually falls in this phase.
    pub const fn tithi_label(self) -> &'static str {
        match self {
            Self::NewMoon => "Amavasya",
            Self::WaxingCrescent => "Shukla 2-6",
            Self::FirstQuarter => "Shukla 7-8",
            Self::WaxingGibbous => "Shukla 9-14",
            Self::FullMoon => "Purnima",
            Self::WaningGibbous => "Krishna 2-6",
            Self::LastQuarter => "Krishna 7-8",
            Self::WaningCrescent => "Krishna 9-14",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_waxing(self) -> bool {
        self.index() < 4
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moon phase result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonPhaseInfo {
    pub phase: MoonPhase,
    /// 0-based phase index (0 = New Moon).
    pub phase_index: u8,
    /// Moon − Sun elongation in degrees [0, 360).
    pub phase_angle_deg: f64,
    /// Illuminated fraction of the disc, in percent [0, 100].
    pub illumination_pct: f64,
}

/// Illuminated percentage for a phase angle in degrees.
pub fn illumination_pct(phase_angle_deg: f64) -> f64 {
    (1.0 - phase_angle_deg.to_radians().cos()) / 2.0 * 100.0
}

/// Moon phase for a finite Moon − Sun elongation in degrees.
pub fn moon_phase_from_elongation(elongation: f64) -> MoonPhaseInfo {
    let (idx, _) = bucket(elongation, PHASE_SPAN_DEG, 8);
    let angle = elongation_deg(0.0, elongation);
    MoonPhaseInfo {
        phase: ALL_MOON_PHASES[idx as usize],
        phase_index: idx,
        phase_angle_deg: angle,
        illumination_pct: illumination_pct(angle),
    }
}

/// [`moon_phase_from_elongation`] that rejects NaN and infinite elongations.
///
/// # Errors
/// `DomainOverflow` for a non-finite elongation.
pub fn try_moon_phase_from_elongation(elongation: f64) -> Result<MoonPhaseInfo, VedicError> {
    Ok(moon_phase_from_elongation(require_finite(elongation, "phase elongation")?))
}

/// Moon phase from Sun and Moon longitudes (same frame for both).
pub fn moon_phase(sun_lon_deg: f64, moon_lon_deg: f64) -> MoonPhaseInfo {
    moon_phase_from_elongation(elongation_deg(sun_lon_deg, moon_lon_deg))
}
