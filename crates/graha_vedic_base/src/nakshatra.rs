//! Nakshatra (lunar mansion) and pada lookup.
//!
//! The sidereal ecliptic is divided into 27 equal nakshatras of 13°20′,
//! each split into 4 padas of 3°20′. Traditional tables publish the start
//! degrees rounded to 0.001° (253.333 for Purva Ashadha, 266.667 for
//! Uttara Ashadha), so a longitude within [`BOUNDARY_TOLERANCE_DEG`] below
//! a boundary is treated as lying on it.

use std::fmt;

use graha_frames::normalize_360;

use crate::ayanamsha::tropical_to_sidereal;
use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::require_finite;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Half the 0.001° rounding of published boundary degrees.
pub const BOUNDARY_TOLERANCE_DEG: f64 = 0.0005;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lords repeat in this 9-cycle from Ashwini.
const LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Budha,
];

impl Nakshatra {
    /// Display name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitris",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Vishwakarma",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indra-Agni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirriti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishwadevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishta => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Aja Ekapada",
            Self::UttaraBhadrapada => "Ahir Budhnya",
            Self::Revati => "Pushan",
        }
    }

    /// Ruling graha.
    pub const fn lord(self) -> Graha {
        LORD_CYCLE[self.index() as usize % 9]
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sidereal longitude where the nakshatra begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nakshatra position result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter), 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Determine nakshatra and pada from a finite sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let shifted = normalize_360(sidereal_lon_deg + BOUNDARY_TOLERANCE_DEG);
    let idx = ((shifted / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra =
        (shifted - idx as f64 * NAKSHATRA_SPAN - BOUNDARY_TOLERANCE_DEG).max(0.0);
    let pada_idx = (((degrees_in_nakshatra + BOUNDARY_TOLERANCE_DEG) / PADA_SPAN).floor() as u8)
        .min(3);
    let degrees_in_pada = (degrees_in_nakshatra - pada_idx as f64 * PADA_SPAN).max(0.0);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        nakshatra_index: idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

/// [`nakshatra_from_longitude`] that rejects NaN and infinite longitudes.
///
/// # Errors
/// `DomainOverflow` for a non-finite longitude.
pub fn try_nakshatra_from_longitude(sidereal_lon_deg: f64) -> Result<NakshatraInfo, VedicError> {
    Ok(nakshatra_from_longitude(require_finite(
        sidereal_lon_deg,
        "nakshatra longitude",
    )?))
}

/// Convenience: nakshatra from a tropical longitude at Julian Day `jd`.
pub fn nakshatra_from_tropical(
    tropical_lon_deg: f64,
    jd: f64,
) -> Result<NakshatraInfo, VedicError> {
    try_nakshatra_from_longitude(tropical_to_sidereal(tropical_lon_deg, jd)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans() {
        assert!((NAKSHATRA_SPAN * 27.0 - 360.0).abs() < 1e-10);
        assert!((PADA_SPAN * 4.0 - NAKSHATRA_SPAN).abs() < 1e-12);
    }

    #[test]
    fn index_matches_order() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn lords_follow_vimshottari_cycle() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Ardra.lord(), Graha::Rahu);
        assert_eq!(Nakshatra::PurvaAshadha.lord(), Graha::Shukra);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Budha);
    }

    #[test]
    fn deities() {
        assert_eq!(Nakshatra::Rohini.deity(), "Brahma");
        assert_eq!(Nakshatra::Revati.deity(), "Pushan");
    }

    #[test]
    fn non_finite_longitude_rejected() {
        assert!(try_nakshatra_from_longitude(f64::NAN).is_err());
        assert!(try_nakshatra_from_longitude(f64::INFINITY).is_err());
        assert!(nakshatra_from_tropical(f64::NAN, 2_451_545.0).is_err());
        let ok = try_nakshatra_from_longitude(13.0).unwrap();
        assert_eq!((ok.nakshatra, ok.pada), (Nakshatra::Ashwini, 4));
    }

    #[test]
    fn start_of_zodiac() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert_eq!(info.degrees_in_nakshatra, 0.0);
    }

    #[test]
    fn purva_ashadha_published_start() {
        let info = nakshatra_from_longitude(253.333);
        assert_eq!(info.nakshatra, Nakshatra::PurvaAshadha);
        assert_eq!(info.nakshatra_index, 19);
        assert_eq!(info.pada, 1);
        assert_eq!(info.nakshatra.name(), "Purva Ashadha");
    }

    #[test]
    fn uttara_ashadha_published_start() {
        let info = nakshatra_from_longitude(266.667);
        assert_eq!(info.nakshatra, Nakshatra::UttaraAshadha);
        assert_eq!(info.nakshatra_index, 20);
        assert_eq!(info.pada, 1);
        assert!(info.degrees_in_nakshatra < 0.001);
    }

    #[test]
    fn last_pada_of_ashwini() {
        let info = nakshatra_from_longitude(13.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 4);
        assert!((info.degrees_in_nakshatra - 13.0).abs() < 1e-9);
        assert!((info.degrees_in_pada - 3.0).abs() < 1e-9);
    }

    #[test]
    fn mid_revati_and_wrap() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
        assert_eq!(nakshatra_from_longitude(360.0).nakshatra, Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(-13.0).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn every_published_start_maps_to_its_nakshatra() {
        for n in ALL_NAKSHATRAS {
            let published = (n.start_deg() * 1000.0).round() / 1000.0;
            let info = nakshatra_from_longitude(published);
            assert_eq!(info.nakshatra, n, "start {published}");
            assert_eq!(info.pada, 1, "start {published}");
        }
    }

    #[test]
    fn pada_always_in_range() {
        for i in 0..36_000 {
            let info = nakshatra_from_longitude(i as f64 * 0.01);
            assert!((1..=4).contains(&info.pada));
            assert!(info.degrees_in_nakshatra < NAKSHATRA_SPAN);
            assert!(info.degrees_in_pada < PADA_SPAN + 1e-9);
        }
    }
}
