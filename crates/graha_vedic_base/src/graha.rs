//! The nine Vedic grahas and their mapping onto ephemeris bodies.
//!
//! Seven grahas are physical bodies with a longitude model in
//! `graha_core`; Rahu and Ketu are the lunar nodes, computed in
//! [`crate::lunar_nodes`].

use std::fmt;

use graha_core::Body;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Graha {
    Surya,
    Chandra,
    Budha,
    Shukra,
    Mangal,
    Guru,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in report order (Sun, Moon, Mercury .. Saturn, Rahu, Ketu).
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Budha,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas, excluding the lunar nodes.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Budha,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Budha => "Budha",
            Self::Shukra => "Shukra",
            Self::Mangal => "Mangal",
            Self::Guru => "Guru",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Budha => "Mercury",
            Self::Shukra => "Venus",
            Self::Mangal => "Mars",
            Self::Guru => "Jupiter",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Budha => 2,
            Self::Shukra => 3,
            Self::Mangal => 4,
            Self::Guru => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Ephemeris body for this graha. `None` for Rahu and Ketu.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Budha => Some(Body::Mercury),
            Self::Shukra => Some(Body::Venus),
            Self::Mangal => Some(Body::Mars),
            Self::Guru => Some(Body::Jupiter),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Graha for an ephemeris body.
    pub const fn from_body(body: Body) -> Self {
        match body {
            Body::Sun => Self::Surya,
            Body::Moon => Self::Chandra,
            Body::Mercury => Self::Budha,
            Body::Venus => Self::Shukra,
            Body::Mars => Self::Mangal,
            Body::Jupiter => Self::Guru,
            Body::Saturn => Self::Shani,
        }
    }

    /// Whether this graha is one of the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// All 9 grahas in report order.
    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_order() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn body_round_trip() {
        for g in SAPTA_GRAHAS {
            let body = g.body().unwrap();
            assert_eq!(Graha::from_body(body), g);
        }
        assert!(Graha::Rahu.body().is_none());
        assert!(Graha::Ketu.body().is_none());
    }

    #[test]
    fn nodes_flagged() {
        let nodes: Vec<_> = ALL_GRAHAS.iter().filter(|g| g.is_node()).collect();
        assert_eq!(nodes, [&Graha::Rahu, &Graha::Ketu]);
    }

    #[test]
    fn english_names() {
        assert_eq!(Graha::Budha.english_name(), "Mercury");
        assert_eq!(Graha::Guru.to_string(), "Jupiter");
        assert_eq!(Graha::Shani.name(), "Shani");
    }
}
