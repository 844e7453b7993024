//! Physical bodies with a longitude model.

use std::str::FromStr;

use crate::error::EphemerisError;

/// Bodies whose tropical longitude this crate computes.
///
/// The lunar nodes are computed points, not bodies; they live in
/// `graha_vedic_base::lunar_nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies in display order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

/// The five bodies handled by the planetary model.
pub const ALL_PLANETS: [Body; 5] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Whether the planetary (mean motion + harmonic) model covers this body.
    pub const fn is_planet(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    /// Parse an English body name, ASCII case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EphemerisError::UnknownPlanet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for &b in &ALL_BODIES {
            assert_eq!(b.name().parse::<Body>().unwrap(), b);
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("jupiter".parse::<Body>().unwrap(), Body::Jupiter);
        assert_eq!(" SATURN ".parse::<Body>().unwrap(), Body::Saturn);
    }

    #[test]
    fn parse_unknown_planet() {
        assert_eq!(
            "Pluto".parse::<Body>(),
            Err(EphemerisError::UnknownPlanet("Pluto".to_string()))
        );
    }

    #[test]
    fn planets_exclude_luminaries() {
        assert!(!Body::Sun.is_planet());
        assert!(!Body::Moon.is_planet());
        for &p in &ALL_PLANETS {
            assert!(p.is_planet());
        }
    }
}
