//! Country → standard UTC offset table.
//!
//! One representative standard-time offset per country (no DST, no
//! sub-national zones). Countries spanning several zones use the offset of
//! their most populous region, e.g. USA → Eastern.

use crate::error::TimeError;

/// Static country → UTC offset (hours) table.
#[rustfmt::skip]
pub const ALL_COUNTRY_OFFSETS: [(&str, f64); 39] = [
    ("India",         5.5),
    ("Nepal",         5.75),
    ("Sri Lanka",     5.5),
    ("Bangladesh",    6.0),
    ("Pakistan",      5.0),
    ("UAE",           4.0),
    ("Iran",          3.5),
    ("Kenya",         3.0),
    ("South Africa",  2.0),
    ("Nigeria",       1.0),
    ("Ghana",         0.0),
    ("Morocco",       1.0),
    ("Egypt",         2.0),
    ("UK",            0.0),
    ("France",        1.0),
    ("Germany",       1.0),
    ("Italy",         1.0),
    ("Spain",         1.0),
    ("Netherlands",   1.0),
    ("Russia",        3.0),
    ("Japan",         9.0),
    ("South Korea",   9.0),
    ("China",         8.0),
    ("Singapore",     8.0),
    ("Thailand",      7.0),
    ("Vietnam",       7.0),
    ("Indonesia",     7.0),
    ("Philippines",   8.0),
    ("Australia",    10.0),
    ("New Zealand",  12.0),
    ("USA",          -5.0),
    ("Canada",       -5.0),
    ("Mexico",       -6.0),
    ("Brazil",       -3.0),
    ("Argentina",    -3.0),
    ("Chile",        -4.0),
    ("Peru",         -5.0),
    ("Colombia",     -5.0),
    ("Default",       0.0),
];

/// Standard UTC offset in hours for a country name (ASCII case-insensitive).
pub fn utc_offset_for_country(country: &str) -> Result<f64, TimeError> {
    let name = country.trim();
    ALL_COUNTRY_OFFSETS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(name))
        .map(|&(_, offset)| offset)
        .ok_or_else(|| TimeError::UnknownCountry(country.to_string()))
}

/// How the caller identifies the UTC offset of a civil time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneSpec {
    /// Look the offset up in [`ALL_COUNTRY_OFFSETS`].
    Country(String),
    /// Explicit offset in hours east of UTC.
    OffsetHours(f64),
}

impl ZoneSpec {
    /// Resolve to an offset in hours.
    pub fn utc_offset_hours(&self) -> Result<f64, TimeError> {
        match self {
            Self::Country(name) => utc_offset_for_country(name),
            Self::OffsetHours(h) if h.is_finite() => Ok(*h),
            Self::OffsetHours(_) => Err(TimeError::InvalidInstant("UTC offset must be finite")),
        }
    }
}

impl From<f64> for ZoneSpec {
    fn from(hours: f64) -> Self {
        Self::OffsetHours(hours)
    }
}

impl From<&str> for ZoneSpec {
    fn from(country: &str) -> Self {
        Self::Country(country.to_string())
    }
}

impl From<String> for ZoneSpec {
    fn from(country: String) -> Self {
        Self::Country(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn india_is_five_thirty() {
        assert_eq!(utc_offset_for_country("India").unwrap(), 5.5);
    }

    #[test]
    fn nepal_is_five_forty_five() {
        assert_eq!(utc_offset_for_country("Nepal").unwrap(), 5.75);
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(utc_offset_for_country("  new zealand ").unwrap(), 12.0);
    }

    #[test]
    fn unknown_country_is_an_error() {
        assert_eq!(
            utc_offset_for_country("Atlantis"),
            Err(TimeError::UnknownCountry("Atlantis".to_string()))
        );
    }

    #[test]
    fn default_entry_is_utc() {
        assert_eq!(utc_offset_for_country("Default").unwrap(), 0.0);
    }

    #[test]
    fn table_names_unique() {
        for (i, (a, _)) in ALL_COUNTRY_OFFSETS.iter().enumerate() {
            for (b, _) in &ALL_COUNTRY_OFFSETS[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate entry {a}");
            }
        }
    }

    #[test]
    fn table_offsets_in_range() {
        for &(name, offset) in &ALL_COUNTRY_OFFSETS {
            assert!((-12.0..=14.0).contains(&offset), "{name}: {offset}");
        }
    }

    #[test]
    fn zone_spec_resolves() {
        assert_eq!(ZoneSpec::from("Japan").utc_offset_hours().unwrap(), 9.0);
        assert_eq!(ZoneSpec::from(-3.5).utc_offset_hours().unwrap(), -3.5);
        assert!(ZoneSpec::OffsetHours(f64::NAN).utc_offset_hours().is_err());
    }
}
