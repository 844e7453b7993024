//! Angle helpers and frame corrections shared by the ephemeris and
//! calendar crates.
//!
//! Provides degree normalization, degrees-minutes-seconds conversion, the
//! mean longitude of the Moon's ascending node, and the simplified
//! nutation-in-longitude correction applied to the Moon and the ayanamsha.

pub mod angle;
pub mod nutation;

pub use angle::{Dms, deg_to_dms, dms_to_deg, normalize_360};
pub use nutation::{
    NUTATION_LONGITUDE_AMPLITUDE_DEG, mean_node_longitude_deg, nutation_longitude_correction_deg,
};
