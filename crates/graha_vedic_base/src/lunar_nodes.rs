//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Rahu is the mean ascending node of the Moon's orbit,
//! Ω = 125.04452° − 1934.136261°·T (Meeus Ch. 47, linear terms only).
//! Ketu is the descending node, always Rahu + 180°.

use graha_core::EphemerisError;
use graha_frames::{mean_node_longitude_deg, normalize_360};
use graha_time::jd_to_centuries;

use crate::error::VedicError;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node). Always Rahu + 180 deg.
    Ketu,
}

/// Both node variants.
pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

impl LunarNode {
    /// All node variants.
    pub const fn all() -> &'static [LunarNode] {
        &ALL_NODES
    }
}

/// Rahu longitude in degrees [0, 360). `t` = Julian centuries since J2000.0.
pub fn rahu_deg(t: f64) -> f64 {
    normalize_360(mean_node_longitude_deg(t))
}

/// Ketu longitude in degrees [0, 360).
pub fn ketu_deg(t: f64) -> f64 {
    normalize_360(rahu_deg(t) + 180.0)
}

/// Longitude of `node` at Julian Day `jd`, in degrees [0, 360).
///
/// # Errors
/// [`VedicError::Ephemeris`] wrapping `DomainOverflow` for a non-finite JD.
pub fn lunar_node_deg(node: LunarNode, jd: f64) -> Result<f64, VedicError> {
    if !jd.is_finite() {
        return Err(EphemerisError::DomainOverflow("lunar node").into());
    }
    let t = jd_to_centuries(jd);
    Ok(match node {
        LunarNode::Rahu => rahu_deg(t),
        LunarNode::Ketu => ketu_deg(t),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rahu_at_j2000() {
        assert!((rahu_deg(0.0) - 125.04452).abs() < 1e-10);
    }

    #[test]
    fn ketu_opposite_rahu() {
        for t in [-2.0, -0.5, 0.0, 0.24, 1.0, 3.7] {
            let mut diff = (ketu_deg(t) - rahu_deg(t)).abs();
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!((diff - 180.0).abs() < 1e-9, "t={t}: separation {diff}");
        }
    }

    #[test]
    fn nodes_regress() {
        // About 19.34 deg per year, westward.
        let a = rahu_deg(0.0);
        let b = rahu_deg(0.01);
        let mut step = a - b;
        if step < 0.0 {
            step += 360.0;
        }
        assert!((step - 19.341_362_61).abs() < 1e-6, "step = {step}");
    }

    #[test]
    fn lunar_node_deg_dispatch() {
        let jd = 2_451_545.0;
        assert!((lunar_node_deg(LunarNode::Rahu, jd).unwrap() - 125.04452).abs() < 1e-10);
        assert!((lunar_node_deg(LunarNode::Ketu, jd).unwrap() - 305.04452).abs() < 1e-10);
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(matches!(
            lunar_node_deg(LunarNode::Rahu, f64::NAN),
            Err(VedicError::Ephemeris(EphemerisError::DomainOverflow(_)))
        ));
    }

    #[test]
    fn range_sweep() {
        for i in -200..=200 {
            let t = i as f64 * 0.05;
            for v in [rahu_deg(t), ketu_deg(t)] {
                assert!((0.0..360.0).contains(&v), "t={t}: {v}");
            }
        }
    }
}
