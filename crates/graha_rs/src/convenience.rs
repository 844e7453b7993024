use chrono::NaiveDateTime;
use graha_core::tropical_longitude_deg;
use graha_time::{CivilInstant, ZoneSpec};
use graha_vedic_base::{
    ALL_GRAHAS, GeoLocation, Graha, LunarNode, ayanamsha_deg, lunar_node_deg, moon_phase,
    nakshatra_from_longitude, planetary_hour, tithi,
};
use log::{debug, trace};

use crate::error::GrahaError;
use crate::snapshot::{GrahaPosition, Snapshot};

/// Tropical longitude of any of the nine grahas at Julian Day `jd`.
pub fn graha_longitude(graha: Graha, jd: f64) -> Result<f64, GrahaError> {
    let lon = match graha.body() {
        Some(body) => tropical_longitude_deg(body, jd)?,
        None if graha == Graha::Ketu => lunar_node_deg(LunarNode::Ketu, jd)?,
        None => lunar_node_deg(LunarNode::Rahu, jd)?,
    };
    Ok(lon)
}

/// Compute the full snapshot for a validated civil instant and location.
pub fn snapshot(instant: &CivilInstant, location: GeoLocation) -> Result<Snapshot, GrahaError> {
    let jd = instant.julian_day()?;
    let aya = ayanamsha_deg(jd)?;
    debug!("snapshot {instant} jd={jd:.6} ayanamsha={aya:.6}");

    let mut tropical = [0.0; 9];
    for (lon, graha) in tropical.iter_mut().zip(ALL_GRAHAS) {
        *lon = graha_longitude(graha, jd)?;
        trace!("{graha}: tropical {lon:.6}");
    }
    let positions: [GrahaPosition; 9] = std::array::from_fn(|i| {
        GrahaPosition::from_tropical(ALL_GRAHAS[i], tropical[i], aya)
    });

    let sun = positions[Graha::Surya.index() as usize];
    let moon = positions[Graha::Chandra.index() as usize];
    let planetary_hour = planetary_hour(instant.weekday()?, instant.hour)?;

    Ok(Snapshot {
        instant: *instant,
        location,
        jd,
        ayanamsha_deg: aya,
        positions,
        moon_nakshatra: nakshatra_from_longitude(moon.sidereal_deg),
        moon_phase: moon_phase(sun.tropical_deg, moon.tropical_deg),
        tithi: tithi(sun.tropical_deg, moon.tropical_deg),
        planetary_hour,
    })
}

/// Positions and calendar values for a civil date/time at a location.
///
/// `zone` is either a country name from the offset table or an explicit
/// offset in hours east of UTC:
///
/// ```
/// use chrono::NaiveDate;
/// use graha_rs::{Graha, positions_for};
///
/// let dt = NaiveDate::from_ymd_opt(2024, 1, 25)
///     .and_then(|d| d.and_hms_opt(20, 0, 0))
///     .unwrap();
/// let snap = positions_for(dt, 28.6139, 77.209, "India").unwrap();
/// assert_eq!(snap.positions.len(), 9);
/// assert!(snap.position(Graha::Rahu).tropical_deg < 360.0);
/// ```
///
/// # Errors
/// [`GrahaError::Time`] for an unknown country or invalid offset,
/// [`GrahaError::Vedic`] for an invalid location.
pub fn positions_for(
    datetime: NaiveDateTime,
    latitude_deg: f64,
    longitude_deg: f64,
    zone: impl Into<ZoneSpec>,
) -> Result<Snapshot, GrahaError> {
    let offset = zone.into().utc_offset_hours()?;
    let instant = CivilInstant::from_naive(datetime, offset)?;
    let location = GeoLocation::new(latitude_deg, longitude_deg)?;
    snapshot(&instant, location)
}
