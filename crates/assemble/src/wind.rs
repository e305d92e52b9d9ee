//! 16-point wind speed and direction from vector components.

use std::f64::consts::PI;

use smy_series::{Channel, HourlySeries};
use tracing::warn;

use crate::error::AssembleError;

/// Width of one compass sector in degrees.
const SECTOR_DEG: f64 = 22.5;

/// Wind speed and direction rounded to the 16-point compass.
///
/// `u` is the east-west component, `v` the north-south component. The
/// direction is where the wind blows from, in degrees clockwise from north,
/// rounded to the nearest 22.5°. The speed is projected onto the rounded
/// direction. Returns `(speed, direction)`.
pub fn wind16(u: f64, v: f64) -> (f64, f64) {
    let speed = u.hypot(v);
    let direction = (u.atan2(v) + PI).to_degrees();
    let direction16 = (direction / SECTOR_DEG).round() * SECTOR_DEG;
    let speed16 = (direction16 - direction).abs().to_radians().cos() * speed;
    (speed16, direction16)
}

/// Derived wind speed and direction channels for `u`, `v`.
pub fn wind16_channels(u: &[f64], v: &[f64]) -> (Vec<f64>, Vec<f64>) {
    u.iter().zip(v).map(|(&u, &v)| wind16(u, v)).unzip()
}

/// Recompute `w_spd`/`w_dir` from `UGRD`/`VGRD`.
///
/// Returns `false` and leaves the series untouched when a wind component
/// is missing.
///
/// # Errors
///
/// Propagates [`AssembleError::Series`] from channel insertion.
pub fn recompute_wind(series: &mut HourlySeries) -> Result<bool, AssembleError> {
    let (Some(u), Some(v)) = (series.channel(Channel::Ugrd), series.channel(Channel::Vgrd)) else {
        warn!("UGRD/VGRD missing, wind speed and direction left as spliced");
        return Ok(false);
    };
    let (speed, direction) = wind16_channels(u, v);
    series.insert(Channel::WindSpeed, speed)?;
    series.insert(Channel::WindDirection, direction)?;
    Ok(true)
}
