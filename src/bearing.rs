use crate::angles::{deg_to_rad, rad_to_deg};
use crate::types::GeoPoint;

/// Initial great-circle bearing from `start` toward `end`, degrees in [0, 360).
///
/// Coincident points give `atan2(0, 0) = 0`, i.e. due north.
pub fn bearing(start: GeoPoint, end: GeoPoint) -> f64 {
    let lat1 = deg_to_rad(start.lat());
    let lat2 = deg_to_rad(end.lat());
    let delta_lng = deg_to_rad(end.lng() - start.lng());

    let x = delta_lng.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    (rad_to_deg(x.atan2(y)) + 360.0) % 360.0
}
