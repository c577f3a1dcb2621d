use crate::types::Side;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Sun direction measured clockwise from the vehicle heading, in [0, 360).
pub fn relative_sun_angle(sun_azimuth: f64, heading: f64) -> f64 {
    (sun_azimuth - heading + 360.0) % 360.0
}

/// Strictly between 90 and 270 is left; both boundaries fall to the right.
pub fn classify_side(relative_angle: f64) -> Side {
    if relative_angle > 90.0 && relative_angle < 270.0 {
        Side::Left
    } else {
        Side::Right
    }
}
