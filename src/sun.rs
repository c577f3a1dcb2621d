//! Solar position capability consumed by the exposure estimator.
//!
//! [`SolarPositionProvider`] is the seam: the estimator only sees azimuth and
//! altitude in radians. [`AstronomicalSun`] evaluates the sun locally with the
//! declination / equation-of-time / hour-angle model, which is accurate to
//! within a degree or so and needs no network access.

use chrono::{DateTime, Datelike, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg, DEGREES_PER_HOUR};
use crate::error::{Error, Result};
use crate::types::{GeoPoint, SunPosition};

pub const EARTH_AXIAL_TILT: f64 = 23.45;

pub trait SolarPositionProvider {
    /// Sun position seen from `point` at the trip-local wall-clock instant `at`.
    fn position(&self, at: NaiveDateTime, point: GeoPoint) -> Result<SunPosition>;
}

impl<F> SolarPositionProvider for F
where
    F: Fn(NaiveDateTime, GeoPoint) -> Result<SunPosition>,
{
    fn position(&self, at: NaiveDateTime, point: GeoPoint) -> Result<SunPosition> {
        self(at, point)
    }
}

/// Day angle B in radians; `day_of_year` is 1-based.
pub fn intermediate_angle_b(day_of_year: u32) -> f64 {
    deg_to_rad((day_of_year as f64 - 1.0) * (360.0 / 365.0))
}

/// Equation of time in minutes.
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = intermediate_angle_b(day_of_year);
    229.18
        * (0.000075 + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Solar declination in degrees (Cooper).
pub fn solar_declination(day_of_year: u32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + day_of_year) as f64 / 365.0)).sin()
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

/// Apparent solar time in hours for a UTC clock reading at `longitude` degrees east.
pub fn local_solar_time(utc_hours: f64, longitude: f64, day_of_year: u32) -> f64 {
    let correction = (4.0 * longitude + equation_of_time(day_of_year)) / 60.0;
    (utc_hours + correction).rem_euclid(24.0)
}

/// Altitude above the horizon in degrees.
pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    let ha = deg_to_rad(hour_angle);
    let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * ha.cos();
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}

/// Azimuth in degrees clockwise from north, in [0, 360).
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    let ha = deg_to_rad(hour_angle);
    let east = -dec.cos() * ha.sin();
    let north = dec.sin() * lat.cos() - dec.cos() * lat.sin() * ha.cos();
    normalize_angle(rad_to_deg(east.atan2(north)))
}

/// Azimuth and altitude in degrees for a UTC instant.
pub fn solar_angles_at(point: GeoPoint, utc: &DateTime<Utc>) -> (f64, f64) {
    let utc_hours = utc.hour() as f64
        + utc.minute() as f64 / 60.0
        + (utc.second() as f64 + utc.nanosecond() as f64 / 1e9) / 3600.0;
    let n = utc.ordinal();
    let decl = solar_declination(n);
    let ha = hour_angle(local_solar_time(utc_hours, point.lng(), n));
    (
        solar_azimuth(point.lat(), decl, ha),
        solar_altitude(point.lat(), decl, ha),
    )
}

/// Resolves trip-local wall-clock times in `tz` before evaluating the sun.
#[derive(Debug, Clone)]
pub struct AstronomicalSun<Tz: TimeZone> {
    tz: Tz,
}

impl AstronomicalSun<Utc> {
    pub fn utc() -> Self {
        Self { tz: Utc }
    }
}

impl<Tz: TimeZone> AstronomicalSun<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// A local time skipped by a DST jump is an error; a repeated one takes
    /// the earlier instant.
    pub fn to_utc(&self, at: NaiveDateTime) -> Result<DateTime<Utc>> {
        match self.tz.from_local_datetime(&at) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
            LocalResult::None => Err(Error::NonexistentLocalTime(at)),
        }
    }
}

impl<Tz: TimeZone> SolarPositionProvider for AstronomicalSun<Tz> {
    fn position(&self, at: NaiveDateTime, point: GeoPoint) -> Result<SunPosition> {
        let utc = self.to_utc(at)?;
        let (azimuth, altitude) = solar_angles_at(point, &utc);
        Ok(SunPosition {
            azimuth: deg_to_rad(azimuth),
            altitude: deg_to_rad(altitude),
        })
    }
}
