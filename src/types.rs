use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Geographic point in degrees. Serialises as a `[lat, lng]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidLatitude(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(Error::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = Error;

    fn try_from(pair: [f64; 2]) -> Result<Self> {
        Self::new(pair[0], pair[1])
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

/// Builds a route from `(lat, lng)` pairs, rejecting the first out-of-range point.
pub fn route_from_lat_lng(coords: &[(f64, f64)]) -> Result<Vec<GeoPoint>> {
    coords
        .iter()
        .map(|&(lat, lng)| GeoPoint::new(lat, lng))
        .collect()
}

/// Sun position in radians. Azimuth is clockwise from true north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExposureResult {
    pub left: f64,
    pub right: f64,
}

impl ExposureResult {
    pub const NONE: ExposureResult = ExposureResult {
        left: 0.0,
        right: 0.0,
    };

    pub fn has_exposure(&self) -> bool {
        self.left > 0.0 || self.right > 0.0
    }

    pub fn left_percent(&self) -> i32 {
        (self.left * 100.0).round() as i32
    }

    pub fn right_percent(&self) -> i32 {
        (self.right * 100.0).round() as i32
    }

    pub fn ratio(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// One metre; shorter segments are rejected by [`ExposureConfig::validate`].
pub const MIN_SEGMENT_LENGTH_KM: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureConfig {
    pub segment_length_km: f64,
    pub average_speed_kmh: f64,
    pub min_sun_altitude_deg: f64,
    pub recommendation_margin_percent: i32,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            segment_length_km: 5.0,
            average_speed_kmh: 60.0,
            min_sun_altitude_deg: 10.0,
            recommendation_margin_percent: 20,
        }
    }
}

impl ExposureConfig {
    /// Checks every field, including the recommendation margin.
    pub fn validate(&self) -> Result<()> {
        self.validate_sampling()?;
        if self.recommendation_margin_percent < 0 {
            return Err(Error::InvalidConfig(format!(
                "recommendation_margin_percent must not be negative, got {}",
                self.recommendation_margin_percent
            )));
        }
        Ok(())
    }

    /// Checks only the fields the exposure estimate reads.
    pub fn validate_sampling(&self) -> Result<()> {
        if !self.segment_length_km.is_finite() || self.segment_length_km < MIN_SEGMENT_LENGTH_KM {
            return Err(Error::InvalidConfig(format!(
                "segment_length_km must be at least {} km, got {}",
                MIN_SEGMENT_LENGTH_KM, self.segment_length_km
            )));
        }
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "average_speed_kmh must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        if !self.min_sun_altitude_deg.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "min_sun_altitude_deg must be finite, got {}",
                self.min_sun_altitude_deg
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    SunBelowThreshold { altitude_deg: f64 },
    SolarPositionUnavailable,
}

/// Angles that decided which side a segment's weight went to. All in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub bearing: f64,
    pub sun_azimuth: f64,
    pub sun_altitude: f64,
    pub relative_sun_angle: f64,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSample {
    pub index: usize,
    pub anchor_index: usize,
    pub at: Option<NaiveDateTime>,
    pub weight: f64,
    pub outcome: std::result::Result<Contribution, SkipReason>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExposureTrace {
    pub samples: Vec<SegmentSample>,
    pub left_weight: f64,
    pub right_weight: f64,
    pub total_weight: f64,
    pub result: ExposureResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    NoSun,
    SitOn {
        side: Side,
        left_percent: i32,
        right_percent: i32,
    },
    Similar {
        percent: i32,
    },
}
