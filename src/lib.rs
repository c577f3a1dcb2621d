pub mod angles;
pub mod bearing;
pub mod error;
pub mod exposure;
pub mod recommendation;
pub mod sun;
pub mod types;

pub use angles::{
    classify_side, deg_to_rad, normalize_angle, rad_to_deg, relative_sun_angle, DEGREES_PER_HOUR,
};

pub use bearing::bearing;

pub use error::{Error, Result};

pub use exposure::{
    anchor_index, estimate, estimate_with, segment_count, segment_weight, time_offset_hours, trace,
    MAX_SEGMENTS,
};

pub use recommendation::{recommend, DEFAULT_MARGIN_PERCENT};

pub use sun::{AstronomicalSun, SolarPositionProvider, EARTH_AXIAL_TILT};

pub use types::{
    route_from_lat_lng, Contribution, ExposureConfig, ExposureResult, ExposureTrace, GeoPoint,
    Recommendation, SegmentSample, Side, SkipReason, SunPosition, MIN_SEGMENT_LENGTH_KM,
};
