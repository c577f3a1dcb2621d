//! Error types for the sunseat crate

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("latitude {0} not in range -90.0..=90.0")]
    InvalidLatitude(f64),

    #[error("longitude {0} not in range -180.0..=180.0")]
    InvalidLongitude(f64),

    #[error("local time {0} does not exist in the trip time zone")]
    NonexistentLocalTime(NaiveDateTime),

    #[error("time offset of {0:.3} h is outside the supported calendar range")]
    TimeOverflow(f64),

    #[error("solar position unavailable: {0}")]
    SolarPosition(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
