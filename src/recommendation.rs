use std::fmt;

use crate::types::{ExposureResult, Recommendation, Side};

pub const DEFAULT_MARGIN_PERCENT: i32 = 20;

/// Compares rounded percentages; one side must lead by more than
/// `margin_percent` points before the other side is recommended. A negative
/// margin is treated as zero.
pub fn recommend(result: &ExposureResult, margin_percent: i32) -> Recommendation {
    if !result.has_exposure() {
        return Recommendation::NoSun;
    }
    let margin_percent = margin_percent.max(0);
    let left_percent = result.left_percent();
    let right_percent = result.right_percent();

    let shaded = if left_percent > right_percent + margin_percent {
        Some(Side::Right)
    } else if right_percent > left_percent + margin_percent {
        Some(Side::Left)
    } else {
        None
    };

    match shaded {
        Some(side) => Recommendation::SitOn {
            side,
            left_percent,
            right_percent,
        },
        None => Recommendation::Similar {
            percent: left_percent.max(right_percent),
        },
    }
}

impl Recommendation {
    pub fn seat_side(&self) -> Option<Side> {
        match self {
            Recommendation::SitOn { side, .. } => Some(*side),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Recommendation::NoSun => write!(f, "No sun exposure during the trip, any seat is fine"),
            Recommendation::SitOn {
                side,
                left_percent,
                right_percent,
            } => {
                let (chosen, other) = match side {
                    Side::Left => (left_percent, right_percent),
                    Side::Right => (right_percent, left_percent),
                };
                write!(
                    f,
                    "Choose {} side seats for less sun ({}% vs {}%)",
                    side, chosen, other
                )
            }
            Recommendation::Similar { percent } => {
                write!(f, "Similar sun exposure on both sides (~{}%)", percent)
            }
        }
    }
}
