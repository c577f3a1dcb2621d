//! Left/right sun exposure along a route.
//!
//! The trip is cut into fixed-length distance segments rather than following
//! the polyline vertices, so cost depends only on the trip length. Each
//! segment is sampled at one polyline vertex, timed under a constant average
//! speed, and its weight goes to whichever side of the vehicle the sun is on.

use chrono::{Duration, NaiveDateTime};

use crate::angles::{classify_side, normalize_angle, rad_to_deg, relative_sun_angle};
use crate::bearing::bearing;
use crate::error::Error;
use crate::sun::SolarPositionProvider;
use crate::types::{
    Contribution, ExposureConfig, ExposureResult, ExposureTrace, GeoPoint, SegmentSample, Side,
    SkipReason,
};

/// Upper bound on sampled segments per trip; longer sampling plans are rejected.
pub const MAX_SEGMENTS: usize = 1_000_000;

/// `None` when the count is not finite or exceeds [`MAX_SEGMENTS`].
pub fn segment_count(total_distance_km: f64, segment_length_km: f64) -> Option<usize> {
    let count = (total_distance_km / segment_length_km).ceil();
    if !count.is_finite() || count < 0.0 || count > MAX_SEGMENTS as f64 {
        return None;
    }
    Some(count as usize)
}

/// Polyline vertex sampled for segment `index` of `num_segments`.
pub fn anchor_index(index: usize, num_segments: usize, route_len: usize) -> usize {
    ((index as f64 / num_segments as f64) * (route_len - 1) as f64).floor() as usize
}

/// Full segments weigh 1; a shorter trailing segment weighs its fraction.
pub fn segment_weight(index: usize, total_distance_km: f64, segment_length_km: f64) -> f64 {
    let remaining = total_distance_km - index as f64 * segment_length_km;
    remaining.min(segment_length_km) / segment_length_km
}

pub fn time_offset_hours(index: usize, segment_length_km: f64, average_speed_kmh: f64) -> f64 {
    (index as f64 * segment_length_km) / average_speed_kmh
}

fn instant_after(start: NaiveDateTime, hours: f64) -> Option<NaiveDateTime> {
    let millis = hours * 3_600_000.0;
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    let offset = Duration::try_milliseconds(millis.round() as i64)?;
    start.checked_add_signed(offset)
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    left: f64,
    right: f64,
    total: f64,
}

impl Totals {
    fn result(&self) -> ExposureResult {
        if self.total > 0.0 {
            ExposureResult {
                left: self.left / self.total,
                right: self.right / self.total,
            }
        } else {
            ExposureResult::NONE
        }
    }
}

/// Exposure with the default segment length, speed and altitude threshold.
pub fn estimate<P>(
    route: &[GeoPoint],
    total_distance_meters: f64,
    trip_start: NaiveDateTime,
    solar_position: &P,
) -> ExposureResult
where
    P: SolarPositionProvider + ?Sized,
{
    estimate_with(
        &ExposureConfig::default(),
        route,
        total_distance_meters,
        trip_start,
        solar_position,
    )
}

/// Keeps only the running totals; no per-segment state is retained.
pub fn estimate_with<P>(
    config: &ExposureConfig,
    route: &[GeoPoint],
    total_distance_meters: f64,
    trip_start: NaiveDateTime,
    solar_position: &P,
) -> ExposureResult
where
    P: SolarPositionProvider + ?Sized,
{
    sample_segments(
        config,
        route,
        total_distance_meters,
        trip_start,
        solar_position,
        |_| {},
    )
    .result()
}

/// Runs the estimate and keeps every sampled segment for inspection.
///
/// Never fails: a short route, a non-positive distance or an invalid config
/// yield an empty trace, and a segment whose sun position cannot be resolved
/// is skipped the same way as one with the sun below the altitude threshold.
pub fn trace<P>(
    config: &ExposureConfig,
    route: &[GeoPoint],
    total_distance_meters: f64,
    trip_start: NaiveDateTime,
    solar_position: &P,
) -> ExposureTrace
where
    P: SolarPositionProvider + ?Sized,
{
    let mut samples = Vec::new();
    let totals = sample_segments(
        config,
        route,
        total_distance_meters,
        trip_start,
        solar_position,
        |s| samples.push(s),
    );
    ExposureTrace {
        samples,
        left_weight: totals.left,
        right_weight: totals.right,
        total_weight: totals.total,
        result: totals.result(),
    }
}

fn sample_segments<P, F>(
    config: &ExposureConfig,
    route: &[GeoPoint],
    total_distance_meters: f64,
    trip_start: NaiveDateTime,
    solar_position: &P,
    mut on_sample: F,
) -> Totals
where
    P: SolarPositionProvider + ?Sized,
    F: FnMut(SegmentSample),
{
    let mut totals = Totals::default();

    if route.len() < 2 || !total_distance_meters.is_finite() || total_distance_meters <= 0.0 {
        return totals;
    }
    if let Err(e) = config.validate_sampling() {
        log::warn!("exposure estimate skipped: {}", e);
        return totals;
    }

    let total_km = total_distance_meters / 1000.0;
    let seg_km = config.segment_length_km;
    let Some(num_segments) = segment_count(total_km, seg_km) else {
        log::warn!(
            "exposure estimate skipped: {:.1} km in {} km segments exceeds {} segments",
            total_km,
            seg_km,
            MAX_SEGMENTS
        );
        return totals;
    };
    let last = route.len() - 1;

    for i in 0..num_segments {
        let anchor_idx = anchor_index(i, num_segments, route.len());
        if anchor_idx >= last {
            break;
        }
        let anchor = route[anchor_idx];
        let look_ahead = route[(anchor_idx + 1).min(last)];
        let weight = segment_weight(i, total_km, seg_km);

        let offset = time_offset_hours(i, seg_km, config.average_speed_kmh);
        let at = instant_after(trip_start, offset);
        let sun = match at {
            Some(at) => solar_position.position(at, anchor),
            None => Err(Error::TimeOverflow(offset)),
        };

        let outcome = match sun {
            Err(e) => {
                log::warn!("segment {}: no solar position at {:?}: {}", i, at, e);
                Err(SkipReason::SolarPositionUnavailable)
            }
            Ok(sun) => {
                let sun_altitude = rad_to_deg(sun.altitude);
                if sun_altitude < config.min_sun_altitude_deg {
                    log::debug!(
                        "segment {}: sun at {:.1}° is below the {:.1}° threshold",
                        i,
                        sun_altitude,
                        config.min_sun_altitude_deg
                    );
                    Err(SkipReason::SunBelowThreshold {
                        altitude_deg: sun_altitude,
                    })
                } else {
                    let sun_azimuth = normalize_angle(rad_to_deg(sun.azimuth));
                    let heading = bearing(anchor, look_ahead);
                    let relative = relative_sun_angle(sun_azimuth, heading);
                    Ok(Contribution {
                        bearing: heading,
                        sun_azimuth,
                        sun_altitude,
                        relative_sun_angle: relative,
                        side: classify_side(relative),
                    })
                }
            }
        };

        if let Ok(c) = &outcome {
            match c.side {
                Side::Left => totals.left += weight,
                Side::Right => totals.right += weight,
            }
            totals.total += weight;
        }

        on_sample(SegmentSample {
            index: i,
            anchor_index: anchor_idx,
            at,
            weight,
            outcome,
        });
    }

    log::debug!(
        "exposure over {:.1} km ({} segments, weight {:.2}): left {:.2}, right {:.2}",
        total_km,
        num_segments,
        totals.total,
        totals.left,
        totals.right
    );

    totals
}
