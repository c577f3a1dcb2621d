use chrono::NaiveDate;
use chrono_tz::Europe::Warsaw;

use sunseat::{
    recommend, route_from_lat_lng, trace, AstronomicalSun, ExposureConfig, SegmentSample,
};

fn describe(sample: &SegmentSample) -> String {
    match sample.outcome {
        Ok(c) => format!(
            "heading {:6.1}°  sun {:6.1}° / {:4.1}°  relative {:6.1}°  -> {}",
            c.bearing, c.sun_azimuth, c.sun_altitude, c.relative_sun_angle, c.side
        ),
        Err(reason) => format!("skipped: {:?}", reason),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Warsaw -> Łódź, roughly along the A2
    let route = route_from_lat_lng(&[
        (52.2297, 21.0122),
        (52.1950, 20.6300),
        (52.1400, 20.2000),
        (51.9700, 19.8000),
        (51.7592, 19.4560),
    ])?;
    let distance_m = 135_000.0;
    let start = NaiveDate::from_ymd_opt(2026, 7, 15)
        .and_then(|d| d.and_hms_opt(15, 30, 0))
        .ok_or("invalid trip start")?;

    let config = ExposureConfig::default();
    let sun = AstronomicalSun::new(Warsaw);
    let t = trace(&config, &route, distance_m, start, &sun);

    println!("=== Sun Exposure ===");
    println!("Departure: {} (Europe/Warsaw)", start);
    println!("Distance: {:.1} km", distance_m / 1000.0);
    println!();
    for s in &t.samples {
        let at = s.at.map(|at| at.format("%H:%M").to_string()).unwrap_or_default();
        println!("#{:02} {} w={:.2}  {}", s.index, at, s.weight, describe(s));
    }
    println!();
    println!("Left side:  {}%", t.result.left_percent());
    println!("Right side: {}%", t.result.right_percent());
    println!("{}", recommend(&t.result, config.recommendation_margin_percent));

    Ok(())
}
