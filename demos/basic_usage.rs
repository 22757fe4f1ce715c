//! Basic usage: daily insolation for a handful of cities through the seasons.
//!
//! Run with: cargo run --example basic_usage

use chrono::{TimeZone, Utc};
use solar_insolation::{insolation, GeoLatitude};

fn main() {
    let cities = [
        ("Singapore", 1.3521),
        ("Vienna", 48.2082),
        ("Reykjavik", 64.1466),
        ("Longyearbyen", 78.2232),
        ("Sydney", -33.8688),
    ];

    let dates = [
        ("March equinox", Utc.with_ymd_and_hms(2023, 3, 20, 12, 0, 0).unwrap()),
        ("June solstice", Utc.with_ymd_and_hms(2023, 6, 21, 12, 0, 0).unwrap()),
        ("December solstice", Utc.with_ymd_and_hms(2023, 12, 21, 12, 0, 0).unwrap()),
    ];

    for (city, lat_deg) in cities {
        let latitude = GeoLatitude::from_degrees(lat_deg).expect("latitude in range");
        println!("{city} ({lat_deg}°):");

        for (label, datetime) in &dates {
            let day = insolation::daily_insolation_for_date(datetime, latitude)
                .expect("computation is total");

            if day.is_polar_night() {
                println!("  {label:>18}: polar night");
            } else {
                println!(
                    "  {label:>18}: {:6.2} kWh/m², max elevation cosine {:.4}",
                    day.total_kwh_m2(),
                    day.max_elevation_cosine()
                );
            }
        }
        println!();
    }
}
