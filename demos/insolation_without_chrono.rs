//! Numeric API usage: Unix seconds in, two floats out, no chrono types.
//!
//! This is the shape a batch pipeline uses when driving one call per table
//! row. Run with: cargo run --example insolation_without_chrono

use solar_insolation::{insolation, GeoLatitude, JulianCentury};

fn main() {
    // 2023-06-21 12:00:00 UTC
    let june_solstice = 1_687_348_800.0;

    println!("Daily insolation on 2023-06-21, by latitude:");
    for lat_deg in (-90..=90).step_by(15) {
        let latitude = GeoLatitude::from_degrees(f64::from(lat_deg)).expect("latitude in range");
        let t = JulianCentury::from_unix_seconds(june_solstice);

        let total = insolation::daily_total(t, latitude);
        let hours = insolation::day_length_hours(t, latitude);
        println!("  {lat_deg:>4}°: {total:6.2} kWh/m² over {hours:5.2} h of daylight");
    }
}
