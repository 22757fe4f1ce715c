//! Daily top-of-atmosphere insolation.
//!
//! Integrates the extraterrestrial solar flux over one day for a given date
//! and latitude, together with the geometry of that day: sunrise hour angle,
//! day length, and the sun's maximum elevation at local solar noon.
//!
//! All functions are pure and stateless. Latitude arrives pre-validated as a
//! [`GeoLatitude`], so nothing here can fail; polar day and polar night fall
//! out of the hour-angle boundary cases rather than being error conditions.

use crate::ephemeris::{apparent_longitude, declination, obliquity, sun_earth_distance_ratio};
use crate::math::{acos_clamped, asin_clamped, clamp_unit, cos, sin, tan, PI};
use crate::time::JulianCentury;
use crate::types::{DailyInsolation, GeoLatitude};
use crate::Result;

/// Calibration constant folding the solar constant and the unit conversion
/// from integrated flux to kWh/m² per day. Fixed, not re-derived.
const INSOLATION_SCALE: f64 = 10.4033856721;

/// Hours in a day, for day-length conversion
const HOURS_PER_DAY: f64 = 24.0;

/// Sunrise hour angle in radians, in [0, π].
///
/// Half the angular arc the sun traverses between sunrise and local solar
/// noon. The boundary cases encode the polar seasons:
/// - `0` — the sun never rises (polar night)
/// - `π` — the sun never sets (polar day)
///
/// # Example
/// ```
/// # use solar_insolation::{insolation, time::JulianCentury, types::GeoLatitude};
/// // 70°N at the December solstice: polar night
/// let t = JulianCentury::from_unix_seconds(1_703_160_000.0);
/// let latitude = GeoLatitude::from_degrees(70.0).unwrap();
/// assert_eq!(insolation::sunrise_hour_angle(t, latitude), 0.0);
/// ```
#[must_use]
pub fn sunrise_hour_angle(t: JulianCentury, latitude: GeoLatitude) -> f64 {
    let x = tan(declination(t)) * tan(latitude.radians());
    if x < -1.0 {
        0.0
    } else if x > 1.0 {
        PI
    } else {
        acos_clamped(-x)
    }
}

/// Day length in hours, in [0, 24].
///
/// Derived from the sunrise hour angle: `24·h₀/π`.
#[must_use]
pub fn day_length_hours(t: JulianCentury, latitude: GeoLatitude) -> f64 {
    sunrise_hour_angle(t, latitude) * HOURS_PER_DAY / PI
}

/// Daily top-of-atmosphere insolation in kWh/m².
///
/// Integrates the incident flux from sunrise to sunset:
/// `scale · ρ² · (h₀·sin φ·sin δ + cos φ·cos δ·sin h₀)` with `ρ` the
/// sun–Earth distance ratio, `h₀` the sunrise hour angle, `φ` the latitude
/// and `δ` the declination. Zero during polar night, never negative.
#[must_use]
pub fn daily_total(t: JulianCentury, latitude: GeoLatitude) -> f64 {
    let rho = sun_earth_distance_ratio(t);
    let h0 = sunrise_hour_angle(t, latitude);

    // sin δ, kept in closed form so cos δ comes from a single asin/cos pair
    let sin_decl = clamp_unit(sin(obliquity(t)) * sin(apparent_longitude(t)));
    let phi = latitude.radians();

    INSOLATION_SCALE
        * rho
        * rho
        * (h0 * sin(phi) * sin_decl + cos(phi) * cos(asin_clamped(sin_decl)) * sin(h0))
}

/// Cosine of the sun's maximum elevation angle, in [-1, 1].
///
/// The maximum is reached at local solar noon, where the elevation is
/// `π/2 - |φ - δ|`; its cosine is `cos(φ - δ)`.
#[must_use]
pub fn max_elevation_cosine(t: JulianCentury, latitude: GeoLatitude) -> f64 {
    cos(latitude.radians() - declination(t))
}

/// Computes the full daily summary for one (date, latitude) pair.
///
/// # Errors
/// Returns `ComputationError` only if a non-finite value slips through the
/// output validation; the computation itself has no failure modes.
///
/// # Example
/// ```
/// # use solar_insolation::{insolation, time::JulianCentury, types::GeoLatitude};
/// let t = JulianCentury::new(0.0); // 2000-01-01 12:00 UTC
/// let equator = GeoLatitude::from_radians(0.0).unwrap();
/// let day = insolation::daily_insolation(t, equator).unwrap();
/// assert!(day.total_kwh_m2() > 9.0 && day.total_kwh_m2() < 9.5);
/// ```
pub fn daily_insolation(t: JulianCentury, latitude: GeoLatitude) -> Result<DailyInsolation> {
    DailyInsolation::new(daily_total(t, latitude), max_elevation_cosine(t, latitude))
}

/// Computes the daily summary for a timezone-aware chrono `DateTime`.
///
/// Convenience front door over [`daily_insolation`]; the datetime is mapped
/// onto the UTC timeline first.
///
/// # Errors
/// Same conditions as [`daily_insolation`].
///
/// # Example
/// ```
/// # use solar_insolation::{insolation, types::GeoLatitude};
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let latitude = GeoLatitude::from_degrees(45.0).unwrap();
/// let day = insolation::daily_insolation_for_date(&datetime, latitude).unwrap();
/// assert!(day.total_kwh_m2() > 12.0);
/// ```
#[cfg(feature = "chrono")]
pub fn daily_insolation_for_date<Tz: chrono::TimeZone>(
    datetime: &chrono::DateTime<Tz>,
    latitude: GeoLatitude,
) -> Result<DailyInsolation> {
    daily_insolation(JulianCentury::from_datetime(datetime), latitude)
}
