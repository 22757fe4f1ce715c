//! Low-precision solar ephemeris.
//!
//! Polynomial and trigonometric-series approximations of the sun's apparent
//! position, following Meeus, "Astronomical Algorithms", 2nd edition
//! (chapter 25, "Solar Coordinates"). Every quantity is a pure, stateless
//! function of the time coordinate; later quantities consume earlier ones in
//! a strict dependency chain with no shared mutable state.
//!
//! Accuracy is the "low accuracy" level of Meeus (about 0.01°), which is
//! ample for daily energy totals.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{asin_clamped, cos, degrees_to_radians, polynomial, sin};
use crate::time::JulianCentury;

/// Mean obliquity of the ecliptic in radians.
///
/// Degree-polynomial `23.4392911111 - 0.0130041666667·T - 1.63888888889e-7·T²
/// + 5.03611111111e-7·T³`, converted to radians. At the J2000.0 epoch this is
/// 23.4392911111° ≈ 0.409092804 rad.
#[must_use]
pub fn obliquity(t: JulianCentury) -> f64 {
    degrees_to_radians(polynomial(
        &[
            23.4392911111,
            -0.0130041666667,
            -1.63888888889e-7,
            5.03611111111e-7,
        ],
        t.value(),
    ))
}

/// Mean anomaly of the sun in radians.
///
/// Degree-polynomial `357.52910 + 35999.05030·T - 0.0001559·T² -
/// 0.00000048·T³`. Not normalized to [0, 2π); consumers only take sines and
/// cosines of it.
#[must_use]
pub fn mean_anomaly(t: JulianCentury) -> f64 {
    degrees_to_radians(polynomial(
        &[357.52910, 35999.05030, -0.0001559, -0.00000048],
        t.value(),
    ))
}

/// Eccentricity of Earth's orbit (dimensionless).
#[must_use]
pub fn eccentricity(t: JulianCentury) -> f64 {
    polynomial(&[0.016708617, -0.000042037, -0.0000001236], t.value())
}

/// Equation of center in radians.
///
/// Correction for the sun's true position relative to its mean position,
/// arising from orbital eccentricity. Three-harmonic series in the mean
/// anomaly with slowly varying amplitudes.
#[must_use]
pub fn equation_of_center(t: JulianCentury) -> f64 {
    let m = mean_anomaly(t);
    let tv = t.value();

    let c_degrees = polynomial(&[1.914600, -0.004817, -0.000014], tv) * sin(m)
        + polynomial(&[0.019993, -0.000101], tv) * sin(2.0 * m)
        + 0.000290 * sin(3.0 * m);
    degrees_to_radians(c_degrees)
}

/// Sun–Earth distance ratio (dimensionless).
///
/// `1.000001018·(1-e²)/(1+e·cos ν)` where `ν = C + M` is the true anomaly.
#[must_use]
pub fn sun_earth_distance_ratio(t: JulianCentury) -> f64 {
    let e = eccentricity(t);
    let true_anomaly = equation_of_center(t) + mean_anomaly(t);
    1.000001018 * (1.0 - e * e) / (1.0 + e * cos(true_anomaly))
}

/// Geometric mean longitude of the sun in radians.
#[must_use]
pub fn mean_longitude(t: JulianCentury) -> f64 {
    degrees_to_radians(polynomial(&[280.46645, 36000.76983, 0.0003032], t.value()))
}

/// Longitude of the moon's ascending node in radians.
///
/// Enters the apparent longitude through the dominant nutation term.
#[must_use]
pub fn ascending_node_longitude(t: JulianCentury) -> f64 {
    degrees_to_radians(polynomial(
        &[125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0],
        t.value(),
    ))
}

/// Apparent longitude of the sun in radians.
///
/// Mean longitude corrected for the equation of center, aberration, and the
/// dominant nutation term. The two correction constants are applied in
/// radians.
#[must_use]
pub fn apparent_longitude(t: JulianCentury) -> f64 {
    mean_longitude(t) + equation_of_center(t)
        - 0.00569
        - 0.00478 * sin(ascending_node_longitude(t))
}

/// Solar declination in radians.
///
/// `asin(sin ε · sin λ)`. The asin argument is ≤ sin ε < 1 by construction,
/// but is clamped anyway so rounding at the extremes can never yield NaN.
#[must_use]
pub fn declination(t: JulianCentury) -> f64 {
    asin_clamped(sin(obliquity(t)) * sin(apparent_longitude(t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    /// All chain quantities at the J2000.0 epoch (T = 0), where the
    /// polynomials collapse to their leading coefficients.
    #[test]
    fn test_epoch_values() {
        let t = JulianCentury::new(0.0);

        assert!((obliquity(t) - 23.4392911111_f64.to_radians()).abs() < EPSILON);
        assert!((obliquity(t) - 0.409092804222135).abs() < EPSILON);
        assert!((mean_anomaly(t) - 357.52910_f64.to_radians()).abs() < EPSILON);
        assert!((mean_anomaly(t) - 6.240059966692059).abs() < EPSILON);
        assert_eq!(eccentricity(t), 0.016708617);
        assert!((mean_longitude(t) - 280.46645_f64.to_radians()).abs() < EPSILON);
        assert!((ascending_node_longitude(t) - 125.04452_f64.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn test_epoch_chain_values() {
        let t = JulianCentury::new(0.0);

        // Derived quantities at T = 0, cross-checked against an independent
        // evaluation of the same series
        assert!((equation_of_center(t) - (-0.0014713452526252692)).abs() < EPSILON);
        assert!((sun_earth_distance_ratio(t) - 0.9833084510709469).abs() < EPSILON);
        assert!((apparent_longitude(t) - 4.883988233391268).abs() < EPSILON);
        assert!((declination(t) - (-0.4027339075603696)).abs() < EPSILON);
    }

    #[test]
    fn test_epoch_is_near_perihelion() {
        // Early January: Earth close to its minimum distance from the sun
        let t = JulianCentury::new(0.0);
        let rho = sun_earth_distance_ratio(t);
        assert!(rho > 0.982 && rho < 0.985);
    }

    #[test]
    fn test_distance_ratio_annual_range() {
        // The orbit is nearly circular; the ratio stays within ~1.7% of 1
        for day in 0..366 {
            let t = JulianCentury::from_unix_seconds(1_672_531_200.0 + f64::from(day) * 86_400.0);
            let rho = sun_earth_distance_ratio(t);
            assert!(rho > 0.982 && rho < 1.018, "rho {rho} out of range at day {day}");
        }
    }

    #[test]
    fn test_declination_annual_range() {
        // Declination swings between roughly ±ε over the year
        let eps = obliquity(JulianCentury::new(0.23));
        for day in 0..366 {
            let t = JulianCentury::from_unix_seconds(1_672_531_200.0 + f64::from(day) * 86_400.0);
            let delta = declination(t);
            assert!(
                delta.abs() <= eps + 1e-6,
                "declination {delta} exceeds obliquity at day {day}"
            );
        }
    }

    #[test]
    fn test_declination_solstices() {
        // 2023-06-21 12:00 UTC: close to the June solstice, declination near +ε
        let june = JulianCentury::from_unix_seconds(1_687_348_800.0);
        assert!((declination(june) - 0.409017233749325).abs() < EPSILON);

        // 2023-12-21 12:00 UTC: near the December solstice, declination near -ε
        let december = JulianCentury::from_unix_seconds(1_703_160_000.0);
        assert!(declination(december) < -0.40);
    }

    #[test]
    fn test_deterministic() {
        let t = JulianCentury::from_unix_seconds(1_687_348_800.0);
        assert_eq!(declination(t), declination(t));
        assert_eq!(sun_earth_distance_ratio(t), sun_earth_distance_ratio(t));
        assert_eq!(apparent_longitude(t), apparent_longitude(t));
    }
}
