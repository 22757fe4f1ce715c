//! Core data types for insolation calculations.

use crate::error::{check_cosine, check_energy, check_latitude};
use crate::math::{degrees_to_radians, radians_to_degrees};
use crate::Result;

/// Geographic latitude in radians.
///
/// Valid range is [-π/2, +π/2]; the value is validated once at construction
/// so the numeric core can stay free of error paths. Unit conversion is the
/// caller's responsibility: the canonical representation is radians, with a
/// degrees constructor provided for convenience.
///
/// # Example
/// ```
/// # use solar_insolation::types::GeoLatitude;
/// let from_deg = GeoLatitude::from_degrees(45.0).unwrap();
/// let from_rad = GeoLatitude::from_radians(45.0_f64.to_radians()).unwrap();
/// assert_eq!(from_deg, from_rad);
/// assert!((from_deg.degrees() - 45.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLatitude(f64);

impl GeoLatitude {
    /// Creates a latitude from radians.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` if the value is non-finite or outside
    /// [-π/2, +π/2].
    pub fn from_radians(radians: f64) -> Result<Self> {
        check_latitude(radians)?;
        Ok(Self(radians))
    }

    /// Creates a latitude from degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` if the value is non-finite or outside
    /// [-90°, +90°]. The reported value in the error is in radians.
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        Self::from_radians(degrees_to_radians(degrees))
    }

    /// Gets the latitude in radians.
    #[must_use]
    pub const fn radians(&self) -> f64 {
        self.0
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        radians_to_degrees(self.0)
    }
}

/// Daily solar radiation summary for one (date, latitude) pair.
///
/// Bundles the two quantities produced per calculation: the total
/// top-of-atmosphere energy received over the day and the cosine of the
/// sun's maximum elevation angle (reached at local solar noon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyInsolation {
    /// Daily top-of-atmosphere insolation in kWh/m²
    total_kwh_m2: f64,
    /// Cosine of the maximum solar elevation angle, in [-1, 1]
    max_elevation_cosine: f64,
}

impl DailyInsolation {
    /// Creates a daily insolation summary from its two components.
    ///
    /// # Errors
    /// Returns `ComputationError` if the total is negative or either value
    /// is non-finite or out of range.
    ///
    /// # Example
    /// ```
    /// # use solar_insolation::types::DailyInsolation;
    /// let day = DailyInsolation::new(9.25, 0.92).unwrap();
    /// assert_eq!(day.total_kwh_m2(), 9.25);
    /// assert_eq!(day.max_elevation_cosine(), 0.92);
    /// ```
    pub fn new(total_kwh_m2: f64, max_elevation_cosine: f64) -> Result<Self> {
        let total = check_energy(total_kwh_m2)?;
        let cosine = check_cosine(max_elevation_cosine)?;
        Ok(Self {
            total_kwh_m2: total,
            max_elevation_cosine: cosine,
        })
    }

    /// Gets the daily top-of-atmosphere insolation in kWh/m².
    #[must_use]
    pub const fn total_kwh_m2(&self) -> f64 {
        self.total_kwh_m2
    }

    /// Gets the cosine of the maximum solar elevation angle.
    #[must_use]
    pub const fn max_elevation_cosine(&self) -> f64 {
        self.max_elevation_cosine
    }

    /// Checks if the day is a polar night (no insolation received).
    #[must_use]
    pub fn is_polar_night(&self) -> bool {
        self.total_kwh_m2 == 0.0
    }
}
