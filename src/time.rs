//! Time coordinate for the solar ephemeris.
//!
//! All ephemeris quantities are polynomials or trigonometric series in a
//! single continuous time coordinate: Julian centuries elapsed since the
//! J2000.0 epoch (2000-01-01 12:00:00 UTC).

#[cfg(feature = "chrono")]
use chrono::TimeZone;

/// Seconds per Julian century (36,525 days of 86,400 seconds)
const SECONDS_PER_CENTURY: f64 = 3_155_760_000.0;

/// Unix timestamp of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
const EPOCH_UNIX_SECONDS: f64 = 946_728_000.0;

/// Julian centuries elapsed since the J2000.0 epoch.
///
/// A signed continuous time coordinate: `0.0` is 2000-01-01 12:00:00 UTC,
/// `1.0` is one hundred Julian years later, negative values lie before the
/// epoch. The mapping from Unix time is an exact linear scale with no error
/// conditions.
///
/// # Example
/// ```
/// # use solar_insolation::time::JulianCentury;
/// let epoch = JulianCentury::from_unix_seconds(946_728_000.0);
/// assert_eq!(epoch.value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianCentury(f64);

impl JulianCentury {
    /// Creates a time coordinate directly from a centuries-since-epoch value.
    #[must_use]
    pub const fn new(centuries: f64) -> Self {
        Self(centuries)
    }

    /// Creates a time coordinate from seconds since the Unix epoch (UTC).
    ///
    /// Fractional seconds are preserved; the conversion is exact up to a
    /// single floating-point division.
    #[must_use]
    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self((seconds - EPOCH_UNIX_SECONDS) / SECONDS_PER_CENTURY)
    }

    /// Creates a time coordinate from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is interpreted on the UTC timeline, with nanosecond
    /// precision folded into the fractional seconds.
    ///
    /// # Example
    /// ```
    /// # use solar_insolation::time::JulianCentury;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    /// assert_eq!(JulianCentury::from_datetime(&epoch).value(), 0.0);
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let seconds = datetime.timestamp() as f64
            + f64::from(datetime.timestamp_subsec_nanos()) / 1e9;
        Self::from_unix_seconds(seconds)
    }

    /// Gets the raw centuries-since-epoch value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}
