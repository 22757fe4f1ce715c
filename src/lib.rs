//! # Solar Insolation Library
//!
//! Daily top-of-atmosphere insolation and maximum sun elevation from a timestamp and a latitude.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! For each (date, latitude) pair this library computes two numbers:
//! - **Daily insolation**: total extraterrestrial solar energy received per unit
//!   horizontal area over one day, in kWh/m²
//! - **Maximum elevation cosine**: cosine of the sun's highest elevation angle
//!   that day, reached at local solar noon
//!
//! The underlying ephemeris is the low-accuracy solar theory from Meeus
//! ("Astronomical Algorithms", 2nd edition, chapter 25): a chain of small pure
//! functions of a single time coordinate, Julian centuries since J2000.0.
//! Every operation is stateless and deterministic, so calls can be spread
//! across threads (one call per table row, say) with no coordination.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Defensive inverse-trig clamping: rounding at extreme latitudes and dates can never produce NaN
//! - Thread-safe: stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-insolation = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! solar-insolation = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-insolation = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.
//!   Chapter 25, "Solar Coordinates".
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_insolation::{insolation, GeoLatitude};
//! use chrono::{DateTime, Utc};
//!
//! let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! let latitude = GeoLatitude::from_degrees(48.21).unwrap(); // Vienna
//!
//! let day = insolation::daily_insolation_for_date(&datetime, latitude).unwrap();
//! println!("Insolation: {:.2} kWh/m²", day.total_kwh_m2());
//! println!("Max elevation cosine: {:.4}", day.max_elevation_cosine());
//! # }
//! ```
//!
//! ### Numeric API, no chrono
//! ```rust
//! use solar_insolation::{insolation, GeoLatitude, JulianCentury};
//!
//! // 2023-06-21 12:00:00 UTC as seconds since the Unix epoch
//! let t = JulianCentury::from_unix_seconds(1_687_348_800.0);
//! let latitude = GeoLatitude::from_radians(0.8415).unwrap();
//!
//! let day = insolation::daily_insolation(t, latitude).unwrap();
//! assert!(day.total_kwh_m2() >= 0.0);
//! ```
//!
//! ## Units and conventions
//!
//! - Latitude is radians in `[-π/2, π/2]`; a degrees constructor is provided,
//!   but conversion stays the caller's explicit choice
//! - Time is civil UTC; the epoch for the internal coordinate is
//!   2000-01-01 12:00:00 UTC
//! - Insolation is kWh/m² per day, always ≥ 0; polar night yields exactly 0

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::time::JulianCentury;
pub use crate::types::{DailyInsolation, GeoLatitude};

// Algorithm modules
pub mod ephemeris;
pub mod insolation;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
