//! Error types for the insolation library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when constructing inputs or outputs.
///
/// The numeric core itself has no failure modes: inverse trigonometric
/// arguments are clamped at every call site, so domain faults never reach
/// the caller. Errors only arise from invalid caller-supplied values.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -π/2 and +π/2 radians).
    InvalidLatitude {
        /// The invalid latitude value provided, in radians.
        value: f64,
    },
    /// Numerical computation error (e.g., a non-finite validated value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value} rad (must be between -π/2 and +π/2)"
                )
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Validates a latitude in radians against the range [-π/2, +π/2].
///
/// # Errors
/// Returns `InvalidLatitude` if the latitude is non-finite or out of range.
pub fn check_latitude(radians: f64) -> Result<()> {
    if !(-core::f64::consts::FRAC_PI_2..=core::f64::consts::FRAC_PI_2).contains(&radians) {
        return Err(Error::invalid_latitude(radians));
    }
    Ok(())
}

/// Validates a cosine value to be finite and within the range [-1, 1].
///
/// # Errors
/// Returns `ComputationError` if the value is non-finite or out of range.
pub fn check_cosine(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::computation_error("cosine is not finite"));
    }
    if !(-1.0..=1.0).contains(&value) {
        return Err(Error::computation_error(
            "cosine must be between -1 and 1",
        ));
    }
    Ok(value)
}

/// Validates a daily energy total to be finite and non-negative.
///
/// # Errors
/// Returns `ComputationError` if the value is non-finite or negative.
pub fn check_energy(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::computation_error("insolation is not finite"));
    }
    if value < 0.0 {
        return Err(Error::computation_error("insolation must be non-negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(FRAC_PI_2).is_ok());
        assert!(check_latitude(-FRAC_PI_2).is_ok());
        assert!(check_latitude(0.8).is_ok());

        assert!(check_latitude(FRAC_PI_2 + 0.01).is_err());
        assert!(check_latitude(-FRAC_PI_2 - 0.01).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_cosine_validation() {
        assert_eq!(check_cosine(0.0).unwrap(), 0.0);
        assert_eq!(check_cosine(1.0).unwrap(), 1.0);
        assert_eq!(check_cosine(-1.0).unwrap(), -1.0);

        assert!(check_cosine(1.1).is_err());
        assert!(check_cosine(-1.1).is_err());
        assert!(check_cosine(f64::NAN).is_err());
        assert!(check_cosine(f64::INFINITY).is_err());
    }

    #[test]
    fn test_energy_validation() {
        assert_eq!(check_energy(0.0).unwrap(), 0.0);
        assert_eq!(check_energy(12.5).unwrap(), 12.5);

        assert!(check_energy(-0.1).is_err());
        assert!(check_energy(f64::NAN).is_err());
        assert!(check_energy(f64::INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(2.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 2 rad (must be between -π/2 and +π/2)"
        );

        let err = Error::computation_error("insolation is not finite");
        assert_eq!(
            err.to_string(),
            "computation error: insolation is not finite"
        );
    }
}
