//! Error types shared across Lattis crates.
//!
//! The store raises exactly one hard error: a caller-supplied weight that is
//! not a finite number. Every other anomaly (missing keys, absent links, no
//! path found) is a normal outcome reported through return values.

use thiserror::Error;

/// Errors raised by graph mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An explicit link weight was not a finite number.
    ///
    /// Raised synchronously by weighted link insertion; the failing call
    /// performs no mutation.
    #[error("invalid link weight {0}: weights must be finite")]
    InvalidWeight(f64),
}

/// Result alias using the Lattis [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weight_message() {
        let err = Error::InvalidWeight(f64::NAN);
        assert_eq!(
            err.to_string(),
            "invalid link weight NaN: weights must be finite"
        );
    }
}
