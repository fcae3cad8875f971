//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result]
//! alias. Variants cover invalid configuration, the unit-sample domain check
//! used by the prime-index selector, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unit sample out of range: {value}")]
    UnitSampleOutOfRange { value: f64 },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "boom"));
    }

    #[test]
    fn unit_sample_error_reports_value() {
        let err = Error::UnitSampleOutOfRange { value: 1.5 };
        assert_eq!(err.to_string(), "unit sample out of range: 1.5");
    }
}
