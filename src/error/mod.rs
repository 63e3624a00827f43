//! Error module for the Manu filter crate.
//!
//! This module provides the error handling framework for the application
//! layer, following Rust's idiomatic error handling patterns with explicit
//! error types, proper error propagation, and helpful context information.
//! Data structures keep their own error types; they convert into
//! [`ManuError`] at the application boundary.

use thiserror::Error;

use crate::data_structures::manu_cuckoo_filter::ManuCuckooFilterError;

pub mod config;

/// Result type alias used throughout the application layer.
pub type ManuResult<T> = Result<T, ManuError>;

/// Core error enum for the Manu filter crate.
#[derive(Error, Debug)]
pub enum ManuError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the cuckoo filter.
    #[error("Filter error: {0}")]
    Filter(#[from] ManuCuckooFilterError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_conversion() {
        let err: ManuError = ManuCuckooFilterError::FilterFull {
            max_kicks: 512,
            count: 8,
        }
        .into();

        assert!(matches!(err, ManuError::Filter(_)));
        assert_eq!(
            err.to_string(),
            "Filter error: Cuckoo filter is considered full (max kicks: 512, count: 8)"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ManuError = config::ConfigError::ValidationError("bad".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration validation error: bad"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing keys file");
        let err: ManuError = io.into();
        assert!(matches!(err, ManuError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing keys file");
    }
}
