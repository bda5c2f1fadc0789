//! # Error Types
//!
//! Structured error types for fin_core.
//!
//! The numeric operations never fail: degenerate geometry produces zero-valued
//! results instead. These errors come only from the strict validation layer
//! (see [`BeamParams::validate`](crate::params::BeamParams::validate)) and
//! from scenario file I/O.
//!
//! ## Example
//!
//! ```rust
//! use fin_core::errors::{FinError, FinResult};
//!
//! fn validate_length(length_mm: f64) -> FinResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(FinError::invalid_input(
//!             "length_mm",
//!             length_mm.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fin_core operations
pub type FinResult<T> = Result<T, FinError>;

/// Structured error type for validation and file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FinError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Scenario schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl FinError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FinError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FinError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        FinError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FinError::InvalidInput { .. } => "INVALID_INPUT",
            FinError::FileError { .. } => "FILE_ERROR",
            FinError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FinError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FinError::invalid_input("width_mm", "-5", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: FinError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FinError::invalid_input("segments", "2", "too few").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(FinError::serialization("bad json").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(
            FinError::file_error("open", "a.fin", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let error = FinError::invalid_input("segments", "2", "At least 3 samples are required");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'segments': 2 - At least 3 samples are required"
        );
    }
}
