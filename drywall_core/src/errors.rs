//! # Error Types
//!
//! Structured error types for drywall_core. Every check validates its inputs
//! up front and returns one of these instead of letting `NaN` or `inf` leak
//! into a result.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_mm: f64) -> CalcResult<()> {
//!     if spacing_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "hanger_spacing_mm".to_string(),
//!             value: spacing_mm.to_string(),
//!             reason: "Spacing must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for drywall_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-finite, non-positive length, zero denominator)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A selector could not be resolved to a configuration
    #[error("Configuration error for '{field}': {reason}")]
    Configuration { field: String, reason: String },

    /// Component id not found in its catalog
    #[error("{kind} not found in catalog: {id}")]
    ComponentNotFound { kind: String, id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a ComponentNotFound error
    pub fn component_not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        CalcError::ComponentNotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::Configuration { .. } => "CONFIGURATION",
            CalcError::ComponentNotFound { .. } => "COMPONENT_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

/// Reject NaN and infinities.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Reject negative or non-finite values; zero is allowed.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("hanger_spacing_mm", "-5", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::component_not_found("Hanger", "M20").error_code(), "COMPONENT_NOT_FOUND");
        assert_eq!(CalcError::configuration("deflection", "no divisor").error_code(), "CONFIGURATION");
    }

    #[test]
    fn test_component_not_found_message() {
        let error = CalcError::component_not_found("Anchor", "HST3-M16");
        assert_eq!(error.to_string(), "Anchor not found in catalog: HST3-M16");
    }

    #[test]
    fn test_validators() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_non_negative("x", -0.1).is_err());
        assert!(require_finite("x", -3.0).is_ok());
        assert!(require_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse: Result<f64, _> = serde_json::from_str("not json");
        let error: CalcError = parse.unwrap_err().into();
        assert_eq!(error.error_code(), "SERIALIZATION_ERROR");
    }
}
