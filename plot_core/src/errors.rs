//! # Error Types
//!
//! Structured error types for plot_core.
//!
//! [`ValidationError`] is the user-facing taxonomy: exactly four kinds, each
//! rendering to a fixed message that the GUI shows in its error modal.
//! [`PlotterError`] covers everything around the plot itself (settings files,
//! serialization).
//!
//! ## Example
//!
//! ```rust
//! use plot_core::errors::ValidationError;
//!
//! let err = ValidationError::invalid_character('%');
//! assert!(err.to_string().starts_with("Invalid input '%'"));
//! assert_eq!(err.error_code(), "INVALID_CHARACTER");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::allowed_characters_display;

/// Result type alias for plot_core operations outside validation
pub type PlotterResult<T> = Result<T, PlotterError>;

/// Message shown when `min >= max`
pub const MSG_INVALID_RANGE: &str = "Invalid range: min must be less than max.";

/// Message shown when the function text is blank
pub const MSG_MISSING_FUNCTION: &str = "Please enter a function f(x) to plot.";

/// Message shown when the expression cannot be evaluated
pub const MSG_INVALID_EQUATION: &str = "Invalid equation: please check the function syntax.";

/// Reasons a plot attempt is rejected.
///
/// Variants are listed in the order `validate` checks them; when several
/// conditions hold at once, the earliest one wins.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// `min >= max`
    #[error("{}", MSG_INVALID_RANGE)]
    InvalidRange,

    /// The function text is empty or whitespace only
    #[error("{}", MSG_MISSING_FUNCTION)]
    MissingFunction,

    /// The normalized expression contains a character outside the allow-list
    #[error("Invalid input '{character}', accepted characters are: {allowed}")]
    InvalidCharacter { character: char, allowed: String },

    /// The expression does not parse, or fails to evaluate
    #[error("{}", MSG_INVALID_EQUATION)]
    InvalidEquation,
}

impl ValidationError {
    /// Create an InvalidCharacter error carrying the full allow-list
    pub fn invalid_character(character: char) -> Self {
        ValidationError::InvalidCharacter {
            character,
            allowed: allowed_characters_display(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidRange => "INVALID_RANGE",
            ValidationError::MissingFunction => "MISSING_FUNCTION",
            ValidationError::InvalidCharacter { .. } => "INVALID_CHARACTER",
            ValidationError::InvalidEquation => "INVALID_EQUATION",
        }
    }
}

/// Errors raised outside of expression validation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PlotterError {
    /// A settings value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSetting {
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
}

impl PlotterError {
    /// Create an InvalidSetting error
    pub fn invalid_setting(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PlotterError::InvalidSetting {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PlotterError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PlotterError::InvalidSetting { .. } => "INVALID_SETTING",
            PlotterError::FileError { .. } => "FILE_ERROR",
            PlotterError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for PlotterError {
    fn from(err: serde_json::Error) -> Self {
        PlotterError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ValidationError::InvalidRange.to_string(), MSG_INVALID_RANGE);
        assert_eq!(ValidationError::MissingFunction.to_string(), MSG_MISSING_FUNCTION);
        assert_eq!(ValidationError::InvalidEquation.to_string(), MSG_INVALID_EQUATION);
    }

    #[test]
    fn test_invalid_character_message() {
        let err = ValidationError::invalid_character('%');
        assert_eq!(
            err.to_string(),
            "Invalid input '%', accepted characters are: x, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ., (, ), +, -, *, /"
        );
    }

    #[test]
    fn test_error_serialization() {
        let error = ValidationError::invalid_character('$');
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::InvalidRange.error_code(), "INVALID_RANGE");
        assert_eq!(ValidationError::MissingFunction.error_code(), "MISSING_FUNCTION");
        assert_eq!(
            PlotterError::invalid_setting("point_count", "1", "too small").error_code(),
            "INVALID_SETTING"
        );
        assert_eq!(PlotterError::file_error("read", "a.json", "nope").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_serde_json_error_converts() {
        let err: PlotterError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
