//! Unified error handling for the pace-planner library.
//!
//! The calculation core never fails: degenerate inputs resolve to 0 or an
//! empty split table. Errors only exist at the edges, where raw strings are
//! parsed strictly, configuration is loaded, or results are encoded for a host.

use std::fmt;

/// Unified error type for pace-planner operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// A raw input field could not be read as a number
    InvalidNumber { field: String, value: String },
    /// A raw input field parsed but was below zero
    NegativeValue { field: String, value: f64 },
    /// Configuration error
    ConfigError { message: String },
    /// JSON encoding/decoding error
    Serialization { message: String },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidNumber { field, value } => {
                write!(f, "Field '{}' is not a number: '{}'", field, value)
            }
            PlannerError::NegativeValue { field, value } => {
                write!(f, "Field '{}' must not be negative (got {})", field, value)
            }
            PlannerError::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            PlannerError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for pace-planner operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Extension trait for converting Option to PlannerError.
pub trait OptionExt<T> {
    /// Convert Option to Result with an invalid number error for `field`.
    fn ok_or_invalid_number(self, field: &str, value: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_invalid_number(self, field: &str, value: &str) -> Result<T> {
        self.ok_or_else(|| PlannerError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}
