//! Error types for the sales VAT service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the pricing pipeline and its startup path can produce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The request field that failed validation.
    pub field: String,
    /// What was wrong with the field.
    pub message: String,
}

impl FieldViolation {
    /// Creates a violation for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The main error type for the sales VAT service.
///
/// Both variants are recovered at the HTTP boundary. Startup failures use
/// [`ConfigError`] instead, so no request path can produce them.
///
/// # Example
///
/// ```
/// use sales_vat::error::EngineError;
///
/// let error = EngineError::UnsupportedCountry {
///     country: "US".to_string(),
/// };
/// assert_eq!(error.to_string(), "Country not supported: US");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more request fields failed validation.
    #[error("Validation failed: {}", format_violations(.violations))]
    Validation {
        /// Every violated constraint, in field order.
        violations: Vec<FieldViolation>,
    },

    /// The country code is outside the supported set.
    #[error("Country not supported: {country}")]
    UnsupportedCountry {
        /// The country code exactly as submitted.
        country: String,
    },
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while loading server configuration at startup.
///
/// # Example
///
/// ```
/// use sales_vat::error::ConfigError;
///
/// let error = ConfigError::NotFound {
///     path: "/missing/server.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/server.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// The setting that was rejected.
        key: String,
        /// Why it was rejected.
        message: String,
    },
}

/// A type alias for Results that return ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
