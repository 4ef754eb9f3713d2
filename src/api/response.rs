//! Response types for the sales VAT API.
//!
//! This module defines the error response structures and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, FieldViolation};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            violations: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response listing every violation.
    pub fn validation_error(violations: Vec<FieldViolation>) -> Self {
        Self {
            violations,
            ..Self::new("VALIDATION_ERROR", "Request validation failed")
        }
    }

    /// Creates an unsupported country error response.
    pub fn unsupported_country(country: &str) -> Self {
        Self::with_details(
            "UNSUPPORTED_COUNTRY",
            format!("Country not supported: {}", country),
            "Supported country codes are BR, CL and MX",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { violations } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(violations))
            }
            EngineError::UnsupportedCountry { country } => {
                ApiErrorResponse::bad_request(ApiError::unsupported_country(&country))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("violations"));
    }

    #[test]
    fn test_validation_error_lists_violations() {
        let error = ApiError::validation_error(vec![FieldViolation::new(
            "amount",
            "must be greater than zero",
        )]);
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["violations"][0]["field"], "amount");
    }

    #[test]
    fn test_unsupported_country_error() {
        let error = ApiError::unsupported_country("US");
        assert_eq!(error.code, "UNSUPPORTED_COUNTRY");
        assert!(error.message.contains("US"));
        assert!(error.message.contains("not supported"));
    }

    #[test]
    fn test_engine_error_to_api_error() {
        let api_error: ApiErrorResponse = EngineError::UnsupportedCountry {
            country: "AR".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNSUPPORTED_COUNTRY");
    }

    #[test]
    fn test_every_engine_error_is_a_bad_request() {
        let errors = [
            EngineError::Validation {
                violations: vec![FieldViolation::new("country", "is required")],
            },
            EngineError::UnsupportedCountry {
                country: "AR".to_string(),
            },
        ];
        for error in errors {
            let api_error: ApiErrorResponse = error.into();
            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        }
    }
}
