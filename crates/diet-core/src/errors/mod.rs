// ABOUTME: Unified error handling with error codes, HTTP status mapping, and JSON error bodies
// ABOUTME: Defines AppError and ErrorCode shared by the planner, provider client, and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the diet planner returns [`AppError`]. The
//! [`ErrorCode`] decides the HTTP status and the stable machine-readable code
//! sent to callers, while the message and details carry context.
//!
//! Two propagation policies coexist on purpose:
//! - the plan fallback path fails hard with [`ErrorCode::UpstreamGenerationFailure`]
//! - the nutrition estimator never fails and turns errors into a value-level
//!   `{"error": ...}` payload
//!
//! Both paths use [`ErrorCode::MalformedUpstreamResponse`] internally when the
//! completion text is not valid JSON, then absorb it in their own way.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request payload failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A numeric field is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Planning (4000-4999)
    /// Catalog entry exists but has too few items to sample from
    #[serde(rename = "INSUFFICIENT_CATALOG_DATA")]
    InsufficientCatalogData = 4100,
    /// Plan generation failed for an internal reason
    #[serde(rename = "PLAN_GENERATION_FAILURE")]
    PlanGenerationFailure = 4101,

    // External Services (5000-5999)
    /// Completion provider returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// Completion provider could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// Completion provider rejected our credentials
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// Completion provider rate limited the request
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,
    /// LLM fallback generation failed
    #[serde(rename = "UPSTREAM_GENERATION_FAILURE")]
    UpstreamGenerationFailure = 5100,
    /// Completion text was not valid JSON
    #[serde(rename = "MALFORMED_UPSTREAM_RESPONSE")]
    MalformedUpstreamResponse = 5101,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput | Self::ValueOutOfRange => 400,

            // 502 Bad Gateway
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::UpstreamGenerationFailure
            | Self::MalformedUpstreamResponse => 502,

            // 503 Service Unavailable
            Self::ExternalAuthFailed | Self::ExternalRateLimited => 503,

            // 500 Internal Server Error
            Self::InsufficientCatalogData
            | Self::PlanGenerationFailure
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InsufficientCatalogData => "Not enough catalog items to build a meal plan",
            Self::PlanGenerationFailure => "The diet plan could not be generated",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::UpstreamGenerationFailure => "The language model failed to generate a result",
            Self::MalformedUpstreamResponse => "The language model returned malformed output",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured details (field names, limits, ...)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Caller-facing message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid value for a named field
    #[must_use]
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
            .with_details(serde_json::json!({ "field": field }))
    }

    /// Numeric field outside its accepted range
    #[must_use]
    pub fn out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
            .with_details(serde_json::json!({ "field": field }))
    }

    /// Catalog slot too small to sample from
    #[must_use]
    pub fn insufficient_catalog_data(slot: &str, available: usize, required: usize) -> Self {
        Self::new(
            ErrorCode::InsufficientCatalogData,
            format!("Meal slot '{slot}' has {available} item(s), need at least {required}"),
        )
        .with_details(serde_json::json!({
            "slot": slot,
            "available": available,
            "required": required,
        }))
    }

    /// Generic plan generation failure
    #[must_use]
    pub fn plan_generation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PlanGenerationFailure, message)
    }

    /// LLM fallback generation failure
    #[must_use]
    pub fn upstream_generation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamGenerationFailure, message)
    }

    /// Completion text was not valid JSON
    #[must_use]
    pub fn malformed_upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedUpstreamResponse, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service unreachable
    #[must_use]
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::debug!(code = ?self.code, "Returning server error response: {}", self.message);
        }
        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::UpstreamGenerationFailure.http_status(), 502);
        assert_eq!(ErrorCode::PlanGenerationFailure.http_status(), 500);
        assert_eq!(ErrorCode::ExternalRateLimited.http_status(), 503);
    }

    #[test]
    fn test_invalid_field_carries_field_detail() {
        let error = AppError::invalid_field("age", "Age must be positive");
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.details["field"], "age");
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::insufficient_catalog_data("snacks", 1, 2);
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INSUFFICIENT_CATALOG_DATA"));
        assert!(json.contains("\"slot\":\"snacks\""));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let response = ErrorResponse::from(AppError::plan_generation("failed"));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["error"].get("details").is_none());
        assert_eq!(json["error"]["code"], "PLAN_GENERATION_FAILURE");
    }
}
