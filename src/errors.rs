// ABOUTME: Unified error handling with standard error codes and HTTP response mapping
// ABOUTME: Defines the validation taxonomy for the metric calculator and persistence shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling System
//!
//! Central error type for the Gainstracker API. Every failure is an
//! [`AppError`] carrying an [`ErrorCode`] that maps to an HTTP status, so
//! handlers can return errors directly and get a consistent JSON body.
//!
//! The validation codes (`InvalidInput`, `InvalidSex`, `InvalidActivityLevel`,
//! `InvalidGoal`, `InvalidRatios`) are all detected before any computation
//! runs; an operation either returns a fully computed result or no result.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (all map to 400)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    #[serde(rename = "INVALID_SEX")]
    InvalidSex,
    #[serde(rename = "INVALID_ACTIVITY_LEVEL")]
    InvalidActivityLevel,
    #[serde(rename = "INVALID_GOAL")]
    InvalidGoal,
    #[serde(rename = "INVALID_RATIOS")]
    InvalidRatios,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed,

    // Resource management
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists,

    // Internal errors
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput
            | Self::InvalidSex
            | Self::InvalidActivityLevel
            | Self::InvalidGoal
            | Self::InvalidRatios
            | Self::MissingRequiredField
            | Self::ValidationFailed => StatusCode::BAD_REQUEST,

            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::ResourceAlreadyExists => StatusCode::CONFLICT,

            Self::DatabaseError | Self::ConfigError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidSex => "The provided sex is not recognized",
            Self::InvalidActivityLevel => "The provided activity level is not recognized",
            Self::InvalidGoal => "The provided goal is not recognized",
            Self::InvalidRatios => "The macronutrient ratios are invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValidationFailed => "The request failed validation",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::DatabaseError => "Database operation failed",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured details (validation error lists, accepted values)
    pub details: serde_json::Value,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Invalid physical measurement or numeric input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Sex token matched neither accepted value
    pub fn invalid_sex(provided: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSex,
            format!("Sex must be \"male\" or \"female\", got \"{provided}\""),
        )
    }

    /// Activity level not found in the multiplier table
    pub fn invalid_activity_level(provided: &str, valid: &[&str]) -> Self {
        Self::new(
            ErrorCode::InvalidActivityLevel,
            format!(
                "Invalid activity level \"{provided}\". Must be one of: {}",
                valid.join(", ")
            ),
        )
    }

    /// Goal token matched no accepted value
    pub fn invalid_goal(provided: &str, valid: &[&str]) -> Self {
        Self::new(
            ErrorCode::InvalidGoal,
            format!(
                "Invalid goal \"{provided}\". Must be one of: {}",
                valid.join(", ")
            ),
        )
    }

    /// Macro ratios did not sum to exactly 100
    pub fn invalid_ratios(sum: f64) -> Self {
        Self::new(
            ErrorCode::InvalidRatios,
            format!("Macronutrient ratios must sum to exactly 100, got {sum}"),
        )
    }

    /// Required request field or query parameter is missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required parameter: {field}"),
        )
    }

    /// Request body failed precondition checks
    pub fn validation(errors: Vec<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_details(serde_json::json!({ "errors": errors }))
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Uniqueness constraint violated
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorResponseDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            success: false,
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(code = ?self.code, "{}", self.message);
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => Self::not_found("Row"),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::already_exists("This username or email already exists")
            }
            _ => Self::database(error.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(
            ErrorCode::InvalidInput.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidRatios.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::ResourceNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::ResourceAlreadyExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_activity_level_error_enumerates_valid_values() {
        let error = AppError::invalid_activity_level(
            "couch_potato",
            &["sedentary", "lightly_active", "moderately_active"],
        );
        assert!(error.message.contains("sedentary"));
        assert!(error.message.contains("moderately_active"));
        assert!(error.message.contains("couch_potato"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::validation(vec!["username too short".into()]);
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("VALIDATION_FAILED"));
        assert!(json.contains("username too short"));
        assert!(json.contains("\"success\":false"));
    }

    #[test]
    fn test_null_details_skipped_in_serialization() {
        let error = AppError::invalid_input("weight must be positive");
        let json = serde_json::to_string(&ErrorResponse::from(error)).unwrap();
        assert!(!json.contains("details"));
    }
}
