//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use dash_auth::AuthError;
use dash_helper::HelperError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No valid session (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Session valid but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Action refused; the message is shown to the user as is (422)
    #[error("Operation failed: {message} {location}")]
    Operation {
        message: String,
        location: ErrorLocation,
    },

    /// Controller or directory failed (502)
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, code, message, field) = match self {
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::Forbidden { message, .. } => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", message, None)
            }
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::Operation { message, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "OPERATION_FAILED",
                message,
                None,
            ),
            ApiError::Upstream { message, .. } => {
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", message, None)
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert helper errors to API errors
impl From<HelperError> for ApiError {
    #[track_caller]
    fn from(e: HelperError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            HelperError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            HelperError::NotFound { message, .. } => ApiError::NotFound { message, location },
            HelperError::Domain { message, .. } => ApiError::Operation { message, location },
            HelperError::Remote { operation, .. } => {
                // Transport details stay in the log
                log::error!("{e}");
                ApiError::Upstream {
                    message: format!("{operation} could not reach the cluster"),
                    location,
                }
            }
            HelperError::Auth {
                source: AuthError::InvalidTransition { .. },
                ..
            } => ApiError::Unauthorized {
                message: "No active session".to_string(),
                location,
            },
            HelperError::Auth { source, .. } => {
                log::error!("Credential error: {source}");
                ApiError::Internal {
                    message: "Could not issue session credential".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
