//! REST API error types
//!
//! Every error renders the same JSON envelope so clients can handle
//! failures uniformly regardless of which handler produced them.

use tb_auth::AuthError;
use tb_core::CoreError;
use tb_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope: `{status, message, detailedMessage}`
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
    /// Extra context when available
    #[serde(rename = "detailedMessage", skip_serializing_if = "Option::is_none")]
    pub detailed_message: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Authentication failure (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authorization failure (403)
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

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status_code();
        let (message, detailed_message) = match self {
            ApiError::Validation { message, .. } => (message, None),
            ApiError::Unauthorized { message, .. } => ("Unauthorized".to_string(), Some(message)),
            ApiError::Forbidden { message, .. } => ("Forbidden".to_string(), Some(message)),
            ApiError::NotFound { message, .. } => (message, None),
            // Internal details are logged above, not exposed to clients
            ApiError::Internal { .. } => ("Internal server error".to_string(), None),
        };

        let body = ApiErrorResponse {
            status: status.as_u16(),
            message,
            detailed_message,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors. Anything token-related is a 401;
/// hashing machinery failures are internal.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::TokenExpired { .. } => ApiError::Unauthorized {
                message: "Token expired".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::MissingHeader { .. }
            | AuthError::InvalidScheme { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => ApiError::Unauthorized {
                message: "Invalid token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::WeakSigningKey { .. }
            | AuthError::JwtEncode { .. }
            | AuthError::PasswordHash { .. } => {
                log::error!("Auth error: {}", e);
                ApiError::Internal {
                    message: "Authentication subsystem failure".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert core validation errors (bad enum values and the like) to 400s
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
