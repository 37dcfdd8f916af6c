//! Axum-specific error types and mappings.
//!
//! Maps the core port errors (`FetchError`, `StoreError`) to HTTP status
//! codes and JSON response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use bchelper_core::{FetchError, StoreError};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (missing or invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Internal server error with captured diagnostic text.
    #[error("Internal error: {message}")]
    InternalWithDetails {
        message: String,
        /// Best-effort diagnostics (e.g. the downloader's stderr).
        details: String,
    },
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Optional diagnostic text for external-process failures
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
            Self::InternalWithDetails { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, Some(details))
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<FetchError> for HttpError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::TimedOut(_) => Self::Internal("Download timed out".to_string()),
            FetchError::Failed { stderr } => Self::InternalWithDetails {
                message: "Download failed".to_string(),
                details: stderr,
            },
            FetchError::Spawn(msg) => Self::InternalWithDetails {
                message: "Download failed".to_string(),
                details: msg,
            },
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        // Both variants display as the raw database error text.
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_the_fixed_message() {
        let err: HttpError = FetchError::TimedOut(300).into();
        match err {
            HttpError::Internal(msg) => assert_eq!(msg, "Download timed out"),
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn process_failure_keeps_stderr_as_details() {
        let err: HttpError = FetchError::Failed {
            stderr: "ERROR: unable to extract".to_string(),
        }
        .into();
        match err {
            HttpError::InternalWithDetails { message, details } => {
                assert_eq!(message, "Download failed");
                assert_eq!(details, "ERROR: unable to extract");
            }
            other => panic!("expected InternalWithDetails, got {other:?}"),
        }
    }

    #[test]
    fn store_error_surfaces_raw_text() {
        let err: HttpError =
            StoreError::Storage("relation \"songs\" does not exist".to_string()).into();
        match err {
            HttpError::Internal(msg) => assert_eq!(msg, "relation \"songs\" does not exist"),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
