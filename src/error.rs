//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Domain error carried to the client as `{error_code, error_message}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: &'static str,
}

impl ApiError {
    /// Structured error rendered with 400.
    pub const fn bad_request(code: &'static str, message: &'static str) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code,
            message,
        }
    }

    pub const fn not_found(code: &'static str, message: &'static str) -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            code,
            message,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Body could not be read; keeps the extractor's status (e.g. 413 over the size limit).
    #[error("rejected body ({0}): {1}")]
    Rejected(StatusCode, String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error_code: &'static str,
    pub error_message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Api(e) => (
                e.status,
                Json(ErrorBody {
                    error_code: e.code,
                    error_message: e.message,
                }),
            )
                .into_response(),
            AppError::NotFound(reason) => {
                tracing::debug!(%reason, "not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::Conflict(reason) => {
                tracing::debug!(%reason, "conflict");
                StatusCode::CONFLICT.into_response()
            }
            AppError::BadRequest(reason) => {
                tracing::debug!(%reason, "bad request");
                StatusCode::BAD_REQUEST.into_response()
            }
            AppError::Rejected(status, reason) => {
                tracing::debug!(%status, %reason, "request body rejected");
                status.into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "store failure, unit of work rolled back");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
