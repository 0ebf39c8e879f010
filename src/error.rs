//! Error types for the review service
//!
//! Every failure is converted into the flat `{ "error", "details"? }` JSON
//! envelope at the endpoint boundary.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned when the request carries no usable code.
pub const NO_CODE_MESSAGE: &str = "No code provided.";

/// Message returned when the generation API could not produce a review.
pub const EXTERNAL_FAILURE_MESSAGE: &str = "Failed to get review from AI.";

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No code provided.")]
    NoCodeProvided,

    #[error("External call failed: {0}")]
    ExternalCallFailed(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ExternalCallFailed(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "No code provided.")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// HTTP status this error is surfaced with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoCodeProvided | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalCallFailed(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Body sent to the caller
    pub fn to_body(&self) -> ErrorResponse {
        match self {
            AppError::NoCodeProvided => ErrorResponse {
                error: NO_CODE_MESSAGE.to_string(),
                details: None,
            },
            AppError::ExternalCallFailed(cause) => ErrorResponse {
                error: EXTERNAL_FAILURE_MESSAGE.to_string(),
                details: Some(cause.clone()),
            },
            AppError::BadRequest(msg) => ErrorResponse {
                error: msg.clone(),
                details: None,
            },
            AppError::Internal(err) => ErrorResponse {
                error: "Internal server error".to_string(),
                details: Some(err.to_string()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
