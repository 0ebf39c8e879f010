//! Review endpoint
//!
//! `POST /review` takes `{ "code": "..." }` and answers with
//! `{ "review": "..." }` or an error envelope.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    routes::metrics::record_request,
    AppState,
};

/// Review request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReviewRequest {
    /// Code snippet to review; missing is treated like blank
    #[serde(default)]
    #[schema(example = "let x = 1;")]
    pub code: Option<String>,
}

/// Successful review body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ReviewResponse {
    #[schema(example = "- Issue: Variable 'x' is unclear.\n  Suggestion: Rename 'x' to 'count'.")]
    pub review: String,
}

/// Handler for POST /review
#[utoipa::path(
    post,
    path = "/review",
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review text from the model", body = ReviewResponse),
        (status = 400, description = "No code provided or malformed body", body = ErrorResponse),
        (status = 500, description = "Generation call failed", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn review(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> AppResult<Json<ReviewResponse>> {
    let start_time = Instant::now();

    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected review request body");
        record_request("rejected", start_time.elapsed().as_secs_f64());
        AppError::from(rejection)
    })?;
    let code = request.code.unwrap_or_default();

    let result = state.reviewer.submit_for_review(&code).await;

    let duration = start_time.elapsed().as_secs_f64();
    let status_label = match &result {
        Ok(_) => "success",
        Err(AppError::NoCodeProvided) => "rejected",
        Err(_) => "error",
    };
    record_request(status_label, duration);

    info!(
        status = %status_label,
        code_len = code.len(),
        duration_ms = %format!("{:.2}", duration * 1000.0),
        "Review request completed"
    );

    result.map(|review| Json(ReviewResponse { review }))
}
