//! OpenAPI specification for the review service

use utoipa::OpenApi;

use crate::{
    error::ErrorResponse,
    routes::{
        health::{HealthResponse, HealthStatus, SimpleHealthResponse},
        review::{ReviewRequest, ReviewResponse},
    },
};

/// OpenAPI specification for the review backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snippet Review API",
        version = "1.0.0",
        description = "Submits code snippets to a generative model with a fixed review prompt"
    ),
    paths(
        crate::routes::review::review,
        crate::routes::health::health_check,
        crate::routes::health::liveness_check
    ),
    components(
        schemas(
            ReviewRequest,
            ReviewResponse,
            ErrorResponse,
            HealthStatus,
            HealthResponse,
            SimpleHealthResponse,
        )
    ),
    tags(
        (name = "Review", description = "Code review endpoint"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ReviewApiDoc;
