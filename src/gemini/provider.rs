//! Generation backend abstraction
//!
//! Defines the trait interface for the external generation call so the review
//! flow can be exercised against any backend.

use async_trait::async_trait;

use crate::{error::AppResult, review::ExternalResponse};

/// Trait defining the interface for generation backends
///
/// Implementations perform exactly one outbound call per `generate` and never
/// retry. Every failure is reported as an error rather than a panic.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Model name for logging and health output
    fn name(&self) -> &str;

    /// Send `prompt` as a single user turn and return the raw response
    async fn generate(&self, prompt: &str) -> AppResult<ExternalResponse>;
}
