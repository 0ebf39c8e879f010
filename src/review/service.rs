//! Review orchestration
//!
//! Validates the submitted code, builds the prompt, performs exactly one
//! generation call and normalizes whatever comes back.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument};

use crate::{
    error::{AppError, AppResult},
    gemini::GenerativeModel,
    review::{normalizer, PromptTemplate},
};

/// Runs reviews against a generation backend
#[derive(Clone)]
pub struct ReviewService {
    model: Arc<dyn GenerativeModel>,
    template: PromptTemplate,
}

impl ReviewService {
    pub fn new(model: Arc<dyn GenerativeModel>, template: PromptTemplate) -> Self {
        Self { model, template }
    }

    pub fn template(&self) -> PromptTemplate {
        self.template
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Review `code` and return the model's text
    ///
    /// Blank input is rejected before anything is sent upstream. The code is
    /// forwarded untrimmed.
    #[instrument(skip(self, code), fields(code_len = code.len(), prompt = %self.template))]
    pub async fn submit_for_review(&self, code: &str) -> AppResult<String> {
        if code.trim().is_empty() {
            return Err(AppError::NoCodeProvided);
        }

        let prompt = self.template.build(code);
        let start = Instant::now();

        let response = self.model.generate(&prompt).await.map_err(|e| {
            error!(error = %e, model = %self.model.name(), "Generation call failed");
            match e {
                AppError::ExternalCallFailed(_) => e,
                other => AppError::ExternalCallFailed(other.to_string()),
            }
        })?;

        let review = normalizer::normalize(&response).await;

        info!(
            model = %self.model.name(),
            review_len = review.len(),
            duration_ms = %format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0),
            "Review generated"
        );

        Ok(review)
    }
}
