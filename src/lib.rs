//! Snippet Review - AI code review backend
//!
//! This library exposes a single review endpoint that wraps user code in a
//! fixed review prompt, sends it to Gemini and relays the model's text.

pub mod config;
pub mod docs;
pub mod error;
pub mod gemini;
pub mod review;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::gemini::{GeminiClient, GenerativeModel};
pub use crate::review::{ExternalResponse, PromptTemplate, ReviewService};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Review flow bound to the generation backend
    pub reviewer: ReviewService,
}

impl AppState {
    /// Create a new application state backed by Gemini
    pub fn new(config: Config) -> Result<Self> {
        let http_client = GeminiClient::http_client(&config)?;
        let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::new(http_client, &config));

        Ok(Self::with_model(config, model))
    }

    fn with_model(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        let reviewer = ReviewService::new(model, config.prompt);
        Self {
            config,
            start_time: Instant::now(),
            reviewer,
        }
    }

    /// Create a new application state with an injected generation backend
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        Self::with_model(config, model)
    }
}
