//! Gemini API client
//!
//! HTTP client for the `generateContent` endpoint of the Gemini REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    gemini::{models::GenerateContentRequest, provider::GenerativeModel},
    review::ExternalResponse,
};

/// Gemini API client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.clone(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// Build the shared HTTP client with the configured timeout
    pub fn http_client(config: &Config) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(config.gemini_timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e)))
    }

    /// URL of the `generateContent` call for the configured model
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Build headers for Gemini requests
    fn api_key_headers(&self) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            AppError::ExternalCallFailed("GEMINI_API_KEY is not a valid header value".to_string())
        })?;
        headers.insert("x-goog-api-key", key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> AppResult<ExternalResponse> {
        let url = self.generate_url();
        let request = GenerateContentRequest::user_prompt(prompt);

        debug!(url = %url, "Sending prompt to Gemini");

        let response = self
            .client
            .post(&url)
            .headers(self.api_key_headers()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to Gemini");
                AppError::ExternalCallFailed(e.to_string())
            })?;

        let status = response.status();
        debug!(status = %status, "Gemini response status");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, body = %text, "Gemini request failed");
            return Err(AppError::ExternalCallFailed(format!(
                "Gemini API error {}: {}",
                status, text
            )));
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %body, "Failed to parse Gemini response");
            AppError::ExternalCallFailed(format!("Failed to parse Gemini response: {}", e))
        })?;

        Ok(ExternalResponse::new(value))
    }
}
