//! Common test utilities for the review backend
//!
//! Shared configuration builders, a scripted generation backend and a
//! router harness used across the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;

use snippet_review::{
    error::{AppError, AppResult},
    review::TextProducer,
    routes, AppState, Config, ExternalResponse, GenerativeModel,
};

/// Test configuration constants
pub mod constants {
    pub use crate::mocks::{MOCK_API_KEY, MOCK_MODEL};

    /// Snippet used by most scenarios
    pub const SAMPLE_CODE: &str = "let x = 1;";
}

/// Build a config from key/value pairs on top of a test API key
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("GEMINI_API_KEY".to_string(), constants::MOCK_API_KEY.to_string());
    vars.insert("GEMINI_MODEL".to_string(), constants::MOCK_MODEL.to_string());
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    Config::from_lookup(|key| vars.get(key).cloned()).expect("Failed to build test config")
}

/// What a [`ScriptedModel`] answers with
#[derive(Clone)]
pub enum Reply {
    Body(Value),
    Deferred(Value, String),
    Fail(String),
}

/// Generation backend that records prompts and replays a fixed reply
pub struct ScriptedModel {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

struct StaticText(String);

#[async_trait]
impl TextProducer for StaticText {
    async fn text(&self) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> AppResult<ExternalResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Body(body) => Ok(ExternalResponse::new(body.clone())),
            Reply::Deferred(body, text) => Ok(ExternalResponse::with_deferred_text(
                body.clone(),
                Arc::new(StaticText(text.clone())),
            )),
            Reply::Fail(message) => Err(AppError::ExternalCallFailed(message.clone())),
        }
    }
}

/// Router plus the scripted backend behind it
pub struct ScriptedHarness {
    pub server: TestServer,
    pub model: Arc<ScriptedModel>,
}

impl ScriptedHarness {
    pub fn new(reply: Reply) -> Self {
        Self::with_config(reply, test_config(&[]))
    }

    pub fn with_config(reply: Reply, config: Config) -> Self {
        let model = ScriptedModel::new(reply);
        let state = Arc::new(AppState::new_for_testing(config, model.clone()));
        let server =
            TestServer::new(routes::create_router(state)).expect("Failed to create test server");
        Self { server, model }
    }
}

/// Router wired to the real Gemini client pointing at `api_url`
pub fn gemini_server(api_url: &str) -> TestServer {
    let config = test_config(&[("GEMINI_API_URL", api_url)]);
    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
    TestServer::new(routes::create_router(state)).expect("Failed to create test server")
}
