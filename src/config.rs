//! Configuration management for the review service
//!
//! Configuration is loaded from environment variables (optionally seeded from
//! a `.env` file by the binary).

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::review::PromptTemplate;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Gemini API key (required)
    pub gemini_api_key: String,
    /// Model used for generation
    pub gemini_model: String,
    /// HTTP client timeout for the generation call (in seconds)
    pub gemini_timeout_seconds: u64,

    /// Instruction template prepended to submitted code
    pub prompt: PromptTemplate,

    /// Directory with frontend assets, served at `/` when set
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = match lookup("GEMINI_API_KEY") {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!(
                "GEMINI_API_KEY not found. Please set it in the environment or a .env file."
            ),
        };

        let prompt = match lookup("REVIEW_PROMPT") {
            Some(name) => name
                .parse()
                .with_context(|| format!("Invalid REVIEW_PROMPT: {}", name))?,
            None => PromptTemplate::default(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse()
                .context("Invalid PORT")?,

            gemini_api_url: lookup("GEMINI_API_URL")
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
                .trim_end_matches('/')
                .to_string(),
            gemini_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.5-flash".to_string()),
            gemini_timeout_seconds: lookup("GEMINI_TIMEOUT_SECONDS")
                .unwrap_or_else(|| "120".to_string())
                .parse()
                .context("Invalid GEMINI_TIMEOUT_SECONDS")?,

            prompt,

            static_dir: lookup("STATIC_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
