//! Gemini integration
//!
//! The generation backend trait and its Gemini REST implementation.

pub mod client;
pub mod models;
pub mod provider;

pub use client::GeminiClient;
pub use provider::GenerativeModel;
