//! Code review core
//!
//! Prompt construction, the review flow and response normalization.

pub mod normalizer;
pub mod prompt;
pub mod service;

pub use normalizer::{normalize, ExternalResponse, TextAccessor, TextProducer};
pub use prompt::PromptTemplate;
pub use service::ReviewService;
