//! API Documentation module
//!
//! Provides OpenAPI specification generation using utoipa.

mod openapi;

pub use openapi::ReviewApiDoc;
