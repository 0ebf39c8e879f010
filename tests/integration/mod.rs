//! Integration tests for the review backend
//!
//! These tests drive the full router, from JSON body to response envelope,
//! with the generation backend either scripted in-process or served by wiremock.

mod health;
