//! Response-shape normalization
//!
//! The generation API has packaged its text differently across versions and
//! SDKs. [`normalize`] turns any of the known shapes into one display string:
//!
//! 1. `response.text` (plain string, or a deferred producer)
//! 2. `candidates[0].content.parts[0].text`
//! 3. `output[0].content[0].text`
//! 4. top-level `text`
//! 5. the response itself, when it is a string
//!
//! The first shape yielding a string wins. The nested `candidates` and
//! `output` paths also require the string to be non-empty; the others accept
//! an empty string as the answer. When nothing matches the whole response is
//! pretty-printed instead, so callers always get some text.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppResult;

/// A zero-argument asynchronous text accessor exposed as `response.text`
#[async_trait]
pub trait TextProducer: Send + Sync {
    async fn text(&self) -> AppResult<String>;
}

/// Opaque result of one generation call
#[derive(Clone)]
pub struct ExternalResponse {
    body: Value,
    deferred_text: Option<Arc<dyn TextProducer>>,
}

/// What `response.text` holds, if anything
pub enum TextAccessor<'a> {
    StringValue(&'a str),
    AsyncTextProducer(&'a dyn TextProducer),
    Absent,
}

impl ExternalResponse {
    /// Wrap a decoded JSON response
    pub fn new(body: Value) -> Self {
        Self {
            body,
            deferred_text: None,
        }
    }

    /// Wrap a response whose `response.text` is only available on demand
    pub fn with_deferred_text(body: Value, producer: Arc<dyn TextProducer>) -> Self {
        Self {
            body,
            deferred_text: Some(producer),
        }
    }

    /// Capability check for shape 1
    ///
    /// A deferred producer shadows a plain `response.text` string; the string
    /// is only consulted again if the producer fails.
    pub fn response_text(&self) -> TextAccessor<'_> {
        if let Some(producer) = &self.deferred_text {
            return TextAccessor::AsyncTextProducer(producer.as_ref());
        }
        match plain_response_text(&self.body) {
            Some(text) => TextAccessor::StringValue(text),
            None => TextAccessor::Absent,
        }
    }
}

impl fmt::Debug for ExternalResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalResponse")
            .field("body", &self.body)
            .field("deferred_text", &self.deferred_text.is_some())
            .finish()
    }
}

/// A pure extraction strategy over the JSON body
type Strategy = fn(&Value) -> Option<&str>;

/// Shapes 2 to 5, in priority order
const STRATEGIES: &[(&str, Strategy)] = &[
    ("candidates", candidate_part_text),
    ("output", output_content_text),
    ("text", top_level_text),
    ("string", bare_string),
];

fn plain_response_text(body: &Value) -> Option<&str> {
    body.pointer("/response/text")?.as_str()
}

fn candidate_part_text(body: &Value) -> Option<&str> {
    non_empty(body.pointer("/candidates/0/content/parts/0/text")?.as_str()?)
}

fn output_content_text(body: &Value) -> Option<&str> {
    non_empty(body.pointer("/output/0/content/0/text")?.as_str()?)
}

fn top_level_text(body: &Value) -> Option<&str> {
    body.get("text")?.as_str()
}

fn bare_string(body: &Value) -> Option<&str> {
    body.as_str()
}

fn non_empty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

/// Try the synchronous shapes only (everything but a deferred producer)
pub fn extract_text(response: &ExternalResponse) -> Option<String> {
    if let Some(text) = plain_response_text(&response.body) {
        debug!(shape = "response.text", "Matched response shape");
        return Some(text.to_string());
    }

    STRATEGIES.iter().find_map(|(shape, strategy)| {
        strategy(&response.body).map(|text| {
            debug!(shape = %shape, "Matched response shape");
            text.to_string()
        })
    })
}

/// Pretty-printed rendering of the whole response with sorted keys
pub fn serialize_fallback(body: &Value) -> String {
    let sorted = sort_keys(body);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| sorted.to_string())
}

// serde_json keeps insertion order when `preserve_order` is enabled anywhere
// in the build, so rebuild every object with its keys inserted in order.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Produce the review text for `response`
///
/// Never fails: a deferred producer that errors is skipped like a missing
/// field, and an unrecognized shape is serialized.
pub async fn normalize(response: &ExternalResponse) -> String {
    if let TextAccessor::AsyncTextProducer(producer) = response.response_text() {
        match producer.text().await {
            Ok(text) => {
                debug!(shape = "response.text()", "Matched response shape");
                return text;
            }
            Err(e) => warn!(error = %e, "Deferred response text failed, trying other shapes"),
        }
    }

    if let Some(text) = extract_text(response) {
        return text;
    }

    warn!("Unrecognized response shape, returning serialized response");
    serialize_fallback(&response.body)
}
