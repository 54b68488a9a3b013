//! Google Translate web endpoint client

use crate::translator::{Translator, TranslatorFactory};
use loom_core::{LoomError, Result};
use serde_json::Value;
use std::time::Duration;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Translates to English through the public `translate_a/single` endpoint
pub struct GoogleWebTranslator {
    agent: ureq::Agent,
    source: String,
    target: String,
}

impl GoogleWebTranslator {
    /// Auto-detected source language, English target
    pub fn new() -> Self {
        Self::with_languages("auto", "en")
    }

    pub fn with_languages(source: &str, target: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .build();
        Self {
            agent: config.into(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

impl Default for GoogleWebTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for GoogleWebTranslator {
    fn translate(&self, text: &str) -> Result<String> {
        let mut response = self
            .agent
            .get(TRANSLATE_URL)
            .query("client", "gtx")
            .query("sl", &self.source)
            .query("tl", &self.target)
            .query("dt", "t")
            .query("q", text)
            .call()
            .map_err(|e| LoomError::TranslationError(format!("Translate request failed: {}", e)))?;

        let body: Value = response.body_mut().read_json().map_err(|e| {
            LoomError::TranslationError(format!("Failed to parse translate response: {}", e))
        })?;
        parse_response(&body)
    }
}

/// Concatenate the translated segments of a `translate_a/single` response.
///
/// The payload is `[[["translated", "source", ...], ...], ...]`.
fn parse_response(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| LoomError::TranslationError("Unexpected translate response".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(LoomError::TranslationError(
            "Translate response contained no text".to_string(),
        ));
    }
    Ok(text)
}

/// Factory handing each worker its own [`GoogleWebTranslator`]
pub fn google_factory() -> impl TranslatorFactory {
    || -> Result<Box<dyn Translator>> { Ok(Box::new(GoogleWebTranslator::new())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multi_segment_response() {
        let body = serde_json::json!([
            [["Plasma cannon. ", "等离子炮。", null, null, 10], ["Heavy armor", "重型装甲", null]],
            null,
            "zh-CN"
        ]);
        assert_eq!(parse_response(&body).unwrap(), "Plasma cannon. Heavy armor");
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        assert!(parse_response(&serde_json::json!({"error": "nope"})).is_err());
        assert!(parse_response(&serde_json::json!([[]])).is_err());
    }
}
