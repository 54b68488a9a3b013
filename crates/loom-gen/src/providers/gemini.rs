//! Gemini / Imagen image generation provider
//!
//! Posts the prompt to `generateContent` and decodes the first inline image
//! of the response. Image models answer within ~90s, so `generate()` blocks.

use crate::config::LoomConfig;
use crate::provider::{extension_for_mime, GenerateResult, ImageProvider, ProviderStatus};
use base64::{engine::general_purpose, Engine as _};
use loom_core::{ContentHash, LoomError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
const REQUEST_TIMEOUT_SECS: u64 = 90;
const MAX_RETRIES: usize = 3;
const RETRY_BASE_DELAY_MS: u64 = 1000;
const MAX_RESPONSE_BYTES: u64 = 64 * 1024 * 1024;
const TEMPERATURE: f64 = 0.7;

/// Models known to return inline images
pub const IMAGE_MODELS: &[&str] = &[
    "gemini-2.0-flash-exp-image-generation",
    "gemini-2.5-flash-image",
    "gemini-3-pro-image-preview",
    "nano-banana",
    "nano-banana-pro-preview",
    "imagen-4.0-generate-preview-06-06",
    "imagen-4.0-ultra-generate-preview-06-06",
    "imagen-4.0-generate-001",
    "imagen-4.0-ultra-generate-001",
    "imagen-4.0-fast-generate-001",
];

/// Prefix a bare model id with `models/`
pub fn normalize_model_name(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

pub struct GeminiProvider {
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL);
        Self {
            api_key: api_key.to_string(),
            api_url: DEFAULT_GEMINI_URL.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &LoomConfig) -> Result<Self> {
        let api_key = config.api_key("gemini").ok_or_else(|| {
            LoomError::GenerationError(
                "Gemini API key not configured. Set LOOM_GEMINI_API_KEY or add to .loom/config.toml"
                    .to_string(),
            )
        })?;

        let mut provider = Self::new(api_key, config.model("gemini"));
        if let Some(url) = config.api_url("gemini") {
            provider.api_url = url.trim_end_matches('/').to_string();
        }
        Ok(provider)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_url,
            normalize_model_name(&self.model)
        )
    }

    fn post_json_with_retry(&self, payload: &Value) -> Result<Value> {
        let url = self.endpoint();
        for attempt in 0..MAX_RETRIES {
            let agent = build_agent();
            let response = agent
                .post(&url)
                .query("key", &self.api_key)
                .header("Content-Type", "application/json")
                .send_json(payload);

            match response {
                Ok(mut ok) => {
                    let bytes = ok
                        .body_mut()
                        .with_config()
                        .limit(MAX_RESPONSE_BYTES)
                        .read_to_vec()
                        .map_err(|e| {
                            LoomError::GenerationError(format!(
                                "Failed to read Gemini response: {}",
                                e
                            ))
                        })?;
                    return serde_json::from_slice(&bytes).map_err(|e| {
                        LoomError::GenerationError(format!(
                            "Failed to parse Gemini response: {}",
                            e
                        ))
                    });
                }
                Err(e) => {
                    if attempt + 1 < MAX_RETRIES && is_retryable_error(&e) {
                        tracing::debug!("Gemini request failed ({}), retrying", e);
                        sleep_backoff(attempt);
                        continue;
                    }
                    return Err(LoomError::GenerationError(format!(
                        "Gemini API request failed: {}",
                        e
                    )));
                }
            }
        }

        Err(LoomError::GenerationError(
            "Gemini API request failed after retries".to_string(),
        ))
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build();
    config.into()
}

fn is_retryable_error(e: &ureq::Error) -> bool {
    match e {
        ureq::Error::Timeout(_)
        | ureq::Error::Io(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound => true,
        ureq::Error::StatusCode(code) => matches!(code, 408 | 429 | 500 | 502 | 503 | 504),
        _ => false,
    }
}

fn sleep_backoff(attempt: usize) {
    let delay_ms = RETRY_BASE_DELAY_MS.saturating_mul(1u64 << attempt);
    std::thread::sleep(Duration::from_millis(delay_ms));
}

/// Single-turn text request
pub fn build_payload(prompt: &str) -> Value {
    serde_json::json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt }]
            }
        ],
        "generationConfig": {
            "temperature": TEMPERATURE
        }
    })
}

/// First inline image of a `generateContent` response, with its MIME type
pub fn extract_image(response: &Value) -> Result<(Vec<u8>, Option<String>)> {
    let parts = response
        .get("candidates")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|c| c.pointer("/content/parts").and_then(Value::as_array))
        .flatten();

    let mut texts = Vec::new();
    for part in parts {
        if let Some(inline) = part.get("inlineData") {
            let Some(data) = inline.get("data").and_then(Value::as_str).filter(|d| !d.is_empty()) else {
                continue;
            };
            let bytes = general_purpose::STANDARD.decode(data).map_err(|e| {
                LoomError::GenerationError(format!("Invalid base64 image data: {}", e))
            })?;
            let mime = inline
                .get("mimeType")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Ok((bytes, mime));
        }
        if let Some(text) = part.get("text").and_then(Value::as_str) {
            texts.push(text.trim().to_string());
        }
    }

    let mut message = "No image data returned. Check model or prompt.".to_string();
    if let Some(reason) = response
        .pointer("/promptFeedback/blockReason")
        .and_then(Value::as_str)
    {
        message.push_str(&format!(" Blocked: {}.", reason));
    }
    if !texts.is_empty() {
        message.push_str(&format!(" Model said: {}", texts.join(" ")));
    }
    Err(LoomError::GenerationError(message))
}

impl ImageProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn health_check(&self) -> Result<ProviderStatus> {
        if self.api_key.trim().is_empty() {
            return Ok(ProviderStatus::NoApiKey);
        }
        Ok(ProviderStatus::Available)
    }

    fn generate(&self, prompt: &str, name: &str, output_dir: &Path) -> Result<GenerateResult> {
        if self.api_key.trim().is_empty() {
            return Err(LoomError::GenerationError("Missing API key.".to_string()));
        }
        let start = std::time::Instant::now();
        std::fs::create_dir_all(output_dir)?;

        tracing::info!("Requesting image '{}' from {}", name, self.model);
        let response = self.post_json_with_retry(&build_payload(prompt))?;
        let (bytes, mime_type) = extract_image(&response)?;

        let output_path = output_dir.join(format!(
            "{}.{}",
            name,
            extension_for_mime(mime_type.as_deref())
        ));
        std::fs::write(&output_path, &bytes)?;

        let mut metadata = HashMap::new();
        metadata.insert("model".to_string(), self.model.clone());

        Ok(GenerateResult {
            output_path: output_path.to_string_lossy().to_string(),
            prompt_used: prompt.to_string(),
            provider: "gemini".to_string(),
            duration_secs: start.elapsed().as_secs_f64(),
            content_hash: Some(ContentHash::from_bytes(&bytes).to_prefixed_hex()),
            mime_type,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_model_name() {
        assert_eq!(normalize_model_name("nano-banana"), "models/nano-banana");
        assert_eq!(
            normalize_model_name("models/imagen-4.0-generate-001"),
            "models/imagen-4.0-generate-001"
        );
    }

    #[test]
    fn test_endpoint_and_default_model() {
        let provider = GeminiProvider::new("k", Some("  "));
        assert_eq!(provider.model(), DEFAULT_MODEL);
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp-image-generation:generateContent"
        );
        assert!(IMAGE_MODELS.contains(&DEFAULT_MODEL));
    }

    #[test]
    fn test_payload_shape() {
        let payload = build_payload("a wrench");
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "a wrench");
        assert_eq!(payload["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn test_extract_first_inline_image() {
        let data = general_purpose::STANDARD.encode(b"\x89PNG fake");
        let response = serde_json::json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "Here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": data } }
                ]}
            }]
        });
        let (bytes, mime) = extract_image(&response).unwrap();
        assert_eq!(bytes, b"\x89PNG fake");
        assert_eq!(mime.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_extract_reports_text_only_reply() {
        let response = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "I cannot draw that." }] } }],
            "promptFeedback": { "blockReason": "SAFETY" }
        });
        let err = extract_image(&response).unwrap_err().to_string();
        assert!(err.contains("No image data returned"));
        assert!(err.contains("SAFETY"));
        assert!(err.contains("I cannot draw that."));

        assert!(extract_image(&serde_json::json!({})).is_err());
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = LoomConfig::default();
        assert!(GeminiProvider::from_config(&config).is_err());
    }
}
