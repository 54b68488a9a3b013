//! Image provider trait and result types

use loom_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A finished image on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Where the image was written
    pub output_path: String,
    /// The prompt that was sent to the provider
    pub prompt_used: String,
    /// Provider name
    pub provider: String,
    /// Generation time in seconds
    pub duration_secs: f64,
    /// Content hash (sha256:...)
    #[serde(default)]
    pub content_hash: Option<String>,
    /// MIME type reported by the provider
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Extra provider details (e.g. model id)
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Whether a provider can take requests right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Available,
    Unavailable(String),
    NoApiKey,
}

/// Trait implemented by each image provider (Gemini, Mock)
pub trait ImageProvider: Send {
    /// Provider name (e.g. "gemini", "mock")
    fn name(&self) -> &str;

    /// Check if the provider is usable (API key set)
    fn health_check(&self) -> Result<ProviderStatus>;

    /// Generate one image for `prompt`, saved as `<name>.<ext>` in `output_dir`
    fn generate(&self, prompt: &str, name: &str, output_dir: &Path) -> Result<GenerateResult>;
}

/// File extension for an image MIME type (PNG when unknown)
pub fn extension_for_mime(mime_type: Option<&str>) -> &'static str {
    match mime_type.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
        Some("image/jpeg") | Some("image/jpg") => "jpg",
        Some("image/webp") => "webp",
        _ => "png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_mime() {
        assert_eq!(extension_for_mime(Some("image/jpeg")), "jpg");
        assert_eq!(extension_for_mime(Some("IMAGE/WEBP")), "webp");
        assert_eq!(extension_for_mime(Some("image/png")), "png");
        assert_eq!(extension_for_mime(None), "png");
    }
}
