//! Offline provider that writes a placeholder PNG

use crate::provider::{GenerateResult, ImageProvider, ProviderStatus};
use loom_core::{ContentHash, LoomError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const MOCK_SIZE: u32 = 64;

/// Writes a solid-color square instead of calling a model
pub struct MockProvider {
    size: u32,
}

impl MockProvider {
    pub fn new() -> Self {
        Self { size: MOCK_SIZE }
    }

    pub fn with_size(size: u32) -> Self {
        Self { size: size.max(1) }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn health_check(&self) -> Result<ProviderStatus> {
        Ok(ProviderStatus::Available)
    }

    fn generate(&self, prompt: &str, name: &str, output_dir: &Path) -> Result<GenerateResult> {
        let start = std::time::Instant::now();
        std::fs::create_dir_all(output_dir)?;

        // Color derives from the prompt so different prompts are distinguishable.
        let output_path = write_solid_png(output_dir, name, prompt, self.size)?;

        let hash = ContentHash::from_file(&output_path)
            .map(|h| h.to_prefixed_hex())
            .ok();

        Ok(GenerateResult {
            output_path: output_path.to_string_lossy().to_string(),
            prompt_used: prompt.to_string(),
            provider: "mock".to_string(),
            duration_secs: start.elapsed().as_secs_f64(),
            content_hash: hash,
            mime_type: Some("image/png".to_string()),
            metadata: HashMap::new(),
        })
    }
}

fn write_solid_png(output_dir: &Path, name: &str, prompt: &str, size: u32) -> Result<PathBuf> {
    let hash_val = prompt
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let color = image::Rgba([
        ((hash_val >> 16) & 0xFF) as u8,
        ((hash_val >> 8) & 0xFF) as u8,
        (hash_val & 0xFF) as u8,
        255,
    ]);

    let path = output_dir.join(format!("{}.png", name));
    image::RgbaImage::from_pixel(size, size, color)
        .save(&path)
        .map_err(|e| LoomError::GenerationError(format!("Failed to save PNG: {}", e)))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("loom_mock_test_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_mock_provider_health() {
        assert_eq!(
            MockProvider::new().health_check().unwrap(),
            ProviderStatus::Available
        );
    }

    #[test]
    fn test_mock_generate_png() {
        let dir = temp_dir();
        let result = MockProvider::new()
            .generate("a rusted wrench", "wrench", &dir)
            .unwrap();

        assert!(result.output_path.ends_with("wrench.png"));
        assert_eq!(result.provider, "mock");
        assert_eq!(result.prompt_used, "a rusted wrench");
        assert!(result.content_hash.unwrap().starts_with("sha256:"));

        let img = image::open(&result.output_path).unwrap();
        assert_eq!((img.width(), img.height()), (MOCK_SIZE, MOCK_SIZE));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_prompt_drives_color() {
        let dir = temp_dir();
        let provider = MockProvider::with_size(2);
        let a = provider.generate("first prompt", "a", &dir).unwrap();
        let b = provider.generate("second prompt", "b", &dir).unwrap();
        assert_ne!(a.content_hash, b.content_hash);
        std::fs::remove_dir_all(&dir).ok();
    }
}
