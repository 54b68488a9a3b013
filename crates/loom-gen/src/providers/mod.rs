//! Provider registry
//!
//! Maps provider names to concrete implementations.

pub mod gemini;
pub mod mock;

use crate::config::LoomConfig;
use crate::provider::ImageProvider;
use loom_core::{LoomError, Result};

/// Create a provider by name with configuration
pub fn create_provider(name: &str, config: &LoomConfig) -> Result<Box<dyn ImageProvider>> {
    if !config.is_enabled(name) {
        return Err(LoomError::GenerationError(format!(
            "Provider '{}' is disabled in config",
            name
        )));
    }
    match name {
        "mock" => Ok(Box::new(mock::MockProvider::new())),
        "gemini" => Ok(Box::new(gemini::GeminiProvider::from_config(config)?)),
        _ => Err(LoomError::GenerationError(format!(
            "Unknown provider '{}'. Available: {}",
            name,
            available_providers().join(", ")
        ))),
    }
}

/// List all available provider names
pub fn available_providers() -> Vec<&'static str> {
    vec!["mock", "gemini"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    #[test]
    fn test_create_known_and_unknown() {
        let config = LoomConfig::default();
        assert_eq!(create_provider("mock", &config).unwrap().name(), "mock");
        assert!(create_provider("flux", &config).is_err());
    }

    #[test]
    fn test_disabled_provider_is_rejected() {
        let mut config = LoomConfig::default();
        config.providers.insert(
            "mock".to_string(),
            ProviderConfig {
                enabled: false,
                ..ProviderConfig::default()
            },
        );
        assert!(create_provider("mock", &config).is_err());
    }

    #[test]
    fn test_gemini_from_config() {
        let mut config = LoomConfig::default();
        config.providers.insert(
            "gemini".to_string(),
            ProviderConfig {
                api_key: Some("test-key".to_string()),
                model: Some("nano-banana".to_string()),
                ..ProviderConfig::default()
            },
        );
        let provider = create_provider("gemini", &config).unwrap();
        assert_eq!(provider.name(), "gemini");
    }
}
