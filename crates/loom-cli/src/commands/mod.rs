//! CLI command implementations

pub mod component;
pub mod compose;
pub mod curate;
pub mod generate;
pub mod options;
pub mod slice;
pub mod translate;

use anyhow::{Context, Result};
use loom_gen::{LoomConfig, TranslationConfig};
use loom_translate::{google_factory, RetryPolicy, TranslationManager, TranslatorFactory};
use std::time::Duration;

pub(crate) fn load_config() -> Result<LoomConfig> {
    LoomConfig::load().context("Failed to load config")
}

pub(crate) fn retry_policy(config: &TranslationConfig) -> RetryPolicy {
    RetryPolicy {
        max_retries: config.max_retries,
        base_delay: Duration::from_millis(config.base_delay_ms),
        jitter: Duration::from_millis(config.jitter_ms),
        ..RetryPolicy::default()
    }
}

/// Google-backed manager sized and paced from `[translation]`
pub(crate) fn translation_manager(config: &LoomConfig) -> TranslationManager<impl TranslatorFactory> {
    TranslationManager::new(google_factory())
        .with_policy(retry_policy(&config.translation))
        .with_workers(config.translation.workers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_from_config() {
        let config = TranslationConfig {
            workers: 9,
            max_retries: 5,
            base_delay_ms: 250,
            jitter_ms: 0,
        };
        let policy = retry_policy(&config);
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.base_delay, Duration::from_millis(250));
        assert_eq!(policy.jitter, Duration::ZERO);
        assert_eq!(policy.pre_request, RetryPolicy::default().pre_request);
    }

    #[test]
    fn test_manager_clamps_workers() {
        let mut config = LoomConfig::default();
        config.translation.workers = 9;
        assert_eq!(translation_manager(&config).workers(), 5);
        config.translation.workers = 0;
        assert_eq!(translation_manager(&config).workers(), 3);
    }
}
