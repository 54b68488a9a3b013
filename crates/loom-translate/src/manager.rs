//! Batch translation over a small worker pool

use crate::cache::TranslationCache;
use crate::retry::{looks_like_error, RetryPolicy};
use crate::translator::{TranslateText, Translator, TranslatorFactory};
use loom_core::LoomError;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;

pub const MIN_WORKERS: usize = 3;
pub const DEFAULT_WORKERS: usize = 3;
pub const MAX_WORKERS: usize = 5;

/// Translates batches of text, caching every successful result.
///
/// Each worker thread opens its own client from the factory; clients are
/// never shared between threads.
pub struct TranslationManager<F: TranslatorFactory> {
    factory: F,
    cache: TranslationCache,
    policy: RetryPolicy,
    workers: usize,
}

impl<F: TranslatorFactory> TranslationManager<F> {
    /// Manager with a fresh, private cache
    pub fn new(factory: F) -> Self {
        Self::with_cache(factory, TranslationCache::new())
    }

    /// Manager backed by an existing (possibly shared) cache
    pub fn with_cache(factory: F, cache: TranslationCache) -> Self {
        Self {
            factory,
            cache,
            policy: RetryPolicy::default(),
            workers: DEFAULT_WORKERS,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the pool size (clamped to 3..=5)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.clamp(MIN_WORKERS, MAX_WORKERS);
        self
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Translate one text; the original comes back on failure
    pub fn translate_one(&self, text: &str) -> String {
        self.translate_many(&[text.to_string()])
            .pop()
            .unwrap_or_else(|| text.to_string())
    }

    /// Translate a batch, preserving order and length.
    ///
    /// Blank strings pass through, cached texts never reach a client, and
    /// duplicates inside the batch are requested once.
    pub fn translate_many(&self, texts: &[String]) -> Vec<String> {
        let mut results: Vec<Option<String>> = Vec::with_capacity(texts.len());
        let mut pending: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        for text in texts {
            if text.trim().is_empty() {
                results.push(Some(text.clone()));
            } else if let Some(hit) = self.cache.get(text) {
                tracing::debug!("Translation cache hit for '{}'", text);
                results.push(Some(hit));
            } else {
                if seen.insert(text.as_str()) {
                    pending.push(text.clone());
                }
                results.push(None);
            }
        }

        if pending.is_empty() {
            return results.into_iter().flatten().collect();
        }

        let translated = self.run_workers(&pending);
        for (source, translation) in &translated {
            self.cache.insert(source, translation);
        }

        texts
            .iter()
            .zip(results)
            .map(|(text, done)| {
                done.or_else(|| translated.get(text).cloned())
                    .unwrap_or_else(|| text.clone())
            })
            .collect()
    }

    fn run_workers(&self, pending: &[String]) -> HashMap<String, String> {
        let worker_count = self.workers.min(pending.len()).max(1);
        let next = AtomicUsize::new(0);
        let (tx, rx) = mpsc::channel::<(usize, Option<String>)>();

        tracing::debug!(
            "Translating {} text(s) with {} worker(s)",
            pending.len(),
            worker_count
        );

        std::thread::scope(|scope| {
            for _ in 0..worker_count {
                let tx = tx.clone();
                let next = &next;
                scope.spawn(move || {
                    // A worker without a client leaves the queue to the others
                    let client = match self.factory.create() {
                        Ok(client) => client,
                        Err(e) => {
                            tracing::warn!("Failed to create translation client: {}", e);
                            return;
                        }
                    };
                    let mut rng = rand::thread_rng();
                    loop {
                        let idx = next.fetch_add(1, Ordering::SeqCst);
                        let Some(text) = pending.get(idx) else {
                            break;
                        };
                        let result = self.translate_with_retry(&*client, text, &mut rng);
                        if tx.send((idx, result)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(tx);

        let mut translated = HashMap::new();
        let mut received = 0;
        for (idx, result) in rx {
            received += 1;
            match result {
                Some(translation) => {
                    translated.insert(pending[idx].clone(), translation);
                }
                None => {
                    tracing::warn!(
                        "Translation failed for '{}', keeping original text",
                        pending[idx]
                    );
                }
            }
        }
        let unsent = pending.len() - received;
        if unsent > 0 {
            tracing::warn!("{} text(s) left untranslated: no translation client", unsent);
        }
        translated
    }

    fn translate_with_retry(
        &self,
        client: &dyn Translator,
        text: &str,
        rng: &mut impl rand::Rng,
    ) -> Option<String> {
        let attempts = self.policy.max_retries.max(1);
        for attempt in 0..attempts {
            sleep(self.policy.pre_request_delay(rng));

            let outcome = client.translate(text).and_then(|result| {
                if result.trim().is_empty() {
                    Err(LoomError::TranslationError("empty translation".to_string()))
                } else if looks_like_error(&result) {
                    Err(LoomError::TranslationError(format!(
                        "error message returned as translation: {}",
                        result
                    )))
                } else {
                    Ok(result)
                }
            });

            match outcome {
                Ok(result) => return Some(result),
                Err(e) => {
                    tracing::debug!(
                        "Translation attempt {}/{} failed for '{}': {}",
                        attempt + 1,
                        attempts,
                        text,
                        e
                    );
                    if attempt + 1 < attempts {
                        sleep(self.policy.backoff(attempt, rng));
                    }
                }
            }
        }
        None
    }
}

fn sleep(delay: std::time::Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}

impl<F: TranslatorFactory> TranslateText for TranslationManager<F> {
    fn translate_many(&self, texts: &[String]) -> Vec<String> {
        TranslationManager::translate_many(self, texts)
    }

    fn translate_one(&self, text: &str) -> String {
        TranslationManager::translate_one(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_core::Result;
    use std::sync::Arc;

    /// Uppercases its input and counts calls across every client
    struct Upper {
        calls: Arc<AtomicUsize>,
    }

    impl Translator for Upper {
        fn translate(&self, text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Vary completion order across workers
            std::thread::sleep(std::time::Duration::from_millis((text.len() % 4) as u64));
            Ok(text.to_uppercase())
        }
    }

    fn upper_manager(
        calls: Arc<AtomicUsize>,
        cache: TranslationCache,
    ) -> TranslationManager<impl TranslatorFactory> {
        TranslationManager::with_cache(
            move || -> Result<Box<dyn Translator>> {
                Ok(Box::new(Upper {
                    calls: calls.clone(),
                }) as Box<dyn Translator>)
            },
            cache,
        )
        .with_policy(RetryPolicy::immediate())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_order_preserved() {
        let calls = Arc::new(AtomicUsize::new(0));
        let manager = upper_manager(calls.clone(), TranslationCache::new()).with_workers(4);
        let input: Vec<String> = (0..25).map(|i| format!("item-{}", "x".repeat(i))).collect();
        let output = manager.translate_many(&input);
        assert_eq!(output.len(), input.len());
        for (i, o) in input.iter().zip(&output) {
            assert_eq!(&i.to_uppercase(), o);
        }
    }

    #[test]
    fn test_cached_resubmission_makes_no_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let manager = upper_manager(calls.clone(), TranslationCache::new());
        let input = strings(&["alpha", "beta", "alpha", "", "gamma"]);

        let first = manager.translate_many(&input);
        assert_eq!(first, strings(&["ALPHA", "BETA", "ALPHA", "", "GAMMA"]));
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        let second = manager.translate_many(&input);
        assert_eq!(second, first);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_shared_cache_between_managers() {
        let cache = TranslationCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        upper_manager(calls.clone(), cache.clone()).translate_one("nebula");
        let other = upper_manager(calls.clone(), cache);
        assert_eq!(other.translate_one("nebula"), "NEBULA");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    struct Failing {
        calls: Arc<AtomicUsize>,
    }

    impl Translator for Failing {
        fn translate(&self, text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if text == "bad" {
                Err(LoomError::TranslationError("boom".to_string()))
            } else if text == "gateway" {
                Ok("Error 504: server timeout".to_string())
            } else {
                Ok(format!("ok:{}", text))
            }
        }
    }

    #[test]
    fn test_failure_returns_original_and_is_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let factory_calls = calls.clone();
        let manager = TranslationManager::new(move || -> Result<Box<dyn Translator>> {
            Ok(Box::new(Failing {
                calls: factory_calls.clone(),
            }) as Box<dyn Translator>)
        })
        .with_policy(RetryPolicy::immediate().with_max_retries(3))
        .with_workers(1);

        let output = manager.translate_many(&strings(&["bad", "good", "gateway"]));
        assert_eq!(output, strings(&["bad", "ok:good", "gateway"]));
        // 3 attempts for each failing text, 1 for the good one
        assert_eq!(calls.load(Ordering::SeqCst), 7);
        assert!(!manager.cache().contains("bad"));
        assert!(!manager.cache().contains("gateway"));
        assert!(manager.cache().contains("good"));
    }

    #[test]
    fn test_factory_failure_keeps_originals() {
        let manager = TranslationManager::new(|| -> Result<Box<dyn Translator>> {
            Err(LoomError::TranslationError("offline".to_string()))
        })
        .with_policy(RetryPolicy::immediate());
        assert_eq!(
            manager.translate_many(&strings(&["星舰", "引擎"])),
            strings(&["星舰", "引擎"])
        );
    }

    #[test]
    fn test_worker_count_clamped() {
        let manager = upper_manager(Arc::new(AtomicUsize::new(0)), TranslationCache::new());
        assert_eq!(manager.workers(), DEFAULT_WORKERS);
        let manager = manager.with_workers(12);
        assert_eq!(manager.workers(), MAX_WORKERS);
        let manager = manager.with_workers(0);
        assert_eq!(manager.workers(), MIN_WORKERS);
    }

    #[test]
    fn test_failed_client_leaves_work_to_healthy_workers() {
        let created = Arc::new(AtomicUsize::new(0));
        let calls = Arc::new(AtomicUsize::new(0));
        let worker_calls = calls.clone();
        let manager = TranslationManager::new(move || -> Result<Box<dyn Translator>> {
            if created.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(LoomError::TranslationError("offline".to_string()));
            }
            Ok(Box::new(Upper {
                calls: worker_calls.clone(),
            }) as Box<dyn Translator>)
        })
        .with_policy(RetryPolicy::immediate())
        .with_workers(3);

        let input: Vec<String> = (0..12).map(|i| format!("part-{}", i)).collect();
        let output = manager.translate_many(&input);
        let expected: Vec<String> = input.iter().map(|t| t.to_uppercase()).collect();
        assert_eq!(output, expected);
        assert_eq!(calls.load(Ordering::SeqCst), 12);
    }
}
