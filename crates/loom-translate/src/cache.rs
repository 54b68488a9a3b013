//! Shared text -> translation cache

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Unbounded translation cache keyed by the exact source string.
///
/// Clones share the same storage, so one cache can back several managers.
#[derive(Debug, Clone, Default)]
pub struct TranslationCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: &str) -> Option<String> {
        self.entries.read().get(source).cloned()
    }

    pub fn insert(&self, source: &str, translation: &str) {
        self.entries
            .write()
            .insert(source.to_string(), translation.to_string());
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.read().contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
