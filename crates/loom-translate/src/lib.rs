//! Loom Translate - batch translation to English
//!
//! Free text typed by the user (custom professions, extra modifiers, icon
//! names) is translated before it reaches the composers. Translation is
//! best-effort: a text that cannot be translated after retries comes back
//! unchanged, and a successful result is cached for the rest of the run.

mod cache;
mod google;
mod manager;
mod retry;
mod translator;

pub use cache::TranslationCache;
pub use google::{google_factory, GoogleWebTranslator};
pub use manager::{TranslationManager, DEFAULT_WORKERS, MAX_WORKERS};
pub use retry::{looks_like_error, RetryPolicy};
pub use translator::{TranslateText, Translator, TranslatorFactory};
