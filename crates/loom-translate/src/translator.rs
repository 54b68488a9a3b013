//! Translation seams

use loom_core::Result;

/// A single translation client
pub trait Translator: Send {
    /// Translate `text` to English
    fn translate(&self, text: &str) -> Result<String>;
}

/// Creates independent clients, one per worker thread
pub trait TranslatorFactory: Sync {
    fn create(&self) -> Result<Box<dyn Translator>>;
}

impl<F> TranslatorFactory for F
where
    F: Fn() -> Result<Box<dyn Translator>> + Sync,
{
    fn create(&self) -> Result<Box<dyn Translator>> {
        self()
    }
}

/// Order-preserving batch translation, as consumed by the composers.
///
/// Implementations never fail: untranslatable items come back unchanged.
pub trait TranslateText {
    fn translate_many(&self, texts: &[String]) -> Vec<String>;

    fn translate_one(&self, text: &str) -> String {
        self.translate_many(&[text.to_string()])
            .pop()
            .unwrap_or_else(|| text.to_string())
    }
}
