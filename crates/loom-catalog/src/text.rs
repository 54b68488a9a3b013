//! Text that may be given once or per language

use loom_core::Lang;
use serde::{Deserialize, Serialize};

/// A plain string, or an `{ "en": ..., "zh": ... }` map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized {
        #[serde(default)]
        en: Option<String>,
        #[serde(default)]
        zh: Option<String>,
    },
}

impl LocalizedText {
    pub fn bilingual(en: &str, zh: &str) -> Self {
        LocalizedText::Localized {
            en: Some(en.to_string()),
            zh: Some(zh.to_string()),
        }
    }

    /// Text in the requested language, falling back to the other one
    pub fn localize(&self, lang: Lang) -> String {
        match self {
            LocalizedText::Plain(s) => s.trim().to_string(),
            LocalizedText::Localized { en, zh } => {
                let en = en.as_deref().map(str::trim).filter(|s| !s.is_empty());
                let zh = zh.as_deref().map(str::trim).filter(|s| !s.is_empty());
                let text = match lang {
                    Lang::En => en.or(zh).map(str::to_string),
                    Lang::Zh => zh.or(en).map(str::to_string),
                    Lang::Bilingual => match (en, zh) {
                        (Some(e), Some(z)) if e != z => Some(format!("{} / {}", e, z)),
                        (e, z) => e.or(z).map(str::to_string),
                    },
                };
                text.unwrap_or_default()
            }
        }
    }
}
