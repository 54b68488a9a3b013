//! Option vocabulary shared by the catalog and the composers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved canonical value meaning "omit this facet"
pub const UNSPECIFIED: &str = "Unspecified";

/// Whether a resolved value contributes to a prompt.
///
/// Blank strings and the `Unspecified` sentinel are both treated as absent.
pub fn is_specified(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != UNSPECIFIED
}

/// Display language for option labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
    /// "English / 中文" combined labels
    #[serde(alias = "both")]
    Bilingual,
}

impl Lang {
    /// Parse a language code ("en", "zh", "both")
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Lang::En),
            "zh" | "cn" | "chinese" => Some(Lang::Zh),
            "both" | "bilingual" => Some(Lang::Bilingual),
            _ => None,
        }
    }

    pub fn all() -> [Lang; 3] {
        [Lang::En, Lang::Zh, Lang::Bilingual]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lang::En => write!(f, "en"),
            Lang::Zh => write!(f, "zh"),
            Lang::Bilingual => write!(f, "both"),
        }
    }
}

/// Language-invariant option identifier used by composition logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalValue(String);

impl CanonicalValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether this value contributes to a prompt (see [`is_specified`])
    pub fn is_specified(&self) -> bool {
        is_specified(&self.0)
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CanonicalValue {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CanonicalValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// User-facing label shown in a selection control
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayLabel(String);

impl DisplayLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplayLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One selectable option: the canonical (English) value and its Chinese label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionPair {
    pub value: CanonicalValue,
    pub zh: String,
}

impl OptionPair {
    pub fn new(en: &str, zh: &str) -> Self {
        Self {
            value: CanonicalValue::from(en),
            zh: zh.to_string(),
        }
    }

    /// Label for this option in the requested language
    pub fn label(&self, lang: Lang) -> DisplayLabel {
        match lang {
            Lang::En => DisplayLabel::new(self.value.as_str()),
            Lang::Zh => DisplayLabel::new(self.zh.as_str()),
            Lang::Bilingual => DisplayLabel::new(format!("{} / {}", self.value, self.zh)),
        }
    }
}

/// Build option pairs from a static `(en, zh)` table
pub fn pairs(table: &[(&str, &str)]) -> Vec<OptionPair> {
    table.iter().map(|(en, zh)| OptionPair::new(en, zh)).collect()
}

/// One entry of an icon sheet, as read from a CSV row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconItem {
    pub name: String,
    pub description: String,
    /// Previously translated English name, if the sheet carries one
    #[serde(default)]
    pub english_name: Option<String>,
    /// Previously chosen English file name, if the sheet carries one
    #[serde(default)]
    pub english_filename: Option<String>,
}

impl IconItem {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            english_name: None,
            english_filename: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_specified() {
        assert!(is_specified("bust portrait"));
        assert!(!is_specified(UNSPECIFIED));
        assert!(!is_specified("   "));
        assert!(!is_specified(""));
    }

    #[test]
    fn test_option_pair_labels() {
        let pair = OptionPair::new("Female", "女性");
        assert_eq!(pair.label(Lang::En).as_str(), "Female");
        assert_eq!(pair.label(Lang::Zh).as_str(), "女性");
        assert_eq!(pair.label(Lang::Bilingual).as_str(), "Female / 女性");
    }

    #[test]
    fn test_lang_parse() {
        assert_eq!(Lang::parse("ZH"), Some(Lang::Zh));
        assert_eq!(Lang::parse("both"), Some(Lang::Bilingual));
        assert_eq!(Lang::parse("fr"), None);
    }
}
