//! Option catalog with fail-soft JSON overrides
//!
//! Tables are built once at startup from the built-in defaults, optionally
//! replaced per facet by an override file:
//!
//! ```json
//! {
//!   "gender_options": [["Male", "男性"], {"en": "Female", "zh": "女性"}, "Androgynous"],
//!   "profession_outfits": { "Space Pilot": ["flight suit", "pressure suit"] }
//! }
//! ```
//!
//! A facet whose override is absent, not a list, or yields no valid pair keeps
//! its default table. A file that cannot be read or parsed keeps every default.

use crate::facet::Facet;
use crate::mapper::LabelMap;
use loom_core::{CanonicalValue, DisplayLabel, Lang, LoomError, OptionPair, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

const PROFESSION_OUTFITS_KEY: &str = "profession_outfits";

/// Parsed contents of an option override file
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    /// Valid pairs found per override key (may be empty)
    pub facets: HashMap<String, Vec<OptionPair>>,
    /// Profession -> allowed outfit values
    pub profession_outfits: BTreeMap<String, Vec<String>>,
}

impl OptionOverrides {
    /// Read and parse an override file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| {
            LoomError::Config(format!(
                "Failed to parse option overrides {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse override JSON text
    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        let object = root
            .as_object()
            .ok_or_else(|| LoomError::Config("override root must be an object".to_string()))?;

        let mut overrides = OptionOverrides::default();
        for (key, value) in object {
            if key == PROFESSION_OUTFITS_KEY {
                overrides.profession_outfits = parse_profession_outfits(value);
            } else if let Some(items) = value.as_array() {
                let parsed = items.iter().filter_map(parse_pair).collect();
                overrides.facets.insert(key.clone(), parsed);
            }
        }
        Ok(overrides)
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_pair(item: &Value) -> Option<OptionPair> {
    let (en, zh) = match item {
        Value::Array(parts) if parts.len() == 2 => {
            (value_to_text(&parts[0])?, value_to_text(&parts[1])?)
        }
        Value::Object(map) => (
            value_to_text(map.get("en")?)?,
            value_to_text(map.get("zh")?)?,
        ),
        Value::String(single) => (single.trim().to_string(), single.trim().to_string()),
        _ => return None,
    };
    if en.is_empty() || zh.is_empty() {
        return None;
    }
    Some(OptionPair::new(&en, &zh))
}

fn parse_profession_outfits(value: &Value) -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    let Some(object) = value.as_object() else {
        return map;
    };
    for (profession, outfits) in object {
        let values: Vec<String> = outfits
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(value_to_text)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if !values.is_empty() {
            map.insert(profession.trim().to_string(), values);
        }
    }
    map
}

/// Option tables for one family of facets.
///
/// Constructed once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct OptionCatalog<F: Facet> {
    tables: HashMap<F, Vec<OptionPair>>,
    profession_outfits: BTreeMap<String, Vec<String>>,
}

impl<F: Facet> OptionCatalog<F> {
    /// Catalog built purely from the built-in tables
    pub fn defaults() -> Self {
        let tables = F::all().iter().map(|f| (*f, f.default_pairs())).collect();
        Self {
            tables,
            profession_outfits: F::default_profession_outfits(),
        }
    }

    /// Catalog with per-facet overrides applied on top of the defaults
    pub fn with_overrides(overrides: &OptionOverrides) -> Self {
        let mut catalog = Self::defaults();
        for facet in F::all() {
            if let Some(pairs) = overrides.facets.get(facet.key()) {
                if !pairs.is_empty() {
                    catalog.tables.insert(*facet, pairs.clone());
                }
            }
        }
        for (profession, outfits) in &overrides.profession_outfits {
            catalog
                .profession_outfits
                .insert(profession.clone(), outfits.clone());
        }
        catalog
    }

    /// Load overrides from `path`, keeping the defaults if anything goes wrong
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No option overrides at {}, using defaults", path.display());
            return Self::defaults();
        }
        match OptionOverrides::load(path) {
            Ok(overrides) => Self::with_overrides(&overrides),
            Err(e) => {
                tracing::warn!("{}; using built-in options", e);
                Self::defaults()
            }
        }
    }

    /// Underlying (value, zh) table for a facet
    pub fn get_option_pairs(&self, facet: F) -> &[OptionPair] {
        self.tables.get(&facet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display labels for a facet in table order
    pub fn get_options(&self, facet: F, lang: Lang) -> Vec<DisplayLabel> {
        self.get_option_pairs(facet)
            .iter()
            .map(|p| p.label(lang))
            .collect()
    }

    /// Label -> value map for a facet in the given language
    pub fn label_map(&self, facet: F, lang: Lang) -> LabelMap {
        LabelMap::new(self.get_option_pairs(facet), lang)
    }

    /// Resolve one UI label to its canonical value (unknown labels pass through)
    pub fn resolve(&self, facet: F, label: &str, lang: Lang) -> CanonicalValue {
        self.label_map(facet, lang).resolve(label)
    }

    /// Resolve a list of UI labels, preserving order
    pub fn resolve_all<S: AsRef<str>>(&self, facet: F, labels: &[S], lang: Lang) -> Vec<CanonicalValue> {
        let map = self.label_map(facet, lang);
        labels.iter().map(|l| map.resolve(l.as_ref())).collect()
    }

    /// Whether `value` is a canonical value of `facet`
    pub fn contains_value(&self, facet: F, value: &str) -> bool {
        self.get_option_pairs(facet)
            .iter()
            .any(|p| p.value.as_str() == value)
    }

    /// Profession -> allowed outfit values
    pub fn profession_outfits(&self) -> &BTreeMap<String, Vec<String>> {
        &self.profession_outfits
    }

    /// Labels of `facet` restricted to `allowed` values, in table order.
    ///
    /// The first entry (the sentinel) is always kept.
    pub fn filtered_options(&self, facet: F, allowed: &[String], lang: Lang) -> Vec<DisplayLabel> {
        self.get_option_pairs(facet)
            .iter()
            .enumerate()
            .filter(|(i, p)| *i == 0 || allowed.iter().any(|a| a == p.value.as_str()))
            .map(|(_, p)| p.label(lang))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterFacet;
    use std::io::Write;

    fn temp_file(content: &str) -> std::path::PathBuf {
        let dir =
            std::env::temp_dir().join(format!("loom_catalog_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("character_options.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_defaults_first_entry_is_sentinel() {
        let catalog = OptionCatalog::<CharacterFacet>::defaults();
        let genders = catalog.get_options(CharacterFacet::Gender, Lang::En);
        assert_eq!(genders[0].as_str(), "Unspecified");
        let zh = catalog.get_options(CharacterFacet::Gender, Lang::Zh);
        assert_eq!(zh[0].as_str(), "未指定");
    }

    #[test]
    fn test_override_mixed_item_shapes() {
        let path = temp_file(
            r#"{
                "gender_options": [["Unspecified", "未指定"], {"en": "Knight", "zh": "骑士"}, "Drone", ["", "空"], 5],
                "unknown_key": [["a", "b"]]
            }"#,
        );
        let catalog = OptionCatalog::<CharacterFacet>::load_or_default(&path);
        let labels: Vec<String> = catalog
            .get_options(CharacterFacet::Gender, Lang::Zh)
            .into_iter()
            .map(DisplayLabel::into_string)
            .collect();
        assert_eq!(labels, vec!["未指定", "骑士", "Drone"]);
        cleanup(&path);
    }

    #[test]
    fn test_empty_or_invalid_override_keeps_default() {
        let path = temp_file(r#"{"gender_options": [], "age_options": "nope", "gaze_options": [["x"]]}"#);
        let catalog = OptionCatalog::<CharacterFacet>::load_or_default(&path);
        let defaults = OptionCatalog::<CharacterFacet>::defaults();
        for facet in [CharacterFacet::Gender, CharacterFacet::Age, CharacterFacet::Gaze] {
            assert_eq!(catalog.get_option_pairs(facet), defaults.get_option_pairs(facet));
        }
        cleanup(&path);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = temp_file("{ not json");
        assert!(OptionOverrides::load(&path).is_err());
        let catalog = OptionCatalog::<CharacterFacet>::load_or_default(&path);
        assert_eq!(
            catalog.get_options(CharacterFacet::Framing, Lang::En),
            OptionCatalog::<CharacterFacet>::defaults().get_options(CharacterFacet::Framing, Lang::En)
        );
        cleanup(&path);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let catalog = OptionCatalog::<CharacterFacet>::load_or_default(Path::new(
            "/nonexistent/loom/character_options.json",
        ));
        assert!(!catalog.get_option_pairs(CharacterFacet::HairStyle).is_empty());
    }

    #[test]
    fn test_profession_outfit_override() {
        let overrides = OptionOverrides::parse(
            r#"{"profession_outfits": {"Space Pilot": ["lab coat"], "Ghost": []}}"#,
        )
        .unwrap();
        let catalog = OptionCatalog::<CharacterFacet>::with_overrides(&overrides);
        assert_eq!(
            catalog.profession_outfits().get("Space Pilot"),
            Some(&vec!["lab coat".to_string()])
        );
        assert!(!catalog.profession_outfits().contains_key("Ghost"));
    }

    #[test]
    fn test_resolve_unknown_label_passes_through() {
        let catalog = OptionCatalog::<CharacterFacet>::defaults();
        assert_eq!(
            catalog.resolve(CharacterFacet::Gender, "女性", Lang::Zh).as_str(),
            "Female"
        );
        assert_eq!(
            catalog.resolve(CharacterFacet::Gender, "Starborn", Lang::Zh).as_str(),
            "Starborn"
        );
    }
}
