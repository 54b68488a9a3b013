//! Label <-> canonical value mapping
//!
//! Lookups never fail: a label that is not in the map is assumed to already
//! be canonical and is returned unchanged.

use crate::style::Artist;
use loom_core::{CanonicalValue, DisplayLabel, Lang, OptionPair};
use std::collections::HashMap;

const WORKS_PREFIX_EN: &str = " (Works: ";
const WORKS_PREFIX_ZH: &str = "（代表作：";

/// Map from every known label of a facet to its canonical value
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    entries: HashMap<String, CanonicalValue>,
}

impl LabelMap {
    /// Build a map for `lang`.
    ///
    /// Labels of the other languages and the canonical values themselves are
    /// also accepted, but never shadow a label of the active language.
    pub fn new(pairs: &[OptionPair], lang: Lang) -> Self {
        let mut entries = HashMap::new();
        for pair in pairs {
            entries.insert(pair.label(lang).into_string(), pair.value.clone());
        }
        for other in Lang::all().into_iter().filter(|l| *l != lang) {
            for pair in pairs {
                entries
                    .entry(pair.label(other).into_string())
                    .or_insert_with(|| pair.value.clone());
            }
        }
        Self { entries }
    }

    /// Canonical value for a label, or the label itself if unknown
    pub fn resolve(&self, label: &str) -> CanonicalValue {
        label_to_value(label, self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonical value for `label`; unknown labels pass through unchanged
pub fn label_to_value(label: &str, mapping: &LabelMap) -> CanonicalValue {
    mapping
        .entries
        .get(label)
        .or_else(|| mapping.entries.get(label.trim()))
        .cloned()
        .unwrap_or_else(|| CanonicalValue::new(label))
}

/// Map a list of labels, preserving order and length
pub fn labels_to_values<S: AsRef<str>>(labels: &[S], mapping: &LabelMap) -> Vec<CanonicalValue> {
    labels
        .iter()
        .map(|l| label_to_value(l.as_ref(), mapping))
        .collect()
}

/// Display label for an artist, decorated with their works when known
pub fn artist_label(artist: &Artist, lang: Lang) -> DisplayLabel {
    let name = artist.name.trim();
    let Some(work) = artist.work.as_ref() else {
        return DisplayLabel::new(name);
    };
    let en = work.localize(Lang::En);
    let zh = work.localize(Lang::Zh);
    if en.is_empty() {
        return DisplayLabel::new(name);
    }
    match lang {
        Lang::En => DisplayLabel::new(format!("{}{}{})", name, WORKS_PREFIX_EN, en)),
        Lang::Zh => DisplayLabel::new(format!("{}{}{}）", name, WORKS_PREFIX_ZH, zh)),
        Lang::Bilingual => DisplayLabel::new(format!(
            "{}{}{}){}{}）",
            name, WORKS_PREFIX_EN, en, WORKS_PREFIX_ZH, zh
        )),
    }
}

/// Display labels for every artist, in configuration order
pub fn artist_options(artists: &[Artist], lang: Lang) -> Vec<DisplayLabel> {
    artists.iter().map(|a| artist_label(a, lang)).collect()
}

/// Bare artist name for a display label.
///
/// Exact labels are looked up first (in every language), then any works
/// suffix is stripped; anything else is returned trimmed.
pub fn artist_label_to_name(label: &str, artists: &[Artist], lang: Lang) -> String {
    let label = label.trim();
    let langs = std::iter::once(lang).chain(Lang::all().into_iter().filter(|l| *l != lang));
    for candidate in langs {
        if let Some(artist) = artists
            .iter()
            .find(|a| artist_label(a, candidate).as_str() == label)
        {
            return artist.name.trim().to_string();
        }
    }

    for prefix in [WORKS_PREFIX_EN, WORKS_PREFIX_ZH] {
        if let Some(idx) = label.find(prefix) {
            return label[..idx].trim().to_string();
        }
    }
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LocalizedText;
    use loom_core::pairs;

    fn gender_pairs() -> Vec<OptionPair> {
        pairs(&[("Unspecified", "未指定"), ("Male", "男性"), ("Female", "女性")])
    }

    #[test]
    fn test_label_to_value_active_language() {
        let map = LabelMap::new(&gender_pairs(), Lang::Zh);
        assert_eq!(label_to_value("男性", &map).as_str(), "Male");
        assert_eq!(label_to_value("未指定", &map).as_str(), "Unspecified");
    }

    #[test]
    fn test_other_language_labels_still_resolve() {
        let map = LabelMap::new(&gender_pairs(), Lang::En);
        assert_eq!(label_to_value("女性", &map).as_str(), "Female");
        assert_eq!(label_to_value("Female / 女性", &map).as_str(), "Female");
    }

    #[test]
    fn test_unknown_label_passes_through() {
        let map = LabelMap::new(&gender_pairs(), Lang::Zh);
        assert_eq!(label_to_value("Cyborg", &map).as_str(), "Cyborg");
    }

    #[test]
    fn test_labels_to_values_preserves_order() {
        let map = LabelMap::new(&gender_pairs(), Lang::Zh);
        let values = labels_to_values(&["女性", "stale", "男性"], &map);
        let values: Vec<&str> = values.iter().map(|v| v.as_str()).collect();
        assert_eq!(values, vec!["Female", "stale", "Male"]);
    }

    #[test]
    fn test_active_language_wins_on_collision() {
        // "Blue" is the zh label of one entry and the en label of another
        let table = pairs(&[("Azure", "Blue"), ("Blue", "蓝色")]);
        let zh = LabelMap::new(&table, Lang::Zh);
        assert_eq!(zh.resolve("Blue").as_str(), "Azure");
        let en = LabelMap::new(&table, Lang::En);
        assert_eq!(en.resolve("Blue").as_str(), "Blue");
    }

    fn artists() -> Vec<Artist> {
        vec![
            Artist {
                name: "Haruhiko Mikimoto".to_string(),
                work: Some(LocalizedText::bilingual("Macross", "超时空要塞")),
            },
            Artist {
                name: "Kenichi Sonoda".to_string(),
                work: None,
            },
        ]
    }

    #[test]
    fn test_artist_labels() {
        let artists = artists();
        assert_eq!(
            artist_label(&artists[0], Lang::En).as_str(),
            "Haruhiko Mikimoto (Works: Macross)"
        );
        assert_eq!(
            artist_label(&artists[0], Lang::Zh).as_str(),
            "Haruhiko Mikimoto（代表作：超时空要塞）"
        );
        assert_eq!(artist_label(&artists[1], Lang::Zh).as_str(), "Kenichi Sonoda");
        assert_eq!(artist_options(&artists, Lang::En).len(), 2);
    }

    #[test]
    fn test_bilingual_artist_label_has_both_suffixes() {
        let artists = artists();
        let label = artist_label(&artists[0], Lang::Bilingual);
        assert_eq!(
            label.as_str(),
            "Haruhiko Mikimoto (Works: Macross)（代表作：超时空要塞）"
        );
        assert_eq!(
            artist_label_to_name(label.as_str(), &artists, Lang::Bilingual),
            "Haruhiko Mikimoto"
        );
        assert_eq!(artist_label(&artists[1], Lang::Bilingual).as_str(), "Kenichi Sonoda");
    }

    #[test]
    fn test_artist_label_to_name() {
        let artists = artists();
        assert_eq!(
            artist_label_to_name("Haruhiko Mikimoto（代表作：超时空要塞）", &artists, Lang::En),
            "Haruhiko Mikimoto"
        );
        assert_eq!(
            artist_label_to_name("Someone Else (Works: Thing)", &artists, Lang::En),
            "Someone Else"
        );
        assert_eq!(
            artist_label_to_name(" Kenichi Sonoda ", &artists, Lang::Zh),
            "Kenichi Sonoda"
        );
    }
}
