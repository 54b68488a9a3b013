//! Facet trait implemented by each composer's option dimensions

use loom_core::OptionPair;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// One independent configurable dimension of a prompt (gender, hair style, ...)
pub trait Facet: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every facet of this family, in display order
    fn all() -> &'static [Self];

    /// Key used in the JSON override file (e.g. "gender_options")
    fn key(self) -> &'static str;

    /// Short name used on the command line (e.g. "gender")
    fn name(self) -> &'static str;

    /// Built-in option table
    fn default_pairs(self) -> Vec<OptionPair>;

    /// Whether the UI collects a list of labels for this facet
    fn is_multi_select(self) -> bool {
        false
    }

    /// Built-in profession -> allowed outfit values filter (character facets only)
    fn default_profession_outfits() -> BTreeMap<String, Vec<String>> {
        BTreeMap::new()
    }

    /// Look a facet up by its short name or override key
    fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim().to_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|f| f.name() == needle || f.key() == needle)
    }
}
