//! Loom Catalog - the vocabulary prompts are assembled from
//!
//! Holds the built-in option tables for the character and clothing
//! composers, the profession and faction presets, the label <-> value
//! mapper and the style configuration. Every table can be overridden
//! from a JSON file at startup; a missing or malformed file silently
//! keeps the built-in defaults.

pub mod catalog;
pub mod character;
pub mod clothing;
pub mod facet;
pub mod mapper;
pub mod style;
pub mod text;

pub use catalog::{OptionCatalog, OptionOverrides};
pub use character::{CharacterFacet, ProfessionPreset, PROFESSION_PRESETS};
pub use clothing::{ClothingFacet, FactionPreset};
pub use facet::Facet;
pub use mapper::{
    artist_label, artist_label_to_name, artist_options, label_to_value, labels_to_values, LabelMap,
};
pub use style::{Artist, StyleConfig};
pub use text::LocalizedText;
