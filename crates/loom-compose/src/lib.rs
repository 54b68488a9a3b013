//! Loom Compose - deterministic prompt composition
//!
//! Turns resolved option values into finished prompt text:
//! - `subject` - the single descriptive subject sentence
//! - `assemble` - style/background/mood blocks around the subject
//! - `character` - portrait prompts from a UI selection
//! - `clothing` - outfit preset-sheet prompts
//! - `icons` - 8x8 icon sprite-sheet prompts
//!
//! Composition never fails; missing optional values simply drop out of
//! the text.

pub mod assemble;
pub mod character;
pub mod clothing;
pub mod icons;
pub mod subject;

pub use assemble::{aspect_ratio_line, assemble_prompt, AssembleInput, BlockToggles, PromptDocument};
pub use character::{
    age_from_years, compose_character_prompt, translate_free_text, AgeInput, CharacterContext,
    CharacterSelection,
};
pub use clothing::{compose_clothing_prompt, ClothingContext, ClothingSelection};
pub use icons::{compose_icon_grid_prompt, translate_items, GRID_SIZE, MAX_ICON_ITEMS};
pub use subject::{compose_subject, SubjectSpec, GENERIC_OUTFIT};
