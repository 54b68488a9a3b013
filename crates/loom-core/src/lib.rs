//! Loom Core - Foundational types for the promptloom workspace
//!
//! This crate provides the types every other loom crate depends on:
//! - `Lang`, `CanonicalValue`, `DisplayLabel`, `OptionPair` - option vocabulary
//! - `IconItem` - one row of an icon sheet
//! - `ContentHash` - SHA-256 based content hashing
//! - Hex color to color-name descriptors
//! - Error types and Result alias

pub mod color;
mod error;
mod hash;
mod types;

pub use color::{color_to_descriptor, colors_to_palette_text};
pub use error::{LoomError, Result};
pub use hash::ContentHash;
pub use types::{
    is_specified, pairs, CanonicalValue, DisplayLabel, IconItem, Lang, OptionPair, UNSPECIFIED,
};
