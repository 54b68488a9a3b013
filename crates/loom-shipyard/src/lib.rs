//! Tiered spaceship component generator
//!
//! A self-contained composer keyed by tier, category, subcategory,
//! structural variant and manufacturer. Produces a 4-view reference-sheet
//! prompt with a randomly sampled feature list; the random source is
//! injected so callers (and tests) control determinism.

pub mod component;
pub mod generator;
pub mod manufacturer;
pub mod tier;

pub use component::{subcategories, variants_for, ComponentCategory, SubjectProfile};
pub use generator::{title_case, ComponentGenerator, ComponentRequest, FEATURE_SAMPLE_SIZE};
pub use manufacturer::Manufacturer;
pub use tier::{Tier, TierInfo};
