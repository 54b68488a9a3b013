//! Loom Gen - configuration and image generation
//!
//! Sends composed prompts to an image model and writes the returned image
//! to disk. The composers never depend on this crate.

pub mod config;
pub mod provider;
pub mod providers;

pub use config::{LoomConfig, PathsConfig, ProviderConfig, TranslationConfig};
pub use provider::{GenerateResult, ImageProvider, ProviderStatus};
pub use providers::{available_providers, create_provider};
