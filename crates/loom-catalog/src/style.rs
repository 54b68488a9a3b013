//! Style configuration: the boilerplate blocks wrapped around a subject
//!
//! A style file is JSON:
//!
//! ```json
//! {
//!   "style": "...",
//!   "background": "...",
//!   "mood": "...",
//!   "artists": [{"name": "Haruhiko Mikimoto", "work": {"en": "Macross", "zh": "超时空要塞"}}]
//! }
//! ```
//!
//! Blank or missing fields keep the built-in defaults.

use crate::text::LocalizedText;
use loom_core::{LoomError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const CHARACTER_STYLE: &str = "(masterpiece, best quality), authentic early-1990s Japanese OVA anime key visual, \
PC-98 era Japanese computer game illustration, hand-painted cel shading, \
clean lineart, crisp forms, controlled rim lighting, deep shadows, \
soft airbrush gradients, subtle color banding, balanced contrast, \
iconic 90s character design with striking presence, sharp angles, realistic facial proportions, \
cinematic composition, analog texture, \
style of Haruhiko Mikimoto, Yoshiyuki Sadamoto.";

const CHARACTER_MOOD: &str = "(film grain:1.3), muted colors, vintage OVA atmosphere, hand-painted cel look, \
matte finish, clean paint layers, no oily or glossy look.";

const CLOTHING_STYLE: &str = "(masterpiece, best quality), late-1980s to early-2000s Japanese mecha OVA or theatrical key visual, \
real-robot anime aesthetic, hand-drawn cel animation still, hand-painted cel shading, \
flat color fills, hard-edged shadow shapes, clean lineart, crisp forms, \
limited palette, subtle color banding, minimal gradients, bold graphic silhouettes, \
utilitarian military sci-fi design, realistic 90s material rendering, \
clean character design turnarounds, analog texture.";

const CLOTHING_MOOD: &str = "(film grain:1.3), muted colors, vintage OVA atmosphere, hand-painted cel look, \
matte finish, clean paint layers, subtle cel misregistration, analog video texture, \
no oily or glossy look, no modern anime sheen, no oversized eyes, no soft glow, \
no 3d, no cgi, no photorealism, no digital painting look, no painterly brushwork, \
no thick paint, no heavy impasto, no soft focus, no depth of field.";

const DEFAULT_BACKGROUND: &str =
    "simple pure white background, flat white background, isolated on white.";

/// An artist offered for style-reference injection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    /// Representative work shown beside the name
    #[serde(default)]
    pub work: Option<LocalizedText>,
}

impl Artist {
    pub fn new(name: &str, work_en: &str, work_zh: &str) -> Self {
        Self {
            name: name.to_string(),
            work: Some(LocalizedText::bilingual(work_en, work_zh)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArtistEntry {
    Name(String),
    Full(Artist),
}

impl ArtistEntry {
    fn into_artist(self) -> Option<Artist> {
        let artist = match self {
            ArtistEntry::Name(name) => Artist { name, work: None },
            ArtistEntry::Full(artist) => artist,
        };
        if artist.name.trim().is_empty() {
            None
        } else {
            Some(artist)
        }
    }
}

/// JSON file shape; every field optional
#[derive(Debug, Default, Deserialize)]
struct StyleFile {
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    mood: Option<String>,
    #[serde(default)]
    artists: Option<Vec<ArtistEntry>>,
}

/// Style, background and mood blocks plus the selectable artists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleConfig {
    pub style: String,
    pub background: String,
    pub mood: String,
    pub artists: Vec<Artist>,
}

fn default_artists() -> Vec<Artist> {
    vec![
        Artist::new("Haruhiko Mikimoto", "Macross", "超时空要塞"),
        Artist::new("Yoshiyuki Sadamoto", "Neon Genesis Evangelion", "新世纪福音战士"),
        Artist::new("Yoshikazu Yasuhiko", "Mobile Suit Gundam", "机动战士高达"),
        Artist::new("Masamune Shirow", "Appleseed", "苹果核战记"),
        Artist::new("Kenichi Sonoda", "Gunsmith Cats", "枪械少女"),
    ]
}

impl StyleConfig {
    /// Built-in blocks for character portraits
    pub fn character_defaults() -> Self {
        Self {
            style: CHARACTER_STYLE.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            mood: CHARACTER_MOOD.to_string(),
            artists: default_artists(),
        }
    }

    /// Built-in blocks for clothing preset sheets
    pub fn clothing_defaults() -> Self {
        Self {
            style: CLOTHING_STYLE.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            mood: CLOTHING_MOOD.to_string(),
            artists: Vec::new(),
        }
    }

    /// Load a style file, keeping `defaults` for every blank or missing field
    pub fn load(path: &Path, defaults: StyleConfig) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: StyleFile = serde_json::from_str(&content).map_err(|e| {
            LoomError::Config(format!(
                "Failed to parse style config {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(defaults.merged(file))
    }

    /// Like [`StyleConfig::load`], falling back to `defaults` on any error
    pub fn load_or_default(path: &Path, defaults: StyleConfig) -> Self {
        if !path.exists() {
            return defaults;
        }
        match Self::load(path, defaults.clone()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using built-in style", e);
                defaults
            }
        }
    }

    fn merged(self, file: StyleFile) -> Self {
        fn pick(value: Option<String>, default: String) -> String {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        }

        let artists = file
            .artists
            .map(|entries| {
                entries
                    .into_iter()
                    .filter_map(ArtistEntry::into_artist)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or(self.artists);

        Self {
            style: pick(file.style, self.style),
            background: pick(file.background, self.background),
            mood: pick(file.mood, self.mood),
            artists,
        }
    }
}
