//! promptloom settings: provider keys, translation pacing, override-file paths
//!
//! Precedence, highest first:
//! 1. Environment variables: `LOOM_{PROVIDER}_API_KEY`
//! 2. Project-local: `.loom/config.toml`
//! 3. Global: `~/.loom/config.toml`

use loom_core::{LoomError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const ENV_PROVIDERS: &[&str] = &["gemini"];

/// `[providers.<name>]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            model: None,
            enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Translation worker pool and retry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            jitter_ms: default_jitter_ms(),
        }
    }
}

fn default_workers() -> usize {
    3
}
fn default_max_retries() -> u32 {
    3
}
fn default_base_delay_ms() -> u64 {
    1000
}
fn default_jitter_ms() -> u64 {
    1000
}

/// Override-file locations; unset entries use files in the working directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default)]
    pub character_options: Option<PathBuf>,
    #[serde(default)]
    pub clothing_options: Option<PathBuf>,
    #[serde(default)]
    pub style: Option<PathBuf>,
    #[serde(default)]
    pub clothing_style: Option<PathBuf>,
    #[serde(default)]
    pub manufacturers: Option<PathBuf>,
}

impl PathsConfig {
    pub fn character_options(&self) -> PathBuf {
        or_default(&self.character_options, "character_options.json")
    }

    pub fn clothing_options(&self) -> PathBuf {
        or_default(&self.clothing_options, "clothing_options.json")
    }

    pub fn style(&self) -> PathBuf {
        or_default(&self.style, "character_style.json")
    }

    /// Clothing style file, falling back to the character style file when absent
    pub fn clothing_style(&self) -> PathBuf {
        let path = or_default(&self.clothing_style, "clothing_style.json");
        if path.exists() {
            path
        } else {
            self.style()
        }
    }

    pub fn manufacturers(&self) -> PathBuf {
        or_default(&self.manufacturers, "manufacturers.json")
    }
}

fn or_default(path: &Option<PathBuf>, default: &str) -> PathBuf {
    path.clone().unwrap_or_else(|| PathBuf::from(default))
}

/// One config file as written on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoomConfigFile {
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Settings after layering files and the environment
#[derive(Debug, Clone, Default)]
pub struct LoomConfig {
    pub providers: HashMap<String, ProviderConfig>,
    pub translation: TranslationConfig,
    pub paths: PathsConfig,
}

impl LoomConfig {
    /// Global file, then project file, then environment
    pub fn load() -> Result<Self> {
        let mut config = LoomConfigFile::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        let local_path = PathBuf::from(".loom/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        Self::apply_env_overrides(&mut config);
        Ok(config.into())
    }

    /// One file plus the environment, skipping the global and project layers
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config);
        Ok(config.into())
    }

    pub fn api_key(&self, provider_name: &str) -> Option<&str> {
        self.providers
            .get(provider_name)
            .and_then(|p| p.api_key.as_deref())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn api_url(&self, provider_name: &str) -> Option<&str> {
        self.providers
            .get(provider_name)
            .and_then(|p| p.api_url.as_deref())
    }

    pub fn model(&self, provider_name: &str) -> Option<&str> {
        self.providers
            .get(provider_name)
            .and_then(|p| p.model.as_deref())
    }

    /// Unconfigured providers count as enabled
    pub fn is_enabled(&self, provider_name: &str) -> bool {
        self.providers
            .get(provider_name)
            .map(|p| p.enabled)
            .unwrap_or(true)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".loom").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<LoomConfigFile> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            LoomError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge_into(base: &mut LoomConfigFile, overlay: LoomConfigFile) {
        for (name, provider) in overlay.providers {
            let entry = base.providers.entry(name).or_default();
            if provider.api_key.is_some() {
                entry.api_key = provider.api_key;
            }
            if provider.api_url.is_some() {
                entry.api_url = provider.api_url;
            }
            if provider.model.is_some() {
                entry.model = provider.model;
            }
            entry.enabled = provider.enabled;
        }

        let defaults = TranslationConfig::default();
        let t = overlay.translation;
        if t.workers != defaults.workers {
            base.translation.workers = t.workers;
        }
        if t.max_retries != defaults.max_retries {
            base.translation.max_retries = t.max_retries;
        }
        if t.base_delay_ms != defaults.base_delay_ms {
            base.translation.base_delay_ms = t.base_delay_ms;
        }
        if t.jitter_ms != defaults.jitter_ms {
            base.translation.jitter_ms = t.jitter_ms;
        }

        let p = overlay.paths;
        let slots = [
            (&mut base.paths.character_options, p.character_options),
            (&mut base.paths.clothing_options, p.clothing_options),
            (&mut base.paths.style, p.style),
            (&mut base.paths.clothing_style, p.clothing_style),
            (&mut base.paths.manufacturers, p.manufacturers),
        ];
        for (slot, value) in slots {
            if value.is_some() {
                *slot = value;
            }
        }
    }

    fn apply_env_overrides(config: &mut LoomConfigFile) {
        for name in ENV_PROVIDERS {
            let env_key = format!("LOOM_{}_API_KEY", name.to_uppercase());
            if let Ok(key) = std::env::var(&env_key) {
                let entry = config.providers.entry(name.to_string()).or_default();
                entry.api_key = Some(key);
            }
        }
    }
}

impl From<LoomConfigFile> for LoomConfig {
    fn from(file: LoomConfigFile) -> Self {
        Self {
            providers: file.providers,
            translation: file.translation,
            paths: file.paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("loom_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_config_from_file() {
        let path = temp_config(
            r#"
[providers.gemini]
api_url = "https://example.test/v1beta"
model = "gemini-2.5-flash-image"

[providers.mock]
enabled = false

[translation]
workers = 5
jitter_ms = 0

[paths]
character_options = "config/character_options.json"
"#,
        );
        let config = LoomConfig::load_from_file(&path).unwrap();

        assert_eq!(config.api_url("gemini"), Some("https://example.test/v1beta"));
        assert_eq!(config.model("gemini"), Some("gemini-2.5-flash-image"));
        assert!(config.is_enabled("gemini"));
        assert!(!config.is_enabled("mock"));
        assert_eq!(config.translation.workers, 5);
        assert_eq!(config.translation.jitter_ms, 0);
        assert_eq!(config.translation.max_retries, 3);
        assert_eq!(
            config.paths.character_options(),
            PathBuf::from("config/character_options.json")
        );
        assert_eq!(config.paths.manufacturers(), PathBuf::from("manufacturers.json"));
        cleanup(&path);
    }

    #[test]
    fn test_env_var_override() {
        let path = temp_config("[providers.gemini]\napi_key = \"file-key\"\n");
        std::env::set_var("LOOM_GEMINI_API_KEY", "env-key-override");

        let config = LoomConfig::load_from_file(&path).unwrap();
        assert_eq!(config.api_key("gemini"), Some("env-key-override"));

        std::env::remove_var("LOOM_GEMINI_API_KEY");
        cleanup(&path);
    }

    #[test]
    fn test_merge_keeps_base_values() {
        let mut base: LoomConfigFile = toml::from_str(
            r#"
[providers.gemini]
api_key = "global-key"
model = "imagen-4.0-generate-001"

[translation]
workers = 4

[paths]
style = "global_style.json"
"#,
        )
        .unwrap();
        let overlay: LoomConfigFile = toml::from_str(
            r#"
[providers.gemini]
model = "gemini-2.5-flash-image"

[paths]
manufacturers = "ships/manufacturers.json"
"#,
        )
        .unwrap();

        LoomConfig::merge_into(&mut base, overlay);
        let config = LoomConfig::from(base);
        assert_eq!(config.api_key("gemini"), Some("global-key"));
        assert_eq!(config.model("gemini"), Some("gemini-2.5-flash-image"));
        assert_eq!(config.translation.workers, 4);
        assert_eq!(config.paths.style(), PathBuf::from("global_style.json"));
        assert_eq!(
            config.paths.manufacturers(),
            PathBuf::from("ships/manufacturers.json")
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = temp_config("[translation\nworkers = ");
        assert!(matches!(
            LoomConfig::load_from_file(&path),
            Err(LoomError::Config(_))
        ));
        cleanup(&path);
    }

    #[test]
    fn test_missing_provider_returns_none() {
        let config = LoomConfig::default();
        assert_eq!(config.api_key("nonexistent"), None);
        assert!(config.is_enabled("nonexistent"));
        assert_eq!(config.translation, TranslationConfig::default());
    }
}
