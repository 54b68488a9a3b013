//! Manufacturer presets loaded from `manufacturers.json`

use loom_core::{LoomError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A component maker whose palette and design language override the tier's
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub design_language: String,
    pub color_palette: String,
}

impl Manufacturer {
    /// Read a JSON array of manufacturers
    pub fn load(path: &Path) -> Result<Vec<Manufacturer>> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            LoomError::Config(format!(
                "Failed to parse manufacturers {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Like [`Manufacturer::load`], but an absent or broken file yields no manufacturers
    pub fn load_or_default(path: &Path) -> Vec<Manufacturer> {
        if !path.exists() {
            tracing::debug!("No manufacturers file at {}", path.display());
            return Vec::new();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{}; continuing without manufacturers", e);
            Vec::new()
        })
    }

    /// Exact-name lookup; "None" and blank names select nothing
    pub fn find<'a>(manufacturers: &'a [Manufacturer], name: &str) -> Option<&'a Manufacturer> {
        let name = name.trim();
        if name.is_empty() || name == "None" {
            return None;
        }
        manufacturers.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("loom_shipyard_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("manufacturers.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_and_find() {
        let path = temp_path(
            r#"[{"name": "Kessler Yards", "description": "Ship breakers",
                 "design_language": "Riveted plating.", "color_palette": "Oxide red, bone white."}]"#,
        );
        let makers = Manufacturer::load_or_default(&path);
        assert_eq!(makers.len(), 1);
        assert_eq!(
            Manufacturer::find(&makers, "Kessler Yards").map(|m| m.color_palette.as_str()),
            Some("Oxide red, bone white.")
        );
        assert!(Manufacturer::find(&makers, "None").is_none());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_broken_file_is_empty() {
        let path = temp_path("[{\"name\": ");
        assert!(Manufacturer::load(&path).is_err());
        assert!(Manufacturer::load_or_default(&path).is_empty());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();

        assert!(Manufacturer::load_or_default(Path::new("/nonexistent/manufacturers.json")).is_empty());
    }
}
