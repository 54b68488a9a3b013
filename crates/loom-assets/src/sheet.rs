//! Icon sheet CSV input

use loom_core::{IconItem, LoomError, Result};
use std::borrow::Cow;
use std::path::Path;

/// An 8x8 sheet holds at most this many icons
pub const MAX_SHEET_ROWS: usize = 64;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode UTF-8 (BOM stripped), falling back to GBK for legacy exports
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
            if had_errors {
                tracing::warn!("Icon sheet is neither UTF-8 nor clean GBK; some characters were replaced");
            }
            text
        }
    }
}

fn optional(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
}

/// Parse sheet text. Rows need two columns and a non-blank name.
pub fn parse_icon_items(text: &str) -> Result<Vec<IconItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LoomError::CsvError(e.to_string()))?;
        if record.len() < 2 {
            continue;
        }
        let name = record.get(0).unwrap_or_default().trim();
        if name.is_empty() {
            continue;
        }
        items.push(IconItem {
            name: name.to_string(),
            description: record.get(1).unwrap_or_default().trim().to_string(),
            english_name: optional(record.get(2)),
            english_filename: optional(record.get(3)),
        });
        if items.len() >= MAX_SHEET_ROWS {
            break;
        }
    }
    Ok(items)
}

/// Read up to 64 icon rows from a CSV file; a missing file reads as empty
pub fn read_icon_items(path: &Path) -> Result<Vec<IconItem>> {
    if !path.exists() {
        tracing::debug!("No icon sheet at {}", path.display());
        return Ok(Vec::new());
    }
    let bytes = std::fs::read(path)?;
    let items = parse_icon_items(&decode(&bytes))?;
    tracing::debug!("Read {} icon rows from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_csv(bytes: &[u8]) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("loom_assets_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("items.csv");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_bom_and_optional_columns() {
        let path = temp_csv("\u{FEFF}能量电池,蓝色电池,Energy Cell,energy_cell\n扳手,旧扳手\n".as_bytes());
        let items = read_icon_items(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "能量电池");
        assert_eq!(items[0].english_name.as_deref(), Some("Energy Cell"));
        assert_eq!(items[0].english_filename.as_deref(), Some("energy_cell"));
        assert_eq!(items[1].description, "旧扳手");
        assert!(items[1].english_name.is_none());
        cleanup(&path);
    }

    #[test]
    fn test_gbk_fallback() {
        let (encoded, _, _) = encoding_rs::GBK.encode("扳手,旧扳手\n");
        assert!(std::str::from_utf8(&encoded).is_err());
        let path = temp_csv(&encoded);
        let items = read_icon_items(&path).unwrap();
        assert_eq!(items, vec![IconItem::new("扳手", "旧扳手")]);
        cleanup(&path);
    }

    #[test]
    fn test_skips_short_and_nameless_rows() {
        let items = parse_icon_items("only_name\n,orphan description\n  Wrench , old \n\n").unwrap();
        assert_eq!(items, vec![IconItem::new("Wrench", "old")]);
    }

    #[test]
    fn test_caps_at_sheet_size() {
        let text: String = (0..80).map(|i| format!("item{},desc\n", i)).collect();
        let items = parse_icon_items(&text).unwrap();
        assert_eq!(items.len(), MAX_SHEET_ROWS);
        assert_eq!(items[63].name, "item63");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let items = read_icon_items(Path::new("/nonexistent/loom/items.csv")).unwrap();
        assert!(items.is_empty());
    }
}
