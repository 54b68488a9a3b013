//! 8x8 item-icon sprite sheet prompts

use loom_core::IconItem;
use loom_translate::TranslateText;
use std::fmt::Write as _;

pub const GRID_SIZE: usize = 8;
pub const MAX_ICON_ITEMS: usize = GRID_SIZE * GRID_SIZE;

const ART_STYLE: &str = "\n**ART STYLE (90s Konami Tech-Noir Adventure):**
1. **Genre Core**: 90s Japanese PC adventure game art asset. Hard sci-fi anime blend with gritty graphic novel art.
2. **Texture & Technique**: Retro digital painting feel. Visible dithering patterns in shadows. Bitmapped graphics aesthetic, raster texture.
3. **Line Art & Shading**: Style influence of Yoji Shinkawa (early work). Heavy use of solid blacks for shadows. Hard, angular highlights on metallic surfaces.
4. **Color Palette**: Muted and Cold. Desaturated blues, grays, industrial tones. High contrast. (Adapted for white background).
`";

fn header(count: usize) -> String {
    format!(
        "# \n`A strictly organized technical sprite sheet in a {g}x{g} grid layout containing {count} distinct RPG item icons.

**LAYOUT & FORMAT CRITERIA (CRITICAL):**
1. **ASPECT RATIO is strictly 1:1 (Square Canvas).**
2. The canvas must be a precise {g}x{g} grid.
3. Each cell in the grid must contain EXACTLY ONE item icon.
4. **PERSPECTIVE**: All icons must be presented in a **UNIFORM ISOMETRIC VIEW** (approx 45 degrees).
5. **BACKGROUND MUST BE PURE WHITE (#FFFFFF).**
6. Total items: {count}. If fewer than {max}, leave remaining cells empty.
7. **NEGATIVE CONSTRAINT**: **NO TEXT. NO LETTERS. NO NUMBERS. NO LABELS.** The icons must be purely visual.

**GRID CONTENTS:**
",
        g = GRID_SIZE,
        count = count,
        max = MAX_ICON_ITEMS,
    )
}

/// Sprite-sheet prompt for up to 64 items, filled row-major.
///
/// Returns `None` when there is nothing to draw. Items past the 64th are
/// ignored.
pub fn compose_icon_grid_prompt(items: &[IconItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let items = &items[..items.len().min(MAX_ICON_ITEMS)];

    let mut prompt = header(items.len());
    for (i, item) in items.iter().enumerate() {
        let row = i / GRID_SIZE + 1;
        let col = i % GRID_SIZE + 1;
        let _ = writeln!(
            prompt,
            "Row {}, Col {}: **{}** - {}",
            row,
            col,
            item.name.trim(),
            item.description.trim()
        );
    }
    prompt.push_str(ART_STYLE);
    Some(prompt)
}

/// Translate item names and descriptions to English.
///
/// A cached English name is used as-is and never sent to the translator.
/// Names and descriptions go out as two order-preserving batches.
pub fn translate_items(items: &[IconItem], translator: &dyn TranslateText) -> Vec<IconItem> {
    let cached = |item: &IconItem| {
        item.english_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    };

    let pending: Vec<String> = items
        .iter()
        .filter(|item| cached(item).is_none())
        .map(|item| item.name.clone())
        .collect();
    tracing::debug!(
        "Translating {} icon names ({} cached) and {} descriptions",
        pending.len(),
        items.len() - pending.len(),
        items.len()
    );
    let mut translated_names = translator.translate_many(&pending).into_iter();

    let descriptions: Vec<String> = items.iter().map(|i| i.description.clone()).collect();
    let translated_descriptions = translator.translate_many(&descriptions);

    items
        .iter()
        .zip(translated_descriptions)
        .map(|(item, description)| {
            let name = match cached(item) {
                Some(name) => name,
                None => translated_names.next().unwrap_or_else(|| item.name.clone()),
            };
            IconItem {
                name,
                description,
                english_name: item.english_name.clone(),
                english_filename: item.english_filename.clone(),
            }
        })
        .collect()
}
