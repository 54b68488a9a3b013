//! Clothing preset-sheet prompts

use crate::assemble::{aspect_ratio_line, style_block, BlockToggles, PromptDocument};
use loom_catalog::clothing::{VIEW_MODE_DETAIL_INSET, VIEW_MODE_SINGLE_FRONT, VIEW_MODE_TURNAROUND};
use loom_catalog::{ClothingFacet, FactionPreset, OptionCatalog, StyleConfig};
use loom_core::{colors_to_palette_text, is_specified, Lang, LoomError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PALETTE_COLORS: usize = 5;

const SHEET_STYLE_SUFFIX: &str = "clean outfit reference sheet, garment-focused, no character acting.";
const SHEET_BACKGROUND: &str = "pure white background only, no environment.";
const SWAP_READY_SPEC: &str = "Swap-ready spec: standardized mannequin proportions, no face or hair, \
neutral stance, consistent scale across views, no props.";
const MALE_CUT: &str = "Male cut: straighter shoulder line, longer torso, relaxed waist.";
const FEMALE_CUT: &str = "Female cut: softer shoulder line, defined waist taper, balanced proportions.";

/// One "generate" snapshot of the clothing form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothingSelection {
    pub lang: Lang,
    pub faction: String,
    pub role: String,
    /// Free-text role replacing the selected one
    pub custom_role: String,
    pub gender: String,
    pub outfit_category: String,
    pub silhouette: String,
    pub layering: String,
    pub material: String,
    pub palette: String,
    /// Hex colors replacing the named palette
    pub palette_colors: Vec<String>,
    pub wear_state: String,
    pub view_mode: String,
    pub pose: String,
    pub presentation: String,
    pub aspect_ratio: String,
    pub detail_accents: Vec<String>,
    pub accessories: Vec<String>,
    pub insignia: Vec<String>,
    pub extra_notes: String,
    pub include_style: bool,
    pub include_background: bool,
    pub include_mood: bool,
    pub swap_ready: bool,
}

impl Default for ClothingSelection {
    fn default() -> Self {
        Self {
            lang: Lang::En,
            faction: String::new(),
            role: String::new(),
            custom_role: String::new(),
            gender: String::new(),
            outfit_category: String::new(),
            silhouette: String::new(),
            layering: String::new(),
            material: String::new(),
            palette: String::new(),
            palette_colors: Vec::new(),
            wear_state: String::new(),
            view_mode: String::new(),
            pose: String::new(),
            presentation: String::new(),
            aspect_ratio: String::new(),
            detail_accents: Vec::new(),
            accessories: Vec::new(),
            insignia: Vec::new(),
            extra_notes: String::new(),
            include_style: true,
            include_background: true,
            include_mood: true,
            swap_ready: true,
        }
    }
}

impl ClothingSelection {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            LoomError::InvalidSelection(format!(
                "Failed to parse selection {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn toggles(&self) -> BlockToggles {
        BlockToggles {
            include_style: self.include_style,
            include_background: self.include_background,
            include_mood: self.include_mood,
            include_extra_modifiers: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClothingContext {
    pub catalog: OptionCatalog<ClothingFacet>,
    pub style: StyleConfig,
}

impl ClothingContext {
    pub fn defaults() -> Self {
        Self {
            catalog: OptionCatalog::defaults(),
            style: StyleConfig::clothing_defaults(),
        }
    }

    pub fn load(options_path: &Path, style_path: &Path) -> Self {
        Self {
            catalog: OptionCatalog::load_or_default(options_path),
            style: StyleConfig::load_or_default(style_path, StyleConfig::clothing_defaults()),
        }
    }
}

fn view_spec_lines(view_mode: &str, pose: &str, presentation: &str, swap_ready: bool) -> Vec<String> {
    let layout = match view_mode {
        VIEW_MODE_TURNAROUND => "Turnaround sheet with three orthographic views: front, side, back.",
        VIEW_MODE_DETAIL_INSET => {
            "2x2 grid: front view, back view, side detail inset, material/insignia inset."
        }
        VIEW_MODE_SINGLE_FRONT => "Single full-body front view, centered and full height.",
        _ => "2x2 grid: front view, back view, side view, and 3/4 perspective view.",
    };

    let mut lines = vec![layout.to_string()];
    if is_specified(pose) {
        lines.push(format!("Pose: {}.", pose.trim()));
    }
    if is_specified(presentation) {
        lines.push(format!("Presentation: {}.", presentation.trim()));
    }
    if swap_ready {
        lines.push(SWAP_READY_SPEC.to_string());
    }
    lines
}

fn list_line(prefix: &str, values: &[String]) -> Option<String> {
    let values: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| is_specified(v))
        .collect();
    (!values.is_empty()).then(|| format!("{}: {}.", prefix, values.join(", ")))
}

/// Compose the outfit preset-sheet prompt
pub fn compose_clothing_prompt(ctx: &ClothingContext, selection: &ClothingSelection) -> String {
    let lang = selection.lang;
    let one = |facet: ClothingFacet, label: &str| -> String {
        ctx.catalog.resolve(facet, label, lang).into_string()
    };
    let many = |facet: ClothingFacet, labels: &[String]| -> Vec<String> {
        ctx.catalog
            .resolve_all(facet, labels, lang)
            .into_iter()
            .map(|v| v.into_string())
            .collect()
    };

    let faction = one(ClothingFacet::Faction, &selection.faction);
    let gender = one(ClothingFacet::Gender, &selection.gender);
    let role = match selection.custom_role.trim() {
        "" => one(ClothingFacet::Role, &selection.role),
        custom => custom.to_string(),
    };
    let preset = FactionPreset::find(&faction);

    let mut subject = role.trim().to_string();
    if is_specified(&gender) {
        subject = format!("{} outfit {}", gender, subject);
    }
    if is_specified(&faction) {
        subject = format!("{} from {}", subject.trim(), faction.trim());
    }
    let subject_line = format!("Full-body outfit preset sheet for {}.", subject.trim());

    let palette = colors_to_palette_text(
        &selection.palette_colors[..selection.palette_colors.len().min(MAX_PALETTE_COLORS)],
    )
    .unwrap_or_else(|| one(ClothingFacet::Palette, &selection.palette));

    let mut outfit_bits: Vec<String> = [
        one(ClothingFacet::OutfitCategory, &selection.outfit_category),
        one(ClothingFacet::Silhouette, &selection.silhouette),
        one(ClothingFacet::Layering, &selection.layering),
        one(ClothingFacet::Material, &selection.material),
    ]
    .into_iter()
    .filter(|v| is_specified(v))
    .collect();
    if is_specified(&palette) {
        outfit_bits.push(format!("palette: {}", palette.trim()));
    }
    let wear_state = one(ClothingFacet::WearState, &selection.wear_state);
    if is_specified(&wear_state) {
        outfit_bits.push(wear_state);
    }

    let mut outfit_parts = Vec::new();
    if !outfit_bits.is_empty() {
        outfit_parts.push(format!("Outfit build: {}.", outfit_bits.join(", ")));
    }
    match gender.as_str() {
        "Male" => outfit_parts.push(MALE_CUT.to_string()),
        "Female" => outfit_parts.push(FEMALE_CUT.to_string()),
        _ => {}
    }

    let mut body = vec![subject_line, outfit_parts.join(" ")];
    if let Some(preset) = &preset {
        body.push(preset.guidance_line());
    }
    body.extend(list_line(
        "Garment details",
        &many(ClothingFacet::DetailAccent, &selection.detail_accents),
    ));
    body.extend(list_line(
        "Accessories",
        &many(ClothingFacet::Accessory, &selection.accessories),
    ));
    body.extend(list_line(
        "Insignia placement",
        &many(ClothingFacet::Insignia, &selection.insignia),
    ));
    body.extend(view_spec_lines(
        &one(ClothingFacet::ViewMode, &selection.view_mode),
        &one(ClothingFacet::Pose, &selection.pose),
        &one(ClothingFacet::Presentation, &selection.presentation),
        selection.swap_ready,
    ));

    let aspect_ratio = one(ClothingFacet::AspectRatio, &selection.aspect_ratio);
    if let Some(ratio) = aspect_ratio_line(&aspect_ratio) {
        body.push(format!("Aspect ratio {}", ratio));
    }

    let toggles = selection.toggles();
    if toggles.include_extra_modifiers {
        body.push(selection.extra_notes.trim().to_string());
    }

    let mut doc = PromptDocument::new();
    if toggles.include_style {
        doc.push_line(format!(
            "{} {}",
            style_block(&ctx.style.style, &[]),
            SHEET_STYLE_SUFFIX
        ));
    }
    doc.push_section(body);
    if toggles.include_background {
        doc.push_section([ctx.style.background.trim().to_string(), SHEET_BACKGROUND.to_string()]);
    }
    if toggles.include_mood {
        doc.push_line(ctx.style.mood.trim());
    }
    doc.render()
}
