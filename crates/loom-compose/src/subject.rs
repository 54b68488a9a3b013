//! Subject sentence composer
//!
//! Produces one sentence of the form
//!
//! ```text
//! <framing>, a <demographic> <role> <outfit clause> with <features>, <expression>, <gaze>.
//! ```
//!
//! Features are appended in a fixed order (appearance, skin, hair, bangs,
//! face structure, eyes, apparel, accessories, misc). Reordering them
//! changes what the image model emphasizes, so the order is frozen.

use loom_core::{colors_to_palette_text, is_specified};

/// Outfit phrase used when the role carries no default outfit
pub const GENERIC_OUTFIT: &str = "wearing a retro-futuristic uniform";

const NO_BANGS: &str = "no bangs";

/// Resolved canonical values for one subject sentence.
///
/// Blank strings and `Unspecified` both mean "leave this out".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectSpec {
    pub framing: String,
    pub role: String,
    /// Role-derived outfit phrase ("wearing a ...")
    pub default_outfit: Option<String>,
    pub age: String,
    pub gender: String,
    pub body_type: String,
    pub skin_tone: String,
    pub hair_style: String,
    pub hair_color: String,
    /// Hex colors in the order the user added them
    pub hair_colors: Vec<String>,
    pub bangs: String,
    pub bangs_style: String,
    pub face_shape: String,
    pub eye_size: String,
    pub nose_size: String,
    pub mouth_shape: String,
    pub cheek_fullness: String,
    pub jaw_width: String,
    pub eye_color: String,
    pub outfit_type: String,
    pub outfit_colors: Vec<String>,
    /// Named palette, used only when no outfit colors are given
    pub outfit_palette: String,
    pub material: String,
    pub appearance: Vec<String>,
    pub apparel: Vec<String>,
    pub accessories: Vec<String>,
    pub misc: Vec<String>,
    pub expression: String,
    pub gaze: String,
}

fn push_if(features: &mut Vec<String>, value: &str) {
    if is_specified(value) {
        features.push(value.trim().to_string());
    }
}

fn extend_specified(features: &mut Vec<String>, values: &[String]) {
    for value in values {
        push_if(features, value);
    }
}

fn hair_phrase(spec: &SubjectSpec) -> Option<String> {
    let palette = colors_to_palette_text(&spec.hair_colors);
    let style = is_specified(&spec.hair_style).then(|| spec.hair_style.trim());
    let color = is_specified(&spec.hair_color).then(|| spec.hair_color.trim());

    match (style, palette, color) {
        (Some(s), Some(p), _) => Some(format!("{} hair dyed in {} tones", s, p)),
        (Some(s), None, Some(c)) => Some(format!("{} {} hair", s, c)),
        (Some(s), None, None) => Some(format!("{} hair", s)),
        (None, Some(p), _) => Some(format!("hair dyed in {} tones", p)),
        (None, None, Some(c)) => Some(format!("{} hair", c)),
        (None, None, None) => None,
    }
}

/// Flat feature list in contract order
pub fn feature_list(spec: &SubjectSpec) -> Vec<String> {
    let mut features = Vec::new();

    extend_specified(&mut features, &spec.appearance);
    push_if(&mut features, &spec.skin_tone);
    if let Some(hair) = hair_phrase(spec) {
        features.push(hair);
    }

    let no_bangs = spec.bangs.trim() == NO_BANGS;
    push_if(&mut features, &spec.bangs);
    if !no_bangs {
        push_if(&mut features, &spec.bangs_style);
    }

    for value in [
        &spec.face_shape,
        &spec.eye_size,
        &spec.nose_size,
        &spec.mouth_shape,
        &spec.cheek_fullness,
        &spec.jaw_width,
    ] {
        push_if(&mut features, value);
    }

    if is_specified(&spec.eye_color) {
        features.push(format!("{} eyes", spec.eye_color.trim()));
    }

    extend_specified(&mut features, &spec.apparel);
    extend_specified(&mut features, &spec.accessories);
    extend_specified(&mut features, &spec.misc);
    features
}

/// Outfit clause: default or generic outfit plus type, colors and material
pub fn outfit_clause(spec: &SubjectSpec) -> String {
    let default_outfit = spec
        .default_outfit
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty());

    let mut clause = match (default_outfit, is_specified(&spec.outfit_type)) {
        (Some(outfit), true) => format!("{}, styled as {}", outfit, spec.outfit_type.trim()),
        (Some(outfit), false) => outfit.to_string(),
        (None, true) => format!("wearing a {}", spec.outfit_type.trim()),
        (None, false) => GENERIC_OUTFIT.to_string(),
    };

    if let Some(palette) = colors_to_palette_text(&spec.outfit_colors) {
        clause.push_str(&format!(" in a palette of {}", palette));
    } else if is_specified(&spec.outfit_palette) {
        clause.push_str(&format!(" in {} tones", spec.outfit_palette.trim()));
    }

    if is_specified(&spec.material) {
        clause.push_str(&format!(", featuring {} materials", spec.material.trim()));
    }
    clause
}

/// Lowercased age, gender and body type, joined by spaces
pub fn demographic_prefix(spec: &SubjectSpec) -> String {
    [&spec.age, &spec.gender, &spec.body_type]
        .into_iter()
        .filter(|v| is_specified(v))
        .map(|v| v.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compose the subject sentence
pub fn compose_subject(spec: &SubjectSpec) -> String {
    let demographic = demographic_prefix(spec);
    let role = spec.role.trim();
    let noun = if demographic.is_empty() {
        role.to_string()
    } else {
        format!("{} {}", demographic, role)
    };
    let subject = format!("a {}", noun);

    let features = feature_list(spec);
    let mut core = format!("{} {}", subject, outfit_clause(spec));
    if !features.is_empty() {
        core.push_str(" with ");
        core.push_str(&features.join(", "));
    }

    let mut parts = Vec::with_capacity(4);
    if is_specified(&spec.framing) {
        parts.push(spec.framing.trim().to_string());
    }
    parts.push(core);
    for tail in [&spec.expression, &spec.gaze] {
        if is_specified(tail) {
            parts.push(tail.trim().to_string());
        }
    }
    format!("{}.", parts.join(", "))
}
