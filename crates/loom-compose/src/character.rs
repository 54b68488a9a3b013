//! Character portrait prompts
//!
//! A [`CharacterSelection`] holds labels exactly as a UI shows them (in any
//! supported language). Composition maps every label to its canonical value,
//! applies the profession preset, builds the subject sentence and wraps it
//! in the style blocks.

use crate::assemble::{assemble_prompt, AssembleInput, BlockToggles};
use crate::subject::{compose_subject, SubjectSpec};
use loom_catalog::{
    artist_label_to_name, CharacterFacet, OptionCatalog, ProfessionPreset, StyleConfig,
};
use loom_core::{is_specified, Lang, LoomError, Result, UNSPECIFIED};
use loom_translate::TranslateText;
use serde::{Deserialize, Serialize};
use std::path::Path;

const FALLBACK_ROLE: &str = "sci-fi character";
pub const MAX_HAIR_COLORS: usize = 3;
pub const MAX_OUTFIT_COLORS: usize = 5;

/// Age given either as a label or as a number of years
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Years(u32),
    Label(String),
}

impl Default for AgeInput {
    fn default() -> Self {
        AgeInput::Label(UNSPECIFIED.to_string())
    }
}

/// Age bucket for a number of years; 0 means unspecified
pub fn age_from_years(years: u32) -> &'static str {
    match years {
        0 => UNSPECIFIED,
        1..=17 => "Teenage",
        18..=29 => "Young adult",
        30..=44 => "Adult",
        45..=59 => "Mature adult",
        _ => "Elderly",
    }
}

/// One "generate" snapshot of the character form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSelection {
    pub lang: Lang,
    pub profession: String,
    pub custom_profession: String,
    pub framing: String,
    pub gender: String,
    pub age: AgeInput,
    pub aspect_ratio: String,
    pub expression: String,
    pub gaze: String,
    pub body_type: String,
    pub skin_tone: String,
    pub hair_style: String,
    pub hair_color: String,
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
    pub outfit_palette: String,
    pub material: String,
    pub appearance: Vec<String>,
    pub apparel_details: Vec<String>,
    pub accessories: Vec<String>,
    pub tech_details: Vec<String>,
    pub markings: Vec<String>,
    pub artists: Vec<String>,
    pub extra_modifiers: String,
    /// A style reference image is attached; drop the style and mood text
    pub style_reference_only: bool,
}

impl CharacterSelection {
    /// Load a selection from a TOML file
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

    /// Check that the required facets carry a value
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("framing", &self.framing),
            ("expression", &self.expression),
            ("gaze", &self.gaze),
        ] {
            if value.trim().is_empty() {
                return Err(LoomError::InvalidSelection(format!(
                    "'{}' must be selected",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Catalog and style blocks shared by every character composition
#[derive(Debug, Clone)]
pub struct CharacterContext {
    pub catalog: OptionCatalog<CharacterFacet>,
    pub style: StyleConfig,
}

impl CharacterContext {
    pub fn defaults() -> Self {
        Self {
            catalog: OptionCatalog::defaults(),
            style: StyleConfig::character_defaults(),
        }
    }

    /// Load override files, keeping built-in tables for anything unusable
    pub fn load(options_path: &Path, style_path: &Path) -> Self {
        Self {
            catalog: OptionCatalog::load_or_default(options_path),
            style: StyleConfig::load_or_default(style_path, StyleConfig::character_defaults()),
        }
    }
}

/// Translate the free-text fields in one batch
pub fn translate_free_text(selection: &mut CharacterSelection, translator: &dyn TranslateText) {
    let texts = vec![
        selection.custom_profession.clone(),
        selection.extra_modifiers.clone(),
    ];
    let mut translated = translator.translate_many(&texts).into_iter();
    if let Some(profession) = translated.next() {
        selection.custom_profession = profession;
    }
    if let Some(extra) = translated.next() {
        selection.extra_modifiers = extra;
    }
}

fn resolve_age(ctx: &CharacterContext, age: &AgeInput, lang: Lang) -> String {
    match age {
        AgeInput::Years(years) => age_from_years(*years).to_string(),
        AgeInput::Label(label) => match label.trim().parse::<u32>() {
            Ok(years) => age_from_years(years).to_string(),
            Err(_) => ctx
                .catalog
                .resolve(CharacterFacet::Age, label, lang)
                .into_string(),
        },
    }
}

fn truncated(colors: &[String], max: usize) -> Vec<String> {
    colors.iter().take(max).cloned().collect()
}

/// Resolve a selection into subject values
pub fn resolve_subject(ctx: &CharacterContext, selection: &CharacterSelection) -> SubjectSpec {
    let lang = selection.lang;
    let one = |facet: CharacterFacet, label: &str| -> String {
        ctx.catalog.resolve(facet, label, lang).into_string()
    };
    let many = |facet: CharacterFacet, labels: &[String]| -> Vec<String> {
        ctx.catalog
            .resolve_all(facet, labels, lang)
            .into_iter()
            .map(|v| v.into_string())
            .collect()
    };

    let profession = one(CharacterFacet::Profession, &selection.profession);
    let preset = ProfessionPreset::find(&profession);
    let custom = selection.custom_profession.trim();
    let (role, default_outfit) = if !custom.is_empty() {
        (custom.to_string(), None)
    } else {
        match preset {
            Some(p) => (p.role.to_string(), Some(p.outfit.to_string())),
            None => (FALLBACK_ROLE.to_string(), None),
        }
    };

    let mut misc = many(CharacterFacet::TechDetail, &selection.tech_details);
    misc.extend(many(CharacterFacet::Marking, &selection.markings));

    SubjectSpec {
        framing: one(CharacterFacet::Framing, &selection.framing),
        role,
        default_outfit,
        age: resolve_age(ctx, &selection.age, lang),
        gender: one(CharacterFacet::Gender, &selection.gender),
        body_type: one(CharacterFacet::BodyType, &selection.body_type),
        skin_tone: one(CharacterFacet::SkinTone, &selection.skin_tone),
        hair_style: one(CharacterFacet::HairStyle, &selection.hair_style),
        hair_color: one(CharacterFacet::HairColor, &selection.hair_color),
        hair_colors: truncated(&selection.hair_colors, MAX_HAIR_COLORS),
        bangs: one(CharacterFacet::Bangs, &selection.bangs),
        bangs_style: one(CharacterFacet::BangsStyle, &selection.bangs_style),
        face_shape: one(CharacterFacet::FaceShape, &selection.face_shape),
        eye_size: one(CharacterFacet::EyeSize, &selection.eye_size),
        nose_size: one(CharacterFacet::NoseSize, &selection.nose_size),
        mouth_shape: one(CharacterFacet::MouthShape, &selection.mouth_shape),
        cheek_fullness: one(CharacterFacet::CheekFullness, &selection.cheek_fullness),
        jaw_width: one(CharacterFacet::JawWidth, &selection.jaw_width),
        eye_color: one(CharacterFacet::EyeColor, &selection.eye_color),
        outfit_type: one(CharacterFacet::OutfitType, &selection.outfit_type),
        outfit_colors: truncated(&selection.outfit_colors, MAX_OUTFIT_COLORS),
        outfit_palette: one(CharacterFacet::OutfitPalette, &selection.outfit_palette),
        material: one(CharacterFacet::Material, &selection.material),
        appearance: many(CharacterFacet::Appearance, &selection.appearance),
        apparel: many(CharacterFacet::ApparelDetail, &selection.apparel_details),
        accessories: many(CharacterFacet::Accessory, &selection.accessories),
        misc,
        expression: one(CharacterFacet::Expression, &selection.expression),
        gaze: one(CharacterFacet::Gaze, &selection.gaze),
    }
}

/// Compose the full character prompt
pub fn compose_character_prompt(ctx: &CharacterContext, selection: &CharacterSelection) -> String {
    let subject = compose_subject(&resolve_subject(ctx, selection));
    let aspect_ratio = ctx
        .catalog
        .resolve(CharacterFacet::AspectRatio, &selection.aspect_ratio, selection.lang)
        .into_string();
    let artists: Vec<String> = selection
        .artists
        .iter()
        .filter(|a| is_specified(a))
        .map(|a| artist_label_to_name(a, &ctx.style.artists, selection.lang))
        .collect();

    let toggles = if selection.style_reference_only {
        BlockToggles::style_reference_only()
    } else {
        BlockToggles::default()
    };

    assemble_prompt(
        &AssembleInput {
            style: &ctx.style.style,
            background: &ctx.style.background,
            mood: &ctx.style.mood,
            artists: &artists,
            subject: &subject,
            aspect_ratio: &aspect_ratio,
            extra_modifiers: &selection.extra_modifiers,
        },
        &toggles,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn scenario_a() -> CharacterSelection {
        CharacterSelection {
            profession: "Space Pilot".to_string(),
            framing: "bust portrait".to_string(),
            gender: "Unspecified".to_string(),
            age: AgeInput::Years(25),
            aspect_ratio: "Unspecified".to_string(),
            expression: "serious expression".to_string(),
            gaze: "looking at camera".to_string(),
            ..Default::default()
        }
    }

    fn subject_line(text: &str) -> &str {
        text.split("\n\n").nth(1).unwrap()
    }

    #[test]
    fn test_young_adult_space_pilot() {
        let ctx = CharacterContext::defaults();
        let text = compose_character_prompt(&ctx, &scenario_a());
        let subject = subject_line(&text);
        assert!(subject.starts_with("bust portrait, a young adult space pilot wearing a"));
        assert!(!subject.contains(" with "));
        assert!(!subject.contains("  "));
        assert!(text.ends_with('\n') && !text.ends_with("\n\n"));
    }

    #[test]
    fn test_featureless_presets_have_no_with_clause() {
        let ctx = CharacterContext::defaults();
        for preset in loom_catalog::PROFESSION_PRESETS {
            let selection = CharacterSelection {
                profession: preset.name.to_string(),
                ..scenario_a()
            };
            let text = compose_character_prompt(&ctx, &selection);
            let subject = subject_line(&text);
            assert!(subject.contains(preset.role), "{}", preset.name);
            assert!(!subject.contains(" with "), "{}: {}", preset.name, subject);
        }
    }

    #[test]
    fn test_zh_labels_resolve() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            lang: Lang::Zh,
            profession: "太空飞行员".to_string(),
            framing: "胸像".to_string(),
            gender: "女性".to_string(),
            age: AgeInput::Label("青年".to_string()),
            expression: "严肃".to_string(),
            gaze: "直视镜头".to_string(),
            hair_style: "长直发".to_string(),
            appearance: vec!["浅雀斑".to_string()],
            ..Default::default()
        };
        let subject = compose_subject(&resolve_subject(&ctx, &selection));
        assert!(subject.starts_with("bust portrait, a young adult female space pilot"));
        assert!(subject.contains("with subtle freckles, long straight hair"));
    }

    #[test]
    fn test_hair_palette_priority() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            hair_style: "long straight".to_string(),
            hair_color: "Unspecified".to_string(),
            hair_colors: vec!["#FF0000".to_string(), "#0000FF".to_string()],
            ..scenario_a()
        };
        let text = compose_character_prompt(&ctx, &selection);
        assert!(text.contains("long straight hair dyed in red, blue tones"));
    }

    #[test]
    fn test_color_lists_truncated() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            hair_colors: vec!["#FF0000".to_string(); 5],
            outfit_colors: vec!["#0000FF".to_string(); 8],
            ..scenario_a()
        };
        let spec = resolve_subject(&ctx, &selection);
        assert_eq!(spec.hair_colors.len(), MAX_HAIR_COLORS);
        assert_eq!(spec.outfit_colors.len(), MAX_OUTFIT_COLORS);
    }

    #[test]
    fn test_aspect_ratio_line() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            aspect_ratio: "1:1 square".to_string(),
            ..scenario_a()
        };
        let text = compose_character_prompt(&ctx, &selection);
        assert!(text.lines().any(|l| l == "1:1."));

        let text = compose_character_prompt(&ctx, &scenario_a());
        assert!(!text.lines().any(|l| l.ends_with(':') || l == "1:1."));
    }

    #[test]
    fn test_custom_profession_overrides_preset() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            custom_profession: "  asteroid miner ".to_string(),
            ..scenario_a()
        };
        let spec = resolve_subject(&ctx, &selection);
        assert_eq!(spec.role, "asteroid miner");
        assert_eq!(spec.default_outfit, None);

        let text = compose_character_prompt(&ctx, &selection);
        assert!(text.contains("a young adult asteroid miner wearing a retro-futuristic uniform"));
        assert!(!text.contains("flight jacket"));
        assert!(!text.contains("space pilot"));
    }

    #[test]
    fn test_unknown_profession_falls_back() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            profession: "Chef".to_string(),
            ..scenario_a()
        };
        assert_eq!(resolve_subject(&ctx, &selection).role, "sci-fi character");
    }

    #[test]
    fn test_age_buckets() {
        assert_eq!(age_from_years(0), "Unspecified");
        assert_eq!(age_from_years(16), "Teenage");
        assert_eq!(age_from_years(25), "Young adult");
        assert_eq!(age_from_years(44), "Adult");
        assert_eq!(age_from_years(45), "Mature adult");
        assert_eq!(age_from_years(80), "Elderly");
    }

    #[test]
    fn test_misc_is_tech_then_markings() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            tech_details: vec!["visor".to_string()],
            markings: vec!["warning decals".to_string()],
            accessories: vec!["headset".to_string()],
            ..scenario_a()
        };
        let spec = resolve_subject(&ctx, &selection);
        assert_eq!(spec.misc, vec!["visor", "warning decals"]);
        assert!(compose_subject(&spec).contains("with headset, visor, warning decals"));
    }

    #[test]
    fn test_artists_and_style_reference_mode() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            artists: vec!["Haruhiko Mikimoto (Works: Macross)".to_string()],
            extra_modifiers: "night hangar".to_string(),
            ..scenario_a()
        };
        let text = compose_character_prompt(&ctx, &selection);
        assert!(text.contains("Artist style reference: Haruhiko Mikimoto."));
        assert!(text.starts_with(ctx.style.style.as_str()));

        let reference_only = CharacterSelection {
            style_reference_only: true,
            ..selection
        };
        let text = compose_character_prompt(&ctx, &reference_only);
        assert!(text.starts_with("bust portrait"));
        assert!(!text.contains(ctx.style.mood.as_str()));
        assert!(text.contains(ctx.style.background.as_str()));
        assert!(text.ends_with("night hangar\n"));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let ctx = CharacterContext::defaults();
        let selection = CharacterSelection {
            outfit_colors: vec!["#336699".to_string()],
            material: "leather".to_string(),
            ..scenario_a()
        };
        assert_eq!(
            compose_character_prompt(&ctx, &selection),
            compose_character_prompt(&ctx, &selection)
        );
    }

    #[test]
    fn test_validate() {
        assert!(scenario_a().validate().is_ok());
        let missing = CharacterSelection {
            gaze: " ".to_string(),
            ..scenario_a()
        };
        assert!(matches!(missing.validate(), Err(LoomError::InvalidSelection(_))));
    }

    struct Recording {
        seen: RefCell<Vec<Vec<String>>>,
    }

    impl TranslateText for Recording {
        fn translate_many(&self, texts: &[String]) -> Vec<String> {
            self.seen.borrow_mut().push(texts.to_vec());
            texts.iter().map(|t| format!("en:{}", t)).collect()
        }
    }

    #[test]
    fn test_translate_free_text_single_batch() {
        let translator = Recording {
            seen: RefCell::new(Vec::new()),
        };
        let mut selection = CharacterSelection {
            custom_profession: "矿工".to_string(),
            extra_modifiers: "雨夜".to_string(),
            ..scenario_a()
        };
        translate_free_text(&mut selection, &translator);
        assert_eq!(selection.custom_profession, "en:矿工");
        assert_eq!(selection.extra_modifiers, "en:雨夜");
        assert_eq!(translator.seen.borrow().len(), 1);
    }

    #[test]
    fn test_load_selection_toml() {
        let dir =
            std::env::temp_dir().join(format!("loom_selection_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pilot.toml");
        std::fs::write(
            &path,
            r##"
lang = "zh"
profession = "领航员"
framing = "半身"
age = 33
expression = "冷静"
gaze = "侧视"
hair_colors = ["#C0C0C0"]
"##,
        )
        .unwrap();
        let selection = CharacterSelection::load(&path).unwrap();
        assert_eq!(selection.lang, Lang::Zh);
        assert_eq!(selection.age, AgeInput::Years(33));

        let subject = compose_subject(&resolve_subject(&CharacterContext::defaults(), &selection));
        assert!(subject.starts_with("half body portrait, a adult ship navigator"));
        assert!(subject.contains("hair dyed in"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
