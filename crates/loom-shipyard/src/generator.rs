//! Reference-sheet prompt document for one component

use crate::component::{variant_description, ComponentCategory, SubjectProfile};
use crate::manufacturer::Manufacturer;
use crate::tier::Tier;
use loom_core::{color_to_descriptor, LoomError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Write as _;

/// Number of features drawn from a subcategory's pool
pub const FEATURE_SAMPLE_SIZE: usize = 3;

const LAYOUT_CRITERIA: &str = "**LAYOUT & FORMAT CRITERIA (CRITICAL):**
The final image must be a clean, professional reference sheet showing exactly four views.
The views must be arranged in a precise 2x2 GRID on the canvas (Aspect Ratio 1:1).
VIEWS MUST BE ISOLATED AND MUST NOT OVERLAP.
Background must be PURE SOLID WHITE (#FFFFFF).";

const VIEW_PROTOCOL: &str = "VIEW ANGLES PROTOCOL:
The sheet must contain these 4 distinct views of the exact same object:
1. Orthographic Front View
2. Orthographic Side View
3. Orthographic Top View
4. Isometric Perspective View (3/4 view)";

/// Everything that identifies one component sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    pub tier: Tier,
    pub category: ComponentCategory,
    pub subcategory: String,
    pub variation: Option<String>,
    pub manufacturer: Option<Manufacturer>,
    /// Main body color (hex or a color word)
    pub primary_color: Option<String>,
    /// Energy/glow color (hex or a color word)
    pub secondary_color: Option<String>,
}

impl ComponentRequest {
    pub fn new(tier: Tier, category: ComponentCategory, subcategory: &str) -> Self {
        Self {
            tier,
            category,
            subcategory: subcategory.trim().to_string(),
            variation: None,
            manufacturer: None,
            primary_color: None,
            secondary_color: None,
        }
    }

    /// Build from UI strings, e.g. `("TIER_3_MILITARY", "Weapon", "Beam")`
    pub fn from_names(tier: &str, category: &str, subcategory: &str) -> Result<Self> {
        let tier = Tier::from_name(tier)
            .ok_or_else(|| LoomError::InvalidSelection(format!("Invalid tier: {}", tier)))?;
        let category = ComponentCategory::from_name(category)
            .ok_or_else(|| LoomError::InvalidSelection(format!("Invalid category: {}", category)))?;
        Ok(Self::new(tier, category, subcategory))
    }

    pub fn with_variation(mut self, variation: Option<&str>) -> Self {
        self.variation = variation
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: Option<Manufacturer>) -> Self {
        self.manufacturer = manufacturer;
        self
    }

    pub fn with_colors(mut self, primary: Option<&str>, secondary: Option<&str>) -> Self {
        let clean = |c: Option<&str>| c.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string);
        self.primary_color = clean(primary);
        self.secondary_color = clean(secondary);
        self
    }
}

/// Capitalize the first letter of every word, lowercasing the rest.
///
/// A word starts after any non-alphabetic character, so
/// "high-voltage cables" becomes "High-Voltage Cables".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

pub struct ComponentGenerator {
    request: ComponentRequest,
}

impl ComponentGenerator {
    pub fn new(request: ComponentRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &ComponentRequest {
        &self.request
    }

    /// Full prompt with features drawn from the thread-local RNG
    pub fn generate_prompt(&self) -> String {
        self.generate(&mut rand::thread_rng())
    }

    /// Full prompt with features drawn from `rng`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}\n\n{}`\n",
            self.header(),
            LAYOUT_CRITERIA,
            self.subject_description(rng),
            VIEW_PROTOCOL,
            self.art_style()
        )
    }

    fn variation(&self) -> Option<&str> {
        self.request.variation.as_deref()
    }

    fn subject_name(&self) -> String {
        let req = &self.request;
        let adjective = req.tier.info().adjectives[0];
        let mut name = format!("{} {} {}", adjective, req.subcategory, req.category);
        if let Some(maker) = &req.manufacturer {
            name = format!("{} {}", maker.name, name);
        }
        if let Some(variation) = self.variation().filter(|v| *v != "Standard") {
            let _ = write!(name, " ({})", variation);
        }
        name
    }

    fn header(&self) -> String {
        format!(
            "# \n\n`A strictly organized technical reference sheet in a 2x2 grid layout showing 4 views of a {}.",
            self.subject_name()
        )
    }

    fn design_language(&self) -> String {
        let base = self.request.tier.info().design_language;
        match &self.request.manufacturer {
            Some(maker) => format!("{} Blended with {}", maker.design_language, base),
            None => base.to_string(),
        }
    }

    /// Manufacturer palette, then the custom color pair, then the tier default
    fn palette(&self) -> String {
        let req = &self.request;
        if let Some(maker) = &req.manufacturer {
            return maker.color_palette.clone();
        }
        if let (Some(primary), Some(secondary)) = (&req.primary_color, &req.secondary_color) {
            return format!(
                "{} main body, {} energy/glow, dark mechanical details.",
                color_to_descriptor(primary),
                color_to_descriptor(secondary)
            );
        }
        req.tier.info().color_palette.to_string()
    }

    fn art_style(&self) -> String {
        format!(
            "ART STYLE (Unified PC-98 Cel-Shading):
Retro Japanese PC-98 computer game aesthetic fused with anime cel-shading.
1. Bold, distinct black outlines on all edges.
2. Hard-edged block shading across ALL views showing weight and depth. High contrast retro anime look.
Color Palette: {}",
            self.palette()
        )
    }

    fn sample_features<R: Rng + ?Sized>(&self, pool: &[&'static str], rng: &mut R) -> Vec<&'static str> {
        let mut pool = pool.to_vec();
        let amount = FEATURE_SAMPLE_SIZE.min(pool.len());
        let (picked, _) = pool.partial_shuffle(rng, amount);
        picked.to_vec()
    }

    fn subject_description<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let req = &self.request;
        let info = req.tier.info();
        let is_weapon = req.category == ComponentCategory::Weapon;
        let profile = SubjectProfile::resolve(req.category, &req.subcategory, self.variation());

        let mut features = String::new();
        for (i, feature) in self.sample_features(profile.features, rng).iter().enumerate() {
            let detail = if is_weapon {
                format!(
                    "{} {} integrated with the main body.",
                    req.tier.feature_prefix(),
                    feature
                )
            } else {
                format!("Integrated {}.", feature)
            };
            let _ = writeln!(features, "{}. **{}:** {}", i + 1, title_case(feature), detail);
        }

        let design_note = if is_weapon {
            format!("This is a {}. {}", profile.name, profile.negative)
        } else {
            profile.negative.to_string()
        };

        let mut description = format!(
            "This design is a {} with a {} aesthetic. {}",
            profile.name,
            info.adjectives[1],
            self.design_language()
        );
        if is_weapon {
            if let Some(variant) = variant_description(self.variation()) {
                let _ = write!(description, "\n\n> **STRUCTURAL VARIANT:** {}", variant);
            }
        }

        format!(
            "SUBJECT DESCRIPTION ({adj} {flavor}):\n**CRITICAL DESIGN NOTE:** {note}\n\n{description}\n**{adj} Features:**\n{features}",
            adj = info.adjectives[0],
            flavor = profile.flavor_name,
            note = design_note,
            description = description,
            features = features.trim_end()
        )
    }
}
