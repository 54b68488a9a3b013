//! Technology tiers

use std::fmt;

/// Component power/quality level, 1 (civilian) to 5 (legendary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Civilian,
    Industrial,
    Military,
    Elite,
    Legendary,
}

/// Tier-wide wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierInfo {
    /// First entry names the sheet, second flavors the aesthetic
    pub adjectives: [&'static str; 5],
    pub design_language: &'static str,
    pub color_palette: &'static str,
}

const CIVILIAN: TierInfo = TierInfo {
    adjectives: ["Basic", "Rudimentary", "Improvised", "Low-Cost", "Civilian-Grade"],
    design_language: "Exposed skeleton, rough welding, functional but ugly, mismatched panels.",
    color_palette: "Rusted orange, dull grey, caution yellow stripes.",
};

const INDUSTRIAL: TierInfo = TierInfo {
    adjectives: ["Standard", "Heavy-Duty", "Mass-Produced", "Reliable", "Reinforced"],
    design_language: "Blocky, utilitarian, thick frames, modular connection points.",
    color_palette: "Industrial safety orange, gunmetal grey, white details.",
};

const MILITARY: TierInfo = TierInfo {
    adjectives: ["Advanced", "High-Tech", "Precision", "Elite", "Prototype"],
    design_language: "Sleek armor, active energy lines, aerodynamic cowlings, hexagonal patterns.",
    color_palette: "Matte navy blue, glowing neon cyan, polished chrome.",
};

const ELITE: TierInfo = TierInfo {
    adjectives: ["Elite", "Experimental", "Bleeding-Edge", "Secret", "Overclocked"],
    design_language: "Unstable energy signatures, floating components, forbidden geometry, exposed power cores.",
    color_palette: "Void purple, unstable crimson, quantum white details.",
};

const LEGENDARY: TierInfo = TierInfo {
    adjectives: ["Legendary", "Precursor", "Monolithic", "Lost-Tech", "Transcendant"],
    design_language: "Seamless matte-black ceramic, floating geometric shapes, defying gravity, \
zero visible seams, pulsing silent energy.",
    color_palette: "Matte black ceramic, blinding white energy, obsidian finish.",
};

impl Tier {
    pub fn all() -> [Tier; 5] {
        [
            Tier::Civilian,
            Tier::Industrial,
            Tier::Military,
            Tier::Elite,
            Tier::Legendary,
        ]
    }

    /// `TIER_n_*` identifier
    pub fn name(self) -> &'static str {
        match self {
            Tier::Civilian => "TIER_1_CIVILIAN",
            Tier::Industrial => "TIER_2_INDUSTRIAL",
            Tier::Military => "TIER_3_MILITARY",
            Tier::Elite => "TIER_4_ELITE",
            Tier::Legendary => "TIER_5_LEGENDARY",
        }
    }

    pub fn level(self) -> u8 {
        self as u8 + 1
    }

    /// Accepts the `TIER_n_*` identifier (any case) or the bare level
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s) || t.level().to_string() == s)
    }

    pub fn info(self) -> &'static TierInfo {
        match self {
            Tier::Civilian => &CIVILIAN,
            Tier::Industrial => &INDUSTRIAL,
            Tier::Military => &MILITARY,
            Tier::Elite => &ELITE,
            Tier::Legendary => &LEGENDARY,
        }
    }

    /// Word leading each weapon feature description
    pub fn feature_prefix(self) -> &'static str {
        match self {
            Tier::Civilian => "Simple",
            Tier::Industrial => "Heavy",
            Tier::Military => "Advanced",
            Tier::Elite => "Experimental",
            Tier::Legendary => "Monolithic",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_levels() {
        assert_eq!(Tier::from_name("TIER_5_LEGENDARY"), Some(Tier::Legendary));
        assert_eq!(Tier::from_name("tier_2_industrial"), Some(Tier::Industrial));
        assert_eq!(Tier::from_name("3"), Some(Tier::Military));
        assert_eq!(Tier::from_name("TIER_6_MYTHIC"), None);
        assert_eq!(Tier::from_name("0"), None);
    }

    #[test]
    fn test_levels_are_ordered() {
        let levels: Vec<u8> = Tier::all().iter().map(|t| t.level()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
        assert_eq!(Tier::Elite.info().adjectives[0], "Elite");
    }
}
