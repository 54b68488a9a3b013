//! Component categories, subcategories and structural variants

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    Weapon,
    Shield,
    Engine,
    Cargo,
}

impl ComponentCategory {
    pub fn all() -> [ComponentCategory; 4] {
        [
            ComponentCategory::Weapon,
            ComponentCategory::Shield,
            ComponentCategory::Engine,
            ComponentCategory::Cargo,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            ComponentCategory::Weapon => "Weapon",
            ComponentCategory::Shield => "Shield",
            ComponentCategory::Engine => "Engine",
            ComponentCategory::Cargo => "Cargo",
        }
    }

    /// Case-insensitive category lookup
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed subcategory set of a category
pub fn subcategories(category: ComponentCategory) -> &'static [&'static str] {
    match category {
        ComponentCategory::Weapon => &["Kinetic", "Beam", "Missile", "MechaHangar"],
        ComponentCategory::Shield => &["Bubble", "Plate"],
        ComponentCategory::Engine => &["Ion", "Chemical", "Warp"],
        ComponentCategory::Cargo => &["Standard", "Fluid", "Secure"],
    }
}

const WEAPON_VARIANTS: &[(&str, &[&str])] = &[
    (
        "Kinetic",
        &["Standard", "Long-Barrel (Sniper)", "Twin-Linked (Rapid)", "Gatling (Rotary)"],
    ),
    (
        "Beam",
        &["Standard", "Focus Lance (Sniper)", "Prism Array (Scatter)", "Twin-Linked (Rapid)"],
    ),
    (
        "Missile",
        &["Standard Pod", "VLS Array (Vertical)", "Torpedo Tube (Heavy)"],
    ),
    ("MechaHangar", &["Standard", "Catapult Deck", "Repair Bay"]),
];

/// Structural variants offered for a subcategory; `["Standard"]` when it has none
pub fn variants_for(category: ComponentCategory, subcategory: &str) -> &'static [&'static str] {
    if category == ComponentCategory::Weapon {
        if let Some((_, variants)) = WEAPON_VARIANTS.iter().find(|(s, _)| *s == subcategory) {
            return variants;
        }
    }
    &["Standard"]
}

/// Whether a variant changes nothing about the base design
pub(crate) fn is_standard(variation: Option<&str>) -> bool {
    variation.map_or(true, |v| v.trim().is_empty() || v.contains("Standard"))
}

/// Paragraph describing a weapon's physical configuration override
pub(crate) fn variant_description(variation: Option<&str>) -> Option<&'static str> {
    let variation = variation?;
    if is_standard(Some(variation)) {
        return None;
    }
    const DESCRIPTIONS: &[(&str, &str)] = &[
        (
            "Long-Barrel",
            "This design features an extremely long, reinforced railgun-style barrel for long-range engagement. The barrel length is exaggerated.",
        ),
        (
            "Twin-Linked",
            "This design features TWO parallel weapon barrels/emitters mounted side-by-side (Twin-Linked configuration).",
        ),
        (
            "Gatling",
            "This design features a rotary multi-barrel gatling mechanism. Massive ammo drum and cooling jackets.",
        ),
        (
            "Focus Lance",
            "This design features a massive singular focusing lens structure for sniper-class beam projection.",
        ),
        (
            "Prism Array",
            "This design features a honeycomb-like array of multiple small beam emitter prisms.",
        ),
        (
            "VLS",
            "This design is a Vertical Launch System (VLS) array, featuring a grid of missile silo doors flush with the armor.",
        ),
        (
            "Torpedo",
            "This design features a single massive large-bore launch tube for heavy anti-ship torpedoes.",
        ),
    ];
    DESCRIPTIONS
        .iter()
        .find(|(key, _)| variation.contains(key))
        .map(|(_, text)| *text)
}

/// Naming, negative prompt and feature pool for one subcategory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectProfile {
    pub name: &'static str,
    pub flavor_name: &'static str,
    pub negative: &'static str,
    pub features: &'static [&'static str],
}

impl SubjectProfile {
    const fn new(
        name: &'static str,
        flavor_name: &'static str,
        negative: &'static str,
        features: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            flavor_name,
            negative,
            features,
        }
    }

    /// Profile for a subcategory; structural variants may swap the feature pool
    pub fn resolve(
        category: ComponentCategory,
        subcategory: &str,
        variation: Option<&str>,
    ) -> SubjectProfile {
        let has = |key: &str| variation.is_some_and(|v| v.contains(key));
        match (category, subcategory) {
            (ComponentCategory::Weapon, "Kinetic") => {
                let features: &'static [&'static str] = if has("Gatling") {
                    &["rotary barrel assembly", "massive ammo feeder", "cooling motors"]
                } else if has("Twin-Linked") {
                    &["twin parallel barrels", "synchronized recoil system", "dual ammo feed"]
                } else {
                    &[
                        "rifled barrel",
                        "ammo box mechanism",
                        "recoil hydraulics",
                        "shell casing ejection port",
                        "muzzle brake",
                    ]
                };
                Self::new(
                    "Kinetic Cannon",
                    "Ballistic Weapon System",
                    "NO laser beams. NO energy crystals.",
                    features,
                )
            }
            (ComponentCategory::Weapon, "Beam") => {
                let features: &'static [&'static str] = if has("Prism") {
                    &["prism array honeycomb", "multi-phase capacitors", "refraction crystals"]
                } else {
                    &[
                        "focusing lens",
                        "heat sink fins",
                        "power cables",
                        "capacitor banks",
                        "optical sensors",
                    ]
                };
                Self::new(
                    "Beam Emitter",
                    "Directed Energy Weapon",
                    "NO projectile barrels. NO ammo boxes.",
                    features,
                )
            }
            (ComponentCategory::Weapon, "Missile") => {
                let features: &'static [&'static str] = if has("VLS") {
                    &["VLS cello doors", "blast deflection channels", "top-loading hatches"]
                } else {
                    &[
                        "launch tubes",
                        "radar dome",
                        "loading mechanism",
                        "blast shield",
                        "targeting array",
                    ]
                };
                Self::new(
                    "Missile Launcher",
                    "Ordnance Delivery System",
                    "NO gun barrels. NO continuous beams.",
                    features,
                )
            }
            (ComponentCategory::Weapon, "MechaHangar") => Self::new(
                "Mecha Hangar Bay",
                "Mobile Suit Deployment Bay",
                "NO guns. This is a HANGAR, not a weapon.",
                &[
                    "deployment door",
                    "maintenance arm",
                    "fueling hose",
                    "warning lights",
                    "catapult rail",
                ],
            ),
            (ComponentCategory::Weapon, _) => Self::new("Unknown Weapon", "Weapon", "", &[]),

            (ComponentCategory::Shield, "Bubble") => Self::new(
                "Omni-Bubble Generator",
                "Spherical Field Emitter",
                "NO dish antennas.",
                &["spherical core", "ring emitters", "field stabilizers"],
            ),
            (ComponentCategory::Shield, "Plate") => Self::new(
                "Directional Shield Emitter",
                "Deflector Dish",
                "NO spherical cores.",
                &["projector dish", "capacitor coils", "reinforcement struts"],
            ),
            (ComponentCategory::Shield, _) => Self::new("Shield", "Shield", "", &[]),

            (ComponentCategory::Engine, "Ion") => Self::new(
                "Ion Thruster",
                "Electric Propulsion",
                "NO smoke. NO fire.",
                &["ion grid", "magnetic rings", "high-voltage cables"],
            ),
            (ComponentCategory::Engine, "Chemical") => Self::new(
                "Chemical Rocket",
                "Combustion Drive",
                "NO electrical glow.",
                &["combustion nozzle", "fuel pipes", "turbopump housing"],
            ),
            (ComponentCategory::Engine, "Warp") => Self::new(
                "Warp Drive",
                "FTL Engine",
                "NO exhaust output.",
                &["gravity torus", "singularity containment", "field coils"],
            ),
            (ComponentCategory::Engine, _) => Self::new("Engine", "Engine", "", &[]),

            (ComponentCategory::Cargo, "Standard") => Self::new(
                "Standard Container",
                "General Freight Module",
                "NO complex machinery.",
                &["locking clamps", "crane handles", "stacking guides"],
            ),
            (ComponentCategory::Cargo, "Fluid") => Self::new(
                "Fluid Tank",
                "Liquid Storage",
                "NO square corners.",
                &["cylindrical tank", "pressure valve", "hazard stripes"],
            ),
            (ComponentCategory::Cargo, "Secure") => Self::new(
                "Secure Vault",
                "High-Security Storage",
                "NO windows.",
                &["reinforced door", "keypad lock", "thick walls"],
            ),
            (ComponentCategory::Cargo, _) => Self::new("Cargo Module", "Cargo", "", &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(ComponentCategory::from_name("weapon"), Some(ComponentCategory::Weapon));
        assert_eq!(ComponentCategory::from_name(" Cargo "), Some(ComponentCategory::Cargo));
        assert_eq!(ComponentCategory::from_name("Hull"), None);
    }

    #[test]
    fn test_variants() {
        assert_eq!(variants_for(ComponentCategory::Weapon, "Missile")[1], "VLS Array (Vertical)");
        assert_eq!(variants_for(ComponentCategory::Weapon, "Laser"), &["Standard"]);
        assert_eq!(variants_for(ComponentCategory::Engine, "Warp"), &["Standard"]);
    }

    #[test]
    fn test_every_subcategory_has_a_pool() {
        for category in ComponentCategory::all() {
            for sub in subcategories(category) {
                let profile = SubjectProfile::resolve(category, sub, None);
                assert!(profile.features.len() >= 3, "{} {}", category, sub);
                assert!(!profile.negative.is_empty());
            }
        }
    }

    #[test]
    fn test_variant_swaps_pool() {
        let gatling = SubjectProfile::resolve(
            ComponentCategory::Weapon,
            "Kinetic",
            Some("Gatling (Rotary)"),
        );
        assert_eq!(gatling.features[0], "rotary barrel assembly");

        let sniper = SubjectProfile::resolve(
            ComponentCategory::Weapon,
            "Kinetic",
            Some("Long-Barrel (Sniper)"),
        );
        assert_eq!(sniper.features.len(), 5);
    }

    #[test]
    fn test_variant_description() {
        assert!(variant_description(Some("Standard Pod")).is_none());
        assert!(variant_description(None).is_none());
        assert!(variant_description(Some("Torpedo Tube (Heavy)"))
            .unwrap()
            .contains("anti-ship torpedoes"));
        assert!(variant_description(Some("Repair Bay")).is_none());
    }
}
