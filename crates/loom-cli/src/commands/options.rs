//! Option listing command

use anyhow::Result;
use loom_catalog::{CharacterFacet, ClothingFacet, Facet, OptionCatalog};
use loom_core::{DisplayLabel, Lang};

pub fn run(family: &str, facet: &str, lang: Lang, profession: Option<&str>) -> Result<()> {
    let config = super::load_config()?;
    let labels = match family.trim().to_lowercase().as_str() {
        "character" => {
            let catalog = OptionCatalog::load_or_default(&config.paths.character_options());
            character_options(&catalog, facet, lang, profession)?
        }
        "clothing" => {
            if profession.is_some() {
                anyhow::bail!("--profession only applies to character outfit types");
            }
            let catalog: OptionCatalog<ClothingFacet> =
                OptionCatalog::load_or_default(&config.paths.clothing_options());
            let facet = find_facet::<ClothingFacet>(facet)?;
            catalog.get_options(facet, lang)
        }
        other => anyhow::bail!("Unknown option family '{}'; use character or clothing", other),
    };

    for label in labels {
        println!("{}", label);
    }
    Ok(())
}

fn find_facet<F: Facet>(name: &str) -> Result<F> {
    F::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = F::all().iter().map(|f| f.name()).collect();
        anyhow::anyhow!("Unknown facet '{}'. Available: {}", name, names.join(", "))
    })
}

fn character_options(
    catalog: &OptionCatalog<CharacterFacet>,
    facet: &str,
    lang: Lang,
    profession: Option<&str>,
) -> Result<Vec<DisplayLabel>> {
    let facet = find_facet::<CharacterFacet>(facet)?;
    match profession {
        Some(profession) => {
            if facet != CharacterFacet::OutfitType {
                anyhow::bail!("--profession only applies to the outfit_type facet");
            }
            let value = catalog.resolve(CharacterFacet::Profession, profession, lang);
            Ok(catalog.outfit_type_options(value.as_str(), lang))
        }
        None => Ok(catalog.get_options(facet, lang)),
    }
}
