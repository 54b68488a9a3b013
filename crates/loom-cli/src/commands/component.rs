//! Spaceship component prompt command

use anyhow::Result;
use loom_shipyard::{ComponentGenerator, ComponentRequest, Manufacturer};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct ComponentArgs {
    pub tier: String,
    pub category: String,
    pub subcategory: String,
    pub variant: Option<String>,
    pub manufacturer: Option<String>,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub seed: Option<u64>,
}

pub fn run(args: ComponentArgs) -> Result<()> {
    let config = super::load_config()?;
    let manufacturers = Manufacturer::load_or_default(&config.paths.manufacturers());
    let manufacturer = select_manufacturer(&manufacturers, args.manufacturer.as_deref())?;

    let request = ComponentRequest::from_names(&args.tier, &args.category, &args.subcategory)?
        .with_variation(args.variant.as_deref())
        .with_manufacturer(manufacturer)
        .with_colors(args.primary.as_deref(), args.secondary.as_deref());
    let generator = ComponentGenerator::new(request);

    let prompt = match args.seed {
        Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed)),
        None => generator.generate_prompt(),
    };
    print!("{}", prompt);
    Ok(())
}

/// "None" or no name selects nothing; any other unknown name is an error
fn select_manufacturer(
    manufacturers: &[Manufacturer],
    name: Option<&str>,
) -> Result<Option<Manufacturer>> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty() && *n != "None") else {
        return Ok(None);
    };
    match Manufacturer::find(manufacturers, name) {
        Some(m) => Ok(Some(m.clone())),
        None => {
            let known: Vec<&str> = manufacturers.iter().map(|m| m.name.as_str()).collect();
            anyhow::bail!(
                "Unknown manufacturer '{}'. Available: {}",
                name,
                if known.is_empty() { "(none)".to_string() } else { known.join(", ") }
            )
        }
    }
}
