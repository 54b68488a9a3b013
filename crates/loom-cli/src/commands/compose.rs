//! Prompt composition commands: character, clothing and icon sheets

use anyhow::{Context, Result};
use loom_assets::read_icon_items;
use loom_compose::{
    compose_character_prompt, compose_clothing_prompt, compose_icon_grid_prompt,
    translate_free_text, translate_items, CharacterContext, CharacterSelection, ClothingContext,
    ClothingSelection,
};
use loom_core::Lang;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write a prompt followed by exactly one newline
fn write_prompt<W: Write>(mut out: W, prompt: &str) -> io::Result<()> {
    writeln!(out, "{}", prompt.trim_end_matches('\n'))?;
    out.flush()
}

pub struct CharacterArgs {
    pub selection: PathBuf,
    pub lang: Option<Lang>,
    pub style_ref_only: bool,
    pub translate: bool,
}

pub fn run_character(args: CharacterArgs) -> Result<()> {
    let config = super::load_config()?;
    let mut selection = CharacterSelection::load(&args.selection)
        .with_context(|| format!("Failed to load selection {}", args.selection.display()))?;
    if let Some(lang) = args.lang {
        selection.lang = lang;
    }
    selection.style_reference_only |= args.style_ref_only;
    selection.validate()?;

    if args.translate {
        let manager = super::translation_manager(&config);
        translate_free_text(&mut selection, &manager);
    }

    let ctx = CharacterContext::load(&config.paths.character_options(), &config.paths.style());
    write_prompt(io::stdout().lock(), &compose_character_prompt(&ctx, &selection))?;
    Ok(())
}

pub fn run_clothing(selection_path: &Path, lang: Option<Lang>) -> Result<()> {
    let config = super::load_config()?;
    let mut selection = ClothingSelection::load(selection_path)
        .with_context(|| format!("Failed to load selection {}", selection_path.display()))?;
    if let Some(lang) = lang {
        selection.lang = lang;
    }

    let ctx = ClothingContext::load(
        &config.paths.clothing_options(),
        &config.paths.clothing_style(),
    );
    write_prompt(io::stdout().lock(), &compose_clothing_prompt(&ctx, &selection))?;
    Ok(())
}

pub fn run_icons(csv_path: &Path, translate: bool) -> Result<()> {
    if !csv_path.exists() {
        anyhow::bail!("File not found: {}", csv_path.display());
    }
    let mut items = read_icon_items(csv_path)?;
    tracing::info!("Read {} icon rows from {}", items.len(), csv_path.display());

    if translate {
        let config = super::load_config()?;
        let manager = super::translation_manager(&config);
        items = translate_items(&items, &manager);
    }

    let prompt = compose_icon_grid_prompt(&items)
        .ok_or_else(|| anyhow::anyhow!("No icon rows in {}", csv_path.display()))?;
    write_prompt(io::stdout().lock(), &prompt)?;
    Ok(())
}
