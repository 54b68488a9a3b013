//! Loom CLI - prompt composition and image-asset utilities

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{component, compose, curate, generate, options, slice, translate};
use loom_core::Lang;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "loom")]
#[command(about = "Prompt composer for sci-fi characters, outfits, icons and ship parts", long_about = None)]
#[command(version)]
struct Cli {
    /// Debug-level logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the options of one facet
    Options {
        /// Option family (character or clothing)
        family: String,

        /// Facet name (e.g. gender, hair_style, faction)
        facet: String,

        /// Label language (en, zh, both)
        #[arg(long, default_value = "en", value_parser = parse_lang)]
        lang: Lang,

        /// Restrict outfit types to a profession's outfits
        #[arg(long)]
        profession: Option<String>,
    },

    /// Compose a character portrait prompt
    Character {
        /// Selection TOML file
        #[arg(long)]
        selection: PathBuf,

        /// Override the selection's label language
        #[arg(long, value_parser = parse_lang)]
        lang: Option<Lang>,

        /// A style reference image is attached; drop style and mood text
        #[arg(long)]
        style_ref_only: bool,

        /// Translate the free-text fields to English first
        #[arg(long)]
        translate: bool,
    },

    /// Compose a clothing reference-sheet prompt
    Clothing {
        /// Selection TOML file
        #[arg(long)]
        selection: PathBuf,

        /// Override the selection's label language
        #[arg(long, value_parser = parse_lang)]
        lang: Option<Lang>,
    },

    /// Generate a tiered spaceship component prompt
    Component {
        /// Tier name or level (e.g. TIER_3_MILITARY or 3)
        #[arg(long)]
        tier: String,

        /// Weapon, Shield, Engine or Cargo
        #[arg(long)]
        category: String,

        /// Sub-category (e.g. Kinetic, Bubble, Warp)
        #[arg(long)]
        subcategory: String,

        /// Weapon variant (e.g. "Gatling (Rotary)")
        #[arg(long)]
        variant: Option<String>,

        /// Manufacturer name from the manufacturers file
        #[arg(long)]
        manufacturer: Option<String>,

        /// Primary color (hex or name)
        #[arg(long)]
        primary: Option<String>,

        /// Secondary color (hex or name)
        #[arg(long)]
        secondary: Option<String>,

        /// Random seed for reproducible feature sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compose an 8x8 icon sprite-sheet prompt from a CSV sheet
    Icons {
        /// Icon sheet (name, description[, english name, english filename])
        #[arg(long)]
        csv: PathBuf,

        /// Translate names and descriptions to English first
        #[arg(long)]
        translate: bool,
    },

    /// Cut a grid image into individual icon files
    Slice {
        /// Grid image to slice
        image: PathBuf,

        /// Grid rows
        #[arg(long, default_value = "8")]
        rows: u32,

        /// Grid columns
        #[arg(long, default_value = "8")]
        cols: u32,

        /// Output directory (defaults to <image stem>_slices)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Icon sheet supplying cell names in row-major order
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Translate sheet names to English file names
        #[arg(long)]
        translate: bool,
    },

    /// Merge image folders, resolving duplicate file names
    Curate {
        /// Source folder (repeatable)
        #[arg(long = "source", required = true)]
        sources: Vec<PathBuf>,

        /// Folder receiving the curated files
        #[arg(long)]
        target: PathBuf,

        /// Copy unique files and identical duplicates without asking
        #[arg(long)]
        auto: bool,
    },

    /// Translate text to English
    Translate {
        /// Texts to translate
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Generate an image from a prompt file
    Generate {
        /// File holding the prompt text
        #[arg(long)]
        prompt_file: PathBuf,

        /// Provider to use (gemini, mock)
        #[arg(long, default_value = "gemini")]
        provider: String,

        /// Output file name without extension (defaults to the prompt file stem)
        #[arg(long)]
        name: Option<String>,

        /// Output directory
        #[arg(long, default_value = "generated")]
        output: PathBuf,
    },
}

fn parse_lang(s: &str) -> Result<Lang, String> {
    Lang::parse(s).ok_or_else(|| format!("unknown language '{}'; valid values: en, zh, both", s))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LOOM_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Options {
            family,
            facet,
            lang,
            profession,
        } => options::run(&family, &facet, lang, profession.as_deref()),
        Commands::Character {
            selection,
            lang,
            style_ref_only,
            translate,
        } => compose::run_character(compose::CharacterArgs {
            selection,
            lang,
            style_ref_only,
            translate,
        }),
        Commands::Clothing { selection, lang } => compose::run_clothing(&selection, lang),
        Commands::Component {
            tier,
            category,
            subcategory,
            variant,
            manufacturer,
            primary,
            secondary,
            seed,
        } => component::run(component::ComponentArgs {
            tier,
            category,
            subcategory,
            variant,
            manufacturer,
            primary,
            secondary,
            seed,
        }),
        Commands::Icons { csv, translate } => compose::run_icons(&csv, translate),
        Commands::Slice {
            image,
            rows,
            cols,
            output,
            csv,
            translate,
        } => slice::run(slice::SliceArgs {
            image,
            rows,
            cols,
            output,
            csv,
            translate,
        }),
        Commands::Curate {
            sources,
            target,
            auto,
        } => curate::run(sources, target, auto),
        Commands::Translate { texts } => translate::run(&texts),
        Commands::Generate {
            prompt_file,
            provider,
            name,
            output,
        } => generate::run(&prompt_file, &provider, name.as_deref(), &output),
    }
}
