//! Grid slicing command

use anyhow::Result;
use loom_assets::{read_icon_items, slice_image, SliceRequest};
use loom_compose::translate_items;
use loom_core::IconItem;
use std::path::PathBuf;

pub struct SliceArgs {
    pub image: PathBuf,
    pub rows: u32,
    pub cols: u32,
    pub output: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub translate: bool,
}

pub fn run(args: SliceArgs) -> Result<()> {
    let mut request = SliceRequest::new(&args.image).with_grid(args.rows, args.cols);
    if let Some(output) = &args.output {
        request = request.with_output_dir(output);
    }

    if let Some(csv) = &args.csv {
        let mut items = read_icon_items(csv)?;
        if args.translate {
            let config = super::load_config()?;
            let manager = super::translation_manager(&config);
            items = translate_items(&items, &manager);
        }
        request = request.with_names(items.iter().map(file_stem).collect());
    } else if args.translate {
        tracing::warn!("--translate has no effect without --csv");
    }

    let report = slice_image(&request)?;
    println!("Wrote {} icons to {}", report.count(), report.output_dir.display());
    Ok(())
}

/// Preferred file name of an icon: the sheet's English file name, then its English name
fn file_stem(item: &IconItem) -> String {
    [&item.english_filename, &item.english_name]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or(item.name.as_str())
        .to_string()
}
