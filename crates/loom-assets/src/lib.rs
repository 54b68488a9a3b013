//! Batch utilities around generated icon sheets
//!
//! - `sheet` - reads `name, description[, english_name, english_filename]` rows
//! - `slicer` - cuts a grid image into per-icon files
//! - `curator` - merges same-named assets from several output folders

pub mod curator;
pub mod sheet;
pub mod slicer;

pub use curator::{AssetCurator, ScanSummary};
pub use sheet::{read_icon_items, MAX_SHEET_ROWS};
pub use slicer::{sanitize_filename, slice_image, SliceReport, SliceRequest};
