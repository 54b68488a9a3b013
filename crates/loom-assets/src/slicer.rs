//! Grid image slicing

use loom_core::{LoomError, Result};
use std::path::{Path, PathBuf};

/// What to slice and how to name the pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    pub image_path: PathBuf,
    pub rows: u32,
    pub cols: u32,
    /// Defaults to `<stem>_slices` beside the image
    pub output_dir: Option<PathBuf>,
    /// Cell names in row-major order; unnamed cells get `icon_RR_CC.png`
    pub names: Vec<String>,
}

impl SliceRequest {
    /// An 8x8 slice of `image_path` with positional names
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            rows: 8,
            cols: 8,
            output_dir: None,
            names: Vec::new(),
        }
    }

    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    /// Output directory after applying the default
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        let stem = self
            .image_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let parent = self.image_path.parent().unwrap_or_else(|| Path::new(""));
        parent.join(format!("{}_slices", stem))
    }
}

/// Files written by a slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceReport {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl SliceReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Strip `\/*?:"<>|`, trim, replace spaces with `_` and lowercase
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .collect::<String>()
        .trim()
        .replace(' ', "_")
        .to_lowercase()
}

fn positional_name(row: u32, col: u32) -> String {
    format!("icon_{:02}_{:02}.png", row + 1, col + 1)
}

/// First free `<base>.png`, `<base>_2.png`, ... in `dir`
fn unique_name(dir: &Path, base: &str) -> String {
    let mut filename = format!("{}.png", base);
    let mut counter = 2;
    while dir.join(&filename).exists() {
        filename = format!("{}_{}.png", base, counter);
        counter += 1;
    }
    filename
}

/// Cut `request.image_path` into `rows x cols` equally sized PNG cells.
///
/// Cell size is the integer division of the image size; leftover pixels on
/// the right and bottom edges are dropped.
pub fn slice_image(request: &SliceRequest) -> Result<SliceReport> {
    if request.rows == 0 || request.cols == 0 {
        return Err(LoomError::InvalidSelection(format!(
            "Grid must have at least one row and column, got {}x{}",
            request.rows, request.cols
        )));
    }
    if !request.image_path.exists() {
        return Err(LoomError::ImageError(format!(
            "Image not found: {}",
            request.image_path.display()
        )));
    }

    let img = image::open(&request.image_path).map_err(|e| {
        LoomError::ImageError(format!(
            "Failed to open {}: {}",
            request.image_path.display(),
            e
        ))
    })?;

    let cell_width = img.width() / request.cols;
    let cell_height = img.height() / request.rows;
    if cell_width == 0 || cell_height == 0 {
        return Err(LoomError::ImageError(format!(
            "Image {}x{} is too small for a {}x{} grid",
            img.width(),
            img.height(),
            request.rows,
            request.cols
        )));
    }

    let output_dir = request.resolved_output_dir();
    std::fs::create_dir_all(&output_dir)?;

    let mut files = Vec::with_capacity((request.rows * request.cols) as usize);
    for row in 0..request.rows {
        for col in 0..request.cols {
            let cell = img.crop_imm(col * cell_width, row * cell_height, cell_width, cell_height);

            let idx = (row * request.cols + col) as usize;
            let base = request
                .names
                .get(idx)
                .map(|n| sanitize_filename(n))
                .filter(|n| !n.is_empty());
            let filename = match base {
                Some(base) => unique_name(&output_dir, &base),
                None => positional_name(row, col),
            };

            let path = output_dir.join(filename);
            cell.save(&path).map_err(|e| {
                LoomError::ImageError(format!("Failed to write {}: {}", path.display(), e))
            })?;
            files.push(path);
        }
    }

    tracing::info!("Sliced {} icons to {}", files.len(), output_dir.display());
    Ok(SliceReport { output_dir, files })
}
