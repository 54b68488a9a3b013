//! Duplicate-asset curation across several output folders
//!
//! Image files are grouped by file name. Names found in exactly one source
//! are copied straight to the target; names found in several sources are
//! conflicts that a user resolves by committing one variant or skipping.

use loom_core::{ContentHash, LoomError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

/// Outcome of [`AssetCurator::scan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub unique_names: usize,
    pub conflicts: usize,
}

/// One curation session. Not thread-safe; run one session at a time.
#[derive(Debug, Default)]
pub struct AssetCurator {
    sources: Vec<PathBuf>,
    target_dir: PathBuf,
    /// File name -> every path carrying it, in scan order
    groups: BTreeMap<String, Vec<PathBuf>>,
    conflicts: Vec<String>,
    resolved: BTreeSet<String>,
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

impl AssetCurator {
    pub fn new(sources: Vec<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    fn scan_directory(&mut self, dir: &Path) -> Result<()> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                self.scan_directory(&path)?;
            } else if is_image(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    self.groups.entry(name.to_string()).or_default().push(path.clone());
                }
            }
        }
        Ok(())
    }

    /// Group image files of every source by file name.
    ///
    /// Resets any previous session state. Missing sources are skipped.
    pub fn scan(&mut self) -> Result<ScanSummary> {
        self.groups.clear();
        self.conflicts.clear();
        self.resolved.clear();

        for source in self.sources.clone() {
            if !source.is_dir() {
                tracing::warn!("Skipping missing source {}", source.display());
                continue;
            }
            self.scan_directory(&source)?;
        }

        self.conflicts = self
            .groups
            .iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(name, _)| name.clone())
            .collect();

        let summary = ScanSummary {
            unique_names: self.groups.len(),
            conflicts: self.conflicts.len(),
        };
        tracing::info!(
            "Scanned {} sources: {} names, {} conflicts",
            self.sources.len(),
            summary.unique_names,
            summary.conflicts
        );
        Ok(summary)
    }

    /// Copy every non-conflicting file to the target.
    ///
    /// Files already present in the target are left alone and not counted.
    pub fn auto_resolve_uniques(&mut self) -> Result<usize> {
        fs::create_dir_all(&self.target_dir)?;

        let mut copied = 0;
        for (name, paths) in &self.groups {
            let [source] = paths.as_slice() else {
                continue;
            };
            let dest = self.target_dir.join(name);
            if dest.exists() {
                continue;
            }
            fs::copy(source, &dest)?;
            self.resolved.insert(name.clone());
            copied += 1;
        }
        tracing::info!("Copied {} unique files to {}", copied, self.target_dir.display());
        Ok(copied)
    }

    /// Conflicting names not yet committed or skipped
    pub fn pending_conflicts(&self) -> Vec<&str> {
        self.conflicts
            .iter()
            .filter(|name| !self.resolved.contains(*name))
            .map(String::as_str)
            .collect()
    }

    /// Every path carrying `name`
    pub fn variants(&self, name: &str) -> &[PathBuf] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether all variants of `name` are byte-identical
    pub fn identical_variants(&self, name: &str) -> Result<bool> {
        let variants = self.variants(name);
        let Some((first, rest)) = variants.split_first() else {
            return Ok(false);
        };
        let reference = ContentHash::from_file(first)?;
        for path in rest {
            let hash = ContentHash::from_file(path)?;
            if hash != reference {
                tracing::debug!(
                    "{} differs: {} vs {}",
                    name,
                    reference.short(),
                    hash.short()
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Copy the chosen variant of `name` to the target
    pub fn commit_selection(&mut self, name: &str, selected: &Path) -> Result<()> {
        if !self.variants(name).iter().any(|p| p == selected) {
            return Err(LoomError::InvalidSelection(format!(
                "{} is not a variant of {}",
                selected.display(),
                name
            )));
        }
        fs::create_dir_all(&self.target_dir)?;
        fs::copy(selected, self.target_dir.join(name))?;
        self.resolved.insert(name.to_string());
        tracing::debug!("Committed {} for {}", selected.display(), name);
        Ok(())
    }

    /// Resolve `name` without copying anything
    pub fn skip(&mut self, name: &str) {
        self.resolved.insert(name.to_string());
    }

    /// Distinct file names found by the last scan
    pub fn total_files(&self) -> usize {
        self.groups.len()
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        root: PathBuf,
        a: PathBuf,
        b: PathBuf,
        target: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let root = std::env::temp_dir().join(format!("loom_curator_test_{}", uuid::Uuid::new_v4()));
            let a = root.join("run_a");
            let b = root.join("run_b");
            fs::create_dir_all(a.join("nested")).unwrap();
            fs::create_dir_all(&b).unwrap();
            fs::write(a.join("wrench.png"), b"wrench-a").unwrap();
            fs::write(b.join("wrench.png"), b"wrench-b").unwrap();
            fs::write(a.join("nested").join("cell.PNG"), b"cell").unwrap();
            fs::write(b.join("cell.PNG"), b"cell").unwrap();
            fs::write(a.join("only_a.jpg"), b"a").unwrap();
            fs::write(b.join("notes.txt"), b"ignored").unwrap();
            let target = root.join("merged");
            Self { root, a, b, target }
        }

        fn curator(&self) -> AssetCurator {
            AssetCurator::new(
                vec![self.a.clone(), self.b.clone(), self.root.join("missing")],
                &self.target,
            )
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            fs::remove_dir_all(&self.root).ok();
        }
    }

    #[test]
    fn test_scan_groups_by_name() {
        let fx = Fixture::new();
        let mut curator = fx.curator();
        let summary = curator.scan().unwrap();
        assert_eq!(summary, ScanSummary { unique_names: 3, conflicts: 2 });
        assert_eq!(curator.pending_conflicts(), vec!["cell.PNG", "wrench.png"]);
        assert_eq!(curator.variants("wrench.png")[0], fx.a.join("wrench.png"));
        assert!(curator.variants("notes.txt").is_empty());
    }

    #[test]
    fn test_auto_resolve_copies_uniques_once() {
        let fx = Fixture::new();
        let mut curator = fx.curator();
        curator.scan().unwrap();
        assert_eq!(curator.auto_resolve_uniques().unwrap(), 1);
        assert_eq!(fs::read(fx.target.join("only_a.jpg")).unwrap(), b"a");
        assert_eq!(curator.auto_resolve_uniques().unwrap(), 0);
        assert_eq!(curator.resolved_count(), 1);
    }

    #[test]
    fn test_identical_variants() {
        let fx = Fixture::new();
        let mut curator = fx.curator();
        curator.scan().unwrap();
        assert!(curator.identical_variants("cell.PNG").unwrap());
        assert!(!curator.identical_variants("wrench.png").unwrap());
        assert!(!curator.identical_variants("absent.png").unwrap());
    }

    #[test]
    fn test_commit_and_skip() {
        let fx = Fixture::new();
        let mut curator = fx.curator();
        curator.scan().unwrap();

        let chosen = fx.b.join("wrench.png");
        curator.commit_selection("wrench.png", &chosen).unwrap();
        assert_eq!(fs::read(fx.target.join("wrench.png")).unwrap(), b"wrench-b");

        assert!(matches!(
            curator.commit_selection("cell.PNG", &chosen),
            Err(LoomError::InvalidSelection(_))
        ));

        curator.skip("cell.PNG");
        assert!(curator.pending_conflicts().is_empty());
        assert!(!fx.target.join("cell.PNG").exists());
        assert_eq!(curator.resolved_count(), 2);
        assert_eq!(curator.conflict_count(), 2);
    }
}
