//! Asset curation command

use anyhow::Result;
use loom_assets::AssetCurator;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// What happened to the conflicts of one session
#[derive(Debug, Default, PartialEq, Eq)]
struct ConflictOutcome {
    committed: usize,
    skipped: usize,
    /// The user quit with these still pending
    remaining: usize,
}

pub fn run(sources: Vec<PathBuf>, target: PathBuf, auto: bool) -> Result<()> {
    let mut curator = AssetCurator::new(sources, target);
    let summary = curator.scan()?;
    println!(
        "Found {} file names, {} with conflicting copies",
        summary.unique_names, summary.conflicts
    );

    let copied = curator.auto_resolve_uniques()?;
    println!("Copied {} unique files to {}", copied, curator.target_dir().display());

    let stdin = io::stdin();
    let outcome = resolve_conflicts(&mut curator, stdin.lock(), io::stdout(), auto)?;
    println!(
        "Resolved {}/{} names ({} committed, {} skipped, {} left)",
        curator.resolved_count(),
        curator.total_files(),
        outcome.committed,
        outcome.skipped,
        outcome.remaining
    );
    Ok(())
}

/// Walk pending conflicts, asking for a variant number, `s` to skip or `q` to stop.
///
/// With `auto`, conflicts whose copies are byte-identical take the first copy
/// without asking.
fn resolve_conflicts<R: BufRead, W: Write>(
    curator: &mut AssetCurator,
    mut input: R,
    mut output: W,
    auto: bool,
) -> Result<ConflictOutcome> {
    let mut outcome = ConflictOutcome::default();
    let pending: Vec<String> = curator.pending_conflicts().into_iter().map(str::to_string).collect();

    for (i, name) in pending.iter().enumerate() {
        let variants = curator.variants(name).to_vec();
        if auto && curator.identical_variants(name)? {
            curator.commit_selection(name, &variants[0])?;
            outcome.committed += 1;
            continue;
        }

        writeln!(output, "\n{} ({} copies):", name, variants.len())?;
        for (n, path) in variants.iter().enumerate() {
            writeln!(output, "  [{}] {}", n + 1, path.display())?;
        }

        loop {
            write!(output, "Choose 1-{}, s to skip, q to stop: ", variants.len())?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                outcome.remaining = pending.len() - i;
                return Ok(outcome);
            }
            match line.trim() {
                "q" | "Q" => {
                    outcome.remaining = pending.len() - i;
                    return Ok(outcome);
                }
                "s" | "S" => {
                    curator.skip(name);
                    outcome.skipped += 1;
                    break;
                }
                choice => match choice.parse::<usize>() {
                    Ok(n) if (1..=variants.len()).contains(&n) => {
                        curator.commit_selection(name, &variants[n - 1])?;
                        outcome.committed += 1;
                        break;
                    }
                    _ => writeln!(output, "Invalid choice '{}'", choice)?,
                },
            }
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn setup() -> (PathBuf, AssetCurator) {
        let root = std::env::temp_dir().join(format!("loom_curate_cmd_test_{}", uuid::Uuid::new_v4()));
        let a = root.join("a");
        let b = root.join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(a.join("bolt.png"), b"same").unwrap();
        fs::write(b.join("bolt.png"), b"same").unwrap();
        fs::write(a.join("gear.png"), b"gear-a").unwrap();
        fs::write(b.join("gear.png"), b"gear-b").unwrap();
        let mut curator = AssetCurator::new(vec![a, b], root.join("out"));
        curator.scan().unwrap();
        (root, curator)
    }

    fn target(root: &Path, name: &str) -> PathBuf {
        root.join("out").join(name)
    }

    #[test]
    fn test_interactive_choice_and_skip() {
        let (root, mut curator) = setup();
        let mut out = Vec::new();
        let outcome = resolve_conflicts(&mut curator, "s\nx\n2\n".as_bytes(), &mut out, false).unwrap();

        assert_eq!(outcome, ConflictOutcome { committed: 1, skipped: 1, remaining: 0 });
        assert!(!target(&root, "bolt.png").exists());
        assert_eq!(fs::read(target(&root, "gear.png")).unwrap(), b"gear-b");
        assert!(String::from_utf8(out).unwrap().contains("Invalid choice 'x'"));
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_auto_takes_identical_copies() {
        let (root, mut curator) = setup();
        let outcome = resolve_conflicts(&mut curator, "q\n".as_bytes(), io::sink(), true).unwrap();

        assert_eq!(outcome, ConflictOutcome { committed: 1, skipped: 0, remaining: 1 });
        assert_eq!(fs::read(target(&root, "bolt.png")).unwrap(), b"same");
        assert_eq!(curator.pending_conflicts(), vec!["gear.png"]);
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_end_of_input_stops() {
        let (root, mut curator) = setup();
        let outcome = resolve_conflicts(&mut curator, "".as_bytes(), io::sink(), false).unwrap();
        assert_eq!(outcome.remaining, 2);
        fs::remove_dir_all(&root).ok();
    }
}
