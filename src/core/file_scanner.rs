use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::error::ScanError;

/// Collect every source file under `root`, sorted by path.
///
/// Files are selected by extension (without the leading dot). Paths matching
/// any of `ignore_patterns` are skipped; invalid patterns are reported under
/// `verbose` and otherwise ignored, since `Config::validate` rejects them
/// up front. A `root` that is itself a file is returned as-is when its
/// extension matches.
///
/// # Errors
///
/// - `ScanError::RootNotFound` if `root` does not exist
/// - `ScanError::Walk` if a directory entry cannot be read
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();

        if glob_patterns.iter().any(|p| p.matches_path(path)) {
            continue;
        }

        // `path.is_file()` follows symlinks, so linked sources are audited too.
        if path.is_file() && is_scannable_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
