//! Catalog file discovery.
//!
//! Walks the configured include directories under the catalog root and
//! collects `.ts` files, honoring ignore patterns. Both literal paths and
//! glob patterns are accepted for includes and ignores.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// True when the pattern contains glob metacharacters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

#[derive(Debug, Default)]
pub struct ScanResult {
    /// Catalog file paths, sorted for a deterministic processing order.
    pub files: Vec<String>,
    /// Entries that could not be walked (permissions, broken links).
    pub skipped_count: usize,
}

/// Discovers catalog files under `base_dir`.
///
/// With empty `includes` the whole root is walked. Literal ignore patterns
/// match anywhere in a path, glob ignore patterns match the full path.
pub fn scan_catalog_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = HashSet::new();
    let mut skipped_count = 0;

    let (glob_ignores, literal_ignores): (Vec<&String>, Vec<&String>) =
        ignore_patterns.iter().partition(|p| is_glob_pattern(p));
    let glob_matchers: Vec<glob::Pattern> = glob_ignores
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .collect();

    let scan_roots: Vec<PathBuf> = if includes.is_empty() {
        vec![PathBuf::from(base_dir)]
    } else {
        let mut roots = Vec::new();
        for include in includes {
            let full = Path::new(base_dir).join(include);
            if is_glob_pattern(include) {
                if let Some(pattern) = full.to_str()
                    && let Ok(paths) = glob::glob(pattern)
                {
                    roots.extend(paths.flatten());
                }
            } else if full.exists() {
                roots.push(full);
            } else if verbose {
                eprintln!("warning: Include path does not exist: {}", full.display());
            }
        }
        roots
    };

    for root in scan_roots {
        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("warning: Failed to scan entry: {}", err);
                    }
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_catalog_file(path) {
                continue;
            }
            let path_str = path.to_string_lossy().to_string();
            if literal_ignores
                .iter()
                .any(|ignore| path_str.contains(ignore.as_str()))
            {
                continue;
            }
            if glob_matchers.iter().any(|matcher| matcher.matches(&path_str)) {
                continue;
            }
            files.insert(path_str);
        }
    }

    let mut files: Vec<String> = files.into_iter().collect();
    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("ts")
}
