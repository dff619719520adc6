//! Candidate file discovery
//!
//! Recursively collects the source files a run should rewrite. Honors
//! gitignore and hidden-file filtering by default (disabled with `all`),
//! filters by extension, and applies user-supplied ignore globs.

use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;

/// Options controlling which files the walk yields.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Include hidden and gitignored files.
    pub all: bool,
    /// Extensions to rewrite, without the dot. Matched case-insensitively.
    pub extensions: Vec<String>,
    /// Glob patterns for file names to skip.
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            all: false,
            extensions: vec!["tsx".to_string()],
            ignore_patterns: Vec::new(),
        }
    }
}

/// Collect every candidate source file under `root`, sorted so that runs
/// are deterministic regardless of directory iteration order.
pub fn collect_source_files(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
    let walker = if options.all {
        WalkBuilder::new(root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .build()
    } else {
        WalkBuilder::new(root)
            .hidden(true)
            .ignore(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build()
    };

    let mut files = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !has_candidate_extension(path, &options.extensions) {
            continue;
        }
        if should_ignore_path(path, &options.ignore_patterns) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    files
}

/// Check whether a path carries one of the candidate extensions.
fn has_candidate_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// Check if a path should be skipped based on its name and ignore patterns.
fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    for pattern in ignore_patterns {
        if name == *pattern || glob_match(pattern, &name) {
            return true;
        }
    }

    false
}

/// Match a glob pattern against a name.
fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
