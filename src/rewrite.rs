//! Per-file rewrite pipeline
//!
//! Composes the two passes over a file's text and writes the result back
//! atomically. A file is only ever written when its content actually
//! changed; everything else is left untouched on disk.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::consolidate::consolidate_imports;
use crate::rules::{apply_rules, rules};

/// Result of running the pipeline over one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Content changed and was written back (or would be, in dry-run mode).
    Rewritten,
    /// Both passes left the content identical; file not written.
    Unchanged,
}

/// Run both passes over a file's text: pattern substitution first, then
/// import consolidation over its output.
pub fn transform(text: &str) -> String {
    consolidate_imports(&apply_rules(text, rules()))
}

/// Rewrite a single file in place.
///
/// Reads the file as UTF-8 and applies [`transform`]. The original is
/// replaced only when the content differs, so timestamps of untouched
/// files are preserved. With `dry_run` nothing is written, but the
/// outcome still reports whether the file would change.
///
/// Errors (unreadable file, invalid UTF-8, failed write) surface as
/// `io::Error`; the caller decides whether to continue the batch.
pub fn rewrite_file(path: &Path, dry_run: bool) -> io::Result<RewriteOutcome> {
    let original = fs::read_to_string(path)?;
    let updated = transform(&original);

    if updated == original {
        return Ok(RewriteOutcome::Unchanged);
    }

    if !dry_run {
        write_atomic(path, &updated)?;
    }
    Ok(RewriteOutcome::Rewritten)
}

/// Write through a temp file in the target's directory, then rename over
/// the original so a crash mid-write never leaves a truncated file. The
/// original's permissions carry over to the replacement.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;

    let perms = fs::metadata(path)?.permissions();
    tmp.as_file().set_permissions(perms)?;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
