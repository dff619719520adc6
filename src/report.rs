//! Progress reporting for rewrite runs
//!
//! Human output follows the shape of the migration log: a found-count
//! header, one checkmark line per rewritten file, and a total. JSON mode
//! emits a serialized [`RunSummary`] instead.

use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Machine-readable summary of a full run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Root directory that was scanned
    pub root: PathBuf,
    /// Candidate files discovered
    pub files_found: usize,
    /// Files whose content changed
    pub files_rewritten: usize,
    /// Paths of rewritten files, in processing order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rewritten: Vec<PathBuf>,
    /// Per-file failures; never abort the batch
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FileError>,
}

/// A single per-file failure.
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Writes human progress lines to stdout with optional color.
pub struct Reporter {
    stdout: StandardStream,
    dry_run: bool,
}

impl Reporter {
    pub fn new(use_color: bool, dry_run: bool) -> Self {
        let color_choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
            dry_run,
        }
    }

    /// Header line: how many candidate files the walk produced.
    pub fn found(&mut self, count: usize, extensions: &[String]) -> io::Result<()> {
        if let [ext] = extensions {
            writeln!(self.stdout, "Found {} .{} files", count, ext)
        } else {
            writeln!(self.stdout, "Found {} source files", count)
        }
    }

    /// Checkmark line for a rewritten file (tilde line in dry-run mode).
    pub fn rewritten(&mut self, path: &Path) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        if self.dry_run {
            spec.set_fg(Some(Color::Yellow));
            self.stdout.set_color(&spec)?;
            write!(self.stdout, "~")?;
            self.stdout.reset()?;
            writeln!(self.stdout, " Would refactor {}", path.display())
        } else {
            spec.set_fg(Some(Color::Green));
            self.stdout.set_color(&spec)?;
            write!(self.stdout, "✓")?;
            self.stdout.reset()?;
            writeln!(self.stdout, " Refactored {}", path.display())
        }
    }

    /// Trailer line with the rewrite count.
    pub fn total(&mut self, count: usize) -> io::Result<()> {
        if self.dry_run {
            writeln!(self.stdout, "\nTotal that would change: {} files", count)
        } else {
            writeln!(self.stdout, "\nTotal refactored: {} files", count)
        }
    }
}

/// Print the run summary as pretty JSON.
pub fn print_summary_json(summary: &RunSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
