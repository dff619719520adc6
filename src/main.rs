//! CLI entry point for replant

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use replant::{
    FileError, Reporter, RewriteOutcome, RunSummary, WalkOptions, collect_source_files,
    print_summary_json, rewrite_file,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    use std::io::IsTerminal;

    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "replant")]
#[command(about = "Rewrites legacy @/ imports onto their consolidated module paths")]
#[command(version)]
struct Args {
    /// Directory to migrate
    #[arg(default_value = "src/features/gantt")]
    path: PathBuf,

    /// File extensions to rewrite, without the dot (can be used multiple times)
    #[arg(short = 'e', long = "ext", value_name = "EXT", default_value = "tsx")]
    ext: Vec<String>,

    /// Skip files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Report what would change without writing anything
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Include hidden and gitignored files
    #[arg(short, long)]
    all: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output a machine-readable run summary in JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if !args.path.is_dir() {
        eprintln!(
            "replant: cannot access '{}': No such directory",
            args.path.display()
        );
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("replant: error writing output: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    let options = WalkOptions {
        all: args.all,
        extensions: args.ext.clone(),
        ignore_patterns: args.ignore.clone(),
    };
    let files = collect_source_files(&args.path, &options);

    let mut summary = RunSummary {
        root: args.path.clone(),
        files_found: files.len(),
        ..Default::default()
    };

    // JSON mode suppresses the human progress lines
    let mut reporter = if args.json {
        None
    } else {
        Some(Reporter::new(should_use_color(args.color), args.dry_run))
    };

    if let Some(r) = reporter.as_mut() {
        r.found(files.len(), &args.ext)?;
    }

    for file in &files {
        match rewrite_file(file, args.dry_run) {
            Ok(RewriteOutcome::Rewritten) => {
                summary.files_rewritten += 1;
                summary.rewritten.push(file.clone());
                if let Some(r) = reporter.as_mut() {
                    r.rewritten(file)?;
                }
            }
            Ok(RewriteOutcome::Unchanged) => {}
            // One bad file never aborts the batch
            Err(e) => {
                eprintln!("replant: error refactoring '{}': {}", file.display(), e);
                summary.errors.push(FileError {
                    path: file.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    match reporter.as_mut() {
        Some(r) => r.total(summary.files_rewritten),
        None => print_summary_json(&summary),
    }
}
