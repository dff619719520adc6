//! Replant - rewrites legacy `@/` imports onto their consolidated module paths

pub mod consolidate;
pub mod report;
pub mod rewrite;
pub mod rules;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use consolidate::consolidate_imports;
pub use report::{FileError, Reporter, RunSummary, print_summary_json};
pub use rewrite::{RewriteOutcome, rewrite_file, transform};
pub use rules::{Rule, apply_rules, rules};
pub use walker::{WalkOptions, collect_source_files};
