//! Import consolidation
//!
//! Line-oriented pass that merges every import sourced from the legacy
//! UI component family (`@/components/ui/*`) into a single import of the
//! consolidated module, dropping the originals. Lines that already point
//! at a consolidated destination pass through untouched so the transform
//! can be re-run safely.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Path the UI family collapses into.
const CONSOLIDATED_UI_PATH: &str = "../components/internal/ui";

static UI_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"from ['"]@/components/ui/"#).expect("UI_FAMILY regex is invalid")
});

static CONSOLIDATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"from ['"]\.\./components/internal/(ui|utils)['"]"#)
        .expect("CONSOLIDATED regex is invalid")
});

static CONSOLIDATED_UI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"from ['"]\.\./components/internal/ui['"]"#)
        .expect("CONSOLIDATED_UI regex is invalid")
});

static NAME_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"import\s*\{([^}]*)\}").expect("NAME_LIST regex is invalid"));

/// Merge all legacy UI-family imports in `text` into one consolidated
/// import line.
///
/// Names are collected across the whole file, de-duplicated, sorted
/// ascending, and emitted as a single
/// `import { ... } from '../components/internal/ui';` inserted after the
/// last retained `import` line. If the file already imports the
/// consolidated UI module, no line is inserted and the collected names
/// are dropped (the existing import wins).
pub fn consolidate_imports(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let (mut retained, names) = collect_ui_names(&lines);

    if !names.is_empty() {
        let already_present = retained.iter().any(|line| CONSOLIDATED_UI.is_match(line));
        if !already_present {
            let joined = names.into_iter().collect::<Vec<_>>().join(", ");
            let mut import = format!("import {{ {} }} from '{}';", joined, CONSOLIDATED_UI_PATH);
            if text.contains("\r\n") {
                import.push('\r');
            }
            let pos = insertion_point(&retained);
            retained.insert(pos, import);
        }
        // An existing consolidated import wins; freshly collected names
        // are dropped rather than merged into it.
    }

    retained.join("\n")
}

/// Single scan over the file: drop legacy UI-family import lines while
/// collecting the names they import, keep every other line in order.
///
/// The `BTreeSet` gives both set semantics and the ascending name order
/// the consolidated line requires.
fn collect_ui_names(lines: &[&str]) -> (Vec<String>, BTreeSet<String>) {
    let mut retained = Vec::with_capacity(lines.len());
    let mut names = BTreeSet::new();

    for line in lines {
        if UI_FAMILY.is_match(line) {
            if let Some(caps) = NAME_LIST.captures(line) {
                for name in caps[1].split(',') {
                    let name = name.trim();
                    if !name.is_empty() {
                        names.insert(name.to_string());
                    }
                }
            }
            // line dropped; its names resurface on the consolidated import
        } else if CONSOLIDATED.is_match(line) {
            // already migrated, kept verbatim so re-runs are stable
            retained.push((*line).to_string());
        } else {
            retained.push((*line).to_string());
        }
    }

    (retained, names)
}

/// Position just past the last retained line that begins an import
/// statement. Top of the file when there is none.
fn insertion_point(lines: &[String]) -> usize {
    let mut pos = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("import ") {
            pos = i + 1;
        }
    }
    pos
}
