//! Pattern substitution over file text
//!
//! Holds the migration's fixed, ordered table of (pattern, replacement)
//! rules and applies them sequentially: each rule matches against the
//! output of the rule before it.

use regex::Regex;
use std::sync::LazyLock;

/// A single substitution rule.
///
/// Every occurrence of `pattern` is replaced with `replacement`. A rule
/// with no match is a no-op, never an error.
pub struct Rule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rule pattern is invalid"),
            replacement,
        }
    }
}

/// The migration's rule table, applied strictly in order.
///
/// The per-component `@/components/ui/*` paths are deliberately absent:
/// those lines are collected and merged by the consolidation pass so
/// that several one-component imports end up on a single consolidated
/// line. See `consolidate`.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Shared utils move next to the consolidated UI module
        Rule::new(
            r#"from ['"]@/lib/utils['"]"#,
            "from '../components/internal/utils'",
        ),
        // Types previously re-exported from hooks now live in gantt.types
        Rule::new(
            r#"import \{ Task \} from ['"]@/hooks/useTasks['"]"#,
            "import type { Task } from '../types/gantt.types'",
        ),
        Rule::new(
            r#"import \{ TaskLabel \} from ['"]@/hooks/useTaskLabels['"]"#,
            "import type { TaskLabel } from '../types/gantt.types'",
        ),
        Rule::new(
            r#"import \{ TaskStatus \} from ['"]@/hooks/useTaskStatuses['"]"#,
            "import type { TaskStatus } from '../types/gantt.types'",
        ),
        Rule::new(
            r#"import \{ ProjectMilestone \} from ['"]@/hooks/useProjectMilestones['"]"#,
            "import type { ProjectMilestone } from '../types/gantt.types'",
        ),
        Rule::new(
            r#"import \{ TaskBarLabels \} from ['"]@/hooks/useViewSettings['"]"#,
            "import type { TaskBarLabels } from '../types/gantt.types'",
        ),
        Rule::new(
            r#"import \{ Baseline \} from ['"]@/hooks/useBaselines['"]"#,
            "import type { Baseline } from '../types/gantt.types'",
        ),
        // Type re-exports
        Rule::new(
            r#"export type \{ TaskBarLabels \} from ['"]@/hooks/useViewSettings['"]"#,
            "export type { TaskBarLabels } from '../types/gantt.types'",
        ),
        Rule::new(
            r#"export type \{ Task \} from ['"]@/hooks/useTasks['"]"#,
            "export type { Task } from '../types/gantt.types'",
        ),
    ]
});

/// The full rule table for this migration.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Apply every rule in order and return the rewritten text.
///
/// Rule N+1 matches against the output of rule N (sequential, not
/// simultaneous, substitution). Text without any match comes back
/// unchanged.
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    let mut current = text.to_string();
    for rule in rules {
        if rule.pattern.is_match(&current) {
            current = rule
                .pattern
                .replace_all(&current, rule.replacement)
                .into_owned();
        }
    }
    current
}
