//! Integration tests for replant


use harness::{TestTree, run_replant};

#[test]
fn test_consolidates_ui_family_imports() {
    let tree = TestTree::new();
    tree.add_file(
        "Toolbar.tsx",
        "import { Button } from '@/components/ui/button'\n\
         import { Input } from '@/components/ui/input'\n\
         export function Toolbar() {}\n",
    );

    let (stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success, "replant should succeed");
    assert!(stdout.contains("Found 1 .tsx files"), "header: {}", stdout);
    assert!(stdout.contains("✓ Refactored"), "checkmark line: {}", stdout);
    assert!(stdout.contains("Total refactored: 1 files"), "trailer: {}", stdout);

    let content = tree.read_file("Toolbar.tsx");
    assert_eq!(
        content,
        "import { Button, Input } from '../components/internal/ui';\n\
         export function Toolbar() {}\n"
    );
}

#[test]
fn test_rewrites_hook_type_imports() {
    let tree = TestTree::new();
    tree.add_file(
        "GanttView.tsx",
        "import { Task } from '@/hooks/useTasks'\nexport function GanttView() {}\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success);
    assert_eq!(
        tree.read_file("GanttView.tsx"),
        "import type { Task } from '../types/gantt.types'\nexport function GanttView() {}\n"
    );
}

#[test]
fn test_untouched_file_not_reported() {
    let tree = TestTree::new();
    let content = "import React from 'react'\nexport default function App() {}\n";
    tree.add_file("App.tsx", content);

    let (stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success);
    assert!(
        !stdout.contains("App.tsx"),
        "unchanged file must not get a checkmark: {}",
        stdout
    );
    assert!(stdout.contains("Total refactored: 0 files"), "{}", stdout);
    assert_eq!(tree.read_file("App.tsx"), content, "file must be byte-identical");
}

#[test]
fn test_second_run_is_a_noop() {
    let tree = TestTree::new();
    tree.add_file(
        "Dialog.tsx",
        "import { Dialog, DialogContent } from '@/components/ui/dialog'\n\
         import { Task } from '@/hooks/useTasks'\n\
         export function D() {}\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success);
    let after_first = tree.read_file("Dialog.tsx");

    let (stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success);
    assert_eq!(
        tree.read_file("Dialog.tsx"),
        after_first,
        "second run must not change the file"
    );
    assert!(
        stdout.contains("Total refactored: 0 files"),
        "second run rewrites nothing: {}",
        stdout
    );
}

#[test]
fn test_existing_consolidated_import_not_duplicated() {
    let tree = TestTree::new();
    tree.add_file(
        "Panel.tsx",
        "import { X } from '../components/internal/ui'\n\
         import { Button } from '@/components/ui/button'\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success);
    // Documented lossy policy: the existing import wins, Button is dropped
    assert_eq!(
        tree.read_file("Panel.tsx"),
        "import { X } from '../components/internal/ui'\n"
    );
}

#[test]
fn test_missing_root_fails() {
    let tree = TestTree::new();

    let (_stdout, stderr, success) = run_replant(tree.path(), &["no/such/dir"]);
    assert!(!success, "missing root must fail");
    assert!(
        stderr.contains("cannot access"),
        "should report the missing directory: {}",
        stderr
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let tree = TestTree::new();
    let content = "import { Button } from '@/components/ui/button'\n";
    tree.add_file("Form.tsx", content);

    let (stdout, _stderr, success) = run_replant(tree.path(), &[".", "--dry-run"]);
    assert!(success);
    assert!(
        stdout.contains("~ Would refactor"),
        "dry run reports the candidate: {}",
        stdout
    );
    assert_eq!(tree.read_file("Form.tsx"), content, "dry run must not write");
}

#[test]
fn test_json_summary() {
    let tree = TestTree::new();
    tree.add_file(
        "Toolbar.tsx",
        "import { Button } from '@/components/ui/button'\n",
    );
    tree.add_file("App.tsx", "export default 1;\n");

    let (stdout, _stderr, success) = run_replant(tree.path(), &[".", "--json"]);
    assert!(success);

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert_eq!(json["files_found"], 2);
    assert_eq!(json["files_rewritten"], 1);
    assert!(
        json["rewritten"][0]
            .as_str()
            .unwrap()
            .ends_with("Toolbar.tsx")
    );
    assert!(
        !stdout.contains("Refactored"),
        "json mode suppresses human lines: {}",
        stdout
    );
}

#[test]
fn test_bad_file_does_not_abort_batch() {
    let tree = TestTree::new();
    std::fs::write(tree.path().join("bad.tsx"), [0xFF, 0xFE, 0x00]).unwrap();
    tree.add_file(
        "good.tsx",
        "import { Button } from '@/components/ui/button'\n",
    );

    let (stdout, stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success, "per-file failure keeps exit status 0");
    assert!(
        stderr.contains("bad.tsx"),
        "bad file reported on stderr: {}",
        stderr
    );
    assert!(
        stdout.contains("Total refactored: 1 files"),
        "good file still processed: {}",
        stdout
    );
    assert!(
        tree.read_file("good.tsx")
            .contains("'../components/internal/ui'")
    );
}

#[test]
fn test_extra_extension_flag() {
    let tree = TestTree::new();
    tree.add_file("types.ts", "import { Task } from '@/hooks/useTasks'\n");

    // default extension set leaves .ts alone
    let (_stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success);
    assert!(tree.read_file("types.ts").contains("@/hooks/useTasks"));

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[".", "-e", "ts"]);
    assert!(success);
    assert_eq!(
        tree.read_file("types.ts"),
        "import type { Task } from '../types/gantt.types'\n"
    );
}

#[test]
fn test_ignore_pattern_flag() {
    let tree = TestTree::new();
    tree.add_file(
        "Keep.tsx",
        "import { Button } from '@/components/ui/button'\n",
    );
    tree.add_file(
        "Skip.test.tsx",
        "import { Button } from '@/components/ui/button'\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[".", "-I", "*.test.tsx"]);
    assert!(success);
    assert!(tree.read_file("Keep.tsx").contains("'../components/internal/ui'"));
    assert!(
        tree.read_file("Skip.test.tsx").contains("@/components/ui/button"),
        "ignored file must be untouched"
    );
}

#[test]
fn test_recurses_into_subdirectories() {
    let tree = TestTree::new();
    tree.add_file(
        "components/nested/Deep.tsx",
        "import { Button } from '@/components/ui/button'\n",
    );

    let (stdout, _stderr, success) = run_replant(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("Deep.tsx"), "{}", stdout);
    assert!(
        tree.read_file("components/nested/Deep.tsx")
            .contains("'../components/internal/ui'")
    );
}
