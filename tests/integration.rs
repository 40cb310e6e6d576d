//! Integration tests for sprig


use harness::{TestDir, run_sprig};

#[test]
fn test_basic_tree_output() {
    let dir = TestDir::new();
    dir.add_file("app/a.txt", "");
    dir.add_file("app/z.txt", "");
    dir.add_file("app/node_modules/pkg/index.js", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app"]);
    assert!(success, "sprig should succeed");
    assert_eq!(stdout, "app\n├── a.txt\n└── z.txt\n");
}

#[test]
fn test_nested_tree_output() {
    let dir = TestDir::new();
    dir.add_file("app/sub/x.txt", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app"]);
    assert!(success);
    assert_eq!(stdout, "app\n└── sub\n    └── x.txt\n");
}

#[test]
fn test_default_excludes_apply_at_every_level() {
    let dir = TestDir::new();
    dir.add_file("app/src/index.js", "");
    dir.add_file("app/src/node_modules/dep/main.js", "");
    dir.add_file("app/.env", "SECRET=1");
    dir.add_file("app/.next/cache/page.js", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app"]);
    assert!(success);
    assert!(stdout.contains("index.js"), "should show source file");
    assert!(
        !stdout.contains("node_modules"),
        "nested node_modules should be excluded: {}",
        stdout
    );
    assert!(!stdout.contains("dep"), "excluded subtree should be skipped");
    assert!(!stdout.contains(".env"), ".env should be excluded");
    assert!(!stdout.contains(".next"), ".next should be excluded");
}

#[test]
fn test_excluded_name_also_applies_to_files() {
    let dir = TestDir::new();
    dir.add_file("app/gitignore", "");
    dir.add_file("app/kept.txt", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app"]);
    assert!(success);
    assert!(!stdout.contains("gitignore"), "excluded file name: {}", stdout);
    assert!(stdout.contains("kept.txt"));
}

#[test]
fn test_ignore_flag_literal_and_glob() {
    let dir = TestDir::new();
    dir.add_file("app/debug.log", "");
    dir.add_file("app/main.rs", "");
    dir.add_dir("app/target");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app", "-I", "*.log", "-I", "target"]);
    assert!(success);
    assert!(stdout.contains("main.rs"));
    assert!(!stdout.contains("debug.log"), "glob-ignored: {}", stdout);
    assert!(!stdout.contains("target"), "literally ignored: {}", stdout);
}

#[test]
fn test_no_default_excludes() {
    let dir = TestDir::new();
    dir.add_file("app/node_modules/pkg.js", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app", "--no-default-excludes"]);
    assert!(success);
    assert!(
        stdout.contains("node_modules"),
        "default excludes disabled: {}",
        stdout
    );
    assert!(stdout.contains("pkg.js"));
}

#[test]
fn test_parent_preset() {
    let dir = TestDir::new();
    dir.add_file("project/page.js", "");
    dir.add_file("project/scripts/tree.py", "");
    dir.add_file("project/node_modules/dep.js", "");
    let scripts = dir.path().join("project").join("scripts");

    // Invoked from inside project/scripts, --parent renders project itself
    let (stdout, _stderr, success) = run_sprig(&scripts, &["--parent"]);
    assert!(success);
    assert_eq!(stdout, "project\n└── page.js\n");
}

#[test]
fn test_report_flag() {
    let dir = TestDir::new();
    dir.add_file("app/a.txt", "");
    dir.add_file("app/sub/b.txt", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app", "--report"]);
    assert!(success);
    assert!(
        stdout.ends_with("\n1 directories, 2 files\n"),
        "report trailer: {}",
        stdout
    );
}

#[test]
fn test_json_output() {
    let dir = TestDir::new();
    dir.add_file("app/a.txt", "");
    dir.add_file("app/sub/x.txt", "");
    dir.add_file("app/node_modules/dep.js", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app", "--json"]);
    assert!(success);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["type"], "dir");
    assert_eq!(parsed["name"], "app");
    let children = parsed["children"].as_array().expect("children array");
    let names: Vec<&str> = children
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a.txt", "sub"]);
    assert!(!stdout.contains("node_modules"));
}

#[test]
fn test_sibling_groups_are_sorted() {
    let dir = TestDir::new();
    dir.add_file("app/zz.txt", "");
    dir.add_dir("app/mm");
    dir.add_file("app/aa.txt", "");

    let (stdout, _stderr, success) = run_sprig(dir.path(), &["app"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["app", "├── aa.txt", "├── mm", "└── zz.txt"]
    );
}

#[test]
fn test_output_is_idempotent() {
    let dir = TestDir::new();
    dir.add_file("app/a.txt", "");
    dir.add_file("app/b/c.txt", "");

    let (first, _, _) = run_sprig(dir.path(), &["app"]);
    let (second, _, _) = run_sprig(dir.path(), &["app"]);
    assert_eq!(first, second);
}

#[test]
fn test_missing_path_fails_with_resolution_error() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let dir = TestDir::new();
    Command::cargo_bin("sprig")
        .unwrap()
        .arg("no_such_dir")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot resolve path"));
}

#[test]
fn test_file_root_fails_with_read_error() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    let dir = TestDir::new();
    dir.add_file("plain.txt", "not a directory");
    Command::cargo_bin("sprig")
        .unwrap()
        .arg("plain.txt")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read directory"));
}
