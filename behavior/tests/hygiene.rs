//! Hygiene: enforces coding standards at test time
//!
//! Scans the behavior crate's production sources for patterns that crash the
//! page or silently swallow errors. Each pattern has a budget of zero; the
//! budget never grows.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, budget, and what it guards against.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "stubs"),
    ("unimplemented!(", 0, "stubs"),
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "silent discard"),
    ("#[allow(dead_code)]", 0, "dead code"),
];

/// Collect production `.rs` files under `src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut report = Vec::new();
    for &(pattern, budget, concern) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            report.push(format!("{pattern} ({concern}): found {count}, max {budget}"));
            report.extend(found.iter().map(|(path, c)| format!("  {path}: {c}")));
        }
    }
    assert!(report.is_empty(), "hygiene budget exceeded:\n{}", report.join("\n"));
}
