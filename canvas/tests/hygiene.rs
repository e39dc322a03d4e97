//! Hygiene: source-level budgets for patterns the engine must not ship with.
//!
//! The engine runs inside the browser tab; a panic takes the whole editor
//! down and a swallowed error leaves the canvas silently stale. Each pattern
//! below has a budget. Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0 };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0 };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0 };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0 };
const TODO: Budget = Budget { pattern: "todo!(", max: 0 };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0 };

// Discarded results.
const LET_UNDERSCORE: Budget = Budget { pattern: "let _ =", max: 0 };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0 };

// Dead code.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0 };

/// Production sources under `src/`; `*_test.rs` companions are skipped.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn check(budget: &Budget) {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found; run from the canvas crate root");

    let offenders: Vec<String> = sources
        .iter()
        .flat_map(|(path, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(budget.pattern))
                .map(move |(n, _)| format!("  {}:{}", path.display(), n + 1))
        })
        .collect();

    assert!(
        offenders.len() <= budget.max,
        "`{}` found {} times (budget {}):\n{}",
        budget.pattern,
        offenders.len(),
        budget.max,
        offenders.join("\n")
    );
}

#[test]
fn no_unwrap() {
    check(&UNWRAP);
}

#[test]
fn no_expect() {
    check(&EXPECT);
}

#[test]
fn no_panic() {
    check(&PANIC);
}

#[test]
fn no_unreachable() {
    check(&UNREACHABLE);
}

#[test]
fn no_todo() {
    check(&TODO);
}

#[test]
fn no_unimplemented() {
    check(&UNIMPLEMENTED);
}

#[test]
fn no_let_underscore() {
    check(&LET_UNDERSCORE);
}

#[test]
fn no_dot_ok() {
    check(&DOT_OK);
}

#[test]
fn no_allow_dead_code() {
    check(&ALLOW_DEAD_CODE);
}
