//! Kernel isolation lock tests.
//!
//! Proves:
//! 1. `kernel/Cargo.toml` declares no dependencies
//! 2. Kernel source has no `unsafe` and no heap allocation types
//! 3. Kernel source performs no bare `+ 1` / `- 1` on `u32` inputs
//!    (edge inputs must go through `wrapping_add` / `wrapping_sub`)

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Forbidden patterns in non-comment kernel source lines.
const FORBIDDEN_PATTERNS: &[&str] = &["unsafe", "Vec<", "Box<", "String::", "alloc::"];

/// Arithmetic that would overflow at `0` or `u32::MAX` without wrapping.
const BARE_ARITHMETIC: &[&str] = &["v - 1", "v + 1", "v -= 1", "v += 1"];

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn rs_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

/// Production lines of a kernel source file: comments, attributes and the
/// `#[cfg(test)]` module are excluded.
fn production_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//")
            || trimmed.starts_with("/*")
            || trimmed.starts_with('*')
            || trimmed.starts_with("#!")
        {
            continue;
        }
        lines.push((line_no + 1, line));
    }
    lines
}

fn scan(patterns: &[&str]) -> Vec<(String, usize, String)> {
    let mut files = Vec::new();
    rs_files(&workspace_root().join("kernel").join("src"), &mut files);
    assert!(!files.is_empty(), "kernel source not found");

    let mut violations = Vec::new();
    for path in files {
        let content = fs::read_to_string(&path).expect("kernel source is readable");
        for (line_no, line) in production_lines(&content) {
            if patterns.iter().any(|p| line.contains(p)) {
                violations.push((path.display().to_string(), line_no, line.to_string()));
            }
        }
    }
    violations
}

fn report(title: &str, violations: &[(String, usize, String)]) {
    if !violations.is_empty() {
        let mut msg = format!("{title}:\n");
        for (file, line, content) in violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

// ---------------------------------------------------------------------------
// 1. No dependencies
// ---------------------------------------------------------------------------

#[test]
fn kernel_cargo_toml_has_no_dependencies() {
    let cargo_toml = workspace_root().join("kernel").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("kernel/Cargo.toml must exist");

    let mut in_dependencies = false;
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') || trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            in_dependencies = trimmed.contains("dependencies");
            continue;
        }
        assert!(
            !in_dependencies,
            "kernel/Cargo.toml line {}: declares a dependency: {trimmed}",
            line_no + 1
        );
    }
}

// ---------------------------------------------------------------------------
// 2. No unsafe, no allocation
// ---------------------------------------------------------------------------

#[test]
fn kernel_source_has_no_unsafe_or_allocation() {
    report(
        "forbidden patterns in kernel source",
        &scan(FORBIDDEN_PATTERNS),
    );
}

// ---------------------------------------------------------------------------
// 3. Wrapping arithmetic only
// ---------------------------------------------------------------------------

#[test]
fn kernel_source_uses_wrapping_arithmetic() {
    report(
        "non-wrapping arithmetic on inputs in kernel source",
        &scan(BARE_ARITHMETIC),
    );
}
