//! Best-effort per-filetype syntax checking.
//!
//! Strict for interpreted code, permissive for markup/style/unknown:
//! - `.py` — `python3 -m py_compile`; spawn failure counts as invalid
//! - `.js` — `node --check`; spawn failure counts as invalid
//! - `.html` — structural check only: at least one element tag
//! - `.css` and everything else — always valid
//!
//! This asymmetry is deliberate and must be preserved.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::invoke::run_tool;

/// Any opening element tag, e.g. `<html>`, `<div class="x">`.
static ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*[a-zA-Z][^>]*>").expect("element regex"));

/// Report whether the file at `path` passes its per-filetype syntax check.
pub fn syntax_check(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "py" => check_with_tool("python3", &["-m", "py_compile"], path),
        "js" => check_with_tool("node", &["--check"], path),
        "html" => check_html(path),
        _ => true,
    }
}

/// Fail-closed: a non-zero exit or a missing interpreter is invalid.
fn check_with_tool(program: &str, args: &[&str], path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    let mut full: Vec<&str> = args.to_vec();
    full.push(path_str.as_ref());
    match run_tool(program, &full, None) {
        Ok(out) => {
            if !out.ok {
                tracing::debug!("{program} rejected {}: {}", path.display(), out.stderr.trim());
            }
            out.ok
        }
        Err(e) => {
            tracing::warn!("{program} unavailable ({e}); treating {} as invalid", path.display());
            false
        }
    }
}

/// Structural check only, not full validation: the file must be readable and
/// contain at least one element.
fn check_html(path: &Path) -> bool {
    match std::fs::read_to_string(path) {
        Ok(content) => ELEMENT.is_match(&content),
        Err(_) => false,
    }
}
