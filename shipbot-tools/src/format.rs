//! Best-effort code formatting.
//!
//! Formatting is strictly optional: when `autopep8` or `js-beautify` is not
//! installed, or the tool fails or produces nothing, the original content is
//! returned untouched. Formatting must never block or fail a deployment.

use std::path::Path;

use crate::invoke::{run_tool_with_stdin, tool_available};

/// Pretty-printer with probed external capabilities.
///
/// Build once with [`Formatter::detect`] at startup; capability flags are
/// injectable via [`Formatter::with_tools`] so tests never depend on what is
/// installed on the host.
#[derive(Debug, Clone)]
pub struct Formatter {
    autopep8: bool,
    js_beautify: bool,
}

impl Formatter {
    /// Probe the PATH for `autopep8` and `js-beautify`.
    pub fn detect() -> Self {
        let f = Formatter {
            autopep8: tool_available("autopep8"),
            js_beautify: tool_available("js-beautify"),
        };
        tracing::debug!(
            "formatter capabilities: autopep8={} js-beautify={}",
            f.autopep8,
            f.js_beautify
        );
        f
    }

    /// Construct with explicit capability flags.
    pub fn with_tools(autopep8: bool, js_beautify: bool) -> Self {
        Formatter { autopep8, js_beautify }
    }

    /// A formatter that always passes content through unchanged.
    pub fn passthrough() -> Self {
        Formatter::with_tools(false, false)
    }

    /// Format `content` according to the extension of `path`.
    ///
    /// Total: always returns some string, formatted when a capability is
    /// available and succeeds, the original otherwise.
    pub fn format(&self, content: &str, path: &Path) -> String {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let formatted = match ext {
            "py" if self.autopep8 => self.pipe("autopep8", &["--aggressive", "-"], content),
            "js" if self.js_beautify => self.pipe("js-beautify", &["-"], content),
            "css" if self.js_beautify => {
                self.pipe("js-beautify", &["--type", "css", "-"], content)
            }
            "html" if self.js_beautify => {
                self.pipe("js-beautify", &["--type", "html", "-"], content)
            }
            _ => None,
        };
        formatted.unwrap_or_else(|| content.to_string())
    }

    /// Feed content through one tool; `None` on any failure or empty output.
    fn pipe(&self, program: &str, args: &[&str], content: &str) -> Option<String> {
        match run_tool_with_stdin(program, args, content) {
            Ok(out) if out.ok && !out.stdout.trim().is_empty() => Some(out.stdout),
            Ok(out) => {
                tracing::warn!(
                    "{program} exited with {:?}; keeping original content",
                    out.code
                );
                None
            }
            Err(e) => {
                tracing::warn!("{program} failed to spawn: {e}; keeping original content");
                None
            }
        }
    }
}
