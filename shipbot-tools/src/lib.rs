//! # shipbot-tools
//!
//! Best-effort external tool plumbing: a uniform invocation result type
//! ([`ToolOutput`]), the pretty-printing [`Formatter`], and the per-filetype
//! [`syntax_check`].
//!
//! Nothing in this crate ever panics on a missing or broken tool. Each call
//! site decides its own pass/fail policy: formatting failures fall back to
//! the original content, syntax-tool failures report "invalid" for code and
//! "valid" for everything else.

pub mod check;
pub mod format;
pub mod invoke;

pub use check::syntax_check;
pub use format::Formatter;
pub use invoke::{run_tool, run_tool_with_stdin, tool_available, ToolOutput};
