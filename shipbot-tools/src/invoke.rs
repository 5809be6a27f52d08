//! External process invocation.
//!
//! Every shell-out in shipbot goes through [`run_tool`] /
//! [`run_tool_with_stdin`], which return a [`ToolOutput`] instead of raising.
//! Callers inspect `ok` and decide whether a non-zero exit is fatal,
//! best-effort, or benign — never implicit exception suppression.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured outcome of one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the process exited with status zero.
    pub ok: bool,
    /// Raw exit code, if the process exited normally.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Combined stdout + stderr, used for substring checks such as the
    /// "nothing to commit" benign case.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Run `program` with `args`, optionally in `cwd`, capturing output.
///
/// A spawn failure (tool not installed, cwd missing) is an `Err`; a non-zero
/// exit is an `Ok` with `ok == false`.
pub fn run_tool(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> std::io::Result<ToolOutput> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    let output = cmd.output()?;
    tracing::debug!(
        "{} {:?} -> {:?}",
        program,
        args,
        output.status.code()
    );
    Ok(ToolOutput {
        ok: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run `program` with `args`, feeding `input` on stdin and capturing output.
pub fn run_tool_with_stdin(
    program: &str,
    args: &[&str],
    input: &str,
) -> std::io::Result<ToolOutput> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    Ok(ToolOutput {
        ok: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Probe whether `program` responds to `--version`.
///
/// Used once at startup to select real formatters over passthrough.
pub fn tool_available(program: &str) -> bool {
    match run_tool(program, &["--version"], None) {
        Ok(out) => out.ok,
        Err(_) => false,
    }
}
