pub mod auth;
pub mod deploy;
pub mod update;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read raw text from `--input` when given, otherwise from stdin.
pub fn read_raw(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read input file '{}'", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("cannot read stdin")?;
            Ok(raw)
        }
    }
}
