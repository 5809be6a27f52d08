//! `shipbot update` — format, check, and push a single file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use shipbot_core::config;
use shipbot_core::types::RepoName;
use shipbot_deploy::{update_existing_file, GitHubClient};
use shipbot_tools::Formatter;

use super::read_raw;

/// Update one file in an existing repository.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Remote repository name.
    pub repo: String,

    /// Path of the file inside the repository (e.g. src/module_1.py).
    pub filepath: PathBuf,

    /// File with the new content; omit to read stdin.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Parent directory for the local working copy.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

impl UpdateArgs {
    pub fn run(self) -> Result<()> {
        let creds = config::load().context("file update failed")?;
        let content = read_raw(self.input.as_deref())?;

        let host = GitHubClient::new(&creds.account, &creds.token);
        let formatter = Formatter::detect();

        let report = update_existing_file(
            &host,
            &self.dir,
            &RepoName::from(self.repo),
            &self.filepath,
            &content,
            &formatter,
        )
        .context("file update failed")?;

        println!(
            "{} Updated {} in {}",
            "✓".green(),
            report.path.display(),
            report.repo
        );
        Ok(())
    }
}
