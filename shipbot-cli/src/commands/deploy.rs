//! `shipbot deploy` — run one full deployment transaction.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use shipbot_core::config;
use shipbot_core::types::RepoName;
use shipbot_deploy::{deploy, CommitOutcome, DeployRequest, GitHubClient};
use shipbot_tools::Formatter;

use super::read_raw;

/// Deploy raw text containing fenced code blocks to a repository.
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Remote repository name.
    pub repo: String,

    /// File with the raw text; omit to read stdin.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Create the repository as public (default is private).
    #[arg(long)]
    pub public: bool,

    /// Remote repository description.
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Explicit commit message (default is auto-generated).
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Parent directory for the local working copy.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

impl DeployArgs {
    pub fn run(self) -> Result<()> {
        let creds = config::load().context("deployment failed")?;
        let raw = read_raw(self.input.as_deref())?;

        let host = GitHubClient::new(&creds.account, &creds.token);
        let formatter = Formatter::detect();
        let req = DeployRequest {
            repo: RepoName::from(self.repo),
            raw,
            private: !self.public,
            description: self.description,
            message: self.message,
        };

        let report = deploy(&host, &creds.account, &self.dir, &formatter, &req)
            .context("deployment failed")?;

        println!(
            "{} Deployed to https://github.com/{}/{}",
            "✓".green(),
            creds.account,
            report.repo
        );
        for path in report.code_files.iter().chain(&report.scaffold_files) {
            println!("  ✎  {}", path.display());
        }
        match &report.commit {
            CommitOutcome::Pushed { message } => println!("  Commit: {message}"),
            CommitOutcome::NothingToCommit => println!("  No changes to commit."),
        }
        Ok(())
    }
}
