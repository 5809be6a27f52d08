//! `shipbot auth <account> --token <token>` — store credentials.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use shipbot_core::config::{self, Credentials};

/// Store GitHub credentials for later deploys.
#[derive(Args, Debug)]
pub struct AuthArgs {
    /// GitHub account name.
    pub account: String,

    /// Personal access token with repo scope.
    #[arg(long, short = 't')]
    pub token: String,
}

impl AuthArgs {
    pub fn run(self) -> Result<()> {
        let creds = Credentials {
            account: self.account.clone(),
            token: self.token,
        };
        let path = config::save(&creds).context("failed to save credentials")?;
        println!(
            "{} Stored credentials for '{}'",
            "✓".green(),
            self.account
        );
        println!("  Saved to: {}", path.display());
        Ok(())
    }
}
