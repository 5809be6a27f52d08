//! Shipbot — code-block deployment CLI.
//!
//! # Usage
//!
//! ```text
//! shipbot auth <account> --token <token>
//! shipbot deploy <repo> [--input FILE] [--public] [--description D] [--message M] [--dir PARENT]
//! shipbot update <repo> <filepath> [--input FILE] [--dir PARENT]
//! ```
//!
//! Raw text is read from `--input` when given, otherwise from stdin.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{auth::AuthArgs, deploy::DeployArgs, update::UpdateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "shipbot",
    version,
    about = "Deploy fenced code blocks straight into a GitHub repository",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store GitHub credentials in ~/.shipbot/config.yaml.
    Auth(AuthArgs),

    /// Create or update a repository from raw text containing code blocks.
    Deploy(DeployArgs),

    /// Format, check, and push a single file in an existing repository.
    Update(UpdateArgs),
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Auth(args) => args.run(),
        Commands::Deploy(args) => args.run(),
        Commands::Update(args) => args.run(),
    }
}
