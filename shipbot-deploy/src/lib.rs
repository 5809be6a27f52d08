//! # shipbot-deploy
//!
//! The deployment pipeline: remote repository creation, local git lifecycle,
//! block writing, scaffolding, and the commit/push step.
//!
//! Call [`pipeline::deploy`] to run one full deployment transaction, or
//! [`pipeline::update_existing_file`] to format/check/push a single file.

pub mod error;
pub mod git;
pub mod github;
pub mod pipeline;
pub mod writer;

pub use error::DeployError;
pub use git::{CommitOutcome, GitRepo, PRIMARY_BRANCH};
pub use github::{CreateOutcome, GitHubClient, RepoHost, RepoSpec};
pub use pipeline::{deploy, update_existing_file, DeployReport, DeployRequest, UpdateReport};
