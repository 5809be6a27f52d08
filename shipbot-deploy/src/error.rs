//! Error types for shipbot-deploy.
//!
//! Propagation policy: formatting failures never surface here (the formatter
//! falls back to raw content); syntax-tool failures surface as a `Syntax`
//! error from the pipeline, not a crash. Everything in this enum is fatal and
//! aborts the whole deploy/update call.

use std::path::PathBuf;

use thiserror::Error;

use shipbot_render::RenderError;

/// All errors that can arise from a deployment or file update.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The repository-creation endpoint returned something other than 201 or
    /// the benign 422 "already exists".
    #[error("repo creation failed: {status} - {body}")]
    RemoteCreate { status: u16, body: String },

    /// Transport-level HTTP failure (DNS, TLS, connection).
    #[error("github request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// A git command required for local setup failed.
    #[error("local setup failed: {message}")]
    LocalSetup { message: String },

    /// The raw input contained zero extractable code blocks.
    #[error("no valid code blocks found in input")]
    NoContent,

    /// A written code file failed its syntax check.
    #[error("syntax error in {path}")]
    Syntax { path: PathBuf },

    /// Staging during automatic conflict resolution failed.
    #[error("conflict resolution failed: {message}; please resolve manually")]
    ConflictResolution { message: String },

    /// Staging, committing, or pushing failed (other than the benign
    /// "nothing to commit" case).
    #[error("commit/push failed: {message}")]
    CommitPush { message: String },

    /// Scaffold template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`DeployError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DeployError {
    DeployError::Io {
        path: path.into(),
        source,
    }
}
