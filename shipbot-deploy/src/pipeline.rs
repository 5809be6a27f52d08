//! The deployment transaction.
//!
//! `deploy` sequences: ensure remote → sync local working copy → parse
//! blocks → classify/format/write → scaffold core files → syntax-check →
//! conflict handling → commit and push. Any failure aborts the sequence;
//! files already on disk remain, but nothing is published remotely because
//! the push step is never reached.

use std::path::{Path, PathBuf};

use shipbot_core::types::RepoName;
use shipbot_extract::parse_blocks;
use shipbot_tools::{syntax_check, Formatter};

use crate::error::{io_err, DeployError};
use crate::git::{CommitOutcome, GitRepo};
use crate::github::{CreateOutcome, RepoHost, RepoSpec};
use crate::writer;

/// One deployment request.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub repo: RepoName,
    /// Raw text containing zero or more fenced code blocks.
    pub raw: String,
    pub private: bool,
    /// Remote repository description; defaults to `Auto-generated <repo>`.
    pub description: Option<String>,
    /// Explicit commit message; defaults to an auto-generated timestamped one.
    pub message: Option<String>,
}

impl DeployRequest {
    pub fn new(repo: impl Into<RepoName>, raw: impl Into<String>) -> Self {
        DeployRequest {
            repo: repo.into(),
            raw: raw.into(),
            private: true,
            description: None,
            message: None,
        }
    }
}

/// Summary of one successful deployment.
#[derive(Debug)]
pub struct DeployReport {
    pub repo: RepoName,
    pub workdir: PathBuf,
    /// Paths written from code blocks, relative to the workdir.
    pub code_files: Vec<PathBuf>,
    /// Scaffold files actually created (empty when all existed).
    pub scaffold_files: Vec<PathBuf>,
    pub conflict_detected: bool,
    pub commit: CommitOutcome,
}

/// Summary of one successful single-file update.
#[derive(Debug)]
pub struct UpdateReport {
    pub repo: RepoName,
    pub path: PathBuf,
    pub commit: CommitOutcome,
}

/// Run one full deployment transaction under `<parent>/<repo>`.
pub fn deploy(
    host: &dyn RepoHost,
    account: &str,
    parent: &Path,
    formatter: &Formatter,
    req: &DeployRequest,
) -> Result<DeployReport, DeployError> {
    let spec = RepoSpec {
        name: req.repo.clone(),
        private: req.private,
        description: req
            .description
            .clone()
            .unwrap_or_else(|| format!("Auto-generated {}", req.repo)),
    };
    match host.ensure_repo(&spec)? {
        CreateOutcome::Created => tracing::info!("created repository '{}'", req.repo),
        CreateOutcome::AlreadyExists => {
            tracing::info!("repository '{}' already exists; updating", req.repo)
        }
    }

    let remote_url = host.clone_url(&req.repo);
    let repo = GitRepo::setup(parent, &req.repo.0, &remote_url)?;

    let blocks = parse_blocks(&req.raw);
    if blocks.is_empty() {
        return Err(DeployError::NoContent);
    }

    let code_files = writer::write_blocks(repo.workdir(), &blocks, formatter)?;
    let scaffold_files =
        writer::scaffold_core_files(repo.workdir(), &req.repo, account, &remote_url)?;

    for rel in &code_files {
        if !syntax_check(&repo.workdir().join(rel)) {
            return Err(DeployError::Syntax { path: rel.clone() });
        }
    }

    let conflict_detected = repo.handle_conflicts()?;

    let mut all_files = code_files.clone();
    all_files.extend(scaffold_files.iter().cloned());
    let commit = repo.commit_and_push(req.message.as_deref(), &all_files)?;

    Ok(DeployReport {
        repo: req.repo.clone(),
        workdir: repo.workdir().to_path_buf(),
        code_files,
        scaffold_files,
        conflict_detected,
        commit,
    })
}

/// Format, write, check, and push a single file in an existing repository.
///
/// The commit message is fixed to `Update <basename>`.
pub fn update_existing_file(
    host: &dyn RepoHost,
    parent: &Path,
    repo_name: &RepoName,
    filepath: &Path,
    content: &str,
    formatter: &Formatter,
) -> Result<UpdateReport, DeployError> {
    let remote_url = host.clone_url(repo_name);
    let repo = GitRepo::setup(parent, &repo_name.0, &remote_url)?;

    let abs = repo.workdir().join(filepath);
    if let Some(dir) = abs.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    std::fs::write(&abs, formatter.format(content, filepath)).map_err(|e| io_err(&abs, e))?;

    if !syntax_check(&abs) {
        return Err(DeployError::Syntax {
            path: filepath.to_path_buf(),
        });
    }

    let basename = filepath
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| filepath.display().to_string());
    let commit = repo.commit_and_push(Some(&format!("Update {basename}")), &[])?;

    Ok(UpdateReport {
        repo: repo_name.clone(),
        path: filepath.to_path_buf(),
        commit,
    })
}
