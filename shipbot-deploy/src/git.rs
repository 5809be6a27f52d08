//! Local git lifecycle over an explicit workdir.
//!
//! Every invocation goes through [`shipbot_tools::run_tool`] and each call
//! site states its own policy: fatal, best-effort, or benign. The process
//! working directory is never changed — the workdir is threaded through
//! every call, so multiple deployments in one process are safe.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use shipbot_tools::{run_tool, ToolOutput};

use crate::error::{io_err, DeployError};

/// The canonical integration branch.
pub const PRIMARY_BRANCH: &str = "main";

/// Outcome of [`GitRepo::commit_and_push`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created and pushed with this message.
    Pushed { message: String },
    /// The working copy was clean; commit and push were skipped.
    NothingToCommit,
}

/// A local working copy rooted at `workdir`.
#[derive(Debug, Clone)]
pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Initialize or refresh the working copy at `<parent>/<name>`.
    ///
    /// Absent: create the directory, `git init`, rename the branch to
    /// [`PRIMARY_BRANCH`], and register `origin` — each step fatal.
    /// Present: `git fetch origin` (fatal), then best-effort checkout and
    /// rebase-pull; a fresh remote has no primary branch yet, so non-zero
    /// exits from those two steps are tolerated.
    pub fn setup(parent: &Path, name: &str, remote_url: &str) -> Result<Self, DeployError> {
        let workdir = parent.join(name);
        let repo = GitRepo {
            workdir: workdir.clone(),
        };

        if !workdir.exists() {
            std::fs::create_dir_all(&workdir).map_err(|e| io_err(&workdir, e))?;
            repo.git_fatal(&["init"])?;
            repo.git_fatal(&["branch", "-M", PRIMARY_BRANCH])?;
            repo.git_fatal(&["remote", "add", "origin", remote_url])?;
            tracing::info!("initialized working copy at {}", workdir.display());
        } else {
            repo.git_fatal(&["fetch", "origin"])?;
            let _ = repo.git(&["checkout", PRIMARY_BRANCH])?;
            let _ = repo.git(&["pull", "--rebase", "origin", PRIMARY_BRANCH])?;
            tracing::debug!("refreshed working copy at {}", workdir.display());
        }
        Ok(repo)
    }

    /// Inspect `git status` for a "both modified" condition and attempt an
    /// automatic rebase-pull if one is reported.
    ///
    /// Returns whether a conflict was *detected*, not whether it was
    /// resolved — a still-conflicted tree will fail the subsequent commit.
    pub fn handle_conflicts(&self) -> Result<bool, DeployError> {
        let status = self.git(&["status"])?;
        if !status.stdout.contains("both modified") {
            return Ok(false);
        }

        tracing::warn!(
            "conflict detected in {}; attempting auto-merge",
            self.workdir.display()
        );
        let _ = self.git(&["pull", "--rebase"])?;
        let add = self.git(&["add", "."])?;
        if !add.ok {
            return Err(DeployError::ConflictResolution {
                message: add.combined().trim().to_string(),
            });
        }
        let _ = self.git(&["rebase", "--continue"])?;
        Ok(true)
    }

    /// Stage everything, commit, and push with upstream tracking.
    ///
    /// An explicit `message` wins; otherwise an auto-generated timestamped
    /// message listing the basenames of `files`. A commit failure whose
    /// output contains "nothing to commit" is a benign no-op and the push is
    /// skipped; any other failure is fatal.
    pub fn commit_and_push(
        &self,
        message: Option<&str>,
        files: &[PathBuf],
    ) -> Result<CommitOutcome, DeployError> {
        let add = self.git(&["add", "."])?;
        if !add.ok {
            return Err(DeployError::CommitPush {
                message: add.combined().trim().to_string(),
            });
        }

        let msg = match message {
            Some(m) => m.to_string(),
            None => auto_message(files, Local::now()),
        };

        let commit = self.git(&["commit", "-m", &msg])?;
        if !commit.ok {
            let combined = commit.combined();
            if combined.contains("nothing to commit") {
                tracing::info!("no changes to commit in {}", self.workdir.display());
                return Ok(CommitOutcome::NothingToCommit);
            }
            return Err(DeployError::CommitPush {
                message: combined.trim().to_string(),
            });
        }

        let push = self.git(&["push", "-u", "origin", PRIMARY_BRANCH])?;
        if !push.ok {
            return Err(DeployError::CommitPush {
                message: push.combined().trim().to_string(),
            });
        }

        tracing::info!("committed and pushed: {msg}");
        Ok(CommitOutcome::Pushed { message: msg })
    }

    /// Run git in the workdir. A spawn failure (git not installed) is fatal;
    /// a non-zero exit is returned for the caller to judge.
    fn git(&self, args: &[&str]) -> Result<ToolOutput, DeployError> {
        run_tool("git", args, Some(&self.workdir)).map_err(|e| DeployError::LocalSetup {
            message: format!("git {} failed to spawn: {e}", args.join(" ")),
        })
    }

    fn git_fatal(&self, args: &[&str]) -> Result<ToolOutput, DeployError> {
        let out = self.git(args)?;
        if !out.ok {
            return Err(DeployError::LocalSetup {
                message: format!(
                    "git {} exited with {:?}: {}",
                    args.join(" "),
                    out.code,
                    out.combined().trim()
                ),
            });
        }
        Ok(out)
    }
}

/// `Auto-commit <timestamp>` plus an optional file-count suffix.
pub(crate) fn auto_message(files: &[PathBuf], now: DateTime<Local>) -> String {
    let mut msg = format!("Auto-commit {}", now.format("%Y-%m-%d %H:%M:%S"));
    if !files.is_empty() {
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        msg.push_str(&format!(" ({} files: {})", files.len(), names.join(", ")));
    }
    msg
}
