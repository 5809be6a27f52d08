//! File dispatch: classified block writes and write-if-absent scaffolding.

use std::path::{Path, PathBuf};

use shipbot_core::types::{ClassifiedFile, CodeBlock, RepoName};
use shipbot_extract::classify;
use shipbot_render::{Renderer, ScaffoldContext, ScaffoldKind};
use shipbot_tools::Formatter;

use crate::error::{io_err, DeployError};

/// Classify, format, and write every block under `workdir`.
///
/// Returns the workdir-relative paths in block order. Parent directories
/// (`src/`, `static/`, `misc/`) are created on demand.
pub fn write_blocks(
    workdir: &Path,
    blocks: &[CodeBlock],
    formatter: &Formatter,
) -> Result<Vec<PathBuf>, DeployError> {
    let mut files = Vec::with_capacity(blocks.len());
    for block in blocks {
        let path = classify(&block.content, block.index);
        let file = ClassifiedFile {
            content: formatter.format(&block.content, &path),
            path,
        };

        let abs = workdir.join(&file.path);
        if let Some(dir) = abs.parent() {
            std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
        }
        std::fs::write(&abs, &file.content).map_err(|e| io_err(&abs, e))?;
        tracing::info!("wrote {}", file.path.display());
        files.push(file.path);
    }
    Ok(files)
}

/// Generate `README.md`, `LICENSE`, and `.gitignore` if absent.
///
/// Existing files are never overwritten. Returns the list of files actually
/// created — empty when all three already existed.
pub fn scaffold_core_files(
    workdir: &Path,
    repo: &RepoName,
    account: &str,
    clone_url: &str,
) -> Result<Vec<PathBuf>, DeployError> {
    let renderer = Renderer::new()?;
    let ctx = ScaffoldContext::new(repo, account, clone_url);

    let mut created = Vec::new();
    for kind in ScaffoldKind::all() {
        let (rel, content) = renderer.render(&ctx, *kind)?;
        let abs = workdir.join(&rel);
        if abs.exists() {
            tracing::debug!("keeping existing {}", rel.display());
            continue;
        }
        std::fs::write(&abs, content).map_err(|e| io_err(&abs, e))?;
        tracing::info!("scaffolded {}", rel.display());
        created.push(rel);
    }
    Ok(created)
}
