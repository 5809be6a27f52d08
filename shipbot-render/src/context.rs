//! Template context — serializable rendering payload for scaffold files.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tera::Context;

use shipbot_core::types::RepoName;

use crate::error::RenderError;

/// Rendering payload shared by all scaffold templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldContext {
    /// Remote repository name (README title).
    pub repo: String,
    /// Account that owns the repository (LICENSE copyright holder).
    pub account: String,
    /// Full HTTPS clone URL (README setup section).
    pub clone_url: String,
    /// Current year (LICENSE copyright line).
    pub year: i32,
}

impl ScaffoldContext {
    /// Build a context for `repo` under `account` using the current year.
    pub fn new(repo: &RepoName, account: &str, clone_url: &str) -> Self {
        ScaffoldContext {
            repo: repo.0.clone(),
            account: account.to_string(),
            clone_url: clone_url.to_string(),
            year: Utc::now().year(),
        }
    }

    /// Convert into a `tera::Context` for rendering.
    pub fn to_tera_context(&self) -> Result<Context, RenderError> {
        Ok(Context::from_serialize(self)?)
    }
}
