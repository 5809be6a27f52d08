//! Credential configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.shipbot/
//!   config.yaml    (account + token — mode 0600)
//! ```
//!
//! # API pattern
//!
//! Every function touching the home directory has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.
//!
//! `SHIPBOT_ACCOUNT` / `SHIPBOT_TOKEN` override file values field by field.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// GitHub account name plus personal access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub account: String,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.shipbot/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".shipbot").join("config.yaml")
}

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load credentials from `<home>/.shipbot/config.yaml`, then apply
/// environment overrides.
///
/// When both `SHIPBOT_ACCOUNT` and `SHIPBOT_TOKEN` are set, the file does not
/// need to exist at all.
pub fn load_at(home: &Path) -> Result<Credentials, ConfigError> {
    let env_account = std::env::var("SHIPBOT_ACCOUNT").ok();
    let env_token = std::env::var("SHIPBOT_TOKEN").ok();
    resolve_at(home, env_account, env_token)
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Credentials, ConfigError> {
    load_at(&home()?)
}

/// Pure resolution step: environment values win field by field over the file.
pub fn resolve_at(
    home: &Path,
    env_account: Option<String>,
    env_token: Option<String>,
) -> Result<Credentials, ConfigError> {
    if let (Some(account), Some(token)) = (env_account.clone(), env_token.clone()) {
        return Ok(Credentials { account, token });
    }

    let path = config_path_at(home);
    if !path.exists() {
        return Err(ConfigError::CredentialsNotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    let file: Credentials =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })?;

    Ok(Credentials {
        account: env_account.unwrap_or(file.account),
        token: env_token.unwrap_or(file.token),
    })
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

/// Write credentials to `<home>/.shipbot/config.yaml`, creating the directory
/// (mode `0700`) and restricting the file to `0600` on Unix.
pub fn save_at(home: &Path, creds: &Credentials) -> Result<PathBuf, ConfigError> {
    let dir = home.join(".shipbot");
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        set_dir_permissions(&dir)?;
    }
    let path = config_path_at(home);
    let yaml = serde_yaml::to_string(creds)?;
    std::fs::write(&path, yaml)?;
    set_file_permissions(&path)?;
    Ok(path)
}

/// `save_at` convenience wrapper.
pub fn save(creds: &Credentials) -> Result<PathBuf, ConfigError> {
    save_at(&home()?, creds)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
