//! Error types for shipbot-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from credential configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (write/save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.shipbot/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// No credentials found in the environment or on disk.
    #[error("no credentials at {path}; run `shipbot auth <account> --token <token>` or set SHIPBOT_ACCOUNT/SHIPBOT_TOKEN")]
    CredentialsNotFound { path: PathBuf },
}
