//! Shipbot core library — domain types, credential config, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`ConfigError`]
//! - [`config`] — load / save credentials

pub mod config;
pub mod error;
pub mod types;

pub use config::Credentials;
pub use error::ConfigError;
pub use types::{ClassifiedFile, CodeBlock, RepoName};
