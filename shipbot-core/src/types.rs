//! Domain types for shipbot.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! Everything here is transient — entities live for the duration of one
//! deploy/update call and are never persisted.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(pub String);

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One fenced code block extracted from raw input.
///
/// `index` is the 1-based position of extraction; empty blocks are dropped
/// before indices are assigned, so indices always run 1..=N in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub index: usize,
    /// Trimmed block content. Never empty.
    pub content: String,
}

/// A code block bound to its destination path.
///
/// The path is derived exactly once from the block content; there is no
/// re-classification after the file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    /// Destination path relative to the working-copy root.
    pub path: PathBuf,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
