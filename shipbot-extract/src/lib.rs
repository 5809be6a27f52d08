//! # shipbot-extract
//!
//! Fenced code block extraction and destination-path classification.
//!
//! [`parse_blocks`] turns raw text into ordered [`CodeBlock`]s;
//! [`classify`] maps each block to a destination path via an ordered
//! first-match-wins rule table.

pub mod classify;
pub mod parser;

pub use classify::classify;
pub use parser::parse_blocks;

pub use shipbot_core::types::CodeBlock;
