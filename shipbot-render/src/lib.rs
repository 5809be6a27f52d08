//! # shipbot-render
//!
//! Tera-based template engine that renders the scaffold files (`README.md`,
//! `LICENSE`, `.gitignore`) for a freshly deployed repository.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shipbot_render::{Renderer, ScaffoldKind, ScaffoldContext};
//!
//! fn render_all(ctx: &ScaffoldContext) {
//!     if let Ok(renderer) = Renderer::new() {
//!         for kind in ScaffoldKind::all() {
//!             if let Ok((path, content)) = renderer.render(ctx, *kind) {
//!                 println!("{}: {} bytes", path.display(), content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::ScaffoldContext;
pub use engine::{Renderer, ScaffoldKind};
pub use error::RenderError;
