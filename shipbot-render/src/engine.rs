//! Tera rendering engine — [`ScaffoldKind`] enum and [`Renderer`].
//!
//! # Path mapping
//!
//! | Scaffold  | Output path  |
//! |-----------|--------------|
//! | Readme    | `README.md`  |
//! | License   | `LICENSE`    |
//! | Gitignore | `.gitignore` |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::ScaffoldContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("readme.md.tera", include_str!("templates/readme.md.tera")),
    ("license.tera", include_str!("templates/license.tera")),
    ("gitignore.tera", include_str!("templates/gitignore.tera")),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// ScaffoldKind
// ---------------------------------------------------------------------------

/// The scaffold files generated for every deployed repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaffoldKind {
    Readme,
    License,
    Gitignore,
}

impl ScaffoldKind {
    /// All scaffold variants in a stable order.
    pub fn all() -> &'static [ScaffoldKind] {
        &[
            ScaffoldKind::Readme,
            ScaffoldKind::License,
            ScaffoldKind::Gitignore,
        ]
    }

    /// Template name to render for this scaffold file.
    pub fn template_name(&self) -> &'static str {
        match self {
            ScaffoldKind::Readme => "readme.md.tera",
            ScaffoldKind::License => "license.tera",
            ScaffoldKind::Gitignore => "gitignore.tera",
        }
    }

    /// Output path for this scaffold file, relative to the working-copy root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        match self {
            ScaffoldKind::Readme => root.join("README.md"),
            ScaffoldKind::License => root.join("LICENSE"),
            ScaffoldKind::Gitignore => root.join(".gitignore"),
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for all scaffold kinds.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render one scaffold file.
    ///
    /// Returns `(output_path, rendered_content)`; the path is relative to the
    /// working-copy root (the caller joins it onto the workdir).
    pub fn render(
        &self,
        ctx: &ScaffoldContext,
        kind: ScaffoldKind,
    ) -> Result<(PathBuf, String), RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(kind.template_name(), &tera_ctx)?;
        Ok((kind.output_path(Path::new("")), content))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
