//! Server-rendered pages: the template set and the handlers that fill it.

use std::path::Path;

use anyhow::{Context, Result};
use minijinja::Environment;
use tracing::info;

pub mod handlers;

pub const HOME_TEMPLATE: &str = "home.html";
pub const DETAILS_TEMPLATE: &str = "details.html";

/// Reads every page template from `dir` into a new environment.
///
/// Templates are loaded once; `.html` names get HTML auto-escaping.
pub fn load_templates(dir: &Path) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    for name in [HOME_TEMPLATE, DETAILS_TEMPLATE] {
        let path = dir.join(name);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        env.add_template_owned(name, source)
            .with_context(|| format!("Failed to parse template {}", path.display()))?;
    }
    info!("Loaded page templates from {}", dir.display());
    Ok(env)
}

#[cfg(test)]
pub(crate) fn templates_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
