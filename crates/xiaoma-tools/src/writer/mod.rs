//! Renderers for destination formats
//!
//! - **markdown**: artifact content, optionally wrapped in front-matter
//! - **command**: TOML table with `description` and `prompt`
//! - **modes**: YAML modes registry with `xiaoma-` slugged blocks

mod command;
mod markdown;
pub mod modes;

use crate::adapter::FileFormat;
use crate::artifact::Artifact;
use crate::error::Result;

/// Render `artifact` in `format`.
pub fn render(artifact: &Artifact, format: FileFormat) -> Result<String> {
    match format {
        FileFormat::Markdown { envelope, .. } => markdown::render(artifact, envelope),
        FileFormat::Toml => command::render(artifact),
    }
}
