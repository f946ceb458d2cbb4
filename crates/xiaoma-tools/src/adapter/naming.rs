//! Destination file names per naming strategy.

use super::NamingStrategy;
use crate::artifact::Artifact;
use xiaoma_fs::constants::GENERATED_PREFIX;

impl NamingStrategy {
    /// Path of `artifact` relative to the destination root.
    pub fn file_name(&self, artifact: &Artifact, extension: &str) -> String {
        match self {
            Self::FlatWithPrefix => format!(
                "{}{}.{}",
                GENERATED_PREFIX,
                artifact.relative_path.replace('/', "-"),
                extension
            ),
            Self::NestedByModule => format!(
                "{}/{}-{}.{}",
                artifact.module,
                artifact.artifact_type.singular(),
                artifact.name,
                extension
            ),
            Self::NestedByModuleAndType => format!(
                "{}/{}/{}.{}",
                artifact.module,
                artifact.artifact_type.dir_name(),
                artifact.name,
                extension
            ),
        }
    }

    pub fn is_nested(&self) -> bool {
        !matches!(self, Self::FlatWithPrefix)
    }
}

/// Slug of the mode generated for an agent.
pub fn mode_slug(module: &str, name: &str) -> String {
    format!("{}{}-{}", GENERATED_PREFIX, module, name)
}
