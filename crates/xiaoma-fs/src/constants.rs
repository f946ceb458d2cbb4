//! Reserved names shared by the scanner, the generators and every adapter.
//!
//! Cleanup logic depends on these being bit-exact: anything carrying the
//! generated prefix or living under the generated directory belongs to the
//! pipeline, everything else belongs to the user.

use std::path::Path;

/// Prefix carried by every generated flat file and mode slug.
pub const GENERATED_PREFIX: &str = "xiaoma-";

/// Default name of the installed capability folder.
pub const DEFAULT_CAPABILITY_FOLDER: &str = ".xiaoma";

/// Name of the module that every install includes.
pub const CORE_MODULE: &str = "core";

/// Reserved file and directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedName {
    /// Directory wholly owned by the pipeline in nested layouts
    GeneratedDir,
    /// Manifest file that marks a workflow directory
    WorkflowManifest,
    /// Per-module, per-target injection descriptor
    InjectionConfig,
    /// Directory holding per-target injection material inside a module
    SubModulesDir,
    /// Directory holding optional modules in the source tree
    ModulesDir,
    /// Directory inside the installed tree holding persisted choices
    ConfigDir,
    /// Optional project-level install configuration
    ProjectConfig,
}

impl ReservedName {
    /// Get the string representation of the name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneratedDir => "xiaoma",
            Self::WorkflowManifest => "workflow.yaml",
            Self::InjectionConfig => "injections.yaml",
            Self::SubModulesDir => "sub-modules",
            Self::ModulesDir => "modules",
            Self::ConfigDir => "_cfg",
            Self::ProjectConfig => "xiaoma.toml",
        }
    }
}

impl AsRef<Path> for ReservedName {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ReservedName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ReservedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a file or slug name belongs to the generated namespace.
pub fn is_generated_name(name: &str) -> bool {
    name.starts_with(GENERATED_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_prefix_matches_dir_name() {
        assert!(GENERATED_PREFIX.starts_with(ReservedName::GeneratedDir.as_str()));
    }

    #[test]
    fn test_is_generated_name() {
        assert!(is_generated_name("xiaoma-core-agents-pm.md"));
        assert!(!is_generated_name("my-notes.md"));
        assert!(!is_generated_name("xiaoma.md"));
    }
}
