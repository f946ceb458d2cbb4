//! Project context shared by the commands
//!
//! Resolves the project root, its optional `xiaoma.toml`, and the values
//! command-line flags may override.

use std::path::Path;

use xiaoma_fs::{CapabilityFolder, NormalizedPath};
use xiaoma_meta::{InstallConfig, load_install_config};

use crate::error::{CliError, Result};

/// A project directory and its install configuration.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: NormalizedPath,
    pub config: InstallConfig,
}

impl ProjectContext {
    /// Load the context for `project`, which must be an existing directory.
    pub fn load(project: &Path) -> Result<Self> {
        if !project.is_dir() {
            return Err(CliError::user(format!(
                "Project directory not found: {}",
                project.display()
            )));
        }
        let root = NormalizedPath::canonical(project);
        let config = load_install_config(&root)?;
        tracing::debug!("Project root {}", root);
        Ok(Self { root, config })
    }

    /// The capability folder: flag, then config, then the default.
    pub fn folder(&self, flag: Option<&str>) -> Result<CapabilityFolder> {
        match flag {
            Some(name) => Ok(CapabilityFolder::new(name)?),
            None => Ok(self.config.folder.clone().unwrap_or_default()),
        }
    }

    /// The source tree: flag, then config. Relative config paths resolve
    /// against the project root.
    pub fn source(&self, flag: Option<&Path>) -> Option<NormalizedPath> {
        if let Some(path) = flag {
            return Some(NormalizedPath::canonical(path));
        }
        let configured = self.config.source.as_deref()?;
        if Path::new(configured).is_absolute() {
            Some(NormalizedPath::canonical(configured))
        } else {
            Some(NormalizedPath::canonical(
                self.root.join(configured).to_native(),
            ))
        }
    }
}

/// Flag values when given, otherwise `fallback`.
pub fn flag_or(flags: &[String], fallback: &[String]) -> Vec<String> {
    if flags.is_empty() {
        fallback.to_vec()
    } else {
        flags.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_project_is_user_error() {
        let temp = TempDir::new().unwrap();
        let err = ProjectContext::load(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_config_values_and_overrides() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("xiaoma.toml"),
            "folder = \"_caps\"\nsource = \"src-tree\"\ntargets = [\"roo\"]\n",
        )
        .unwrap();

        let ctx = ProjectContext::load(temp.path()).unwrap();
        assert_eq!(ctx.folder(None).unwrap().as_str(), "_caps");
        assert_eq!(ctx.folder(Some(".other")).unwrap().as_str(), ".other");
        assert!(ctx.folder(Some("a/b")).is_err());
        assert!(ctx.source(None).unwrap().as_str().ends_with("/src-tree"));
        assert_eq!(
            flag_or(&[], &ctx.config.targets),
            vec!["roo".to_string()]
        );
        assert_eq!(
            flag_or(&["gemini".to_string()], &ctx.config.targets),
            vec!["gemini".to_string()]
        );
    }

    #[test]
    fn test_defaults_without_config() {
        let temp = TempDir::new().unwrap();
        let ctx = ProjectContext::load(temp.path()).unwrap();
        assert_eq!(ctx.folder(None).unwrap(), CapabilityFolder::default());
        assert!(ctx.source(None).is_none());
    }
}
