//! Project install configuration and persisted per-target choices.

use crate::paths::PathResolver;
use crate::schema::SubagentSelection;
use crate::Result;
use serde::{Deserialize, Serialize};
use xiaoma_fs::{CapabilityFolder, ConfigStore, NormalizedPath, ReservedName};

/// Optional `xiaoma.toml` at the project root.
///
/// ```toml
/// folder = ".xiaoma"
/// modules = ["core", "bmm"]
/// targets = ["claude-code", "gemini"]
/// source = "/path/to/source"
/// subagents = "all"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<CapabilityFolder>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subagents: Option<String>,
}

/// Load `xiaoma.toml` from `project_root`; a missing file yields defaults.
///
/// # Errors
/// Returns an error when the file exists but cannot be parsed.
pub fn load_install_config(project_root: &NormalizedPath) -> Result<InstallConfig> {
    let path = project_root.join(ReservedName::ProjectConfig.as_str());
    Ok(ConfigStore::new().load_optional(&path)?.unwrap_or_default())
}

/// Choices recorded after a successful install for one target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetChoices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subagents: Option<SubagentSelection>,
}

impl TargetChoices {
    /// Saved choices for `target`, if any. Unreadable files count as absent.
    pub fn load(paths: &dyn PathResolver, target: &str) -> Option<Self> {
        let path = paths.choices_path(target);
        match ConfigStore::new().load_optional(&path) {
            Ok(choices) => choices,
            Err(e) => {
                tracing::warn!("Ignoring saved choices for {}: {}", target, e);
                None
            }
        }
    }

    pub fn save(&self, paths: &dyn PathResolver, target: &str) -> Result<()> {
        let path = paths.choices_path(target);
        ConfigStore::new().save(&path, self)?;
        tracing::debug!("Saved choices for {} to {}", target, path);
        Ok(())
    }
}
