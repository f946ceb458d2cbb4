//! Workflow manifest (`workflow.yaml`)

use serde::Deserialize;
use serde_yaml::Value;

/// The fields of a workflow manifest the pipeline reads.
///
/// Manifests carry many more keys (instructions, templates, config sources);
/// those are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub standalone: Option<Value>,
}

impl WorkflowManifest {
    /// True only for the YAML boolean `true`, matching Markdown front-matter.
    pub fn is_standalone(&self) -> bool {
        self.standalone == Some(Value::Bool(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_ignored() {
        let manifest: WorkflowManifest = serde_yaml::from_str(
            "name: plan\nconfig_source: \"{project-root}/x.yaml\"\nstandalone: true\n",
        )
        .unwrap();
        assert_eq!(manifest.name.as_deref(), Some("plan"));
        assert!(manifest.is_standalone());
    }

    #[test]
    fn test_string_standalone_is_false() {
        let manifest: WorkflowManifest =
            serde_yaml::from_str("name: plan\nstandalone: \"true\"\n").unwrap();
        assert!(!manifest.is_standalone());
    }
}
