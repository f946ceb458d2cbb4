//! Workflow manifest discovery.

use crate::schema::WorkflowManifest;
use crate::{Error, Result};
use xiaoma_fs::{ConfigStore, NormalizedPath, ReservedName, io};

/// One discovered workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowEntry {
    pub name: String,
    /// Path of the manifest file itself.
    pub path: NormalizedPath,
    /// Workflow directory relative to the scan root (`plan`, `nested/plan`).
    pub relative_path: String,
    pub description: Option<String>,
    pub standalone: bool,
}

/// Read and validate a single manifest.
///
/// # Errors
/// `Error::InvalidManifest` for malformed YAML or a missing `name`.
pub fn read_manifest(path: &NormalizedPath) -> Result<WorkflowManifest> {
    let manifest: WorkflowManifest =
        ConfigStore::new()
            .load(path)
            .map_err(|e| Error::InvalidManifest {
                path: path.to_native(),
                message: e.to_string(),
            })?;
    if manifest.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        return Err(Error::InvalidManifest {
            path: path.to_native(),
            message: "missing required field 'name'".into(),
        });
    }
    Ok(manifest)
}

/// Find every directory under `root` containing a `workflow.yaml`.
///
/// Invalid manifests are skipped. A missing root yields an empty list.
/// Results are sorted by `relative_path`.
pub fn find_workflow_manifests(root: &NormalizedPath) -> Vec<WorkflowEntry> {
    let mut entries = Vec::new();
    if root.is_dir() {
        walk(root, root, &mut entries);
    }
    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    entries
}

fn walk(root: &NormalizedPath, dir: &NormalizedPath, out: &mut Vec<WorkflowEntry>) {
    let manifest_path = dir.join(ReservedName::WorkflowManifest.as_str());
    if manifest_path.is_file() {
        match read_manifest(&manifest_path) {
            Ok(manifest) => {
                let standalone = manifest.is_standalone();
                out.push(WorkflowEntry {
                    name: manifest.name.unwrap_or_default(),
                    relative_path: dir.relative_to(root).unwrap_or_default(),
                    path: manifest_path,
                    description: manifest.description,
                    standalone,
                });
            }
            Err(e) => tracing::debug!("Skipping workflow: {}", e),
        }
    }

    let children = match io::list_dir(dir) {
        Ok(children) => children,
        Err(e) => {
            tracing::warn!("Skipping unreadable directory {}: {}", dir, e);
            return;
        }
    };
    for child in children.iter().filter(|c| c.is_dir()) {
        walk(root, child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xiaoma_test_utils::{SourceTree, docs};

    #[test]
    fn test_finds_nested_manifests() {
        let tree = SourceTree::new();
        tree.workflow("core", "plan", &docs::workflow_manifest("Plan", "Plan work", true))
            .workflow("core", "nested/review", "name: review\n")
            .workflow("core", "broken", "description: no name\n")
            .workflow("core", "garbage", "name: [oops\n")
            .capability("core", "workflows", "empty/readme.md", "x");

        let root = NormalizedPath::new(tree.source_module("core").join("workflows"));
        let found = find_workflow_manifests(&root);

        let summary: Vec<(&str, &str, bool)> = found
            .iter()
            .map(|w| (w.name.as_str(), w.relative_path.as_str(), w.standalone))
            .collect();
        assert_eq!(
            summary,
            vec![("review", "nested/review", false), ("Plan", "plan", true)]
        );
        assert_eq!(found[1].description.as_deref(), Some("Plan work"));
        assert!(found[1].path.as_str().ends_with("plan/workflow.yaml"));
    }

    #[test]
    fn test_missing_root() {
        let tree = SourceTree::new();
        let root = NormalizedPath::new(tree.source_root().join("absent"));
        assert!(find_workflow_manifests(&root).is_empty());
    }

    #[test]
    fn test_read_manifest_requires_name() {
        let tree = SourceTree::new();
        let path = tree.source_file("w/workflow.yaml", "name: \"  \"\n");
        let err = read_manifest(&NormalizedPath::new(path)).unwrap_err();
        assert!(matches!(err, Error::InvalidManifest { .. }));
    }
}
