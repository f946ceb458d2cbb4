//! [`SourceTree`] builder for pipeline test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a capability source tree under `source/`
/// and a destination project under `project/`.
///
/// Capability documents added through the `agent`/`task`/`workflow` helpers
/// are written to both the source module and the installed tree
/// (`project/<folder>/<module>`), mirroring the prior install step.
///
/// # Example
///
/// ```rust,no_run
/// use xiaoma_test_utils::SourceTree;
///
/// let tree = SourceTree::new();
/// tree.agent("core", "pm.md", "<agent id=\"pm\"></agent>");
/// tree.assert_project_missing(".claude");
/// ```
pub struct SourceTree {
    temp_dir: TempDir,
    folder: String,
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceTree {
    /// Create an empty tree with the default `.xiaoma` capability folder.
    pub fn new() -> Self {
        Self::with_folder(".xiaoma")
    }

    /// Create an empty tree with a custom capability folder name.
    pub fn with_folder(folder: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("source")).unwrap();
        fs::create_dir_all(temp_dir.path().join("project")).unwrap();
        Self {
            temp_dir,
            folder: folder.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source_root(&self) -> PathBuf {
        self.root().join("source")
    }

    pub fn project_root(&self) -> PathBuf {
        self.root().join("project")
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn installed_root(&self) -> PathBuf {
        self.project_root().join(&self.folder)
    }

    /// Source directory of `module` (`core` or `modules/<name>`).
    pub fn source_module(&self, module: &str) -> PathBuf {
        if module == "core" {
            self.source_root().join("core")
        } else {
            self.source_root().join("modules").join(module)
        }
    }

    /// Write a file relative to the source root.
    pub fn source_file(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.source_root().join(rel), content)
    }

    /// Write a file relative to the installed capability folder.
    pub fn installed_file(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.installed_root().join(rel), content)
    }

    /// Write a file relative to the project root.
    pub fn project_file(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.project_root().join(rel), content)
    }

    /// Write a capability document into both the source module and the
    /// installed tree, under `kind/rel`.
    pub fn capability(&self, module: &str, kind: &str, rel: &str, content: &str) -> &Self {
        write(&self.source_module(module).join(kind).join(rel), content);
        write(
            &self.installed_root().join(module).join(kind).join(rel),
            content,
        );
        self
    }

    pub fn agent(&self, module: &str, file: &str, content: &str) -> &Self {
        self.capability(module, "agents", file, content)
    }

    pub fn task(&self, module: &str, file: &str, content: &str) -> &Self {
        self.capability(module, "tasks", file, content)
    }

    pub fn tool(&self, module: &str, file: &str, content: &str) -> &Self {
        self.capability(module, "tools", file, content)
    }

    /// Write `workflows/<dir>/workflow.yaml` for `module`.
    pub fn workflow(&self, module: &str, dir: &str, manifest: &str) -> &Self {
        self.capability(module, "workflows", &format!("{dir}/workflow.yaml"), manifest)
    }

    /// Write `sub-modules/<target>/injections.yaml` for `module` in the source tree.
    pub fn injections(&self, module: &str, target: &str, yaml: &str) -> &Self {
        write(
            &self
                .source_module(module)
                .join("sub-modules")
                .join(target)
                .join("injections.yaml"),
            yaml,
        );
        self
    }

    /// Write a subagent file next to the injection descriptor.
    pub fn subagent(&self, module: &str, target: &str, rel: &str, content: &str) -> &Self {
        write(
            &self
                .source_module(module)
                .join("sub-modules")
                .join(target)
                .join(rel),
            content,
        );
        self
    }

    /// Read a file relative to the project root.
    ///
    /// # Panics
    /// Panics with the path if the file cannot be read.
    pub fn read_project(&self, rel: &str) -> String {
        let path = self.project_root().join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("read_project: {} unreadable: {e}", path.display()))
    }

    /// All files under `rel` (relative to the project root), as sorted
    /// forward-slash paths relative to that directory.
    pub fn project_files(&self, rel: &str) -> Vec<String> {
        let base = self.project_root().join(rel);
        let mut out = Vec::new();
        collect(&base, &base, &mut out);
        out.sort();
        out
    }

    /// Assert that `rel` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_project_exists(&self, rel: &str) {
        let path = self.project_root().join(rel);
        assert!(path.exists(), "Expected {} to exist", path.display());
    }

    /// Assert that `rel` (relative to the project root) does not exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_project_missing(&self, rel: &str) {
        let path = self.project_root().join(rel);
        assert!(!path.exists(), "Expected {} to be absent", path.display());
    }
}

fn write(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("failed to create {}: {e}", parent.display()));
    }
    fs::write(path, content).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    path.to_path_buf()
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(base, &path, out);
        } else if let Ok(rel) = path.strip_prefix(base) {
            out.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
