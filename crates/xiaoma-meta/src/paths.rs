//! Locating the source tree, the installed tree and per-module directories.

use crate::schema::Module;
use xiaoma_fs::constants::CORE_MODULE;
use xiaoma_fs::{CapabilityFolder, NormalizedPath, ReservedName, io};

/// Resolves the on-disk locations the pipeline reads from and writes to.
///
/// Only the three roots are required; every other location derives from
/// them.
pub trait PathResolver {
    fn source_root(&self) -> &NormalizedPath;

    fn project_root(&self) -> &NormalizedPath;

    fn folder(&self) -> &CapabilityFolder;

    /// `{project}/{folder}`
    fn installed_root(&self) -> NormalizedPath {
        self.project_root().join(self.folder().as_str())
    }

    /// `source/core` for the core module, `source/modules/<name>` otherwise.
    fn source_module_dir(&self, module: &str) -> NormalizedPath {
        if module == CORE_MODULE {
            self.source_root().join(CORE_MODULE)
        } else {
            self.source_root()
                .join(ReservedName::ModulesDir.as_str())
                .join(module)
        }
    }

    fn installed_module_dir(&self, module: &str) -> NormalizedPath {
        self.installed_root().join(module)
    }

    fn installed_module(&self, module: &str) -> Module {
        Module::new(module, self.installed_module_dir(module))
    }

    /// `sub-modules/<target>` inside the source module.
    fn injection_dir(&self, module: &str, target: &str) -> NormalizedPath {
        self.source_module_dir(module)
            .join(ReservedName::SubModulesDir.as_str())
            .join(target)
    }

    /// `{installed}/_cfg/targets/<target>.yaml`
    fn choices_path(&self, target: &str) -> NormalizedPath {
        self.installed_root()
            .join(ReservedName::ConfigDir.as_str())
            .join("targets")
            .join(&format!("{}.yaml", target))
    }

    /// Modules present in the source tree: `core` first, then the optional
    /// modules in name order.
    fn available_modules(&self) -> Vec<String> {
        let mut modules = Vec::new();
        if self.source_module_dir(CORE_MODULE).is_dir() {
            modules.push(CORE_MODULE.to_string());
        }
        let optional = self.source_root().join(ReservedName::ModulesDir.as_str());
        match io::list_dir(&optional) {
            Ok(entries) => modules.extend(
                entries
                    .iter()
                    .filter(|e| e.is_dir())
                    .filter_map(|e| e.file_name().map(str::to_string)),
            ),
            Err(e) => tracing::warn!("Cannot list optional modules: {}", e),
        }
        modules
    }
}

/// The standard layout rooted at explicit paths.
#[derive(Debug, Clone)]
pub struct StandardPaths {
    source_root: NormalizedPath,
    project_root: NormalizedPath,
    folder: CapabilityFolder,
}

impl StandardPaths {
    pub fn new(
        source_root: impl Into<NormalizedPath>,
        project_root: impl Into<NormalizedPath>,
        folder: CapabilityFolder,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            project_root: project_root.into(),
            folder,
        }
    }
}

impl PathResolver for StandardPaths {
    fn source_root(&self) -> &NormalizedPath {
        &self.source_root
    }

    fn project_root(&self) -> &NormalizedPath {
        &self.project_root
    }

    fn folder(&self) -> &CapabilityFolder {
        &self.folder
    }
}
