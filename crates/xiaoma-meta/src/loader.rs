//! Loader for per-module, per-target injection descriptors
//!
//! ```text
//! <source module>/
//!   sub-modules/
//!     claude-code/
//!       injections.yaml
//!       subagents/
//!         market-researcher.md
//! ```

use crate::paths::PathResolver;
use crate::schema::InjectionConfig;
use crate::{Error, Result};
use xiaoma_fs::{ConfigStore, NormalizedPath, ReservedName};

/// A loaded descriptor together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionDescriptor {
    pub target: String,
    pub module: String,
    /// Directory holding `injections.yaml`.
    pub dir: NormalizedPath,
    pub config: InjectionConfig,
}

impl InjectionDescriptor {
    /// Source path of a subagent file named in the descriptor.
    pub fn subagent_path(&self, file: &str) -> NormalizedPath {
        let source = self
            .config
            .subagents
            .as_ref()
            .map(|s| s.source.as_str())
            .unwrap_or("subagents");
        self.dir.join(source).join(file)
    }

    pub fn has_subagents(&self) -> bool {
        !self.config.subagent_files().is_empty()
    }
}

/// Loads injection descriptors from the source tree.
pub struct InjectionLoader {
    store: ConfigStore,
}

impl InjectionLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }

    /// Load the descriptor for (`target`, `module`).
    ///
    /// Absence is not an error; a malformed descriptor is logged and treated
    /// as absent.
    pub fn load(
        &self,
        paths: &dyn PathResolver,
        target: &str,
        module: &str,
    ) -> Option<InjectionDescriptor> {
        let dir = paths.injection_dir(module, target);
        let path = dir.join(ReservedName::InjectionConfig.as_str());
        if !path.is_file() {
            tracing::debug!("No injections for {} in module {}", target, module);
            return None;
        }

        match self.parse(&path) {
            Ok(config) => Some(InjectionDescriptor {
                target: target.to_string(),
                module: module.to_string(),
                dir,
                config,
            }),
            Err(e) => {
                tracing::warn!("Ignoring injection descriptor: {}", e);
                None
            }
        }
    }

    /// Parse one descriptor file.
    ///
    /// # Errors
    /// `Error::InjectionParse` if the file cannot be read or parsed.
    pub fn parse(&self, path: &NormalizedPath) -> Result<InjectionConfig> {
        self.store.load(path).map_err(|e| Error::InjectionParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }
}

impl Default for InjectionLoader {
    fn default() -> Self {
        Self::new()
    }
}
