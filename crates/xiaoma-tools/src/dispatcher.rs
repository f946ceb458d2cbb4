//! Dispatcher that runs the selected target adapters
//!
//! The dispatcher uses [`AdapterRegistry`] as the single source of truth for
//! adapter definitions and carries one [`InjectionSession`] across every
//! adapter of a run.

use crate::adapter::TargetAdapter;
use crate::context::{CleanupReport, CustomLauncher, InstallContext, InstallResult};
use crate::error::{Error, Result};
use crate::injection::{InjectionSession, SelectionPrompt};
use crate::registry::{AdapterRegistration, AdapterRegistry};
use xiaoma_fs::{CapabilityFolder, NormalizedPath};
use xiaoma_meta::TargetChoices;

/// Dispatches install, cleanup and detection to target adapters.
pub struct AdapterDispatcher {
    registry: AdapterRegistry,
}

impl AdapterDispatcher {
    /// Create a new dispatcher with all built-in adapters.
    pub fn new() -> Self {
        Self {
            registry: AdapterRegistry::with_builtins(),
        }
    }

    /// Create a dispatcher over a custom registry.
    pub fn with_registry(registry: AdapterRegistry) -> Self {
        Self { registry }
    }

    /// Get an adapter by slug.
    pub fn get_adapter(&self, slug: &str) -> Option<Box<dyn TargetAdapter>> {
        self.registry.adapter(slug)
    }

    fn require_adapter(&self, slug: &str) -> Result<Box<dyn TargetAdapter>> {
        self.get_adapter(slug).ok_or_else(|| Error::UnknownTarget {
            slug: slug.to_string(),
        })
    }

    pub fn has_target(&self, slug: &str) -> bool {
        self.registry.contains(slug)
    }

    /// All adapter slugs, sorted.
    pub fn list_available(&self) -> Vec<String> {
        self.registry.list().iter().map(|s| s.to_string()).collect()
    }

    /// Install every target in `targets`, in the given order.
    ///
    /// Unknown targets are rejected before anything is written. Targets that
    /// already hold generated content reuse their saved subagent choice
    /// instead of prompting again.
    pub fn install_all(
        &self,
        ctx: &InstallContext<'_>,
        targets: &[String],
        session: &mut InjectionSession,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<Vec<InstallResult>> {
        let adapters = targets
            .iter()
            .map(|slug| self.require_adapter(slug))
            .collect::<Result<Vec<_>>>()?;

        let mut results = Vec::with_capacity(adapters.len());
        for adapter in adapters {
            if session.selection().is_none()
                && adapter.detect(ctx.project_root())
                && let Some(TargetChoices {
                    subagents: Some(saved),
                }) = TargetChoices::load(ctx.paths, adapter.name())
            {
                tracing::debug!("Reusing saved subagent choice for {}", adapter.name());
                session.seed(saved);
            }
            results.push(adapter.install(ctx, session, prompt)?);
        }
        Ok(results)
    }

    /// Clean every target in `targets`.
    pub fn cleanup_all(
        &self,
        project_root: &NormalizedPath,
        targets: &[String],
    ) -> Result<Vec<CleanupReport>> {
        let adapters = targets
            .iter()
            .map(|slug| self.require_adapter(slug))
            .collect::<Result<Vec<_>>>()?;

        adapters
            .iter()
            .map(|adapter| adapter.cleanup(project_root))
            .collect()
    }

    /// Slugs of adapters whose namespace holds generated content, sorted.
    pub fn detect_all(&self, project_root: &NormalizedPath) -> Vec<String> {
        self.registry
            .list()
            .into_iter()
            .filter(|slug| {
                self.get_adapter(slug)
                    .is_some_and(|adapter| adapter.detect(project_root))
            })
            .map(str::to_string)
            .collect()
    }

    /// Install a custom launcher for one target.
    pub fn install_custom_launcher(
        &self,
        slug: &str,
        project_root: &NormalizedPath,
        folder: &CapabilityFolder,
        launcher: &CustomLauncher,
    ) -> Result<Option<NormalizedPath>> {
        self.require_adapter(slug)?
            .install_custom_launcher(project_root, folder, launcher)
    }

    /// Get a registration by slug.
    pub fn get_registration(&self, slug: &str) -> Option<&AdapterRegistration> {
        self.registry.get(slug)
    }

    /// Get access to the underlying registry.
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    pub fn total_adapter_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for AdapterDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BUILTIN_COUNT;

    #[test]
    fn test_new_dispatcher() {
        let dispatcher = AdapterDispatcher::new();
        assert_eq!(dispatcher.total_adapter_count(), BUILTIN_COUNT);
    }

    #[test]
    fn test_builtin_adapters() {
        let dispatcher = AdapterDispatcher::new();
        for slug in [
            "claude-code",
            "cursor",
            "windsurf",
            "cline",
            "roo",
            "kilo",
            "gemini",
            "qwen",
            "codex",
            "github-copilot",
            "opencode",
            "auggie",
            "crush",
            "iflow",
            "trae",
            "antigravity",
        ] {
            let adapter = dispatcher.get_adapter(slug);
            assert!(adapter.is_some(), "missing adapter {slug}");
            assert_eq!(adapter.unwrap().name(), slug);
        }
    }

    #[test]
    fn test_unknown_target() {
        let dispatcher = AdapterDispatcher::new();
        assert!(!dispatcher.has_target("vscode"));
        assert!(dispatcher.get_adapter("vscode").is_none());

        let root = NormalizedPath::new("/nonexistent");
        let err = dispatcher
            .cleanup_all(&root, &["vscode".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTarget { slug } if slug == "vscode"));
    }

    #[test]
    fn test_list_available_sorted() {
        let available = AdapterDispatcher::new().list_available();
        assert_eq!(available.len(), BUILTIN_COUNT);
        assert_eq!(available[0], "antigravity");
        let mut sorted = available.clone();
        sorted.sort();
        assert_eq!(available, sorted);
    }

    #[test]
    fn test_get_registration() {
        let dispatcher = AdapterDispatcher::new();
        let reg = dispatcher.get_registration("cursor").unwrap();
        assert_eq!(reg.display_name(), "Cursor");
        assert!(reg.preferred());
    }
}
