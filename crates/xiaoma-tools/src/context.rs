//! Inputs and outputs of adapter operations.

use crate::artifact::ArtifactType;
use std::collections::BTreeMap;
use xiaoma_fs::{CapabilityFolder, NormalizedPath};
use xiaoma_meta::PathResolver;

/// Everything one adapter install needs.
pub struct InstallContext<'a> {
    pub paths: &'a dyn PathResolver,
    /// Selected modules, in install order.
    pub modules: Vec<String>,
}

impl<'a> InstallContext<'a> {
    pub fn new(paths: &'a dyn PathResolver, modules: Vec<String>) -> Self {
        Self { paths, modules }
    }

    pub fn project_root(&self) -> &NormalizedPath {
        self.paths.project_root()
    }

    pub fn folder(&self) -> &CapabilityFolder {
        self.paths.folder()
    }
}

/// A destination write that failed without aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub path: NormalizedPath,
    pub message: String,
}

/// Outcome of one adapter install.
#[derive(Debug, Clone, Default)]
pub struct InstallResult {
    pub target: String,
    /// Files written, in write order.
    pub written: Vec<NormalizedPath>,
    /// Artifacts written per type.
    pub counts: BTreeMap<ArtifactType, usize>,
    pub collisions: usize,
    pub injections_applied: usize,
    pub subagents_installed: usize,
    /// Files removed by the cleanup that precedes every install.
    pub cleaned: usize,
    pub failures: Vec<WriteFailure>,
}

impl InstallResult {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn count(&self, artifact_type: ArtifactType) -> usize {
        self.counts.get(&artifact_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(&mut self, artifact_type: ArtifactType, path: NormalizedPath) {
        *self.counts.entry(artifact_type).or_insert(0) += 1;
        self.written.push(path);
    }

    pub(crate) fn fail(&mut self, path: NormalizedPath, error: impl std::fmt::Display) {
        tracing::warn!("Failed to write {}: {}", path, error);
        self.failures.push(WriteFailure {
            path,
            message: error.to_string(),
        });
    }
}

/// Outcome of one adapter cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub target: String,
    /// Files (or registry blocks) removed.
    pub removed: usize,
}

impl CleanupReport {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            removed: 0,
        }
    }
}

/// A single agent launcher outside the bulk module set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomLauncher {
    pub name: String,
    /// Path of the agent document, in token form or absolute.
    pub agent_path: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CustomLauncher {
    pub fn new(name: impl Into<String>, agent_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent_path: agent_path.into(),
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
