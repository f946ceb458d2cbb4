//! The normalized unit moved through the pipeline.

use std::collections::HashMap;
use xiaoma_fs::NormalizedPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactType {
    Agent,
    Task,
    Tool,
    WorkflowCommand,
    WorkflowLauncher,
}

impl ArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Task => "task",
            Self::Tool => "tool",
            Self::WorkflowCommand => "workflow-command",
            Self::WorkflowLauncher => "workflow-launcher",
        }
    }

    /// Directory segment used in `relative_path` and nested layouts.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Agent => "agents",
            Self::Task => "tasks",
            Self::Tool => "tools",
            Self::WorkflowCommand | Self::WorkflowLauncher => "workflows",
        }
    }

    /// Prefix used by layouts that fold the type into the file name.
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Task => "task",
            Self::Tool => "tool",
            Self::WorkflowCommand | Self::WorkflowLauncher => "workflow",
        }
    }
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub artifact_type: ArtifactType,
    pub module: String,
    /// Logical identifier, used as the file stem.
    pub name: String,
    /// `module/type/name`, the canonical namespacing key.
    pub relative_path: String,
    pub content: String,
    pub source_path: NormalizedPath,
    /// Display title, icon included.
    pub title: String,
    pub description: String,
    /// Agent hint for mode registries.
    pub when_to_use: Option<String>,
}

impl Artifact {
    pub fn key(&self) -> (String, ArtifactType, String) {
        (self.module.clone(), self.artifact_type, self.name.clone())
    }
}

/// A `(module, type, name)` key produced more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub module: String,
    pub artifact_type: ArtifactType,
    pub name: String,
    /// Source of the artifact that was replaced.
    pub replaced: NormalizedPath,
    /// Source of the artifact that won.
    pub winner: NormalizedPath,
}

/// Artifacts of one run, unique by `(module, type, name)`.
///
/// A repeated key replaces the earlier artifact in place (last write wins)
/// and is recorded as a [`Collision`].
#[derive(Debug, Default)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
    index: HashMap<(String, ArtifactType, String), usize>,
    collisions: Vec<Collision>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, artifact: Artifact) {
        let key = artifact.key();
        match self.index.get(&key) {
            Some(&slot) => {
                let previous = std::mem::replace(&mut self.artifacts[slot], artifact);
                tracing::warn!(
                    "Duplicate {} '{}' in module {}: {} replaces {}",
                    key.1,
                    key.2,
                    key.0,
                    self.artifacts[slot].source_path,
                    previous.source_path
                );
                self.collisions.push(Collision {
                    module: key.0,
                    artifact_type: key.1,
                    name: key.2,
                    replaced: previous.source_path,
                    winner: self.artifacts[slot].source_path.clone(),
                });
            }
            None => {
                self.index.insert(key, self.artifacts.len());
                self.artifacts.push(artifact);
            }
        }
    }

    pub fn extend(&mut self, artifacts: impl IntoIterator<Item = Artifact>) {
        for artifact in artifacts {
            self.insert(artifact);
        }
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn of_type(&self, artifact_type: ArtifactType) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .filter(move |a| a.artifact_type == artifact_type)
    }

    pub fn count(&self, artifact_type: ArtifactType) -> usize {
        self.of_type(artifact_type).count()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Drop every artifact of `artifact_type`.
    pub fn remove_type(&mut self, artifact_type: ArtifactType) {
        self.artifacts.retain(|a| a.artifact_type != artifact_type);
        self.index = self
            .artifacts
            .iter()
            .enumerate()
            .map(|(i, a)| (a.key(), i))
            .collect();
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}
