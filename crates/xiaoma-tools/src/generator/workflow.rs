//! Workflow commands and the per-module workflow launcher.

use super::{ArtifactGenerator, GeneratorOptions, slugify, templates};
use crate::artifact::{Artifact, ArtifactType};
use xiaoma_meta::{CapabilityKind, PathResolver, find_workflow_manifests};

/// File stem of the per-module launcher.
pub const LAUNCHER_NAME: &str = "README";

pub struct WorkflowGenerator;

impl ArtifactGenerator for WorkflowGenerator {
    fn generate(
        &self,
        paths: &dyn PathResolver,
        modules: &[String],
        options: &GeneratorOptions,
    ) -> Vec<Artifact> {
        let mut artifacts = Vec::new();

        for module in modules {
            let dir = paths.installed_module(module).dir(CapabilityKind::Workflow);
            let mut listing = Vec::new();

            for entry in find_workflow_manifests(&dir) {
                if options.standalone_only && !entry.standalone {
                    tracing::debug!("Skipping non-standalone workflow {}", entry.name);
                    continue;
                }
                let name = slugify(&entry.name);
                if name.is_empty() {
                    tracing::debug!("Skipping workflow with unusable name at {}", entry.path);
                    continue;
                }

                let rel_dir = if entry.relative_path.is_empty() {
                    name.clone()
                } else {
                    entry.relative_path.clone()
                };
                let manifest_rel = if entry.relative_path.is_empty() {
                    "workflow.yaml".to_string()
                } else {
                    format!("{}/workflow.yaml", entry.relative_path)
                };
                let manifest_path = templates::installed_path(module, "workflows", &manifest_rel);
                let description = entry.description.clone().unwrap_or_else(|| entry.name.clone());

                listing.push((name.clone(), manifest_path.clone(), description.clone()));
                artifacts.push(Artifact {
                    artifact_type: ArtifactType::WorkflowCommand,
                    module: module.clone(),
                    relative_path: format!("{}/workflows/{}", module, rel_dir),
                    content: options.resolve(&templates::workflow_command(
                        &entry.name,
                        &description,
                        &manifest_path,
                    )),
                    source_path: entry.path,
                    title: entry.name,
                    description,
                    when_to_use: None,
                    name,
                });
            }

            if !listing.is_empty() {
                artifacts.push(Artifact {
                    artifact_type: ArtifactType::WorkflowLauncher,
                    module: module.clone(),
                    name: LAUNCHER_NAME.to_string(),
                    relative_path: format!("{}/workflows/{}", module, LAUNCHER_NAME),
                    content: options.resolve(&templates::workflow_launcher(module, &listing)),
                    source_path: dir,
                    title: format!("{} Workflows", module),
                    description: format!("Workflows available in the {} module", module),
                    when_to_use: None,
                });
            }
        }

        artifacts
    }
}
