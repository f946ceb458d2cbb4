//! Agent artifacts: launcher stubs or fully transformed documents.

use super::{ArtifactGenerator, GeneratorOptions, templates};
use crate::adapter::AgentContent;
use crate::artifact::{Artifact, ArtifactType};
use xiaoma_content::{DocumentMetadata, TransformContext, transform};
use xiaoma_meta::{CapabilityKind, PathResolver, scan};

pub struct AgentGenerator {
    content: AgentContent,
}

impl AgentGenerator {
    pub fn new(content: AgentContent) -> Self {
        Self { content }
    }
}

impl ArtifactGenerator for AgentGenerator {
    fn generate(
        &self,
        paths: &dyn PathResolver,
        modules: &[String],
        options: &GeneratorOptions,
    ) -> Vec<Artifact> {
        let mut artifacts = Vec::new();

        for module in modules {
            let dir = paths.installed_module(module).dir(CapabilityKind::Agent);
            for doc in scan(&dir, CapabilityKind::Agent.extensions()) {
                let stem = doc.stem().to_string();
                let rel = doc
                    .path
                    .relative_to(&dir)
                    .unwrap_or_else(|| doc.file_name().to_string());
                let meta = DocumentMetadata::extract(&doc.raw, &stem);

                let content = match self.content {
                    AgentContent::Launcher => options.resolve(&templates::agent_launcher(
                        &meta.display_title(),
                        &templates::installed_path(module, "agents", &rel),
                    )),
                    AgentContent::Inline => {
                        let ctx = TransformContext::new(module.as_str(), stem.as_str())
                            .with_project_root(options.project_root.clone());
                        transform(&doc.raw, &ctx)
                    }
                };

                tracing::debug!("Agent artifact {}/{} from {}", module, stem, doc.path);
                artifacts.push(Artifact {
                    artifact_type: ArtifactType::Agent,
                    module: module.clone(),
                    relative_path: format!("{}/agents/{}", module, stem),
                    name: stem,
                    content,
                    source_path: doc.path,
                    title: meta.display_title(),
                    description: meta.description,
                    when_to_use: meta.when_to_use,
                });
            }
        }

        artifacts
    }
}
