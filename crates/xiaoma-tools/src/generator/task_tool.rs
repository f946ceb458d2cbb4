//! Command stubs for tasks and tools.

use super::{ArtifactGenerator, GeneratorOptions, templates};
use crate::artifact::{Artifact, ArtifactType};
use regex::Regex;
use std::sync::LazyLock;
use xiaoma_content::DocumentMetadata;
use xiaoma_meta::{CapabilityKind, Document, PathResolver, scan_with_standalone_probe};

/// `name="..."` on the root `<task>` or `<tool>` element.
static ELEMENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:task|tool)\s[^>]*\bname="([^"]+)""#).expect("Invalid element name regex")
});

pub struct TaskToolGenerator;

impl TaskToolGenerator {
    fn artifact(
        kind: CapabilityKind,
        module: &str,
        doc: Document,
        rel: &str,
        options: &GeneratorOptions,
    ) -> Artifact {
        let (artifact_type, label) = match kind {
            CapabilityKind::Tool => (ArtifactType::Tool, "tool"),
            _ => (ArtifactType::Task, "task"),
        };
        let stem = doc.stem().to_string();
        let mut meta = DocumentMetadata::extract(&doc.raw, &stem);
        if meta.title == stem
            && let Some(name) = ELEMENT_NAME.captures(&doc.raw).and_then(|c| c.get(1))
        {
            if meta.description == meta.title {
                meta.description = name.as_str().to_string();
            }
            meta.title = name.as_str().to_string();
        }

        let content = options.resolve(&templates::capability_command(
            label,
            &meta.title,
            &meta.description,
            &templates::installed_path(module, kind.dir_name(), rel),
        ));

        Artifact {
            artifact_type,
            module: module.to_string(),
            relative_path: format!("{}/{}/{}", module, kind.dir_name(), stem),
            name: stem,
            content,
            source_path: doc.path,
            title: meta.title,
            description: meta.description,
            when_to_use: None,
        }
    }
}

impl ArtifactGenerator for TaskToolGenerator {
    fn generate(
        &self,
        paths: &dyn PathResolver,
        modules: &[String],
        options: &GeneratorOptions,
    ) -> Vec<Artifact> {
        let mut artifacts = Vec::new();

        for module in modules {
            for kind in [CapabilityKind::Task, CapabilityKind::Tool] {
                let dir = paths.installed_module(module).dir(kind);
                for doc in scan_with_standalone_probe(&dir, kind.extensions()) {
                    if options.standalone_only && !doc.standalone {
                        tracing::debug!("Skipping non-standalone {}", doc.path);
                        continue;
                    }
                    let rel = doc
                        .path
                        .relative_to(&dir)
                        .unwrap_or_else(|| doc.file_name().to_string());
                    artifacts.push(Self::artifact(kind, module, doc, &rel, options));
                }
            }
        }

        artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xiaoma_fs::CapabilityFolder;
    use xiaoma_meta::StandardPaths;
    use xiaoma_test_utils::{SourceTree, docs};

    fn setup() -> (SourceTree, StandardPaths) {
        let tree = SourceTree::new();
        tree.task("core", "review.xml", &docs::xml_task("adv-review", true))
            .task("core", "index.xml", &docs::xml_task("index", false))
            .tool("core", "shard.md", &docs::markdown_tool("shard", "Split documents", true));
        let paths = StandardPaths::new(
            tree.source_root(),
            tree.project_root(),
            CapabilityFolder::default(),
        );
        (tree, paths)
    }

    #[test]
    fn test_all_documents() {
        let (_tree, paths) = setup();
        let artifacts =
            TaskToolGenerator.generate(&paths, &["core".into()], &GeneratorOptions::default());

        let keys: Vec<(&str, ArtifactType)> = artifacts
            .iter()
            .map(|a| (a.relative_path.as_str(), a.artifact_type))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("core/tasks/index", ArtifactType::Task),
                ("core/tasks/review", ArtifactType::Task),
                ("core/tools/shard", ArtifactType::Tool),
            ]
        );

        let review = &artifacts[1];
        assert_eq!(review.title, "adv-review");
        assert!(
            review
                .content
                .contains("{project-root}/{xiaoma_folder}/core/tasks/review.xml")
        );
        assert_eq!(artifacts[2].description, "Split documents");
    }

    #[test]
    fn test_standalone_only() {
        let (_tree, paths) = setup();
        let options = GeneratorOptions {
            standalone_only: true,
            ..Default::default()
        };
        let names: Vec<String> = TaskToolGenerator
            .generate(&paths, &["core".into()], &options)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["review", "shard"]);
    }
}
