//! Artifact generators.
//!
//! Every generator reads the *installed* capability tree through a
//! [`PathResolver`](xiaoma_meta::PathResolver) and emits [`Artifact`]
//! records. A module without the expected subdirectory contributes nothing.

mod agent;
mod task_tool;
pub mod templates;
mod workflow;

pub use agent::AgentGenerator;
pub use task_tool::TaskToolGenerator;
pub use workflow::WorkflowGenerator;

use crate::artifact::Artifact;
use xiaoma_content::Placeholders;

/// Options shared by the generators of one adapter.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Concrete project root substituted into `{project-root}`; `None`
    /// leaves the token for the host tool.
    pub project_root: Option<String>,
    /// Emit only tasks, tools and workflows marked standalone.
    pub standalone_only: bool,
}

impl GeneratorOptions {
    pub(crate) fn resolve(&self, text: &str) -> String {
        match &self.project_root {
            Some(root) => Placeholders::new().with_project_root(root).apply(text),
            None => text.to_string(),
        }
    }
}

/// A generator of one family of artifacts.
pub trait ArtifactGenerator {
    fn generate(
        &self,
        paths: &dyn xiaoma_meta::PathResolver,
        modules: &[String],
        options: &GeneratorOptions,
    ) -> Vec<Artifact>;
}

/// Lowercase kebab-case identifier for file stems.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Plan", "plan")]
    #[case("Create PRD (v2)", "create-prd-v2")]
    #[case("  brainstorm_project ", "brainstorm-project")]
    #[case("tech-spec", "tech-spec")]
    fn test_slugify(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn test_resolve_project_root() {
        let options = GeneratorOptions {
            project_root: Some("/work".into()),
            ..Default::default()
        };
        assert_eq!(options.resolve("{project-root}/x"), "/work/x");
        assert_eq!(GeneratorOptions::default().resolve("{project-root}/x"), "{project-root}/x");
    }
}
