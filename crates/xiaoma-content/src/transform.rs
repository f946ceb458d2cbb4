//! The transformer chain (activation injection, then placeholder substitution).

use crate::activation::inject_activation;
use crate::tokens::Placeholders;

/// Metadata the chain needs about the document being transformed.
#[derive(Debug, Clone, Default)]
pub struct TransformContext {
    pub module: String,
    pub name: String,
    /// Concrete project root; `None` leaves `{project-root}` for the destination to resolve.
    pub project_root: Option<String>,
}

impl TransformContext {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            project_root: None,
        }
    }

    pub fn with_project_root(mut self, root: Option<String>) -> Self {
        self.project_root = root;
        self
    }

    fn placeholders(&self) -> Placeholders {
        let mut placeholders = Placeholders::new()
            .with_module(&self.module)
            .with_agent(&self.name)
            .with_task(&self.name);
        placeholders.project_root = self.project_root.clone();
        placeholders
    }
}

/// Run steps 1 and 2 of the chain over `text`.
///
/// Idempotent for documents whose output contains no unresolved tokens.
pub fn transform(text: &str, ctx: &TransformContext) -> String {
    let activated = inject_activation(text);
    ctx.placeholders().apply(&activated)
}
