//! Reserved placeholder tokens and their substitution.
//!
//! Tokens are matched literally, braces included. A value that is not
//! supplied leaves its token untouched so that destinations able to resolve
//! it themselves still can.

/// Project root of the destination project.
pub const PROJECT_ROOT: &str = "{project-root}";
/// Name of the module a document belongs to.
pub const MODULE: &str = "{module}";
/// Logical name of the agent being rendered.
pub const AGENT: &str = "{agent}";
/// Logical name of the task being rendered.
pub const TASK: &str = "{task}";
/// Name of the installed capability folder.
pub const CAPABILITY_FOLDER: &str = "{xiaoma_folder}";

#[cfg(test)]
const ALL: [&str; 5] = [PROJECT_ROOT, MODULE, AGENT, TASK, CAPABILITY_FOLDER];

/// Caller-supplied values for the step-2 placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    pub project_root: Option<String>,
    pub module: Option<String>,
    pub agent: Option<String>,
    pub task: Option<String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_root(mut self, root: impl Into<String>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Substitute every supplied value into `text`.
    pub fn apply(&self, text: &str) -> String {
        let pairs = [
            (PROJECT_ROOT, &self.project_root),
            (MODULE, &self.module),
            (AGENT, &self.agent),
            (TASK, &self.task),
        ];

        let mut out = text.to_string();
        for (token, value) in pairs {
            if let Some(value) = value
                && out.contains(token)
            {
                out = out.replace(token, value);
            }
        }
        out
    }
}

/// Substitute the capability folder token.
pub fn bind_folder(text: &str, folder: &str) -> String {
    text.replace(CAPABILITY_FOLDER, folder)
}

/// Reserved tokens still present in `text`.
#[cfg(test)]
pub(crate) fn unresolved_tokens(text: &str) -> Vec<&'static str> {
    ALL.iter().copied().filter(|t| text.contains(t)).collect()
}
