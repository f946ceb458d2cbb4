//! Declarative description of one destination layout.

/// How artifact files are named below the destination root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStrategy {
    /// `xiaoma-{module}-{type}-{name}.{ext}` directly in the root
    FlatWithPrefix,
    /// `{module}/{type}-{name}.{ext}`
    NestedByModule,
    /// `{module}/{type}/{name}.{ext}`
    NestedByModuleAndType,
}

/// Front-matter wrapped around Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    None,
    /// `description`
    Description,
    /// `description`, `globs`, `alwaysApply`
    CursorRule,
    /// `description` plus a `tools` allow-list
    ChatMode { tools: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Markdown {
        extension: &'static str,
        envelope: Envelope,
    },
    /// A table with `description` and a `prompt` string
    Toml,
}

impl FileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown { extension, .. } => extension,
            Self::Toml => "toml",
        }
    }
}

/// Where an adapter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// One file per artifact below `root`
    Directory {
        root: &'static str,
        naming: NamingStrategy,
        format: FileFormat,
    },
    /// A shared YAML modes file; agents become `xiaoma-` slugged blocks
    ModesRegistry { file: &'static str },
}

/// What agent artifacts carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentContent {
    /// A stub that loads the installed agent document
    Launcher,
    /// The fully transformed agent document
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterProfile {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub preferred: bool,
    /// Path whose presence means the host tool is set up in the project.
    pub anchor: &'static str,
    pub destination: Destination,
    pub agents: AgentContent,
    /// Write per-module workflow launchers.
    pub keep_launchers: bool,
    /// Substitute the concrete project root instead of leaving the token.
    pub resolve_project_root: bool,
    /// Only standalone tasks, tools and workflows.
    pub standalone_only: bool,
    /// Directory receiving selected subagent files.
    pub subagent_dir: Option<&'static str>,
}

impl AdapterProfile {
    pub fn new(
        slug: &'static str,
        display_name: &'static str,
        anchor: &'static str,
        destination: Destination,
    ) -> Self {
        Self {
            slug,
            display_name,
            preferred: false,
            anchor,
            destination,
            agents: AgentContent::Launcher,
            keep_launchers: false,
            resolve_project_root: false,
            standalone_only: false,
            subagent_dir: None,
        }
    }

    pub fn preferred(mut self) -> Self {
        self.preferred = true;
        self
    }

    pub fn inline_agents(mut self) -> Self {
        self.agents = AgentContent::Inline;
        self
    }

    pub fn keep_launchers(mut self) -> Self {
        self.keep_launchers = true;
        self
    }

    pub fn resolve_project_root(mut self) -> Self {
        self.resolve_project_root = true;
        self
    }

    pub fn standalone_only(mut self) -> Self {
        self.standalone_only = true;
        self
    }

    pub fn subagents_in(mut self, dir: &'static str) -> Self {
        self.subagent_dir = Some(dir);
        self
    }
}
