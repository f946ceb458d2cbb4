//! Documents and modules of the capability source tree

use xiaoma_fs::NormalizedPath;

/// The four capability directories every module may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    Agent,
    Task,
    Tool,
    Workflow,
}

impl CapabilityKind {
    /// Directory name inside a module (`agents`, `tasks`, ...).
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Agent => "agents",
            Self::Task => "tasks",
            Self::Tool => "tools",
            Self::Workflow => "workflows",
        }
    }

    /// Extensions scanned for this kind. Workflows are found by manifest.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Agent => &["md"],
            Self::Task | Self::Tool => &["xml", "md"],
            Self::Workflow => &["yaml"],
        }
    }
}

/// A leaf file of the source (or installed) tree. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: NormalizedPath,
    /// Lowercase extension without the dot.
    pub extension: String,
    pub raw: String,
    pub standalone: bool,
}

impl Document {
    /// File name without its extension.
    pub fn stem(&self) -> &str {
        self.path.file_stem().unwrap_or_default()
    }

    pub fn file_name(&self) -> &str {
        self.path.file_name().unwrap_or_default()
    }
}

/// A named partition of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub root: NormalizedPath,
}

impl Module {
    pub fn new(name: impl Into<String>, root: NormalizedPath) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Directory of one capability kind inside this module.
    pub fn dir(&self, kind: CapabilityKind) -> NormalizedPath {
        self.root.join(kind.dir_name())
    }
}
