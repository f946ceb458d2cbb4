//! Core types for the adapter registry

use crate::adapter::AdapterProfile;
use serde::{Deserialize, Serialize};

/// Adapter category for filtering and listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdapterCategory {
    /// Editors (Cursor, Windsurf, Trae, Antigravity)
    Ide,
    /// Terminal agents (Claude Code, Gemini CLI, Codex, ...)
    CliAgent,
    /// Autonomous agents driven by modes (Cline, Roo, Kilo)
    Autonomous,
    /// Chat assistants inside an editor (GitHub Copilot)
    Copilot,
}

impl AdapterCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ide => "IDE",
            Self::CliAgent => "CLI agent",
            Self::Autonomous => "Autonomous",
            Self::Copilot => "Copilot",
        }
    }
}

/// A registered adapter profile with listing metadata.
#[derive(Debug, Clone)]
pub struct AdapterRegistration {
    pub category: AdapterCategory,
    /// Priority for ordering (lower = higher priority)
    pub priority: u8,
    pub profile: AdapterProfile,
}

impl AdapterRegistration {
    /// Create a new registration with default priority.
    pub fn new(category: AdapterCategory, profile: AdapterProfile) -> Self {
        Self {
            category,
            priority: 50,
            profile,
        }
    }

    /// Set the priority (builder pattern).
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn slug(&self) -> &'static str {
        self.profile.slug
    }

    pub fn display_name(&self) -> &'static str {
        self.profile.display_name
    }

    pub fn preferred(&self) -> bool {
        self.profile.preferred
    }
}
