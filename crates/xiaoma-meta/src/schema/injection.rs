//! Per-module, per-target injection descriptor (`injections.yaml`)
//!
//! ```yaml
//! subagents:
//!   source: subagents
//!   files:
//!     - market-researcher.md
//!     - requirements-analyst.md
//! injections:
//!   - file: .xiaoma/bmm/agents/pm.md
//!     point: pm-agent-instructions
//!     requires: any
//!     content: |
//!       Use the market-researcher subagent for research tasks.
//! ```

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionConfig {
    #[serde(default)]
    pub subagents: Option<SubagentSet>,
    #[serde(default)]
    pub injections: Vec<InjectionPoint>,
}

impl InjectionConfig {
    /// Subagent file names this descriptor knows about.
    pub fn subagent_files(&self) -> &[String] {
        self.subagents
            .as_ref()
            .map(|s| s.files.as_slice())
            .unwrap_or_default()
    }
}

/// Named sub-capability files shipped with a module for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubagentSet {
    /// Directory (relative to the descriptor) holding the files.
    #[serde(default = "default_subagent_source")]
    pub source: String,
    #[serde(default)]
    pub files: Vec<String>,
}

fn default_subagent_source() -> String {
    "subagents".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionPoint {
    /// Destination file, relative to the project root. May contain the
    /// `{xiaoma_folder}` token.
    pub file: String,
    /// Marker name inside the destination file.
    pub point: String,
    pub content: String,
    /// `[]` always applies, `["any"]` needs any subagent selected, otherwise
    /// at least one of the named files must be selected. A bare string is
    /// accepted as a one-element list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub requires: Vec<String>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}
