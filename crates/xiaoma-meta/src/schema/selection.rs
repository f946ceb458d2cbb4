//! The user's subagent selection

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which subagent files the user chose to install.
///
/// Serialized as `mode: all|selected|none` with a `files` list for `selected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "files", rename_all = "lowercase")]
pub enum SubagentSelection {
    All,
    Selected(Vec<String>),
    None,
}

impl SubagentSelection {
    /// Whether `file` (a file name such as `a.md`, or its stem) is selected.
    pub fn includes(&self, file: &str) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Selected(files) => files.iter().any(|f| same_file(f, file)),
        }
    }

    /// Whether at least one subagent is selected.
    pub fn any(&self) -> bool {
        match self {
            Self::All => true,
            Self::None => false,
            Self::Selected(files) => !files.is_empty(),
        }
    }

    /// Files from `known` that are selected, in `known` order.
    pub fn filter<'a>(&self, known: &'a [String]) -> Vec<&'a String> {
        known.iter().filter(|f| self.includes(f)).collect()
    }
}

fn same_file(a: &str, b: &str) -> bool {
    a == b || stem(a) == stem(b)
}

fn stem(name: &str) -> &str {
    name.rsplit_once('.').map(|(s, _)| s).unwrap_or(name)
}

impl FromStr for SubagentSelection {
    type Err = Error;

    /// Parse `all`, `none`, or a comma-separated list of files.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "all" => return Ok(Self::All),
            "none" => return Ok(Self::None),
            _ => {}
        }
        let files: Vec<String> = trimmed
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect();
        if files.is_empty() {
            return Err(Error::InvalidSelection {
                value: s.to_string(),
            });
        }
        Ok(Self::Selected(files))
    }
}
