//! Typed metadata extracted from a capability document.
//!
//! Resolution order for each field: front-matter key, then the attribute bag
//! of the `<agent>` root element, then fallbacks derived from other fields.

use crate::{frontmatter, standalone};
use regex::Regex;
use serde_yaml::Mapping;
use std::collections::HashMap;
use std::sync::LazyLock;

static AGENT_ATTRIBUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<agent\s([^>]*)>").expect("Invalid agent attribute regex"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][\w-]*)\s*=\s*"([^"]*)""#).expect("Invalid attribute regex")
});

/// Metadata record with every fallback applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub name: String,
    pub title: String,
    pub icon: Option<String>,
    pub description: String,
    pub when_to_use: Option<String>,
    pub standalone: bool,
}

impl DocumentMetadata {
    /// Extract metadata from `text`, using `fallback_name` (usually the file
    /// stem) when the document declares no name.
    pub fn extract(text: &str, fallback_name: &str) -> Self {
        let front = match frontmatter::parse(text) {
            Ok(front) => front.unwrap_or_default(),
            Err(e) => {
                tracing::debug!("Falling back to attributes, front-matter unreadable: {}", e);
                Mapping::new()
            }
        };
        let attributes = agent_attributes(text);

        let lookup = |key: &str| -> Option<String> {
            frontmatter::get_str(&front, key)
                .or_else(|| attributes.get(key).cloned())
                .filter(|v| !v.trim().is_empty())
        };

        let name = lookup("name").unwrap_or_else(|| fallback_name.to_string());
        let title = lookup("title").unwrap_or_else(|| name.clone());
        let description = lookup("description").unwrap_or_else(|| title.clone());

        Self {
            icon: lookup("icon"),
            when_to_use: lookup("whenToUse").or_else(|| lookup("when_to_use")),
            standalone: standalone::probe_markdown(text),
            name,
            title,
            description,
        }
    }

    /// Title prefixed with the icon, when there is one.
    pub fn display_title(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.title),
            None => self.title.clone(),
        }
    }
}

/// Attributes of the first `<agent ...>` element, keyed by attribute name.
pub fn agent_attributes(text: &str) -> HashMap<String, String> {
    let Some(caps) = AGENT_ATTRIBUTES.captures(text) else {
        return HashMap::new();
    };
    let bag = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    ATTRIBUTE
        .captures_iter(bag)
        .filter_map(|c| Some((c.get(1)?.as_str().to_string(), c.get(2)?.as_str().to_string())))
        .collect()
}
