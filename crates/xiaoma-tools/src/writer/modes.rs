//! YAML modes registry (`.roomodes`, `.kilocodemodes`).
//!
//! ```yaml
//! customModes:
//! # xiaoma:block:xiaoma-core-pm
//!   - slug: xiaoma-core-pm
//!     name: "📋 Product Manager"
//!     ...
//! # /xiaoma:block:xiaoma-core-pm
//! ```

use crate::error::Result;
use xiaoma_content::block::{parse_blocks, remove_blocks_where, upsert_block};
use xiaoma_fs::constants::GENERATED_PREFIX;

pub const MODES_HEADER: &str = "customModes:";

/// Permission groups granted to generated modes.
pub const DEFAULT_GROUPS: [&str; 5] = ["read", "edit", "browser", "command", "mcp"];

/// Fields of one generated mode.
#[derive(Debug, Clone)]
pub struct ModeEntry<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub role_definition: &'a str,
    pub when_to_use: &'a str,
    pub custom_instructions: &'a str,
}

/// Render the YAML sequence item for `mode`. Strings are JSON-quoted, which
/// YAML reads as double-quoted scalars.
pub fn render_mode(mode: &ModeEntry<'_>) -> Result<String> {
    let mut out = format!("  - slug: {}\n", mode.slug);
    out.push_str(&format!("    name: {}\n", serde_json::to_string(mode.name)?));
    out.push_str(&format!(
        "    roleDefinition: {}\n",
        serde_json::to_string(mode.role_definition)?
    ));
    out.push_str(&format!(
        "    whenToUse: {}\n",
        serde_json::to_string(mode.when_to_use)?
    ));
    out.push_str(&format!(
        "    customInstructions: {}\n",
        serde_json::to_string(mode.custom_instructions)?
    ));
    out.push_str("    groups:");
    for group in DEFAULT_GROUPS {
        out.push_str(&format!("\n      - {}", group));
    }
    Ok(out)
}

/// Insert or replace the block for `slug`, adding the header when missing.
/// An inline empty sequence (`customModes: []`) is opened into a block
/// sequence first.
pub fn upsert_mode(existing: &str, slug: &str, body: &str) -> String {
    let existing = open_empty_sequence(existing);
    let has_header = existing.lines().any(|l| l.trim_end() == MODES_HEADER);
    let base = if has_header {
        existing
    } else if existing.trim().is_empty() {
        format!("{}\n", MODES_HEADER)
    } else {
        format!("{}\n{}", MODES_HEADER, existing)
    };
    upsert_block(&base, slug, body)
}

fn is_inline_empty(line: &str) -> bool {
    line.trim_end()
        .strip_prefix(MODES_HEADER)
        .is_some_and(|rest| rest.trim() == "[]")
}

fn open_empty_sequence(content: &str) -> String {
    if !content.lines().any(is_inline_empty) {
        return content.to_string();
    }
    content
        .split_inclusive('\n')
        .map(|line| {
            if is_inline_empty(line) {
                let newline = if line.ends_with('\n') { "\n" } else { "" };
                format!("{}{}", MODES_HEADER, newline)
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Remove every generated mode block; returns the new content and the
/// number of blocks removed.
pub fn remove_generated_modes(content: &str) -> (String, usize) {
    remove_blocks_where(content, |id| id.starts_with(GENERATED_PREFIX))
}

/// Whether the registry holds any generated mode.
pub fn has_generated_modes(content: &str) -> bool {
    parse_blocks(content)
        .iter()
        .any(|b| b.id.starts_with(GENERATED_PREFIX))
}

/// Whether nothing but the header and comments remains.
pub fn is_empty_registry(content: &str) -> bool {
    content.lines().map(str::trim).all(|l| {
        l.is_empty() || l == MODES_HEADER || is_inline_empty(l) || l.starts_with('#')
    })
}
