//! Managed blocks and injection-point markers.
//!
//! Managed blocks delimit generated content inside files the pipeline shares
//! with the user (a YAML modes registry). Markers are hash comments and may be
//! indented:
//!
//! ```text
//! # xiaoma:block:ID
//! content
//! # /xiaoma:block:ID
//! ```
//!
//! Injection points are single marker comments in an installed document,
//! replaced once by optional content:
//!
//! ```text
//! <!-- XIAOMA-INJECT-POINT: pm-agent-instructions -->
//! ```

use regex::Regex;
use std::sync::LazyLock;

static OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*# xiaoma:block:([a-zA-Z0-9_.-]+)[ \t]*$")
        .expect("Invalid open marker regex")
});

fn opening_marker(id: &str) -> String {
    format!("# xiaoma:block:{}", id)
}

fn closing_marker(id: &str) -> String {
    format!("# /xiaoma:block:{}", id)
}

/// A parsed block with its id, content and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: String,
    /// Content between the markers, without the surrounding newlines.
    pub content: String,
    /// Byte offset of the line holding the opening marker.
    pub start: usize,
    /// Byte offset just past the closing marker.
    pub end: usize,
}

/// Parse all blocks in order of appearance.
///
/// An opening marker without a matching closing marker is ignored.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut search_from = 0;

    while let Some(caps) = OPEN.captures_at(content, search_from) {
        let (Some(open), Some(id)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let id = id.as_str();
        let close_marker = closing_marker(id);

        let Some(close_rel) = content[open.end()..].find(&close_marker) else {
            search_from = open.end();
            continue;
        };
        let close_start = open.end() + close_rel;
        let end = close_start + close_marker.len();

        let raw = &content[open.end()..close_start];
        let raw = raw.strip_prefix('\n').unwrap_or(raw);
        let raw = raw.strip_suffix('\n').unwrap_or(raw);

        blocks.push(Block {
            id: id.to_string(),
            content: raw.to_string(),
            start: open.start(),
            end,
        });
        search_from = end;
    }

    blocks
}

fn format_block(id: &str, body: &str) -> String {
    format!("{}\n{}\n{}", opening_marker(id), body, closing_marker(id))
}

/// Insert or replace the block `id`.
///
/// New blocks are appended at the end of the content.
pub fn upsert_block(content: &str, id: &str, body: &str) -> String {
    let block = format_block(id, body);

    if let Some(existing) = parse_blocks(content).into_iter().find(|b| b.id == id) {
        let mut out = String::with_capacity(content.len() + block.len());
        out.push_str(&content[..existing.start]);
        out.push_str(&block);
        out.push_str(&content[existing.end..]);
        return out;
    }

    let trimmed = content.trim_end_matches('\n');
    if trimmed.is_empty() {
        format!("{}\n", block)
    } else {
        format!("{}\n{}\n", trimmed, block)
    }
}

/// Remove every block whose id satisfies `predicate`.
///
/// Returns the new content and the number of blocks removed.
pub fn remove_blocks_where(content: &str, predicate: impl Fn(&str) -> bool) -> (String, usize) {
    let mut out = content.to_string();
    let mut removed = 0;
    // Back to front keeps earlier spans valid
    for block in parse_blocks(content).iter().rev() {
        if predicate(&block.id) {
            out = splice_out(&out, block);
            removed += 1;
        }
    }
    (out, removed)
}

fn splice_out(content: &str, block: &Block) -> String {
    let after = &content[block.end..];
    let after = after.strip_prefix('\n').unwrap_or(after);
    format!("{}{}", &content[..block.start], after)
}

fn injection_marker(point: &str) -> String {
    format!("<!-- XIAOMA-INJECT-POINT: {} -->", point)
}

/// Replace the first marker for `point` with `replacement`.
///
/// Returns `None` when the marker is absent.
pub fn replace_injection_point(content: &str, point: &str, replacement: &str) -> Option<String> {
    let marker = injection_marker(point);
    if !content.contains(&marker) {
        return None;
    }
    Some(content.replacen(&marker, replacement, 1))
}
