//! Front-matter parsing, merging and rendering.
//!
//! A front-matter block is a leading pair of literal `---` lines enclosing a
//! YAML mapping.

use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};

/// Split `text` into its front-matter YAML and the body after it.
///
/// Returns `None` when the text does not start with a complete block.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let rest = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// Parse the front-matter mapping of `text`.
///
/// `Ok(None)` means there is no front-matter; an empty block parses to an
/// empty mapping.
pub fn parse(text: &str) -> Result<Option<Mapping>> {
    let Some((yaml, _)) = split(text) else {
        return Ok(None);
    };
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(map) => Ok(Some(map)),
        Value::Null => Ok(Some(Mapping::new())),
        _ => Err(Error::FrontMatterShape),
    }
}

/// Body of `text` with any front-matter removed.
pub fn body(text: &str) -> &str {
    split(text).map(|(_, body)| body).unwrap_or(text)
}

/// String value of a front-matter key, if it is a scalar.
pub fn get_str(map: &Mapping, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Render a mapping and body back into a document.
///
/// An empty mapping renders no front-matter at all.
pub fn render(map: &Mapping, body: &str) -> Result<String> {
    if map.is_empty() {
        return Ok(body.to_string());
    }
    let yaml = serde_yaml::to_string(map)?;
    let mut out = String::with_capacity(yaml.len() + body.len() + 8);
    out.push_str("---\n");
    out.push_str(&yaml);
    if !yaml.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("---\n");
    out.push_str(body);
    Ok(out)
}

/// Merge `updates` into the front-matter of `text` and re-render it.
///
/// Keys in `updates` replace existing ones; other keys keep their order.
/// A document without front-matter gains one. Unreadable front-matter is
/// dropped and replaced by `updates` alone.
pub fn merge(text: &str, updates: &Mapping) -> Result<String> {
    let (mut map, body) = match parse(text) {
        Ok(Some(map)) => (map, body(text)),
        Ok(None) => (Mapping::new(), text),
        Err(e) => {
            tracing::warn!("Replacing unreadable front-matter: {}", e);
            (Mapping::new(), body(text))
        }
    };
    for (key, value) in updates {
        map.insert(key.clone(), value.clone());
    }
    render(&map, body)
}

/// Build a mapping from string pairs, preserving order.
pub fn mapping<'a>(pairs: impl IntoIterator<Item = (&'a str, Value)>) -> Mapping {
    let mut map = Mapping::new();
    for (key, value) in pairs {
        map.insert(Value::String(key.to_string()), value);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_basic() {
        let (yaml, body) = split("---\nname: pm\n---\n# Body\n").unwrap();
        assert_eq!(yaml, "name: pm\n");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_requires_leading_delimiter() {
        assert!(split("# Title\n---\nname: x\n---\n").is_none());
        assert!(split("---\nname: unterminated\n").is_none());
    }

    #[test]
    fn test_parse_empty_block() {
        let map = parse("---\n---\nbody").unwrap().unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_rejects_sequence() {
        assert!(matches!(parse("---\n- a\n- b\n---\n"), Err(Error::FrontMatterShape)));
    }

    #[test]
    fn test_parse_malformed_is_error() {
        assert!(parse("---\nname: [oops\n---\n").is_err());
    }

    #[test]
    fn test_merge_replaces_and_preserves() {
        let text = "---\nname: pm\nicon: x\n---\nBody\n";
        let updates = mapping([("name", Value::String("xiaoma-pm".into()))]);
        let out = merge(text, &updates).unwrap();
        assert_eq!(out, "---\nname: xiaoma-pm\nicon: x\n---\nBody\n");
    }

    #[test]
    fn test_merge_adds_front_matter() {
        let updates = mapping([("description", Value::String("Plan work".into()))]);
        let out = merge("Body only\n", &updates).unwrap();
        assert_eq!(out, "---\ndescription: Plan work\n---\nBody only\n");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let updates = mapping([
            ("description", Value::String("Plan".into())),
            ("alwaysApply", Value::Bool(false)),
        ]);
        let once = merge("# Doc\n", &updates).unwrap();
        let twice = merge(&once, &updates).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_replaces_unreadable_front_matter() {
        let updates = mapping([("description", Value::String("Plans".into()))]);
        let out = merge("---\nname: [broken\n---\n<agent id=\"pm\">\n", &updates).unwrap();
        assert_eq!(out, "---\ndescription: Plans\n---\n<agent id=\"pm\">\n");

        let out = merge("---\n- a\n---\nBody\n", &updates).unwrap();
        assert_eq!(out, "---\ndescription: Plans\n---\nBody\n");
    }

    #[test]
    fn test_get_str() {
        let map = parse("---\nname: pm\nstandalone: true\ncount: 3\n---\n")
            .unwrap()
            .unwrap();
        assert_eq!(get_str(&map, "name").as_deref(), Some("pm"));
        assert_eq!(get_str(&map, "standalone").as_deref(), Some("true"));
        assert_eq!(get_str(&map, "count").as_deref(), Some("3"));
        assert!(get_str(&map, "missing").is_none());
    }
}
