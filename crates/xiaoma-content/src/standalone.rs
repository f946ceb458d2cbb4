//! Standalone marker probes.
//!
//! Markup and Markdown documents declare independence differently and the
//! two probes compare differently: markup matches the literal attribute text
//! `standalone="true"`, Markdown requires the YAML boolean `true`. A Markdown
//! value of `"true"` (a string) is therefore *not* standalone. Both behaviors
//! are kept as-is.

use crate::frontmatter;
use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

/// `standalone="true"` inside the opening tag of a `task` or `tool` element.
static MARKUP_STANDALONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:task|tool)\b[^>]*\sstandalone="true""#).expect("Invalid standalone regex")
});

/// Probe a markup (`.xml`) document.
pub fn probe_markup(text: &str) -> bool {
    MARKUP_STANDALONE.is_match(text)
}

/// Probe a Markdown document's front-matter.
///
/// Malformed front-matter degrades to `false`.
pub fn probe_markdown(text: &str) -> bool {
    match frontmatter::parse(text) {
        Ok(Some(map)) => map.get("standalone") == Some(&Value::Bool(true)),
        Ok(None) => false,
        Err(e) => {
            tracing::debug!("Ignoring malformed front-matter while probing standalone: {}", e);
            false
        }
    }
}

/// Probe by file extension; unknown extensions are never standalone.
pub fn probe(text: &str, extension: &str) -> bool {
    match extension.to_ascii_lowercase().as_str() {
        "xml" => probe_markup(text),
        "md" | "markdown" => probe_markdown(text),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"<task id="review" standalone="true">"#, true)]
    #[case(r#"<tool name="shard" standalone="true" />"#, true)]
    #[case(r#"<task id="review" standalone="false">"#, false)]
    #[case(r#"<task id="review">"#, false)]
    #[case(r#"<workflow standalone="true">"#, false)]
    #[case(r#"<task id="x"><step standalone="true"/></task>"#, false)]
    #[case(r#"<task standalone='true'>"#, false)]
    fn test_probe_markup(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(probe_markup(text), expected);
    }

    #[rstest]
    #[case("---\nstandalone: true\n---\nbody", true)]
    #[case("---\nstandalone: \"true\"\n---\nbody", false)]
    #[case("---\nstandalone: false\n---\nbody", false)]
    #[case("---\nname: x\n---\nbody", false)]
    #[case("no front matter, standalone: true", false)]
    #[case("---\nstandalone: [broken\n---\n", false)]
    fn test_probe_markdown(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(probe_markdown(text), expected);
    }

    #[test]
    fn test_probe_dispatches_on_extension() {
        assert!(probe(r#"<task standalone="true">"#, "xml"));
        assert!(probe("---\nstandalone: true\n---\n", "MD"));
        assert!(!probe("---\nstandalone: true\n---\n", "txt"));
    }
}
