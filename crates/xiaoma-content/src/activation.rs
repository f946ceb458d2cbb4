//! Activation block injection for agent documents.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Opening tag of an agent document's root element.
static AGENT_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<agent[\s>][^>]*>|<agent>").expect("Invalid agent tag regex"));

/// An activation element already present in the document.
static ACTIVATION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<activation[\s>]").expect("Invalid activation regex"));

/// Activation instructions inserted into every agent document.
///
/// Contains step-2 placeholders on purpose: injection runs before
/// substitution, so the block is resolved together with the document.
pub const ACTIVATION_BLOCK: &str = r#"<activation critical="MANDATORY">
  <step n="1">Load persona from this current agent file (already in context)</step>
  <step n="2">Load and read {project-root}/{xiaoma_folder}/{module}/config.yaml before any output and keep its values as session variables</step>
  <step n="3">Show greeting using the session variables, then display the numbered list of all menu items</step>
  <step n="4">STOP and WAIT for user input; accept a number or a trigger text</step>
  <step n="5">On user input: number → execute menu item[n]; text → fuzzy match a trigger; multiple matches → ask the user to clarify</step>
  <rules>
    - Stay in character until exit is selected
    - Load files only when executing a chosen workflow or command
  </rules>
</activation>"#;

/// Whether `text` is an agent document (has an `<agent>` root element).
pub fn is_agent_document(text: &str) -> bool {
    AGENT_OPEN_TAG.is_match(text)
}

/// Insert [`ACTIVATION_BLOCK`] right after the opening `<agent>` tag.
///
/// Documents that are not agents, or that already carry an activation
/// element, are returned unchanged.
pub fn inject_activation(text: &str) -> Cow<'_, str> {
    let Some(open) = AGENT_OPEN_TAG.find(text) else {
        return Cow::Borrowed(text);
    };
    if ACTIVATION_TAG.is_match(text) {
        return Cow::Borrowed(text);
    }

    let at = open.end();
    let mut out = String::with_capacity(text.len() + ACTIVATION_BLOCK.len() + 2);
    out.push_str(&text[..at]);
    out.push('\n');
    out.push_str(ACTIVATION_BLOCK);
    if !text[at..].starts_with('\n') {
        out.push('\n');
    }
    out.push_str(&text[at..]);
    Cow::Owned(out)
}
