//! Markdown output with a front-matter envelope.

use crate::adapter::Envelope;
use crate::artifact::Artifact;
use crate::error::Result;
use serde_yaml::Value;
use xiaoma_content::frontmatter;

pub fn render(artifact: &Artifact, envelope: Envelope) -> Result<String> {
    let description = Value::String(artifact.description.clone());
    let updates = match envelope {
        Envelope::None => return Ok(artifact.content.clone()),
        Envelope::Description => frontmatter::mapping([("description", description)]),
        Envelope::CursorRule => frontmatter::mapping([
            ("description", description),
            ("globs", Value::String(String::new())),
            ("alwaysApply", Value::Bool(false)),
        ]),
        Envelope::ChatMode { tools } => frontmatter::mapping([
            ("description", description),
            (
                "tools",
                Value::Sequence(tools.iter().map(|t| Value::String(t.to_string())).collect()),
            ),
        ]),
    };
    Ok(frontmatter::merge(&artifact.content, &updates)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactType;
    use pretty_assertions::assert_eq;
    use xiaoma_fs::NormalizedPath;

    fn artifact(content: &str) -> Artifact {
        Artifact {
            artifact_type: ArtifactType::Agent,
            module: "core".into(),
            name: "pm".into(),
            relative_path: "core/agents/pm".into(),
            content: content.into(),
            source_path: NormalizedPath::new("/src/pm.md"),
            title: "PM".into(),
            description: "Plans products".into(),
            when_to_use: None,
        }
    }

    #[test]
    fn test_no_envelope_is_verbatim() {
        assert_eq!(render(&artifact("# PM\n"), Envelope::None).unwrap(), "# PM\n");
    }

    #[test]
    fn test_description_envelope() {
        assert_eq!(
            render(&artifact("# PM\n"), Envelope::Description).unwrap(),
            "---\ndescription: Plans products\n---\n# PM\n"
        );
    }

    #[test]
    fn test_cursor_rule_envelope() {
        let out = render(&artifact("# PM\n"), Envelope::CursorRule).unwrap();
        assert_eq!(
            out,
            "---\ndescription: Plans products\nglobs: ''\nalwaysApply: false\n---\n# PM\n"
        );
    }

    #[test]
    fn test_chat_mode_merges_existing_front_matter() {
        let out = render(
            &artifact("---\nname: pm\n---\nBody\n"),
            Envelope::ChatMode {
                tools: &["codebase", "search"],
            },
        )
        .unwrap();
        assert_eq!(
            out,
            "---\nname: pm\ndescription: Plans products\ntools:\n- codebase\n- search\n---\nBody\n"
        );
    }
}
