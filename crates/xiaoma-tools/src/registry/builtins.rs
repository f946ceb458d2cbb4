//! Built-in adapter profiles, the single table every lookup derives from.

use super::{AdapterCategory, AdapterRegistration};
use crate::adapter::{AdapterProfile, Destination, Envelope, FileFormat, NamingStrategy};

/// Number of built-in adapters.
pub const BUILTIN_COUNT: usize = 16;

/// Tools granted to generated GitHub Copilot chat modes.
const COPILOT_TOOLS: &[&str] = &[
    "changes",
    "codebase",
    "editFiles",
    "fetch",
    "findTestFiles",
    "problems",
    "runCommands",
    "runTasks",
    "runTests",
    "search",
    "searchResults",
    "terminalLastCommand",
    "terminalSelection",
    "testFailure",
    "usages",
];

const MARKDOWN: FileFormat = FileFormat::Markdown {
    extension: "md",
    envelope: Envelope::None,
};

const MARKDOWN_DESCRIBED: FileFormat = FileFormat::Markdown {
    extension: "md",
    envelope: Envelope::Description,
};

fn directory(root: &'static str, naming: NamingStrategy, format: FileFormat) -> Destination {
    Destination::Directory {
        root,
        naming,
        format,
    }
}

/// Returns all built-in adapter registrations.
pub fn builtin_registrations() -> Vec<AdapterRegistration> {
    use AdapterCategory::*;
    use NamingStrategy::*;

    vec![
        // CLI agents
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "claude-code",
                "Claude Code",
                ".claude",
                directory(".claude/commands/xiaoma", NestedByModuleAndType, MARKDOWN),
            )
            .preferred()
            .keep_launchers()
            .subagents_in(".claude/agents"),
        )
        .with_priority(10),
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "gemini",
                "Gemini CLI",
                ".gemini",
                directory(".gemini/commands", FlatWithPrefix, FileFormat::Toml),
            )
            .standalone_only(),
        )
        .with_priority(30),
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "qwen",
                "Qwen Code",
                ".qwen",
                directory(".qwen/commands/xiaoma", NestedByModule, FileFormat::Toml),
            ),
        )
        .with_priority(40),
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "codex",
                "Codex",
                ".codex",
                directory(".codex/prompts", FlatWithPrefix, MARKDOWN),
            )
            .resolve_project_root()
            .standalone_only(),
        )
        .with_priority(30),
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "opencode",
                "OpenCode",
                ".opencode",
                directory(".opencode/command", FlatWithPrefix, MARKDOWN_DESCRIBED),
            )
            .standalone_only(),
        ),
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "auggie",
                "Auggie CLI",
                ".augment",
                directory(
                    ".augment/commands/xiaoma",
                    NestedByModuleAndType,
                    MARKDOWN_DESCRIBED,
                ),
            )
            .keep_launchers(),
        ),
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "crush",
                "Crush",
                ".crush",
                directory(".crush/commands/xiaoma", NestedByModuleAndType, MARKDOWN),
            )
            .keep_launchers(),
        ),
        AdapterRegistration::new(
            CliAgent,
            AdapterProfile::new(
                "iflow",
                "iFlow CLI",
                ".iflow",
                directory(".iflow/commands/xiaoma", NestedByModule, MARKDOWN),
            ),
        ),
        // IDEs
        AdapterRegistration::new(
            Ide,
            AdapterProfile::new(
                "cursor",
                "Cursor",
                ".cursor",
                directory(
                    ".cursor/rules/xiaoma",
                    NestedByModuleAndType,
                    FileFormat::Markdown {
                        extension: "mdc",
                        envelope: Envelope::CursorRule,
                    },
                ),
            )
            .preferred()
            .keep_launchers(),
        )
        .with_priority(20),
        AdapterRegistration::new(
            Ide,
            AdapterProfile::new(
                "windsurf",
                "Windsurf",
                ".windsurf",
                directory(".windsurf/workflows", FlatWithPrefix, MARKDOWN_DESCRIBED),
            )
            .standalone_only(),
        )
        .with_priority(30),
        AdapterRegistration::new(
            Ide,
            AdapterProfile::new(
                "trae",
                "Trae",
                ".trae",
                directory(".trae/rules", FlatWithPrefix, MARKDOWN),
            )
            .inline_agents()
            .standalone_only(),
        ),
        AdapterRegistration::new(
            Ide,
            AdapterProfile::new(
                "antigravity",
                "Antigravity",
                ".agent",
                directory(".agent/workflows", FlatWithPrefix, MARKDOWN_DESCRIBED),
            )
            .standalone_only(),
        ),
        // Autonomous agents
        AdapterRegistration::new(
            Autonomous,
            AdapterProfile::new(
                "cline",
                "Cline",
                ".clinerules",
                directory(".clinerules/workflows", FlatWithPrefix, MARKDOWN),
            )
            .standalone_only(),
        )
        .with_priority(40),
        AdapterRegistration::new(
            Autonomous,
            AdapterProfile::new(
                "roo",
                "Roo Code",
                ".roomodes",
                Destination::ModesRegistry { file: ".roomodes" },
            ),
        )
        .with_priority(40),
        AdapterRegistration::new(
            Autonomous,
            AdapterProfile::new(
                "kilo",
                "Kilo Code",
                ".kilocodemodes",
                Destination::ModesRegistry {
                    file: ".kilocodemodes",
                },
            ),
        ),
        // Copilots
        AdapterRegistration::new(
            Copilot,
            AdapterProfile::new(
                "github-copilot",
                "GitHub Copilot",
                ".github",
                directory(
                    ".github/chatmodes",
                    FlatWithPrefix,
                    FileFormat::Markdown {
                        extension: "chatmode.md",
                        envelope: Envelope::ChatMode {
                            tools: COPILOT_TOOLS,
                        },
                    },
                ),
            )
            .inline_agents()
            .standalone_only(),
        )
        .with_priority(30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use xiaoma_fs::ReservedName;

    #[test]
    fn test_builtin_count() {
        assert_eq!(builtin_registrations().len(), BUILTIN_COUNT);
    }

    #[test]
    fn test_slugs_unique() {
        let slugs: HashSet<&str> = builtin_registrations().iter().map(|r| r.slug()).collect();
        assert_eq!(slugs.len(), BUILTIN_COUNT);
    }

    #[test]
    fn test_nested_roots_are_owned() {
        for reg in builtin_registrations() {
            if let Destination::Directory { root, naming, .. } = reg.profile.destination {
                if naming.is_nested() {
                    assert!(
                        root.ends_with(&format!("/{}", ReservedName::GeneratedDir.as_str())),
                        "{} nests into {} which the pipeline does not own",
                        reg.slug(),
                        root
                    );
                }
                assert!(
                    root.starts_with(reg.profile.anchor),
                    "{} writes outside its anchor",
                    reg.slug()
                );
            }
        }
    }

    #[test]
    fn test_destinations_do_not_overlap() {
        let roots: Vec<&str> = builtin_registrations()
            .iter()
            .map(|r| match r.profile.destination {
                Destination::Directory { root, .. } => root,
                Destination::ModesRegistry { file } => file,
            })
            .collect();
        let unique: HashSet<&&str> = roots.iter().collect();
        assert_eq!(unique.len(), roots.len());
    }
}
