//! Scenario Tests
//!
//! End-to-end behaviors a project relies on: what one module yields, how
//! duplicates resolve, standalone filtering, root resolution and module
//! injections with a partial subagent selection.

use pretty_assertions::assert_eq;
use xiaoma_fs::{CapabilityFolder, NormalizedPath};
use xiaoma_meta::{StandardPaths, SubagentSelection};
use xiaoma_test_utils::{SourceTree, docs};
use xiaoma_tools::{
    AdapterDispatcher, AdapterRegistry, ArtifactSet, ArtifactType, FixedSelection,
    InjectionSession, InstallContext, InstallResult, ProfileAdapter,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn paths(tree: &SourceTree) -> StandardPaths {
    StandardPaths::new(
        tree.source_root(),
        tree.project_root(),
        CapabilityFolder::default(),
    )
}

fn collect(tree: &SourceTree, target: &str) -> ArtifactSet {
    let profile = AdapterRegistry::with_builtins()
        .get(target)
        .unwrap()
        .profile
        .clone();
    let paths = paths(tree);
    let ctx = InstallContext::new(&paths, vec!["core".to_string()]);
    ProfileAdapter::new(profile).collect_artifacts(&ctx)
}

fn install(tree: &SourceTree, target: &str, selection: SubagentSelection) -> InstallResult {
    let paths = paths(tree);
    let ctx = InstallContext::new(&paths, vec!["core".to_string()]);
    AdapterDispatcher::new()
        .install_all(
            &ctx,
            &[target.to_string()],
            &mut InjectionSession::new(),
            &mut FixedSelection(selection),
        )
        .unwrap()
        .remove(0)
}

fn plan_module() -> SourceTree {
    let tree = SourceTree::new();
    tree.agent("core", "pm.md", &docs::agent("core/agents/pm.md", "John", "Product Manager"))
        .workflow("core", "plan", &docs::workflow_manifest("Plan", "Plan the work", true));
    tree
}

// =============================================================================
// One module, one agent, one workflow
// =============================================================================

#[test]
fn core_module_yields_agent_command_and_launcher() {
    let tree = plan_module();
    let set = collect(&tree, "claude-code");

    let agents: Vec<_> = set.of_type(ArtifactType::Agent).collect();
    assert_eq!(agents.len(), 1);
    assert_eq!((agents[0].module.as_str(), agents[0].name.as_str()), ("core", "pm"));

    let commands: Vec<_> = set.of_type(ArtifactType::WorkflowCommand).collect();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].relative_path.ends_with("plan"));

    assert_eq!(set.count(ArtifactType::WorkflowLauncher), 1);
    assert!(set.collisions().is_empty());
}

#[test]
fn launcher_filtered_for_targets_without_launchers() {
    let tree = plan_module();
    let set = collect(&tree, "gemini");

    assert_eq!(set.count(ArtifactType::Agent), 1);
    assert_eq!(set.count(ArtifactType::WorkflowCommand), 1);
    assert_eq!(set.count(ArtifactType::WorkflowLauncher), 0);
}

// =============================================================================
// Duplicates
// =============================================================================

#[test]
fn duplicate_agent_is_recorded_and_last_wins() {
    let tree = plan_module();
    tree.agent(
        "core",
        "archive/pm.md",
        &docs::agent("core/agents/archive/pm.md", "Old John", "Old PM"),
    );

    let set = collect(&tree, "claude-code");
    assert_eq!(set.count(ArtifactType::Agent), 1);
    assert_eq!(set.collisions().len(), 1);

    let result = install(&tree, "claude-code", SubagentSelection::None);
    assert_eq!(result.collisions, 1);
    assert_eq!(result.count(ArtifactType::Agent), 1);

    let launcher = tree.read_project(".claude/commands/xiaoma/core/agents/pm.md");
    assert!(launcher.contains("Product Manager"));
    assert!(!launcher.contains("Old PM"));
    assert!(launcher.contains("{project-root}/.xiaoma/core/agents/pm.md"));
    assert!(!launcher.contains("archive"));
}

// =============================================================================
// Standalone markers
// =============================================================================

#[test]
fn quoted_markdown_flag_is_not_standalone_but_xml_attribute_is() {
    let tree = plan_module();
    tree.tool(
        "core",
        "quoted.md",
        "---\nname: quoted\ndescription: Quoted flag\nstandalone: \"true\"\n---\n\n# quoted\n",
    )
    .tool("core", "shard.md", &docs::markdown_tool("shard", "Split documents", true))
    .task("core", "review.xml", &docs::xml_task("review", true));

    install(&tree, "gemini", SubagentSelection::None);

    assert_eq!(
        tree.project_files(".gemini/commands"),
        vec![
            "xiaoma-core-agents-pm.toml",
            "xiaoma-core-tasks-review.toml",
            "xiaoma-core-tools-shard.toml",
            "xiaoma-core-workflows-plan.toml",
        ]
    );
}

#[test]
fn targets_without_filter_keep_every_tool() {
    let tree = plan_module();
    tree.tool(
        "core",
        "quoted.md",
        "---\nname: quoted\ndescription: Quoted flag\nstandalone: \"true\"\n---\n\n# quoted\n",
    );

    install(&tree, "claude-code", SubagentSelection::None);
    tree.assert_project_exists(".claude/commands/xiaoma/core/tools/quoted.md");
}

// =============================================================================
// Project root resolution
// =============================================================================

#[test]
fn project_root_token_kept_or_fully_replaced() {
    let tree = plan_module();
    install(&tree, "claude-code", SubagentSelection::None);
    install(&tree, "codex", SubagentSelection::None);

    let kept = tree.read_project(".claude/commands/xiaoma/core/workflows/plan.md");
    assert!(kept.contains("{project-root}/.xiaoma/core/workflows/plan/workflow.yaml"));

    let root = NormalizedPath::new(tree.project_root());
    for file in tree.project_files(".codex/prompts") {
        let content = tree.read_project(&format!(".codex/prompts/{file}"));
        assert!(!content.contains("{project-root}"), "{file} kept the token");
        assert!(!content.contains("{xiaoma_folder}"), "{file} kept the folder token");
        assert!(content.contains(root.as_str()), "{file} lacks the project root");
    }
}

// =============================================================================
// Module injections
// =============================================================================

const PM_INJECTIONS: &str = r#"subagents:
  files:
    - a.md
    - b.md
injections:
  - file: "{xiaoma_folder}/core/agents/pm.md"
    point: pm-agent-instructions
    requires: any
    content: |
      Use a.md for market research.
      Use b.md for requirements analysis.
"#;

fn injected_module() -> SourceTree {
    let tree = SourceTree::new();
    tree.agent(
        "core",
        "pm.md",
        &docs::agent_with_injection_point("core/agents/pm.md", "pm-agent-instructions"),
    )
    .injections("core", "claude-code", PM_INJECTIONS)
    .subagent("core", "claude-code", "subagents/a.md", "# Market Researcher\n")
    .subagent("core", "claude-code", "subagents/b.md", "# Requirements Analyst\n");
    tree
}

#[test]
fn partial_selection_references_only_selected_subagent() {
    let tree = injected_module();
    let result = install(
        &tree,
        "claude-code",
        SubagentSelection::Selected(vec!["a.md".to_string()]),
    );

    assert_eq!(result.injections_applied, 1);
    let pm = tree.read_project(".xiaoma/core/agents/pm.md");
    assert!(pm.contains("a.md"));
    assert!(!pm.contains("b.md"));
    assert_eq!(tree.project_files(".claude/agents"), vec!["xiaoma-a.md"]);
}

#[test]
fn full_selection_references_both_subagents() {
    let tree = injected_module();
    install(&tree, "claude-code", SubagentSelection::All);

    let pm = tree.read_project(".xiaoma/core/agents/pm.md");
    assert!(pm.contains("Use a.md for market research."));
    assert!(pm.contains("Use b.md for requirements analysis."));
    assert_eq!(
        tree.project_files(".claude/agents"),
        vec!["xiaoma-a.md", "xiaoma-b.md"]
    );
}

#[test]
fn injections_are_scoped_to_their_target() {
    let tree = injected_module();
    let result = install(&tree, "gemini", SubagentSelection::All);

    assert_eq!(result.injections_applied, 0);
    assert_eq!(result.subagents_installed, 0);
    let pm = tree.read_project(".xiaoma/core/agents/pm.md");
    assert!(pm.contains("<!-- XIAOMA-INJECT-POINT: pm-agent-instructions -->"));
}
