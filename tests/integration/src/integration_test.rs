//! Integration Tests
//!
//! Runs the whole pipeline (scan, generate, write, clean) across every
//! built-in target against one temporary project.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use xiaoma_fs::{CapabilityFolder, NormalizedPath};
use xiaoma_meta::{StandardPaths, SubagentSelection};
use xiaoma_test_utils::{SourceTree, docs};
use xiaoma_tools::{
    AdapterDispatcher, CustomLauncher, FixedSelection, InjectionSession, InstallContext,
    InstallResult,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn capability_tree() -> SourceTree {
    let tree = SourceTree::new();
    tree.agent("core", "pm.md", &docs::agent("core/agents/pm.md", "John", "Product Manager"))
        .agent("core", "dev.md", &docs::agent("core/agents/dev.md", "Amelia", "Developer"))
        .task("core", "review.xml", &docs::xml_task("review", true))
        .tool("core", "shard.md", &docs::markdown_tool("shard", "Split documents", true))
        .workflow("core", "plan", &docs::workflow_manifest("Plan", "Plan the work", true))
        .agent("bmm", "analyst.md", &docs::agent("bmm/agents/analyst.md", "Mary", "Analyst"))
        .workflow("bmm", "research", &docs::workflow_manifest("Research", "Dig in", false));
    tree
}

fn all_targets() -> Vec<String> {
    AdapterDispatcher::new().list_available()
}

fn project(tree: &SourceTree) -> NormalizedPath {
    NormalizedPath::new(tree.project_root())
}

fn install(tree: &SourceTree, targets: &[String]) -> Vec<InstallResult> {
    let paths = StandardPaths::new(
        tree.source_root(),
        tree.project_root(),
        CapabilityFolder::default(),
    );
    let ctx = InstallContext::new(&paths, vec!["core".to_string(), "bmm".to_string()]);
    AdapterDispatcher::new()
        .install_all(
            &ctx,
            targets,
            &mut InjectionSession::new(),
            &mut FixedSelection(SubagentSelection::All),
        )
        .unwrap()
}

/// Every file under the project root with its content.
fn snapshot(tree: &SourceTree) -> BTreeMap<String, String> {
    tree.project_files("")
        .into_iter()
        .map(|rel| {
            let content = tree.read_project(&rel);
            (rel, content)
        })
        .collect()
}

// =============================================================================
// Install
// =============================================================================

#[test]
fn every_target_installs_and_is_detected() {
    let tree = capability_tree();
    let targets = all_targets();

    let results = install(&tree, &targets);

    assert_eq!(results.len(), targets.len());
    for result in &results {
        assert!(result.is_success(), "{} failed: {:?}", result.target, result.failures);
        assert!(result.total() > 0, "{} wrote nothing", result.target);
        assert_eq!(result.collisions, 0);
    }
    assert_eq!(AdapterDispatcher::new().detect_all(&project(&tree)), targets);
}

#[test]
fn results_follow_requested_order() {
    let tree = capability_tree();
    let targets = vec!["roo".to_string(), "claude-code".to_string(), "gemini".to_string()];

    let order: Vec<String> = install(&tree, &targets)
        .into_iter()
        .map(|r| r.target)
        .collect();

    assert_eq!(order, targets);
}

#[test]
fn unknown_target_writes_nothing() {
    let tree = capability_tree();
    let paths = StandardPaths::new(
        tree.source_root(),
        tree.project_root(),
        CapabilityFolder::default(),
    );
    let ctx = InstallContext::new(&paths, vec!["core".to_string()]);

    let result = AdapterDispatcher::new().install_all(
        &ctx,
        &["claude-code".to_string(), "vscode".to_string()],
        &mut InjectionSession::new(),
        &mut FixedSelection(SubagentSelection::All),
    );

    assert!(result.is_err());
    tree.assert_project_missing(".claude");
}

#[test]
fn reinstall_is_byte_identical() {
    let tree = capability_tree();
    let targets = all_targets();

    install(&tree, &targets);
    let first = snapshot(&tree);
    install(&tree, &targets);

    assert_eq!(snapshot(&tree), first);
}

// =============================================================================
// Cleanup
// =============================================================================

#[test]
fn cleanup_twice_removes_nothing_the_second_time() {
    let tree = capability_tree();
    let targets = all_targets();
    install(&tree, &targets);

    let dispatcher = AdapterDispatcher::new();
    let first: usize = dispatcher
        .cleanup_all(&project(&tree), &targets)
        .unwrap()
        .iter()
        .map(|r| r.removed)
        .sum();
    let second: usize = dispatcher
        .cleanup_all(&project(&tree), &targets)
        .unwrap()
        .iter()
        .map(|r| r.removed)
        .sum();

    assert!(first > 0);
    assert_eq!(second, 0);
    assert!(dispatcher.detect_all(&project(&tree)).is_empty());
}

#[test]
fn cleanup_leaves_user_files_alone() {
    let tree = capability_tree();
    let user_files = [
        ".claude/commands/deploy.md",
        ".gemini/commands/review.toml",
        ".cursor/rules/style.mdc",
        ".github/workflows/ci.yml",
        ".windsurf/workflows/release.md",
        ".clinerules/workflows/triage.md",
    ];
    for rel in user_files {
        tree.project_file(rel, "user content\n");
    }
    let targets = all_targets();

    install(&tree, &targets);
    AdapterDispatcher::new()
        .cleanup_all(&project(&tree), &targets)
        .unwrap();

    for rel in user_files {
        assert_eq!(tree.read_project(rel), "user content\n", "{rel} was touched");
    }
    tree.assert_project_missing(".claude/commands/xiaoma");
    tree.assert_project_missing(".roomodes");
    tree.assert_project_missing(".kilocodemodes");
}

// =============================================================================
// Custom launchers
// =============================================================================

#[test]
fn custom_launcher_only_lands_where_configured() {
    let tree = capability_tree();
    tree.project_file(".claude/settings.json", "{}\n");
    let launcher = CustomLauncher::new("Data Scientist", "agents/data-scientist.md")
        .with_description("Explores data");
    let dispatcher = AdapterDispatcher::new();

    let mut written = Vec::new();
    for slug in all_targets() {
        let path = dispatcher
            .install_custom_launcher(
                &slug,
                &project(&tree),
                &CapabilityFolder::default(),
                &launcher,
            )
            .unwrap();
        if path.is_some() {
            written.push(slug);
        }
    }

    assert_eq!(written, vec!["claude-code"]);
    tree.assert_project_exists(".claude/commands/xiaoma/custom/agents/data-scientist.md");
}
