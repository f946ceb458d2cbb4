//! Install command implementation

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use colored::Colorize;
use xiaoma_meta::{PathResolver, StandardPaths, SubagentSelection};
use xiaoma_tools::{
    AdapterDispatcher, ArtifactType, FixedSelection, InjectionSession, InstallContext,
    InstallResult, SelectionPrompt,
};

use crate::context::{ProjectContext, flag_or};
use crate::error::{CliError, Result};
use crate::interactive::{TerminalPrompt, select_targets};

/// Flags of the install command.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub targets: Vec<String>,
    pub modules: Vec<String>,
    pub folder: Option<String>,
    pub source: Option<PathBuf>,
    pub subagents: Option<String>,
}

/// Run the install command
pub fn run_install(project: &Path, options: &InstallOptions) -> Result<()> {
    let ctx = ProjectContext::load(project)?;
    let folder = ctx.folder(options.folder.as_deref())?;
    let source = ctx.source(options.source.as_deref()).ok_or_else(|| {
        CliError::user("No capability source tree. Pass --source or set `source` in xiaoma.toml.")
    })?;
    if !source.is_dir() {
        return Err(CliError::user(format!("Source tree not found: {}", source)));
    }

    let paths = StandardPaths::new(source, ctx.root.clone(), folder);
    let installed = paths.installed_root();
    if !installed.is_dir() {
        return Err(CliError::user(format!(
            "No installed capability tree at {}. Install the modules first.",
            installed
        )));
    }

    let modules = match flag_or(&options.modules, &ctx.config.modules) {
        modules if modules.is_empty() => paths.available_modules(),
        modules => modules,
    };
    if modules.is_empty() {
        return Err(CliError::user("No modules found in the source tree."));
    }

    let dispatcher = AdapterDispatcher::new();
    let interactive = std::io::stdin().is_terminal();
    let targets = match flag_or(&options.targets, &ctx.config.targets) {
        targets if !targets.is_empty() => targets,
        _ if interactive => select_targets(dispatcher.registry())?,
        _ => {
            return Err(CliError::user(
                "No targets given. Pass --target or set `targets` in xiaoma.toml.",
            ));
        }
    };

    let selection = match options.subagents.as_deref().or(ctx.config.subagents.as_deref()) {
        Some(value) => Some(value.parse::<SubagentSelection>()?),
        None => None,
    };
    let mut session = match &selection {
        Some(selection) => InjectionSession::with_selection(selection.clone()),
        None => InjectionSession::new(),
    };
    let mut fixed = FixedSelection(SubagentSelection::All);
    let mut terminal = TerminalPrompt;
    let prompt: &mut dyn SelectionPrompt = if selection.is_none() && interactive {
        &mut terminal
    } else {
        &mut fixed
    };

    println!(
        "{} Installing {} into {}",
        "=>".blue().bold(),
        modules.join(", ").cyan(),
        targets.join(", ").cyan()
    );

    let install_ctx = InstallContext::new(&paths, modules);
    let results = dispatcher.install_all(&install_ctx, &targets, &mut session, prompt)?;

    let mut failures = 0;
    for result in &results {
        print_result(result);
        failures += result.failures.len();
    }

    if failures > 0 {
        return Err(CliError::user(format!("{} writes failed", failures)));
    }
    Ok(())
}

fn print_result(result: &InstallResult) {
    let status = if result.is_success() {
        "OK".green().bold()
    } else {
        "PARTIAL".yellow().bold()
    };
    let summary: Vec<String> = [
        ArtifactType::Agent,
        ArtifactType::Task,
        ArtifactType::Tool,
        ArtifactType::WorkflowCommand,
        ArtifactType::WorkflowLauncher,
    ]
    .into_iter()
    .filter(|t| result.count(*t) > 0)
    .map(|t| format!("{} {}", result.count(t), t))
    .collect();

    println!(
        "{} {}: {}",
        status,
        result.target.cyan(),
        if summary.is_empty() {
            "nothing to install".to_string()
        } else {
            summary.join(", ")
        }
    );
    if result.injections_applied > 0 || result.subagents_installed > 0 {
        println!(
            "   {} {} injections, {} subagents",
            "+".green(),
            result.injections_applied,
            result.subagents_installed
        );
    }
    if result.collisions > 0 {
        println!(
            "   {} {} duplicate capabilities, last one kept",
            "!".yellow(),
            result.collisions
        );
    }
    for failure in &result.failures {
        println!(
            "   {} {}: {}",
            "x".red(),
            failure.path.as_str().dimmed(),
            failure.message
        );
    }
}
