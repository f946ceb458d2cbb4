//! Custom launcher command implementation

use std::path::Path;

use colored::Colorize;
use xiaoma_tools::{AdapterDispatcher, CustomLauncher};

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// Flags of the launcher command.
#[derive(Debug, Clone, Default)]
pub struct LauncherOptions {
    pub target: String,
    pub name: String,
    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub folder: Option<String>,
}

/// Run the launcher command
pub fn run_launcher(project: &Path, options: &LauncherOptions) -> Result<()> {
    let ctx = ProjectContext::load(project)?;
    let folder = ctx.folder(options.folder.as_deref())?;
    let dispatcher = AdapterDispatcher::new();
    let registration = dispatcher.get_registration(&options.target).ok_or_else(|| {
        CliError::user(format!(
            "Unknown target '{}'. Use 'xiaoma list-targets' to see options.",
            options.target
        ))
    })?;

    let mut launcher = CustomLauncher::new(&options.name, &options.path);
    if let Some(title) = &options.title {
        launcher = launcher.with_title(title);
    }
    if let Some(description) = &options.description {
        launcher = launcher.with_description(description);
    }

    match dispatcher.install_custom_launcher(&options.target, &ctx.root, &folder, &launcher)? {
        Some(path) => println!(
            "{} Launcher for {} written to {}",
            "OK".green().bold(),
            options.name.cyan(),
            path.as_str().dimmed()
        ),
        None => println!(
            "{} {} is not configured in this project ({} not found).",
            "SKIP".yellow().bold(),
            registration.display_name(),
            registration.profile.anchor.cyan()
        ),
    }
    Ok(())
}
