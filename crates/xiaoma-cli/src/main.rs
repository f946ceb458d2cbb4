//! xiaoma CLI
//!
//! Distributes installed capabilities (agents, tasks, tools, workflows) to the
//! AI coding tools configured in a project.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::{InstallOptions, LauncherOptions};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    } else if let Err(e) = xiaoma_tools::logging::init_with_default("warn") {
        eprintln!("{} logging disabled: {}", "warning:".yellow().bold(), e);
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} capability distribution", "xiaoma".green().bold());
            println!();
            println!("Run {} for available commands.", "xiaoma --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Install {
            project,
            targets,
            modules,
            folder,
            source,
            subagents,
        } => commands::run_install(
            &project,
            &InstallOptions {
                targets,
                modules,
                folder,
                source,
                subagents,
            },
        ),
        Commands::Cleanup { project, targets } => commands::run_cleanup(&project, &targets),
        Commands::Detect { project, json } => commands::run_detect(&project, json),
        Commands::ListTargets { category } => commands::run_list_targets(category.as_deref()),
        Commands::Launcher {
            project,
            target,
            name,
            path,
            title,
            description,
            folder,
        } => commands::run_launcher(
            &project,
            &LauncherOptions {
                target,
                name,
                path,
                title,
                description,
                folder,
            },
        ),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "xiaoma", &mut std::io::stdout());
            Ok(())
        }
    }
}
