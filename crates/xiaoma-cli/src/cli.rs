//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// xiaoma - Distribute agents, tasks, tools and workflows to AI coding tools
#[derive(Parser, Debug)]
#[command(name = "xiaoma")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate tool-specific files from the installed capability tree
    ///
    /// Every selected target is cleaned first, so re-running install
    /// converges on the same output.
    ///
    /// Examples:
    ///   xiaoma install -t claude-code -t gemini
    ///   xiaoma install -m core -m bmm --subagents a.md,b.md
    ///   xiaoma install --source ../xiaoma-source ./my-project
    Install {
        /// Project directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Targets to install (use 'xiaoma list-targets' to see options)
        #[arg(short, long = "target")]
        targets: Vec<String>,

        /// Modules to include (defaults to every module in the source tree)
        #[arg(short, long = "module")]
        modules: Vec<String>,

        /// Name of the installed capability folder
        #[arg(short, long)]
        folder: Option<String>,

        /// Capability source tree
        #[arg(short, long, env = "XIAOMA_SOURCE")]
        source: Option<PathBuf>,

        /// Subagents to install: all, none, or a comma-separated list
        #[arg(long)]
        subagents: Option<String>,
    },

    /// Remove generated files
    ///
    /// Without --target, every target with generated content is cleaned.
    Cleanup {
        /// Project directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Targets to clean
        #[arg(short, long = "target")]
        targets: Vec<String>,
    },

    /// List targets whose namespace holds generated content
    Detect {
        /// Project directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List available targets
    ListTargets {
        /// Filter by category (ide, cli-agent, autonomous, copilot)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Install a launcher for a single custom agent
    ///
    /// Examples:
    ///   xiaoma launcher -t claude-code --name "Data Scientist" --path agents/ds.md
    Launcher {
        /// Project directory
        #[arg(default_value = ".")]
        project: PathBuf,

        /// Target to install into
        #[arg(short, long)]
        target: String,

        /// Agent name, slugged for the file name
        #[arg(short, long)]
        name: String,

        /// Path of the agent document
        #[arg(short, long)]
        path: String,

        /// Display title (defaults to the name)
        #[arg(long)]
        title: Option<String>,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,

        /// Name of the installed capability folder
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   xiaoma completions bash > ~/.local/share/bash-completion/completions/xiaoma
    ///   xiaoma completions zsh > ~/.zfunc/_xiaoma
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_install_defaults() {
        let cli = Cli::parse_from(["xiaoma", "install"]);
        match cli.command {
            Some(Commands::Install {
                project,
                targets,
                modules,
                folder,
                subagents,
                ..
            }) => {
                assert_eq!(project, PathBuf::from("."));
                assert!(targets.is_empty());
                assert!(modules.is_empty());
                assert_eq!(folder, None);
                assert_eq!(subagents, None);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn parse_install_with_targets_and_modules() {
        let cli = Cli::parse_from([
            "xiaoma",
            "install",
            "-t",
            "claude-code",
            "--target",
            "gemini",
            "-m",
            "core",
            "--subagents",
            "a.md,b.md",
            "proj",
        ]);
        match cli.command {
            Some(Commands::Install {
                project,
                targets,
                modules,
                subagents,
                ..
            }) => {
                assert_eq!(project, PathBuf::from("proj"));
                assert_eq!(targets, vec!["claude-code", "gemini"]);
                assert_eq!(modules, vec!["core"]);
                assert_eq!(subagents.as_deref(), Some("a.md,b.md"));
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn parse_cleanup_command() {
        let cli = Cli::parse_from(["xiaoma", "cleanup", "-t", "roo"]);
        match cli.command {
            Some(Commands::Cleanup { targets, .. }) => assert_eq!(targets, vec!["roo"]),
            _ => panic!("Expected Cleanup command"),
        }
    }

    #[test]
    fn parse_detect_json() {
        let cli = Cli::parse_from(["xiaoma", "detect", "--json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Detect { json: true, .. })
        ));
    }

    #[test]
    fn parse_list_targets_with_category() {
        let cli = Cli::parse_from(["xiaoma", "list-targets", "--category", "ide"]);
        match cli.command {
            Some(Commands::ListTargets { category }) => {
                assert_eq!(category, Some("ide".to_string()));
            }
            _ => panic!("Expected ListTargets command"),
        }
    }

    #[test]
    fn parse_launcher_requires_target() {
        let result = Cli::try_parse_from(["xiaoma", "launcher", "--name", "x", "--path", "p"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["xiaoma", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["xiaoma"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_global_verbose() {
        let cli = Cli::parse_from(["xiaoma", "detect", "-v"]);
        assert!(cli.verbose);
    }
}
