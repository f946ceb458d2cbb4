//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use colored::Colorize;
use dialoguer::{MultiSelect, Select};
use xiaoma_meta::SubagentSelection;
use xiaoma_tools::{AdapterRegistry, SelectionPrompt};

use crate::error::{CliError, Result};

/// Subagent install choices, in menu order.
const SUBAGENT_CHOICES: &[&str] = &["Install all", "Choose individually", "Skip subagents"];

/// Targets offered for selection: preferred first, pre-checked.
pub fn target_items(registry: &AdapterRegistry) -> Vec<(String, String, bool)> {
    registry
        .by_priority()
        .into_iter()
        .map(|reg| {
            (
                reg.slug().to_string(),
                reg.display_name().to_string(),
                reg.preferred(),
            )
        })
        .collect()
}

/// Ask which targets to install.
pub fn select_targets(registry: &AdapterRegistry) -> Result<Vec<String>> {
    let items = target_items(registry);
    let labels: Vec<String> = items
        .iter()
        .map(|(slug, name, preferred)| {
            if *preferred {
                format!("{} ({}) {}", name, slug, "preferred".dimmed())
            } else {
                format!("{} ({})", name, slug)
            }
        })
        .collect();
    let defaults: Vec<bool> = items.iter().map(|(_, _, preferred)| *preferred).collect();

    let indices = MultiSelect::new()
        .with_prompt("Select targets (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    if indices.is_empty() {
        return Err(CliError::user("No targets selected."));
    }
    Ok(indices.iter().map(|&i| items[i].0.clone()).collect())
}

fn ask_subagents(target: &str, available: &[String]) -> Result<SubagentSelection> {
    println!();
    println!(
        "{} {} ships {} subagents for {}",
        "=>".blue().bold(),
        "xiaoma".green(),
        available.len(),
        target.cyan()
    );

    let choice = Select::new()
        .with_prompt("Subagents")
        .items(SUBAGENT_CHOICES)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => SubagentSelection::All,
        1 => {
            let indices = MultiSelect::new()
                .with_prompt("Select subagents (space to toggle, enter to confirm)")
                .items(available)
                .interact()?;
            if indices.is_empty() {
                SubagentSelection::None
            } else {
                SubagentSelection::Selected(
                    indices.iter().map(|&i| available[i].clone()).collect(),
                )
            }
        }
        _ => SubagentSelection::None,
    })
}

/// Terminal prompt for the subagent selection.
pub struct TerminalPrompt;

impl SelectionPrompt for TerminalPrompt {
    fn select_subagents(
        &mut self,
        target: &str,
        available: &[String],
    ) -> xiaoma_tools::Result<SubagentSelection> {
        ask_subagents(target, available).map_err(|e| xiaoma_tools::Error::PromptFailed {
            message: e.to_string(),
        })
    }
}
