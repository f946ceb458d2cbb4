//! List command for targets

use colored::Colorize;
use xiaoma_tools::{AdapterCategory, AdapterRegistry, Destination};

use crate::error::Result;

/// Where a target writes, for display.
fn destination_label(destination: &Destination) -> &'static str {
    match *destination {
        Destination::Directory { root, .. } => root,
        Destination::ModesRegistry { file } => file,
    }
}

/// Run the list-targets command
pub fn run_list_targets(category_filter: Option<&str>) -> Result<()> {
    let registry = AdapterRegistry::with_builtins();

    let filter: Option<AdapterCategory> = match category_filter {
        Some("ide") => Some(AdapterCategory::Ide),
        Some("cli-agent") => Some(AdapterCategory::CliAgent),
        Some("autonomous") => Some(AdapterCategory::Autonomous),
        Some("copilot") => Some(AdapterCategory::Copilot),
        Some(other) => {
            eprintln!(
                "{} Unknown category '{}'. Valid: ide, cli-agent, autonomous, copilot",
                "warning:".yellow().bold(),
                other
            );
            None
        }
        None => None,
    };

    println!("{}", "Available Targets".bold());
    println!();

    let categories = [
        (AdapterCategory::CliAgent, "CLI Agents"),
        (AdapterCategory::Ide, "IDEs"),
        (AdapterCategory::Autonomous, "Autonomous Agents"),
        (AdapterCategory::Copilot, "Copilots"),
    ];

    for (cat, label) in categories {
        if filter.is_some_and(|f| f != cat) {
            continue;
        }

        let registrations: Vec<_> = registry
            .by_priority()
            .into_iter()
            .filter(|reg| reg.category == cat)
            .collect();
        if registrations.is_empty() {
            continue;
        }

        println!("{}:", label.cyan().bold());
        for reg in registrations {
            let marker = if reg.preferred() { "*" } else { " " };
            println!(
                "  {}{:<16} {} ({})",
                marker.yellow(),
                reg.slug().green(),
                reg.display_name(),
                destination_label(&reg.profile.destination).dimmed()
            );
        }
        println!();
    }

    println!(
        "{} {} targets available, {} preferred. Use {} to install.",
        "Total:".dimmed(),
        registry.len(),
        "*".yellow(),
        "xiaoma install -t <name>".cyan()
    );

    Ok(())
}
