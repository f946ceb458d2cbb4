//! Detect command implementation

use std::path::Path;

use colored::Colorize;
use xiaoma_tools::AdapterDispatcher;

use crate::context::ProjectContext;
use crate::error::Result;

/// Run the detect command
pub fn run_detect(project: &Path, json: bool) -> Result<()> {
    let ctx = ProjectContext::load(project)?;
    let dispatcher = AdapterDispatcher::new();
    let detected = dispatcher.detect_all(&ctx.root);

    if json {
        println!("{}", serde_json::to_string_pretty(&detected)?);
        return Ok(());
    }

    if detected.is_empty() {
        println!("No generated content found in {}", ctx.root.as_str().dimmed());
        return Ok(());
    }

    println!("{}", "Installed targets".bold());
    for slug in &detected {
        let name = dispatcher
            .get_registration(slug)
            .map(|reg| reg.display_name())
            .unwrap_or_default();
        println!("  {:<16} {}", slug.green(), name);
    }
    Ok(())
}
