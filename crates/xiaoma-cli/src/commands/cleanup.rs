//! Cleanup command implementation

use std::path::Path;

use colored::Colorize;
use xiaoma_tools::AdapterDispatcher;

use crate::context::ProjectContext;
use crate::error::Result;

/// Run the cleanup command
///
/// With no explicit targets, every target holding generated content is
/// cleaned.
pub fn run_cleanup(project: &Path, targets: &[String]) -> Result<()> {
    let ctx = ProjectContext::load(project)?;
    let dispatcher = AdapterDispatcher::new();

    let targets = if targets.is_empty() {
        dispatcher.detect_all(&ctx.root)
    } else {
        targets.to_vec()
    };
    if targets.is_empty() {
        println!("{} Nothing to clean up.", "OK".green().bold());
        return Ok(());
    }

    let reports = dispatcher.cleanup_all(&ctx.root, &targets)?;
    let mut total = 0;
    for report in &reports {
        total += report.removed;
        println!(
            "   {} {}: {} removed",
            "-".yellow(),
            report.target.cyan(),
            report.removed
        );
    }
    println!("{} Removed {} generated entries.", "OK".green().bold(), total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_detected_targets() {
        let temp = TempDir::new().unwrap();
        let commands = temp.path().join(".gemini/commands");
        fs::create_dir_all(&commands).unwrap();
        fs::write(commands.join("xiaoma-core-agents-pm.toml"), "prompt = \"x\"\n").unwrap();
        fs::write(commands.join("mine.toml"), "prompt = \"y\"\n").unwrap();

        run_cleanup(temp.path(), &[]).unwrap();
        assert!(!commands.join("xiaoma-core-agents-pm.toml").exists());
        assert!(commands.join("mine.toml").exists());
    }

    #[test]
    fn test_cleanup_nothing_detected() {
        let temp = TempDir::new().unwrap();
        assert!(run_cleanup(temp.path(), &[]).is_ok());
    }

    #[test]
    fn test_cleanup_unknown_target() {
        let temp = TempDir::new().unwrap();
        assert!(run_cleanup(temp.path(), &["notepad".to_string()]).is_err());
    }
}
