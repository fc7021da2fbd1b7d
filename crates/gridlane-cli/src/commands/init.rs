//! Write a sample scenario to start from.

use anyhow::{Context, Result};
use colored::Colorize;
use gridlane::prelude::ScenarioConfig;
use std::path::PathBuf;

use crate::config::{self, SCENARIO_FILE};

pub fn run(path: Option<PathBuf>, force: bool) -> Result<()> {
    let base_path = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Gridlane scenario...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let scenario_path = base_path.join(SCENARIO_FILE);
    if scenario_path.exists() && !force {
        println!(
            "  {} {} already exists (use --force to overwrite)",
            "•".yellow(),
            scenario_path.display()
        );
        return Ok(());
    }

    config::save(&ScenarioConfig::sample(), &scenario_path)?;
    println!("  {} Created {}", "✓".green(), scenario_path.display());

    println!();
    println!("Next steps:");
    println!("  {} gridlane check", "1.".blue());
    println!("  {} gridlane show", "2.".blue());
    println!("  {} gridlane run --ticks 200", "3.".blue());

    Ok(())
}
