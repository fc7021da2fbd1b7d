//! Run a scenario.

use anyhow::{Context, Result};
use colored::Colorize;
use gridlane::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::config;

pub fn run(scenario: Option<&Path>, ticks: Option<u64>, seed: Option<u64>, json: bool) -> Result<()> {
    let (path, mut scenario) = config::load(scenario)?;
    if seed.is_some() {
        scenario.simulation.seed = seed;
    }
    let ticks = ticks.unwrap_or(scenario.simulation.ticks);

    let mut grid = scenario
        .build_grid()
        .with_context(|| format!("Invalid scenario: {}", path.display()))?;
    tracing::debug!(path = %path.display(), ticks, seed = ?scenario.simulation.seed, "loaded scenario");

    if !json {
        println!(
            "{} Running {} ticks with {} vehicles...",
            "→".blue(),
            ticks.to_string().cyan(),
            grid.vehicles().len().to_string().cyan()
        );
    }

    let pb = if json { ProgressBar::hidden() } else { ProgressBar::new(ticks) };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    for _ in 0..ticks {
        grid.tick();
        pb.inc(1);
    }
    pb.finish_and_clear();

    if json {
        let out = serde_json::to_string_pretty(&grid.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{out}");
        return Ok(());
    }

    let stats = grid.stats();
    println!("{} Simulation complete!", "✓".green().bold());
    println!(
        "  Alive: {}  Dead: {}",
        stats.alive.to_string().green(),
        stats.dead.to_string().red()
    );
    println!(
        "  Moves: {}  Blocked: {}",
        stats.total_moves.to_string().cyan(),
        stats.total_blocked.to_string().yellow()
    );
    println!(
        "  Deaths: {}  Revivals: {}",
        stats.total_deaths.to_string().red(),
        stats.total_revivals.to_string().green()
    );
    println!("  Light: {}", stats.light);
    println!();
    println!("{}", grid.render());

    Ok(())
}
