//! Validate a scenario and summarize it.

use anyhow::{Context, Result};
use colored::Colorize;
use gridlane::prelude::*;
use std::path::Path;

use crate::config;

pub fn run(scenario: Option<&Path>) -> Result<()> {
    let (path, scenario) = config::load(scenario)?;
    let grid = scenario
        .build_grid()
        .with_context(|| format!("Invalid scenario: {}", path.display()))?;
    let map = grid.map();
    let light = grid.light_config();

    println!("{} {} is valid", "✓".green().bold(), path.display());
    println!(
        "  Map: {}x{}",
        map.width().to_string().cyan(),
        map.height().to_string().cyan()
    );
    println!(
        "  Light: green {} / yellow {} / red {} ticks",
        light.green_ticks.to_string().green(),
        light.yellow_ticks.to_string().yellow(),
        light.red_ticks.to_string().red()
    );
    match scenario.simulation.seed {
        Some(seed) => println!("  Seed: {}, ticks: {}", seed, scenario.simulation.ticks),
        None => println!("  Seed: entropy, ticks: {}", scenario.simulation.ticks),
    }

    println!("  Vehicles: {}", scenario.vehicles.len().to_string().cyan());
    for kind in VehicleKind::ALL {
        let count = scenario.vehicles.iter().filter(|v| v.kind == kind).count();
        if count > 0 {
            println!("    {:<8} {}", kind.name(), count);
        }
    }

    Ok(())
}
