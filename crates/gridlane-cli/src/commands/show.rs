//! Draw the grid as text.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config;

pub fn run(scenario: Option<&Path>, ticks: u64) -> Result<()> {
    let (path, scenario) = config::load(scenario)?;
    let mut grid = scenario
        .build_grid()
        .with_context(|| format!("Invalid scenario: {}", path.display()))?;
    grid.run(ticks);

    println!(
        "{} tick {} · light {} ({} ticks left)",
        "→".blue(),
        grid.current_tick().to_string().cyan(),
        grid.light().to_string().bold(),
        grid.light_remaining()
    );
    println!("{}", grid.render());
    println!();
    println!(
        "{}",
        "# wall  . street  = crosswalk  + light  , grass  : trail".dimmed()
    );
    println!(
        "{}",
        "A atv  B bicycle  C car  H human  X taxi  K truck (lower case: dead)".dimmed()
    );

    Ok(())
}
