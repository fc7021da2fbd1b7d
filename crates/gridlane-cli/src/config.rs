//! Scenario file discovery and persistence.

use anyhow::{Context, Result};
use gridlane::prelude::ScenarioConfig;
use std::path::{Path, PathBuf};

pub const SCENARIO_FILE: &str = "gridlane.toml";

/// Load the scenario at `explicit`, or find gridlane.toml in the current
/// or parent directories.
pub fn load(explicit: Option<&Path>) -> Result<(PathBuf, ScenarioConfig)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            find_scenario_from(&cwd).with_context(|| {
                format!(
                    "No {} found in {} or its parents. Run `gridlane init` first.",
                    SCENARIO_FILE,
                    cwd.display()
                )
            })?
        }
    };
    let scenario = load_from(&path)?;
    Ok((path, scenario))
}

pub fn load_from(path: &Path) -> Result<ScenarioConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario: {}", path.display()))?;
    ScenarioConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse scenario: {}", path.display()))
}

/// Save a scenario to the specified path.
pub fn save(scenario: &ScenarioConfig, path: &Path) -> Result<()> {
    let content = scenario
        .to_toml_string()
        .context("Failed to serialize scenario")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write scenario: {}", path.display()))?;
    Ok(())
}

/// Find gridlane.toml in `start` or its parents.
pub fn find_scenario_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(SCENARIO_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
