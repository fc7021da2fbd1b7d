//! Gridlane CLI - run and inspect traffic grid scenarios.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridlane")]
#[command(author, version, about = "Gridlane - grid traffic simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scenario file (default: gridlane.toml in this or a parent directory)
    #[arg(short, long, global = true)]
    scenario: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample gridlane.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing gridlane.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Run the simulation
    Run {
        /// Number of ticks (default: the scenario's)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// RNG seed (default: the scenario's, else entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final snapshot as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Draw the map with its vehicles
    Show {
        /// Advance this many ticks before drawing
        #[arg(short, long, default_value = "0")]
        ticks: u64,
    },

    /// Validate a scenario without running it
    Check,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scenario = cli.scenario.as_deref();
    match cli.command {
        Commands::Init { path, force } => commands::init::run(path, force),
        Commands::Run { ticks, seed, json } => commands::run::run(scenario, ticks, seed, json),
        Commands::Show { ticks } => commands::show::run(scenario, ticks),
        Commands::Check => commands::check::run(scenario),
    }
}
