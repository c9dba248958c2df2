//! Arena command-line entry point.
//!
//! Loads a roster, stages a combat between two named combatants and prints
//! the turn log to stdout.
//!
//! ```bash
//! arena Squirtle Charmander
//! ARENA_ROSTER=roster.json RUST_LOG=debug arena
//! ```
mod config;
mod logging;
mod roster;

use anyhow::{Context, Result};
use arena_core::Combat;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env().with_args(std::env::args().skip(1));
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let mut roster = match &config.roster_path {
        Some(path) => roster::load_roster(path)?,
        None => roster::starter_roster(),
    };

    for line in roster.summary() {
        println!("{line}");
    }
    println!();

    let (first, second) = roster
        .get_pair_mut(&config.first, &config.second)
        .context("cannot stage combat")?;

    tracing::info!("Combat: {} vs {}", first.name(), second.name());
    let mut combat = Combat::with_config(first, second, config.arena.clone());
    combat.start().context("combat aborted")?;

    for message in combat.log().messages() {
        println!("{message}");
    }

    Ok(())
}
