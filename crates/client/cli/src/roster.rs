//! Roster loading for the CLI.
use std::path::Path;

use anyhow::{Context, Result};
use arena_core::{BaseStats, Combatant, ElementalType, Roster};

/// One starter per element.
pub fn starter_roster() -> Roster {
    [
        Combatant::new(
            "Charmander",
            ElementalType::Fire,
            BaseStats::new(52.0, 43.0, 65.0, 100.0),
        )
        .with_physique(8.5, 0.6),
        Combatant::new(
            "Bulbasaur",
            ElementalType::Grass,
            BaseStats::new(49.0, 49.0, 45.0, 100.0),
        )
        .with_physique(6.9, 0.7),
        Combatant::new(
            "Squirtle",
            ElementalType::Water,
            BaseStats::new(48.0, 65.0, 43.0, 100.0),
        )
        .with_physique(9.0, 0.5),
        Combatant::new(
            "Pikachu",
            ElementalType::Electric,
            BaseStats::new(55.0, 40.0, 90.0, 100.0),
        )
        .with_physique(6.0, 0.4),
    ]
    .into_iter()
    .collect()
}

/// Reads a roster from a JSON array of combatants.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    let roster: Roster = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse roster {}", path.display()))?;
    tracing::info!("Loaded {} combatants from {}", roster.len(), path.display());
    Ok(roster)
}
