//! Deterministic rules for one-on-one elemental combat.
//!
//! `arena-core` defines combatants, the elemental effectiveness table, the
//! turn-based [`combat::Combat`] state machine and a searchable [`Roster`].
//! All health mutation flows through [`Combat`]; every other API is a pure
//! lookup or a read-only query.
//!
//! ```
//! use arena_core::{BaseStats, Combat, Combatant, ElementalType};
//!
//! let mut charmander = Combatant::new("Charmander", ElementalType::Fire, BaseStats::new(52.0, 43.0, 65.0, 100.0));
//! let mut bulbasaur = Combatant::new("Bulbasaur", ElementalType::Grass, BaseStats::new(49.0, 49.0, 45.0, 100.0));
//!
//! let mut combat = Combat::new(&mut charmander, &mut bulbasaur);
//! let winner = combat.start()?;
//! assert_eq!(winner.name(), "Charmander");
//! # Ok::<(), arena_core::CombatError>(())
//! ```
pub mod combat;
pub mod combatant;
pub mod config;
pub mod element;
pub mod error;
pub mod roster;

pub use combat::{
    Combat, CombatEvent, CombatLog, CombatPhase, Side, TurnRecord, apply_damage, calculate_damage,
};
pub use combatant::{BaseStats, Combatant};
pub use config::ArenaConfig;
pub use element::{EFFECTIVENESS_TABLE, Effectiveness, ElementalType, effectiveness, multiplier};
pub use error::{ArenaError, CombatError, ErrorSeverity, RosterError, StatKind};
pub use roster::{CombatantFilter, Roster};
