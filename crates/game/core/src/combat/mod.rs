//! Combat resolution system.
//!
//! # Architecture
//!
//! - **Pure functions**: [`calculate_damage`] and [`apply_damage`] have no side effects
//! - **State machine**: [`Combat`] alternates attacker/defender roles and is the
//!   only place where combatant health changes
//! - **Observable**: every turn is appended to a [`CombatLog`] and emitted
//!   through `tracing`
//!
//! # Core Types
//!
//! - `Combat`: runs turns until one side reaches zero health
//! - `TurnRecord`: outcome of one attack
//! - `CombatLog`: ordered turn records plus the final victory event

pub mod damage;
pub mod engine;
pub mod result;

pub use damage::{apply_damage, calculate_damage};
pub use engine::{Combat, CombatPhase};
pub use result::{CombatEvent, CombatLog, Side, TurnRecord};
