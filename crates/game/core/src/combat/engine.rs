//! Turn-based combat state machine.

use crate::combatant::Combatant;
use crate::config::ArenaConfig;
use crate::element::effectiveness;
use crate::error::CombatError;

use super::damage::calculate_damage;
use super::result::{CombatEvent, CombatLog, Side, TurnRecord};

/// Lifecycle of a [`Combat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    /// Both combatants have health left.
    InProgress,
    /// The combat is over and `winner` survived it.
    Finished { winner: Side },
}

/// A one-on-one combat between two borrowed combatants.
///
/// The combat holds the only mutable borrows of both combatants for its
/// lifetime and is the sole writer of their `health`. Damage is applied in
/// place: a combatant reused in a later combat starts where this one left it
/// (see [`Combatant::restore`]).
///
/// Roles alternate every turn, starting with the first combatant as attacker.
#[derive(Debug)]
pub struct Combat<'a> {
    first: &'a mut Combatant,
    second: &'a mut Combatant,
    config: ArenaConfig,
    attacker: Side,
    phase: CombatPhase,
    turns: u32,
    log: CombatLog,
}

impl<'a> Combat<'a> {
    /// Creates a combat where `first` attacks first.
    pub fn new(first: &'a mut Combatant, second: &'a mut Combatant) -> Self {
        Self::with_config(first, second, ArenaConfig::default())
    }

    /// Creates a combat with explicit tuning parameters.
    ///
    /// No validation is performed. If either combatant is already defeated the
    /// combat is finished on the spot and the *first* combatant is recorded as
    /// winner, even when it is the defeated one. Callers relying on a sensible
    /// winner must check health before constructing the combat.
    pub fn with_config(
        first: &'a mut Combatant,
        second: &'a mut Combatant,
        config: ArenaConfig,
    ) -> Self {
        let phase = if first.is_defeated() || second.is_defeated() {
            tracing::debug!(
                first = first.name(),
                first_hp = first.health(),
                second = second.name(),
                second_hp = second.health(),
                "combatant already defeated, combat finished before the first turn"
            );
            CombatPhase::Finished {
                winner: Side::First,
            }
        } else {
            CombatPhase::InProgress
        };

        Self {
            first,
            second,
            config,
            attacker: Side::First,
            phase,
            turns: 0,
            log: CombatLog::new(),
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, CombatPhase::Finished { .. })
    }

    /// Number of turns played so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::First => &*self.first,
            Side::Second => &*self.second,
        }
    }

    /// Side attacking on the next turn.
    pub fn attacker(&self) -> Side {
        self.attacker
    }

    /// The winner, once the combat is finished.
    pub fn winner(&self) -> Option<&Combatant> {
        match self.phase {
            CombatPhase::Finished { winner } => Some(self.combatant(winner)),
            CombatPhase::InProgress => None,
        }
    }

    /// Plays one turn.
    ///
    /// Returns `Ok(None)` without doing anything once the combat is finished.
    ///
    /// # Errors
    ///
    /// - [`CombatError::InvalidStat`] if the attack or defense used this turn
    ///   is not strictly positive. No damage is applied.
    /// - [`CombatError::TurnLimitExceeded`] if `max_turns` turns were already
    ///   played without a winner.
    pub fn step(&mut self) -> Result<Option<TurnRecord>, CombatError> {
        if self.is_finished() {
            return Ok(None);
        }
        if self.turns >= self.config.max_turns {
            return Err(CombatError::TurnLimitExceeded {
                limit: self.config.max_turns,
            });
        }

        let (attacker, defender) = match self.attacker {
            Side::First => (&*self.first, &mut *self.second),
            Side::Second => (&*self.second, &mut *self.first),
        };

        let damage = calculate_damage(attacker, defender, &self.config)?;
        let effectiveness = effectiveness(attacker.element(), defender.element());
        tracing::debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            %effectiveness,
            damage,
            "resolving attack"
        );

        let defender_health = defender.take_damage(damage);
        let record = TurnRecord {
            turn: self.turns + 1,
            attacker: attacker.name().to_owned(),
            defender: defender.name().to_owned(),
            effectiveness,
            damage,
            defender_health,
        };

        self.turns += 1;
        tracing::info!(turn = record.turn, "{record}");
        self.log.push(CombatEvent::Turn(record.clone()));

        if defender_health <= 0.0 {
            let winner = self.attacker;
            self.phase = CombatPhase::Finished { winner };
            let event = CombatEvent::Victory {
                winner: record.attacker.clone(),
                turns: self.turns,
            };
            tracing::info!(turns = self.turns, "{event}");
            self.log.push(event);
        } else {
            self.attacker = self.attacker.opponent();
        }

        Ok(Some(record))
    }

    /// Runs the combat to completion and returns the winner.
    ///
    /// The winner is returned with its final health. Calling this on a
    /// finished combat returns the same winner without playing more turns.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Combat::step`].
    pub fn start(&mut self) -> Result<&Combatant, CombatError> {
        loop {
            if let CombatPhase::Finished { winner } = self.phase {
                return Ok(self.combatant(winner));
            }
            self.step()?;
        }
    }
}
