//! Turn records and the combat log.

use core::fmt;

use crate::element::Effectiveness;

/// One of the two combatants in a [`Combat`](super::Combat), by construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The other side.
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Result of a single turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,
    pub attacker: String,
    pub defender: String,
    pub effectiveness: Effectiveness,
    pub damage: f64,
    /// Defender's health after the hit.
    pub defender_health: f64,
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attacks {}. HP of {}: {:.2}",
            self.attacker, self.defender, self.defender, self.defender_health
        )
    }
}

/// Entry of a [`CombatLog`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    Turn(TurnRecord),
    Victory { winner: String, turns: u32 },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turn(record) => record.fmt(f),
            Self::Victory { winner, .. } => write!(f, "{winner} has won the combat."),
        }
    }
}

/// Ordered record of everything a combat emitted.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    events: Vec<CombatEvent>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Turn records only, in order.
    pub fn turns(&self) -> impl Iterator<Item = &TurnRecord> {
        self.events.iter().filter_map(|event| match event {
            CombatEvent::Turn(record) => Some(record),
            CombatEvent::Victory { .. } => None,
        })
    }

    /// Rendered messages, one per event.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}
