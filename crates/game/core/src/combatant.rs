//! Combatant records.
//!
//! A [`Combatant`] is built once with fixed [`BaseStats`]. After that, the only
//! field that changes is `health`, and only through the combat engine.

use core::fmt;

use crate::element::ElementalType;

/// Fixed combat stats of a combatant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub max_health: f64,
}

impl BaseStats {
    pub const fn new(attack: f64, defense: f64, speed: f64, max_health: f64) -> Self {
        Self {
            attack,
            defense,
            speed,
            max_health,
        }
    }
}

/// An entity that can take part in a [`Combat`](crate::combat::Combat).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CombatantRecord"))]
pub struct Combatant {
    name: String,
    element: ElementalType,
    weight: f64,
    height: f64,
    stats: BaseStats,
    health: f64,
}

/// Serialized form of a [`Combatant`]; goes through the same health rules
/// as the builder.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CombatantRecord {
    name: String,
    element: ElementalType,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    height: f64,
    stats: BaseStats,
    #[serde(default)]
    health: Option<f64>,
}

#[cfg(feature = "serde")]
impl From<CombatantRecord> for Combatant {
    fn from(record: CombatantRecord) -> Self {
        let combatant = Combatant::new(record.name, record.element, record.stats)
            .with_physique(record.weight, record.height);
        match record.health {
            Some(health) => combatant.with_health(health),
            None => combatant,
        }
    }
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(name: impl Into<String>, element: ElementalType, stats: BaseStats) -> Self {
        Self {
            name: name.into(),
            element,
            weight: 0.0,
            height: 0.0,
            health: stats.max_health.max(0.0),
            stats,
        }
    }

    /// Sets weight (kg) and height (m).
    #[must_use]
    pub fn with_physique(mut self, weight: f64, height: f64) -> Self {
        self.weight = weight;
        self.height = height;
        self
    }

    /// Overrides the starting health. Negative values are floored at zero.
    #[must_use]
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health.max(0.0);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> ElementalType {
        self.element
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn attack(&self) -> f64 {
        self.stats.attack
    }

    pub fn defense(&self) -> f64 {
        self.stats.defense
    }

    pub fn speed(&self) -> f64 {
        self.stats.speed
    }

    pub fn max_health(&self) -> f64 {
        self.stats.max_health
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    /// A defeated combatant takes no further actions.
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Resets health to its maximum.
    ///
    /// Combats mutate health in place, so reusing a combatant carries the
    /// damage over unless this is called in between.
    pub fn restore(&mut self) {
        self.health = self.stats.max_health.max(0.0);
    }

    /// Subtracts `amount` from health, flooring at zero. Returns the new health.
    pub(crate) fn take_damage(&mut self, amount: f64) -> f64 {
        self.health = crate::combat::apply_damage(self.health, amount);
        self.health
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Type: {}, Weight: {}, Height: {}, Attack: {}, Defense: {}, Speed: {}, HP: {}",
            self.name,
            self.element,
            self.weight,
            self.height,
            self.stats.attack,
            self.stats.defense,
            self.stats.speed,
            self.health,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charmander() -> Combatant {
        Combatant::new(
            "Charmander",
            ElementalType::Fire,
            BaseStats::new(52.0, 43.0, 65.0, 100.0),
        )
        .with_physique(8.5, 0.6)
    }

    #[test]
    fn starts_at_max_health() {
        let c = charmander();
        assert_eq!(c.health(), 100.0);
        assert!(!c.is_defeated());
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut c = charmander();
        assert_eq!(c.take_damage(30.0), 70.0);
        assert_eq!(c.take_damage(500.0), 0.0);
        assert!(c.is_defeated());

        c.restore();
        assert_eq!(c.health(), 100.0);
    }

    #[test]
    fn negative_starting_health_is_floored() {
        let c = charmander().with_health(-5.0);
        assert_eq!(c.health(), 0.0);
    }

    #[test]
    fn display_lists_every_field() {
        assert_eq!(
            charmander().to_string(),
            "Name: Charmander, Type: fire, Weight: 8.5, Height: 0.6, Attack: 52, Defense: 43, Speed: 65, HP: 100"
        );
    }
}
