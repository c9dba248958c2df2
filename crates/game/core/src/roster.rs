//! Roster of known combatants with field-based search.
//!
//! Searches are linear scans; rosters are expected to hold a few dozen entries.

use crate::combatant::Combatant;
use crate::element::ElementalType;
use crate::error::RosterError;

/// Search criteria for [`Roster::search`].
///
/// Every field that is set must match exactly. An empty filter matches all
/// combatants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombatantFilter {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub element: Option<ElementalType>,
    pub attack: Option<f64>,
    pub defense: Option<f64>,
    pub speed: Option<f64>,
    pub health: Option<f64>,
}

impl CombatantFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: ElementalType) -> Self {
        self.element = Some(element);
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = Some(attack);
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: f64) -> Self {
        self.defense = Some(defense);
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }

    /// Returns true if `combatant` satisfies every set criterion.
    pub fn matches(&self, combatant: &Combatant) -> bool {
        fn check<T: PartialEq>(wanted: Option<&T>, actual: &T) -> bool {
            wanted.is_none_or(|wanted| wanted == actual)
        }

        self.name.as_deref().is_none_or(|name| name == combatant.name())
            && check(self.weight.as_ref(), &combatant.weight())
            && check(self.height.as_ref(), &combatant.height())
            && check(self.element.as_ref(), &combatant.element())
            && check(self.attack.as_ref(), &combatant.attack())
            && check(self.defense.as_ref(), &combatant.defense())
            && check(self.speed.as_ref(), &combatant.speed())
            && check(self.health.as_ref(), &combatant.health())
    }
}

/// Ordered collection of combatants.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, combatant: Combatant) {
        tracing::debug!(name = combatant.name(), element = %combatant.element(), "added to roster");
        self.combatants.push(combatant);
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    /// First combatant with this exact name.
    pub fn get(&self, name: &str) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.name() == name)
    }

    /// Mutable access to two different combatants at once, in the order asked.
    ///
    /// # Errors
    ///
    /// - [`RosterError::SameCombatant`] if both names resolve to the same entry
    /// - [`RosterError::NotFound`] if either name is unknown
    pub fn get_pair_mut(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<(&mut Combatant, &mut Combatant), RosterError> {
        let i = self.position(first)?;
        let j = self.position(second)?;
        if i == j {
            return Err(RosterError::SameCombatant(first.to_owned()));
        }

        if i < j {
            let (head, tail) = self.combatants.split_at_mut(j);
            Ok((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.combatants.split_at_mut(i);
            Ok((&mut tail[0], &mut head[j]))
        }
    }

    /// All combatants matching `filter`, in roster order.
    pub fn search(&self, filter: &CombatantFilter) -> Vec<&Combatant> {
        self.combatants.iter().filter(|c| filter.matches(c)).collect()
    }

    /// One summary line per combatant, in roster order.
    pub fn summary(&self) -> Vec<String> {
        self.combatants.iter().map(ToString::to_string).collect()
    }

    fn position(&self, name: &str) -> Result<usize, RosterError> {
        self.combatants
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| RosterError::NotFound(name.to_owned()))
    }
}

impl FromIterator<Combatant> for Roster {
    fn from_iter<I: IntoIterator<Item = Combatant>>(iter: I) -> Self {
        Self {
            combatants: iter.into_iter().collect(),
        }
    }
}
