//! Elemental typing and the effectiveness table.
//!
//! Every combatant carries exactly one [`ElementalType`]. When it attacks, the
//! pair `(attacker, defender)` is looked up in [`EFFECTIVENESS_TABLE`] to get a
//! damage multiplier. The table only lists the special-cased pairs; anything
//! not listed is [`Effectiveness::Neutral`].
//!
//! The table is intentionally asymmetric: `Fire → Water` is not very effective
//! while `Water → Fire` is not listed and therefore neutral.

/// Elemental category of a combatant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ElementalType {
    Fire,
    Water,
    Grass,
    Electric,
}

/// Outcome of an effectiveness lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Effectiveness {
    /// Doubles damage.
    SuperEffective,
    /// No modifier.
    #[default]
    Neutral,
    /// Halves damage.
    NotVeryEffective,
}

impl Effectiveness {
    /// Damage multiplier applied by this effectiveness.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::SuperEffective => 2.0,
            Self::Neutral => 1.0,
            Self::NotVeryEffective => 0.5,
        }
    }
}

/// Special-cased `(attacker, defender)` pairs.
///
/// Neutral rows are kept where they are part of the published rules so the
/// table reads the same as the rules sheet.
pub const EFFECTIVENESS_TABLE: &[((ElementalType, ElementalType), Effectiveness)] = {
    use Effectiveness::*;
    use ElementalType::*;
    &[
        ((Fire, Grass), SuperEffective),
        ((Fire, Water), NotVeryEffective),
        ((Fire, Electric), Neutral),
        ((Water, Grass), NotVeryEffective),
        ((Water, Electric), NotVeryEffective),
        ((Grass, Water), SuperEffective),
        ((Grass, Fire), NotVeryEffective),
        ((Grass, Electric), Neutral),
    ]
};

/// Looks up how effective an attack of `attacker` type is against `defender`.
///
/// Total over every pair of [`ElementalType`]; unlisted pairs are neutral.
pub fn effectiveness(attacker: ElementalType, defender: ElementalType) -> Effectiveness {
    EFFECTIVENESS_TABLE
        .iter()
        .find(|((atk, def), _)| *atk == attacker && *def == defender)
        .map(|(_, effectiveness)| *effectiveness)
        .unwrap_or_default()
}

/// Shorthand for `effectiveness(attacker, defender).multiplier()`.
pub fn multiplier(attacker: ElementalType, defender: ElementalType) -> f64 {
    effectiveness(attacker, defender).multiplier()
}
