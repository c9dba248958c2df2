//! Damage calculation and application.

use crate::combatant::Combatant;
use crate::config::ArenaConfig;
use crate::element::effectiveness;
use crate::error::{CombatError, StatKind};

/// Calculate damage from one attack.
///
/// # Formula
///
/// ```text
/// damage = base_power * (attack / defense) * effectiveness(attacker, defender)
/// ```
///
/// `base_power` comes from [`ArenaConfig`] (default: 50).
///
/// # Errors
///
/// - [`CombatError::InvalidConfig`] when `base_power` is not a strictly
///   positive finite number.
/// - [`CombatError::InvalidStat`] when the attacker's attack or the
///   defender's defense is not a strictly positive finite number.
///
/// Damage is therefore always strictly positive: health only goes down and
/// every combat ends.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    config: &ArenaConfig,
) -> Result<f64, CombatError> {
    if !(config.base_power.is_finite() && config.base_power > 0.0) {
        tracing::warn!(base_power = config.base_power, "rejecting non-positive base power");
        return Err(CombatError::InvalidConfig {
            field: "base_power".to_owned(),
            value: config.base_power,
        });
    }
    ensure_positive(attacker, StatKind::Attack, attacker.attack())?;
    ensure_positive(defender, StatKind::Defense, defender.defense())?;

    let multiplier = effectiveness(attacker.element(), defender.element()).multiplier();
    Ok(config.base_power * (attacker.attack() / defender.defense()) * multiplier)
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: f64, damage: f64) -> f64 {
    (current_hp - damage).max(0.0)
}

fn ensure_positive(combatant: &Combatant, stat: StatKind, value: f64) -> Result<(), CombatError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    tracing::warn!(combatant = combatant.name(), %stat, value, "rejecting non-positive stat");
    Err(CombatError::InvalidStat {
        combatant: combatant.name().to_owned(),
        stat,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::BaseStats;
    use crate::element::ElementalType;

    fn make(element: ElementalType, attack: f64, defense: f64) -> Combatant {
        Combatant::new("c", element, BaseStats::new(attack, defense, 10.0, 100.0))
    }

    #[test]
    fn neutral_damage_is_ratio_times_base_power() {
        let a = make(ElementalType::Electric, 60.0, 40.0);
        let d = make(ElementalType::Fire, 40.0, 30.0);
        let dmg = calculate_damage(&a, &d, &ArenaConfig::default()).unwrap();
        assert!((dmg - 100.0).abs() < 1e-9);
    }

    #[test]
    fn effectiveness_scales_damage() {
        let fire = make(ElementalType::Fire, 100.0, 50.0);
        let grass = make(ElementalType::Grass, 30.0, 1.0);
        let water = make(ElementalType::Water, 30.0, 1.0);
        let config = ArenaConfig::default();

        assert_eq!(calculate_damage(&fire, &grass, &config).unwrap(), 10_000.0);
        assert_eq!(calculate_damage(&fire, &water, &config).unwrap(), 2_500.0);
    }

    #[test]
    fn base_power_is_configurable() {
        let a = make(ElementalType::Electric, 10.0, 10.0);
        let d = make(ElementalType::Electric, 10.0, 10.0);
        let config = ArenaConfig::new().with_base_power(5.0);
        assert_eq!(calculate_damage(&a, &d, &config).unwrap(), 5.0);
    }

    #[test]
    fn non_positive_base_power_is_rejected() {
        let a = make(ElementalType::Electric, 10.0, 10.0);
        let d = make(ElementalType::Electric, 10.0, 10.0);
        for power in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            let config = ArenaConfig::new().with_base_power(power);
            let err = calculate_damage(&a, &d, &config).unwrap_err();
            assert!(
                matches!(err, CombatError::InvalidConfig { ref field, .. } if field == "base_power"),
                "base_power = {power}"
            );
        }
    }

    #[test]
    fn zero_defense_is_rejected() {
        let a = make(ElementalType::Fire, 10.0, 10.0);
        let d = make(ElementalType::Grass, 10.0, 0.0);
        let err = calculate_damage(&a, &d, &ArenaConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CombatError::InvalidStat {
                stat: StatKind::Defense,
                ..
            }
        ));
    }

    #[test]
    fn negative_or_nan_attack_is_rejected() {
        let d = make(ElementalType::Grass, 10.0, 10.0);
        for attack in [0.0, -3.0, f64::NAN] {
            let a = make(ElementalType::Fire, attack, 10.0);
            let err = calculate_damage(&a, &d, &ArenaConfig::default()).unwrap_err();
            assert!(matches!(
                err,
                CombatError::InvalidStat {
                    stat: StatKind::Attack,
                    ..
                }
            ));
        }
    }

    #[test]
    fn apply_damage_never_goes_negative() {
        assert_eq!(apply_damage(50.0, 20.0), 30.0);
        assert_eq!(apply_damage(50.0, 50.0), 0.0);
        assert_eq!(apply_damage(50.0, 10_000.0), 0.0);
    }
}
