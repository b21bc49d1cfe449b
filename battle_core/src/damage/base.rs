//! Base damage - Attack against effective defense
//!
//! Effective defense is `defense * 0.7`. The hit falls into one of three
//! regimes depending on how attack compares to it:
//!
//! 1. Strong (`attack >= effective * 1.14`):
//!    `base = (attack - effective) * 2.0`, spread `attack * 0.0625` either side
//! 2. Weak (`effective <= attack < effective * 1.14`):
//!    `1..=attack * 0.0625`, average half of that
//! 3. No damage (`attack < effective`): always 1
//!
//! Examples:
//! - 1500 attack vs 1200 defense: strong, 1226..=1414, avg 1320
//! - 1000 attack vs 1286 defense: weak, 1..=63
//! - 500 attack vs 1000 defense: no damage

use super::range::{round_damage, DamageRange};
use crate::config::DamageConstants;
use serde::{Deserialize, Serialize};

/// Which branch of the damage formula a hit falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageRegime {
    Strong,
    Weak,
    NoDamage,
}

/// Share of the defense stat that mitigates damage
pub fn effective_defense(defense: u32, constants: &DamageConstants) -> f64 {
    defense as f64 * constants.defense_factor
}

/// Regime for an attack against a defense stat
pub fn damage_regime(attack: u32, defense: u32, constants: &DamageConstants) -> DamageRegime {
    let attack = attack as f64;
    let effective = effective_defense(defense, constants);

    if attack >= effective * constants.strong_breakpoint {
        DamageRegime::Strong
    } else if attack >= effective {
        DamageRegime::Weak
    } else {
        DamageRegime::NoDamage
    }
}

/// Damage range before the elemental multiplier
pub fn base_damage(attack: u32, defense: u32, constants: &DamageConstants) -> DamageRange {
    let regime = damage_regime(attack, defense, constants);
    tracing::trace!(attack, defense, ?regime, "base damage regime");

    let attack_f = attack as f64;
    match regime {
        DamageRegime::Strong => {
            let base = (attack_f - effective_defense(defense, constants)) * constants.damage_rate;
            let variance = attack_f * constants.variance;
            let min = (base - variance).round().max(1.0);
            DamageRange::new(
                round_damage(min),
                round_damage(base),
                round_damage(base + variance),
            )
        }
        DamageRegime::Weak => {
            let max = attack_f * constants.variance;
            DamageRange::new(1, round_damage(max / 2.0), round_damage(max))
        }
        DamageRegime::NoDamage => DamageRange::no_damage(),
    }
}

/// Final damage: the base range scaled by the elemental multiplier
pub fn apply_attribute_bonus(base: &DamageRange, attribute_bonus: f64) -> DamageRange {
    base.scaled(attribute_bonus)
}

/// Effective defense that turns `attack` into `damage` on a strong hit
///
/// Solves `damage = (attack - effective) * rate * bonus` for `effective`.
/// Returns `None` when the multiplier leaves nothing to solve against.
pub fn effective_defense_for_damage(
    attack: u32,
    damage: u32,
    attribute_bonus: f64,
    constants: &DamageConstants,
) -> Option<f64> {
    let divisor = constants.damage_rate * attribute_bonus;
    if divisor <= 0.0 || !divisor.is_finite() {
        return None;
    }
    Some(attack as f64 - damage as f64 / divisor)
}
