//! Critical hits - Rate from agility, bonus from defense and level
//!
//! Rate is in basis points (10000 = 100%):
//! `floor(clamp(sqrt((big - small) / 3.5) * ratio * 100, 1, 10000))`,
//! where `ratio` is 1.0 when the attacker is at least as agile as the
//! defender and `small / big` otherwise.
//!
//! A critical hit is not a multiplier. It adds half of the defender's
//! effective defense, scaled by the attacker/defender level ratio:
//! `normal + effective_defense * (attacker_level / defender_level) * 0.5`

use super::range::round_damage;
use crate::config::CriticalConstants;

/// Critical rate in basis points
pub fn critical_rate(attacker_agility: u32, defender_agility: u32, constants: &CriticalConstants) -> u32 {
    let big = attacker_agility.max(defender_agility) as f64;
    let small = attacker_agility.min(defender_agility) as f64;

    let ratio = if attacker_agility >= defender_agility {
        1.0
    } else if big <= 0.0 {
        0.0
    } else {
        small / big
    };

    let work = (big - small) / constants.divisor;
    if work <= 0.0 || !work.is_finite() {
        return 0;
    }

    let rate = work.sqrt() * ratio * 100.0;
    rate.max(constants.min_rate).min(constants.max_rate).floor() as u32
}

/// Damage of a critical hit given the normal damage it replaces
pub fn critical_damage(
    normal_damage: u32,
    defender_effective_defense: f64,
    attacker_level: u32,
    defender_level: u32,
    constants: &CriticalConstants,
) -> u32 {
    let level_ratio = attacker_level as f64 / defender_level.max(1) as f64;
    let bonus = (defender_effective_defense * level_ratio * constants.defense_factor).max(0.0);
    round_damage(normal_damage as f64 + bonus)
}
