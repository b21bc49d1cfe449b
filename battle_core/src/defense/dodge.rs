//! Dodge - Chance for the defender to evade a hit
//!
//! Formula (percent):
//! `min(sqrt((big - small) / K) * ratio + luck, 75)`
//!
//! - `K` is 0.02
//! - `ratio` is 1.0 when the defender is at least as agile as the attacker,
//!   `small / big` otherwise
//! - once an agility gap exists the rate never reaches zero (floored at 0.01%)
//!
//! Ranged attacks are easier to evade: +20 points on top, applied after the
//! 75% cap, so the reported ranged rate can exceed 75.
//!
//! Examples:
//! - 150 attacker vs 250 defender agility, 20 luck: sqrt(5000) + 20 = 90.7 -> 75
//! - 180 attacker vs 200 defender agility: sqrt(1000) = 31.6
//! - 250 attacker vs 150 defender agility: sqrt(5000) * 0.6 = 42.4

use crate::config::DodgeConstants;
use crate::types::WeaponClass;

/// Dodge rate in percent before the weapon-class bonus, within `0..=cap`
pub fn base_dodge_rate(
    attacker_agility: u32,
    defender_agility: u32,
    defender_luck: f64,
    constants: &DodgeConstants,
) -> f64 {
    let big = attacker_agility.max(defender_agility) as f64;
    let small = attacker_agility.min(defender_agility) as f64;

    let ratio = if defender_agility >= attacker_agility {
        1.0
    } else if big <= 0.0 {
        0.0
    } else {
        small / big
    };

    let work = (big - small) / constants.k;
    if work <= 0.0 || !work.is_finite() {
        return 0.0;
    }

    // Computed in hundredths of a percent
    let mut per = (work.sqrt() * ratio + defender_luck) * 100.0;
    let cap = constants.cap_percent * 100.0;
    if per > cap {
        per = cap;
    }
    if per <= 0.0 {
        per = 1.0;
    }

    per / 100.0
}

/// Dodge rate in percent including the ranged bonus
pub fn dodge_rate(
    attacker_agility: u32,
    defender_agility: u32,
    defender_luck: f64,
    weapon: WeaponClass,
    constants: &DodgeConstants,
) -> f64 {
    let base = base_dodge_rate(attacker_agility, defender_agility, defender_luck, constants);
    match weapon {
        WeaponClass::Melee => base,
        WeaponClass::Ranged => base + constants.ranged_bonus,
    }
}
