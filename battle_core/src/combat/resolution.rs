//! Combat resolution - Run every model for one attacker/defender pairing

use super::result::CombatOutcome;
use crate::affinity::attribute_bonus;
use crate::config::CombatConstants;
use crate::damage::{
    apply_attribute_bonus, base_damage, critical_damage, critical_rate, damage_regime,
    effective_defense,
};
use crate::defense::dodge_rate;
use crate::mount::blend;
use crate::types::{CombatantProfile, MountProfile, WeaponClass};

/// Resolve an attack using the shipped constants
pub fn resolve(
    attacker: &CombatantProfile,
    attacker_mount: Option<&MountProfile>,
    defender: &CombatantProfile,
    defender_mount: Option<&MountProfile>,
    weapon: WeaponClass,
) -> CombatOutcome {
    resolve_with_constants(
        attacker,
        attacker_mount,
        defender,
        defender_mount,
        weapon,
        &CombatConstants::default(),
    )
}

/// Resolve an attack with explicit constants
///
/// Pipeline:
/// 1. Blend both sides with their mounts (attack blend follows `weapon`)
/// 2. Elemental multiplier from the riders' compositions
/// 3. Base range from blended attack vs blended defense
/// 4. Critical and dodge rates from blended agility (defender luck 0)
/// 5. Normal range = base range × multiplier, each bound rounded
/// 6. Critical range from the normal range, defender effective defense and levels
pub fn resolve_with_constants(
    attacker: &CombatantProfile,
    attacker_mount: Option<&MountProfile>,
    defender: &CombatantProfile,
    defender_mount: Option<&MountProfile>,
    weapon: WeaponClass,
    constants: &CombatConstants,
) -> CombatOutcome {
    let attacker = blend(attacker, attacker_mount, weapon, &constants.blend);
    let defender = blend(defender, defender_mount, weapon, &constants.blend);

    let bonus = attribute_bonus(&attacker.elemental, &defender.elemental, &constants.affinity);
    let regime = damage_regime(attacker.attack, defender.defense, &constants.damage);
    let base = base_damage(attacker.attack, defender.defense, &constants.damage);
    let crit_rate = critical_rate(attacker.agility, defender.agility, &constants.critical);
    let dodge = dodge_rate(attacker.agility, defender.agility, 0.0, weapon, &constants.dodge);

    let normal = apply_attribute_bonus(&base, bonus);
    let defender_effective = effective_defense(defender.defense, &constants.damage);
    let critical = normal.map(|damage| {
        critical_damage(
            damage,
            defender_effective,
            attacker.level,
            defender.level,
            &constants.critical,
        )
    });

    tracing::debug!(
        %weapon,
        attack = attacker.attack,
        defense = defender.defense,
        bonus,
        crit_rate,
        dodge,
        normal_avg = normal.avg,
        critical_avg = critical.avg,
        "resolved combat"
    );

    CombatOutcome {
        weapon,
        attacker,
        defender,
        attribute_bonus: bonus,
        critical_rate: crit_rate,
        dodge_rate: dodge,
        dodge_cap: constants.dodge.cap_percent,
        regime,
        base,
        normal,
        critical,
    }
}
