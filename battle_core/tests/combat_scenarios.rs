//! Integration test: worked examples from the battle guide, end to end

use battle_core::prelude::*;
use battle_core::config::{CriticalConstants, DamageConstants, DodgeConstants};
use battle_core::{base_damage, critical_rate, defense::base_dodge_rate};

#[test]
fn strong_hit_example() {
    // 1500 attack vs 1200 defense: effective 840, base 1320, variance 93.75
    let range = base_damage(1500, 1200, &DamageConstants::default());
    assert_eq!(range, DamageRange { min: 1226, max: 1414, avg: 1320 });
}

#[test]
fn weak_hit_example() {
    // 1000 attack vs 1286 defense: effective ~900, below the 1.14 breakpoint
    let range = base_damage(1000, 1286, &DamageConstants::default());
    assert_eq!(range.min, 1);
    assert_eq!(range.max, 63);
}

#[test]
fn critical_rate_example() {
    // (305 - 150) / 3.5 = 44.29 -> sqrt * 100 = 665 basis points = 6.65%
    assert_eq!(critical_rate(305, 150, &CriticalConstants::default()), 665);
}

#[test]
fn dodge_cap_example() {
    // sqrt(100 / 0.02) + 20 luck = 90.7 -> capped at 75%
    let rate = base_dodge_rate(150, 250, 20.0, &DodgeConstants::default());
    assert!((rate - 75.0).abs() < f64::EPSILON);
}

#[test]
fn mount_blend_example() {
    let rider = CombatantProfile::new(140, 1500, 0, 0);
    let mount = MountProfile::new(1000, 0, 0, 0);
    let defender = CombatantProfile::new(140, 0, 0, 0);

    let melee = resolve(&rider, Some(&mount), &defender, None, WeaponClass::Melee);
    let ranged = resolve(&rider, Some(&mount), &defender, None, WeaponClass::Ranged);
    assert_eq!(melee.attacker.attack, 2000);
    assert_eq!(ranged.attacker.attack, 1900);
}

#[test]
fn single_element_bonus_values() {
    let calculator = BattleCalculator::new();
    let constants = calculator.constants();

    for &atk in Element::all() {
        for &def in Element::all() {
            let value = battle_core::attribute_bonus(
                &ElementalComposition::single(atk),
                &ElementalComposition::single(def),
                &constants.affinity,
            );
            let snapped = [0.6, 1.0, 1.5]
                .iter()
                .any(|expected| (value - expected).abs() < 1e-9);
            assert!(snapped, "{atk} vs {def} gave {value}");
        }
    }
}

#[test]
fn full_report_with_mounts_and_elements() {
    let attacker = CombatantProfile::new(140, 1300, 700, 320)
        .with_elemental(ElementalComposition::new(0, 0, 10, 0).unwrap());
    let defender = CombatantProfile::new(120, 900, 1000, 260)
        .with_elemental(ElementalComposition::new(0, 0, 0, 10).unwrap());
    let attacker_mount = MountProfile::new(600, 400, 280, 500);
    let defender_mount = MountProfile::new(500, 700, 240, 600);

    let outcome = resolve(
        &attacker,
        Some(&attacker_mount),
        &defender,
        Some(&defender_mount),
        WeaponClass::Melee,
    );

    // Fire beats wind
    assert!((outcome.attribute_bonus - 1.5).abs() < 1e-9);
    // 1300 * 0.8 + 600 * 0.8 = 1520
    assert_eq!(outcome.attacker.attack, 1520);
    // 1000 * 0.7 + 700 * 0.3 = 910
    assert_eq!(outcome.defender.defense, 910);
    assert_eq!(outcome.regime, DamageRegime::Strong);

    // (1520 - 637) * 2 = 1766 base avg, x1.5 = 2649
    assert_eq!(outcome.base.avg, 1766);
    assert_eq!(outcome.normal.avg, 2649);

    // 637 * (140 / 120) * 0.5 = 371.58 on top
    assert_eq!(outcome.critical.avg, 3021);
    assert!(outcome.critical.min >= outcome.normal.min);
}

#[test]
fn ranged_dodge_can_exceed_cap() {
    let attacker = CombatantProfile::new(100, 1000, 500, 10);
    let defender = CombatantProfile::new(100, 500, 500, 400);
    let outcome = resolve(&attacker, None, &defender, None, WeaponClass::Ranged);

    assert!((outcome.dodge_rate - 95.0).abs() < f64::EPSILON);
    assert!(outcome.dodge_exceeds_cap());
}

#[test]
fn inference_scenarios_for_observed_hit() {
    let mine = ElementalComposition::single(Element::Water);
    let scenarios = infer(1500, &mine, 1320, 0);

    let labels: Vec<ScenarioLabel> = scenarios.iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        vec![ScenarioLabel::Favorable, ScenarioLabel::Unfavorable, ScenarioLabel::Neutral]
    );
    assert_eq!(scenarios[0].opponent_label(), "Fire 10");
    assert_eq!(scenarios[1].opponent_label(), "Earth 10");
    assert_eq!(scenarios[2].opponent_label(), "Water 10");
}

#[test]
fn inference_recovers_mounted_opponent() {
    let mine = ElementalComposition::single(Element::Earth);
    let attacker = CombatantProfile::new(140, 2400, 0, 0).with_elemental(mine);
    let opponent = CombatantProfile::new(140, 0, 1400, 0)
        .with_elemental(ElementalComposition::single(Element::Water));
    let opponent_mount = MountProfile::new(0, 900, 0, 0);

    let outcome = resolve(&attacker, None, &opponent, Some(&opponent_mount), WeaponClass::Melee);
    let scenarios = infer(2400, &mine, outcome.normal.avg, opponent_mount.defense);

    let favorable = scenarios
        .iter()
        .find(|s| s.label == ScenarioLabel::Favorable)
        .expect("favorable scenario solvable");
    assert_eq!(favorable.opponent, ElementalComposition::single(Element::Water));
    assert!((favorable.estimated_defense - 1400).abs() <= 1);
}
