//! CombatOutcome - Full damage report for one attacker/defender pairing

use crate::damage::{DamageRange, DamageRegime};
use crate::types::{CombatantProfile, WeaponClass};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of resolving an attack with a given weapon class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub weapon: WeaponClass,

    // === Effective Stats (after mount blending) ===
    pub attacker: CombatantProfile,
    pub defender: CombatantProfile,

    // === Modifiers ===
    /// Elemental multiplier applied to the base range
    pub attribute_bonus: f64,
    /// Critical rate in basis points (10000 = 100%)
    pub critical_rate: u32,
    /// Dodge rate in percent, including the ranged bonus
    pub dodge_rate: f64,
    /// Dodge ceiling the rate was capped at before the ranged bonus
    pub dodge_cap: f64,

    // === Damage ===
    pub regime: DamageRegime,
    /// Range before the elemental multiplier
    pub base: DamageRange,
    /// Range of a normal hit
    pub normal: DamageRange,
    /// Range of a critical hit
    pub critical: DamageRange,
}

/// A single sampled hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "damage", rename_all = "snake_case")]
pub enum HitRoll {
    Dodged,
    Normal(u32),
    Critical(u32),
}

impl HitRoll {
    /// Damage dealt (0 when dodged)
    pub fn damage(&self) -> u32 {
        match self {
            HitRoll::Dodged => 0,
            HitRoll::Normal(damage) | HitRoll::Critical(damage) => *damage,
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, HitRoll::Critical(_))
    }

    pub fn is_dodged(&self) -> bool {
        matches!(self, HitRoll::Dodged)
    }
}

impl CombatOutcome {
    /// Critical rate as a percentage
    pub fn critical_rate_percent(&self) -> f64 {
        self.critical_rate as f64 / 100.0
    }

    /// Chance to crit as a probability
    pub fn critical_chance(&self) -> f64 {
        (self.critical_rate as f64 / 10_000.0).clamp(0.0, 1.0)
    }

    /// Chance the hit is dodged as a probability (saturates at 1.0)
    pub fn dodge_chance(&self) -> f64 {
        (self.dodge_rate / 100.0).clamp(0.0, 1.0)
    }

    /// Whether the ranged bonus pushed the dodge rate past the cap
    pub fn dodge_exceeds_cap(&self) -> bool {
        self.dodge_rate > self.dodge_cap
    }

    /// Average damage per attack accounting for dodge and critical chance
    pub fn expected_damage(&self) -> f64 {
        let crit = self.critical_chance();
        let per_hit = self.normal.avg as f64 * (1.0 - crit) + self.critical.avg as f64 * crit;
        per_hit * (1.0 - self.dodge_chance())
    }

    /// Sample one hit: dodge first, then critical, then a uniform roll in range
    pub fn roll(&self, rng: &mut impl Rng) -> HitRoll {
        if rng.gen::<f64>() < self.dodge_chance() {
            return HitRoll::Dodged;
        }

        if rng.gen::<f64>() < self.critical_chance() {
            HitRoll::Critical(self.critical.sample(rng))
        } else {
            HitRoll::Normal(self.normal.sample(rng))
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!(
                "{} normal {}-{} (avg {})",
                self.weapon, self.normal.min, self.normal.max, self.normal.avg
            ),
            format!(
                "critical {}-{} (avg {})",
                self.critical.min, self.critical.max, self.critical.avg
            ),
            format!("element x{:.2}", self.attribute_bonus),
            format!("crit {:.2}%", self.critical_rate_percent()),
            format!("dodge {:.2}%", self.dodge_rate),
        ];

        match self.regime {
            DamageRegime::Strong => {}
            DamageRegime::Weak => parts.push("below breakpoint".to_string()),
            DamageRegime::NoDamage => parts.push("defense not pierced".to_string()),
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn outcome() -> CombatOutcome {
        CombatOutcome {
            weapon: WeaponClass::Melee,
            attacker: CombatantProfile::default(),
            defender: CombatantProfile::default(),
            attribute_bonus: 1.0,
            critical_rate: 2_500,
            dodge_rate: 20.0,
            dodge_cap: 75.0,
            regime: DamageRegime::Strong,
            base: DamageRange::new(90, 100, 110),
            normal: DamageRange::new(90, 100, 110),
            critical: DamageRange::new(190, 200, 210),
        }
    }

    #[test]
    fn test_chances() {
        let outcome = outcome();
        assert!((outcome.critical_rate_percent() - 25.0).abs() < f64::EPSILON);
        assert!((outcome.critical_chance() - 0.25).abs() < f64::EPSILON);
        assert!((outcome.dodge_chance() - 0.2).abs() < f64::EPSILON);
        assert!(!outcome.dodge_exceeds_cap());
    }

    #[test]
    fn test_expected_damage() {
        // (100 * 0.75 + 200 * 0.25) * 0.8 = 100
        let outcome = outcome();
        assert!((outcome.expected_damage() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_dodge_saturates() {
        let mut outcome = outcome();
        outcome.dodge_rate = 95.0;
        assert!(outcome.dodge_exceeds_cap());
        outcome.dodge_rate = 140.0;
        assert!((outcome.dodge_chance() - 1.0).abs() < f64::EPSILON);
        assert!(outcome.expected_damage().abs() < f64::EPSILON);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let outcome = outcome();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            match outcome.roll(&mut rng) {
                HitRoll::Dodged => {}
                HitRoll::Normal(damage) => assert!(outcome.normal.contains(damage)),
                HitRoll::Critical(damage) => assert!(outcome.critical.contains(damage)),
            }
        }
    }

    #[test]
    fn test_roll_never_dodges_without_rate() {
        let mut outcome = outcome();
        outcome.dodge_rate = 0.0;
        outcome.critical_rate = 0;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            let roll = outcome.roll(&mut rng);
            assert!(!roll.is_dodged());
            assert!(!roll.is_critical());
        }
    }

    #[test]
    fn test_outcome_from_json_rolls_safely() {
        let mut json = serde_json::to_value(outcome()).unwrap();
        json["normal"] = serde_json::json!({"min": 110, "max": 90, "avg": 100});
        let outcome: CombatOutcome = serde_json::from_value(json).unwrap();
        assert!(outcome.normal.min <= outcome.normal.max);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            if let HitRoll::Normal(damage) = outcome.roll(&mut rng) {
                assert!(outcome.normal.contains(damage));
            }
        }
    }

    #[test]
    fn test_summary() {
        let mut outcome = outcome();
        let summary = outcome.summary();
        assert!(summary.contains("normal 90-110"));
        assert!(summary.contains("crit 25.00%"));

        outcome.regime = DamageRegime::Weak;
        assert!(outcome.summary().contains("below breakpoint"));
    }

    #[test]
    fn test_hit_roll_serialization() {
        let json = serde_json::to_string(&HitRoll::Critical(42)).unwrap();
        assert_eq!(json, r#"{"kind":"critical","damage":42}"#);
        assert_eq!(HitRoll::Dodged.damage(), 0);
    }
}
