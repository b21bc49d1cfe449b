//! Tuning constants for the combat formulas
//!
//! The named constants are the game's shipped values. [`CombatConstants`]
//! groups them into sections that can be overridden from a TOML file; any
//! field left out of the file falls back to the constant below.

use super::ConfigError;
use serde::{Deserialize, Serialize};

// === Affinity ===

/// Multiplier when the attacking category dominates the defending one
/// (earth → water → fire → wind → earth, and any element against "none")
pub const AFFINITY_ADVANTAGE: f64 = 1.5;
/// Multiplier for the reverse of a dominance step (and "none" attacking an element)
pub const AFFINITY_DISADVANTAGE: f64 = 0.6;
/// Multiplier for every other pairing
pub const AFFINITY_NEUTRAL: f64 = 1.0;
/// Normalizes two 0-100 percentage axes back to a multiplier
pub const AFFINITY_NORMALIZER: f64 = 0.0001;
/// Percentage points contributed by one composition point
pub const AFFINITY_POINT_WEIGHT: f64 = 10.0;

// === Mount blend ===

/// Rider share of defense, agility and vitality while mounted
pub const BLEND_RIDER_SHARE: f64 = 0.7;
/// Mount share of defense, agility and vitality while mounted
pub const BLEND_MOUNT_SHARE: f64 = 0.3;
/// Melee riding weights both attacks at 80%: the strongest attack multiplier in the game
pub const MELEE_RIDER_ATTACK_SHARE: f64 = 0.8;
pub const MELEE_MOUNT_ATTACK_SHARE: f64 = 0.8;
/// Ranged riding keeps the rider's full attack but gains little from the mount
pub const RANGED_RIDER_ATTACK_SHARE: f64 = 1.0;
pub const RANGED_MOUNT_ATTACK_SHARE: f64 = 0.4;

// === Damage ===

/// Share of the defense stat that actually mitigates
pub const DEFENSE_FACTOR: f64 = 0.7;
/// Attack must reach this multiple of effective defense for full damage.
/// Game tuning is built around this exact breakpoint.
pub const STRONG_HIT_BREAKPOINT: f64 = 1.14;
/// Damage dealt per point of attack above effective defense
pub const DAMAGE_RATE: f64 = 2.0;
/// Spread of a strong hit and the cap of a weak hit, as a share of attack
pub const DAMAGE_VARIANCE: f64 = 0.0625;

// === Critical ===

/// Agility differential divisor (player vs player)
pub const CRITICAL_DIVISOR: f64 = 3.5;
/// Critical rate bounds in basis points
pub const CRITICAL_RATE_MIN: f64 = 1.0;
pub const CRITICAL_RATE_MAX: f64 = 10_000.0;
/// Share of the defender's effective defense added on a critical hit
pub const CRITICAL_DEFENSE_FACTOR: f64 = 0.5;

// === Dodge ===

/// Evasion constant K; smaller K makes agility gaps count for more
pub const DODGE_K: f64 = 0.02;
/// Dodge ceiling in percent
pub const DODGE_CAP_PERCENT: f64 = 75.0;
/// Flat evasion bonus against ranged attacks, added after the cap
pub const RANGED_DODGE_BONUS: f64 = 20.0;

/// Tunable combat constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub affinity: AffinityConstants,
    #[serde(default)]
    pub blend: BlendConstants,
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub critical: CriticalConstants,
    #[serde(default)]
    pub dodge: DodgeConstants,
}

impl CombatConstants {
    /// Reject tunings the formulas cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.affinity;
        if a.advantage < 0.0 || a.disadvantage < 0.0 || a.neutral < 0.0 {
            return Err(invalid("affinity multipliers must be non-negative"));
        }
        if a.normalizer <= 0.0 || a.point_weight <= 0.0 {
            return Err(invalid("affinity normalizer and point weight must be positive"));
        }

        let b = &self.blend;
        let shares = [
            b.rider_share,
            b.mount_share,
            b.melee_rider_attack,
            b.melee_mount_attack,
            b.ranged_rider_attack,
            b.ranged_mount_attack,
        ];
        if shares.iter().any(|share| *share < 0.0) {
            return Err(invalid("blend shares must be non-negative"));
        }

        let d = &self.damage;
        if d.defense_factor <= 0.0 {
            return Err(invalid("damage.defense_factor must be positive"));
        }
        if d.strong_breakpoint < 1.0 {
            return Err(invalid("damage.strong_breakpoint must be at least 1.0"));
        }
        if d.damage_rate <= 0.0 || d.variance < 0.0 {
            return Err(invalid("damage.damage_rate must be positive and variance non-negative"));
        }

        let c = &self.critical;
        if c.divisor <= 0.0 {
            return Err(invalid("critical.divisor must be positive"));
        }
        if c.min_rate < 0.0 || c.max_rate < c.min_rate {
            return Err(invalid("critical rate bounds are inverted"));
        }
        if c.defense_factor < 0.0 {
            return Err(invalid("critical.defense_factor must be non-negative"));
        }

        let g = &self.dodge;
        if g.k <= 0.0 {
            return Err(invalid("dodge.k must be positive"));
        }
        if g.cap_percent <= 0.0 || g.cap_percent > 100.0 {
            return Err(invalid("dodge.cap_percent must be within (0, 100]"));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError(message.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinityConstants {
    #[serde(default = "default_advantage")]
    pub advantage: f64,
    #[serde(default = "default_disadvantage")]
    pub disadvantage: f64,
    #[serde(default = "default_neutral")]
    pub neutral: f64,
    #[serde(default = "default_normalizer")]
    pub normalizer: f64,
    #[serde(default = "default_point_weight")]
    pub point_weight: f64,
}

impl Default for AffinityConstants {
    fn default() -> Self {
        AffinityConstants {
            advantage: AFFINITY_ADVANTAGE,
            disadvantage: AFFINITY_DISADVANTAGE,
            neutral: AFFINITY_NEUTRAL,
            normalizer: AFFINITY_NORMALIZER,
            point_weight: AFFINITY_POINT_WEIGHT,
        }
    }
}

fn default_advantage() -> f64 {
    AFFINITY_ADVANTAGE
}
fn default_disadvantage() -> f64 {
    AFFINITY_DISADVANTAGE
}
fn default_neutral() -> f64 {
    AFFINITY_NEUTRAL
}
fn default_normalizer() -> f64 {
    AFFINITY_NORMALIZER
}
fn default_point_weight() -> f64 {
    AFFINITY_POINT_WEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendConstants {
    #[serde(default = "default_rider_share")]
    pub rider_share: f64,
    #[serde(default = "default_mount_share")]
    pub mount_share: f64,
    #[serde(default = "default_melee_rider_attack")]
    pub melee_rider_attack: f64,
    #[serde(default = "default_melee_mount_attack")]
    pub melee_mount_attack: f64,
    #[serde(default = "default_ranged_rider_attack")]
    pub ranged_rider_attack: f64,
    #[serde(default = "default_ranged_mount_attack")]
    pub ranged_mount_attack: f64,
}

impl Default for BlendConstants {
    fn default() -> Self {
        BlendConstants {
            rider_share: BLEND_RIDER_SHARE,
            mount_share: BLEND_MOUNT_SHARE,
            melee_rider_attack: MELEE_RIDER_ATTACK_SHARE,
            melee_mount_attack: MELEE_MOUNT_ATTACK_SHARE,
            ranged_rider_attack: RANGED_RIDER_ATTACK_SHARE,
            ranged_mount_attack: RANGED_MOUNT_ATTACK_SHARE,
        }
    }
}

fn default_rider_share() -> f64 {
    BLEND_RIDER_SHARE
}
fn default_mount_share() -> f64 {
    BLEND_MOUNT_SHARE
}
fn default_melee_rider_attack() -> f64 {
    MELEE_RIDER_ATTACK_SHARE
}
fn default_melee_mount_attack() -> f64 {
    MELEE_MOUNT_ATTACK_SHARE
}
fn default_ranged_rider_attack() -> f64 {
    RANGED_RIDER_ATTACK_SHARE
}
fn default_ranged_mount_attack() -> f64 {
    RANGED_MOUNT_ATTACK_SHARE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConstants {
    #[serde(default = "default_defense_factor")]
    pub defense_factor: f64,
    #[serde(default = "default_strong_breakpoint")]
    pub strong_breakpoint: f64,
    #[serde(default = "default_damage_rate")]
    pub damage_rate: f64,
    #[serde(default = "default_variance")]
    pub variance: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            defense_factor: DEFENSE_FACTOR,
            strong_breakpoint: STRONG_HIT_BREAKPOINT,
            damage_rate: DAMAGE_RATE,
            variance: DAMAGE_VARIANCE,
        }
    }
}

fn default_defense_factor() -> f64 {
    DEFENSE_FACTOR
}
fn default_strong_breakpoint() -> f64 {
    STRONG_HIT_BREAKPOINT
}
fn default_damage_rate() -> f64 {
    DAMAGE_RATE
}
fn default_variance() -> f64 {
    DAMAGE_VARIANCE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalConstants {
    #[serde(default = "default_critical_divisor")]
    pub divisor: f64,
    #[serde(default = "default_critical_min")]
    pub min_rate: f64,
    #[serde(default = "default_critical_max")]
    pub max_rate: f64,
    #[serde(default = "default_critical_defense_factor")]
    pub defense_factor: f64,
}

impl Default for CriticalConstants {
    fn default() -> Self {
        CriticalConstants {
            divisor: CRITICAL_DIVISOR,
            min_rate: CRITICAL_RATE_MIN,
            max_rate: CRITICAL_RATE_MAX,
            defense_factor: CRITICAL_DEFENSE_FACTOR,
        }
    }
}

fn default_critical_divisor() -> f64 {
    CRITICAL_DIVISOR
}
fn default_critical_min() -> f64 {
    CRITICAL_RATE_MIN
}
fn default_critical_max() -> f64 {
    CRITICAL_RATE_MAX
}
fn default_critical_defense_factor() -> f64 {
    CRITICAL_DEFENSE_FACTOR
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DodgeConstants {
    #[serde(default = "default_dodge_k")]
    pub k: f64,
    #[serde(default = "default_dodge_cap")]
    pub cap_percent: f64,
    #[serde(default = "default_ranged_bonus")]
    pub ranged_bonus: f64,
}

impl Default for DodgeConstants {
    fn default() -> Self {
        DodgeConstants {
            k: DODGE_K,
            cap_percent: DODGE_CAP_PERCENT,
            ranged_bonus: RANGED_DODGE_BONUS,
        }
    }
}

fn default_dodge_k() -> f64 {
    DODGE_K
}
fn default_dodge_cap() -> f64 {
    DODGE_CAP_PERCENT
}
fn default_ranged_bonus() -> f64 {
    RANGED_DODGE_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = CombatConstants::default();
        assert!((constants.damage.strong_breakpoint - 1.14).abs() < f64::EPSILON);
        assert!((constants.damage.variance - 0.0625).abs() < f64::EPSILON);
        assert!((constants.critical.divisor - 3.5).abs() < f64::EPSILON);
        assert!((constants.dodge.k - 0.02).abs() < f64::EPSILON);
        assert!((constants.blend.ranged_mount_attack - 0.4).abs() < f64::EPSILON);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[dodge]
k = 0.027

[damage]
strong_breakpoint = 1.2
"#;

        let constants: CombatConstants = toml::from_str(toml).unwrap();
        assert!((constants.dodge.k - 0.027).abs() < f64::EPSILON);
        assert!((constants.dodge.cap_percent - 75.0).abs() < f64::EPSILON);
        assert!((constants.damage.strong_breakpoint - 1.2).abs() < f64::EPSILON);
        assert!((constants.damage.defense_factor - 0.7).abs() < f64::EPSILON);
        assert_eq!(constants.affinity, AffinityConstants::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let constants: CombatConstants = toml::from_str("").unwrap();
        assert_eq!(constants, CombatConstants::default());
    }

    #[test]
    fn test_validation_rejects_bad_tuning() {
        let mut constants = CombatConstants::default();
        constants.critical.divisor = 0.0;
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        let mut constants = CombatConstants::default();
        constants.damage.strong_breakpoint = 0.9;
        assert!(constants.validate().is_err());

        let mut constants = CombatConstants::default();
        constants.dodge.cap_percent = 120.0;
        assert!(constants.validate().is_err());
    }
}
