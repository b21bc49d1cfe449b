//! battle_core - Combat resolution and damage inference engine
//!
//! This library provides:
//! - Attribute affinity: elemental damage multiplier between two compositions
//! - Mount blending: rider and mount stats combined per weapon class
//! - Damage: base damage ranges and critical hits
//! - Defense: dodge rate
//! - Combat resolution: every model combined into a damage report
//! - Inverse inference: opponent defense estimated from an observed hit
//!
//! Every calculation is a pure function of its inputs.

pub mod affinity;
pub mod calculator;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod inference;
pub mod mount;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use affinity::attribute_bonus;
pub use calculator::BattleCalculator;
pub use combat::{resolve, resolve_with_constants, CombatOutcome, HitRoll};
pub use config::{CatalogError, CombatConstants, ConfigError, MountCatalog};
pub use damage::{base_damage, critical_damage, critical_rate, DamageRange, DamageRegime};
pub use defense::dodge_rate;
pub use inference::{infer, infer_with_constants, InferenceScenario, ScenarioLabel};
pub use mount::{blend, MountTemplate};
pub use types::{
    CombatantProfile, CompositionError, Element, ElementalComposition, MountProfile, WeaponClass,
};
