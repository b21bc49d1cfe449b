//! Damage system - Base damage ranges and critical hits

mod base;
mod critical;
mod range;

pub use base::{
    apply_attribute_bonus, base_damage, damage_regime, effective_defense,
    effective_defense_for_damage, DamageRegime,
};
pub use critical::{critical_damage, critical_rate};
pub use range::DamageRange;
