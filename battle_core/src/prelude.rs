//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::types::{CombatantProfile, Element, ElementalComposition, MountProfile, WeaponClass};

// Combat
pub use crate::calculator::BattleCalculator;
pub use crate::combat::{resolve, CombatOutcome, HitRoll};
pub use crate::damage::{DamageRange, DamageRegime};

// Inference
pub use crate::inference::{infer, InferenceScenario, ScenarioLabel};

// Config
pub use crate::config::{CombatConstants, MountCatalog};
