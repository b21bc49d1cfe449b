//! Combat resolution - Blend, damage, critical and dodge combined into one report

mod resolution;
mod result;

pub use resolution::{resolve, resolve_with_constants};
pub use result::{CombatOutcome, HitRoll};
