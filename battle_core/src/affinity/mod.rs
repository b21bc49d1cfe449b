//! Attribute affinity - Elemental damage multiplier between two compositions
//!
//! Each composition expands into five category weights in percentage points
//! (element points × 10, with the remainder in "none"). Every ordered pair of
//! attacker and defender categories contributes
//! `attacker_weight × defender_weight × multiplier`, and the sum is scaled by
//! 0.0001 back to a plain multiplier.
//!
//! Examples (single 10-point compositions):
//! - Earth vs Water: 1.5
//! - Water vs Earth: 0.6
//! - Earth vs Fire: 1.0
//! - None vs Wind: 0.6

mod table;

pub use table::{relation, Category, Relation, RELATION_TABLE};

use crate::config::AffinityConstants;
use crate::types::{ElementalComposition, MAX_ELEMENT_POINTS};

/// Category weights in percentage points, indexed by [`Category::index`]
pub fn category_weights(composition: &ElementalComposition, point_weight: f64) -> [f64; 5] {
    let earth = composition.earth as f64 * point_weight;
    let water = composition.water as f64 * point_weight;
    let fire = composition.fire as f64 * point_weight;
    let wind = composition.wind as f64 * point_weight;
    let none = MAX_ELEMENT_POINTS as f64 * point_weight - (earth + water + fire + wind);
    [earth, water, fire, wind, none]
}

/// Multiplier for one attacker category hitting one defender category
pub fn multiplier(attacker: Category, defender: Category, constants: &AffinityConstants) -> f64 {
    match relation(attacker, defender) {
        Relation::Advantage => constants.advantage,
        Relation::Disadvantage => constants.disadvantage,
        Relation::Neutral => constants.neutral,
    }
}

/// Elemental damage multiplier of `attacker` against `defender`
pub fn attribute_bonus(
    attacker: &ElementalComposition,
    defender: &ElementalComposition,
    constants: &AffinityConstants,
) -> f64 {
    let attacker_weights = category_weights(attacker, constants.point_weight);
    let defender_weights = category_weights(defender, constants.point_weight);

    let mut total = 0.0;
    for &atk in Category::all() {
        for &def in Category::all() {
            total += attacker_weights[atk.index()]
                * defender_weights[def.index()]
                * multiplier(atk, def, constants);
        }
    }

    (total * constants.normalizer).max(0.0)
}
