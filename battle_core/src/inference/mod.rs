//! Inverse inference - Estimate an opponent's defense from one observed hit
//!
//! A player only sees the final damage number. Inverting the strong-hit
//! formula `damage = (attack - effective_defense) * 2.0 * bonus` gives the
//! opponent's effective defense, but `bonus` depends on the opponent's
//! unknown elements. Three matchups are assumed:
//!
//! - Favorable: the opponent is 10 points of the element our dominant
//!   element beats
//! - Unfavorable: the opponent is 10 points of the element that beats ours
//! - Neutral: the opponent has exactly our composition
//!
//! A scenario is dropped when its solved effective defense is negative, or
//! when removing the opponent's mount share leaves a negative defense, so
//! the result holds between zero and three entries.

mod scenario;

pub use scenario::{InferenceScenario, ScenarioLabel};

use crate::affinity::attribute_bonus;
use crate::config::CombatConstants;
use crate::damage::effective_defense_for_damage;
use crate::mount::rider_defense_for;
use crate::types::{Element, ElementalComposition};

/// Element assumed for an attacker with no elemental points
const FALLBACK_ELEMENT: Element = Element::Fire;

/// Opponent compositions assumed by each scenario, in output order
pub fn assumed_opponents(my_elemental: &ElementalComposition) -> [(ScenarioLabel, ElementalComposition); 3] {
    let (favorable, unfavorable) = match my_elemental.dominant() {
        Some(element) => (element.beats(), element.beaten_by()),
        None => (FALLBACK_ELEMENT, FALLBACK_ELEMENT),
    };

    [
        (ScenarioLabel::Favorable, ElementalComposition::single(favorable)),
        (ScenarioLabel::Unfavorable, ElementalComposition::single(unfavorable)),
        (ScenarioLabel::Neutral, *my_elemental),
    ]
}

/// Infer opponent defense using the shipped constants
pub fn infer(
    my_attack: u32,
    my_elemental: &ElementalComposition,
    observed_damage: u32,
    opponent_mount_defense: u32,
) -> Vec<InferenceScenario> {
    infer_with_constants(
        my_attack,
        my_elemental,
        observed_damage,
        opponent_mount_defense,
        &CombatConstants::default(),
    )
}

/// Infer opponent defense with explicit constants
///
/// `opponent_mount_defense` of 0 means the opponent is not riding.
pub fn infer_with_constants(
    my_attack: u32,
    my_elemental: &ElementalComposition,
    observed_damage: u32,
    opponent_mount_defense: u32,
    constants: &CombatConstants,
) -> Vec<InferenceScenario> {
    let mut scenarios = Vec::with_capacity(3);

    for (label, opponent) in assumed_opponents(my_elemental) {
        let bonus = attribute_bonus(my_elemental, &opponent, &constants.affinity);

        let Some(raw_defense) =
            effective_defense_for_damage(my_attack, observed_damage, bonus, &constants.damage)
        else {
            tracing::debug!(?label, bonus, "scenario has no usable multiplier");
            continue;
        };

        if raw_defense < 0.0 {
            tracing::debug!(?label, raw_defense, "scenario dropped: negative defense");
            continue;
        }

        let blended = raw_defense / constants.damage.defense_factor;
        let character = rider_defense_for(blended, opponent_mount_defense, &constants.blend);
        if character < 0.0 {
            tracing::debug!(?label, character, "scenario dropped: mount outweighs defense");
            continue;
        }
        let estimated_defense = character.round() as i64;

        tracing::debug!(?label, bonus, estimated_defense, "scenario solved");

        scenarios.push(InferenceScenario {
            label,
            estimated_defense,
            opponent,
            attribute_bonus: bonus,
        });
    }

    scenarios
}
