//! BattleCalculator - Combat and inference bound to one set of constants

use crate::combat::{resolve_with_constants, CombatOutcome};
use crate::config::{CombatConstants, ConfigError};
use crate::inference::{infer_with_constants, InferenceScenario};
use crate::types::{CombatantProfile, ElementalComposition, MountProfile, WeaponClass};

/// Stateless calculator over a fixed set of tuning constants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BattleCalculator {
    constants: CombatConstants,
}

impl BattleCalculator {
    /// Calculator using the shipped constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator using custom constants, validated first
    pub fn with_constants(constants: CombatConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(BattleCalculator { constants })
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Full damage report for an attack
    pub fn resolve(
        &self,
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
            &self.constants,
        )
    }

    /// Reports for every weapon class, melee first
    pub fn resolve_all(
        &self,
        attacker: &CombatantProfile,
        attacker_mount: Option<&MountProfile>,
        defender: &CombatantProfile,
        defender_mount: Option<&MountProfile>,
    ) -> Vec<CombatOutcome> {
        WeaponClass::all()
            .iter()
            .map(|&weapon| self.resolve(attacker, attacker_mount, defender, defender_mount, weapon))
            .collect()
    }

    /// Opponent defense estimates from one observed hit
    pub fn infer(
        &self,
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
            &self.constants,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_constants() {
        let mut constants = CombatConstants::default();
        constants.dodge.k = 0.0;
        assert!(BattleCalculator::with_constants(constants).is_err());
    }

    #[test]
    fn test_resolve_all_covers_weapons() {
        let calculator = BattleCalculator::new();
        let attacker = CombatantProfile::new(100, 1500, 500, 200);
        let defender = CombatantProfile::new(100, 500, 1200, 250);
        let outcomes = calculator.resolve_all(&attacker, None, &defender, None);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].weapon, WeaponClass::Melee);
        assert_eq!(outcomes[1].weapon, WeaponClass::Ranged);
    }

    #[test]
    fn test_custom_constants_flow_through() {
        let mut constants = CombatConstants::default();
        constants.damage.damage_rate = 1.0;
        let calculator = BattleCalculator::with_constants(constants).unwrap();

        let attacker = CombatantProfile::new(100, 1500, 0, 0);
        let defender = CombatantProfile::new(100, 0, 1200, 0);
        let outcome = calculator.resolve(&attacker, None, &defender, None, WeaponClass::Melee);
        // (1500 - 840) * 1.0
        assert_eq!(outcome.base.avg, 660);

        let scenarios = calculator.infer(1500, &ElementalComposition::none(), 660, 0);
        let neutral = scenarios.last().unwrap();
        assert_eq!(neutral.estimated_defense, 1200);
    }
}
