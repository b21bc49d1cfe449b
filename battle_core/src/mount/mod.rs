//! Mount blending - Rider and mount stats combined into effective combat stats
//!
//! While riding, defense, agility and vitality are a 70/30 mix of rider and
//! mount. Attack depends on the weapon class:
//!
//! - Melee: `rider * 0.8 + mount * 0.8` (up to 160% of either alone)
//! - Ranged: `rider * 1.0 + mount * 0.4`
//!
//! Melee riding is the strongest attack multiplier in the game; ranged riding
//! gives up attack in exchange for the ranged evasion bonus.
//! Level and elemental composition always come from the rider.

mod template;

pub use template::{MountStats, MountTemplate, NOT_RIDEABLE_LABEL, RIDEABLE_LABEL};

use crate::config::BlendConstants;
use crate::types::{CombatantProfile, MountProfile, WeaponClass};

fn mix(rider: u32, rider_share: f64, mount: u32, mount_share: f64) -> u32 {
    (rider as f64 * rider_share + mount as f64 * mount_share)
        .floor()
        .max(0.0) as u32
}

/// Effective stats of a rider on an optional mount
pub fn blend(
    rider: &CombatantProfile,
    mount: Option<&MountProfile>,
    weapon: WeaponClass,
    constants: &BlendConstants,
) -> CombatantProfile {
    let Some(mount) = mount else {
        return *rider;
    };

    let (rider_attack, mount_attack) = match weapon {
        WeaponClass::Melee => (constants.melee_rider_attack, constants.melee_mount_attack),
        WeaponClass::Ranged => (constants.ranged_rider_attack, constants.ranged_mount_attack),
    };

    CombatantProfile {
        level: rider.level,
        vitality: mix(rider.vitality, constants.rider_share, mount.vitality, constants.mount_share),
        attack: mix(rider.attack, rider_attack, mount.attack, mount_attack),
        defense: mix(rider.defense, constants.rider_share, mount.defense, constants.mount_share),
        agility: mix(rider.agility, constants.rider_share, mount.agility, constants.mount_share),
        elemental: rider.elemental,
    }
}

/// Defense the rider alone must have to reach a blended defense
///
/// Inverse of the defense blend; without a mount the blended value is the
/// rider's own defense.
pub fn rider_defense_for(blended_defense: f64, mount_defense: u32, constants: &BlendConstants) -> f64 {
    if mount_defense == 0 || constants.rider_share <= 0.0 {
        return blended_defense;
    }
    (blended_defense - mount_defense as f64 * constants.mount_share) / constants.rider_share
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Element, ElementalComposition};

    fn rider() -> CombatantProfile {
        CombatantProfile::new(140, 1500, 1000, 400)
            .with_vitality(2000)
            .with_elemental(ElementalComposition::single(Element::Fire))
    }

    fn mount() -> MountProfile {
        MountProfile::new(1000, 500, 300, 900)
    }

    #[test]
    fn test_no_mount_passes_through() {
        let rider = rider();
        let blended = blend(&rider, None, WeaponClass::Melee, &BlendConstants::default());
        assert_eq!(blended, rider);
    }

    #[test]
    fn test_melee_attack_blend() {
        let blended = blend(&rider(), Some(&mount()), WeaponClass::Melee, &BlendConstants::default());
        // 1500 * 0.8 + 1000 * 0.8
        assert_eq!(blended.attack, 2000);
    }

    #[test]
    fn test_ranged_attack_blend() {
        let blended = blend(&rider(), Some(&mount()), WeaponClass::Ranged, &BlendConstants::default());
        // 1500 * 1.0 + 1000 * 0.4
        assert_eq!(blended.attack, 1900);
    }

    #[test]
    fn test_secondary_stats_blend() {
        let blended = blend(&rider(), Some(&mount()), WeaponClass::Melee, &BlendConstants::default());
        // 1000 * 0.7 + 500 * 0.3
        assert_eq!(blended.defense, 850);
        // 400 * 0.7 + 300 * 0.3
        assert_eq!(blended.agility, 370);
        // 2000 * 0.7 + 900 * 0.3
        assert_eq!(blended.vitality, 1670);
    }

    #[test]
    fn test_rider_keeps_level_and_elements() {
        let blended = blend(&rider(), Some(&mount()), WeaponClass::Ranged, &BlendConstants::default());
        assert_eq!(blended.level, 140);
        assert_eq!(blended.elemental, ElementalComposition::single(Element::Fire));
    }

    #[test]
    fn test_blend_floors() {
        let rider = CombatantProfile::new(1, 0, 12, 0);
        let mount = MountProfile::new(0, 1, 0, 0);
        let blended = blend(&rider, Some(&mount), WeaponClass::Melee, &BlendConstants::default());
        // 12 * 0.7 + 1 * 0.3 = 8.7
        assert_eq!(blended.defense, 8);
    }

    #[test]
    fn test_rider_defense_inverse() {
        let constants = BlendConstants::default();
        let rider = rider_defense_for(850.0, 500, &constants);
        assert!((rider - 1000.0).abs() < 1e-9);
        assert!((rider_defense_for(850.0, 0, &constants) - 850.0).abs() < f64::EPSILON);
    }
}
