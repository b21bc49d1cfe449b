//! MountTemplate - Level scaling for catalog mounts

use crate::types::MountProfile;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Catalog label of a mount that can be ridden
pub const RIDEABLE_LABEL: &str = "탑승가능";
/// Catalog label of a mount that cannot be ridden
pub const NOT_RIDEABLE_LABEL: &str = "탑승불가";

/// Per-stat values of a mount template (base or growth)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MountStats {
    #[serde(default)]
    pub attack: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub agility: f64,
    #[serde(default)]
    pub vitality: f64,
}

/// A catalog mount: level 1 stats plus growth per level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_rideable", deserialize_with = "deserialize_rideable")]
    pub rideable: bool,
    #[serde(alias = "baseStats")]
    pub base: MountStats,
    #[serde(alias = "growthStats")]
    pub growth: MountStats,
}

fn default_rideable() -> bool {
    true
}

/// Catalogs store the flag either as a bool or as a label
#[derive(Deserialize)]
#[serde(untagged)]
enum RideableFlag {
    Flag(bool),
    Label(String),
}

fn deserialize_rideable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match RideableFlag::deserialize(deserializer)? {
        RideableFlag::Flag(flag) => Ok(flag),
        RideableFlag::Label(label) => match label.trim() {
            RIDEABLE_LABEL | "true" => Ok(true),
            NOT_RIDEABLE_LABEL | "false" => Ok(false),
            other => Err(D::Error::custom(format!("unknown rideable value: {other}"))),
        },
    }
}

impl MountTemplate {
    /// Stats at a level: `floor(base + growth * (level - 1))`
    ///
    /// Level 0 is treated as level 1.
    pub fn at_level(&self, level: u32) -> MountProfile {
        let steps = level.max(1) as f64 - 1.0;
        let scale = |base: f64, growth: f64| -> u32 { (base + growth * steps).floor().max(0.0) as u32 };

        MountProfile {
            attack: scale(self.base.attack, self.growth.attack),
            defense: scale(self.base.defense, self.growth.defense),
            agility: scale(self.base.agility, self.growth.agility),
            vitality: scale(self.base.vitality, self.growth.vitality),
        }
    }
}
