//! Scenario files - Both sides of a fight described in TOML

use anyhow::{bail, Context, Result};
use battle_core::config::load_toml;
use battle_core::{CombatantProfile, MountCatalog, MountProfile};
use serde::Deserialize;
use std::path::Path;

/// A mount given either by catalog id and level or by explicit stats
///
/// A table matching neither shape is an error rather than a zero mount.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MountSpec {
    Catalog { id: String, level: u32 },
    Stats(MountProfile),
}

impl MountSpec {
    pub fn resolve(&self, catalog: Option<&MountCatalog>) -> Result<MountProfile> {
        match self {
            MountSpec::Stats(stats) => Ok(*stats),
            MountSpec::Catalog { id, level } => {
                let Some(catalog) = catalog else {
                    bail!("mount '{id}' needs --catalog");
                };
                Ok(catalog.mount_at_level(id, *level)?)
            }
        }
    }
}

/// Scenario file layout
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub attacker: CombatantProfile,
    pub defender: CombatantProfile,
    #[serde(default)]
    pub attacker_mount: Option<MountSpec>,
    #[serde(default)]
    pub defender_mount: Option<MountSpec>,
}

/// Scenario with mounts looked up and compositions checked
#[derive(Debug, Clone)]
pub struct Scenario {
    pub attacker: CombatantProfile,
    pub defender: CombatantProfile,
    pub attacker_mount: Option<MountProfile>,
    pub defender_mount: Option<MountProfile>,
}

impl Scenario {
    pub fn load(path: &Path, catalog: Option<&MountCatalog>) -> Result<Self> {
        let file: ScenarioFile = load_toml(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;

        file.attacker
            .elemental
            .validate()
            .context("attacker elements")?;
        file.defender
            .elemental
            .validate()
            .context("defender elements")?;

        let attacker_mount = file
            .attacker_mount
            .as_ref()
            .map(|spec| spec.resolve(catalog))
            .transpose()
            .context("attacker mount")?;
        let defender_mount = file
            .defender_mount
            .as_ref()
            .map(|spec| spec.resolve(catalog))
            .transpose()
            .context("defender mount")?;

        Ok(Scenario {
            attacker: file.attacker,
            defender: file.defender,
            attacker_mount,
            defender_mount,
        })
    }
}
