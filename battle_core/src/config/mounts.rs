//! Mount catalog loading

use super::ConfigError;
use crate::mount::MountTemplate;
use crate::types::MountProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Mount lookup error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown mount: {0}")]
    UnknownMount(String),
    #[error("Mount cannot be ridden: {0}")]
    NotRideable(String),
}

/// Container for mount templates as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MountsFile {
    #[serde(alias = "pets", default)]
    mounts: Vec<MountTemplate>,
}

/// Mount templates keyed by id
#[derive(Debug, Clone, Default)]
pub struct MountCatalog {
    templates: HashMap<String, MountTemplate>,
}

impl MountCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, replacing any previous entry with the same id
    pub fn register(&mut self, template: MountTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn get(&self, id: &str) -> Option<&MountTemplate> {
        self.templates.get(id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Rideable templates sorted by id
    pub fn rideable(&self) -> Vec<&MountTemplate> {
        let mut mounts: Vec<&MountTemplate> =
            self.templates.values().filter(|t| t.rideable).collect();
        mounts.sort_by(|a, b| a.id.cmp(&b.id));
        mounts
    }

    /// Stats of a rideable mount at the given level
    pub fn mount_at_level(&self, id: &str, level: u32) -> Result<MountProfile, CatalogError> {
        let template = self
            .get(id)
            .ok_or_else(|| CatalogError::UnknownMount(id.to_string()))?;
        if !template.rideable {
            return Err(CatalogError::NotRideable(id.to_string()));
        }
        Ok(template.at_level(level))
    }

    fn from_file(file: MountsFile) -> Self {
        let mut catalog = MountCatalog::new();
        for template in file.mounts {
            catalog.register(template);
        }
        catalog
    }

    /// Parse a JSON catalog (`{"pets": [...]}` or `{"mounts": [...]}`)
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let file: MountsFile = serde_json::from_str(content)?;
        Ok(Self::from_file(file))
    }
}

/// Load a mount catalog from a TOML or JSON file, chosen by extension
pub fn load_mount_catalog(path: &Path) -> Result<MountCatalog, ConfigError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let content = std::fs::read_to_string(path)?;
        return MountCatalog::from_json(&content);
    }

    let file: MountsFile = super::load_toml(path)?;
    Ok(MountCatalog::from_file(file))
}

/// Parse a mount catalog from a TOML string
pub fn parse_mount_catalog(content: &str) -> Result<MountCatalog, ConfigError> {
    let file: MountsFile = super::parse_toml(content)?;
    Ok(MountCatalog::from_file(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
[[mounts]]
id = "uribo"
name = "Uribo"
base = { attack = 20, defense = 18, agility = 22, vitality = 30 }
growth = { attack = 2.5, defense = 2.0, agility = 2.25, vitality = 3.0 }

[[mounts]]
id = "mammoth"
name = "Mammoth"
rideable = false
base = { attack = 40, defense = 40, agility = 10, vitality = 60 }
growth = { attack = 3.0, defense = 3.0, agility = 1.0, vitality = 4.0 }
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_mount_catalog(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.rideable().len(), 1);

        let mount = catalog.mount_at_level("uribo", 11).unwrap();
        // 20 + 2.5 * 10
        assert_eq!(mount.attack, 45);
        // 22 + 2.25 * 10 = 44.5 -> 44
        assert_eq!(mount.agility, 44);
    }

    #[test]
    fn test_lookup_errors() {
        let catalog = parse_mount_catalog(CATALOG).unwrap();
        assert_eq!(
            catalog.mount_at_level("missing", 1),
            Err(CatalogError::UnknownMount("missing".to_string()))
        );
        assert_eq!(
            catalog.mount_at_level("mammoth", 1),
            Err(CatalogError::NotRideable("mammoth".to_string()))
        );
    }

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{
            "pets": [
                {
                    "id": "p001",
                    "name": "Rex",
                    "baseStats": { "attack": 30, "defense": 25, "agility": 28, "vitality": 40 },
                    "growthStats": { "attack": 3.1, "defense": 2.4, "agility": 2.9, "vitality": 3.5 }
                }
            ]
        }"#;

        let catalog = MountCatalog::from_json(json).unwrap();
        let mount = catalog.mount_at_level("p001", 1).unwrap();
        assert_eq!(mount.attack, 30);
        assert_eq!(mount.vitality, 40);
    }
}
