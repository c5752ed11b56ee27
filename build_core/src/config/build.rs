//! Build configuration - level, idols, items, tree and blessings

use super::ConfigError;
use crate::build::{Build, BuildError};
use crate::modifiers::Modifiers;
use crate::source::{Blessings, Item, Tree};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An item in the configuration, optionally repeated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    #[serde(default)]
    pub name: Option<String>,
    /// Number of identical copies equipped
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub prefixes: Modifiers,
    #[serde(default)]
    pub suffixes: Modifiers,
    #[serde(default)]
    pub implicits: Modifiers,
}

fn default_count() -> u32 {
    1
}

impl ItemEntry {
    fn to_item(&self) -> Item {
        Item {
            name: self.name.clone(),
            prefixes: self.prefixes.clone(),
            suffixes: self.suffixes.clone(),
            implicits: self.implicits.clone(),
        }
    }
}

/// Ordered modifier mappings (tree nodes or blessings)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifierList {
    #[serde(default)]
    pub mods: Vec<Modifiers>,
}

/// A whole build as written in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    pub level: u32,
    #[serde(default)]
    pub idols: Vec<ItemEntry>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    #[serde(default)]
    pub tree: ModifierList,
    #[serde(default)]
    pub blessings: ModifierList,
}

impl BuildConfig {
    /// Check constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level == 0 {
            return Err(ConfigError::ValidationError(
                "level must be at least 1".to_string(),
            ));
        }
        for entry in self.idols.iter().chain(&self.items) {
            if entry.count == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "item {} has count 0",
                    entry.name.as_deref().unwrap_or("<unnamed>")
                )));
            }
        }
        Ok(())
    }

    /// Idols with repeated entries expanded
    pub fn idols(&self) -> Vec<Item> {
        expand(&self.idols)
    }

    /// Items with repeated entries expanded
    pub fn items(&self) -> Vec<Item> {
        expand(&self.items)
    }

    pub fn tree(&self) -> Tree {
        Tree::new(self.tree.mods.clone())
    }

    pub fn blessings(&self) -> Blessings {
        Blessings::new(self.blessings.mods.clone())
    }

    /// Construct and resolve the configured build
    pub fn to_build(&self) -> Result<Build, BuildError> {
        Build::new(
            self.level,
            self.idols(),
            self.items(),
            self.tree(),
            self.blessings(),
        )
    }
}

fn expand(entries: &[ItemEntry]) -> Vec<Item> {
    entries
        .iter()
        .flat_map(|entry| std::iter::repeat(entry.to_item()).take(entry.count as usize))
        .collect()
}

/// Load and validate a build from a TOML file
pub fn load_build_config(path: &Path) -> Result<BuildConfig, ConfigError> {
    let config: BuildConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a build from a TOML string
pub fn parse_build_config(content: &str) -> Result<BuildConfig, ConfigError> {
    let config: BuildConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// The build shipped with the crate
pub fn default_build_config() -> Result<BuildConfig, ConfigError> {
    parse_build_config(include_str!("../../config/build.toml"))
}
