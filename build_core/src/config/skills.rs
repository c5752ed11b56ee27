//! Skill tag configuration loading

use super::ConfigError;
use crate::damage::SkillTags;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One skill and the tags describing it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Container for skill tag configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(rename = "skills")]
    pub skills: Vec<SkillEntry>,
}

impl SkillsConfig {
    /// Convert into a skill → tags map, rejecting duplicate ids
    pub fn into_skill_tags(self) -> Result<SkillTags, ConfigError> {
        let mut seen = HashSet::new();
        let mut tags = SkillTags::new();
        for skill in self.skills {
            if !seen.insert(skill.id.clone()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate skill id: {}",
                    skill.id
                )));
            }
            tags.insert(skill.id, skill.tags);
        }
        Ok(tags)
    }
}

/// Load skill tags from a TOML file
pub fn load_skill_tags(path: &Path) -> Result<SkillTags, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    config.into_skill_tags()
}

/// Load skill tags from a TOML string
pub fn parse_skill_tags(content: &str) -> Result<SkillTags, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    config.into_skill_tags()
}

/// Skill tags shipped with the crate
pub fn default_skill_tags() -> Result<SkillTags, ConfigError> {
    parse_skill_tags(include_str!("../../config/skills.toml"))
}
