//! Skill tags and the modifiers each tag makes relevant

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Modifier name → tags that make it apply to a skill
pub const TAG_TO_STATS: &[(&str, &[&str])] = &[
    ("increased_spell_damage", &["spell"]),
    ("increased_void_damage", &["void"]),
    ("added_adaptive_spell_damage", &["spell"]),
    ("added_void_damage", &["spell", "attack"]),
    ("added_void_spell_damage", &["spell"]),
    ("critical_strike_chance", &["spell", "attack"]),
    ("critical_strike_multiplier", &["spell", "attack"]),
    ("cast_speed", &["spell"]),
    ("spell_critical_chance", &["spell"]),
    ("increased_smite_damage", &["smite"]),
    ("void_penetration", &["void"]),
    ("smite_damage_per_vitality", &["smite"]),
];

/// Every modifier name whose tags intersect `skill_tags`
pub fn applicable_modifiers<S: AsRef<str>>(skill_tags: &[S]) -> BTreeSet<&'static str> {
    TAG_TO_STATS
        .iter()
        .filter(|(_, tags)| {
            skill_tags
                .iter()
                .any(|skill_tag| tags.iter().any(|tag| *tag == skill_tag.as_ref()))
        })
        .map(|(stat, _)| *stat)
        .collect()
}

/// Skill name → ordered tags describing that skill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTags(BTreeMap<String, Vec<String>>);

impl SkillTags {
    pub fn new() -> Self {
        SkillTags(BTreeMap::new())
    }

    /// Set the tags for a skill, replacing any previous ones
    pub fn insert<S: Into<String>>(&mut self, skill: impl Into<String>, tags: impl IntoIterator<Item = S>) {
        self.0
            .insert(skill.into(), tags.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, skill: &str) -> Option<&[String]> {
        self.0.get(skill).map(Vec::as_slice)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains_key(skill)
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smite_tags_select_spell_void_and_smite_mods() {
        let mods = applicable_modifiers(&["smite", "void", "spell", "vitality"]);
        assert_eq!(mods.len(), TAG_TO_STATS.len());
    }

    #[test]
    fn test_spell_tag_gates_spell_damage() {
        let with_spell = applicable_modifiers(&["spell"]);
        assert!(with_spell.contains("increased_spell_damage"));
        assert!(!with_spell.contains("increased_void_damage"));

        let without_spell = applicable_modifiers(&["void"]);
        assert!(!without_spell.contains("increased_spell_damage"));
        assert!(without_spell.contains("void_penetration"));
    }

    #[test]
    fn test_smite_only_mods_need_smite_tag() {
        let mods = applicable_modifiers(&["spell", "void"]);
        assert!(!mods.contains("increased_smite_damage"));
        assert!(!mods.contains("smite_damage_per_vitality"));
    }

    #[test]
    fn test_unknown_tags_select_nothing() {
        let mods = applicable_modifiers(&["vitality", "melee"]);
        assert!(mods.is_empty());
        assert!(applicable_modifiers::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_skill_tags_map() {
        let mut skills = SkillTags::new();
        skills.insert("smite", ["smite", "void", "spell", "vitality"]);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills.get("smite").unwrap()[1], "void");
        assert!(skills.get("fireball").is_none());

        skills.insert("smite", ["spell"]);
        assert_eq!(skills.get("smite").unwrap().len(), 1);

        skills.insert("judgement", ["spell", "void"]);
        assert_eq!(skills.skills().collect::<Vec<_>>(), ["judgement", "smite"]);
    }
}
