//! Build - A character's level, gear, tree and blessings with their resolved stats

use crate::damage::{calculate_damage, DamageBreakdown, SkillRegistry, SkillTags};
use crate::source::{BaseStatsSource, Blessings, Item, StatSource, Tree};
use crate::stat_pool::{
    AdditionalStats, AttributeTable, GenericStats, ResistanceTable, StatAccumulator, StatPool,
};
use thiserror::Error;

/// Errors from constructing a build or querying its damage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown skill: {skill} (known skills: {})", .known.join(", "))]
    UnknownSkill { skill: String, known: Vec<String> },
    #[error("No damage formula registered for skill: {0}")]
    MissingFormula(String),
}

/// A character build
///
/// Stats are aggregated and unpacked once, on construction.
#[derive(Debug, Clone)]
pub struct Build {
    level: u32,
    idols: Vec<Item>,
    items: Vec<Item>,
    tree: Tree,
    blessings: Blessings,
    stats: StatPool,
}

impl Build {
    /// Aggregate every source into a resolved stat pool
    pub fn new(
        level: u32,
        idols: Vec<Item>,
        items: Vec<Item>,
        tree: Tree,
        blessings: Blessings,
    ) -> Result<Self, BuildError> {
        if level == 0 {
            return Err(BuildError::InvalidConfig(
                "level must be at least 1".to_string(),
            ));
        }

        let base = BaseStatsSource::new();
        let sources = std::iter::once(&base as &dyn StatSource)
            .chain(idols.iter().map(|i| i as &dyn StatSource))
            .chain(items.iter().map(|i| i as &dyn StatSource))
            .chain([&tree as &dyn StatSource, &blessings as &dyn StatSource]);

        let mut accumulator = StatAccumulator::new();
        for source in sources {
            for map in source.modifier_maps() {
                if let Some((stat, value)) = map.first_non_finite() {
                    return Err(BuildError::InvalidConfig(format!(
                        "{} has non-finite value {} for {}",
                        source.id(),
                        value,
                        stat
                    )));
                }
            }
            source.apply(&mut accumulator);
        }

        let stats = accumulator.unpack();

        tracing::info!(
            level,
            idols = idols.len(),
            items = items.len(),
            tree_nodes = tree.node_count(),
            blessings = blessings.mods().len(),
            "build resolved"
        );
        tracing::debug!(stats = ?stats.as_modifiers(), "resolved stat pool");

        Ok(Build {
            level,
            idols,
            items,
            tree,
            blessings,
            stats,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn idols(&self) -> &[Item] {
        &self.idols
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn blessings(&self) -> &Blessings {
        &self.blessings
    }

    /// The resolved stat pool
    pub fn stats(&self) -> &StatPool {
        &self.stats
    }

    /// Read a resolved stat, defaulting to zero
    pub fn get(&self, stat: &str) -> f64 {
        self.stats.get(stat)
    }

    /// Damage of `skill` using the built-in skill formulas
    pub fn damage_report(&self, skill: &str, skills: &SkillTags) -> Result<DamageBreakdown, BuildError> {
        self.damage_report_with(skill, skills, &SkillRegistry::with_defaults())
    }

    /// Damage of `skill` using formulas from `registry`
    pub fn damage_report_with(
        &self,
        skill: &str,
        skills: &SkillTags,
        registry: &SkillRegistry,
    ) -> Result<DamageBreakdown, BuildError> {
        let tags = skills
            .get(skill)
            .ok_or_else(|| BuildError::UnknownSkill {
                skill: skill.to_string(),
                known: skills.skills().map(str::to_string).collect(),
            })?;
        let formula = registry
            .get(skill)
            .ok_or_else(|| BuildError::MissingFormula(skill.to_string()))?;

        Ok(calculate_damage(&self.stats, formula, tags))
    }

    pub fn generic_stats(&self) -> GenericStats {
        GenericStats::from_pool(&self.stats, self.level)
    }

    pub fn resistances(&self) -> ResistanceTable {
        ResistanceTable::from_pool(&self.stats)
    }

    pub fn attributes(&self) -> AttributeTable {
        AttributeTable::from_pool(&self.stats)
    }

    pub fn additional_stats(&self) -> AdditionalStats {
        AdditionalStats::from_pool(&self.stats)
    }
}
