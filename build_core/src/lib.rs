//! build_core - Stat aggregation and skill damage for a character build
//!
//! This library provides:
//! - Modifiers: open-vocabulary stat → value mappings, merged by addition
//! - Sources: base stats, items, idols, passive tree and blessings
//! - StatPool: the merged pool after pseudo-stats are unpacked
//! - Damage: tag-filtered increases and the per-skill hit damage chain
//! - Config: builds and skill tags loaded from TOML

pub mod build;
pub mod config;
pub mod damage;
pub mod modifiers;
pub mod prelude;
pub mod source;
pub mod stat_pool;
pub mod types;

// Re-export core types for convenience
pub use build::{Build, BuildError};
pub use config::{default_build_config, default_skill_tags, BuildConfig, ConfigError};
pub use damage::{calculate_damage, DamageBreakdown, SkillFormula, SkillRegistry, SkillTags, Smite};
pub use modifiers::{Modifiers, StatValue};
pub use source::{BaseStatsSource, Blessings, Item, StatSource, Tree};
pub use stat_pool::{
    AdditionalStats, AttributeTable, GenericStats, ResistanceTable, StatAccumulator, StatPool,
};
pub use types::{Attribute, Resistance};
