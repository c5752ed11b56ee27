//! BaseStatsSource - Fixed starting stats every build begins from

use crate::modifiers::{Modifiers, StatValue};
use crate::source::StatSource;

/// Starting value of every character stat that is not zero by default
pub const BASE_STATS: &[(&str, StatValue)] = &[
    ("health", StatValue::Int(100)),
    ("health_per_level", StatValue::Int(8)),
    ("health_regeneration", StatValue::Int(20)),
    ("mana", StatValue::Int(51)),
    ("mana_per_level", StatValue::Float(0.5)),
    ("mana_regeneration", StatValue::Int(8)),
    ("all_attributes", StatValue::Int(1)),
    ("block_chance", StatValue::Int(0)),
    ("endurance", StatValue::Int(20)),
    ("strength", StatValue::Int(2)),
    ("vitality", StatValue::Int(1)),
    ("base_crit", StatValue::Int(5)),
];

/// Seeds the stat pool with [`BASE_STATS`]
pub struct BaseStatsSource {
    stats: Modifiers,
}

impl BaseStatsSource {
    pub fn new() -> Self {
        BaseStatsSource {
            stats: BASE_STATS.iter().map(|(stat, value)| (*stat, *value)).collect(),
        }
    }

    pub fn stats(&self) -> &Modifiers {
        &self.stats
    }
}

impl Default for BaseStatsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn modifier_maps(&self) -> Vec<&Modifiers> {
        vec![&self.stats]
    }
}
