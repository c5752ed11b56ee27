//! StatPool - The resolved stat pool of a build

mod accumulator;
mod derived;

pub use accumulator::StatAccumulator;
pub use derived::{
    round_half_even, AdditionalStats, AttributeTable, GenericStats, ResistanceTable,
};

use crate::modifiers::{Modifiers, StatValue};
use serde::Serialize;

/// Fully merged and unpacked stats
///
/// Only obtainable from [`StatAccumulator::unpack`], so it never contains
/// `all_attributes` or `elemental_resistance`. Reading an unknown stat yields
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatPool {
    stats: Modifiers,
}

impl StatPool {
    fn from_unpacked(stats: Modifiers) -> Self {
        StatPool { stats }
    }

    /// Read a stat, defaulting to zero
    pub fn get(&self, stat: &str) -> f64 {
        self.stats.get(stat)
    }

    /// Read a stat with its whole/decimal kind
    pub fn value(&self, stat: &str) -> StatValue {
        self.stats.value(stat)
    }

    pub fn contains(&self, stat: &str) -> bool {
        self.stats.contains(stat)
    }

    /// Every stat in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.stats.iter()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn as_modifiers(&self) -> &Modifiers {
        &self.stats
    }
}
