//! StatAccumulator - Collects modifiers before pseudo-stats are unpacked

use crate::modifiers::Modifiers;
use crate::stat_pool::StatPool;
use crate::types::{Attribute, Resistance, ALL_ATTRIBUTES, ELEMENTAL_RESISTANCE};

/// Running total of every source's modifiers
///
/// Still holds the `all_attributes` and `elemental_resistance` pseudo-stats.
/// [`unpack`](StatAccumulator::unpack) consumes it, so a pool can only be
/// unpacked once.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    stats: Modifiers,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Add one modifier mapping
    pub fn merge(&mut self, modifiers: &Modifiers) {
        self.stats.merge(modifiers);
    }

    pub fn get(&self, stat: &str) -> f64 {
        self.stats.get(stat)
    }

    pub fn stats(&self) -> &Modifiers {
        &self.stats
    }

    /// Fan pseudo-stats out into their concrete stats and remove them
    ///
    /// Attributes are unpacked before resistances.
    pub fn unpack(mut self) -> StatPool {
        let all_attributes = self.stats.remove(ALL_ATTRIBUTES);
        for attr in Attribute::all() {
            self.stats.add(attr.stat_name(), all_attributes);
        }

        let elemental = self.stats.remove(ELEMENTAL_RESISTANCE);
        for res in Resistance::elemental() {
            self.stats.add(res.stat_name(), elemental);
        }

        StatPool::from_unpacked(self.stats)
    }
}
