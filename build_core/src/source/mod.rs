//! StatSource - Trait and implementations for modifier providers

mod base_stats;
mod blessings;
mod item;
mod tree;

pub use base_stats::{BaseStatsSource, BASE_STATS};
pub use blessings::Blessings;
pub use item::Item;
pub use tree::Tree;

use crate::modifiers::Modifiers;
use crate::stat_pool::StatAccumulator;

/// Trait for anything that contributes modifiers to a build's stat pool
///
/// Every contribution is a plain addition, so sources may be applied in any
/// order with identical results.
pub trait StatSource: Send + Sync {
    /// Identifier used in logs and validation errors
    fn id(&self) -> &str;

    /// The modifier mappings this source contributes
    fn modifier_maps(&self) -> Vec<&Modifiers>;

    /// Add this source's modifiers to the accumulator
    fn apply(&self, stats: &mut StatAccumulator) {
        for map in self.modifier_maps() {
            stats.merge(map);
        }
        tracing::trace!(source = self.id(), "applied modifier source");
    }
}
