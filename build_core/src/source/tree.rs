//! Tree - Stats from allocated passive tree nodes

use crate::modifiers::Modifiers;
use crate::source::StatSource;

/// Allocated passive tree nodes
///
/// Node order is kept for provenance only; the build reads the reduced total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    mods: Vec<Modifiers>,
    stats: Modifiers,
}

impl Tree {
    /// Create a tree from its allocated nodes, in allocation order
    pub fn new(mods: Vec<Modifiers>) -> Self {
        let stats = Modifiers::sum(&mods);
        Tree { mods, stats }
    }

    /// Allocated nodes in order
    pub fn mods(&self) -> &[Modifiers] {
        &self.mods
    }

    /// Sum of every allocated node
    pub fn stats(&self) -> &Modifiers {
        &self.stats
    }

    pub fn node_count(&self) -> usize {
        self.mods.len()
    }
}

impl StatSource for Tree {
    fn id(&self) -> &str {
        "tree"
    }

    fn modifier_maps(&self) -> Vec<&Modifiers> {
        vec![&self.stats]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_pool::StatAccumulator;

    #[test]
    fn test_tree_reduces_nodes() {
        let tree = Tree::new(vec![
            Modifiers::from([("vitality", 8.0)]),
            Modifiers::from([("critical_strike_multiplier", 71.0)]),
            Modifiers::from([("vitality", 5.0)]),
            Modifiers::from([("critical_strike_multiplier", 75.0)]),
        ]);

        assert_eq!(tree.node_count(), 4);
        assert!((tree.stats().get("vitality") - 13.0).abs() < f64::EPSILON);
        assert!((tree.stats().get("critical_strike_multiplier") - 146.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tree_applies_total_once() {
        let tree = Tree::new(vec![
            Modifiers::from([("health", 150.0)]),
            Modifiers::from([("health", 32.0)]),
        ]);

        let mut acc = StatAccumulator::new();
        tree.apply(&mut acc);
        assert!((acc.get("health") - 182.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_tree() {
        let tree = Tree::default();
        assert_eq!(tree.node_count(), 0);
        assert!(tree.stats().is_empty());
    }
}
