//! Blessings - Global bonuses granted outside of gear and the tree

use crate::modifiers::Modifiers;
use crate::source::StatSource;

/// Collected blessings, structurally the same as a [`Tree`](crate::source::Tree)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blessings {
    mods: Vec<Modifiers>,
    stats: Modifiers,
}

impl Blessings {
    pub fn new(mods: Vec<Modifiers>) -> Self {
        let stats = Modifiers::sum(&mods);
        Blessings { mods, stats }
    }

    pub fn mods(&self) -> &[Modifiers] {
        &self.mods
    }

    pub fn stats(&self) -> &Modifiers {
        &self.stats
    }
}

impl StatSource for Blessings {
    fn id(&self) -> &str {
        "blessings"
    }

    fn modifier_maps(&self) -> Vec<&Modifiers> {
        vec![&self.stats]
    }
}
