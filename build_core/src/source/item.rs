//! Item - Equipment or idol with three affix groups

use crate::modifiers::Modifiers;
use crate::source::StatSource;
use serde::{Deserialize, Serialize};

/// An equipped item or idol
///
/// Prefixes, suffixes and implicits are independent slots; none takes
/// precedence and all three are summed into the pool identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, used only for logs and errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub prefixes: Modifiers,
    #[serde(default)]
    pub suffixes: Modifiers,
    #[serde(default)]
    pub implicits: Modifiers,
}

impl Item {
    /// Create an unnamed item from its three affix groups
    pub fn new(prefixes: Modifiers, suffixes: Modifiers, implicits: Modifiers) -> Self {
        Item {
            name: None,
            prefixes,
            suffixes,
            implicits,
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sum of all three affix groups
    pub fn total(&self) -> Modifiers {
        Modifiers::sum(self.modifier_maps())
    }
}

impl StatSource for Item {
    fn id(&self) -> &str {
        self.name.as_deref().unwrap_or("item")
    }

    fn modifier_maps(&self) -> Vec<&Modifiers> {
        vec![&self.prefixes, &self.suffixes, &self.implicits]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_pool::StatAccumulator;

    #[test]
    fn test_item_id() {
        let item = Item::default();
        assert_eq!(item.id(), "item");
        assert_eq!(item.with_name("helmet").id(), "helmet");
    }

    #[test]
    fn test_all_slots_are_summed() {
        let item = Item::new(
            Modifiers::from([("vitality", 8.0), ("increased_void_damage", 57.0)]),
            Modifiers::from([("health", 62.0)]),
            Modifiers::from([("vitality", 2.0)]),
        );

        let mut acc = StatAccumulator::new();
        item.apply(&mut acc);

        assert!((acc.get("vitality") - 10.0).abs() < f64::EPSILON);
        assert!((acc.get("health") - 62.0).abs() < f64::EPSILON);
        assert!((item.total().get("increased_void_damage") - 57.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_slots_default_empty() {
        let item: Item = toml::from_str("prefixes = { cast_speed = 10 }").unwrap();
        assert!(item.suffixes.is_empty());
        assert!(item.implicits.is_empty());
        assert!((item.total().get("cast_speed") - 10.0).abs() < f64::EPSILON);
    }
}
