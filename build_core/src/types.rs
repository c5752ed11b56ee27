//! Core types specific to build_core

use serde::{Deserialize, Serialize};

/// Pseudo-stat fanned out into every [`Attribute`]
pub const ALL_ATTRIBUTES: &str = "all_attributes";

/// Pseudo-stat fanned out into the elemental [`Resistance`]s
pub const ELEMENTAL_RESISTANCE: &str = "elemental_resistance";

/// Core character attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Attunement,
    Vitality,
}

impl Attribute {
    /// All attributes in display order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Intelligence,
            Attribute::Attunement,
            Attribute::Vitality,
        ]
    }

    /// Key of this attribute in the stat pool
    pub fn stat_name(self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Intelligence => "intelligence",
            Attribute::Attunement => "attunement",
            Attribute::Vitality => "vitality",
        }
    }

    /// Capitalized display label
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Intelligence => "Intelligence",
            Attribute::Attunement => "Attunement",
            Attribute::Vitality => "Vitality",
        }
    }
}

/// Damage resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resistance {
    Fire,
    Lightning,
    Cold,
    Physical,
    Poison,
    Necrotic,
    Void,
}

impl Resistance {
    /// All resistances in display order
    pub fn all() -> &'static [Resistance] {
        &[
            Resistance::Fire,
            Resistance::Lightning,
            Resistance::Cold,
            Resistance::Physical,
            Resistance::Poison,
            Resistance::Necrotic,
            Resistance::Void,
        ]
    }

    /// Resistances that receive `elemental_resistance`
    pub fn elemental() -> &'static [Resistance] {
        &[Resistance::Fire, Resistance::Lightning, Resistance::Cold]
    }

    pub fn is_elemental(self) -> bool {
        matches!(
            self,
            Resistance::Fire | Resistance::Lightning | Resistance::Cold
        )
    }

    /// Key of this resistance in the stat pool
    pub fn stat_name(self) -> &'static str {
        match self {
            Resistance::Fire => "fire_resistance",
            Resistance::Lightning => "lightning_resistance",
            Resistance::Cold => "cold_resistance",
            Resistance::Physical => "physical_resistance",
            Resistance::Poison => "poison_resistance",
            Resistance::Necrotic => "necrotic_resistance",
            Resistance::Void => "void_resistance",
        }
    }

    /// Column header used in the resistance table
    pub fn label(self) -> &'static str {
        match self {
            Resistance::Fire => "Fire",
            Resistance::Lightning => "Lightning",
            Resistance::Cold => "Cold",
            Resistance::Physical => "Physical",
            Resistance::Poison => "Poison",
            Resistance::Necrotic => "Necrotic",
            Resistance::Void => "Void",
        }
    }
}
