//! Derived survivability stats computed from a resolved pool

use crate::modifiers::StatValue;
use crate::stat_pool::StatPool;
use crate::types::{Attribute, Resistance};
use serde::Serialize;

/// Round to the nearest integer, ties to even
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Effective health, mana, regeneration and movement speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenericStats {
    pub health: f64,
    /// Only the flat sum is rounded; the increased multiplier applies after
    pub mana: f64,
    pub health_regen: f64,
    pub mana_regen: f64,
    /// Read straight from the pool
    pub movement_speed: StatValue,
}

impl GenericStats {
    pub fn from_pool(pool: &StatPool, level: u32) -> Self {
        let level = f64::from(level);

        let health = round_half_even(
            (pool.get("health")
                + pool.get("health_per_level") * level
                + pool.get("vitality") * 10.0)
                * (1.0 + pool.get("increased_health") * 0.01),
        );
        let mana = round_half_even(
            pool.get("mana") + pool.get("mana_per_level") * level + pool.get("attunement") * 2.0,
        ) * (1.0 + pool.get("increased_mana") * 0.01);
        let health_regen = round_half_even(
            pool.get("health_regeneration")
                * (1.0
                    + 0.01
                        * (pool.get("increased_health_regeneration")
                            + 2.0 * pool.get("vitality"))),
        );
        let mana_regen = round_half_even(
            pool.get("mana_regeneration")
                * (1.0 + pool.get("increased_mana_regeneration") * 0.01),
        );

        GenericStats {
            health,
            mana,
            health_regen,
            mana_regen,
            movement_speed: pool.value("movement_speed"),
        }
    }
}

/// Resistance values in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResistanceTable {
    pub entries: Vec<(Resistance, StatValue)>,
}

impl ResistanceTable {
    pub fn from_pool(pool: &StatPool) -> Self {
        ResistanceTable {
            entries: Resistance::all()
                .iter()
                .map(|res| (*res, pool.value(res.stat_name())))
                .collect(),
        }
    }

    pub fn get(&self, resistance: Resistance) -> f64 {
        self.entries
            .iter()
            .find(|(res, _)| *res == resistance)
            .map(|(_, value)| value.as_f64())
            .unwrap_or(0.0)
    }
}

/// Core attribute values in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeTable {
    pub entries: Vec<(Attribute, StatValue)>,
}

impl AttributeTable {
    pub fn from_pool(pool: &StatPool) -> Self {
        AttributeTable {
            entries: Attribute::all()
                .iter()
                .map(|attr| (*attr, pool.value(attr.stat_name())))
                .collect(),
        }
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        self.entries
            .iter()
            .find(|(attr, _)| *attr == attribute)
            .map(|(_, value)| value.as_f64())
            .unwrap_or(0.0)
    }
}

/// Block and armour figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdditionalStats {
    /// Chance to block as a fraction (0.25 = 25%)
    pub block_chance: f64,
    pub block_effectiveness: StatValue,
    pub armor: f64,
}

impl AdditionalStats {
    pub fn from_pool(pool: &StatPool) -> Self {
        AdditionalStats {
            block_chance: pool.get("block_chance") * 0.01,
            block_effectiveness: pool.value("block_effectiveness"),
            armor: round_half_even(
                pool.get("armor") * (1.0 + pool.get("increased_armour") * 0.01),
            ),
        }
    }
}
