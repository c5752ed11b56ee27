//! Damage system - skill tags, skill formulas and the hit damage chain

mod calculation;
mod skill;
mod tags;

pub use calculation::{calculate_damage, crit_chance, crit_multiplier, sum_increases, DamageBreakdown};
pub use skill::{SkillFormula, SkillRegistry, Smite};
pub use tags::{applicable_modifiers, SkillTags, TAG_TO_STATS};
