//! Damage calculation - turning a skill + resolved stats into expected hit damage

use super::{applicable_modifiers, SkillFormula};
use crate::stat_pool::StatPool;
use serde::Serialize;
use std::collections::BTreeSet;

/// Every intermediate figure of one skill's damage calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageBreakdown {
    pub skill: String,
    /// Flat damage from the skill formula
    pub base: f64,
    /// Summed increased% modifiers that apply to the skill's tags
    pub increases: f64,
    /// Chance to crit, capped at 1.0
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub pre_crit: f64,
    /// Expected damage averaged over crit and non-crit hits
    pub post_crit: f64,
    pub post_echo: f64,
    pub post_repeat: f64,
    pub post_cast_speed: f64,
    pub final_damage: f64,
}

impl DamageBreakdown {
    /// Final damage truncated toward zero
    pub fn truncated(&self) -> i64 {
        self.final_damage.trunc() as i64
    }
}

/// Sum of pool values for selected modifiers whose name contains "increased"
pub fn sum_increases(stats: &StatPool, selected: &BTreeSet<&str>) -> f64 {
    selected
        .iter()
        .filter(|stat| stat.contains("increased"))
        .map(|stat| stats.get(stat))
        .sum()
}

/// Crit chance as a fraction, capped at 1.0
pub fn crit_chance(stats: &StatPool) -> f64 {
    let chance = 1.0
        + (stats.get("critical_strike_chance") + stats.get("spell_critical_chance")) / 100.0;
    f64::min(1.0, stats.get("base_crit") * chance / 100.0)
}

/// Damage multiplier of a critical hit
pub fn crit_multiplier(stats: &StatPool) -> f64 {
    2.0 + stats.get("critical_strike_multiplier") / 100.0
}

/// Calculate expected hit damage of a skill
///
/// `skill_tags` decide which increased% modifiers count; every other stat is
/// read straight from the pool.
pub fn calculate_damage<S: AsRef<str>>(
    stats: &StatPool,
    formula: &dyn SkillFormula,
    skill_tags: &[S],
) -> DamageBreakdown {
    let selected = applicable_modifiers(skill_tags);

    // Step 1: base damage and increases
    let base = formula.base_damage(stats);
    let increases = sum_increases(stats, &selected);

    // Step 2: crit
    let crit_chance = crit_chance(stats);
    let crit_multiplier = crit_multiplier(stats);

    // Step 3: multipliers, in order
    let pre_crit = base
        * (1.0 + increases / 100.0)
        * (1.0 + stats.get("more_damage") / 100.0)
        * (1.0 + stats.get("void_penetration") / 100.0);
    let post_crit = crit_chance * crit_multiplier * pre_crit + (1.0 - crit_chance) * pre_crit;
    let post_echo = post_crit * (1.0 + stats.get("echo_chance") / 100.0);
    let post_repeat = post_echo * (1.0 + stats.get("repeat_chance") / 100.0);

    let cast_speed = stats.get("cast_speed");
    tracing::debug!(skill = formula.id(), cast_speed, "applying cast speed");
    let post_cast_speed = post_repeat * (1.0 + cast_speed / 100.0);

    let final_damage = post_cast_speed * formula.correction_factor();

    DamageBreakdown {
        skill: formula.id().to_string(),
        base,
        increases,
        crit_chance,
        crit_multiplier,
        pre_crit,
        post_crit,
        post_echo,
        post_repeat,
        post_cast_speed,
        final_damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::Smite;
    use crate::modifiers::Modifiers;
    use crate::stat_pool::StatAccumulator;

    const SMITE_TAGS: [&str; 4] = ["smite", "void", "spell", "vitality"];

    fn pool_from(mods: Modifiers) -> StatPool {
        let mut acc = StatAccumulator::new();
        acc.merge(&mods);
        acc.unpack()
    }

    #[test]
    fn test_bare_smite() {
        let pool = pool_from(Modifiers::new());
        let dmg = calculate_damage(&pool, &Smite, &SMITE_TAGS);

        assert!((dmg.base - 30.0).abs() < f64::EPSILON);
        assert!((dmg.crit_chance - 0.0).abs() < f64::EPSILON);
        assert!((dmg.crit_multiplier - 2.0).abs() < f64::EPSILON);
        assert!((dmg.final_damage - 30.0 * Smite::CORRECTION).abs() < 1e-9);
        assert_eq!(dmg.truncated(), 23);
    }

    #[test]
    fn test_increases_filtered_by_tags() {
        let pool = pool_from(Modifiers::from([
            ("increased_spell_damage", 90.0),
            ("increased_void_damage", 57.0),
            ("increased_smite_damage", 52.0),
            ("increased_fire_damage", 64.0),
        ]));

        let all = calculate_damage(&pool, &Smite, &SMITE_TAGS);
        assert!((all.increases - 199.0).abs() < f64::EPSILON);

        let no_smite = calculate_damage(&pool, &Smite, &["spell", "void"]);
        assert!((no_smite.increases - 147.0).abs() < f64::EPSILON);

        let no_spell = calculate_damage(&pool, &Smite, &["smite", "void"]);
        assert!((no_spell.increases - 109.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_increased_mods_do_not_count_as_increases() {
        let pool = pool_from(Modifiers::from([("void_penetration", 8.0), ("cast_speed", 46.0)]));
        let dmg = calculate_damage(&pool, &Smite, &SMITE_TAGS);
        assert!((dmg.increases - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crit_chance_is_capped() {
        let pool = pool_from(Modifiers::from([
            ("base_crit", 50.0),
            ("critical_strike_chance", 500.0),
        ]));
        assert!((crit_chance(&pool) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crit_chance_scaling() {
        // 15 * (1 + 421 / 100) / 100 = 0.7815
        let pool = pool_from(Modifiers::from([
            ("base_crit", 15.0),
            ("critical_strike_chance", 303.0),
            ("spell_critical_chance", 118.0),
            ("critical_strike_multiplier", 146.0),
        ]));
        assert!((crit_chance(&pool) - 0.7815).abs() < 1e-12);
        assert!((crit_multiplier(&pool) - 3.46).abs() < 1e-12);
    }

    #[test]
    fn test_multiplier_chain() {
        // base 30, no crit
        // 30 * 2 * 1.5 * 1.1 = 99
        // * 1.4 * 1.5 * 1.2 = 249.48
        let pool = pool_from(Modifiers::from([
            ("increased_void_damage", 100.0),
            ("more_damage", 50.0),
            ("void_penetration", 10.0),
            ("echo_chance", 40.0),
            ("repeat_chance", 50.0),
            ("cast_speed", 20.0),
        ]));
        let dmg = calculate_damage(&pool, &Smite, &SMITE_TAGS);

        assert!((dmg.pre_crit - 99.0).abs() < 1e-9);
        assert!((dmg.post_crit - dmg.pre_crit).abs() < 1e-9);
        assert!((dmg.post_echo - 138.6).abs() < 1e-9);
        assert!((dmg.post_repeat - 207.9).abs() < 1e-9);
        assert!((dmg.post_cast_speed - 249.48).abs() < 1e-9);
        assert!((dmg.final_damage - 249.48 * Smite::CORRECTION).abs() < 1e-9);
    }

    #[test]
    fn test_expected_crit_damage() {
        // 50% crit at 3x: 0.5 * 3 * 30 + 0.5 * 30 = 60
        let pool = pool_from(Modifiers::from([
            ("base_crit", 50.0),
            ("critical_strike_multiplier", 100.0),
        ]));
        let dmg = calculate_damage(&pool, &Smite, &SMITE_TAGS);
        assert!((dmg.post_crit - 60.0).abs() < 1e-9);
    }
}
