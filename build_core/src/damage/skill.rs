//! Skill formulas - per-skill base damage and correction

use crate::stat_pool::StatPool;
use std::collections::HashMap;

/// How a specific skill turns the stat pool into flat hit damage
///
/// Everything after base damage (increases, crit, echo, repeat, cast speed)
/// is shared by all skills and lives in
/// [`calculate_damage`](crate::damage::calculate_damage).
pub trait SkillFormula: Send + Sync {
    /// Skill name this formula is registered under
    fn id(&self) -> &str;

    /// Flat damage of one hit before any multiplier
    fn base_damage(&self, stats: &StatPool) -> f64;

    /// Multiplier applied to the final figure
    fn correction_factor(&self) -> f64 {
        1.0
    }
}

/// The smite spell
#[derive(Debug, Clone, Copy, Default)]
pub struct Smite;

impl Smite {
    pub const BASE_DAMAGE: f64 = 30.0;
    /// Effectiveness of added damage
    pub const ADDED_EFFECTIVENESS: f64 = 1.5;
    /// Empirical in-game calibration for this skill
    pub const CORRECTION: f64 = 0.7703253494;
}

impl SkillFormula for Smite {
    fn id(&self) -> &str {
        "smite"
    }

    fn base_damage(&self, stats: &StatPool) -> f64 {
        let added = stats.get("added_adaptive_spell_damage")
            + stats.get("added_void_spell_damage")
            + stats.get("added_void_damage")
            + stats.get("smite_damage_per_vitality") * stats.get("vitality");
        Self::BASE_DAMAGE + Self::ADDED_EFFECTIVENESS * added
    }

    fn correction_factor(&self) -> f64 {
        Self::CORRECTION
    }
}

/// Skill name → damage formula
pub struct SkillRegistry {
    formulas: HashMap<String, Box<dyn SkillFormula>>,
}

impl SkillRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        SkillRegistry {
            formulas: HashMap::new(),
        }
    }

    /// Registry with every built-in skill
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Smite));
        registry
    }

    /// Register a formula under its id, replacing any existing one
    pub fn register(&mut self, formula: Box<dyn SkillFormula>) {
        self.formulas.insert(formula.id().to_string(), formula);
    }

    pub fn get(&self, skill: &str) -> Option<&dyn SkillFormula> {
        self.formulas.get(skill).map(|f| f.as_ref())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.formulas.contains_key(skill)
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
