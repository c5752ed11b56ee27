//! Prelude module for convenient imports
//!
//! ```rust
//! use build_core::prelude::*;
//! ```

// Core types
pub use crate::build::{Build, BuildError};
pub use crate::modifiers::{Modifiers, StatValue};
pub use crate::types::{Attribute, Resistance};

// Sources
pub use crate::source::{Blessings, Item, StatSource, Tree};

// Stats
pub use crate::stat_pool::{GenericStats, StatPool};

// Damage system
pub use crate::damage::{DamageBreakdown, SkillFormula, SkillRegistry, SkillTags};

// Config
pub use crate::config::{default_build_config, default_skill_tags};
