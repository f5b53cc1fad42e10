//! Armorsmith - equipment set search on a MILP solver
//!
//! Describe the skills, defense and resistances you want; Armorsmith
//! enumerates the best armor and decoration combinations that satisfy them,
//! and can list every skill level that would still fit on top.
//!
//! # Example
//!
//! ```rust
//! use armorsmith::prelude::*;
//!
//! let condition = SearchCondition::new()
//!     .with_min_defense(100)
//!     .with_skill(RequiredSkill::at_least("Attack", 3));
//! assert_eq!(condition.skills.len(), 1);
//! ```

// Domain types
pub use armorsmith_core::{
    Catalog, CatalogBuilder, Clude, CludeKind, CludeRegistry, DecoInfo, Element, EquipKind,
    EquipSet, Equipment, LevelMatch, RequiredSkill, Resistances, SearchCondition, Sex, Skill,
    SkillLevel, SkillLimits,
};
pub use armorsmith_core::{ArmorsmithError, Result};

// Configuration
pub use armorsmith_config::{ConfigError, SearchConfig, SimConfig};

// Engine
pub use armorsmith_solver::{
    CancelFlag, ExtraSkillScanner, HighsBackend, ScanOutcome, SearchState, Searcher,
    SolverBackend,
};

mod recent;
mod simulator;

pub use recent::RecentSkills;
pub use simulator::Simulator;

/// Colored terminal output for search and scan events.
#[cfg(feature = "console")]
pub mod console {
    pub use armorsmith_console::{init, ArmorsmithConsoleLayer};
}

pub mod prelude {
    pub use super::{
        Catalog, CludeRegistry, EquipKind, EquipSet, Equipment, RequiredSkill, SearchCondition,
        Sex, Skill,
    };
    pub use super::{CancelFlag, SimConfig, Simulator};
}
