//! Domain entities for equipment set search
//!
//! - `Equipment`: one piece of armor, a charm or a decoration
//! - `Skill`: a catalog skill definition, or an achievable skill level
//! - `SearchCondition`: what the player asks for
//! - `EquipSet`: one feasible assignment produced by a search

mod condition;
mod equip_set;
mod equipment;
mod kind;
mod skill;

pub use condition::{LevelMatch, RequiredSkill, SearchCondition};
pub use equip_set::EquipSet;
pub use equipment::{DecoInfo, Equipment};
pub use kind::{Element, EquipKind, Resistances, Sex};
pub use skill::{Skill, SkillLevel};
