//! Armorsmith Core - domain types for equipment set search
//!
//! This crate provides the read-only inputs every search works from:
//! - Domain entities (skills, equipment, search conditions, equipment sets)
//! - The equipment master index ([`Catalog`]) with its builder
//! - The include/exclude toggle registry ([`CludeRegistry`])
//! - The per-item objective score used by the model builder

pub mod catalog;
pub mod clude;
pub mod domain;
pub mod error;
pub mod score;

pub use catalog::{Catalog, CatalogBuilder, SkillLimits};
pub use clude::{Clude, CludeKind, CludeRegistry};
pub use domain::{
    DecoInfo, Element, EquipKind, EquipSet, Equipment, LevelMatch, RequiredSkill, Resistances,
    SearchCondition, Sex, Skill, SkillLevel,
};
pub use error::{ArmorsmithError, Result};
