//! Skill definitions and skill contributions.

use std::collections::BTreeMap;

/// Category label given to skills the catalog does not categorise.
pub const UNCATEGORISED: &str = "uncategorised";

/// A named skill at a level.
///
/// In a [`Catalog`](crate::Catalog) `level` is the skill's maximum level.
/// In a feasibility scan result it is the achievable level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub level: u32,
    pub category: String,
    /// Display names that replace `"{name} Lv{level}"` for specific levels.
    pub specific_names: BTreeMap<u32, String>,
}

impl Skill {
    /// Creates a skill; a blank category falls back to [`UNCATEGORISED`].
    pub fn new(name: impl Into<String>, level: u32, category: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            name: name.into(),
            level,
            category: if category.trim().is_empty() {
                UNCATEGORISED.to_string()
            } else {
                category
            },
            specific_names: BTreeMap::new(),
        }
    }

    /// Adds a display-name override for one level.
    pub fn with_specific_name(mut self, level: u32, name: impl Into<String>) -> Self {
        self.specific_names.insert(level, name.into());
        self
    }

    /// Returns a copy of this skill at another level, keeping category and overrides.
    pub fn at_level(&self, level: u32) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    /// Human-readable label for this skill at its level.
    ///
    /// Empty for a nameless skill or level 0.
    pub fn description(&self) -> String {
        if self.name.trim().is_empty() || self.level == 0 {
            return String::new();
        }
        match self.specific_names.get(&self.level) {
            Some(specific) => specific.clone(),
            None => format!("{} Lv{}", self.name, self.level),
        }
    }
}

/// Skill points an equipment item contributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLevel {
    pub name: String,
    pub level: u32,
}

impl SkillLevel {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}
