//! Search conditions.

use super::kind::{Element, Sex};

/// How a requested skill level is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LevelMatch {
    /// The summed level must equal the requested level.
    Exact,
    /// The summed level must reach the requested level.
    #[default]
    AtLeast,
}

/// A skill the player requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequiredSkill {
    pub name: String,
    pub level: u32,
    pub matching: LevelMatch,
}

impl RequiredSkill {
    pub fn at_least(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            matching: LevelMatch::AtLeast,
        }
    }

    pub fn exact(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            matching: LevelMatch::Exact,
        }
    }

    /// Returns true if a summed level of `level` meets this requirement.
    pub fn is_met_by(&self, level: u32) -> bool {
        match self.matching {
            LevelMatch::Exact => level == self.level,
            LevelMatch::AtLeast => level >= self.level,
        }
    }
}

/// What the player asks a search to satisfy.
///
/// # Examples
///
/// ```
/// use armorsmith_core::{Element, RequiredSkill, SearchCondition, Sex};
///
/// let condition = SearchCondition::new()
///     .with_weapon_slots([2, 1, 0])
///     .with_sex(Sex::Female)
///     .with_min_defense(300)
///     .with_resistance_floor(Element::Fire, 5)
///     .with_skill(RequiredSkill::at_least("Attack Boost", 4));
///
/// assert_eq!(condition.resistance_floor(Element::Fire), Some(5));
/// assert_eq!(condition.resistance_floor(Element::Ice), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCondition {
    pub weapon_slots: [u32; 3],
    pub sex: Sex,
    pub min_defense: Option<i32>,
    pub resistance_floors: [Option<i32>; 5],
    pub skills: Vec<RequiredSkill>,
}

impl SearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weapon_slots(mut self, slots: [u32; 3]) -> Self {
        self.weapon_slots = slots;
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_min_defense(mut self, defense: i32) -> Self {
        self.min_defense = Some(defense);
        self
    }

    pub fn with_resistance_floor(mut self, element: Element, floor: i32) -> Self {
        self.resistance_floors[element.index()] = Some(floor);
        self
    }

    pub fn with_skill(mut self, skill: RequiredSkill) -> Self {
        self.skills.push(skill);
        self
    }

    #[inline]
    pub fn resistance_floor(&self, element: Element) -> Option<i32> {
        self.resistance_floors[element.index()]
    }

    pub fn skill(&self, name: &str) -> Option<&RequiredSkill> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Adds a skill requirement.
    ///
    /// Appends unknown skills. For a skill already present at a lower level
    /// the level is raised and its match mode kept. Returns false, leaving
    /// the condition untouched, when the skill is already required at
    /// `skill.level` or above.
    pub fn add_skill(&mut self, skill: RequiredSkill) -> bool {
        match self.skills.iter_mut().find(|s| s.name == skill.name) {
            Some(existing) if existing.level >= skill.level => false,
            Some(existing) => {
                existing.level = skill.level;
                true
            }
            None => {
                self.skills.push(skill);
                true
            }
        }
    }
}
