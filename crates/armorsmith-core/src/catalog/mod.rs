//! Equipment master index.
//!
//! A [`Catalog`] is an immutable snapshot of every item and skill the
//! search may use. Searches borrow it read-only, so several searches can
//! run against one snapshot concurrently.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{EquipKind, Equipment, Skill};
use crate::error::{ArmorsmithError, Result};

/// Highest decoration slot size.
pub const MAX_SLOT_SIZE: u32 = 4;

/// Upper bounds on the number of skill contributions per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLimits {
    /// Armor pieces (head to leg).
    pub equip: usize,
    /// Charms and decorations.
    pub deco: usize,
}

impl Default for SkillLimits {
    fn default() -> Self {
        Self { equip: 5, deco: 2 }
    }
}

impl SkillLimits {
    fn for_kind(&self, kind: EquipKind) -> usize {
        match kind {
            EquipKind::Charm | EquipKind::Deco => self.deco,
            _ => self.equip,
        }
    }
}

/// Read-only snapshot of equipment and skills.
#[derive(Debug, Clone)]
pub struct Catalog {
    by_kind: [Vec<Arc<Equipment>>; 7],
    skills: Vec<Skill>,
    empty: Arc<Equipment>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            by_kind: Default::default(),
            skills: Vec::new(),
            empty: Arc::new(Equipment::empty(EquipKind::Head)),
        }
    }
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Items of one kind, in catalog order.
    pub fn of_kind(&self, kind: EquipKind) -> &[Arc<Equipment>] {
        &self.by_kind[kind.index()]
    }

    /// Every item: heads, bodies, arms, waists, legs, charms, decorations.
    pub fn equipment(&self) -> impl Iterator<Item = &Arc<Equipment>> {
        self.by_kind.iter().flatten()
    }

    /// Skill definitions in catalog order; `level` is the max level.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Max level of a skill, or 0 for skills the catalog does not know.
    pub fn skill_max_level(&self, name: &str) -> u32 {
        self.skill(name).map_or(0, |s| s.level)
    }

    /// Looks an item up by its trimmed name across all kinds.
    ///
    /// Never fails: an unknown name yields the empty sentinel, for which
    /// [`Equipment::is_empty`] is true.
    pub fn find_by_name(&self, name: &str) -> &Arc<Equipment> {
        let name = name.trim();
        if name.is_empty() {
            return &self.empty;
        }
        self.equipment()
            .find(|e| e.name == name)
            .unwrap_or(&self.empty)
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.by_kind.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Assembles and validates a [`Catalog`].
///
/// # Examples
///
/// ```
/// use armorsmith_core::{Catalog, Equipment, EquipKind, Skill, SkillLimits};
///
/// let catalog = Catalog::builder()
///     .skill(Skill::new("Attack", 3, "offense"))
///     .skill(Skill::new("Attack", 7, "offense"))
///     .equipment(Equipment::new("Cap", EquipKind::Head).with_skill("Attack", 1))
///     .build(SkillLimits::default())
///     .unwrap();
///
/// assert_eq!(catalog.skill_max_level("Attack"), 7);
/// assert_eq!(catalog.find_by_name(" Cap ").name, "Cap");
/// assert!(catalog.find_by_name("Hood").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    equipment: Vec<Equipment>,
    skills: Vec<Skill>,
}

impl CatalogBuilder {
    /// Adds a skill row.
    ///
    /// Rows sharing a name and category collapse into one skill whose level
    /// is the highest seen; per-level display names are merged.
    pub fn skill(mut self, skill: Skill) -> Self {
        match self
            .skills
            .iter_mut()
            .find(|s| s.name == skill.name && s.category == skill.category)
        {
            Some(existing) => {
                existing.level = existing.level.max(skill.level);
                existing.specific_names.extend(skill.specific_names);
            }
            None => self.skills.push(skill),
        }
        self
    }

    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.equipment.push(equipment);
        self
    }

    pub fn extend_equipment(mut self, equipment: impl IntoIterator<Item = Equipment>) -> Self {
        self.equipment.extend(equipment);
        self
    }

    /// Validates the rows and freezes them into a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ArmorsmithError::Catalog`] for blank or duplicate names
    /// within a kind, slot sizes above 4, too many skill contributions, or
    /// decoration data on a non-decoration (and vice versa).
    pub fn build(self, limits: SkillLimits) -> Result<Catalog> {
        let mut seen: HashSet<(EquipKind, &str)> = HashSet::new();
        for equip in &self.equipment {
            validate(equip, limits)?;
            if !seen.insert((equip.kind, equip.name.as_str())) {
                return Err(ArmorsmithError::Catalog(format!(
                    "duplicate {} '{}'",
                    equip.kind, equip.name
                )));
            }
        }

        let mut catalog = Catalog {
            skills: self.skills,
            ..Catalog::default()
        };
        for equip in self.equipment {
            catalog.by_kind[equip.kind.index()].push(Arc::new(equip));
        }
        Ok(catalog)
    }
}

fn validate(equip: &Equipment, limits: SkillLimits) -> Result<()> {
    if equip.is_empty() {
        return Err(ArmorsmithError::Catalog(format!(
            "{} with a blank name",
            equip.kind
        )));
    }
    if let Some(size) = equip.slots.iter().find(|&&s| s > MAX_SLOT_SIZE) {
        return Err(ArmorsmithError::Catalog(format!(
            "'{}' has slot size {size}, max is {MAX_SLOT_SIZE}",
            equip.name
        )));
    }
    let limit = limits.for_kind(equip.kind);
    if equip.skills.len() > limit {
        return Err(ArmorsmithError::Catalog(format!(
            "'{}' has {} skills, max is {limit}",
            equip.name,
            equip.skills.len()
        )));
    }
    if equip.kind.is_deco() != equip.deco.is_some() {
        return Err(ArmorsmithError::Catalog(format!(
            "'{}' decoration data does not match kind {}",
            equip.name, equip.kind
        )));
    }
    Ok(())
}
