//! Constructors for small hand-made catalogs.

use armorsmith_core::{Catalog, EquipKind, Equipment, Skill, SkillLimits};

/// Armor piece with one size-1 slot, defense 20..25 and no skills.
pub fn armor(name: &str, kind: EquipKind) -> Equipment {
    Equipment::new(name, kind)
        .with_rarity(1)
        .with_slots([1, 0, 0])
        .with_defense(20, 25)
}

/// Decoration of `size` granting `skill` +1, with `owned` copies.
pub fn deco(name: &str, size: u32, owned: u32, skill: &str) -> Equipment {
    Equipment::deco(name, size, owned, skill).with_skill(skill, 1)
}

/// Builds a catalog from `skills` and `equipment` with default limits.
///
/// # Panics
///
/// Panics if the catalog fails validation.
pub fn catalog_of(skills: Vec<Skill>, equipment: Vec<Equipment>) -> Catalog {
    skills
        .into_iter()
        .fold(Catalog::builder(), |builder, skill| builder.skill(skill))
        .extend_equipment(equipment)
        .build(SkillLimits::default())
        .expect("fixture catalog is valid")
}
