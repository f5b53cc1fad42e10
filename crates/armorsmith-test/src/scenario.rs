//! The five-armor "Attack" scenario.
//!
//! One head/body/arm/waist/leg piece, each with defense 25, Attack +1 and
//! one size-1 slot, plus three "Attack Jewel" decorations. Guard has a
//! single jewel, so Guard 1 is the highest level any set reaches.

use armorsmith_core::{Catalog, EquipKind, Equipment, RequiredSkill, SearchCondition, Sex, Skill};

use crate::builders::{armor, catalog_of, deco};

pub const ATTACK: &str = "Attack";
pub const GUARD: &str = "Guard";
pub const ATTACK_JEWEL: &str = "Attack Jewel";
pub const GUARD_JEWEL: &str = "Guard Jewel";

/// Names of the five armor pieces, in body-slot order.
pub const ARMOR_NAMES: [&str; 5] = [
    "Iron Helm",
    "Iron Mail",
    "Iron Vambraces",
    "Iron Coil",
    "Iron Greaves",
];

/// The five armor pieces, in body-slot order.
pub fn attack_armor() -> Vec<Equipment> {
    EquipKind::ARMOR
        .iter()
        .zip(ARMOR_NAMES)
        .map(|(&kind, name)| armor(name, kind).with_skill(ATTACK, 1))
        .collect()
}

/// Catalog with the five armor pieces and the Attack jewels only.
pub fn attack_catalog() -> Catalog {
    let mut equipment = attack_armor();
    equipment.push(deco(ATTACK_JEWEL, 1, 3, ATTACK));
    catalog_of(vec![Skill::new(ATTACK, 5, "offense")], equipment)
}

/// [`attack_catalog`] plus Guard (max level 3) and a single Guard jewel.
pub fn attack_guard_catalog() -> Catalog {
    let mut equipment = attack_armor();
    equipment.push(deco(ATTACK_JEWEL, 1, 3, ATTACK));
    equipment.push(deco(GUARD_JEWEL, 1, 1, GUARD));
    catalog_of(
        vec![Skill::new(ATTACK, 5, "offense"), Skill::new(GUARD, 3, "defense")],
        equipment,
    )
}

/// Defense ≥ 100, Attack ≥ 3, male wearer, no weapon slots.
pub fn attack_condition() -> SearchCondition {
    SearchCondition::new()
        .with_min_defense(100)
        .with_sex(Sex::Male)
        .with_skill(RequiredSkill::at_least(ATTACK, 3))
}
