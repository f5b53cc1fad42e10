//! Starter Set Example
//!
//! Searches a tiny catalog of beginner armor for sets with Attack 3 and
//! at least 100 defense, then lists which extra skills would still fit.
//!
//! Reads `armorsmith.toml` from the working directory when present.

use std::sync::Arc;

use armorsmith::prelude::*;
use armorsmith::{Resistances, SkillLimits};

fn catalog(limits: SkillLimits) -> armorsmith::Result<Catalog> {
    let armor = |name: &str, kind: EquipKind, defense: i32, skill: &str| {
        Equipment::new(name, kind)
            .with_rarity(1)
            .with_slots([1, 0, 0])
            .with_defense(defense - 5, defense)
            .with_resistances(Resistances::new(1, 0, 0, -1, 0))
            .with_skill(skill, 1)
    };

    Catalog::builder()
        .skill(Skill::new("Attack", 5, "offense"))
        .skill(Skill::new("Guard", 3, "defense"))
        .equipment(armor("Leather Cap", EquipKind::Head, 25, "Attack"))
        .equipment(armor("Leather Vest", EquipKind::Body, 25, "Attack"))
        .equipment(armor("Leather Gloves", EquipKind::Arm, 25, "Guard"))
        .equipment(armor("Leather Belt", EquipKind::Waist, 25, "Attack"))
        .equipment(armor("Leather Boots", EquipKind::Leg, 25, "Attack"))
        .equipment(armor("Bone Helm", EquipKind::Head, 30, "Guard").with_slots([2, 0, 0]))
        .equipment(Equipment::deco("Attack Jewel", 1, 3, "Attack").with_skill("Attack", 1))
        .equipment(Equipment::deco("Guard Jewel", 1, 2, "Guard").with_skill("Guard", 1))
        .build(limits)
}

fn main() -> armorsmith::Result<()> {
    armorsmith::console::init();

    let config = SimConfig::load("armorsmith.toml").unwrap_or_default();
    let catalog = catalog(config.skill_limits())?;
    let mut sim = Simulator::new(Arc::new(catalog), CludeRegistry::new(), config);

    let condition = SearchCondition::new()
        .with_min_defense(100)
        .with_sex(Sex::Male)
        .with_skill(RequiredSkill::at_least("Attack", 3));

    for (i, set) in sim.search(&condition, 5).iter().enumerate() {
        println!("\nSet {} (defense {}):", i + 1, set.total_defense());
        for equip in set.all_equips() {
            println!("  {}", equip.simple_description());
        }
    }

    let extra = sim.search_extra_skill(&condition, None)?;
    println!("\nExtra skills:");
    for skill in extra {
        println!("  {}", skill.description());
    }
    Ok(())
}
