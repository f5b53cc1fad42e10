use std::sync::Arc;

use armorsmith_config::SimConfig;
use armorsmith_core::{CludeKind, EquipKind, RequiredSkill, SearchCondition};
use armorsmith_test::scenario::{attack_guard_catalog, ARMOR_NAMES, ATTACK, GUARD};
use armorsmith_test::{attack_catalog, attack_condition};

use super::*;

fn simulator() -> Simulator {
    Simulator::new(
        Arc::new(attack_catalog()),
        CludeRegistry::new(),
        SimConfig::default(),
    )
}

#[test]
fn test_search_returns_first_results() {
    let mut sim = simulator();

    let results = sim.search(&attack_condition(), 1);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].total_defense(), 125);
    assert!(!sim.is_searched_all());
}

#[test]
fn test_search_more_continues_session() {
    let mut sim = simulator();
    sim.search(&attack_condition(), 1);

    let results = sim.search_more(10);

    assert_eq!(results.len(), 5);
    assert!(sim.is_searched_all());
}

#[test]
fn test_search_more_without_search() {
    let mut sim = simulator();

    assert!(sim.search_more(10).is_empty());
    assert!(!sim.is_searched_all());
    assert!(sim.results().is_empty());
}

#[test]
fn test_new_search_replaces_session() {
    let mut sim = simulator();
    sim.search(&attack_condition(), 10);
    assert_eq!(sim.results().len(), 5);

    let exact = SearchCondition::new()
        .with_min_defense(125)
        .with_skill(RequiredSkill::exact(ATTACK, 5));
    let results = sim.search(&exact, 10);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].non_deco_equips().count(), 5);
}

#[test]
fn test_stale_cancel_is_cleared_by_search() {
    let mut sim = simulator();
    sim.cancel();

    sim.search(&attack_condition(), 10);

    assert!(sim.is_searched_all());
    assert!(!sim.cancel_flag().is_cancelled());
}

#[test]
fn test_cancel_flag_is_shared() {
    let sim = simulator();
    let handle = sim.cancel_flag();

    handle.cancel();
    sim.reset_cancel();

    assert!(!handle.is_cancelled());
}

#[test]
fn test_recent_skills_recorded() {
    let config = SimConfig::default().with_max_recent_skill_count(2);
    let mut sim = Simulator::new(Arc::new(attack_guard_catalog()), CludeRegistry::new(), config);

    sim.search(&attack_condition(), 1);
    let guard = SearchCondition::new().with_skill(RequiredSkill::at_least(GUARD, 1));
    sim.search(&guard, 1);

    assert_eq!(sim.recent_skill_names(), [GUARD, ATTACK]);
    assert_eq!(sim.recent_skills().capacity(), 2);
}

#[test]
fn test_extra_skill_search() {
    let sim = Simulator::new(
        Arc::new(attack_guard_catalog()),
        CludeRegistry::new(),
        SimConfig::default().with_parallelism(2),
    );

    let skills = sim.search_extra_skill(&attack_condition(), None).unwrap();

    let levels: Vec<(&str, u32)> = skills.iter().map(|s| (s.name.as_str(), s.level)).collect();
    assert_eq!(levels, vec![(ATTACK, 4), (ATTACK, 5), (GUARD, 1)]);
}

#[test]
fn test_include_applies_to_next_search() {
    let mut sim = simulator();
    let clude = sim.add_include(ARMOR_NAMES[2]).cloned().unwrap();
    assert_eq!(clude.kind, CludeKind::Include);

    let results = sim.search(&attack_condition(), 10);

    assert_eq!(results.len(), 4);
    assert!(results
        .iter()
        .all(|set| set.equip(EquipKind::Arm).unwrap().name == ARMOR_NAMES[2]));
}

#[test]
fn test_clude_management() {
    let mut sim = simulator();
    assert!(sim.add_exclude("Missing Helm").is_none());
    assert!(sim.add_exclude(ARMOR_NAMES[0]).is_some());
    assert!(sim.add_include(ARMOR_NAMES[1]).is_some());
    assert_eq!(sim.cludes().len(), 2);

    assert!(sim.delete_clude(ARMOR_NAMES[0]).is_some());
    assert!(sim.delete_clude(ARMOR_NAMES[0]).is_none());
    assert_eq!(sim.cludes().len(), 1);

    sim.delete_all_cludes();
    assert!(sim.cludes().is_empty());
}

#[test]
fn test_exclude_by_rarity_empties_results() {
    let mut sim = simulator();
    sim.exclude_by_rarity(1);
    assert_eq!(sim.cludes().len(), 5);

    let results = sim.search(&attack_condition(), 10);

    assert!(results.is_empty());
    assert!(sim.is_searched_all());
}
