//! Tests for the solve / enumerate engine.

use std::sync::atomic::{AtomicUsize, Ordering};

use armorsmith_core::{CludeRegistry, EquipKind, RequiredSkill, SearchCondition, Sex, Skill};
use armorsmith_test::scenario::{ARMOR_NAMES, ATTACK, ATTACK_JEWEL};
use armorsmith_test::{armor, attack_catalog, attack_condition, catalog_of, count_events, deco};
use tracing::Level;

use super::*;
use crate::backend::SolveStatus;

/// Counts solves made through an inner HiGHS backend.
#[derive(Debug, Default)]
struct CountingBackend {
    inner: HighsBackend,
    solves: AtomicUsize,
}

impl SolverBackend for CountingBackend {
    fn solve(&self, model: &LinearModel) -> SolveOutcome {
        self.solves.fetch_add(1, Ordering::SeqCst);
        self.inner.solve(model)
    }
}

#[derive(Debug)]
struct FailingBackend;

impl SolverBackend for FailingBackend {
    fn solve(&self, _model: &LinearModel) -> SolveOutcome {
        SolveOutcome::without_solution(SolveStatus::Failed("no license".to_string()))
    }
}

fn searcher(condition: &SearchCondition) -> Searcher {
    Searcher::new(&attack_catalog(), &CludeRegistry::new(), condition)
}

fn names(set: &EquipSet) -> Vec<String> {
    set.non_deco_equips().map(|e| e.name.clone()).collect()
}

#[test]
fn test_first_result_uses_all_armor() {
    let mut searcher = searcher(&attack_condition());

    let fully_searched = searcher.exec_search(1);

    assert!(!fully_searched);
    assert_eq!(searcher.state(), SearchState::Built);
    let results = searcher.results();
    assert_eq!(results.len(), 1);
    assert_eq!(names(&results[0]), ARMOR_NAMES);
    assert_eq!(results[0].total_defense(), 125);
    assert!(results[0].skill_level(ATTACK) >= 3);
}

#[test]
fn test_full_enumeration() {
    let mut searcher = searcher(&attack_condition());

    assert!(searcher.exec_search(10));
    assert_eq!(searcher.state(), SearchState::Exhausted);

    // Every four-piece subset, each dominating the five-piece set.
    let results = searcher.results();
    assert_eq!(results.len(), 5);
    for set in results {
        assert_eq!(set.non_deco_equips().count(), 4);
        assert_eq!(set.total_defense(), 100);
    }
}

#[test]
fn test_no_duplicate_body_slot_sets() {
    let mut searcher = searcher(&attack_condition());
    searcher.exec_search(10);

    let results = searcher.results();
    for (i, a) in results.iter().enumerate() {
        for b in &results[i + 1..] {
            assert!(!a.same_non_deco_equips(b));
        }
    }
}

#[test]
fn test_split_calls_match_single_call() {
    let mut split = searcher(&attack_condition());
    split.exec_search(2);
    split.exec_search(1);

    let mut single = searcher(&attack_condition());
    single.exec_search(3);

    let split: Vec<_> = split.results().iter().map(names).collect();
    let single: Vec<_> = single.results().iter().map(names).collect();
    assert_eq!(split, single);
}

#[test]
fn test_zero_limit_does_nothing() {
    let backend = CountingBackend::default();
    let mut searcher = Searcher::with_backend(
        &attack_catalog(),
        &CludeRegistry::new(),
        &attack_condition(),
        backend,
    );

    assert!(!searcher.exec_search(0));
    assert!(searcher.results().is_empty());
    assert_eq!(searcher.backend.solves.load(Ordering::SeqCst), 0);
}

#[test]
fn test_cancel_stops_after_one_result() {
    let flag = CancelFlag::new();
    let mut searcher = searcher(&attack_condition()).with_cancel_flag(flag.clone());
    flag.cancel();

    assert!(!searcher.exec_search(10));
    assert_eq!(searcher.state(), SearchState::Cancelled);
    assert_eq!(searcher.results().len(), 1);

    flag.reset();
    assert!(searcher.exec_search(10));
    assert_eq!(searcher.results().len(), 5);
}

#[test]
fn test_exhausted_searcher_does_not_solve_again() {
    let mut searcher = Searcher::with_backend(
        &attack_catalog(),
        &CludeRegistry::new(),
        &attack_condition(),
        CountingBackend::default(),
    );
    assert!(searcher.exec_search(10));
    let solves = searcher.backend.solves.load(Ordering::SeqCst);
    assert_eq!(solves, 7);

    assert!(searcher.exec_search(10));
    assert_eq!(searcher.backend.solves.load(Ordering::SeqCst), solves);
    assert_eq!(searcher.results().len(), 5);
}

#[test]
fn test_backend_failure_ends_search() {
    let mut searcher = Searcher::with_backend(
        &attack_catalog(),
        &CludeRegistry::new(),
        &attack_condition(),
        FailingBackend,
    );

    assert!(searcher.exec_search(5));
    assert_eq!(searcher.state(), SearchState::Exhausted);
    assert!(searcher.results().is_empty());
}

#[test]
fn test_decorations_fill_missing_levels() {
    let condition = SearchCondition::new()
        .with_min_defense(100)
        .with_skill(RequiredSkill::at_least(ATTACK, 7));
    let mut searcher = searcher(&condition);

    searcher.exec_search(1);

    let set = &searcher.results()[0];
    assert_eq!(set.non_deco_equips().count(), 5);
    assert_eq!(set.decos.len(), 2);
    assert!(set.decos.iter().all(|d| d.name == ATTACK_JEWEL));
    assert_eq!(set.skill_level(ATTACK), 7);
}

#[test]
fn test_results_satisfy_condition() {
    let condition = SearchCondition::new()
        .with_min_defense(100)
        .with_skill(RequiredSkill::at_least(ATTACK, 7));
    let mut searcher = searcher(&condition);

    assert!(searcher.exec_search(20));
    assert!(!searcher.results().is_empty());
    for set in searcher.results() {
        assert!(set.total_defense() >= 100);
        assert!(set.skill_level(ATTACK) >= 7);
        assert!(set.decos.len() <= 3);
        assert!(set.remaining_slot_capacity().iter().all(|&c| c >= 0));
    }
}

#[test]
fn test_exact_level() {
    let condition = SearchCondition::new()
        .with_min_defense(100)
        .with_skill(RequiredSkill::exact(ATTACK, 4));
    let mut searcher = searcher(&condition);

    searcher.exec_search(1);

    let set = &searcher.results()[0];
    assert_eq!(set.skill_level(ATTACK), 4);
    assert_eq!(set.non_deco_equips().count(), 4);
}

#[test]
fn test_weapon_slots_are_stamped() {
    let condition = attack_condition().with_weapon_slots([2, 1, 0]);
    let mut searcher = searcher(&condition);

    searcher.exec_search(1);

    assert_eq!(searcher.results()[0].weapon_slots, [2, 1, 0]);
}

#[test]
fn test_prefers_larger_slots() {
    let catalog = catalog_of(
        vec![Skill::new(ATTACK, 5, "offense")],
        vec![
            armor("Small Cap", EquipKind::Head).with_skill(ATTACK, 3),
            armor("Big Cap", EquipKind::Head).with_slots([3, 0, 0]),
        ],
    );
    let mut searcher = Searcher::new(&catalog, &CludeRegistry::new(), &SearchCondition::new());

    searcher.exec_search(1);

    assert_eq!(searcher.results()[0].equip(EquipKind::Head).unwrap().name, "Big Cap");
}

#[test]
fn test_one_slot_point_decides_between_heavy_sets() {
    // Maximal defense dwarfs the slot term, so only an exact solve can
    // tell the two caps apart.
    let heavy = |name: &str, kind: EquipKind| armor(name, kind).with_defense(150, 150);
    let catalog = catalog_of(
        vec![],
        vec![
            heavy("Plain Cap", EquipKind::Head),
            heavy("Fine Cap", EquipKind::Head).with_slots([2, 0, 0]),
            heavy("Plate", EquipKind::Body),
            heavy("Gauntlets", EquipKind::Arm),
            heavy("Tassets", EquipKind::Waist),
            heavy("Greaves", EquipKind::Leg),
        ],
    );
    let mut searcher = Searcher::new(&catalog, &CludeRegistry::new(), &SearchCondition::new());

    searcher.exec_search(1);

    let best = &searcher.results()[0];
    assert_eq!(best.total_defense(), 750);
    assert_eq!(best.equip(EquipKind::Head).unwrap().name, "Fine Cap");
}

#[test]
fn test_wearer_sex_is_respected() {
    let catalog = catalog_of(
        vec![],
        vec![
            armor("Lady Helm", EquipKind::Head)
                .with_sex(Sex::Female)
                .with_defense(50, 50),
            armor("Helm", EquipKind::Head),
        ],
    );
    let condition = SearchCondition::new().with_sex(Sex::Male);
    let mut searcher = Searcher::new(&catalog, &CludeRegistry::new(), &condition);

    assert!(searcher.exec_search(10));

    let results = searcher.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].equip(EquipKind::Head).unwrap().name, "Helm");
}

#[test]
fn test_include_fixes_item() {
    let catalog = attack_catalog();
    let mut cludes = CludeRegistry::new();
    cludes.add_include(&catalog, ARMOR_NAMES[0]).unwrap();
    let mut searcher = Searcher::new(&catalog, &cludes, &attack_condition());

    assert!(searcher.exec_search(10));

    let results = searcher.results();
    assert_eq!(results.len(), 4);
    assert!(results
        .iter()
        .all(|set| set.equip(EquipKind::Head).unwrap().name == ARMOR_NAMES[0]));
}

#[test]
fn test_exclude_removes_item() {
    let catalog = attack_catalog();
    let mut cludes = CludeRegistry::new();
    cludes.add_exclude(&catalog, ARMOR_NAMES[1]).unwrap();
    let mut searcher = Searcher::new(&catalog, &cludes, &attack_condition());

    assert!(searcher.exec_search(10));

    let results = searcher.results();
    assert_eq!(results.len(), 1);
    assert!(results[0].equip(EquipKind::Body).unwrap().is_empty());
}

#[test]
fn test_empty_extraction_ends_search() {
    let catalog = catalog_of(
        vec![Skill::new(ATTACK, 5, "offense")],
        vec![deco(ATTACK_JEWEL, 1, 3, ATTACK)],
    );
    let mut searcher = Searcher::new(&catalog, &CludeRegistry::new(), &SearchCondition::new());

    assert!(searcher.exec_search(3));
    assert_eq!(searcher.state(), SearchState::Exhausted);
    assert!(searcher.results().is_empty());
}

#[test]
fn test_exclusion_rows_accumulate() {
    let mut searcher = searcher(&attack_condition());
    searcher.exec_search(3);

    assert_eq!(searcher.model().exclusion_count(), 3);
    assert_eq!(searcher.condition(), &attack_condition());
}

#[test]
fn test_lifecycle_logged_at_info() {
    let catalog = attack_catalog();
    let mut searcher = Searcher::new(&catalog, &CludeRegistry::new(), &attack_condition());

    let (_, infos) = count_events(Level::INFO, || searcher.exec_search(1));

    assert_eq!(infos, 2);
}

#[test]
fn test_quiet_searcher_logs_lifecycle_at_debug() {
    let catalog = attack_catalog();
    let mut searcher =
        Searcher::new(&catalog, &CludeRegistry::new(), &attack_condition()).with_quiet(true);

    let (_, infos) = count_events(Level::INFO, || searcher.exec_search(1));
    let (_, debugs) = count_events(Level::DEBUG, || searcher.exec_search(1));

    assert_eq!(infos, 0);
    assert!(debugs >= 2);
    assert!(!searcher.results().is_empty());
}
