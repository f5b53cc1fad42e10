//! Tests for the objective score.

use super::*;
use crate::domain::Sex;

fn head(defense: i32, slots: [u32; 3]) -> Equipment {
    Equipment::new("Head", EquipKind::Head)
        .with_defense(defense, defense)
        .with_slots(slots)
}

#[test]
fn test_defense_dominates_slots() {
    let strong = head(11, [0, 0, 0]);
    let slotted = head(10, [4, 4, 4]);
    assert!(objective_score(&strong) > objective_score(&slotted));
}

#[test]
fn test_slot_count_dominates_slot_size() {
    let two_small = head(10, [1, 1, 0]);
    let one_large = head(10, [4, 0, 0]);
    assert!(objective_score(&two_small) > objective_score(&one_large));
}

#[test]
fn test_slot_size_breaks_ties() {
    let small = head(10, [1, 0, 0]);
    let large = head(10, [3, 0, 0]);
    assert_eq!(objective_score(&large) - objective_score(&small), 2);
}

#[test]
fn test_skills_do_not_affect_score() {
    let plain = head(10, [1, 0, 0]);
    let skilled = head(10, [1, 0, 0]).with_skill("Attack", 3).with_sex(Sex::Male);
    assert_eq!(objective_score(&plain), objective_score(&skilled));
}

#[test]
fn test_decorations_score_negative() {
    let deco = Equipment::deco("Attack Jewel", 1, 3, "offense");
    assert_eq!(objective_score(&deco), -81);

    let large = Equipment::deco("Expert Jewel", 4, 1, "offense");
    assert!(objective_score(&large) < objective_score(&deco));
}

#[test]
fn test_exact_score_formula() {
    let armor = head(25, [2, 1, 0]);
    assert_eq!(objective_score(&armor), (25 * 20 + 2) * 80 + 3);
}

#[test]
fn test_slot_capacity() {
    assert_eq!(slot_capacity([3, 1, 1]), [3, 1, 1, 0]);
    assert_eq!(slot_capacity([0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(slot_capacity([4, 2, 0]), [2, 2, 1, 1]);
}
