//! Objective score of a single equipment item.
//!
//! The searcher maximizes the sum of item scores over a set. Scores are
//! tiered so that the comparison is lexicographic: defense first, then the
//! number of decoration slots, then their total size.
//!
//! ```
//! use armorsmith_core::{Equipment, EquipKind};
//! use armorsmith_core::score::objective_score;
//!
//! let small = Equipment::new("Cap", EquipKind::Head).with_defense(10, 10).with_slots([1, 0, 0]);
//! let large = Equipment::new("Helm", EquipKind::Head).with_defense(10, 10).with_slots([3, 0, 0]);
//! assert!(objective_score(&large) > objective_score(&small));
//! ```

use crate::domain::{EquipKind, Equipment};

/// Multiplier applied to defense before adding the slot count.
///
/// At most three slots exist per item, so one defense point outweighs
/// any slot-count difference.
pub const DEFENSE_WEIGHT: i64 = 20;

/// Multiplier applied to the defense/slot-count tier before adding total
/// slot size. Three slots of size 4 sum to 12, well below one slot-count unit.
pub const SLOT_COUNT_WEIGHT: i64 = 80;

/// Score of one unit of `equip` in the objective.
///
/// Decorations consume a slot instead of providing one, so their size
/// counts negatively and only the first slot (the decoration's size) is
/// considered.
pub fn objective_score(equip: &Equipment) -> i64 {
    let slots: [i64; 3] = match equip.kind {
        EquipKind::Deco => [-i64::from(equip.slots[0]), 0, 0],
        _ => equip.slots.map(i64::from),
    };
    let slot_count: i64 = slots.iter().map(|s| s.signum()).sum();
    let slot_size: i64 = slots.iter().sum();

    (i64::from(equip.max_defense) * DEFENSE_WEIGHT + slot_count) * SLOT_COUNT_WEIGHT + slot_size
}

/// Decoration capacity provided by three slot sizes, per tier.
///
/// Tier `i` counts the slots whose size is greater than `i`; a decoration
/// of size `s` needs one unit in every tier below `s`. For example slots
/// `[3, 1, 1]` give `[3, 1, 1, 0]`.
pub fn slot_capacity(slots: [u32; 3]) -> [i32; 4] {
    let mut tiers = [0; 4];
    for size in slots {
        for tier in tiers.iter_mut().take(size.min(4) as usize) {
            *tier += 1;
        }
    }
    tiers
}

#[cfg(test)]
mod tests;
