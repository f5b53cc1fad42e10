//! Equipment sets produced by a search.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::equipment::Equipment;
use super::kind::{Element, EquipKind};
use crate::score::slot_capacity;

/// One feasible assignment: an item (or the empty sentinel) per body-slot
/// category plus a decoration multiset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipSet {
    equips: [Arc<Equipment>; 6],
    pub decos: Vec<Arc<Equipment>>,
    pub weapon_slots: [u32; 3],
    /// User-assigned name for saved sets.
    pub name: Option<String>,
}

impl Default for EquipSet {
    fn default() -> Self {
        Self::new()
    }
}

impl EquipSet {
    /// Creates a set with every category empty.
    pub fn new() -> Self {
        Self {
            equips: EquipKind::BODY_SLOTS.map(|kind| Arc::new(Equipment::empty(kind))),
            decos: Vec::new(),
            weapon_slots: [0; 3],
            name: None,
        }
    }

    /// The item in a body-slot category; the empty sentinel when unused.
    ///
    /// Returns `None` for [`EquipKind::Deco`], which holds a multiset
    /// instead (see [`EquipSet::decos`]).
    pub fn equip(&self, kind: EquipKind) -> Option<&Arc<Equipment>> {
        if kind.is_body_slot() {
            self.equips.get(kind.index())
        } else {
            None
        }
    }

    /// Places an item into its category, or appends it to the decorations.
    pub fn put(&mut self, equipment: Arc<Equipment>) {
        match equipment.kind {
            EquipKind::Deco => self.decos.push(equipment),
            kind => self.equips[kind.index()] = equipment,
        }
    }

    /// Non-empty body-slot items, in category order.
    pub fn non_deco_equips(&self) -> impl Iterator<Item = &Arc<Equipment>> {
        self.equips.iter().filter(|e| !e.is_empty())
    }

    /// Every item in the set, decorations last.
    pub fn all_equips(&self) -> impl Iterator<Item = &Arc<Equipment>> {
        self.non_deco_equips().chain(self.decos.iter())
    }

    /// Returns true if no category is filled and no decoration is present.
    pub fn is_empty(&self) -> bool {
        self.non_deco_equips().next().is_none() && self.decos.is_empty()
    }

    /// Sorts decorations by name.
    pub fn sort_decos(&mut self) {
        self.decos.sort_by(|a, b| a.name.cmp(&b.name));
    }

    pub fn total_defense(&self) -> i32 {
        self.all_equips().map(|e| e.max_defense).sum()
    }

    pub fn total_min_defense(&self) -> i32 {
        self.all_equips().map(|e| e.min_defense).sum()
    }

    pub fn total_resistance(&self, element: Element) -> i32 {
        self.all_equips().map(|e| e.resistances.get(element)).sum()
    }

    /// Summed level of one skill across all items.
    pub fn skill_level(&self, skill: &str) -> u32 {
        self.all_equips().map(|e| e.skill_level(skill)).sum()
    }

    /// Summed level of every skill present in the set.
    pub fn skill_totals(&self) -> BTreeMap<String, u32> {
        let mut totals = BTreeMap::new();
        for skill in self.all_equips().flat_map(|e| e.skills.iter()) {
            *totals.entry(skill.name.clone()).or_insert(0) += skill.level;
        }
        totals
    }

    /// Free decoration capacity per tier (sizes > 0, > 1, > 2, > 3).
    ///
    /// Weapon and armor slots add capacity, decorations consume it. A
    /// valid set never has a negative tier.
    pub fn remaining_slot_capacity(&self) -> [i32; 4] {
        let mut capacity = slot_capacity(self.weapon_slots);
        for equip in self.non_deco_equips() {
            add_tiers(&mut capacity, slot_capacity(equip.slots), 1);
        }
        for deco in &self.decos {
            add_tiers(&mut capacity, slot_capacity(deco.slots), -1);
        }
        capacity
    }

    /// Returns true if `newer` makes this set redundant.
    ///
    /// For every body-slot category `newer` must either hold the same item
    /// or leave the category empty. Decorations are not compared.
    pub fn is_covered_by(&self, newer: &EquipSet) -> bool {
        self.equips
            .iter()
            .zip(&newer.equips)
            .all(|(old, new)| new.is_empty() || new.name == old.name)
    }

    /// Returns true if both sets hold the same body-slot items.
    pub fn same_non_deco_equips(&self, other: &EquipSet) -> bool {
        self.equips
            .iter()
            .zip(&other.equips)
            .all(|(a, b)| a.name == b.name)
    }
}

fn add_tiers(capacity: &mut [i32; 4], tiers: [i32; 4], sign: i32) {
    for (slot, tier) in capacity.iter_mut().zip(tiers) {
        *slot += sign * tier;
    }
}
