//! Include/exclude toggles ("cludes") for individual items.
//!
//! An exclude entry keeps an item out of every result. An include entry
//! fixes an item into every result. The registry holds at most one entry
//! per name and at most one include entry per body-slot category.

use crate::catalog::Catalog;
use crate::domain::EquipKind;

/// Toggle mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CludeKind {
    Exclude,
    Include,
}

/// A toggle on one item, keyed by equipment name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clude {
    pub name: String,
    pub kind: CludeKind,
}

/// Ordered registry of toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CludeRegistry {
    entries: Vec<Clude>,
}

impl CludeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes the item named `name`.
    ///
    /// Returns `None` if the catalog has no such item.
    pub fn add_exclude(&mut self, catalog: &Catalog, name: &str) -> Option<&Clude> {
        let equip = catalog.find_by_name(name);
        if equip.is_empty() {
            return None;
        }
        let name = equip.name.clone();
        Some(self.upsert(name, CludeKind::Exclude))
    }

    /// Fixes the item named `name` into every result.
    ///
    /// Any include entry for another item of the same category is revoked.
    /// Returns `None` for unknown names and for decorations, which can
    /// never be fixed.
    pub fn add_include(&mut self, catalog: &Catalog, name: &str) -> Option<&Clude> {
        let equip = catalog.find_by_name(name);
        if equip.is_empty() || equip.kind.is_deco() {
            return None;
        }
        let kind = equip.kind;
        let name = equip.name.clone();

        self.entries.retain(|clude| {
            if clude.kind != CludeKind::Include || clude.name == name {
                return true;
            }
            let old = catalog.find_by_name(&clude.name);
            !old.is_empty() && old.kind != kind
        });

        Some(self.upsert(name, CludeKind::Include))
    }

    /// Excludes every armor piece (head to leg) of rarity `rarity` or lower.
    pub fn exclude_by_rarity(&mut self, catalog: &Catalog, rarity: u32) {
        let names: Vec<String> = EquipKind::ARMOR
            .iter()
            .flat_map(|&kind| catalog.of_kind(kind))
            .filter(|e| e.rarity <= rarity)
            .map(|e| e.name.clone())
            .collect();
        for name in names {
            self.upsert(name, CludeKind::Exclude);
        }
    }

    /// Removes the entry for `name`, if any.
    pub fn remove(&mut self, name: &str) -> Option<Clude> {
        let index = self.entries.iter().position(|c| c.name == name)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Clude> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn entries(&self) -> &[Clude] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn upsert(&mut self, name: String, kind: CludeKind) -> &Clude {
        let index = match self.entries.iter().position(|c| c.name == name) {
            Some(index) => {
                self.entries[index].kind = kind;
                index
            }
            None => {
                self.entries.push(Clude { name, kind });
                self.entries.len() - 1
            }
        };
        &self.entries[index]
    }
}
