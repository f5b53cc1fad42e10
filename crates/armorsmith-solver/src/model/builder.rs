//! Builds a [`LinearModel`] from a condition, a catalog and a clude registry.

use std::sync::Arc;

use armorsmith_core::score::{objective_score, slot_capacity};
use armorsmith_core::{
    Catalog, CludeKind, CludeRegistry, Element, EquipKind, Equipment, LevelMatch, SearchCondition,
};
use tracing::warn;

use super::{LinearModel, RowTag, VarId};

/// Turns a search condition into a mixed-integer model.
///
/// The builder borrows an immutable catalog snapshot and clude registry,
/// so independent builders may run on several threads at once. Building
/// never fails: a contradictory model is valid and simply has no
/// feasible solution.
#[derive(Debug, Clone, Copy)]
pub struct ModelBuilder<'a> {
    catalog: &'a Catalog,
    cludes: &'a CludeRegistry,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(catalog: &'a Catalog, cludes: &'a CludeRegistry) -> Self {
        Self { catalog, cludes }
    }

    pub fn build(&self, condition: &SearchCondition) -> LinearModel {
        let mut model = LinearModel::new();

        for equip in self.catalog.equipment() {
            model.add_column(Arc::clone(equip), equip.max_count(), objective_score(equip));
        }

        add_rows(&mut model, condition);

        let vars: Vec<VarId> = model.vars().map(|(var, _)| var).collect();
        for var in vars {
            let equip = Arc::clone(&model.column(var).equipment);
            add_equipment_terms(&mut model, var, &equip, condition);
        }

        self.add_clude_rows(&mut model);
        model
    }

    fn add_clude_rows(&self, model: &mut LinearModel) {
        for (index, clude) in self.cludes.entries().iter().enumerate() {
            let Some(var) = model.var_by_name(&clude.name) else {
                warn!(
                    event = "unknown_clude",
                    name = %clude.name,
                    "clude refers to an item missing from the catalog"
                );
                continue;
            };
            let fixed = match clude.kind {
                CludeKind::Exclude => 0.0,
                CludeKind::Include => 1.0,
            };
            let tag = RowTag::Clude(index);
            model.add_row(tag, Some(fixed), Some(fixed));
            model.add_term(tag, var, 1.0);
        }
    }
}

fn add_rows(model: &mut LinearModel, condition: &SearchCondition) {
    for kind in EquipKind::BODY_SLOTS {
        model.add_row(RowTag::Kind(kind), Some(0.0), Some(1.0));
    }

    let weapon = slot_capacity(condition.weapon_slots);
    for (tier, capacity) in weapon.iter().enumerate() {
        model.add_row(RowTag::SlotTier(tier as u8), Some(-f64::from(*capacity)), None);
    }

    model.add_row(RowTag::Sex, Some(0.0), Some(0.0));

    let defense = condition.min_defense.unwrap_or(0);
    model.add_row(RowTag::Defense, Some(f64::from(defense)), None);

    for element in Element::ALL {
        let floor = condition.resistance_floor(element).map(f64::from);
        model.add_row(RowTag::Resistance(element), floor, None);
    }

    for (index, skill) in condition.skills.iter().enumerate() {
        let level = f64::from(skill.level);
        let upper = match skill.matching {
            LevelMatch::Exact => Some(level),
            LevelMatch::AtLeast => None,
        };
        model.add_row(RowTag::Skill(index), Some(level), upper);
    }
}

fn add_equipment_terms(
    model: &mut LinearModel,
    var: VarId,
    equip: &Equipment,
    condition: &SearchCondition,
) {
    if equip.kind.is_body_slot() {
        model.add_term(RowTag::Kind(equip.kind), var, 1.0);
    }

    // Decorations consume the capacity armor and weapon provide.
    let sign = if equip.kind.is_deco() { -1.0 } else { 1.0 };
    for (tier, capacity) in slot_capacity(equip.slots).iter().enumerate() {
        model.add_term(RowTag::SlotTier(tier as u8), var, sign * f64::from(*capacity));
    }

    if equip.sex.conflicts_with(condition.sex) {
        model.add_term(RowTag::Sex, var, 1.0);
    }

    model.add_term(RowTag::Defense, var, f64::from(equip.max_defense));
    for element in Element::ALL {
        model.add_term(
            RowTag::Resistance(element),
            var,
            f64::from(equip.resistances.get(element)),
        );
    }

    for (index, skill) in condition.skills.iter().enumerate() {
        model.add_term(RowTag::Skill(index), var, f64::from(equip.skill_level(&skill.name)));
    }
}
