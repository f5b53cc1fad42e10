//! Linear model representation.
//!
//! A [`LinearModel`] is a backend-independent mixed-integer program: one
//! integer column per equipment item and a set of tagged rows. Rows are
//! addressed by [`RowTag`] rather than by name, and columns by [`VarId`].

mod builder;

use std::collections::HashMap;
use std::ops::Bound;
use std::sync::Arc;

use armorsmith_core::{Element, EquipKind, Equipment};

pub use builder::ModelBuilder;

/// Index of a column in a [`LinearModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub(crate) usize);

impl VarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifies a constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTag {
    /// At most one item per body-slot category.
    Kind(EquipKind),
    /// Remaining decoration capacity for slots larger than the tier.
    SlotTier(u8),
    /// Items the wearer cannot use; pinned to zero.
    Sex,
    Defense,
    Resistance(Element),
    /// Requested skill, by position in the condition.
    Skill(usize),
    /// Include/exclude toggle, by position in the registry.
    Clude(usize),
    /// Forbids a previously found body-slot combination, in order of addition.
    Exclusion(usize),
}

/// An integer decision variable.
#[derive(Debug, Clone)]
pub struct Column {
    pub equipment: Arc<Equipment>,
    /// Inclusive upper bound; the lower bound is always 0.
    pub upper: u32,
    /// Objective coefficient (maximized).
    pub objective: i64,
}

/// A linear constraint `lower <= sum(coef * var) <= upper`.
#[derive(Debug, Clone)]
pub struct Row {
    pub tag: RowTag,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    terms: Vec<(VarId, f64)>,
}

impl Row {
    /// Non-zero coefficients, in column insertion order.
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    /// Coefficient of `var`, 0 when absent.
    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms
            .iter()
            .find(|(v, _)| *v == var)
            .map_or(0.0, |(_, c)| *c)
    }

    /// Bounds in the form solver APIs take; `None` is unbounded.
    pub fn bounds(&self) -> (Bound<f64>, Bound<f64>) {
        let bound = |b: Option<f64>| b.map_or(Bound::Unbounded, Bound::Included);
        (bound(self.lower), bound(self.upper))
    }

    /// Returns true if `activity` lies within the bounds.
    pub fn admits(&self, activity: f64) -> bool {
        self.lower.map_or(true, |l| activity >= l) && self.upper.map_or(true, |u| activity <= u)
    }
}

/// Mixed-integer program over the equipment catalog.
#[derive(Debug, Clone, Default)]
pub struct LinearModel {
    columns: Vec<Column>,
    rows: Vec<Row>,
    row_index: HashMap<RowTag, usize>,
    by_name: HashMap<String, VarId>,
    exclusion_count: usize,
}

impl LinearModel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_column(&mut self, equipment: Arc<Equipment>, upper: u32, objective: i64) -> VarId {
        let var = VarId(self.columns.len());
        // First item wins for names shared across kinds, like catalog lookups.
        self.by_name.entry(equipment.name.clone()).or_insert(var);
        self.columns.push(Column {
            equipment,
            upper,
            objective,
        });
        var
    }

    pub(crate) fn add_row(&mut self, tag: RowTag, lower: Option<f64>, upper: Option<f64>) {
        self.row_index.insert(tag, self.rows.len());
        self.rows.push(Row {
            tag,
            lower,
            upper,
            terms: Vec::new(),
        });
    }

    /// Adds `coefficient` to the term of `var` in row `tag`. Zero is a no-op.
    pub(crate) fn add_term(&mut self, tag: RowTag, var: VarId, coefficient: f64) {
        if coefficient == 0.0 {
            return;
        }
        let Some(&index) = self.row_index.get(&tag) else {
            return;
        };
        let terms = &mut self.rows[index].terms;
        match terms.iter_mut().find(|(v, _)| *v == var) {
            Some((_, c)) => *c += coefficient,
            None => terms.push((var, coefficient)),
        }
    }

    /// Forbids the exact combination `vars` from appearing again.
    ///
    /// Installs `sum(vars) <= vars.len() - 1`. Variables outside `vars`
    /// stay free. An empty slice yields a row no assignment satisfies.
    pub fn add_exclusion(&mut self, vars: &[VarId]) -> RowTag {
        let tag = RowTag::Exclusion(self.exclusion_count);
        self.exclusion_count += 1;
        self.add_row(tag, None, Some(vars.len() as f64 - 1.0));
        for &var in vars {
            self.add_term(tag, var, 1.0);
        }
        tag
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, var: VarId) -> &Column {
        &self.columns[var.index()]
    }

    /// Columns paired with their ids.
    pub fn vars(&self) -> impl Iterator<Item = (VarId, &Column)> {
        self.columns.iter().enumerate().map(|(i, c)| (VarId(i), c))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, tag: RowTag) -> Option<&Row> {
        self.row_index.get(&tag).map(|&i| &self.rows[i])
    }

    /// Column of the item named `name`.
    pub fn var_by_name(&self, name: &str) -> Option<VarId> {
        self.by_name.get(name).copied()
    }

    pub fn exclusion_count(&self) -> usize {
        self.exclusion_count
    }

    /// Objective value of an assignment.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.columns
            .iter()
            .zip(values)
            .map(|(c, v)| c.objective as f64 * v)
            .sum()
    }

    /// Value of row `tag` under an assignment.
    pub fn activity(&self, tag: RowTag, values: &[f64]) -> Option<f64> {
        self.row(tag).map(|row| {
            row.terms
                .iter()
                .map(|(var, c)| c * values.get(var.index()).copied().unwrap_or(0.0))
                .sum()
        })
    }
}
