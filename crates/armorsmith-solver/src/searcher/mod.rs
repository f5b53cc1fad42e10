//! Solve / enumerate engine.
//!
//! A [`Searcher`] owns one model and solves it repeatedly. After each
//! optimal solve the found set is extracted, older sets it dominates are
//! dropped, and an exclusion row is added so the next solve must differ in
//! at least one body-slot item.
//!
//! Logging levels:
//! - **INFO**: search start/end (DEBUG for quiet searchers)
//! - **DEBUG**: model size, each accepted result, the status that ended a search
//! - **WARN**: optimal solves that select nothing

use std::sync::Arc;
use std::time::Instant;

use armorsmith_core::{Catalog, CludeRegistry, EquipSet, SearchCondition};
use tracing::{debug, info, warn};

use crate::backend::{HighsBackend, SolveOutcome, SolverBackend};
use crate::cancel::CancelFlag;
use crate::model::{LinearModel, ModelBuilder, VarId};

/// Lifecycle of a [`Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// The model is built; more results may exist.
    #[default]
    Built,
    /// A solve is running.
    Solving,
    /// Reading a solution back into an [`EquipSet`].
    Extracting,
    /// No further results exist. Terminal.
    Exhausted,
    /// The last call stopped on a cancellation request. Resumable.
    Cancelled,
}

/// Enumerates equipment sets for one condition, best first.
#[derive(Debug)]
pub struct Searcher<B: SolverBackend = HighsBackend> {
    condition: SearchCondition,
    model: LinearModel,
    backend: B,
    results: Vec<EquipSet>,
    cancel: CancelFlag,
    state: SearchState,
    quiet: bool,
}

impl Searcher<HighsBackend> {
    /// Builds the model for `condition` against a HiGHS backend.
    pub fn new(catalog: &Catalog, cludes: &CludeRegistry, condition: &SearchCondition) -> Self {
        Self::with_backend(catalog, cludes, condition, HighsBackend::new())
    }
}

impl<B: SolverBackend> Searcher<B> {
    pub fn with_backend(
        catalog: &Catalog,
        cludes: &CludeRegistry,
        condition: &SearchCondition,
        backend: B,
    ) -> Self {
        let model = ModelBuilder::new(catalog, cludes).build(condition);
        debug!(
            event = "model_built",
            variables = model.columns().len() as u64,
            constraints = model.rows().len() as u64,
        );
        Self {
            condition: condition.clone(),
            model,
            backend,
            results: Vec::new(),
            cancel: CancelFlag::new(),
            state: SearchState::Built,
            quiet: false,
        }
    }

    /// Polls `flag` instead of a private flag.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = flag;
        self
    }

    /// Logs search start/end at DEBUG instead of INFO. Used for searches
    /// run as steps of a larger operation.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Finds up to `limit` more results.
    ///
    /// Returns true when the search space is exhausted, false when it
    /// stopped on the limit or on cancellation. Results already found are
    /// kept either way, so a later call continues where this one ended.
    /// Dominance elimination can shrink the list, so there may be fewer
    /// than `limit` new entries even when false is returned.
    pub fn exec_search(&mut self, limit: usize) -> bool {
        if self.state == SearchState::Exhausted {
            return true;
        }

        let start = Instant::now();
        let target = self.results.len() + limit;
        let results = self.results.len() as u64;
        if self.quiet {
            debug!(event = "search_start", results, limit = limit as u64);
        } else {
            info!(event = "search_start", results, limit = limit as u64);
        }

        let fully_searched = loop {
            if self.results.len() >= target {
                self.state = SearchState::Built;
                break false;
            }

            self.state = SearchState::Solving;
            let outcome = self.backend.solve(&self.model);
            if !outcome.is_optimal() {
                debug!(event = "search_exhausted", status = ?outcome.status);
                self.state = SearchState::Exhausted;
                break true;
            }

            self.state = SearchState::Extracting;
            let Some((set, vars)) = self.extract(&outcome) else {
                warn!(
                    event = "empty_extraction",
                    results = self.results.len() as u64,
                    "optimal solution selected no equipment"
                );
                self.state = SearchState::Exhausted;
                break true;
            };
            self.accept(set);
            self.model.add_exclusion(&vars);

            if self.cancel.is_cancelled() {
                self.state = SearchState::Cancelled;
                break false;
            }
        };

        let results = self.results.len() as u64;
        let duration_ms = start.elapsed().as_millis() as u64;
        if self.quiet {
            debug!(event = "search_end", results, fully_searched, duration_ms);
        } else {
            info!(event = "search_end", results, fully_searched, duration_ms);
        }
        fully_searched
    }

    /// Reads the selected items of an optimal solution.
    ///
    /// Returns the set and its body-slot variables, or `None` when nothing
    /// was selected.
    fn extract(&self, outcome: &SolveOutcome) -> Option<(EquipSet, Vec<VarId>)> {
        let mut set = EquipSet::new();
        let mut vars = Vec::new();
        for (var, column) in self.model.vars() {
            let count = outcome.count(var);
            if count == 0 {
                continue;
            }
            if column.equipment.kind.is_deco() {
                for _ in 0..count {
                    set.put(Arc::clone(&column.equipment));
                }
            } else {
                set.put(Arc::clone(&column.equipment));
                vars.push(var);
            }
        }
        if set.is_empty() {
            return None;
        }

        set.weapon_slots = self.condition.weapon_slots;
        set.sort_decos();
        Some((set, vars))
    }

    fn accept(&mut self, set: EquipSet) {
        let before = self.results.len();
        self.results.retain(|old| !old.is_covered_by(&set));
        debug!(
            event = "result_accepted",
            defense = set.total_defense(),
            decos = set.decos.len() as u64,
            dominated = (before - self.results.len()) as u64,
        );
        self.results.push(set);
    }

    /// Accepted results, best first.
    pub fn results(&self) -> &[EquipSet] {
        &self.results
    }

    pub fn into_results(self) -> Vec<EquipSet> {
        self.results
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn condition(&self) -> &SearchCondition {
        &self.condition
    }

    pub fn cancel_flag(&self) -> &CancelFlag {
        &self.cancel
    }

    /// The model including every exclusion row added so far.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}

#[cfg(test)]
mod tests;
