//! Extra-skill feasibility scanner.
//!
//! For every catalog skill and level the scanner asks: is there at least
//! one equipment set meeting the current condition plus this single skill
//! level? Each trial is an independent search with its own model and
//! solver instance, so trials run on a rayon pool without sharing state.

use std::sync::Mutex;
use std::time::Instant;

use armorsmith_core::{
    ArmorsmithError, Catalog, CludeRegistry, RequiredSkill, Result, SearchCondition, Skill,
};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::info;

use crate::backend::{HighsBackend, SolverBackend};
use crate::cancel::CancelFlag;
use crate::searcher::Searcher;

/// Worker count used when none is configured.
pub const DEFAULT_PARALLELISM: usize = 4;

/// Result of a feasibility scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Achievable skill levels, in catalog skill order then ascending level.
    pub skills: Vec<Skill>,
    /// False when cancellation skipped at least one skill.
    pub fully_scanned: bool,
}

/// Finds the skill levels that could be added to a condition.
///
/// # Example
///
/// ```no_run
/// use armorsmith_core::{Catalog, CludeRegistry, SearchCondition};
/// use armorsmith_solver::{ExtraSkillScanner, HighsBackend};
///
/// let catalog = Catalog::default();
/// let cludes = CludeRegistry::new();
/// let outcome = ExtraSkillScanner::new(&catalog, &cludes, HighsBackend::new())
///     .with_parallelism(2)
///     .scan(&SearchCondition::new(), Some(&|p: f64| println!("{:.0}%", p * 100.0)))
///     .unwrap();
/// assert!(outcome.fully_scanned);
/// ```
#[derive(Debug, Clone)]
pub struct ExtraSkillScanner<'a, B: SolverBackend + Clone = HighsBackend> {
    catalog: &'a Catalog,
    cludes: &'a CludeRegistry,
    backend: B,
    parallelism: usize,
    cancel: CancelFlag,
}

impl<'a, B: SolverBackend + Clone> ExtraSkillScanner<'a, B> {
    pub fn new(catalog: &'a Catalog, cludes: &'a CludeRegistry, backend: B) -> Self {
        Self {
            catalog,
            cludes,
            backend,
            parallelism: DEFAULT_PARALLELISM,
            cancel: CancelFlag::new(),
        }
    }

    /// Sets the worker count (at least 1).
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    /// Polls `flag` once per skill. A trial already running finishes.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = flag;
        self
    }

    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Scans every skill level not already met by `condition`.
    ///
    /// `progress` receives 0.0 first, then the completed fraction of
    /// skills after each one, never decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`ArmorsmithError::Resource`] if the worker pool cannot be
    /// created.
    pub fn scan(
        &self,
        condition: &SearchCondition,
        progress: Option<&(dyn Fn(f64) + Sync)>,
    ) -> Result<ScanOutcome> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.parallelism)
            .thread_name(|i| format!("armorsmith-scan-{i}"))
            .build()
            .map_err(|e| ArmorsmithError::Resource(format!("scan worker pool: {e}")))?;

        let skills = self.catalog.skills();
        let reporter = ProgressReporter::new(skills.len(), progress);
        let start = Instant::now();
        info!(
            event = "scan_start",
            skills = skills.len() as u64,
            parallelism = self.parallelism as u64,
        );

        let (mut found, completed) = pool.install(|| {
            skills
                .par_iter()
                .enumerate()
                .fold(
                    || (Vec::new(), 0usize),
                    |(mut found, completed), (index, skill)| {
                        if self.cancel.is_cancelled() {
                            return (found, completed);
                        }
                        for level in 1..=skill.level {
                            if self.is_achievable(condition, &skill.name, level) {
                                found.push((index, skill.at_level(level)));
                            }
                        }
                        reporter.advance();
                        (found, completed + 1)
                    },
                )
                .reduce(
                    || (Vec::new(), 0),
                    |(mut a, n), (b, m)| {
                        a.extend(b);
                        (a, n + m)
                    },
                )
        });

        // Stable: levels of one skill keep their ascending order.
        found.sort_by_key(|(index, _)| *index);
        let outcome = ScanOutcome {
            skills: found.into_iter().map(|(_, skill)| skill).collect(),
            fully_scanned: completed == skills.len(),
        };

        info!(
            event = "scan_end",
            achievable = outcome.skills.len() as u64,
            fully_scanned = outcome.fully_scanned,
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(outcome)
    }

    /// Runs one isolated trial: `condition` plus `name` at `level`.
    ///
    /// Levels the condition already meets are not trials and return false.
    fn is_achievable(&self, condition: &SearchCondition, name: &str, level: u32) -> bool {
        let mut trial = condition.clone();
        if !trial.add_skill(RequiredSkill::at_least(name, level)) {
            return false;
        }
        let mut searcher =
            Searcher::with_backend(self.catalog, self.cludes, &trial, self.backend.clone())
                .with_quiet(true);
        searcher.exec_search(1);
        !searcher.results().is_empty()
    }
}

/// Serializes progress updates so the sink sees a non-decreasing sequence.
struct ProgressReporter<'p> {
    sink: Option<&'p (dyn Fn(f64) + Sync)>,
    total: usize,
    done: Mutex<usize>,
}

impl<'p> ProgressReporter<'p> {
    fn new(total: usize, sink: Option<&'p (dyn Fn(f64) + Sync)>) -> Self {
        if let Some(sink) = sink {
            sink(0.0);
        }
        Self {
            sink,
            total,
            done: Mutex::new(0),
        }
    }

    fn advance(&self) {
        let Some(sink) = self.sink else {
            return;
        };
        let mut done = self.done.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *done += 1;
        sink(*done as f64 / self.total as f64);
    }
}
