//! The search service that front ends talk to.

use std::sync::Arc;

use armorsmith_config::SimConfig;
use armorsmith_core::{Catalog, Clude, CludeRegistry, EquipSet, Result, SearchCondition, Skill};
use armorsmith_solver::{CancelFlag, ExtraSkillScanner, HighsBackend, Searcher};
use tracing::debug;

use crate::recent::RecentSkills;

/// Owns a catalog snapshot, the include/exclude list and the current
/// search session.
///
/// A new [`search`](Self::search) drops the previous session; later
/// [`search_more`](Self::search_more) calls continue it.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use armorsmith::prelude::*;
///
/// let catalog = Arc::new(Catalog::default());
/// let mut sim = Simulator::new(catalog, CludeRegistry::new(), SimConfig::default());
///
/// let condition = SearchCondition::new().with_skill(RequiredSkill::at_least("Attack", 3));
/// let first = sim.search(&condition, 10).len();
/// if !sim.is_searched_all() {
///     let more = sim.search_more(10).len();
///     assert!(more >= first);
/// }
/// ```
#[derive(Debug)]
pub struct Simulator {
    catalog: Arc<Catalog>,
    cludes: CludeRegistry,
    config: SimConfig,
    searcher: Option<Searcher>,
    cancel: CancelFlag,
    recent: RecentSkills,
    searched_all: bool,
}

impl Simulator {
    pub fn new(catalog: Arc<Catalog>, cludes: CludeRegistry, config: SimConfig) -> Self {
        let recent = RecentSkills::new(config.max_recent_skill_count);
        Self {
            catalog,
            cludes,
            config,
            searcher: None,
            cancel: CancelFlag::new(),
            recent,
            searched_all: false,
        }
    }

    /// Replaces the recent-skill list, e.g. with one restored from disk.
    pub fn with_recent_skills(mut self, recent: RecentSkills) -> Self {
        self.recent = recent;
        self
    }

    fn backend(&self) -> HighsBackend {
        HighsBackend::from_config(&self.config.search)
    }

    /// Starts a new search session and returns its first results.
    pub fn search(&mut self, condition: &SearchCondition, limit: usize) -> &[EquipSet] {
        self.cancel.reset();
        self.searcher = None;

        let mut searcher =
            Searcher::with_backend(&self.catalog, &self.cludes, condition, self.backend())
                .with_cancel_flag(self.cancel.clone());
        self.searched_all = searcher.exec_search(limit);
        self.recent
            .record(condition.skills.iter().map(|s| s.name.as_str()));
        self.searcher = Some(searcher);

        self.results()
    }

    /// Continues the current session. Empty when nothing was searched yet.
    pub fn search_more(&mut self, limit: usize) -> &[EquipSet] {
        self.cancel.reset();
        if let Some(searcher) = self.searcher.as_mut() {
            self.searched_all = searcher.exec_search(limit);
        }
        self.results()
    }

    /// Lists every skill level that could be added to `condition`.
    ///
    /// # Errors
    ///
    /// Fails only if the scan's worker pool cannot be created.
    pub fn search_extra_skill(
        &self,
        condition: &SearchCondition,
        progress: Option<&(dyn Fn(f64) + Sync)>,
    ) -> Result<Vec<Skill>> {
        self.cancel.reset();
        let outcome = ExtraSkillScanner::new(&self.catalog, &self.cludes, self.backend())
            .with_parallelism(self.config.search.parallelism)
            .with_cancel_flag(self.cancel.clone())
            .scan(condition, progress)?;
        Ok(outcome.skills)
    }

    /// Requests cancellation of the running search or scan.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn reset_cancel(&self) {
        self.cancel.reset();
    }

    /// A handle other threads can use to cancel.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// True when the last search call exhausted the search space.
    pub fn is_searched_all(&self) -> bool {
        self.searched_all
    }

    pub fn results(&self) -> &[EquipSet] {
        self.searcher
            .as_ref()
            .map(|s| s.results())
            .unwrap_or_default()
    }

    pub fn add_exclude(&mut self, name: &str) -> Option<&Clude> {
        debug!(event = "clude_exclude", name);
        self.cludes.add_exclude(&self.catalog, name)
    }

    pub fn add_include(&mut self, name: &str) -> Option<&Clude> {
        debug!(event = "clude_include", name);
        self.cludes.add_include(&self.catalog, name)
    }

    pub fn delete_clude(&mut self, name: &str) -> Option<Clude> {
        self.cludes.remove(name)
    }

    pub fn delete_all_cludes(&mut self) {
        self.cludes.clear();
    }

    /// Excludes every armor piece of `rarity` or lower.
    pub fn exclude_by_rarity(&mut self, rarity: u32) {
        debug!(event = "clude_exclude_by_rarity", rarity);
        self.cludes.exclude_by_rarity(&self.catalog, rarity);
    }

    pub fn cludes(&self) -> &CludeRegistry {
        &self.cludes
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn recent_skills(&self) -> &RecentSkills {
        &self.recent
    }

    /// Skill names from recent searches, newest first.
    pub fn recent_skill_names(&self) -> &[String] {
        self.recent.names()
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod tests;
