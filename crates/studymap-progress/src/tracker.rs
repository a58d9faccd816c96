use rustc_hash::FxHashSet;
use studymap_catalog::{Catalog, ProblemFilter};
use studymap_core::{CompletionStore, ProblemId, Result};

/// Owner of the completion set. The in-memory set is the source of truth
/// between toggles; the store is written through on every mutation.
pub struct ProgressTracker {
    store: Box<dyn CompletionStore>,
    completed: FxHashSet<ProblemId>,
}

impl ProgressTracker {
    /// Wraps a store without reading it; call [`load`](Self::load) to pull
    /// persisted state.
    pub fn new(store: Box<dyn CompletionStore>) -> Self {
        Self {
            store,
            completed: FxHashSet::default(),
        }
    }

    pub fn with_loaded(store: Box<dyn CompletionStore>) -> Self {
        let mut tracker = Self::new(store);
        tracker.load();
        tracker
    }

    /// Pull the completion set from the store. Missing or corrupt data
    /// degrades to an empty set; losing local progress is recoverable,
    /// refusing to start is not.
    pub fn load(&mut self) {
        self.completed = match self.store.load() {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(error = %err, "completion store unreadable, starting empty");
                FxHashSet::default()
            }
        };
    }

    /// Flip membership of `problem_id` and write the full set through.
    /// Returns the new membership. The id is not validated against the
    /// catalog, and a failed write is logged but does not undo the toggle.
    pub fn toggle_completed(&mut self, problem_id: &str) -> bool {
        let now_completed = if self.completed.remove(problem_id) {
            false
        } else {
            self.completed.insert(problem_id.to_string());
            true
        };
        if let Err(err) = self.store.save(&self.completed) {
            tracing::warn!(error = %err, problem_id, "failed to persist completion set");
        }
        now_completed
    }

    pub fn is_completed(&self, problem_id: &str) -> bool {
        self.completed.contains(problem_id)
    }

    pub fn completed(&self) -> &FxHashSet<ProblemId> {
        &self.completed
    }

    /// How many of `ids` are completed.
    pub fn completed_in<'a, I>(&self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter(|id| self.completed.contains(*id)).count()
    }

    /// `round(100 * |completed ∩ ids| / |ids|)`; 0 for an empty slice.
    pub fn percent_complete<'a, I>(&self, ids: I) -> u8
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let mut done = 0usize;
        for id in ids {
            total += 1;
            if self.completed.contains(id) {
                done += 1;
            }
        }
        if total == 0 {
            return 0;
        }
        (100.0 * done as f64 / total as f64).round() as u8
    }

    pub fn overall_percent(&self, catalog: &Catalog) -> u8 {
        self.percent_complete(catalog.problems().iter().map(|p| p.id.as_str()))
    }

    /// Completion percentage over the problems matching `pattern_id`.
    /// Resolving the id through the catalog, so unknown patterns surface
    /// as `PatternNotFound` for the UI's not-found state.
    pub fn pattern_percent(&self, catalog: &Catalog, pattern_id: &str) -> Result<u8> {
        // Validates existence before filtering; the filter itself would
        // silently match nothing.
        catalog.pattern(pattern_id)?;
        let filter = ProblemFilter::new().with_pattern(pattern_id);
        Ok(self.percent_complete(
            catalog.find_problems(&filter).iter().map(|p| p.id.as_str()),
        ))
    }

    /// Ids of patterns whose matching problems are all completed (and
    /// non-empty): the completion notion the roadmap's unlocked query
    /// consumes.
    pub fn completed_patterns(&self, catalog: &Catalog) -> FxHashSet<String> {
        catalog
            .patterns()
            .iter()
            .filter(|pattern| {
                let filter = ProblemFilter::new().with_pattern(pattern.id.as_str());
                let problems = catalog.find_problems(&filter);
                !problems.is_empty()
                    && problems.iter().all(|p| self.completed.contains(&p.id))
            })
            .map(|pattern| pattern.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use studymap_core::{Difficulty, Pattern, Problem, Tier};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Pattern::new("arrays-hashing", "Arrays & Hashing", Tier::Beginner, 8)],
            vec![
                Problem::new("two-sum", "Two Sum", Difficulty::Easy, "Array")
                    .with_patterns(["arrays-hashing"]),
                Problem::new("3sum", "3Sum", Difficulty::Medium, "Array")
                    .with_patterns(["arrays-hashing"]),
                Problem::new("rotate-image", "Rotate Image", Difficulty::Medium, "Math"),
                Problem::new("spiral-matrix", "Spiral Matrix", Difficulty::Medium, "Math"),
            ],
        )
    }

    #[test]
    fn percent_edge_cases() {
        let mut tracker = ProgressTracker::new(Box::new(MemoryStore::new()));
        assert_eq!(tracker.percent_complete([]), 0);
        assert_eq!(tracker.percent_complete(["a", "b"]), 0);
        tracker.toggle_completed("a");
        tracker.toggle_completed("b");
        assert_eq!(tracker.percent_complete(["a", "b"]), 100);
    }

    #[test]
    fn rounding_is_nearest() {
        let mut tracker = ProgressTracker::new(Box::new(MemoryStore::new()));
        tracker.toggle_completed("a");
        // 1 of 3 = 33.33 -> 33; 2 of 3 = 66.67 -> 67
        assert_eq!(tracker.percent_complete(["a", "b", "c"]), 33);
        tracker.toggle_completed("b");
        assert_eq!(tracker.percent_complete(["a", "b", "c"]), 67);
    }

    #[test]
    fn half_of_pattern_is_fifty() {
        let catalog = catalog();
        let mut tracker = ProgressTracker::new(Box::new(MemoryStore::new()));
        tracker.toggle_completed("two-sum");
        assert_eq!(tracker.pattern_percent(&catalog, "arrays-hashing").unwrap(), 50);
        assert_eq!(tracker.overall_percent(&catalog), 25);
    }

    #[test]
    fn pattern_percent_requires_known_pattern() {
        let catalog = catalog();
        let tracker = ProgressTracker::new(Box::new(MemoryStore::new()));
        assert!(tracker.pattern_percent(&catalog, "ghost").is_err());
    }

    #[test]
    fn toggle_does_not_validate_against_catalog() {
        let mut tracker = ProgressTracker::new(Box::new(MemoryStore::new()));
        assert!(tracker.toggle_completed("problem-from-a-future-dataset"));
        assert!(tracker.is_completed("problem-from-a-future-dataset"));
    }

    #[test]
    fn completed_patterns_requires_full_coverage() {
        let catalog = catalog();
        let mut tracker = ProgressTracker::new(Box::new(MemoryStore::new()));
        tracker.toggle_completed("two-sum");
        assert!(tracker.completed_patterns(&catalog).is_empty());
        tracker.toggle_completed("3sum");
        assert!(tracker.completed_patterns(&catalog).contains("arrays-hashing"));
    }
}
