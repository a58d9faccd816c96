use rustc_hash::FxHashMap;
use studymap_core::{
    Difficulty, Pattern, PatternId, Problem, Result, StudymapError,
};

/// Query configuration for [`Catalog::find_problems`].
///
/// All clauses are conjunctive; an unset clause matches everything. An
/// unknown `pattern_id` matches nothing rather than erroring, so filters
/// degrade to empty results at the UI boundary.
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub difficulty: Option<Difficulty>,
    pub pattern_id: Option<PatternId>,
    pub text_query: Option<String>,
}

impl ProblemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_pattern(mut self, pattern_id: impl Into<PatternId>) -> Self {
        self.pattern_id = Some(pattern_id.into());
        self
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text_query = Some(query.into());
        self
    }
}

/// Owner of the immutable problem and pattern sets.
///
/// Iteration order everywhere is load order; queries never re-rank.
pub struct Catalog {
    problems: Vec<Problem>,
    patterns: Vec<Pattern>,
    problem_index: FxHashMap<String, usize>,
    pattern_index: FxHashMap<String, usize>,
}

impl Catalog {
    pub fn new(patterns: Vec<Pattern>, problems: Vec<Problem>) -> Self {
        let pattern_index = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let problem_index = problems
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        tracing::debug!(
            patterns = patterns.len(),
            problems = problems.len(),
            "catalog loaded"
        );
        Self {
            problems,
            patterns,
            problem_index,
            pattern_index,
        }
    }

    /// All problems in load order.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// All patterns in load order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn problem(&self, id: &str) -> Result<&Problem> {
        self.problem_index
            .get(id)
            .map(|&i| &self.problems[i])
            .ok_or_else(|| StudymapError::ProblemNotFound(id.to_string()))
    }

    pub fn pattern(&self, id: &str) -> Result<&Pattern> {
        self.pattern_index
            .get(id)
            .map(|&i| &self.patterns[i])
            .ok_or_else(|| StudymapError::PatternNotFound(id.to_string()))
    }

    pub fn contains_pattern(&self, id: &str) -> bool {
        self.pattern_index.contains_key(id)
    }

    /// Filtered problem listing in catalog order.
    pub fn find_problems(&self, filter: &ProblemFilter) -> Vec<&Problem> {
        self.problems
            .iter()
            .filter(|p| self.matches(p, filter))
            .collect()
    }

    fn matches(&self, problem: &Problem, filter: &ProblemFilter) -> bool {
        if let Some(difficulty) = filter.difficulty {
            if problem.difficulty != difficulty {
                return false;
            }
        }
        if let Some(ref pattern_id) = filter.pattern_id {
            if !problem.in_pattern(pattern_id) {
                return false;
            }
        }
        if let Some(ref query) = filter.text_query {
            let query = query.to_lowercase();
            let title_hit = problem.title.to_lowercase().contains(&query);
            let pattern_hit = problem.patterns.iter().any(|pid| {
                if pid.to_lowercase().contains(&query) {
                    return true;
                }
                // Unknown pattern ids in the problem data simply contribute
                // no display name to match against.
                self.pattern_index
                    .get(pid)
                    .map(|&i| self.patterns[i].name.to_lowercase().contains(&query))
                    .unwrap_or(false)
            });
            if !title_hit && !pattern_hit {
                return false;
            }
        }
        true
    }

    /// Authoritative problem count for a pattern, recomputed from
    /// `Problem::patterns` rather than the pattern's cached list.
    pub fn problem_count_for_pattern(&self, pattern_id: &str) -> Result<usize> {
        if !self.contains_pattern(pattern_id) {
            return Err(StudymapError::PatternNotFound(pattern_id.to_string()));
        }
        Ok(self
            .problems
            .iter()
            .filter(|p| p.in_pattern(pattern_id))
            .count())
    }

    /// Ids of the problems belonging to a pattern, in catalog order.
    pub fn problem_ids_for_pattern(&self, pattern_id: &str) -> Result<Vec<&str>> {
        if !self.contains_pattern(pattern_id) {
            return Err(StudymapError::PatternNotFound(pattern_id.to_string()));
        }
        Ok(self
            .problems
            .iter()
            .filter(|p| p.in_pattern(pattern_id))
            .map(|p| p.id.as_str())
            .collect())
    }

    pub fn pattern_ids(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studymap_core::Tier;

    fn small_catalog() -> Catalog {
        let patterns = vec![
            Pattern::new("arrays-hashing", "Arrays & Hashing", Tier::Beginner, 8)
                .with_problems(["two-sum"]),
            Pattern::new("two-pointers", "Two Pointers", Tier::Beginner, 6),
        ];
        let problems = vec![
            Problem::new("two-sum", "Two Sum", Difficulty::Easy, "Array")
                .with_patterns(["arrays-hashing"]),
            Problem::new("3sum", "3Sum", Difficulty::Medium, "Array")
                .with_patterns(["two-pointers"]),
        ];
        Catalog::new(patterns, problems)
    }

    #[test]
    fn lookup_by_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.problem("two-sum").unwrap().title, "Two Sum");
        assert!(matches!(
            catalog.problem("nope"),
            Err(StudymapError::ProblemNotFound(_))
        ));
        assert!(matches!(
            catalog.pattern("nope"),
            Err(StudymapError::PatternNotFound(_))
        ));
    }

    #[test]
    fn filter_is_conjunctive() {
        let catalog = small_catalog();
        let filter = ProblemFilter::new()
            .with_difficulty(Difficulty::Easy)
            .with_text("sum");
        let hits = catalog.find_problems(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "two-sum");
    }

    #[test]
    fn filter_matches_pattern_name_substring() {
        let catalog = small_catalog();
        let hits = catalog.find_problems(&ProblemFilter::new().with_text("hashing"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "two-sum");
    }

    #[test]
    fn unknown_pattern_filter_matches_nothing() {
        let catalog = small_catalog();
        let hits = catalog.find_problems(&ProblemFilter::new().with_pattern("nope"));
        assert!(hits.is_empty());
    }

    #[test]
    fn count_is_authoritative_over_cache() {
        // The two-pointers pattern caches nothing, but 3sum claims
        // membership; the count must come from the problem side.
        let catalog = small_catalog();
        assert_eq!(catalog.problem_count_for_pattern("two-pointers").unwrap(), 1);
        assert!(catalog.problem_count_for_pattern("nope").is_err());
    }
}
