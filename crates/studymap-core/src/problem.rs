use crate::{Difficulty, PatternId, ProblemId, Source};
use serde::{Deserialize, Serialize};

/// A single catalog entry. Immutable after load; construction goes through
/// the builder-style `with_*` methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
    /// Patterns this problem belongs to, in curation order. This list is the
    /// authoritative membership relation; `Pattern::problems` is a cache.
    pub patterns: Vec<PatternId>,
    pub companies: Vec<String>,
    /// Interview frequency score, 0-100.
    pub frequency: u8,
    pub url: String,
    pub sources: Vec<Source>,
    pub time_complexity: Option<String>,
    pub space_complexity: Option<String>,
}

impl Problem {
    pub fn new(
        id: impl Into<ProblemId>,
        title: impl Into<String>,
        difficulty: Difficulty,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            difficulty,
            category: category.into(),
            patterns: Vec::new(),
            companies: Vec::new(),
            frequency: 0,
            url: String::new(),
            sources: Vec::new(),
            time_complexity: None,
            space_complexity: None,
        }
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PatternId>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companies = companies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_frequency(mut self, frequency: u8) -> Self {
        self.frequency = frequency.min(100);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = Source>,
    {
        self.sources = sources.into_iter().collect();
        self
    }

    pub fn with_complexity(
        mut self,
        time: impl Into<String>,
        space: impl Into<String>,
    ) -> Self {
        self.time_complexity = Some(time.into());
        self.space_complexity = Some(space.into());
        self
    }

    pub fn in_pattern(&self, pattern_id: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_clamps_frequency() {
        let p = Problem::new("two-sum", "Two Sum", Difficulty::Easy, "Array")
            .with_frequency(250);
        assert_eq!(p.frequency, 100);
    }

    #[test]
    fn pattern_membership() {
        let p = Problem::new("two-sum", "Two Sum", Difficulty::Easy, "Array")
            .with_patterns(["arrays-hashing"]);
        assert!(p.in_pattern("arrays-hashing"));
        assert!(!p.in_pattern("two-pointers"));
    }
}
