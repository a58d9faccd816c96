use crate::Catalog;
use rustc_hash::FxHashSet;
use std::fmt;

/// A single disagreement between a pattern's cached `problems` list and the
/// authoritative `Problem::patterns` relation.
///
/// Curation drift between the two lists is a known data risk; this checker
/// exists to surface it during curation, not to guard queries at runtime
/// (those always recompute from the problem side).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheDrift {
    /// The pattern caches a problem id that does not list the pattern back.
    MissingBacklink {
        pattern_id: String,
        problem_id: String,
    },
    /// A problem lists the pattern but the pattern's cache omits it.
    MissingCacheEntry {
        pattern_id: String,
        problem_id: String,
    },
    /// The pattern caches a problem id that does not exist in the catalog.
    UnknownProblem {
        pattern_id: String,
        problem_id: String,
    },
    /// A problem references a pattern id that does not exist in the catalog.
    UnknownPattern {
        problem_id: String,
        pattern_id: String,
    },
}

impl fmt::Display for CacheDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheDrift::MissingBacklink {
                pattern_id,
                problem_id,
            } => write!(
                f,
                "pattern '{}' caches '{}' but the problem does not list it",
                pattern_id, problem_id
            ),
            CacheDrift::MissingCacheEntry {
                pattern_id,
                problem_id,
            } => write!(
                f,
                "problem '{}' belongs to '{}' but the pattern cache omits it",
                problem_id, pattern_id
            ),
            CacheDrift::UnknownProblem {
                pattern_id,
                problem_id,
            } => write!(
                f,
                "pattern '{}' caches unknown problem '{}'",
                pattern_id, problem_id
            ),
            CacheDrift::UnknownPattern {
                problem_id,
                pattern_id,
            } => write!(
                f,
                "problem '{}' references unknown pattern '{}'",
                problem_id, pattern_id
            ),
        }
    }
}

/// Compare every pattern cache against the authoritative membership and
/// report each disagreement. An empty result means the two views agree.
pub fn check_consistency(catalog: &Catalog) -> Vec<CacheDrift> {
    let mut drift = Vec::new();

    for pattern in catalog.patterns() {
        let cached: FxHashSet<&str> =
            pattern.problems.iter().map(String::as_str).collect();
        for problem_id in &pattern.problems {
            match catalog.problem(problem_id) {
                Ok(problem) => {
                    if !problem.in_pattern(&pattern.id) {
                        drift.push(CacheDrift::MissingBacklink {
                            pattern_id: pattern.id.clone(),
                            problem_id: problem_id.clone(),
                        });
                    }
                }
                Err(_) => drift.push(CacheDrift::UnknownProblem {
                    pattern_id: pattern.id.clone(),
                    problem_id: problem_id.clone(),
                }),
            }
        }
        for problem in catalog.problems() {
            if problem.in_pattern(&pattern.id) && !cached.contains(problem.id.as_str()) {
                drift.push(CacheDrift::MissingCacheEntry {
                    pattern_id: pattern.id.clone(),
                    problem_id: problem.id.clone(),
                });
            }
        }
    }

    for problem in catalog.problems() {
        for pattern_id in &problem.patterns {
            if !catalog.contains_pattern(pattern_id) {
                drift.push(CacheDrift::UnknownPattern {
                    problem_id: problem.id.clone(),
                    pattern_id: pattern_id.clone(),
                });
            }
        }
    }

    drift
}

#[cfg(test)]
mod tests {
    use super::*;
    use studymap_core::{Difficulty, Pattern, Problem, Tier};

    #[test]
    fn clean_catalog_reports_nothing() {
        let catalog = Catalog::new(
            vec![Pattern::new("stack", "Stack", Tier::Beginner, 4)
                .with_problems(["valid-parentheses"])],
            vec![Problem::new(
                "valid-parentheses",
                "Valid Parentheses",
                Difficulty::Easy,
                "String",
            )
            .with_patterns(["stack"])],
        );
        assert!(check_consistency(&catalog).is_empty());
    }

    #[test]
    fn detects_each_drift_kind() {
        let catalog = Catalog::new(
            vec![Pattern::new("stack", "Stack", Tier::Beginner, 4)
                .with_problems(["min-stack", "ghost-problem"])],
            vec![
                // listed in the cache but does not backlink
                Problem::new("min-stack", "Min Stack", Difficulty::Medium, "Stack"),
                // backlinks but missing from the cache, plus a dangling
                // pattern reference
                Problem::new("evaluate-rpn", "Evaluate RPN", Difficulty::Medium, "Stack")
                    .with_patterns(["stack", "ghost-pattern"]),
            ],
        );
        let drift = check_consistency(&catalog);
        assert!(drift.contains(&CacheDrift::MissingBacklink {
            pattern_id: "stack".into(),
            problem_id: "min-stack".into(),
        }));
        assert!(drift.contains(&CacheDrift::UnknownProblem {
            pattern_id: "stack".into(),
            problem_id: "ghost-problem".into(),
        }));
        assert!(drift.contains(&CacheDrift::MissingCacheEntry {
            pattern_id: "stack".into(),
            problem_id: "evaluate-rpn".into(),
        }));
        assert!(drift.contains(&CacheDrift::UnknownPattern {
            problem_id: "evaluate-rpn".into(),
            pattern_id: "ghost-pattern".into(),
        }));
    }
}
