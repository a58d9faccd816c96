use studymap_catalog::{builtin, check_consistency, CacheDrift, Catalog, ProblemFilter};
use studymap_core::{Difficulty, Pattern, Problem, Tier};

#[test]
fn easy_sum_filter_excludes_medium_3sum() {
    let catalog = Catalog::new(
        vec![Pattern::new("arrays-hashing", "Arrays & Hashing", Tier::Beginner, 8)],
        vec![
            Problem::new("two-sum", "Two Sum", Difficulty::Easy, "Array")
                .with_patterns(["arrays-hashing"]),
            Problem::new("3sum", "3Sum", Difficulty::Medium, "Array")
                .with_patterns(["arrays-hashing"]),
        ],
    );
    let filter = ProblemFilter::new()
        .with_difficulty(Difficulty::Easy)
        .with_text("sum");
    let hits = catalog.find_problems(&filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Two Sum");
}

#[test]
fn text_query_is_case_insensitive_on_titles() {
    let catalog = builtin::catalog();
    let hits = catalog.find_problems(&ProblemFilter::new().with_text("TWO SUM"));
    assert!(hits.iter().any(|p| p.id == "two-sum"));
    assert!(hits.iter().any(|p| p.id == "two-sum-ii"));
}

#[test]
fn text_query_reaches_pattern_names() {
    // "priority" only appears in the Heap / Priority Queue pattern name.
    let catalog = builtin::catalog();
    let hits = catalog.find_problems(&ProblemFilter::new().with_text("priority"));
    assert!(hits.iter().any(|p| p.id == "top-k-frequent"));
}

#[test]
fn empty_filter_returns_catalog_order() {
    let catalog = builtin::catalog();
    let hits = catalog.find_problems(&ProblemFilter::new());
    assert_eq!(hits.len(), catalog.problems().len());
    assert_eq!(hits[0].id, "two-sum");
}

#[test]
fn counts_come_from_problem_side() {
    let catalog = builtin::catalog();
    // top-k-frequent claims heap-priority-queue membership even though the
    // pattern's own cache never lists it.
    assert_eq!(
        catalog.problem_count_for_pattern("heap-priority-queue").unwrap(),
        1
    );
    // The arrays-hashing cache lists 6 entries, but two extra problems claim
    // membership from the problem side.
    assert_eq!(
        catalog.problem_count_for_pattern("arrays-hashing").unwrap(),
        8
    );
}

#[test]
fn builtin_dataset_has_known_cache_drift_only() {
    let drift = check_consistency(builtin::catalog());
    // The shipped caches reference problems that were never curated, and
    // omit cross-pattern memberships; both are expected.
    assert!(!drift.is_empty());
    // What must never happen: a problem pointing at a pattern that does not
    // exist, or a cached problem disowning the pattern.
    assert!(!drift
        .iter()
        .any(|d| matches!(d, CacheDrift::UnknownPattern { .. })));
    assert!(!drift
        .iter()
        .any(|d| matches!(d, CacheDrift::MissingBacklink { .. })));
}
