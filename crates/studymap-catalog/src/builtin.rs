//! The compiled-in study catalog: 18 learning patterns, their curated
//! problems, and the hand-authored prerequisite edges between patterns.
//!
//! Several pattern caches reference problems that were never added to the
//! problem list (e.g. `sliding-window-maximum`). That drift ships as-is;
//! `Problem::patterns` is the authoritative relation and `studymap check`
//! reports the disagreements.

use crate::Catalog;
use once_cell::sync::Lazy;
use studymap_core::{Difficulty, Pattern, PrereqEdge, Problem, Source, Tier};

use Difficulty::{Easy, Hard, Medium};
use Source::{Blind75, LeetCode75, LeetCodeWizard, NeetCode};

pub fn patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("arrays-hashing", "Arrays & Hashing", Tier::Beginner, 8)
            .with_description("Master array manipulation, hash tables, and frequency counting")
            .with_problems([
                "two-sum",
                "contains-duplicate",
                "valid-anagram",
                "group-anagrams",
                "top-k-frequent",
                "product-except-self",
            ]),
        Pattern::new("two-pointers", "Two Pointers", Tier::Beginner, 6)
            .with_description("Efficient array traversal using multiple pointers")
            .with_problems([
                "valid-palindrome",
                "two-sum-ii",
                "container-with-most-water",
                "3sum",
                "trapping-rain-water",
            ]),
        Pattern::new("sliding-window", "Sliding Window", Tier::Intermediate, 10)
            .with_description("Optimize substring and subarray problems")
            .with_problems([
                "longest-substring-without-repeating",
                "longest-repeating-character",
                "minimum-window-substring",
                "sliding-window-maximum",
            ]),
        Pattern::new("stack", "Stack", Tier::Beginner, 4)
            .with_description("LIFO data structure applications")
            .with_problems([
                "valid-parentheses",
                "min-stack",
                "evaluate-rpn",
                "generate-parentheses",
            ]),
        Pattern::new("binary-search", "Binary Search", Tier::Beginner, 6)
            .with_description("Divide and conquer search algorithms")
            .with_problems([
                "binary-search",
                "search-2d-matrix",
                "koko-eating-bananas",
                "find-minimum-rotated",
            ]),
        Pattern::new("linked-list", "Linked List", Tier::Intermediate, 8)
            .with_description("Pointer manipulation and list operations")
            .with_problems([
                "reverse-linked-list",
                "merge-two-lists",
                "linked-list-cycle",
                "remove-nth-node",
            ]),
        Pattern::new("trees", "Trees", Tier::Intermediate, 12)
            .with_description("Binary tree traversal and operations")
            .with_problems([
                "invert-binary-tree",
                "maximum-depth",
                "same-tree",
                "subtree-of-another",
            ]),
        Pattern::new("tries", "Tries", Tier::Intermediate, 6)
            .with_description("Prefix tree data structure")
            .with_problems(["implement-trie", "design-add-search", "word-search-ii"]),
        Pattern::new("heap-priority-queue", "Heap / Priority Queue", Tier::Intermediate, 8)
            .with_description("Priority-based data management")
            .with_problems(["kth-largest-element", "task-scheduler", "design-twitter"]),
        Pattern::new("backtracking", "Backtracking", Tier::Advanced, 12)
            .with_description("Recursive problem-solving")
            .with_problems(["subsets", "combination-sum", "permutations", "word-search"]),
        Pattern::new("graphs", "Graphs", Tier::Advanced, 15)
            .with_description("Graph traversal and algorithms")
            .with_problems([
                "number-of-islands",
                "clone-graph",
                "max-area-island",
                "pacific-atlantic",
            ]),
        Pattern::new("advanced-graphs", "Advanced Graphs", Tier::Advanced, 18)
            .with_description("Complex graph problems")
            .with_problems([
                "reconstruct-itinerary",
                "min-cost-connect-points",
                "network-delay-time",
            ]),
        Pattern::new("1d-dynamic-programming", "1-D Dynamic Programming", Tier::Advanced, 15)
            .with_description("Optimization problems")
            .with_problems([
                "climbing-stairs",
                "min-cost-climbing",
                "house-robber",
                "house-robber-ii",
            ]),
        Pattern::new("2d-dynamic-programming", "2-D Dynamic Programming", Tier::Advanced, 20)
            .with_description("Complex optimization")
            .with_problems([
                "unique-paths",
                "longest-common-subsequence",
                "best-time-buy-sell-cooldown",
            ]),
        Pattern::new("greedy", "Greedy", Tier::Advanced, 10)
            .with_description("Optimal choice algorithms")
            .with_problems(["maximum-subarray", "jump-game", "gas-station", "hand-of-straights"]),
        Pattern::new("intervals", "Intervals", Tier::Advanced, 8)
            .with_description("Range and interval problems")
            .with_problems([
                "insert-interval",
                "merge-intervals",
                "non-overlapping-intervals",
            ]),
        Pattern::new("math-geometry", "Math & Geometry", Tier::Advanced, 10)
            .with_description("Mathematical problem solving")
            .with_problems(["rotate-image", "spiral-matrix", "set-matrix-zeroes"]),
        Pattern::new("bit-manipulation", "Bit Manipulation", Tier::Advanced, 6)
            .with_description("Binary operations")
            .with_problems(["single-number", "number-of-1-bits", "counting-bits"]),
    ]
}

pub fn problems() -> Vec<Problem> {
    vec![
        // Arrays & Hashing
        Problem::new("two-sum", "Two Sum", Easy, "Array")
            .with_patterns(["arrays-hashing"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook", "Apple"])
            .with_frequency(100)
            .with_url("https://leetcode.com/problems/two-sum/")
            .with_sources([LeetCodeWizard, NeetCode, LeetCode75, Blind75])
            .with_complexity("O(n)", "O(n)"),
        Problem::new("contains-duplicate", "Contains Duplicate", Easy, "Array")
            .with_patterns(["arrays-hashing"])
            .with_companies(["Google", "Amazon", "Microsoft"])
            .with_frequency(85)
            .with_url("https://leetcode.com/problems/contains-duplicate/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(n)"),
        Problem::new("valid-anagram", "Valid Anagram", Easy, "String")
            .with_patterns(["arrays-hashing"])
            .with_companies(["Amazon", "Microsoft", "Facebook"])
            .with_frequency(80)
            .with_url("https://leetcode.com/problems/valid-anagram/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("group-anagrams", "Group Anagrams", Medium, "String")
            .with_patterns(["arrays-hashing"])
            .with_companies(["Amazon", "Microsoft", "Facebook", "Uber"])
            .with_frequency(75)
            .with_url("https://leetcode.com/problems/group-anagrams/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n * k log k)", "O(n * k)"),
        Problem::new("top-k-frequent", "Top K Frequent Elements", Medium, "Array")
            .with_patterns(["arrays-hashing", "heap-priority-queue"])
            .with_companies(["Amazon", "Facebook", "Apple", "Spotify"])
            .with_frequency(70)
            .with_url("https://leetcode.com/problems/top-k-frequent-elements/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n log k)", "O(n + k)"),
        Problem::new("product-except-self", "Product of Array Except Self", Medium, "Array")
            .with_patterns(["arrays-hashing"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(88)
            .with_url("https://leetcode.com/problems/product-of-array-except-self/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        // Two Pointers
        Problem::new("valid-palindrome", "Valid Palindrome", Easy, "String")
            .with_patterns(["two-pointers"])
            .with_companies(["Microsoft", "Facebook", "Amazon"])
            .with_frequency(70)
            .with_url("https://leetcode.com/problems/valid-palindrome/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("two-sum-ii", "Two Sum II - Input Array Is Sorted", Medium, "Array")
            .with_patterns(["two-pointers"])
            .with_companies(["Amazon", "Microsoft"])
            .with_frequency(65)
            .with_url("https://leetcode.com/problems/two-sum-ii-input-array-is-sorted/")
            .with_sources([NeetCode])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("container-with-most-water", "Container With Most Water", Medium, "Array")
            .with_patterns(["two-pointers"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(64)
            .with_url("https://leetcode.com/problems/container-with-most-water/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("3sum", "3Sum", Medium, "Array")
            .with_patterns(["two-pointers"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(61)
            .with_url("https://leetcode.com/problems/3sum/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(n²)", "O(1)"),
        Problem::new("trapping-rain-water", "Trapping Rain Water", Hard, "Array")
            .with_patterns(["two-pointers"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(66)
            .with_url("https://leetcode.com/problems/trapping-rain-water/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        // Sliding Window
        Problem::new(
            "longest-substring-without-repeating",
            "Longest Substring Without Repeating Characters",
            Medium,
            "String",
        )
        .with_patterns(["sliding-window"])
        .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
        .with_frequency(64)
        .with_url("https://leetcode.com/problems/longest-substring-without-repeating-characters/")
        .with_sources([LeetCodeWizard, NeetCode, Blind75])
        .with_complexity("O(n)", "O(min(m,n))"),
        Problem::new(
            "longest-repeating-character",
            "Longest Repeating Character Replacement",
            Medium,
            "String",
        )
        .with_patterns(["sliding-window"])
        .with_companies(["Microsoft", "Amazon"])
        .with_frequency(55)
        .with_url("https://leetcode.com/problems/longest-repeating-character-replacement/")
        .with_sources([NeetCode, Blind75])
        .with_complexity("O(n)", "O(1)"),
        Problem::new("minimum-window-substring", "Minimum Window Substring", Hard, "String")
            .with_patterns(["sliding-window"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(58)
            .with_url("https://leetcode.com/problems/minimum-window-substring/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(|S| + |T|)", "O(|S| + |T|)"),
        // Stack
        Problem::new("valid-parentheses", "Valid Parentheses", Easy, "String")
            .with_patterns(["stack"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(95)
            .with_url("https://leetcode.com/problems/valid-parentheses/")
            .with_sources([NeetCode, Blind75, LeetCode75])
            .with_complexity("O(n)", "O(n)"),
        // Binary Search
        Problem::new("binary-search", "Binary Search", Easy, "Array")
            .with_patterns(["binary-search"])
            .with_companies(["Google", "Amazon", "Microsoft"])
            .with_frequency(90)
            .with_url("https://leetcode.com/problems/binary-search/")
            .with_sources([NeetCode])
            .with_complexity("O(log n)", "O(1)"),
        // Linked List
        Problem::new("reverse-linked-list", "Reverse Linked List", Easy, "Linked List")
            .with_patterns(["linked-list"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(85)
            .with_url("https://leetcode.com/problems/reverse-linked-list/")
            .with_sources([NeetCode, Blind75, LeetCode75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("merge-two-lists", "Merge Two Sorted Lists", Easy, "Linked List")
            .with_patterns(["linked-list"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(61)
            .with_url("https://leetcode.com/problems/merge-two-sorted-lists/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(n + m)", "O(1)"),
        Problem::new("linked-list-cycle", "Linked List Cycle", Easy, "Linked List")
            .with_patterns(["linked-list", "two-pointers"])
            .with_companies(["Amazon", "Microsoft", "Facebook"])
            .with_frequency(75)
            .with_url("https://leetcode.com/problems/linked-list-cycle/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        // Trees
        Problem::new("invert-binary-tree", "Invert Binary Tree", Easy, "Tree")
            .with_patterns(["trees"])
            .with_companies(["Google", "Amazon", "Microsoft"])
            .with_frequency(70)
            .with_url("https://leetcode.com/problems/invert-binary-tree/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(h)"),
        Problem::new("maximum-depth", "Maximum Depth of Binary Tree", Easy, "Tree")
            .with_patterns(["trees"])
            .with_companies(["Amazon", "Microsoft", "Facebook"])
            .with_frequency(65)
            .with_url("https://leetcode.com/problems/maximum-depth-of-binary-tree/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(h)"),
        // Graphs
        Problem::new("number-of-islands", "Number of Islands", Medium, "Graph")
            .with_patterns(["graphs"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(61)
            .with_url("https://leetcode.com/problems/number-of-islands/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(m * n)", "O(m * n)"),
        Problem::new("clone-graph", "Clone Graph", Medium, "Graph")
            .with_patterns(["graphs"])
            .with_companies(["Google", "Amazon", "Facebook"])
            .with_frequency(55)
            .with_url("https://leetcode.com/problems/clone-graph/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(N + M)", "O(N)"),
        // Dynamic Programming
        Problem::new("climbing-stairs", "Climbing Stairs", Easy, "Dynamic Programming")
            .with_patterns(["1d-dynamic-programming"])
            .with_companies(["Amazon", "Microsoft", "Apple"])
            .with_frequency(80)
            .with_url("https://leetcode.com/problems/climbing-stairs/")
            .with_sources([NeetCode, Blind75, LeetCode75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("house-robber", "House Robber", Medium, "Dynamic Programming")
            .with_patterns(["1d-dynamic-programming"])
            .with_companies(["Google", "Amazon", "Microsoft"])
            .with_frequency(66)
            .with_url("https://leetcode.com/problems/house-robber/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new(
            "best-time-to-buy-and-sell-stock",
            "Best Time to Buy and Sell Stock",
            Easy,
            "Array",
        )
        .with_patterns(["arrays-hashing", "1d-dynamic-programming"])
        .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
        .with_frequency(61)
        .with_url("https://leetcode.com/problems/best-time-to-buy-and-sell-stock/")
        .with_sources([LeetCodeWizard, NeetCode, Blind75, LeetCode75])
        .with_complexity("O(n)", "O(1)"),
        // LeetCode 75 additions
        Problem::new("merge-strings-alternately", "Merge Strings Alternately", Easy, "String")
            .with_patterns(["two-pointers"])
            .with_companies(["Google"])
            .with_frequency(84)
            .with_url("https://leetcode.com/problems/merge-strings-alternately/")
            .with_sources([LeetCodeWizard, LeetCode75])
            .with_complexity("O(n + m)", "O(n + m)"),
        Problem::new(
            "greatest-common-divisor-of-strings",
            "Greatest Common Divisor of Strings",
            Easy,
            "String",
        )
        .with_patterns(["math-geometry"])
        .with_companies(["Amazon"])
        .with_frequency(45)
        .with_url("https://leetcode.com/problems/greatest-common-divisor-of-strings/")
        .with_sources([LeetCode75])
        .with_complexity("O(min(m,n)*(m+n))", "O(min(m,n))"),
        Problem::new(
            "kids-with-candies",
            "Kids With the Greatest Number of Candies",
            Easy,
            "Array",
        )
        .with_patterns(["arrays-hashing"])
        .with_companies(["Amazon"])
        .with_frequency(40)
        .with_url("https://leetcode.com/problems/kids-with-the-greatest-number-of-candies/")
        .with_sources([LeetCode75])
        .with_complexity("O(n)", "O(n)"),
        Problem::new("can-place-flowers", "Can Place Flowers", Easy, "Array")
            .with_patterns(["greedy"])
            .with_companies(["LinkedIn"])
            .with_frequency(35)
            .with_url("https://leetcode.com/problems/can-place-flowers/")
            .with_sources([LeetCode75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("reverse-vowels-of-string", "Reverse Vowels of a String", Easy, "String")
            .with_patterns(["two-pointers"])
            .with_companies(["Google", "Microsoft"])
            .with_frequency(42)
            .with_url("https://leetcode.com/problems/reverse-vowels-of-a-string/")
            .with_sources([LeetCode75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("reverse-words-in-string", "Reverse Words in a String", Medium, "String")
            .with_patterns(["two-pointers"])
            .with_companies(["Microsoft", "Amazon"])
            .with_frequency(48)
            .with_url("https://leetcode.com/problems/reverse-words-in-a-string/")
            .with_sources([LeetCode75])
            .with_complexity("O(n)", "O(n)"),
        // Greedy / intervals
        Problem::new("maximum-subarray", "Maximum Subarray", Easy, "Array")
            .with_patterns(["greedy", "1d-dynamic-programming"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(85)
            .with_url("https://leetcode.com/problems/maximum-subarray/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(1)"),
        Problem::new("merge-intervals", "Merge Intervals", Medium, "Array")
            .with_patterns(["intervals"])
            .with_companies(["Google", "Amazon", "Microsoft", "Facebook"])
            .with_frequency(66)
            .with_url("https://leetcode.com/problems/merge-intervals/")
            .with_sources([LeetCodeWizard, NeetCode, Blind75])
            .with_complexity("O(n log n)", "O(n)"),
        Problem::new("insert-interval", "Insert Interval", Medium, "Array")
            .with_patterns(["intervals"])
            .with_companies(["Google", "Facebook", "LinkedIn"])
            .with_frequency(60)
            .with_url("https://leetcode.com/problems/insert-interval/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n)", "O(n)"),
        Problem::new("non-overlapping-intervals", "Non-overlapping Intervals", Medium, "Array")
            .with_patterns(["intervals", "greedy"])
            .with_companies(["Amazon", "Microsoft"])
            .with_frequency(50)
            .with_url("https://leetcode.com/problems/non-overlapping-intervals/")
            .with_sources([NeetCode, Blind75])
            .with_complexity("O(n log n)", "O(1)"),
    ]
}

/// The curated learning-order dependencies between patterns.
pub fn prerequisite_edges() -> Vec<PrereqEdge> {
    [
        // Foundation to basics
        ("arrays-hashing", "two-pointers"),
        ("arrays-hashing", "sliding-window"),
        // Basics to data structures
        ("two-pointers", "stack"),
        ("two-pointers", "binary-search"),
        ("sliding-window", "linked-list"),
        ("sliding-window", "binary-search"),
        // Data structures to trees
        ("stack", "trees"),
        ("binary-search", "trees"),
        ("linked-list", "trees"),
        // Trees to advanced structures
        ("trees", "tries"),
        ("trees", "heap-priority-queue"),
        // Advanced structures to algorithms
        ("tries", "backtracking"),
        ("heap-priority-queue", "graphs"),
        ("trees", "backtracking"),
        // Graphs progression
        ("graphs", "advanced-graphs"),
        // To dynamic programming
        ("backtracking", "1d-dynamic-programming"),
        ("advanced-graphs", "1d-dynamic-programming"),
        // DP to advanced algorithms
        ("1d-dynamic-programming", "2d-dynamic-programming"),
        ("1d-dynamic-programming", "greedy"),
        ("1d-dynamic-programming", "intervals"),
        // Advanced to specialized
        ("2d-dynamic-programming", "math-geometry"),
        ("greedy", "bit-manipulation"),
        ("intervals", "math-geometry"),
    ]
    .into_iter()
    .map(|(from, to)| PrereqEdge::new(from, to))
    .collect()
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(patterns(), problems()));

/// The shared, lazily built catalog instance.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_endpoints_all_exist() {
        let catalog = catalog();
        for edge in prerequisite_edges() {
            assert!(catalog.contains_pattern(&edge.from), "missing {}", edge.from);
            assert!(catalog.contains_pattern(&edge.to), "missing {}", edge.to);
        }
    }

    #[test]
    fn every_problem_pattern_resolves() {
        let catalog = catalog();
        for problem in catalog.problems() {
            for pattern_id in &problem.patterns {
                assert!(
                    catalog.contains_pattern(pattern_id),
                    "problem '{}' references unknown pattern '{}'",
                    problem.id,
                    pattern_id
                );
            }
        }
    }

    #[test]
    fn ids_are_unique() {
        let catalog = catalog();
        assert_eq!(catalog.patterns().len(), 18);
        assert_eq!(catalog.problems().len(), 36);
        for pattern in catalog.patterns() {
            assert_eq!(catalog.pattern(&pattern.id).unwrap().id, pattern.id);
        }
        for problem in catalog.problems() {
            assert_eq!(catalog.problem(&problem.id).unwrap().id, problem.id);
        }
    }
}
