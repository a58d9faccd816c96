use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use studymap_core::{PatternId, PrereqEdge, Result, StudymapError};

/// DFS coloring for cycle detection: unvisited, on the current path, done.
#[derive(Clone, Copy, PartialEq)]
enum Mark {
    White,
    Gray,
    Black,
}

/// The validated prerequisite DAG over pattern ids.
///
/// Construction is the only fallible phase; a value of this type always
/// holds an acyclic graph whose endpoints all resolve. Node order is the
/// catalog insertion order of the pattern ids, which makes every query
/// deterministic.
#[derive(Debug)]
pub struct PrereqGraph {
    ids: Vec<PatternId>,
    index: FxHashMap<PatternId, usize>,
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
}

impl PrereqGraph {
    /// Validate `edges` against `pattern_ids` and build the graph.
    ///
    /// Fails with `InvalidGraph` when an edge references an unknown pattern
    /// or when the edge set contains a cycle. Duplicate edges are collapsed.
    pub fn build<I, S>(pattern_ids: I, edges: &[PrereqEdge]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<PatternId>,
    {
        let ids: Vec<PatternId> = pattern_ids.into_iter().map(Into::into).collect();
        let index: FxHashMap<PatternId, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut successors = vec![Vec::new(); ids.len()];
        let mut predecessors = vec![Vec::new(); ids.len()];
        let mut seen = FxHashSet::default();
        for edge in edges {
            let from = *index.get(&edge.from).ok_or_else(|| {
                StudymapError::InvalidGraph(format!(
                    "edge references unknown pattern '{}'",
                    edge.from
                ))
            })?;
            let to = *index.get(&edge.to).ok_or_else(|| {
                StudymapError::InvalidGraph(format!(
                    "edge references unknown pattern '{}'",
                    edge.to
                ))
            })?;
            if seen.insert((from, to)) {
                successors[from].push(to);
                predecessors[to].push(from);
            }
        }

        let graph = Self {
            ids,
            index,
            successors,
            predecessors,
        };
        graph.check_acyclic()?;
        tracing::debug!(
            patterns = graph.ids.len(),
            edges = seen.len(),
            "prerequisite graph built"
        );
        Ok(graph)
    }

    /// Three-color depth-first search; a gray-to-gray edge is a cycle.
    fn check_acyclic(&self) -> Result<()> {
        let mut marks = vec![Mark::White; self.ids.len()];
        for start in 0..self.ids.len() {
            if marks[start] != Mark::White {
                continue;
            }
            // Iterative DFS; the second stack entry flags post-order exit.
            let mut stack = vec![(start, false)];
            while let Some((node, exiting)) = stack.pop() {
                if exiting {
                    marks[node] = Mark::Black;
                    continue;
                }
                if marks[node] == Mark::Black {
                    continue;
                }
                marks[node] = Mark::Gray;
                stack.push((node, true));
                for &next in &self.successors[node] {
                    match marks[next] {
                        Mark::Gray => {
                            return Err(StudymapError::InvalidGraph(format!(
                                "prerequisite cycle through pattern '{}'",
                                self.ids[next]
                            )));
                        }
                        Mark::White => stack.push((next, false)),
                        Mark::Black => {}
                    }
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, id: &str) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| StudymapError::PatternNotFound(id.to_string()))
    }

    pub fn pattern_ids(&self) -> &[PatternId] {
        &self.ids
    }

    /// Kahn's algorithm with ties broken by insertion index, so the output
    /// is a single reproducible linearization.
    pub fn topological_order(&self) -> Vec<PatternId> {
        let mut in_degree: Vec<usize> =
            self.predecessors.iter().map(Vec::len).collect();
        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &d)| d == 0)
            .map(|(i, _)| Reverse(i))
            .collect();

        let mut order = Vec::with_capacity(self.ids.len());
        while let Some(Reverse(node)) = ready.pop() {
            order.push(self.ids[node].clone());
            for &next in &self.successors[node] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }
        // Acyclicity is checked at construction, so every node drains.
        debug_assert_eq!(order.len(), self.ids.len());
        order
    }

    /// Direct prerequisites of a pattern.
    pub fn prerequisites_of(&self, id: &str) -> Result<FxHashSet<PatternId>> {
        let node = self.resolve(id)?;
        Ok(self.predecessors[node]
            .iter()
            .map(|&i| self.ids[i].clone())
            .collect())
    }

    /// Direct dependents of a pattern (the inverse of `prerequisites_of`).
    pub fn dependents_of(&self, id: &str) -> Result<FxHashSet<PatternId>> {
        let node = self.resolve(id)?;
        Ok(self.successors[node]
            .iter()
            .map(|&i| self.ids[i].clone())
            .collect())
    }

    /// Whether `to` is reachable from `from` following edges forward, i.e.
    /// `from` is a transitive prerequisite of `to`.
    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        // A pattern is never its own prerequisite; the graph is acyclic, so
        // asking is_reachable(x, x) falls out as false naturally.
        let mut visited = vec![false; self.ids.len()];
        let mut queue = VecDeque::new();
        visited[from] = true;
        queue.push_back(from);
        while let Some(current) = queue.pop_front() {
            for &next in &self.successors[current] {
                if next == to {
                    return Ok(true);
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(false)
    }

    /// Patterns whose direct prerequisites are all in `completed` and which
    /// are not themselves completed. Unknown ids inside `completed` are
    /// ignored; that set comes from user state, not the catalog.
    pub fn unlocked_patterns(
        &self,
        completed: &FxHashSet<PatternId>,
    ) -> FxHashSet<PatternId> {
        self.ids
            .iter()
            .enumerate()
            .filter(|(node, id)| {
                !completed.contains(*id)
                    && self.predecessors[*node]
                        .iter()
                        .all(|&p| completed.contains(&self.ids[p]))
            })
            .map(|(_, id)| id.clone())
            .collect()
    }
}
