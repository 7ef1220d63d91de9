//! The A* engine itself (§4.5): open set + closed set + expansion loop over
//! the (vertex, accumulated-annotation) product space.

use std::collections::HashSet;

use crate::annotation::AnnotationMap;
use crate::bitset::BitSet;
use crate::complex::{EdgeKey, VertexId};
use crate::errors::CoreError;
use crate::heuristic::HeuristicOracle;

use super::queue::OpenSet;
use super::types::{Arena, SearchNode};

/// Outcome of a completed search: the terminal node's back-pointer (to
/// reconstruct the path with) and the number of node expansions performed
/// (exposed for the heuristic-tightening property test, §8 scenario 5).
pub struct SearchOutcome {
    pub goal_back: Option<usize>,
    pub expanded_nodes: usize,
}

/// Runs the A* search described by §4.5. Carries the 1-skeleton adjacency,
/// the annotation map (for computing `s'` on each edge traversal), the
/// heuristic oracle, and the shared back-pointer arena.
pub struct AStarRunner<'a> {
    adjacency: &'a [Vec<VertexId>],
    annotations: &'a AnnotationMap,
    oracle: HeuristicOracle<'a>,
    arena: Arena,
    open: OpenSet,
    closed: HashSet<(VertexId, BitSet)>,
    source: VertexId,
    target: VertexId,
    tau: BitSet,
    expanded_nodes: usize,
}

impl<'a> AStarRunner<'a> {
    pub fn new(
        adjacency: &'a [Vec<VertexId>],
        annotations: &'a AnnotationMap,
        oracle: HeuristicOracle<'a>,
        source: VertexId,
        target: VertexId,
        tau: BitSet,
    ) -> Self {
        let mut runner = Self {
            adjacency,
            annotations,
            oracle,
            arena: Arena::default(),
            open: OpenSet::new(),
            closed: HashSet::new(),
            source,
            target,
            tau,
            expanded_nodes: 0,
        };
        let width = annotations.width();
        let s0 = BitSet::zero(width);
        let h0 = runner.oracle.estimate(source, &s0, &runner.tau);
        runner.open.push(SearchNode {
            v: source,
            s: s0,
            g: 0,
            f: h0,
            back: None,
        });
        runner
    }

    pub fn solve(mut self, limit: usize) -> Result<(SearchOutcome, Arena), CoreError> {
        loop {
            let Some(current) = self.open.pop() else {
                return Err(CoreError::no_feasible_cycle(self.source, self.target));
            };
            let key = (current.v, current.s.clone());
            if self.closed.contains(&key) {
                continue;
            }
            self.closed.insert(key);
            self.expanded_nodes += 1;
            if self.expanded_nodes > limit {
                return Err(CoreError::resource_exhausted(self.expanded_nodes, limit));
            }

            if current.v == self.target && current.s == self.tau {
                return Ok((
                    SearchOutcome {
                        goal_back: current.back,
                        expanded_nodes: self.expanded_nodes,
                    },
                    self.arena,
                ));
            }

            for &u in &self.adjacency[current.v] {
                let mut s_next = current.s.clone();
                s_next.xor_assign(&self.annotations.get(EdgeKey::new(current.v, u)));
                let next_key = (u, s_next.clone());
                if self.closed.contains(&next_key) {
                    continue;
                }
                let g_next = current.g + 1;
                let h_next = self.oracle.estimate(u, &s_next, &self.tau);
                let back = Some(self.arena.push(current.back, current.v, u));
                self.open.push(SearchNode {
                    v: u,
                    s: s_next,
                    g: g_next,
                    f: g_next + h_next,
                    back,
                });
            }
        }
    }
}
