//! Admissible heuristic oracle for the A* search.
//!
//! For each annotation coordinate `i`, a single resumable breadth-first
//! search rooted at `(target, 0)` in that coordinate's covering graph
//! answers both parities: by the sheet-swap symmetry of the cover, the
//! distance from `(target, 0)` to `(v, 0)` equals the distance from `(v, 0)`
//! to `(target, 0)`, and the distance from `(target, 0)` to `(v, 1)` equals
//! the distance from `(v, 0)` to `(target, 1)`. One root per coordinate is
//! therefore enough, and it is shared and resumed across every heuristic
//! query in the search rather than restarted.

use std::collections::{HashMap, VecDeque};

use crate::bitset::BitSet;
use crate::complex::VertexId;
use crate::covering::CoveringGraph;

/// Sentinel meaning "no path in this coordinate's covering graph": treated
/// as an admissible lower bound of effectively infinite length.
const UNREACHABLE: u32 = u32::MAX;

struct ResumableBfs {
    dist: Vec<Option<u32>>,
    frontier: VecDeque<usize>,
}

impl ResumableBfs {
    fn rooted_at(root: usize, node_count: usize) -> Self {
        let mut dist = vec![None; node_count];
        dist[root] = Some(0);
        let mut frontier = VecDeque::new();
        frontier.push_back(root);
        Self { dist, frontier }
    }

    /// Distance from the root to `want`, continuing the BFS as far as
    /// needed (and no further) to resolve it.
    fn distance_to(&mut self, adjacency: &[Vec<usize>], want: usize) -> u32 {
        if let Some(d) = self.dist[want] {
            return d;
        }
        while let Some(u) = self.frontier.pop_front() {
            let du = self.dist[u].expect("frontier nodes are always discovered");
            for &nb in &adjacency[u] {
                if self.dist[nb].is_none() {
                    self.dist[nb] = Some(du + 1);
                    self.frontier.push_back(nb);
                }
            }
            if let Some(d) = self.dist[want] {
                return d;
            }
        }
        UNREACHABLE
    }
}

/// Computes admissible lower bounds for the remaining path length from a
/// search state `(v, s)` to `(target, target_annotation)`, memoizing both
/// the per-coordinate BFS frontiers and the combined `(v, s) -> h` results.
pub struct HeuristicOracle<'a> {
    graphs: &'a [CoveringGraph],
    target: VertexId,
    per_coordinate: Vec<ResumableBfs>,
    memo: HashMap<(VertexId, BitSet), u32>,
}

impl<'a> HeuristicOracle<'a> {
    pub fn new(graphs: &'a [CoveringGraph], target: VertexId) -> Self {
        let per_coordinate = graphs
            .iter()
            .map(|g| ResumableBfs::rooted_at(g.node(target, 0), 2 * g.vertex_count))
            .collect();
        Self {
            graphs,
            target,
            per_coordinate,
            memo: HashMap::new(),
        }
    }

    /// `h((v, s), (target, tau))`: the max over coordinates of the exact
    /// covering-graph distance bounding that coordinate's contribution.
    pub fn estimate(&mut self, v: VertexId, s: &BitSet, tau: &BitSet) -> u32 {
        if let Some(&cached) = self.memo.get(&(v, s.clone())) {
            return cached;
        }
        let delta = s.xor(tau);
        let mut best = 0u32;
        for (i, bfs) in self.per_coordinate.iter_mut().enumerate() {
            let bit = delta.get(i);
            let want = self.graphs[i].node(v, if bit { 1 } else { 0 });
            let d = bfs.distance_to(&self.graphs[i].adjacency, want);
            best = best.max(d);
        }
        self.memo.insert((v, s.clone()), best);
        best
    }

    pub fn target(&self) -> VertexId {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::compute_edge_annotations;
    use crate::complex::CellId;
    use crate::covering::build_covering_graphs;
    use proptest::prelude::*;

    #[test]
    fn heuristic_is_zero_at_goal() {
        let edges = vec![(0, 0, 1), (1, 1, 2), (2, 0, 2)];
        let map = compute_edge_annotations(&edges);
        let pairs: Vec<(VertexId, VertexId)> = edges.iter().map(|&(_, a, b)| (a, b)).collect();
        let graphs = build_covering_graphs(&pairs, &map, map.width(), 3);
        let tau = BitSet::zero(map.width());
        let mut oracle = HeuristicOracle::new(&graphs, 2);
        let h = oracle.estimate(2, &tau, &tau);
        assert_eq!(h, 0);
    }

    #[test]
    fn heuristic_is_bounded_by_hop_distance_for_zero_delta() {
        // path 0-1-2-3, no cycle: single coordinate is vacuous since beta=0
        // is disallowed, so use a triangle with a pendant vertex 3-0 to get
        // at least one sentinel while keeping a simple hop check on vertex 3.
        let edges = vec![(0, 0, 1), (1, 1, 2), (2, 0, 2), (3, 0, 3)];
        let map = compute_edge_annotations(&edges);
        let pairs: Vec<(VertexId, VertexId)> = edges.iter().map(|&(_, a, b)| (a, b)).collect();
        let graphs = build_covering_graphs(&pairs, &map, map.width(), 4);
        let tau = BitSet::zero(map.width());
        let mut oracle = HeuristicOracle::new(&graphs, 3);
        // from vertex 0 to target 3 with zero delta the true shortest hop
        // distance is 1 (edge 0-3); heuristic must not exceed it.
        let h = oracle.estimate(0, &tau, &tau);
        assert!(h <= 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// The heuristic must never overestimate the true shortest distance
        /// in the full `(vertex, annotation)` product space it is bounding;
        /// the true distance is computed here by an independent BFS over
        /// that product space directly, not by reusing any search-engine
        /// code.
        #[test]
        fn heuristic_never_overestimates_true_product_distance(seed in any::<u64>(), chord_count in 0usize..=3) {
            let pairs = crate::test_support::ring_with_chords(seed, chord_count);
            let edges: Vec<(CellId, VertexId, VertexId)> =
                pairs.iter().enumerate().map(|(id, &(a, b))| (id, a, b)).collect();
            let map = compute_edge_annotations(&edges);
            let width = map.width();
            let graphs = build_covering_graphs(&pairs, &map, width, crate::test_support::RING_SIZE);

            let target = crate::test_support::RING_SIZE - 1;
            let tau = BitSet::zero(width);
            let mut oracle = HeuristicOracle::new(&graphs, target);

            let below: Vec<(VertexId, VertexId, BitSet)> = edges
                .iter()
                .map(|&(_, a, b)| (a, b, map.get(crate::complex::EdgeKey::new(a, b))))
                .collect();

            for v in 0..crate::test_support::RING_SIZE {
                let s = BitSet::zero(width);
                let h = oracle.estimate(v, &s, &tau);
                let true_dist = product_space_bfs(&below, crate::test_support::RING_SIZE, width, v, &s, target, &tau);
                if let Some(d) = true_dist {
                    prop_assert!(h as usize <= d);
                }
            }
        }
    }

    /// Exact BFS over the `(VertexId, BitSet)` product space, independent of
    /// the A* engine, used only to check the heuristic's admissibility.
    fn product_space_bfs(
        edges: &[(VertexId, VertexId, BitSet)],
        vertex_count: usize,
        width: usize,
        source_v: VertexId,
        source_s: &BitSet,
        target_v: VertexId,
        target_s: &BitSet,
    ) -> Option<usize> {
        use std::collections::VecDeque;

        let mut dist: HashMap<(VertexId, BitSet), usize> = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert((source_v, source_s.clone()), 0);
        queue.push_back((source_v, source_s.clone()));
        while let Some((v, s)) = queue.pop_front() {
            let d = dist[&(v, s.clone())];
            if v == target_v && s == *target_s {
                return Some(d);
            }
            for &(a, b, ref annotation) in edges {
                let (from, to) = if a == v {
                    (a, b)
                } else if b == v {
                    (b, a)
                } else {
                    continue;
                };
                let _ = from;
                let mut next_s = s.clone();
                next_s.xor_assign(annotation);
                let key = (to, next_s.clone());
                if !dist.contains_key(&key) {
                    dist.insert(key.clone(), d + 1);
                    queue.push_back(key);
                }
            }
        }
        let _ = width;
        None
    }
}
