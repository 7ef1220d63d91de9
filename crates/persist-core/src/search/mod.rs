//! Optimal-cycle search (§4.2–§4.6): wires the annotation map, the covering
//! graphs, the heuristic oracle and the A* engine into the single entry
//! point the reduction driver calls per above-threshold homology class.

mod engine;
mod queue;
mod reconstruct;
#[cfg(test)]
mod proptests;
mod types;

use std::collections::HashMap;

use crate::annotation::{prepare_search_request, AnnotationMap};
use crate::complex::{CellId, EdgeKey, VertexId};
use crate::covering::build_covering_graphs;
use crate::errors::CoreError;
use crate::heuristic::HeuristicOracle;

use engine::AStarRunner;
pub use reconstruct::is_cycle;
use reconstruct::reconstruct_cycle;

/// An implementation-defined cap on node expansions (§6,
/// `ResourceExhausted`): the product space has at most
/// `vertex_count * 2^width` reachable states, so no correct search ever
/// needs to expand more nodes than that; this also protects against
/// pathological inputs with a very large annotation width.
fn expansion_limit(vertex_count: usize, width: usize) -> usize {
    let states = (vertex_count as u64).saturating_mul(1u64.checked_shl(width as u32).unwrap_or(u64::MAX));
    states.min(10_000_000) as usize
}

/// Finds the minimum-length representative cycle of the homology class
/// closed by `input_cycle`'s pivot edge (its last element), per §4.2–§4.6.
///
/// `cell2v` resolves an edge `CellId` to its `VertexId` endpoints; it must
/// return `Some` for every cell that appears as an edge in `input_cycle` or
/// in `edge_map`. `edge_map` is the canonical-endpoint-pair index over every
/// edge cell of the complex; the 1-skeleton the search runs over is derived
/// from it by keeping only cells with `CellId` strictly below the pivot's.
///
/// Returns the cycle together with the number of A* node expansions it took,
/// exposed for callers that report search cost (the CLI's `bench`
/// subcommand, the heuristic-tightening property test, §8 scenario 5).
pub fn a_star_optimal_cycle(
    input_cycle: &[CellId],
    cell2v: impl Fn(CellId) -> Option<(VertexId, VertexId)> + Copy,
    edge_annotations: &AnnotationMap,
    edge_map: &HashMap<EdgeKey, CellId>,
    vertex_count: usize,
) -> Result<(Vec<CellId>, usize), CoreError> {
    let request = prepare_search_request(input_cycle, cell2v, edge_annotations)?;

    let pivot_key = EdgeKey::new(request.source, request.target);
    if edge_map.get(&pivot_key) != Some(&request.pivot_cell) {
        return Err(CoreError::invalid(format!(
            "pivot edge {}-{} not found in edge_map",
            request.source, request.target
        )));
    }

    let edges_below_pivot: Vec<(VertexId, VertexId)> = edge_map
        .iter()
        .filter(|&(_, &cell)| cell < request.pivot_cell)
        .map(|(k, _)| (k.0, k.1))
        .collect();
    let mut adjacency = vec![Vec::new(); vertex_count];
    for &(a, b) in &edges_below_pivot {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }

    let width = edge_annotations.width();
    let graphs = build_covering_graphs(&edges_below_pivot, edge_annotations, width, vertex_count);
    let oracle = HeuristicOracle::new(&graphs, request.target);

    let runner = AStarRunner::new(
        &adjacency,
        edge_annotations,
        oracle,
        request.source,
        request.target,
        request.target_annotation,
    );
    let limit = expansion_limit(vertex_count, width);
    let (outcome, arena) = runner.solve(limit)?;

    let cycle = reconstruct_cycle(&arena, outcome.goal_back, edge_map, request.pivot_cell)?;
    Ok((cycle, outcome.expanded_nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::compute_edge_annotations;

    fn edge_fixture() -> (Vec<(CellId, VertexId, VertexId)>, HashMap<EdgeKey, CellId>) {
        // Square 0-1-2-3-0 plus a diagonal 0-2, cells 0..=4 in that order.
        let edges = vec![(0, 0, 1), (1, 1, 2), (2, 2, 3), (3, 0, 3), (4, 0, 2)];
        let map = edges.iter().map(|&(c, a, b)| (EdgeKey::new(a, b), c)).collect();
        (edges, map)
    }

    #[test]
    fn finds_a_two_edge_triangle_as_optimal_representative() {
        let (edges, edge_map) = edge_fixture();
        let annotations = compute_edge_annotations(&edges);
        let cell2v = |c: CellId| -> Option<(VertexId, VertexId)> {
            edges.iter().find(|e| e.0 == c).map(|&(_, a, b)| (a, b))
        };
        // Input cycle goes the long way around (0-1-2-3-0's closing edge
        // stands in as a stale representative); pivot is edge 4 (the
        // diagonal 0-2), so the optimal representative should be the
        // 2-edge path through the diagonal's own triangle half: {0,4}.
        let input_cycle = vec![0, 1, 2, 3, 4];
        let (result, expanded) = a_star_optimal_cycle(&input_cycle, cell2v, &annotations, &edge_map, 4).unwrap();
        assert!(is_cycle(&result, cell2v));
        // shortest path from vertex 0 to vertex 2 around the square is 2
        // hops either way, plus the pivot diagonal: 3 edges total.
        assert_eq!(result.len(), 3);
        assert!(result.contains(&4));
        assert!(expanded > 0);
    }

    #[test]
    fn unreachable_target_reports_no_feasible_cycle() {
        // Two disjoint triangles; a pivot edge requested between them has no
        // path in the below-pivot 1-skeleton at all.
        let edges = vec![
            (0, 0, 1),
            (1, 1, 2),
            (2, 0, 2),
            (3, 3, 4),
            (4, 4, 5),
            (5, 3, 5),
            (6, 2, 3), // pivot: bridges the two components, cell id 6
        ];
        let annotations = compute_edge_annotations(&edges);
        let cell2v = |c: CellId| -> Option<(VertexId, VertexId)> {
            edges.iter().find(|e| e.0 == c).map(|&(_, a, b)| (a, b))
        };
        let edge_map: HashMap<EdgeKey, CellId> =
            edges.iter().map(|&(c, a, b)| (EdgeKey::new(a, b), c)).collect();
        let input_cycle = vec![6];
        let result = a_star_optimal_cycle(&input_cycle, cell2v, &annotations, &edge_map, 6);
        assert!(matches!(result, Err(CoreError::NoFeasibleCycle { .. })));
    }
}
