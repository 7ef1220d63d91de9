//! Sentinel-edge annotation map and cycle-annotation bookkeeping.

use std::collections::HashMap;

use crate::bitset::BitSet;
use crate::complex::{reduce_boundary_matrix, CellId, EdgeKey, VertexId};
use crate::errors::CoreError;

/// Partial map from canonical edges to their annotation bitset. Edges not
/// present are sentinel-free and contribute the zero bitset.
#[derive(Clone, Debug)]
pub struct AnnotationMap {
    width: usize,
    sentinels: HashMap<EdgeKey, BitSet>,
}

impl AnnotationMap {
    pub fn width(&self) -> usize {
        self.width
    }

    /// Annotation of the given edge; the zero bitset if it is not a sentinel.
    pub fn get(&self, key: EdgeKey) -> BitSet {
        self.sentinels
            .get(&key)
            .cloned()
            .unwrap_or_else(|| BitSet::zero(self.width))
    }

    pub fn is_sentinel(&self, key: EdgeKey) -> bool {
        self.sentinels.contains_key(&key)
    }

    pub fn sentinel_count(&self) -> usize {
        self.sentinels.len()
    }
}

/// Compute the annotation map for the 1-skeleton consisting of `edges`, in
/// filtration order, each given as `(cell_id, endpoint_a, endpoint_b)`.
///
/// Sentinel edges are the ones whose column in the GF(2) reduction of the
/// 0-dimensional boundary matrix (rows = `VertexId`, columns = edges in
/// filtration order) reduces to empty and is never claimed as another
/// column's low: exactly the non-spanning-tree edges, i.e. a basis of the
/// cycle space. Assigning the `i`-th such edge the `i`-th unit bitset gives
/// a valid annotation: XORing along any cycle reproduces its coordinates in
/// that basis, and it is zero iff the cycle is null-homologous.
pub fn compute_edge_annotations(edges: &[(CellId, VertexId, VertexId)]) -> AnnotationMap {
    let columns: Vec<Vec<VertexId>> = edges
        .iter()
        .map(|&(_, a, b)| {
            let mut v = vec![a, b];
            v.sort_unstable();
            v
        })
        .collect();
    let (_reduced, pairs) = reduce_boundary_matrix(columns);

    let mut sentinel_positions: Vec<usize> = pairs
        .iter()
        .filter(|p| p.death.is_none())
        .map(|p| p.birth)
        .collect();
    sentinel_positions.sort_unstable();

    let width = sentinel_positions.len().max(1);
    let mut sentinels = HashMap::with_capacity(sentinel_positions.len());
    for (coord, &pos) in sentinel_positions.iter().enumerate() {
        let (_, a, b) = edges[pos];
        let mut bits = BitSet::zero(width);
        bits.set(coord, true);
        sentinels.insert(EdgeKey::new(a, b), bits);
    }
    AnnotationMap { width, sentinels }
}

/// Everything the A* engine needs about the class under search: the target
/// annotation to reach (already adjusted to exclude the pivot's own
/// contribution), the pivot's sorted endpoints, and the pivot's `CellId`.
pub struct SearchRequest {
    pub source: VertexId,
    pub target: VertexId,
    pub target_annotation: BitSet,
    pub pivot_cell: CellId,
}

/// Implements §4.2 steps 1-3: fold the input cycle's annotation, then
/// adjust for the pivot edge so the A* search looks for a path whose sum
/// the pivot edge closes into the original class.
pub fn prepare_search_request(
    input_cycle: &[CellId],
    cell2v: impl Fn(CellId) -> Option<(VertexId, VertexId)>,
    annotations: &AnnotationMap,
) -> Result<SearchRequest, CoreError> {
    let Some(&pivot_cell) = input_cycle.last() else {
        return Err(CoreError::invalid("input cycle is empty"));
    };
    let width = annotations.width();
    let mut target_annotation = BitSet::zero(width);
    for &cell in input_cycle {
        let (a, b) = cell2v(cell)
            .ok_or_else(|| CoreError::invalid(format!("cell {cell} is not an edge with known endpoints")))?;
        target_annotation.xor_assign(&annotations.get(EdgeKey::new(a, b)));
    }

    let (p0, p1) = cell2v(pivot_cell)
        .ok_or_else(|| CoreError::invalid(format!("pivot cell {pivot_cell} is not an edge")))?;
    let (source, target) = if p0 <= p1 { (p0, p1) } else { (p1, p0) };
    let pivot_key = EdgeKey::new(source, target);
    if annotations.is_sentinel(pivot_key) {
        target_annotation.xor_assign(&annotations.get(pivot_key));
    }

    Ok(SearchRequest {
        source,
        target,
        target_annotation,
        pivot_cell,
    })
}
