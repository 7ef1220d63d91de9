//! Per-coordinate covering graphs used to bound the heuristic oracle.
//!
//! `CoveringGraph` for coordinate `i` doubles the 1-skeleton into states
//! `(v, 0)` and `(v, 1)`: for every edge `{u,v}` with `annotation_i = 0` the
//! cover connects like sheets (`(u,0)-(v,0)`, `(u,1)-(v,1)`); for
//! `annotation_i = 1` it crosses sheets (`(u,0)-(v,1)`, `(u,1)-(v,0)`). A
//! shortest walk in the cover from `(v,0)` to `(t,b)` bounds the shortest
//! walk in the ambient graph from `v` to `t` that crosses an odd (`b=1`) or
//! even (`b=0`) number of bit-`i`-one edges.

use crate::annotation::AnnotationMap;
use crate::complex::{EdgeKey, VertexId};

/// Adjacency list over `2 * vertex_count` nodes: node `v` for sheet 0, node
/// `v + vertex_count` for sheet 1.
pub struct CoveringGraph {
    pub vertex_count: usize,
    pub adjacency: Vec<Vec<usize>>,
}

impl CoveringGraph {
    #[inline]
    pub fn node(&self, v: VertexId, sheet: u8) -> usize {
        if sheet == 0 {
            v
        } else {
            v + self.vertex_count
        }
    }
}

/// Build the covering graph for coordinate `i`, from all edges with
/// `CellId < pivot_cell` (the 1-skeleton below the class's birth index).
pub fn build_covering_graph(
    edges_below_pivot: &[(VertexId, VertexId)],
    annotations: &AnnotationMap,
    coordinate: usize,
    vertex_count: usize,
) -> CoveringGraph {
    let mut adjacency = vec![Vec::new(); 2 * vertex_count];
    for &(u, v) in edges_below_pivot {
        let bit = annotations.get(EdgeKey::new(u, v)).get(coordinate);
        let (u0, u1) = (u, u + vertex_count);
        let (v0, v1) = (v, v + vertex_count);
        if bit {
            adjacency[u0].push(v1);
            adjacency[v1].push(u0);
            adjacency[u1].push(v0);
            adjacency[v0].push(u1);
        } else {
            adjacency[u0].push(v0);
            adjacency[v0].push(u0);
            adjacency[u1].push(v1);
            adjacency[v1].push(u1);
        }
    }
    CoveringGraph {
        vertex_count,
        adjacency,
    }
}

/// Build one covering graph per annotation coordinate `0..beta`.
pub fn build_covering_graphs(
    edges_below_pivot: &[(VertexId, VertexId)],
    annotations: &AnnotationMap,
    beta: usize,
    vertex_count: usize,
) -> Vec<CoveringGraph> {
    (0..beta)
        .map(|i| build_covering_graph(edges_below_pivot, annotations, i, vertex_count))
        .collect()
}
