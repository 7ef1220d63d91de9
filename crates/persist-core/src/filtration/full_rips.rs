//! Full (flag) Vietoris-Rips complex built from a dense symmetric distance
//! matrix: every subset of points up to `max_dim + 1` is a simplex, filtered
//! by the maximum pairwise distance among its vertices.
//!
//! Grounded in `original_source/InputRunner.h`'s `InputRunnerFullRips<maxDim>`
//! (and its `static_for_InputRunnerFullRips` compile-time dispatch ladder,
//! replaced here by the runtime `max_dim` parameter per REDESIGN FLAGS).
//! "Full" distinguishes this from a thresholded Rips complex: there is no
//! distance cutoff, every clique up to `max_dim` is included and ordered by
//! filtration value.

use std::collections::HashMap;

use super::{check_dimension, Filtration};
use crate::complex::{Cell, CellId, VertexId};
use crate::errors::CoreError;

pub struct FullRipsFiltration {
    cells: Vec<Cell>,
    vertex_count: usize,
}

impl Filtration for FullRipsFiltration {
    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

struct RawSimplex {
    vertices: Vec<VertexId>,
    value: f64,
}

fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn go(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for v in start..n {
            current.push(v);
            go(v + 1, n, k, current, out);
            current.pop();
        }
    }
    go(0, n, k, &mut current, &mut out);
    out
}

fn max_pairwise_distance(vertices: &[VertexId], dist: &[Vec<f64>]) -> f64 {
    let mut m = 0.0f64;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            m = m.max(dist[vertices[i]][vertices[j]]);
        }
    }
    m
}

impl FullRipsFiltration {
    /// `dist` must be an `n x n` symmetric matrix with zero diagonal.
    /// `max_dim` is the highest simplex dimension to include (an edge is
    /// dimension 1, a triangle dimension 2, and so on).
    pub fn from_distance_matrix(dist: Vec<Vec<f64>>, max_dim: usize) -> Result<Self, CoreError> {
        check_dimension(max_dim)?;
        let n = dist.len();
        for (i, row) in dist.iter().enumerate() {
            if row.len() != n {
                return Err(CoreError::invalid("distance matrix must be square"));
            }
            if row[i] != 0.0 {
                return Err(CoreError::invalid("distance matrix diagonal must be zero"));
            }
        }
        for i in 0..n {
            for j in 0..n {
                if (dist[i][j] - dist[j][i]).abs() > f64::EPSILON {
                    return Err(CoreError::invalid("distance matrix must be symmetric"));
                }
            }
        }

        let mut raw = Vec::new();
        for k in 0..=max_dim {
            for subset in combinations(n, k + 1) {
                let vertices: Vec<VertexId> = subset;
                let value = max_pairwise_distance(&vertices, &dist);
                raw.push(RawSimplex { vertices, value });
            }
        }
        raw.sort_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap()
                .then(a.vertices.len().cmp(&b.vertices.len()))
                .then(a.vertices.cmp(&b.vertices))
        });

        let index: HashMap<Vec<VertexId>, CellId> = raw
            .iter()
            .enumerate()
            .map(|(id, s)| (s.vertices.clone(), id))
            .collect();

        let mut cells = Vec::with_capacity(raw.len());
        for s in &raw {
            match s.vertices.len() {
                1 => cells.push(Cell::vertex(s.value)),
                2 => {
                    let (a, b) = (s.vertices[0], s.vertices[1]);
                    cells.push(Cell::edge(s.value, index[&vec![a]], index[&vec![b]], a, b));
                }
                _ => {
                    let boundary: Vec<CellId> = (0..s.vertices.len())
                        .map(|omit| {
                            let face: Vec<VertexId> = s
                                .vertices
                                .iter()
                                .enumerate()
                                .filter(|&(i, _)| i != omit)
                                .map(|(_, &v)| v)
                                .collect();
                            index[&face]
                        })
                        .collect();
                    cells.push(Cell::higher(s.vertices.len() - 1, s.value, boundary));
                }
            }
        }

        Ok(Self { cells, vertex_count: n })
    }
}
