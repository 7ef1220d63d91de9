//! General simplicial complex built from an explicit list of simplices, each
//! with its own caller-supplied filtration value (unlike `CubicalFiltration`
//! and `FullRipsFiltration`, whose values are derived from grid/distance
//! data). Grounded in `original_source/InputRunner.h`'s `InputRunnerSimComplex<dim>`
//! path, which reads raw point/simplex data with no derived-value step.
//!
//! The complex must be closed under taking faces: every proper face of a
//! given simplex must itself appear in the input list, mirroring the
//! well-formedness the original assumes of its simplex input rather than
//! enforces.

use std::collections::HashMap;

use super::{check_dimension, Filtration};
use crate::complex::{Cell, CellId, VertexId};
use crate::errors::CoreError;

pub struct SimplicialFiltration {
    cells: Vec<Cell>,
    vertex_count: usize,
}

impl Filtration for SimplicialFiltration {
    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl SimplicialFiltration {
    /// `simplices` is `(vertices, filtration_value)` for every simplex,
    /// including every vertex (dimension 0) the complex uses; vertex order
    /// within a simplex does not matter, it is canonicalized internally.
    pub fn from_simplices(simplices: Vec<(Vec<VertexId>, f64)>) -> Result<Self, CoreError> {
        let mut canonical: Vec<(Vec<VertexId>, f64)> = simplices
            .into_iter()
            .map(|(mut verts, value)| {
                verts.sort_unstable();
                verts.dedup();
                (verts, value)
            })
            .collect();

        let max_dim = canonical
            .iter()
            .map(|(v, _)| v.len().saturating_sub(1))
            .max()
            .unwrap_or(0);
        check_dimension(max_dim)?;

        let vertex_count = canonical
            .iter()
            .flat_map(|(v, _)| v.iter().copied())
            .max()
            .map(|m| m + 1)
            .unwrap_or(0);

        canonical.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap()
                .then(a.0.len().cmp(&b.0.len()))
                .then(a.0.cmp(&b.0))
        });

        let index: HashMap<Vec<VertexId>, CellId> = canonical
            .iter()
            .enumerate()
            .map(|(id, (verts, _))| (verts.clone(), id))
            .collect();

        let mut cells = Vec::with_capacity(canonical.len());
        for (verts, value) in &canonical {
            match verts.len() {
                0 => return Err(CoreError::invalid("simplex with no vertices")),
                1 => cells.push(Cell::vertex(*value)),
                2 => {
                    let (a, b) = (verts[0], verts[1]);
                    let vcell_a = *index
                        .get(&vec![a])
                        .ok_or_else(|| CoreError::invalid(format!("edge {{{a},{b}}} missing vertex face {a}")))?;
                    let vcell_b = *index
                        .get(&vec![b])
                        .ok_or_else(|| CoreError::invalid(format!("edge {{{a},{b}}} missing vertex face {b}")))?;
                    cells.push(Cell::edge(*value, vcell_a, vcell_b, a, b));
                }
                _ => {
                    let mut boundary = Vec::with_capacity(verts.len());
                    for omit in 0..verts.len() {
                        let face: Vec<VertexId> = verts
                            .iter()
                            .enumerate()
                            .filter(|&(i, _)| i != omit)
                            .map(|(_, &v)| v)
                            .collect();
                        let face_id = index.get(&face).ok_or_else(|| {
                            CoreError::invalid(format!("simplex {verts:?} is missing face {face:?}"))
                        })?;
                        boundary.push(*face_id);
                    }
                    boundary.sort_unstable();
                    cells.push(Cell::higher(verts.len() - 1, *value, boundary));
                }
            }
        }

        Ok(Self { cells, vertex_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_with_explicit_faces_builds_cleanly() {
        let simplices = vec![
            (vec![0], 0.0),
            (vec![1], 0.0),
            (vec![2], 0.0),
            (vec![0, 1], 1.0),
            (vec![1, 2], 1.0),
            (vec![0, 2], 1.0),
            (vec![0, 1, 2], 2.0),
        ];
        let f = SimplicialFiltration::from_simplices(simplices).unwrap();
        assert_eq!(f.vertex_count(), 3);
        assert_eq!(f.cells().len(), 7);
        for (id, cell) in f.cells().iter().enumerate() {
            for &face in &cell.boundary {
                assert!(face < id);
            }
        }
    }

    #[test]
    fn missing_face_is_rejected() {
        let simplices = vec![(vec![0], 0.0), (vec![1], 0.0), (vec![0, 1, 2], 1.0)];
        let err = SimplicialFiltration::from_simplices(simplices).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
    }
}
