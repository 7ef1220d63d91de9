//! Persistence-reduction driver (§4.7): runs the standard boundary-matrix
//! reduction over a whole [`Filtration`], then refines every above-threshold
//! one-dimensional class into its shortest representative cycle by calling
//! the optimal-cycle core once per class.
//!
//! Grounded in `original_source/PersistenceComputer.cpp`'s `run()` /
//! `runPersistenceHomology` driving loop, which reduces the full boundary
//! matrix once and then (when `Globals::use_optimal_alg` is set) replaces
//! each qualifying column with the A*-search result before writing output.

use std::collections::HashMap;

use crate::annotation::compute_edge_annotations;
use crate::complex::{reduce_boundary_matrix, CellId, PersistencePair, VertexId};
use crate::config::{AlgorithmSelector, ReductionConfig};
use crate::errors::CoreError;
use crate::filtration::Filtration;
use crate::search::a_star_optimal_cycle;

/// Output of one full reduction run.
pub struct ReductionResult {
    /// One birth/death pair per class that was born, across all dimensions.
    pub pairs: Vec<PersistencePair>,
    /// The reduced boundary column for every cell, in `CellId` order.
    /// One-dimensional classes whose persistence exceeded the configured
    /// threshold have their column replaced by the shortest representative
    /// cycle found by the optimal-cycle core.
    pub columns: Vec<Vec<CellId>>,
}

impl ReductionResult {
    /// Persistence (`death value - birth value`) of a pair, `None` for
    /// classes that never die.
    pub fn persistence(&self, pair: &PersistencePair, filtration: &(impl Filtration + ?Sized)) -> Option<f64> {
        let death = pair.death?;
        Some(filtration.cells()[death].filtration_value - filtration.cells()[pair.birth].filtration_value)
    }
}

/// Run the boundary-matrix reduction over `filtration` and substitute
/// shortest representative cycles for every one-dimensional class whose
/// persistence exceeds `config.persistence_threshold`.
///
/// Sentinel-edge annotations are computed once over the whole 1-skeleton
/// rather than per class: a non-tree edge's sentinel status only ever
/// depends on edges inserted before it (the standard incremental
/// spanning-forest argument), so reusing a single global annotation map
/// gives identical per-class results to recomputing it against the prefix
/// ending at each class's birth edge, without the repeated O(edges) cost.
pub fn run_reduction(
    filtration: &(impl Filtration + ?Sized),
    config: &ReductionConfig,
) -> Result<ReductionResult, CoreError> {
    if config.algorithm == AlgorithmSelector::Exhaustive {
        return Err(CoreError::invalid(
            "exhaustive search is a documented external collaborator, not part of this core; \
             select AlgorithmSelector::AStar",
        ));
    }

    let cells = filtration.cells();
    let boundary_columns: Vec<Vec<CellId>> = cells.iter().map(|c| c.boundary.clone()).collect();
    let (mut reduced, pairs) = reduce_boundary_matrix(boundary_columns);

    let edge_map = filtration.edge_index();
    let cell2v = |c: CellId| -> Option<(VertexId, VertexId)> { cells.get(c).and_then(|cell| cell.vertices) };
    let edges: Vec<(CellId, VertexId, VertexId)> = cells
        .iter()
        .enumerate()
        .filter_map(|(id, cell)| cell.vertices.map(|(a, b)| (id, a, b)))
        .collect();
    let annotations = compute_edge_annotations(&edges);

    // Stashed here and applied after the loop so substituting one class's
    // column never changes what a later class reads from `reduced.columns`.
    let mut substitutions: HashMap<CellId, Vec<CellId>> = HashMap::new();
    for pair in &pairs {
        if cells[pair.birth].dimension != 1 {
            continue;
        }
        let Some(death) = pair.death else { continue };
        let persistence = cells[death].filtration_value - cells[pair.birth].filtration_value;
        if persistence <= config.persistence_threshold {
            continue;
        }
        let input_cycle = &reduced.columns[death];
        if input_cycle.is_empty() {
            continue;
        }
        let (optimal, _expanded) = a_star_optimal_cycle(
            input_cycle,
            cell2v,
            &annotations,
            &edge_map,
            filtration.vertex_count(),
        )?;
        substitutions.insert(death, optimal);
    }

    for (cell, cycle) in substitutions {
        reduced.columns[cell] = cycle;
    }

    Ok(ReductionResult {
        pairs,
        columns: reduced.columns,
    })
}
