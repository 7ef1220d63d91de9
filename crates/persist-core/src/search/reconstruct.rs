//! Cycle reconstruction (§4.6): turn a goal node's back-pointer chain plus
//! the pivot edge into the canonical, `CellId`-sorted output cycle.

use std::collections::HashMap;

use crate::complex::{CellId, EdgeKey, VertexId};
use crate::errors::CoreError;

use super::types::Arena;

pub fn reconstruct_cycle(
    arena: &Arena,
    goal_back: Option<usize>,
    edge_map: &HashMap<EdgeKey, CellId>,
    pivot_cell: CellId,
) -> Result<Vec<CellId>, CoreError> {
    let mut cycle = Vec::new();
    for (a, b) in arena.path_from(goal_back) {
        let key = EdgeKey::new(a, b);
        let cell = edge_map
            .get(&key)
            .ok_or_else(|| CoreError::invalid(format!("traversed edge {a}-{b} missing from edge_map")))?;
        cycle.push(*cell);
    }
    cycle.push(pivot_cell);
    cycle.sort_unstable();
    Ok(cycle)
}

/// True iff every vertex touched by `cycle`'s edges appears an even number
/// of times — the cycle-ness property from §8.
pub fn is_cycle(cycle: &[CellId], cell2v: impl Fn(CellId) -> Option<(VertexId, VertexId)>) -> bool {
    let mut parity: HashMap<VertexId, u32> = HashMap::new();
    for &cell in cycle {
        let Some((a, b)) = cell2v(cell) else {
            return false;
        };
        *parity.entry(a).or_insert(0) += 1;
        *parity.entry(b).or_insert(0) += 1;
    }
    parity.values().all(|&count| count % 2 == 0)
}
