//! Standard persistence-matrix reduction (the "low" algorithm).
//!
//! Each column is a 1-chain over GF(2), represented as a sorted `Vec<CellId>`
//! (its nonzero rows). Reduction repeatedly XORs an earlier column sharing
//! the same `low` (its maximum `CellId`) into later ones, until every
//! nonempty column has a distinct low. The resulting lows are exactly the
//! birth/death pairs; unreduced-to-empty columns are the surviving cycles.

use super::cell::CellId;

/// A persistence pair: `birth` is the cell whose column reduced to a
/// distinct low (or, if the column was already empty, the birth of an
/// unpaired/infinite class); `death` is `None` for classes that never die.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersistencePair {
    pub birth: CellId,
    pub death: Option<CellId>,
}

/// The reduced boundary matrix: one GF(2) column (sorted ascending) per
/// cell, plus the `low` of each nonempty column.
pub struct BoundaryMatrix {
    pub columns: Vec<Vec<CellId>>,
    pub low: Vec<Option<CellId>>,
}

fn xor_sorted(a: &[CellId], b: &[CellId]) -> Vec<CellId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                // both present: cancels in GF(2)
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Reduce a boundary matrix given as one column per cell (cells ordered by
/// increasing `CellId`, i.e. filtration order). Returns the reduced columns,
/// the low array, and the persistence pairs.
pub fn reduce_boundary_matrix(mut columns: Vec<Vec<CellId>>) -> (BoundaryMatrix, Vec<PersistencePair>) {
    let n = columns.len();
    let mut low = vec![None; n];
    // low_to_column[l] = the column index whose current low is l.
    let mut low_to_column: std::collections::HashMap<CellId, usize> = std::collections::HashMap::new();
    let mut pairs = Vec::new();

    for col in 0..n {
        loop {
            let Some(&cur_low) = columns[col].last() else {
                break;
            };
            match low_to_column.get(&cur_low) {
                Some(&other) if other != col => {
                    columns[col] = xor_sorted(&columns[col], &columns[other]);
                }
                _ => break,
            }
        }
        if let Some(&cur_low) = columns[col].last() {
            low[col] = Some(cur_low);
            low_to_column.insert(cur_low, col);
            pairs.push(PersistencePair {
                birth: cur_low,
                death: Some(col),
            });
        }
    }

    // Columns that stayed empty and were never claimed as someone's low are
    // births of classes that never die within this filtration.
    let claimed: std::collections::HashSet<CellId> = low.iter().flatten().copied().collect();
    for col in 0..n {
        if columns[col].is_empty() && !claimed.contains(&col) {
            pairs.push(PersistencePair {
                birth: col,
                death: None,
            });
        }
    }

    (BoundaryMatrix { columns, low }, pairs)
}
