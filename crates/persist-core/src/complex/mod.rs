//! Cells, chains, and the boundary-matrix reduction that produces
//! persistence pairs and reduction columns.
//!
//! This module owns the data model shared by the filtration layer and the
//! optimal-cycle core: `CellId`/`VertexId` identifiers, `EdgeKey` canonical
//! edge identity, and the standard "low" reduction algorithm.

mod boundary;
mod cell;

pub use boundary::{reduce_boundary_matrix, BoundaryMatrix, PersistencePair};
pub use cell::{Cell, CellId, EdgeKey, VertexId};
