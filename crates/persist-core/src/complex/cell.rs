//! Identifiers and cell records shared across the filtration layer.

/// Index of a 0-cell (vertex), `< N` for a complex with `N` vertices.
pub type VertexId = usize;

/// Index of a cell in filtration order. Edges additionally resolve to their
/// two endpoint `VertexId`s via [`Cell::vertices`] / the driver's `cell2v`
/// lookup table.
pub type CellId = usize;

/// Canonical identity of an edge: an unordered endpoint pair stored with
/// `a < b`. Two edges with the same endpoints always share an `EdgeKey`
/// regardless of which order they were discovered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(pub VertexId, pub VertexId);

impl EdgeKey {
    /// Build the canonical key for an edge with given endpoints, sorting
    /// them so construction order never matters.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }
}

/// A cell of the complex: its filtration value and the `CellId`s of its
/// boundary faces (one dimension down), kept sorted ascending.
///
/// For dimension-1 cells (edges) `boundary` holds exactly the two endpoint
/// `CellId`s of their 0-cells; vertex endpoints in `VertexId` space are
/// additionally available via [`Cell::vertices`] for edges.
#[derive(Clone, Debug)]
pub struct Cell {
    pub dimension: usize,
    pub filtration_value: f64,
    pub boundary: Vec<CellId>,
    /// For dimension-1 cells only: the two `VertexId` endpoints.
    pub vertices: Option<(VertexId, VertexId)>,
}

impl Cell {
    pub fn vertex(filtration_value: f64) -> Self {
        Self {
            dimension: 0,
            filtration_value,
            boundary: Vec::new(),
            vertices: None,
        }
    }

    /// `vcell_a`/`vcell_b` are the `CellId`s of the two endpoint 0-cells;
    /// `a`/`b` are their `VertexId`s (possibly different numbering).
    pub fn edge(filtration_value: f64, vcell_a: CellId, vcell_b: CellId, a: VertexId, b: VertexId) -> Self {
        let key = EdgeKey::new(a, b);
        let boundary = if vcell_a <= vcell_b {
            vec![vcell_a, vcell_b]
        } else {
            vec![vcell_b, vcell_a]
        };
        Self {
            dimension: 1,
            filtration_value,
            boundary,
            vertices: Some((key.0, key.1)),
        }
    }

    pub fn higher(dimension: usize, filtration_value: f64, boundary: Vec<CellId>) -> Self {
        debug_assert!(dimension >= 2);
        Self {
            dimension,
            filtration_value,
            boundary,
            vertices: None,
        }
    }
}
