//! Error taxonomy for the optimal-cycle core and its surrounding driver.
//!
//! Mirrors the three-kind taxonomy from the spec: bad input is rejected
//! fast, an exhausted search is a distinct (expected, recoverable) outcome
//! from a malformed request, and resource limits get their own variant so
//! callers can tell "no cycle exists" apart from "we gave up looking".

use std::fmt;

/// Errors surfaced by [`crate::search::a_star_optimal_cycle`] and the
/// reduction driver built on top of it.
#[derive(Debug)]
pub enum CoreError {
    /// The request itself is malformed: empty cycle, mismatched annotation
    /// widths, a pivot edge absent from `edge_map`, or similar.
    InvalidInput { reason: String },
    /// The open set emptied before the target state was reached; the class
    /// is unrepresentable under the given pivot.
    NoFeasibleCycle { source: usize, target: usize },
    /// An implementation-defined expansion or memory limit was hit first.
    ResourceExhausted { expanded_nodes: usize, limit: usize },
}

impl CoreError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn no_feasible_cycle(source: usize, target: usize) -> Self {
        Self::NoFeasibleCycle { source, target }
    }

    pub(crate) fn resource_exhausted(expanded_nodes: usize, limit: usize) -> Self {
        Self::ResourceExhausted {
            expanded_nodes,
            limit,
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::NoFeasibleCycle { source, target } => write!(
                f,
                "no feasible cycle from vertex {source} to vertex {target} under the required annotation"
            ),
            Self::ResourceExhausted {
                expanded_nodes,
                limit,
            } => write!(
                f,
                "search exhausted resource limit after expanding {expanded_nodes} nodes (limit {limit})"
            ),
        }
    }
}

impl std::error::Error for CoreError {}
