//! Reduction configuration, passed explicitly rather than read from globals.
//!
//! The original implementation this crate is modeled on reads `threshold`,
//! `max_dim`, `which_alg`, and `num_threads` off a process-wide `Globals`
//! struct. This crate carries the same knobs as an explicit record instead.

use serde::{Deserialize, Serialize};

/// Which cycle-search algorithm the driver should use for classes above
/// the persistence threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmSelector {
    /// The A* search over the (vertex, annotation) product space (this crate).
    AStar,
    /// Exhaustive enumeration; a documented external collaborator not
    /// implemented by this crate (see [`crate::errors::CoreError::InvalidInput`]).
    Exhaustive,
}

/// Explicit configuration for one run of the reduction driver.
///
/// `max_dim` and `num_threads` are accepted for parity with the original
/// CLI surface but are not consulted by the optimal-cycle core itself,
/// which is single-dimensional (β₁) and single-threaded by design.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ReductionConfig {
    /// Classes with persistence `<= persistence_threshold` are skipped.
    pub persistence_threshold: f64,
    /// Highest cell dimension the caller-side filtration dispatch considers.
    pub max_dim: usize,
    pub algorithm: AlgorithmSelector,
    /// Accepted for interface parity; the core does not spawn any threads.
    pub num_threads: usize,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            persistence_threshold: 0.0,
            max_dim: 1,
            algorithm: AlgorithmSelector::AStar,
            num_threads: 1,
        }
    }
}
