//! Annotation algebra: the sentinel-edge map and the routine that reads off
//! a cycle's target annotation and pivot endpoints.
//!
//! The annotation map is a partial function from canonical edges to
//! `BitSet(β)`; absent edges contribute zero. β is fixed for the lifetime of
//! one [`crate::search::a_star_optimal_cycle`] call.

mod compute;

pub use compute::{compute_edge_annotations, AnnotationMap, SearchRequest};
