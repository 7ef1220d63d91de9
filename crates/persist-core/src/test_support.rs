//! Shared graph generator for the property tests in `search::proptests` and
//! `heuristic`: a ring (one guaranteed cycle) plus a caller-chosen number of
//! random chords (one extra independent cycle per chord), vertex ids fixed
//! small enough that brute-force baselines stay cheap.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::complex::VertexId;

pub(crate) const RING_SIZE: usize = 5;

/// Builds a ring `0-1-...-(RING_SIZE-1)-0` plus `chord_count` extra edges
/// chosen from the non-ring vertex pairs, then returns all edges in a
/// `seed`-shuffled order (this order becomes the caller's `CellId`
/// assignment, by position).
pub(crate) fn ring_with_chords(seed: u64, chord_count: usize) -> Vec<(VertexId, VertexId)> {
    let mut edges: Vec<(VertexId, VertexId)> =
        (0..RING_SIZE).map(|i| (i, (i + 1) % RING_SIZE)).collect();

    let mut candidates = Vec::new();
    for a in 0..RING_SIZE {
        for b in (a + 1)..RING_SIZE {
            if !edges.contains(&(a, b)) && !edges.contains(&(b, a)) {
                candidates.push((a, b));
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    candidates.shuffle(&mut rng);
    edges.extend(candidates.into_iter().take(chord_count));
    edges.shuffle(&mut rng);
    edges
}
