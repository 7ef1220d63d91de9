//! Readers/writers for the documented cubical, distance-matrix, and
//! persistence/reduction binary formats (§6).
//!
//! Grounded in `original_source/DataReaders/DataReaderCubical.h` (cubical
//! header + payload) and `original_source/PersistenceIO.h` (`saveResults`'s
//! `dim, header[dim], payload` shape). Each format gets its own small
//! reader/writer struct or function rather than a shared trait: the header
//! shapes differ enough (cubical's `extent[dim]` vs the distance reader's
//! `num_points, dim_points`) that a forced common abstraction would be
//! artificial, matching how the original keeps them as independent reader
//! structs.

mod cubical_reader;
mod distance_reader;
mod writer;

pub use cubical_reader::{read_binary_cubical, read_text_cubical, CubicalGrid};
pub use distance_reader::{read_binary_distance_matrix, DistanceMatrix};
pub use writer::{write_persistence_pairs, write_reduction_columns};
