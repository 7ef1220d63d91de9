//! Reader for the dense-distance-matrix header (§6, `file_type == 1`):
//! `file_type:int32, num_points:int32, dim_points:int32` followed by the
//! flattened `num_points x num_points` distance matrix.
//!
//! `dim_points` (the ambient embedding dimension the points were computed
//! in) is read and kept only as metadata; reconstructing the matrix only
//! needs `num_points`. Grounded in the header layout `original_source/InputRunner.h`
//! documents for its `DENSE_DISTANCE_MATRIX` file type, feeding
//! `InputRunnerFullRips`.

use std::io::Read;

use crate::errors::CoreError;

/// A parsed dense distance matrix, ready for
/// [`crate::filtration::FullRipsFiltration::from_distance_matrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    pub num_points: usize,
    pub dim_points: usize,
    pub rows: Vec<Vec<f64>>,
}

fn read_i32_le(bytes: &[u8]) -> i32 {
    i32::from_le_bytes(bytes.try_into().expect("4-byte slice"))
}

fn read_f64_le(bytes: &[u8]) -> f64 {
    f64::from_le_bytes(bytes.try_into().expect("8-byte slice"))
}

pub fn read_binary_distance_matrix<R: Read>(mut reader: R) -> Result<DistanceMatrix, CoreError> {
    let mut buf4 = [0u8; 4];
    reader
        .read_exact(&mut buf4)
        .map_err(|e| CoreError::invalid(format!("reading file_type: {e}")))?;
    let _file_type = read_i32_le(&buf4);

    reader
        .read_exact(&mut buf4)
        .map_err(|e| CoreError::invalid(format!("reading num_points: {e}")))?;
    let num_points = read_i32_le(&buf4);
    if num_points < 0 {
        return Err(CoreError::invalid("num_points must be non-negative"));
    }
    let num_points = num_points as usize;

    reader
        .read_exact(&mut buf4)
        .map_err(|e| CoreError::invalid(format!("reading dim_points: {e}")))?;
    let dim_points = read_i32_le(&buf4);
    if dim_points < 0 {
        return Err(CoreError::invalid("dim_points must be non-negative"));
    }
    let dim_points = dim_points as usize;

    let mut buf8 = [0u8; 8];
    let mut rows = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let mut row = Vec::with_capacity(num_points);
        for j in 0..num_points {
            reader
                .read_exact(&mut buf8)
                .map_err(|e| CoreError::invalid(format!("reading dist[{i}][{j}]: {e}")))?;
            row.push(read_f64_le(&buf8));
        }
        rows.push(row);
    }

    Ok(DistanceMatrix {
        num_points,
        dim_points,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_small_symmetric_matrix() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1i32.to_le_bytes());
        bytes.extend_from_slice(&2i32.to_le_bytes());
        bytes.extend_from_slice(&3i32.to_le_bytes());
        for v in [0.0, 1.0, 1.0, 0.0] {
            bytes.extend_from_slice(&(v as f64).to_le_bytes());
        }
        let m = read_binary_distance_matrix(&bytes[..]).unwrap();
        assert_eq!(m.num_points, 2);
        assert_eq!(m.dim_points, 3);
        assert_eq!(m.rows, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    }
}
