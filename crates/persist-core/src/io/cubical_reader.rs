//! Binary and text readers for the cubical grid header documented in §6:
//! `file_type:int32, dim:int32, extent[dim]:uint32, data:double[prod(extent)]`,
//! little-endian for the binary form; the text form mirrors the same fields
//! whitespace-separated.
//!
//! Grounded in `original_source/DataReaders/DataReaderCubical.h`'s
//! `RawDataReaderCubical`/`TextDataReaderCubical`. The original's
//! `source_mat` (`cv::Mat`) path is out of scope (§1); only the file-based
//! paths are implemented.

use std::io::Read;

use crate::errors::CoreError;

/// A parsed cubical grid: per-axis extents plus the flattened `f64` data,
/// ready for [`crate::filtration::CubicalFiltration::from_grid`].
#[derive(Clone, Debug, PartialEq)]
pub struct CubicalGrid {
    pub extents: Vec<usize>,
    pub data: Vec<f64>,
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes.try_into().expect("4-byte slice"))
}

fn read_i32_le(bytes: &[u8]) -> i32 {
    i32::from_le_bytes(bytes.try_into().expect("4-byte slice"))
}

fn read_f64_le(bytes: &[u8]) -> f64 {
    f64::from_le_bytes(bytes.try_into().expect("8-byte slice"))
}

/// Read the binary cubical header + payload from `reader`. `file_type` is
/// read and discarded (the caller already knows it is requesting a cubical
/// grid); a mismatched length between `extent` and `data` is `InvalidInput`.
pub fn read_binary_cubical<R: Read>(mut reader: R) -> Result<CubicalGrid, CoreError> {
    let mut buf4 = [0u8; 4];
    reader
        .read_exact(&mut buf4)
        .map_err(|e| CoreError::invalid(format!("reading file_type: {e}")))?;
    let _file_type = read_i32_le(&buf4);

    reader
        .read_exact(&mut buf4)
        .map_err(|e| CoreError::invalid(format!("reading dim: {e}")))?;
    let dim = read_i32_le(&buf4);
    if dim <= 0 {
        return Err(CoreError::invalid(format!("cubical dim must be positive, got {dim}")));
    }
    let dim = dim as usize;

    let mut extents = Vec::with_capacity(dim);
    for i in 0..dim {
        reader
            .read_exact(&mut buf4)
            .map_err(|e| CoreError::invalid(format!("reading extent[{i}]: {e}")))?;
        extents.push(read_u32_le(&buf4) as usize);
    }

    let total: usize = extents.iter().product();
    let mut data = Vec::with_capacity(total);
    let mut buf8 = [0u8; 8];
    for i in 0..total {
        reader
            .read_exact(&mut buf8)
            .map_err(|e| CoreError::invalid(format!("reading data[{i}]: {e}")))?;
        data.push(read_f64_le(&buf8));
    }

    Ok(CubicalGrid { extents, data })
}

/// Read the whitespace-separated textual mirror of the same header/payload.
pub fn read_text_cubical(text: &str) -> Result<CubicalGrid, CoreError> {
    let mut tokens = text.split_ascii_whitespace();
    let mut next_i64 = |what: &str| -> Result<i64, CoreError> {
        tokens
            .next()
            .ok_or_else(|| CoreError::invalid(format!("unexpected end of input reading {what}")))?
            .parse::<i64>()
            .map_err(|e| CoreError::invalid(format!("parsing {what}: {e}")))
    };

    let _file_type = next_i64("file_type")?;
    let dim = next_i64("dim")?;
    if dim <= 0 {
        return Err(CoreError::invalid(format!("cubical dim must be positive, got {dim}")));
    }
    let dim = dim as usize;

    let mut extents = Vec::with_capacity(dim);
    for i in 0..dim {
        extents.push(next_i64(&format!("extent[{i}]"))? as usize);
    }

    let total: usize = extents.iter().product();
    let mut data = Vec::with_capacity(total);
    for i in 0..total {
        let tok = tokens
            .next()
            .ok_or_else(|| CoreError::invalid(format!("unexpected end of input reading data[{i}]")))?;
        data.push(
            tok.parse::<f64>()
                .map_err(|e| CoreError::invalid(format!("parsing data[{i}]: {e}")))?,
        );
    }

    Ok(CubicalGrid { extents, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_binary(file_type: i32, extents: &[u32], data: &[f64]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&file_type.to_le_bytes());
        out.extend_from_slice(&(extents.len() as i32).to_le_bytes());
        for &e in extents {
            out.extend_from_slice(&e.to_le_bytes());
        }
        for &v in data {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out
    }

    #[test]
    fn binary_roundtrip_matches_text() {
        let bytes = encode_binary(0, &[2, 2], &[1.0, 2.0, 3.0, 4.0]);
        let grid = read_binary_cubical(&bytes[..]).unwrap();
        assert_eq!(grid.extents, vec![2, 2]);
        assert_eq!(grid.data, vec![1.0, 2.0, 3.0, 4.0]);

        let text_grid = read_text_cubical("0 2 2 2 1.0 2.0 3.0 4.0").unwrap();
        assert_eq!(grid, text_grid);
    }

    #[test]
    fn truncated_binary_input_is_invalid() {
        let bytes = encode_binary(0, &[2, 2], &[1.0, 2.0, 3.0]);
        assert!(read_binary_cubical(&bytes[..]).is_err());
    }
}
