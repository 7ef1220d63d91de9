//! Binary writer for persistence pairs and reduction columns, matching the
//! documented payload layout (§6, §4.9): `dim:u32, header[dim]:u32,
//! payload:u32[count]`, 1-indexed cell ids when the compatibility flag is
//! set, 0-indexed otherwise.
//!
//! Grounded in `original_source/PersistenceIO.h`'s `saveResults` (the
//! `dim, header, payload` triple) and `BinaryPersistentPairsSaver::saveReduction`
//! (one record per non-empty column: its size then its cell ids, `+1`
//! under the original's always-on coordinate compatibility bit). Unlike the
//! readers, writing never rejects already-validated in-memory data, so
//! these return `std::io::Result` rather than `CoreError`.

use std::io::{self, Write};

use crate::complex::{CellId, PersistencePair};

/// Sentinel written in place of a birth/death cell id for a class that
/// never dies within the filtration (`PersistencePair::death == None`).
pub const INFINITE_DEATH: u32 = u32::MAX;

fn write_payload<W: Write>(mut writer: W, header: &[u32], payload: &[u32]) -> io::Result<()> {
    writer.write_all(&(header.len() as u32).to_le_bytes())?;
    for h in header {
        writer.write_all(&h.to_le_bytes())?;
    }
    for p in payload {
        writer.write_all(&p.to_le_bytes())?;
    }
    Ok(())
}

fn encode_cell(cell: CellId, one_indexed: bool) -> u32 {
    cell as u32 + if one_indexed { 1 } else { 0 }
}

/// Write `dim=[pairs.len()]` followed by `birth, death` per pair (death is
/// [`INFINITE_DEATH`] for classes with no death index).
pub fn write_persistence_pairs<W: Write>(
    writer: W,
    pairs: &[PersistencePair],
    one_indexed: bool,
) -> io::Result<()> {
    let header = [pairs.len() as u32];
    let mut payload = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        payload.push(encode_cell(pair.birth, one_indexed));
        payload.push(match pair.death {
            Some(d) => encode_cell(d, one_indexed),
            None => INFINITE_DEATH,
        });
    }
    write_payload(writer, &header, &payload)
}

/// Write one record per non-empty reduction column: its size, then its
/// cell ids in ascending order. Empty columns are skipped, matching the
/// original's `assert(!final_red_list[j].empty())`.
pub fn write_reduction_columns<W: Write>(
    writer: W,
    columns: &[Vec<CellId>],
    one_indexed: bool,
) -> io::Result<()> {
    let nonempty: Vec<&Vec<CellId>> = columns.iter().filter(|c| !c.is_empty()).collect();
    let header = [nonempty.len() as u32];
    let mut payload = Vec::new();
    for column in &nonempty {
        payload.push(column.len() as u32);
        payload.extend(column.iter().map(|&c| encode_cell(c, one_indexed)));
    }
    write_payload(writer, &header, &payload)
}
