//! Binary archive layout for persisted artifacts
//!
//! Little-endian framing: a magic/version header, the chroma policy tag and
//! trimmed dimensions, then the per-channel arrays (CSR triples for packed
//! channels, raw samples for dense ones).

use crate::artifact::{Artifact, ChromaChannels};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use dctpack_core::{PackError, PackResult, Plane};
use dctpack_sparse::CsrMatrix;
use std::io::{Read, Write};

/// Archive signature
pub const ARCHIVE_MAGIC: [u8; 4] = *b"DCPK";

/// Archive layout version
pub const ARCHIVE_VERSION: u16 = 1;

const CHROMA_DENSE: u8 = 0;
const CHROMA_SPARSE: u8 = 1;

/// Serialize an artifact
pub fn write_archive<W: Write>(artifact: &Artifact, writer: &mut W) -> PackResult<()> {
    writer.write_all(&ARCHIVE_MAGIC)?;
    writer.write_u16::<LittleEndian>(ARCHIVE_VERSION)?;

    let mode = match artifact.chroma {
        ChromaChannels::Dense { .. } => CHROMA_DENSE,
        ChromaChannels::Sparse { .. } => CHROMA_SPARSE,
    };
    writer.write_u8(mode)?;
    writer.write_u32::<LittleEndian>(artifact.dimensions.width)?;
    writer.write_u32::<LittleEndian>(artifact.dimensions.height)?;

    write_csr(&artifact.luma, writer)?;

    match &artifact.chroma {
        ChromaChannels::Dense { cb, cr } => {
            write_plane(cb, writer)?;
            write_plane(cr, writer)?;
        }
        ChromaChannels::Sparse { cb, cr } => {
            write_csr(cb, writer)?;
            write_csr(cr, writer)?;
        }
    }

    Ok(())
}

/// Deserialize an artifact, validating framing and CSR invariants
pub fn read_archive<R: Read>(reader: &mut R) -> PackResult<Artifact> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != ARCHIVE_MAGIC {
        return Err(PackError::InvalidArchive("bad magic".to_string()));
    }

    let version = reader.read_u16::<LittleEndian>()?;
    if version != ARCHIVE_VERSION {
        return Err(PackError::InvalidArchive(format!(
            "unsupported version {}",
            version
        )));
    }

    let mode = reader.read_u8()?;
    let width = reader.read_u32::<LittleEndian>()?;
    let height = reader.read_u32::<LittleEndian>()?;

    let luma = read_csr(reader)?;

    let chroma = match mode {
        CHROMA_DENSE => ChromaChannels::Dense {
            cb: read_plane(reader)?,
            cr: read_plane(reader)?,
        },
        CHROMA_SPARSE => ChromaChannels::Sparse {
            cb: read_csr(reader)?,
            cr: read_csr(reader)?,
        },
        other => {
            return Err(PackError::InvalidArchive(format!(
                "unknown chroma mode tag {}",
                other
            )))
        }
    };

    Ok(Artifact {
        dimensions: dctpack_core::Dimensions::new(width, height),
        luma,
        chroma,
    })
}

fn write_csr<W: Write>(matrix: &CsrMatrix, writer: &mut W) -> PackResult<()> {
    writer.write_u32::<LittleEndian>(matrix.rows() as u32)?;
    writer.write_u32::<LittleEndian>(matrix.cols() as u32)?;
    writer.write_u32::<LittleEndian>(matrix.nnz() as u32)?;

    for &v in matrix.values() {
        writer.write_i16::<LittleEndian>(v)?;
    }
    for &c in matrix.col_indices() {
        writer.write_i32::<LittleEndian>(c)?;
    }
    for &p in matrix.row_ptr() {
        writer.write_i32::<LittleEndian>(p)?;
    }

    Ok(())
}

fn read_csr<R: Read>(reader: &mut R) -> PackResult<CsrMatrix> {
    let rows = reader.read_u32::<LittleEndian>()? as usize;
    let cols = reader.read_u32::<LittleEndian>()? as usize;
    let nnz = reader.read_u32::<LittleEndian>()? as usize;

    let mut values = Vec::with_capacity(nnz);
    for _ in 0..nnz {
        values.push(reader.read_i16::<LittleEndian>()?);
    }
    let mut col_indices = Vec::with_capacity(nnz);
    for _ in 0..nnz {
        col_indices.push(reader.read_i32::<LittleEndian>()?);
    }
    let mut row_ptr = Vec::with_capacity(rows + 1);
    for _ in 0..rows + 1 {
        row_ptr.push(reader.read_i32::<LittleEndian>()?);
    }

    CsrMatrix::from_parts(rows, cols, values, col_indices, row_ptr)
}

fn write_plane<W: Write>(plane: &Plane, writer: &mut W) -> PackResult<()> {
    writer.write_u32::<LittleEndian>(plane.rows as u32)?;
    writer.write_u32::<LittleEndian>(plane.cols as u32)?;
    for &v in &plane.data {
        writer.write_f64::<LittleEndian>(v)?;
    }
    Ok(())
}

fn read_plane<R: Read>(reader: &mut R) -> PackResult<Plane> {
    let rows = reader.read_u32::<LittleEndian>()? as usize;
    let cols = reader.read_u32::<LittleEndian>()? as usize;
    let mut data = Vec::with_capacity(rows * cols);
    for _ in 0..rows * cols {
        data.push(reader.read_f64::<LittleEndian>()?);
    }
    Plane::from_data(rows, cols, data)
}
