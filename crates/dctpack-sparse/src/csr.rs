//! CSR (compressed sparse row) matrix over i16 coefficients

use dctpack_core::{CoeffPlane, PackError, PackResult};

/// A quantized coefficient plane in compressed sparse row form.
///
/// `values` holds the non-zero entries in row-major order, `col_indices`
/// their columns, and `row_ptr` the cumulative per-row counts
/// (`row_ptr.len() == rows + 1`, `row_ptr[0] == 0`). Within each row the
/// columns are strictly increasing. Immutable once constructed; every
/// encode rebuilds it from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    values: Vec<i16>,
    col_indices: Vec<i32>,
    row_ptr: Vec<i32>,
}

impl CsrMatrix {
    /// Pack a dense coefficient plane, scanning row-major
    pub fn from_dense(plane: &CoeffPlane) -> Self {
        let mut values = Vec::new();
        let mut col_indices = Vec::new();
        let mut row_ptr = Vec::with_capacity(plane.rows + 1);
        row_ptr.push(0);

        for row in 0..plane.rows {
            for col in 0..plane.cols {
                let v = plane.get(row, col);
                if v != 0 {
                    values.push(v);
                    col_indices.push(col as i32);
                }
            }
            row_ptr.push(values.len() as i32);
        }

        Self {
            rows: plane.rows,
            cols: plane.cols,
            values,
            col_indices,
            row_ptr,
        }
    }

    /// Reassemble components read from an archive, validating the CSR
    /// invariants before accepting them.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        values: Vec<i16>,
        col_indices: Vec<i32>,
        row_ptr: Vec<i32>,
    ) -> PackResult<Self> {
        let matrix = Self {
            rows,
            cols,
            values,
            col_indices,
            row_ptr,
        };
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> PackResult<()> {
        if self.row_ptr.len() != self.rows + 1 {
            return Err(PackError::SparseShapeMismatch(format!(
                "row_ptr length {} for {} rows",
                self.row_ptr.len(),
                self.rows
            )));
        }
        if self.row_ptr.first() != Some(&0) {
            return Err(PackError::SparseShapeMismatch(
                "row_ptr does not start at 0".to_string(),
            ));
        }
        if self.values.len() != self.col_indices.len() {
            return Err(PackError::SparseShapeMismatch(format!(
                "{} values but {} column indices",
                self.values.len(),
                self.col_indices.len()
            )));
        }
        if *self.row_ptr.last().unwrap_or(&0) as usize != self.values.len() {
            return Err(PackError::SparseShapeMismatch(format!(
                "row_ptr ends at {} but {} values are present",
                self.row_ptr.last().unwrap_or(&0),
                self.values.len()
            )));
        }

        for row in 0..self.rows {
            let start = self.row_ptr[row];
            let end = self.row_ptr[row + 1];
            if start > end || end as usize > self.values.len() {
                return Err(PackError::SparseShapeMismatch(format!(
                    "row_ptr out of range at row {}",
                    row
                )));
            }
            let mut prev: i32 = -1;
            for &col in &self.col_indices[start as usize..end as usize] {
                if col <= prev || col as usize >= self.cols {
                    return Err(PackError::SparseShapeMismatch(format!(
                        "column index {} out of order or out of bounds in row {}",
                        col, row
                    )));
                }
                prev = col;
            }
        }

        Ok(())
    }

    /// Expand back to a dense zero-filled plane
    pub fn to_dense(&self) -> PackResult<CoeffPlane> {
        self.validate()?;
        let mut plane = CoeffPlane::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            let start = self.row_ptr[row] as usize;
            let end = self.row_ptr[row + 1] as usize;
            for i in start..end {
                plane.set(row, self.col_indices[i] as usize, self.values[i]);
            }
        }
        Ok(plane)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Fraction of zero entries, in [0, 1]
    pub fn sparsity(&self) -> f64 {
        let total = self.rows * self.cols;
        if total == 0 {
            return 1.0;
        }
        1.0 - self.nnz() as f64 / total as f64
    }

    /// Encoded footprint in bytes: i16 per value, i32 per column index,
    /// i32 per row pointer entry.
    pub fn encoded_bytes(&self) -> usize {
        2 * self.nnz() + 4 * self.nnz() + 4 * (self.rows + 1)
    }

    pub fn values(&self) -> &[i16] {
        &self.values
    }

    pub fn col_indices(&self) -> &[i32] {
        &self.col_indices
    }

    pub fn row_ptr(&self) -> &[i32] {
        &self.row_ptr
    }
}
