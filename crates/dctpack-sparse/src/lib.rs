//! Compressed sparse row storage for quantized coefficient planes
//!
//! After thresholding, the overwhelming majority of quantized coefficients
//! are zero; CSR stores only the non-zero entries plus per-row offsets.

pub mod csr;

pub use csr::CsrMatrix;
