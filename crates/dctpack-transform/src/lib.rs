//! Block transform operations for the dctpack codec
//!
//! This crate implements the 8x8 DCT-II basis matrix, the forward and
//! inverse block transforms, and quantization with magnitude threshold and
//! frequency-band cutoff.

pub mod dct;
pub mod quantization;

pub use dct::*;
pub use quantization::*;
