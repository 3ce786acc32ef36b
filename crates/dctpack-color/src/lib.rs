//! Color space transformations for the dctpack codec
//!
//! Implements the BT.601-style RGB <-> YCbCr conversion used around the
//! block transform, both per-pixel and at the plane level.

pub mod ycbcr;

pub use ycbcr::*;
