//! Core types and utilities for the dctpack codec
//!
//! This crate provides the fundamental data structures shared by every stage
//! of the pipeline: pixel and plane buffers, dimensions, the error taxonomy,
//! and the sample normalization boundary.

pub mod buffer;
pub mod consts;
pub mod error;
pub mod types;

pub use buffer::*;
pub use error::{PackError, PackResult};
pub use types::*;
