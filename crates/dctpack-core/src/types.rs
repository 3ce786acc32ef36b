//! Core types for the codec

use crate::consts::BLOCK_SIZE;
use num_traits::NumCast;

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Largest dimensions that are multiples of the block size.
    /// The trimmed margin (at most 7 rows/columns) is dropped by design.
    pub fn trim_to_blocks(&self) -> Self {
        Self {
            width: self.width - self.width % BLOCK_SIZE as u32,
            height: self.height - self.height % BLOCK_SIZE as u32,
        }
    }

    pub fn is_block_aligned(&self) -> bool {
        self.width % BLOCK_SIZE as u32 == 0 && self.height % BLOCK_SIZE as u32 == 0
    }

    /// Number of blocks along each axis, assuming block-aligned dimensions
    pub fn block_grid(&self) -> (usize, usize) {
        (
            self.width as usize / BLOCK_SIZE,
            self.height as usize / BLOCK_SIZE,
        )
    }
}

/// How the chrominance channels are carried in an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChromaMode {
    /// Cb/Cr kept as dense planes, untouched by the block transform
    #[default]
    Dense,
    /// Cb/Cr go through the same transform/quantize/CSR pipeline as luminance
    Sparse,
}

/// Image sample type. Conversions into and out of the codec's [0, 255]
/// working range happen here and nowhere else.
pub trait Sample: Copy + NumCast + PartialOrd {
    /// Convert to the display range [0, 255]
    fn to_display(self) -> f64;
    /// Convert back from the display range, clamping
    fn from_display(value: f64) -> Self;
}

impl Sample for u8 {
    fn to_display(self) -> f64 {
        self as f64
    }

    fn from_display(value: f64) -> Self {
        value.round().clamp(0.0, 255.0) as u8
    }
}

impl Sample for u16 {
    fn to_display(self) -> f64 {
        self as f64 / 65535.0 * 255.0
    }

    fn from_display(value: f64) -> Self {
        (value / 255.0 * 65535.0).round().clamp(0.0, 65535.0) as u16
    }
}

impl Sample for f32 {
    /// f32 samples are normalized [0, 1] as produced by image loaders
    fn to_display(self) -> f64 {
        self as f64 * 255.0
    }

    fn from_display(value: f64) -> Self {
        (value / 255.0).clamp(0.0, 1.0) as f32
    }
}
