//! Pixel and plane buffers

use crate::consts::{BLOCK_AREA, BLOCK_SIZE, NUM_CHANNELS};
use crate::{Dimensions, PackError, PackResult, Sample};

/// Interleaved RGB pixel buffer in the display range [0, 255].
///
/// This is the codec's only pixel representation; conversions from other
/// sample types happen once, in [`PixelBuffer::from_samples`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelBuffer {
    pub dimensions: Dimensions,
    data: Vec<f64>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer
    pub fn new(dimensions: Dimensions) -> PackResult<Self> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(PackError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        Ok(Self {
            data: vec![0.0; dimensions.pixel_count() * NUM_CHANNELS],
            dimensions,
        })
    }

    /// Build from an interleaved sample slice. `channels` must be 3 and the
    /// slice length must match the dimensions.
    pub fn from_samples<S: Sample>(
        samples: &[S],
        dimensions: Dimensions,
        channels: usize,
    ) -> PackResult<Self> {
        if channels != NUM_CHANNELS {
            return Err(PackError::InvalidChannelCount(channels));
        }
        let mut buffer = Self::new(dimensions)?;
        let expected = dimensions.pixel_count() * NUM_CHANNELS;
        if samples.len() != expected {
            return Err(PackError::BufferTooSmall {
                expected,
                actual: samples.len(),
            });
        }
        for (dst, src) in buffer.data.iter_mut().zip(samples.iter()) {
            *dst = src.to_display();
        }
        Ok(buffer)
    }

    /// Convert back to an interleaved sample vector, clamping to range
    pub fn to_samples<S: Sample>(&self) -> Vec<S> {
        self.data.iter().map(|&v| S::from_display(v)).collect()
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn get(&self, x: usize, y: usize) -> [f64; 3] {
        let idx = (y * self.dimensions.width as usize + x) * NUM_CHANNELS;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    pub fn set(&mut self, x: usize, y: usize, rgb: [f64; 3]) {
        let idx = (y * self.dimensions.width as usize + x) * NUM_CHANNELS;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }

    pub fn samples(&self) -> &[f64] {
        &self.data
    }

    /// Crop to the largest block-aligned sub-rectangle, dropping trailing
    /// rows and columns. Returns an error if nothing block-sized remains.
    pub fn crop_to_blocks(&self) -> PackResult<Self> {
        let trimmed = self.dimensions.trim_to_blocks();
        if trimmed.width == 0 || trimmed.height == 0 {
            return Err(PackError::InvalidDimensions {
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }
        if trimmed == self.dimensions {
            return Ok(self.clone());
        }
        let mut cropped = Self::new(trimmed)?;
        for y in 0..trimmed.height as usize {
            for x in 0..trimmed.width as usize {
                cropped.set(x, y, self.get(x, y));
            }
        }
        Ok(cropped)
    }
}

/// Single-channel real-valued plane
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Plane {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> PackResult<Self> {
        if data.len() != rows * cols {
            return Err(PackError::BufferTooSmall {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Copy the 8x8 tile at grid position (`block_row`, `block_col`)
    pub fn read_block(&self, block_row: usize, block_col: usize, block: &mut [f64; BLOCK_AREA]) {
        let top = block_row * BLOCK_SIZE;
        let left = block_col * BLOCK_SIZE;
        for y in 0..BLOCK_SIZE {
            let src = (top + y) * self.cols + left;
            block[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE]
                .copy_from_slice(&self.data[src..src + BLOCK_SIZE]);
        }
    }

    pub fn write_block(&mut self, block_row: usize, block_col: usize, block: &[f64; BLOCK_AREA]) {
        let top = block_row * BLOCK_SIZE;
        let left = block_col * BLOCK_SIZE;
        for y in 0..BLOCK_SIZE {
            let dst = (top + y) * self.cols + left;
            self.data[dst..dst + BLOCK_SIZE]
                .copy_from_slice(&block[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE]);
        }
    }
}

/// Single-channel quantized coefficient plane
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoeffPlane {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<i16>,
}

impl CoeffPlane {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> i16 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i16) {
        self.data[row * self.cols + col] = value;
    }

    pub fn read_block(&self, block_row: usize, block_col: usize, block: &mut [i16; BLOCK_AREA]) {
        let top = block_row * BLOCK_SIZE;
        let left = block_col * BLOCK_SIZE;
        for y in 0..BLOCK_SIZE {
            let src = (top + y) * self.cols + left;
            block[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE]
                .copy_from_slice(&self.data[src..src + BLOCK_SIZE]);
        }
    }

    pub fn write_block(&mut self, block_row: usize, block_col: usize, block: &[i16; BLOCK_AREA]) {
        let top = block_row * BLOCK_SIZE;
        let left = block_col * BLOCK_SIZE;
        for y in 0..BLOCK_SIZE {
            let dst = (top + y) * self.cols + left;
            self.data[dst..dst + BLOCK_SIZE]
                .copy_from_slice(&block[y * BLOCK_SIZE..(y + 1) * BLOCK_SIZE]);
        }
    }

    /// Count of zero entries
    pub fn zero_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 0).count()
    }
}
