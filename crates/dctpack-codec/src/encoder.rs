//! Forward pipeline: pixels to artifact

use crate::artifact::{Artifact, ChromaChannels};
use crate::pipeline::forward_plane;
use dctpack_color::split_ycbcr;
use dctpack_core::consts::{
    BLOCK_SIZE, CENTER_OFFSET, DEFAULT_BAND_CUTOFF, DEFAULT_THRESHOLD, MAX_BAND_CUTOFF,
    MIN_BAND_CUTOFF,
};
use dctpack_core::{ChromaMode, PackError, PackResult, PixelBuffer};
use dctpack_sparse::CsrMatrix;
use dctpack_transform::LUMA_QUANT_TABLE;

/// Encoder options
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Quantized coefficients with magnitude strictly below this are dropped.
    /// Zero disables magnitude suppression.
    pub threshold: u16,
    /// Frequency-band cutoff index in [1, 8]; 8 disables the band cut
    pub band_cutoff: usize,
    /// Whether chrominance is kept dense or CSR-packed like luminance
    pub chroma_mode: ChromaMode,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            band_cutoff: DEFAULT_BAND_CUTOFF,
            chroma_mode: ChromaMode::Dense,
        }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn band_cutoff(mut self, band_cutoff: usize) -> Self {
        self.band_cutoff = band_cutoff;
        self
    }

    pub fn chroma_mode(mut self, chroma_mode: ChromaMode) -> Self {
        self.chroma_mode = chroma_mode;
        self
    }

    pub fn validate(&self) -> PackResult<()> {
        if self.band_cutoff < MIN_BAND_CUTOFF || self.band_cutoff > MAX_BAND_CUTOFF {
            return Err(PackError::InvalidParameter(format!(
                "band cutoff {} outside [{}, {}]",
                self.band_cutoff, MIN_BAND_CUTOFF, MAX_BAND_CUTOFF
            )));
        }
        Ok(())
    }
}

/// The forward codec
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode a pixel buffer into a sparse coefficient artifact.
    ///
    /// The input is cropped to the largest block-aligned sub-rectangle
    /// first; inputs smaller than one block on either axis are rejected.
    pub fn encode(&self, pixels: &PixelBuffer) -> PackResult<Artifact> {
        self.options.validate()?;

        if (pixels.width() as usize) < BLOCK_SIZE || (pixels.height() as usize) < BLOCK_SIZE {
            return Err(PackError::InvalidDimensions {
                width: pixels.width(),
                height: pixels.height(),
            });
        }

        let cropped = pixels.crop_to_blocks()?;
        let (y, cb, cr) = split_ycbcr(&cropped);

        let luma_quantized = forward_plane(
            &y,
            &LUMA_QUANT_TABLE,
            self.options.threshold,
            self.options.band_cutoff,
            CENTER_OFFSET,
        );
        let luma = CsrMatrix::from_dense(&luma_quantized);

        let chroma = match self.options.chroma_mode {
            ChromaMode::Dense => ChromaChannels::Dense { cb, cr },
            ChromaMode::Sparse => {
                let pack = |plane| {
                    CsrMatrix::from_dense(&forward_plane(
                        plane,
                        &LUMA_QUANT_TABLE,
                        self.options.threshold,
                        self.options.band_cutoff,
                        CENTER_OFFSET,
                    ))
                };
                ChromaChannels::Sparse {
                    cb: pack(&cb),
                    cr: pack(&cr),
                }
            }
        };

        Ok(Artifact {
            dimensions: cropped.dimensions,
            luma,
            chroma,
        })
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}
