//! Encode result and compression accounting

use dctpack_core::consts::NUM_CHANNELS;
use dctpack_core::{ChromaMode, Dimensions, Plane};
use dctpack_sparse::CsrMatrix;

/// Chrominance payload of an [`Artifact`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChromaChannels {
    /// Cb/Cr carried as dense planes, bypassing the block transform
    Dense { cb: Plane, cr: Plane },
    /// Cb/Cr quantized and CSR-packed like luminance
    Sparse { cb: CsrMatrix, cr: CsrMatrix },
}

/// The output of an encode: CSR-packed luminance plus chrominance, with the
/// block-trimmed dimensions. Produced by [`crate::Encoder`], consumed by
/// [`crate::Decoder`] or by [`crate::write_archive`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artifact {
    pub dimensions: Dimensions,
    pub luma: CsrMatrix,
    pub chroma: ChromaChannels,
}

impl Artifact {
    pub fn chroma_mode(&self) -> ChromaMode {
        match self.chroma {
            ChromaChannels::Dense { .. } => ChromaMode::Dense,
            ChromaChannels::Sparse { .. } => ChromaMode::Sparse,
        }
    }

    /// Fraction of zero entries in the quantized luminance plane
    pub fn luma_sparsity(&self) -> f64 {
        self.luma.sparsity()
    }

    /// Encoded footprint across all channels, in bytes. Dense chrominance
    /// planes count 8 bytes per sample (f64, as archived).
    pub fn compressed_bytes(&self) -> usize {
        let chroma = match &self.chroma {
            ChromaChannels::Dense { cb, cr } => 8 * (cb.data.len() + cr.data.len()),
            ChromaChannels::Sparse { cb, cr } => cb.encoded_bytes() + cr.encoded_bytes(),
        };
        self.luma.encoded_bytes() + chroma
    }

    /// Ratio of the uncompressed footprint
    /// (`rows * cols * channels * bytes_per_sample`) to the encoded one.
    pub fn compression_ratio(&self, bytes_per_sample: usize) -> f64 {
        let uncompressed = self.dimensions.pixel_count() * NUM_CHANNELS * bytes_per_sample;
        uncompressed as f64 / self.compressed_bytes() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dctpack_core::CoeffPlane;

    #[test]
    fn test_compression_accounting() {
        let mut luma_plane = CoeffPlane::zeros(8, 8);
        luma_plane.set(0, 0, 12);
        let luma = CsrMatrix::from_dense(&luma_plane);

        let artifact = Artifact {
            dimensions: Dimensions::new(8, 8),
            luma,
            chroma: ChromaChannels::Dense {
                cb: Plane::zeros(8, 8),
                cr: Plane::zeros(8, 8),
            },
        };

        assert_eq!(artifact.chroma_mode(), ChromaMode::Dense);
        assert_eq!(artifact.luma_sparsity(), 1.0 - 1.0 / 64.0);
        // luma: 2 + 4 + 4*9 bytes; chroma: 2 * 64 * 8 bytes
        assert_eq!(artifact.compressed_bytes(), 42 + 1024);
        assert!(artifact.compression_ratio(1) > 0.0);
    }
}
