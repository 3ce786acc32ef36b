//! Inverse pipeline: artifact back to pixels

use crate::artifact::{Artifact, ChromaChannels};
use crate::pipeline::inverse_plane;
use dctpack_color::merge_ycbcr;
use dctpack_core::consts::{BLOCK_SIZE, CENTER_OFFSET};
use dctpack_core::{PackError, PackResult, PixelBuffer, Plane};
use dctpack_sparse::CsrMatrix;
use dctpack_transform::LUMA_QUANT_TABLE;

/// The inverse codec. Quantization loss is not recoverable; everything else
/// is inverted exactly.
#[derive(Debug, Default)]
pub struct Decoder;

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode an artifact into a pixel buffer of its trimmed dimensions,
    /// clipped to the display range.
    pub fn decode(&self, artifact: &Artifact) -> PackResult<PixelBuffer> {
        let rows = artifact.dimensions.height as usize;
        let cols = artifact.dimensions.width as usize;

        if rows == 0 || cols == 0 || rows % BLOCK_SIZE != 0 || cols % BLOCK_SIZE != 0 {
            return Err(PackError::InvalidDimensions {
                width: artifact.dimensions.width,
                height: artifact.dimensions.height,
            });
        }

        let y = self.expand_channel(&artifact.luma, rows, cols)?;

        let (cb, cr) = match &artifact.chroma {
            ChromaChannels::Dense { cb, cr } => {
                self.check_plane_shape(cb, rows, cols)?;
                self.check_plane_shape(cr, rows, cols)?;
                (cb.clone(), cr.clone())
            }
            ChromaChannels::Sparse { cb, cr } => (
                self.expand_channel(cb, rows, cols)?,
                self.expand_channel(cr, rows, cols)?,
            ),
        };

        merge_ycbcr(&y, &cb, &cr)
    }

    /// CSR-decode one channel and run the inverse block pipeline on it
    fn expand_channel(&self, matrix: &CsrMatrix, rows: usize, cols: usize) -> PackResult<Plane> {
        if matrix.rows() != rows || matrix.cols() != cols {
            return Err(PackError::SparseShapeMismatch(format!(
                "channel is {}x{} but the artifact declares {}x{}",
                matrix.rows(),
                matrix.cols(),
                rows,
                cols
            )));
        }
        let quantized = matrix.to_dense()?;
        Ok(inverse_plane(&quantized, &LUMA_QUANT_TABLE, CENTER_OFFSET))
    }

    fn check_plane_shape(&self, plane: &Plane, rows: usize, cols: usize) -> PackResult<()> {
        if plane.rows != rows || plane.cols != cols {
            return Err(PackError::PlaneShapeMismatch(format!(
                "chroma plane is {}x{} but the artifact declares {}x{}",
                plane.rows, plane.cols, rows, cols
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dctpack_core::{CoeffPlane, Dimensions};

    #[test]
    fn test_decode_rejects_shape_mismatch() {
        let luma = CsrMatrix::from_dense(&CoeffPlane::zeros(8, 8));
        let artifact = Artifact {
            dimensions: Dimensions::new(16, 8),
            luma,
            chroma: ChromaChannels::Dense {
                cb: Plane::zeros(8, 16),
                cr: Plane::zeros(8, 16),
            },
        };
        assert!(matches!(
            Decoder::new().decode(&artifact),
            Err(PackError::SparseShapeMismatch(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unaligned_dimensions() {
        let luma = CsrMatrix::from_dense(&CoeffPlane::zeros(9, 9));
        let artifact = Artifact {
            dimensions: Dimensions::new(9, 9),
            luma,
            chroma: ChromaChannels::Dense {
                cb: Plane::zeros(9, 9),
                cr: Plane::zeros(9, 9),
            },
        };
        assert!(matches!(
            Decoder::new().decode(&artifact),
            Err(PackError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_empty_luma_decodes_to_mid_gray() {
        // An all-zero luminance plane plus flat 128 chroma is mid-gray
        let luma = CsrMatrix::from_dense(&CoeffPlane::zeros(8, 8));
        let mut cb = Plane::zeros(8, 8);
        let mut cr = Plane::zeros(8, 8);
        cb.data.fill(128.0);
        cr.data.fill(128.0);

        let artifact = Artifact {
            dimensions: Dimensions::new(8, 8),
            luma,
            chroma: ChromaChannels::Dense { cb, cr },
        };
        let pixels = Decoder::new().decode(&artifact).unwrap();
        for row in 0..8 {
            for col in 0..8 {
                let [r, g, b] = pixels.get(col, row);
                assert!((r - 128.0).abs() < 0.01);
                assert!((g - 128.0).abs() < 0.01);
                assert!((b - 128.0).abs() < 0.01);
            }
        }
    }
}
