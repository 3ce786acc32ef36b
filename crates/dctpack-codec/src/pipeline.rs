//! Tiled per-plane transform pipeline
//!
//! Tiles have no data dependency on each other, so both directions run in
//! parallel over 8-row bands; each tile of the output is written exactly once.

use dctpack_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use dctpack_core::{CoeffPlane, Plane};
use dctpack_transform::{
    dequantize_block, forward_block, inverse_block, quantize_block, QuantTable,
};
use rayon::prelude::*;

/// Transform and quantize a plane tile by tile. `center` is subtracted from
/// every sample before the transform. The plane must be block-aligned.
pub(crate) fn forward_plane(
    plane: &Plane,
    table: &QuantTable,
    threshold: u16,
    band_cutoff: usize,
    center: f64,
) -> CoeffPlane {
    debug_assert_eq!(plane.rows % BLOCK_SIZE, 0);
    debug_assert_eq!(plane.cols % BLOCK_SIZE, 0);

    let cols = plane.cols;
    let mut out = CoeffPlane::zeros(plane.rows, cols);

    out.data
        .par_chunks_mut(BLOCK_SIZE * cols)
        .zip(plane.data.par_chunks(BLOCK_SIZE * cols))
        .for_each(|(dst_band, src_band)| {
            let mut block = [0.0; BLOCK_AREA];
            let mut coeffs = [0.0; BLOCK_AREA];
            let mut quantized = [0i16; BLOCK_AREA];

            for block_col in 0..cols / BLOCK_SIZE {
                let left = block_col * BLOCK_SIZE;
                for y in 0..BLOCK_SIZE {
                    for x in 0..BLOCK_SIZE {
                        block[y * BLOCK_SIZE + x] = src_band[y * cols + left + x] - center;
                    }
                }

                forward_block(&block, &mut coeffs);
                quantize_block(&coeffs, table, threshold, band_cutoff, &mut quantized);

                for y in 0..BLOCK_SIZE {
                    for x in 0..BLOCK_SIZE {
                        dst_band[y * cols + left + x] = quantized[y * BLOCK_SIZE + x];
                    }
                }
            }
        });

    out
}

/// Dequantize and inverse-transform a coefficient plane tile by tile,
/// adding `center` back to every sample.
pub(crate) fn inverse_plane(plane: &CoeffPlane, table: &QuantTable, center: f64) -> Plane {
    debug_assert_eq!(plane.rows % BLOCK_SIZE, 0);
    debug_assert_eq!(plane.cols % BLOCK_SIZE, 0);

    let cols = plane.cols;
    let mut out = Plane::zeros(plane.rows, cols);

    out.data
        .par_chunks_mut(BLOCK_SIZE * cols)
        .zip(plane.data.par_chunks(BLOCK_SIZE * cols))
        .for_each(|(dst_band, src_band)| {
            let mut quantized = [0i16; BLOCK_AREA];
            let mut coeffs = [0.0; BLOCK_AREA];
            let mut block = [0.0; BLOCK_AREA];

            for block_col in 0..cols / BLOCK_SIZE {
                let left = block_col * BLOCK_SIZE;
                for y in 0..BLOCK_SIZE {
                    for x in 0..BLOCK_SIZE {
                        quantized[y * BLOCK_SIZE + x] = src_band[y * cols + left + x];
                    }
                }

                dequantize_block(&quantized, table, &mut coeffs);
                inverse_block(&coeffs, &mut block);

                for y in 0..BLOCK_SIZE {
                    for x in 0..BLOCK_SIZE {
                        dst_band[y * cols + left + x] = block[y * BLOCK_SIZE + x] + center;
                    }
                }
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dctpack_core::consts::CENTER_OFFSET;
    use dctpack_transform::LUMA_QUANT_TABLE;

    #[test]
    fn test_forward_inverse_plane_bounded_error() {
        // threshold 0, cutoff 8: only quantization rounding remains
        let mut plane = Plane::zeros(16, 24);
        for row in 0..16 {
            for col in 0..24 {
                plane.set(row, col, 60.0 + 4.0 * row as f64 + 3.0 * col as f64);
            }
        }

        let quantized = forward_plane(&plane, &LUMA_QUANT_TABLE, 0, 8, CENTER_OFFSET);
        let restored = inverse_plane(&quantized, &LUMA_QUANT_TABLE, CENTER_OFFSET);

        for (a, b) in plane.data.iter().zip(restored.data.iter()) {
            assert!((a - b).abs() < 32.0, "sample drift: {} vs {}", a, b);
        }
    }

    #[test]
    fn test_flat_plane_is_dc_only() {
        let mut plane = Plane::zeros(16, 16);
        plane.data.fill(128.0);

        let quantized = forward_plane(&plane, &LUMA_QUANT_TABLE, 2, 5, CENTER_OFFSET);
        // 128 centers to zero, so even the DC term vanishes
        assert_eq!(quantized.zero_count(), 16 * 16);

        let mut bright = Plane::zeros(16, 16);
        bright.data.fill(250.0);
        let quantized = forward_plane(&bright, &LUMA_QUANT_TABLE, 2, 5, CENTER_OFFSET);
        for row in 0..16 {
            for col in 0..16 {
                let v = quantized.get(row, col);
                if row % BLOCK_SIZE == 0 && col % BLOCK_SIZE == 0 {
                    assert_ne!(v, 0, "DC term missing at ({}, {})", row, col);
                } else {
                    assert_eq!(v, 0, "AC term survives at ({}, {})", row, col);
                }
            }
        }
    }
}
