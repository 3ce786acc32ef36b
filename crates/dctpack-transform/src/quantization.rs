//! Quantization with magnitude threshold and frequency-band cutoff

use dctpack_core::consts::{BLOCK_AREA, BLOCK_SIZE};

/// Quantization table for 8x8 blocks
pub type QuantTable = [u16; BLOCK_AREA];

/// Standard JPEG luminance quantization table
pub const LUMA_QUANT_TABLE: QuantTable = [
    16, 11, 10, 16, 24, 40, 51, 61, //
    12, 12, 13, 19, 26, 58, 60, 55, //
    14, 13, 16, 24, 40, 57, 69, 56, //
    14, 17, 22, 29, 51, 87, 80, 62, //
    18, 22, 37, 56, 68, 109, 103, 77, //
    24, 35, 55, 64, 81, 104, 113, 92, //
    49, 64, 78, 87, 103, 121, 120, 101, //
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Largest divisor in [`LUMA_QUANT_TABLE`]
pub const MAX_QUANT_STEP: u16 = 121;

/// Quantize a transformed block.
///
/// Steps, in order: divide by the table, round half away from zero, zero
/// entries with magnitude strictly below `threshold`, then zero every entry
/// whose row or column index is at or beyond `band_cutoff`. Only the first
/// step is invertible; the rest discard information permanently.
pub fn quantize_block(
    coeffs: &[f64; BLOCK_AREA],
    table: &QuantTable,
    threshold: u16,
    band_cutoff: usize,
    output: &mut [i16; BLOCK_AREA],
) {
    for i in 0..BLOCK_AREA {
        let q = (coeffs[i] / table[i] as f64).round() as i16;
        output[i] = if q.unsigned_abs() < threshold { 0 } else { q };
    }

    for row in 0..BLOCK_SIZE {
        for col in 0..BLOCK_SIZE {
            if row >= band_cutoff || col >= band_cutoff {
                output[row * BLOCK_SIZE + col] = 0;
            }
        }
    }
}

/// Dequantize a block: elementwise multiply by the table. Zeros stay zero.
pub fn dequantize_block(
    quantized: &[i16; BLOCK_AREA],
    table: &QuantTable,
    output: &mut [f64; BLOCK_AREA],
) {
    for i in 0..BLOCK_AREA {
        output[i] = quantized[i] as f64 * table[i] as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_half_away_from_zero() {
        let mut coeffs = [0.0; BLOCK_AREA];
        coeffs[0] = 24.0; // table[0] = 16, ratio 1.5 rounds to 2
        coeffs[1] = -16.5; // table[1] = 11, ratio -1.5 rounds to -2
        let mut out = [0i16; BLOCK_AREA];
        quantize_block(&coeffs, &LUMA_QUANT_TABLE, 0, 8, &mut out);
        assert_eq!(out[0], 2);
        assert_eq!(out[1], -2);
    }

    #[test]
    fn test_threshold_suppression() {
        let mut coeffs = [0.0; BLOCK_AREA];
        coeffs[0] = 16.0; // quantizes to 1
        coeffs[1] = 33.0; // quantizes to 3
        let mut out = [0i16; BLOCK_AREA];

        quantize_block(&coeffs, &LUMA_QUANT_TABLE, 2, 8, &mut out);
        assert_eq!(out[0], 0, "|1| < 2 must be suppressed");
        assert_eq!(out[1], 3);

        // threshold 0 suppresses nothing
        quantize_block(&coeffs, &LUMA_QUANT_TABLE, 0, 8, &mut out);
        assert_eq!(out[0], 1);
    }

    #[test]
    fn test_band_cutoff() {
        let coeffs = [1000.0; BLOCK_AREA];
        let mut out = [0i16; BLOCK_AREA];
        quantize_block(&coeffs, &LUMA_QUANT_TABLE, 0, 5, &mut out);

        for row in 0..BLOCK_SIZE {
            for col in 0..BLOCK_SIZE {
                let v = out[row * BLOCK_SIZE + col];
                if row >= 5 || col >= 5 {
                    assert_eq!(v, 0, "({}, {}) survives the cutoff", row, col);
                } else {
                    assert_ne!(v, 0);
                }
            }
        }
    }

    #[test]
    fn test_dequantize_inverts_division() {
        let mut quantized = [0i16; BLOCK_AREA];
        quantized[0] = 3;
        quantized[63] = -2;
        let mut out = [0.0; BLOCK_AREA];
        dequantize_block(&quantized, &LUMA_QUANT_TABLE, &mut out);
        assert_eq!(out[0], 48.0);
        assert_eq!(out[63], -198.0);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn test_max_quant_step_matches_table() {
        assert_eq!(*LUMA_QUANT_TABLE.iter().max().unwrap(), MAX_QUANT_STEP);
    }
}
