//! 8x8 DCT (Discrete Cosine Transform) via the orthogonal basis matrix

use dctpack_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use lazy_static::lazy_static;
use std::f64::consts::PI;

lazy_static! {
    /// The 8-point DCT-II basis matrix, computed once per process:
    /// `P[i][j] = 0.5 * c(i) * cos((2j + 1) * i * PI / 16)` with
    /// `c(0) = 1/sqrt(2)`, `c(i > 0) = 1`. Orthogonal, so the inverse
    /// transform is the transpose.
    pub static ref DCT_BASIS: [[f64; BLOCK_SIZE]; BLOCK_SIZE] = {
        let mut p = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (i, row) in p.iter_mut().enumerate() {
            let c = if i == 0 { 1.0 / 2.0f64.sqrt() } else { 1.0 };
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = 0.5 * c * (((2 * j + 1) * i) as f64 * PI / 16.0).cos();
            }
        }
        p
    };
}

/// Forward transform of an 8x8 block: `P * B * P^T`
pub fn forward_block(input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
    let p = &*DCT_BASIS;
    let mut tmp = [0.0; BLOCK_AREA];

    // tmp = P * B
    for i in 0..BLOCK_SIZE {
        for j in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for k in 0..BLOCK_SIZE {
                sum += p[i][k] * input[k * BLOCK_SIZE + j];
            }
            tmp[i * BLOCK_SIZE + j] = sum;
        }
    }

    // output = tmp * P^T
    for i in 0..BLOCK_SIZE {
        for j in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for k in 0..BLOCK_SIZE {
                sum += tmp[i * BLOCK_SIZE + k] * p[j][k];
            }
            output[i * BLOCK_SIZE + j] = sum;
        }
    }
}

/// Inverse transform of an 8x8 coefficient block: `P^T * C * P`
pub fn inverse_block(input: &[f64; BLOCK_AREA], output: &mut [f64; BLOCK_AREA]) {
    let p = &*DCT_BASIS;
    let mut tmp = [0.0; BLOCK_AREA];

    // tmp = P^T * C
    for i in 0..BLOCK_SIZE {
        for j in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for k in 0..BLOCK_SIZE {
                sum += p[k][i] * input[k * BLOCK_SIZE + j];
            }
            tmp[i * BLOCK_SIZE + j] = sum;
        }
    }

    // output = tmp * P
    for i in 0..BLOCK_SIZE {
        for j in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for k in 0..BLOCK_SIZE {
                sum += tmp[i * BLOCK_SIZE + k] * p[k][j];
            }
            output[i * BLOCK_SIZE + j] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_orthogonal() {
        // P * P^T should be the identity
        let p = &*DCT_BASIS;
        for i in 0..BLOCK_SIZE {
            for j in 0..BLOCK_SIZE {
                let mut sum = 0.0;
                for k in 0..BLOCK_SIZE {
                    sum += p[i][k] * p[j][k];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (sum - expected).abs() < 1e-12,
                    "P*P^T[{}][{}] = {}",
                    i,
                    j,
                    sum
                );
            }
        }
    }

    #[test]
    fn test_roundtrip_identity() {
        // inverse(forward(B)) must reproduce B within 1e-9 relative tolerance
        let input: [f64; BLOCK_AREA] =
            std::array::from_fn(|i| ((i * 37 + 11) % 256) as f64 - 128.0);
        let mut coeffs = [0.0; BLOCK_AREA];
        let mut restored = [0.0; BLOCK_AREA];

        forward_block(&input, &mut coeffs);
        inverse_block(&coeffs, &mut restored);

        let scale = input.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        for (a, b) in input.iter().zip(restored.iter()) {
            assert!(
                (a - b).abs() <= 1e-9 * scale,
                "roundtrip drift: {} vs {}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_constant_block_has_dc_only() {
        let input = [100.0; BLOCK_AREA];
        let mut coeffs = [0.0; BLOCK_AREA];
        forward_block(&input, &mut coeffs);

        // DC = 8 * mean for this normalization
        assert!((coeffs[0] - 800.0).abs() < 1e-9);
        for (idx, &c) in coeffs.iter().enumerate().skip(1) {
            assert!(c.abs() < 1e-9, "AC coefficient {} = {}", idx, c);
        }
    }
}
