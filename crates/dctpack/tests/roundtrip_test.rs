//! Integration tests for the encode/decode round trip

use dctpack::{
    ChromaMode, Decoder, Dimensions, Encoder, EncoderOptions, PixelBuffer,
};

/// Helper to build a gradient test image
fn gradient_image(width: u32, height: u32) -> PixelBuffer {
    let mut samples = vec![0u8; (width * height * 3) as usize];
    for y in 0..height {
        for x in 0..width {
            let idx = ((y * width + x) * 3) as usize;
            samples[idx] = ((x * 255) / width) as u8;
            samples[idx + 1] = ((y * 255) / height) as u8;
            samples[idx + 2] = 128;
        }
    }
    PixelBuffer::from_samples(&samples, Dimensions::new(width, height), 3).unwrap()
}

/// Largest per-sample absolute difference across all channels
fn max_abs_error(a: &PixelBuffer, b: &PixelBuffer) -> f64 {
    assert_eq!(a.dimensions, b.dimensions);
    a.samples()
        .iter()
        .zip(b.samples().iter())
        .fold(0.0f64, |m, (x, y)| m.max((x - y).abs()))
}

#[test]
fn test_quantization_only_roundtrip() {
    // threshold 0 and band cutoff 8 leave quantization rounding as the
    // only loss; per-sample error stays well below the largest table step
    let original = gradient_image(64, 64);
    let encoder = Encoder::new(EncoderOptions::new().threshold(0).band_cutoff(8));

    let artifact = encoder.encode(&original).unwrap();
    assert_eq!(artifact.dimensions, original.dimensions);

    let restored = Decoder::new().decode(&artifact).unwrap();
    let err = max_abs_error(&original, &restored);
    println!("max per-sample error: {:.3}", err);
    assert!(err < 32.0, "error too large: {}", err);
}

#[test]
fn test_sparse_chroma_roundtrip() {
    let original = gradient_image(64, 48);
    let encoder = Encoder::new(
        EncoderOptions::new()
            .threshold(0)
            .band_cutoff(8)
            .chroma_mode(ChromaMode::Sparse),
    );

    let artifact = encoder.encode(&original).unwrap();
    assert_eq!(artifact.chroma_mode(), ChromaMode::Sparse);

    let restored = Decoder::new().decode(&artifact).unwrap();
    let err = max_abs_error(&original, &restored);
    println!("max per-sample error (sparse chroma): {:.3}", err);
    assert!(err < 32.0, "error too large: {}", err);
}

#[test]
fn test_mid_gray_is_dc_only() {
    let samples = vec![128u8; 16 * 16 * 3];
    let original = PixelBuffer::from_samples(&samples, Dimensions::new(16, 16), 3).unwrap();
    let encoder = Encoder::new(EncoderOptions::new().threshold(2).band_cutoff(5));

    let artifact = encoder.encode(&original).unwrap();

    // Mid-gray centers to zero: every quantized luminance coefficient,
    // including the DC term, vanishes
    assert_eq!(artifact.luma.nnz(), 0);
    assert_eq!(artifact.luma_sparsity(), 1.0);

    let restored = Decoder::new().decode(&artifact).unwrap();
    for row in 0..16 {
        for col in 0..16 {
            let [r, g, b] = restored.get(col, row);
            assert!((r - 128.0).abs() < 1.0, "r = {}", r);
            assert!((g - 128.0).abs() < 1.0, "g = {}", g);
            assert!((b - 128.0).abs() < 1.0, "b = {}", b);
        }
    }
}

#[test]
fn test_threshold_monotonicity() {
    // Raising the threshold never decreases the number of zero entries
    let original = gradient_image(64, 64);
    let total = 64 * 64;

    let mut prev_zeros = 0usize;
    for threshold in [0u16, 1, 2, 4, 8, 16, 64] {
        let encoder = Encoder::new(EncoderOptions::new().threshold(threshold).band_cutoff(5));
        let artifact = encoder.encode(&original).unwrap();
        let zeros = total - artifact.luma.nnz();
        println!("threshold {:3}: {} zeros", threshold, zeros);
        assert!(
            zeros >= prev_zeros,
            "threshold {} decreased zeros: {} -> {}",
            threshold,
            prev_zeros,
            zeros
        );
        prev_zeros = zeros;
    }
}

#[test]
fn test_sparsity_bounds() {
    let original = gradient_image(32, 32);

    for threshold in [0u16, 2, 10] {
        let encoder = Encoder::new(EncoderOptions::new().threshold(threshold).band_cutoff(5));
        let artifact = encoder.encode(&original).unwrap();
        let s = artifact.luma_sparsity();
        assert!((0.0..=1.0).contains(&s), "sparsity {} out of range", s);
    }

    // Beyond the largest possible quantized magnitude everything vanishes
    let encoder = Encoder::new(EncoderOptions::new().threshold(2048).band_cutoff(8));
    let artifact = encoder.encode(&original).unwrap();
    assert_eq!(artifact.luma_sparsity(), 1.0);
}

#[test]
fn test_cropping_drops_margin() {
    // A 9x9 input is trimmed to 8x8 before any transform
    let original = gradient_image(9, 9);
    let artifact = Encoder::default().encode(&original).unwrap();
    assert_eq!(artifact.dimensions, Dimensions::new(8, 8));

    let restored = Decoder::new().decode(&artifact).unwrap();
    assert_eq!(restored.dimensions, Dimensions::new(8, 8));
}

#[test]
fn test_compression_ratio_reporting() {
    let original = gradient_image(64, 64);
    let encoder = Encoder::new(EncoderOptions::new().threshold(4).band_cutoff(3));
    let artifact = encoder.encode(&original).unwrap();

    let ratio = artifact.compression_ratio(1);
    println!(
        "compressed {} bytes, ratio {:.2}, luma sparsity {:.3}",
        artifact.compressed_bytes(),
        ratio,
        artifact.luma_sparsity()
    );
    assert!(ratio > 0.0);
    assert!(artifact.compressed_bytes() > 0);
}
