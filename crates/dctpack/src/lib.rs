//! # dctpack — demonstration lossy image codec
//!
//! Replicates the idea of block-transform compression: a BT.601 color
//! transform, an 8x8 DCT per tile, quantization with a magnitude threshold
//! and a frequency-band cutoff, and CSR packing of the (mostly zero)
//! quantized coefficients. Decoding inverts every stage except the
//! quantization, which permanently discards information.
//!
//! ## Quick Start
//!
//! ```
//! use dctpack::{Decoder, Dimensions, Encoder, EncoderOptions, PixelBuffer};
//!
//! let samples: Vec<u8> = (0..32 * 32 * 3).map(|i| (i % 256) as u8).collect();
//! let pixels = PixelBuffer::from_samples(&samples, Dimensions::new(32, 32), 3).unwrap();
//!
//! let encoder = Encoder::new(EncoderOptions::new().threshold(2).band_cutoff(5));
//! let artifact = encoder.encode(&pixels).unwrap();
//! println!("luma sparsity: {:.2}", artifact.luma_sparsity());
//!
//! let restored = Decoder::new().decode(&artifact).unwrap();
//! assert_eq!(restored.dimensions, pixels.dimensions);
//! ```
//!
//! Not a general-purpose image format: no entropy coding, no
//! multi-resolution, no compatibility with any standard codec.

pub use dctpack_codec::{
    read_archive, write_archive, Artifact, ChromaChannels, Decoder, Encoder, EncoderOptions,
};
pub use dctpack_color::{merge_ycbcr, rgb_to_ycbcr, split_ycbcr, ycbcr_to_rgb};
pub use dctpack_core::{
    ChromaMode, CoeffPlane, Dimensions, PackError, PackResult, PixelBuffer, Plane, Sample,
};
pub use dctpack_sparse::CsrMatrix;
pub use dctpack_transform::{
    dequantize_block, forward_block, inverse_block, quantize_block, QuantTable, LUMA_QUANT_TABLE,
    MAX_QUANT_STEP,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
