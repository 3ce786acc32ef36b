//! Codec orchestration: encoder, decoder, artifact, and archive I/O
//!
//! Composes the color transform, block DCT, quantizer, and CSR packer into
//! `encode(pixels) -> Artifact` and `decode(&Artifact) -> pixels`.

pub mod archive;
pub mod artifact;
pub mod decoder;
pub mod encoder;
mod pipeline;

pub use archive::{read_archive, write_archive};
pub use artifact::{Artifact, ChromaChannels};
pub use decoder::Decoder;
pub use encoder::{Encoder, EncoderOptions};
