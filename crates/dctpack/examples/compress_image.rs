//! Example demonstrating the full compression pipeline on a PNG/JPEG file
//!
//! Usage: cargo run --example compress_image -- <input> [threshold]
//!
//! Encodes the image at the given threshold, prints compression metrics,
//! writes the artifact archive next to the input, and saves the
//! reconstructed image for visual comparison.

use dctpack::{write_archive, Decoder, Dimensions, Encoder, EncoderOptions, PixelBuffer};
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| {
        eprintln!("usage: compress_image <input> [threshold]");
        std::process::exit(2);
    });
    let threshold: u16 = args.next().map(|t| t.parse()).transpose()?.unwrap_or(2);

    println!("Loading {}...", input);
    let loaded = image::open(&input)?.to_rgb8();
    let (width, height) = loaded.dimensions();
    println!("Image is {}x{}", width, height);

    let pixels = PixelBuffer::from_samples(
        loaded.as_raw(),
        Dimensions::new(width, height),
        3,
    )?;

    println!("\nEncoding with threshold {}...", threshold);
    let encoder = Encoder::new(EncoderOptions::new().threshold(threshold));
    let artifact = encoder.encode(&pixels)?;

    println!(
        "Trimmed to {}x{}",
        artifact.dimensions.width, artifact.dimensions.height
    );
    println!("Luminance sparsity: {:.1}%", artifact.luma_sparsity() * 100.0);
    println!("Compressed size: {} bytes", artifact.compressed_bytes());
    println!(
        "Compression ratio vs raw u8: {:.2}x",
        artifact.compression_ratio(1)
    );

    let archive_path = format!("{}.dcpk", input);
    let mut writer = BufWriter::new(File::create(&archive_path)?);
    write_archive(&artifact, &mut writer)?;
    println!("Artifact archive written to {}", archive_path);

    println!("\nDecoding...");
    let restored = Decoder::new().decode(&artifact)?;
    let out_samples: Vec<u8> = restored.to_samples();
    let out_path = format!("{}.restored.png", input);
    image::RgbImage::from_raw(
        restored.dimensions.width,
        restored.dimensions.height,
        out_samples,
    )
    .expect("buffer size matches dimensions")
    .save(&out_path)?;
    println!("Reconstruction written to {}", out_path);

    Ok(())
}
