//! Minimal PNG emitter
//!
//! Packs a truecolor, non-interlaced PNG by hand: signature, one IHDR chunk,
//! a single zlib-compressed IDAT chunk, and IEND. Every scanline uses filter
//! type 0, which is all a solid-color placeholder needs.

use anyhow::{Context, Result};
use flate2::{write::ZlibEncoder, Compression};
use image::Rgb;
use log::debug;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// The fixed 8-byte PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_TRUECOLOR: u8 = 2;
const FILTER_NONE: u8 = 0;

/// Serialize one chunk: payload length, tag, payload, then CRC-32 of tag and payload
pub fn build_chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    let checksum = hasher.finalize();

    let mut chunk = Vec::with_capacity(12 + payload.len());
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(tag);
    chunk.extend_from_slice(payload);
    chunk.extend_from_slice(&checksum.to_be_bytes());
    chunk
}

/// Render a `width` x `height` PNG filled with `color`
///
/// The output is deterministic: identical inputs always produce identical bytes.
pub fn render_image(width: u32, height: u32, color: Rgb<u8>) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        anyhow::bail!("Image dimensions must be positive, got {width}x{height}");
    }

    let mut png_data = PNG_SIGNATURE.to_vec();

    // IHDR
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_TRUECOLOR, 0, 0, 0]);
    png_data.extend(build_chunk(b"IHDR", &ihdr));

    // IDAT
    let raw_data = solid_scanlines(width, height, color);
    let idat = compress(&raw_data)?;
    debug!(
        "{width}x{height}: {} raw bytes deflated to {}",
        raw_data.len(),
        idat.len()
    );
    png_data.extend(build_chunk(b"IDAT", &idat));

    // IEND
    png_data.extend(build_chunk(b"IEND", &[]));

    Ok(png_data)
}

/// Render a square icon of `size` pixels and write it to `path`
///
/// Existing files are overwritten. Parent directories are not created.
pub fn write_icon(size: u32, color: Rgb<u8>, path: &Path) -> Result<()> {
    let png_data = render_image(size, size, color)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    out_file
        .write_all(&png_data)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    debug!("Wrote {} bytes to {}", png_data.len(), path.display());
    Ok(())
}

/// Raw image data: each row is a filter byte followed by `width` pixels
fn solid_scanlines(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
    let row_len = 1 + 3 * width as usize;
    let mut row = Vec::with_capacity(row_len);
    row.push(FILTER_NONE);
    for _ in 0..width {
        row.extend_from_slice(&color.0);
    }

    row.repeat(height as usize)
}

fn compress(raw_data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(raw_data)
        .context("Failed to compress image data")?;
    encoder.finish().context("Failed to finish zlib stream")
}
