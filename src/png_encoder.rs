//! Minimal PNG writer for 8-bit RGBA images
//!
//! Produces the smallest valid PNG layout: the signature followed by one
//! `IHDR`, one `IDAT` and an empty `IEND`. Scanlines use filter type 0 (none)
//! and the image is never interlaced.

use crate::{
    error::{IconError, IconResult},
    pixel::{Pixel, PixelGrid},
};
use flate2::{write::ZlibEncoder, Compression, Crc};
use log::debug;
use std::io::Write;

/// The 8 bytes every PNG file starts with
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Bytes per RGBA8 pixel
const BYTES_PER_PIXEL: usize = 4;
/// Scanline filter type "none"
const FILTER_NONE: u8 = 0;

/// A typed, length-prefixed, CRC-checked PNG segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: [u8; 4],
    pub payload: Vec<u8>,
}

impl Chunk {
    pub fn new(kind: &[u8; 4], payload: Vec<u8>) -> Self {
        Self {
            kind: *kind,
            payload,
        }
    }

    /// CRC-32 over the chunk type followed by the payload
    pub fn crc(&self) -> u32 {
        let mut crc = Crc::new();
        crc.update(&self.kind);
        crc.update(&self.payload);
        crc.sum()
    }

    /// Length (big-endian) + type + payload + CRC (big-endian)
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.payload.len() + 12);
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.kind);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.crc().to_be_bytes());
    }
}

/// Contents of the `IHDR` chunk for an RGBA8, non-interlaced image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
}

impl ImageHeader {
    const BIT_DEPTH: u8 = 8;
    /// Truecolour with alpha
    const COLOR_TYPE_RGBA: u8 = 6;
    const COMPRESSION_DEFLATE: u8 = 0;
    const FILTER_ADAPTIVE: u8 = 0;
    const INTERLACE_NONE: u8 = 0;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn payload(&self) -> [u8; 13] {
        let mut out = [0u8; 13];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = Self::BIT_DEPTH;
        out[9] = Self::COLOR_TYPE_RGBA;
        out[10] = Self::COMPRESSION_DEFLATE;
        out[11] = Self::FILTER_ADAPTIVE;
        out[12] = Self::INTERLACE_NONE;
        out
    }

    fn to_chunk(self) -> Chunk {
        Chunk::new(b"IHDR", self.payload().to_vec())
    }
}

/// Unfiltered scanlines: each row is a `0` filter byte followed by RGBA
/// quadruples. Positions missing from `grid` are written as transparent white.
pub fn raw_scanlines(width: u32, height: u32, grid: &PixelGrid) -> Vec<u8> {
    let row_len = 1 + width as usize * BYTES_PER_PIXEL;
    let mut raw = Vec::with_capacity(row_len * height as usize);

    for y in 0..height {
        raw.push(FILTER_NONE);
        for x in 0..width {
            let pixel = grid.get(x, y).unwrap_or(Pixel::TRANSPARENT_WHITE);
            raw.extend_from_slice(&pixel.to_bytes());
        }
    }

    raw
}

/// Zlib-compresses `data` at the default level
pub fn compress(data: &[u8]) -> IconResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(IconError::Compression)?;
    encoder.finish().map_err(IconError::Compression)
}

/// Encodes `grid` as a complete PNG file.
///
/// `width` and `height` are written to `IHDR` as given; the grid is sampled at
/// those dimensions.
pub fn encode_png(width: u32, height: u32, grid: &PixelGrid) -> IconResult<Vec<u8>> {
    let raw = raw_scanlines(width, height, grid);
    let compressed = compress(&raw)?;
    debug!(
        "Encoding {width}x{height} PNG: {} raw bytes -> {} compressed",
        raw.len(),
        compressed.len()
    );

    let chunks = [
        ImageHeader::new(width, height).to_chunk(),
        Chunk::new(b"IDAT", compressed),
        Chunk::new(b"IEND", Vec::new()),
    ];

    let total = PNG_SIGNATURE.len()
        + chunks
            .iter()
            .map(|chunk| chunk.payload.len() + 12)
            .sum::<usize>();
    let mut png = Vec::with_capacity(total);
    png.extend_from_slice(&PNG_SIGNATURE);
    for chunk in &chunks {
        chunk.write_into(&mut png);
    }

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    /// Splits an encoded PNG (after the signature) into its chunks, checking
    /// framing as it goes
    fn parse_chunks(mut bytes: &[u8]) -> Vec<(Chunk, u32)> {
        let mut chunks = Vec::new();
        while !bytes.is_empty() {
            let len = u32::from_be_bytes(bytes[0..4].try_into().unwrap()) as usize;
            let kind: [u8; 4] = bytes[4..8].try_into().unwrap();
            let payload = bytes[8..8 + len].to_vec();
            let stored_crc = u32::from_be_bytes(bytes[8 + len..12 + len].try_into().unwrap());
            chunks.push((Chunk { kind, payload }, stored_crc));
            bytes = &bytes[12 + len..];
        }
        chunks
    }

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_iend_matches_reference_bytes() {
        let iend = Chunk::new(b"IEND", Vec::new()).serialize();
        assert_eq!(iend, [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
    }

    #[test]
    fn test_ihdr_payload() {
        let payload = ImageHeader::new(16, 300).payload();
        assert_eq!(payload, [0, 0, 0, 16, 0, 0, 1, 44, 8, 6, 0, 0, 0]);
    }

    #[test]
    fn test_encoded_layout_and_crcs() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Pixel::new(x as u8, y as u8, 7, 200));
        let png = encode_png(3, 2, &grid).unwrap();

        assert_eq!(png[..8], PNG_SIGNATURE);
        let chunks = parse_chunks(&png[8..]);
        let kinds: Vec<&[u8]> = chunks.iter().map(|(c, _)| &c.kind[..]).collect();
        assert_eq!(kinds, [&b"IHDR"[..], b"IDAT", b"IEND"]);

        for (chunk, stored_crc) in &chunks {
            assert_eq!(chunk.crc(), *stored_crc);
        }
        assert_eq!(chunks[0].0.payload, ImageHeader::new(3, 2).payload());
        assert!(chunks[2].0.payload.is_empty());
    }

    #[test]
    fn test_idat_inflates_to_unfiltered_scanlines() {
        let grid = PixelGrid::from_fn(2, 2, |x, y| Pixel::opaque(x as u8, y as u8, 9));
        let png = encode_png(2, 2, &grid).unwrap();
        let chunks = parse_chunks(&png[8..]);

        assert_eq!(
            inflate(&chunks[1].0.payload),
            [
                0, 0, 0, 9, 255, 1, 0, 9, 255, //
                0, 0, 1, 9, 255, 1, 1, 9, 255,
            ]
        );
    }

    #[test]
    fn test_missing_pixels_become_transparent_white() {
        let grid = PixelGrid::from_rows(vec![vec![Pixel::opaque(1, 2, 3)]]);
        let raw = raw_scanlines(2, 2, &grid);
        assert_eq!(
            raw,
            [
                0, 1, 2, 3, 255, 255, 255, 255, 0, //
                0, 255, 255, 255, 0, 255, 255, 255, 0,
            ]
        );
    }

    #[test]
    fn test_compress_round_trips() {
        let data = b"scanline scanline scanline".repeat(10);
        assert_eq!(inflate(&compress(&data).unwrap()), data);
    }
}
