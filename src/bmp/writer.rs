//! BMP encoding and saving
//!
//! Layout: 14-byte file header, 40-byte info header, then pixel rows stored
//! bottom-to-top as B, G, R triples, each row zero-padded to 4 bytes.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rasterizer::PixelBuffer;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the pixel data from the start of the file
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const SIGNATURE: [u8; 2] = *b"BM";
const PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 24;

/// Error type for saving bitmaps
#[derive(Debug, Error)]
pub enum BmpError {
    #[error("Failed to open file '{}': {source}", .path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Canvas {width}x{height} does not fit in a bitmap header")]
    Dimensions { width: usize, height: usize },
}

/// Zero bytes appended to each row so rows start on 4-byte boundaries
pub fn row_padding(width: usize) -> usize {
    (4 - (width % 4) * 3 % 4) % 4
}

/// Total encoded size in bytes, or `None` if it overflows `usize`
pub fn file_size(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(3)?
        .checked_add(row_padding(width))?
        .checked_mul(height)?
        .checked_add(HEADER_SIZE)
}

/// File header plus BITMAPINFOHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub width: i32,
    pub height: i32,
}

impl BmpHeader {
    /// Header for a buffer of the given size
    ///
    /// Fails when the width or height overflows `i32` or the file size overflows `u32`.
    pub fn new(width: usize, height: usize) -> Result<Self, BmpError> {
        let too_large = || BmpError::Dimensions { width, height };
        let size = file_size(width, height).ok_or_else(too_large)?;
        Ok(Self {
            file_size: u32::try_from(size).map_err(|_| too_large())?,
            width: i32::try_from(width).map_err(|_| too_large())?,
            height: i32::try_from(height).map_err(|_| too_large())?,
        })
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        // BITMAPFILEHEADER
        out.extend_from_slice(&SIGNATURE);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // reserved
        out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes());

        // BITMAPINFOHEADER
        out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&PLANES.to_le_bytes());
        out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
        out.extend_from_slice(&0u32.to_le_bytes()); // image size
        out.extend_from_slice(&0i32.to_le_bytes()); // x pixels per meter
        out.extend_from_slice(&0i32.to_le_bytes()); // y pixels per meter
        out.extend_from_slice(&0u32.to_le_bytes()); // colors used
        out.extend_from_slice(&0u32.to_le_bytes()); // important colors
    }
}

/// Encode the buffer as a complete BMP byte stream
pub fn encode_bmp(fb: &PixelBuffer) -> Result<Vec<u8>, BmpError> {
    let header = BmpHeader::new(fb.width, fb.height)?;
    let padding = [0u8; 3];
    let pad = row_padding(fb.width);

    let mut bytes = Vec::with_capacity(header.file_size as usize);
    header.write_to(&mut bytes);

    for y in (0..fb.height).rev() {
        for px in fb.row(y).chunks_exact(3) {
            bytes.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        bytes.extend_from_slice(&padding[..pad]);
    }

    Ok(bytes)
}

/// Encode the buffer and write it to `path`
///
/// The byte stream is built before the file is opened, so a destination that
/// cannot be opened leaves nothing behind. Returns the number of bytes written.
pub fn save_bmp<P: AsRef<Path>>(fb: &PixelBuffer, path: P) -> Result<usize, BmpError> {
    let path = path.as_ref();
    let bytes = encode_bmp(fb)?;

    let mut file = File::create(path).map_err(|source| BmpError::DestinationUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&bytes).map_err(|source| BmpError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bytes.len())
}
