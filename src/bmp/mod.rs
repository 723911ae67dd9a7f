//! Uncompressed 24-bit bitmap output
//!
//! Writes an RGB888 pixel buffer as a bottom-up BMP with a BITMAPINFOHEADER.

mod writer;

pub use writer::*;
