//! Core rendering functions
//! Per-pixel edge tests and color interpolation

use super::math::Vec2;
use super::types::{Color, Triangle};

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

/// Row-major RGB888 pixel buffer
pub struct PixelBuffer {
    pub pixels: Vec<u8>, // RGB, 3 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl PixelBuffer {
    /// Allocate a buffer cleared to black
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 3],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&color.to_bytes());
        }
    }

    /// Bytes per row (no padding in memory)
    pub fn stride(&self) -> usize {
        self.width * 3
    }

    /// One row of pixels as RGB bytes
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.stride();
        &self.pixels[y * stride..(y + 1) * stride]
    }
}

#[cfg(test)]
impl PixelBuffer {
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 3;
            Some(Color::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]))
        } else {
            None
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 3;
            self.pixels[idx..idx + 3].copy_from_slice(&color.to_bytes());
        }
    }
}

/// Counters gathered while rasterizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pixels whose center was strictly inside the triangle
    pub covered: usize,
    /// Pixels visited
    pub visited: usize,
}

/// Shade one row; returns how many pixels were covered
fn shade_row(row: &mut [u8], y: usize, tri: &Triangle, colors: &[Color; 3]) -> usize {
    let mut covered = 0;
    for (x, px) in row.chunks_exact_mut(3).enumerate() {
        let p = Vec2::pixel_center(x, y);
        if let Some(w) = tri.coverage(p) {
            px.copy_from_slice(&Color::blend(colors, w).to_bytes());
            covered += 1;
        }
        // Outside pixels keep whatever the buffer already holds
    }
    covered
}

/// Rasterize a single triangle into the buffer
///
/// Every pixel center `(x + 0.5, y + 0.5)` is tested against the three edges.
/// Covered pixels get the corner colors blended by their weights; the rest are
/// left untouched.
pub fn rasterize_triangle(fb: &mut PixelBuffer, tri: &Triangle, colors: &[Color; 3]) -> RenderStats {
    let stride = fb.stride();
    let visited = fb.width * fb.height;
    if stride == 0 {
        return RenderStats { covered: 0, visited };
    }

    #[cfg(feature = "multithreading")]
    let covered: usize = fb
        .pixels
        .par_chunks_mut(stride)
        .enumerate()
        .map(|(y, row)| shade_row(row, y, tri, colors))
        .sum();

    #[cfg(not(feature = "multithreading"))]
    let covered: usize = fb
        .pixels
        .chunks_mut(stride)
        .enumerate()
        .map(|(y, row)| shade_row(row, y, tri, colors))
        .sum();

    RenderStats { covered, visited }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{HEIGHT, WIDTH};

    const PRIMARIES: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

    fn render_default() -> (PixelBuffer, Triangle, RenderStats) {
        let tri = Triangle::new(
            Vec2::new(255.5, 0.5),
            Vec2::new(0.5, 511.5),
            Vec2::new(511.5, 255.5),
        );
        let mut fb = PixelBuffer::new(WIDTH, HEIGHT);
        let stats = rasterize_triangle(&mut fb, &tri, &PRIMARIES);
        (fb, tri, stats)
    }

    #[test]
    fn test_new_buffer_is_black() {
        let fb = PixelBuffer::new(4, 3);
        assert_eq!(fb.pixels.len(), 36);
        assert!(fb.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_indexing() {
        let mut fb = PixelBuffer::new(4, 3);
        fb.set_pixel(2, 1, Color::new(1, 2, 3));
        let idx = (4 + 2) * 3;
        assert_eq!(&fb.pixels[idx..idx + 3], &[1, 2, 3]);
        assert_eq!(fb.get_pixel(2, 1), Some(Color::new(1, 2, 3)));
        assert_eq!(fb.get_pixel(4, 0), None);
        // Out of bounds writes are dropped
        fb.set_pixel(0, 3, Color::WHITE);
        assert_eq!(fb.row(2), &[0; 12]);
    }

    #[test]
    fn test_center_pixel_colors() {
        let (fb, _, _) = render_default();
        // d = (64769, 65281, 65791) over an area of 195841
        assert_eq!(fb.get_pixel(256, 256), Some(Color::new(84, 85, 85)));
    }

    #[test]
    fn test_outside_pixels_stay_black() {
        let (fb, tri, stats) = render_default();
        let mut covered = 0;
        for y in 0..fb.height {
            for x in 0..fb.width {
                let color = fb.get_pixel(x, y).unwrap();
                if tri.contains(Vec2::pixel_center(x, y)) {
                    covered += 1;
                } else {
                    assert_eq!(color, Color::BLACK, "pixel ({}, {})", x, y);
                }
            }
        }
        assert_eq!(covered, stats.covered);
        assert_eq!(stats.visited, WIDTH * HEIGHT);
        // Corners of the canvas are outside
        assert_eq!(fb.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(511, 511), Some(Color::BLACK));
    }

    #[test]
    fn test_covered_pixels_match_truncated_weights() {
        let (fb, tri, _) = render_default();
        for (x, y) in [(256, 10), (20, 490), (490, 256), (200, 300), (300, 200)] {
            let p = Vec2::pixel_center(x, y);
            let w = tri.coverage(p).unwrap();
            let expected = Color::new(
                (w.i * 255.0) as u8,
                (w.j * 255.0) as u8,
                (w.k * 255.0) as u8,
            );
            assert_eq!(fb.get_pixel(x, y), Some(expected));
        }
    }

    #[test]
    fn test_pixels_on_edge_are_excluded() {
        // Legs on x = 0.5 and y = 0.5, hypotenuse on x + y = 9
        let tri = Triangle::new(
            Vec2::new(0.5, 0.5),
            Vec2::new(0.5, 8.5),
            Vec2::new(8.5, 0.5),
        );
        assert_eq!(tri.area, 64.0);

        let mut fb = PixelBuffer::new(10, 10);
        rasterize_triangle(&mut fb, &tri, &PRIMARIES);

        for i in 0..10 {
            assert_eq!(fb.get_pixel(0, i), Some(Color::BLACK));
            assert_eq!(fb.get_pixel(i, 0), Some(Color::BLACK));
        }
        // (4.5, 4.5) sits exactly on the hypotenuse
        assert_eq!(tri.distances(Vec2::pixel_center(4, 4))[0], 0.0);
        assert_eq!(fb.get_pixel(4, 4), Some(Color::BLACK));

        // d = (48, 8, 8)
        assert_eq!(fb.get_pixel(1, 1), Some(Color::new(191, 31, 31)));
    }

    #[test]
    fn test_existing_contents_outside_are_kept() {
        let tri = Triangle::new(
            Vec2::new(0.5, 0.5),
            Vec2::new(0.5, 8.5),
            Vec2::new(8.5, 0.5),
        );
        let mut fb = PixelBuffer::new(10, 10);
        fb.clear(Color::WHITE);
        rasterize_triangle(&mut fb, &tri, &PRIMARIES);
        assert_eq!(fb.get_pixel(9, 9), Some(Color::WHITE));
        assert_eq!(fb.get_pixel(1, 1), Some(Color::new(191, 31, 31)));
    }

    #[cfg(feature = "multithreading")]
    #[test]
    fn test_row_sharded_matches_per_pixel_reference() {
        let (fb, tri, stats) = render_default();

        let mut reference = PixelBuffer::new(WIDTH, HEIGHT);
        let mut covered = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if let Some(w) = tri.coverage(Vec2::pixel_center(x, y)) {
                    reference.set_pixel(x, y, Color::blend(&PRIMARIES, w));
                    covered += 1;
                }
            }
        }

        assert_eq!(stats.covered, covered);
        assert!(fb.pixels == reference.pixels);
    }

    #[test]
    fn test_empty_canvas() {
        let tri = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
        let mut fb = PixelBuffer::new(0, 0);
        let stats = rasterize_triangle(&mut fb, &tri, &PRIMARIES);
        assert_eq!(stats, RenderStats::default());
    }
}
