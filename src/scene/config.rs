//! Scene configuration types

use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use crate::rasterizer::{Color, Triangle, Vec2, HEIGHT, WIDTH};

/// Default output file
pub const DEFAULT_OUTPUT: &str = "result.bmp";

/// Everything needed to render one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Triangle corners in pixel coordinates (y down)
    pub vertices: [Vec2; 3],
    /// Corner colors, blended by each pixel's weights
    pub colors: [Color; 3],
    /// Fill for pixels outside the triangle
    pub background: Color,
    /// Where the bitmap is written
    pub output: PathBuf,
}

impl SceneConfig {
    /// Triangle inscribed in a `width` x `height` canvas: top middle,
    /// bottom left, right middle, each on a pixel center
    pub fn inscribed(width: usize, height: usize) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self {
            width,
            height,
            vertices: [
                Vec2::new(w / 2.0 - 0.5, 0.5),
                Vec2::new(0.5, h - 0.5),
                Vec2::new(w - 0.5, h / 2.0 - 0.5),
            ],
            colors: [Color::RED, Color::GREEN, Color::BLUE],
            background: Color::BLACK,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn triangle(&self) -> Triangle {
        Triangle::from_vertices(self.vertices)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::inscribed(WIDTH, HEIGHT)
    }
}
