//! Core types for the rasterizer

use serde::{Serialize, Deserialize};
use super::math::{Edge, Vec2};

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    #[cfg(test)]
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend three corner colors by weight.
    ///
    /// Channels are truncated toward zero, never rounded. With pure red, green
    /// and blue corners this is exactly `(i * 255) as u8` per channel.
    pub fn blend(corners: &[Color; 3], w: Weights) -> Self {
        let mix = |c0: u8, c1: u8, c2: u8| {
            (w.i * c0 as f32 + w.j * c1 as f32 + w.k * c2 as f32) as u8
        };
        let [c0, c1, c2] = corners;
        Self::new(
            mix(c0.r, c1.r, c2.r),
            mix(c0.g, c1.g, c2.g),
            mix(c0.b, c1.b, c2.b),
        )
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Barycentric-style weights of a point, one per vertex
///
/// `i` peaks at v0, `j` at v1, `k` at v2. They sum to 1 for any point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub i: f32,
    pub j: f32,
    pub k: f32,
}

/// A triangle prepared for rasterization
///
/// Edges are built as `(v2, v1)`, `(v0, v2)`, `(v1, v0)`. Each edge is opposite
/// the vertex whose weight it produces, and interior points evaluate strictly
/// positive against all three for the y-down winding used by the default scene.
/// Reversing the pairing flips the inside test.
///
/// The area is not validated: a zero-area triangle divides by zero when
/// weighting, and an inverted winding covers no pixels.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
    pub edges: [Edge; 3],
    /// Twice the signed area (sum of the edge offsets)
    pub area: f32,
}

impl Triangle {
    pub fn new(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        let edges = [
            Edge::new(v2, v1),
            Edge::new(v0, v2),
            Edge::new(v1, v0),
        ];
        let area = edges[0].c + edges[1].c + edges[2].c;
        Self {
            vertices: [v0, v1, v2],
            edges,
            area,
        }
    }

    pub fn from_vertices(vertices: [Vec2; 3]) -> Self {
        let [v0, v1, v2] = vertices;
        Self::new(v0, v1, v2)
    }

    /// Signed distances of `p` from the three edges
    pub fn distances(&self, p: Vec2) -> [f32; 3] {
        [
            self.edges[0].eval(p),
            self.edges[1].eval(p),
            self.edges[2].eval(p),
        ]
    }

    /// Weights of `p` whether or not it is inside
    pub fn weights(&self, p: Vec2) -> Weights {
        let [d0, d1, d2] = self.distances(p);
        Weights {
            i: d0 / self.area,
            j: d1 / self.area,
            k: d2 / self.area,
        }
    }

    /// Strict inside test; points on an edge are outside
    pub fn contains(&self, p: Vec2) -> bool {
        let [d0, d1, d2] = self.distances(p);
        d0 > 0.0 && d1 > 0.0 && d2 > 0.0
    }

    /// Weights of `p` if it is strictly inside the triangle
    pub fn coverage(&self, p: Vec2) -> Option<Weights> {
        self.contains(p).then(|| self.weights(p))
    }
}
