//! 2D math for edge-function rasterization

use std::ops::{Add, Sub};
use serde::{Serialize, Deserialize};

/// 2D point in image space (x to the right, y down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center of the pixel at column `x`, row `y`
    pub fn pixel_center(x: usize, y: usize) -> Self {
        Self {
            x: x as f32 + 0.5,
            y: y as f32 + 0.5,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Linear edge function `a*x + b*y + c`
///
/// Zero on the line through the two points it was built from, positive on one
/// side and negative on the other. The value is the perpendicular distance
/// scaled by the edge length, not a unit distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Edge {
    /// Build the edge function for the directed edge from `v1` to `v0`
    pub fn new(v0: Vec2, v1: Vec2) -> Self {
        Self {
            // a and b give the edge normal
            a: v0.y - v1.y,
            b: v1.x - v0.x,
            // offset term; summed over a triangle's edges it yields twice the area
            c: v0.x * v1.y - v0.y * v1.x,
        }
    }

    /// Signed distance of `point` from the edge
    pub fn eval(&self, point: Vec2) -> f32 {
        self.a * point.x + self.b * point.y + self.c
    }
}
