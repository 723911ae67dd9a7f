//! Edge-function triangle rasterizer
//!
//! Features:
//! - Three linear edge functions per triangle
//! - Strict inside test (pixels exactly on an edge are left alone)
//! - Barycentric-style weights from edge distances
//! - Corner color interpolation with truncating channel conversion

mod math;
mod types;
mod render;

pub use math::*;
pub use types::*;
pub use render::*;

/// Default canvas dimensions
pub const WIDTH: usize = 512;
pub const HEIGHT: usize = 512;
