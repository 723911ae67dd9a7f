//! Render pipeline
//!
//! Scene in, bitmap out: allocate a black buffer, rasterize the triangle,
//! encode and write. Runs once, top to bottom.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use crate::bmp::{save_bmp, BmpError, BmpHeader};
use crate::rasterizer::{rasterize_triangle, Color, PixelBuffer, RenderStats};
use crate::scene::{SceneConfig, SceneError};

/// Anything that stops the pipeline
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Bitmap(#[from] BmpError),
}

impl AppError {
    /// Process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Bitmap(BmpError::Dimensions { .. }) => 2,
            AppError::Bitmap(_) => 1,
            AppError::Scene(_) => 2,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub bytes_written: usize,
    pub stats: RenderStats,
}

/// Rasterize the scene into a fresh buffer
pub fn render_scene(scene: &SceneConfig) -> (PixelBuffer, RenderStats) {
    let tri = scene.triangle();
    log::debug!("vertices: {:?}", tri.vertices);
    log::debug!("edges: {:?}", tri.edges);
    log::info!("Triangle area (x2): {}", tri.area);
    if tri.area <= 0.0 {
        // Not corrected: zero area divides by zero, negative area covers nothing
        log::warn!(
            "Triangle area is {}; vertices must be wound clockwise on screen with nonzero area",
            tri.area
        );
    }

    let mut fb = PixelBuffer::new(scene.width, scene.height);
    if scene.background != Color::BLACK {
        fb.clear(scene.background);
    }
    let stats = rasterize_triangle(&mut fb, &tri, &scene.colors);
    log::info!("Covered {} of {} pixels", stats.covered, stats.visited);
    (fb, stats)
}

/// Render the scene and write it to `scene.output`
pub fn run(scene: &SceneConfig) -> Result<RenderSummary, AppError> {
    log::info!("Rendering {}x{} canvas", scene.width, scene.height);
    // Reject canvases the header cannot describe before allocating the buffer
    BmpHeader::new(scene.width, scene.height)?;
    let (fb, stats) = render_scene(scene);

    let bytes_written = save_bmp(&fb, &scene.output)?;
    log::info!("Wrote {} ({} bytes)", scene.output.display(), bytes_written);

    Ok(RenderSummary {
        output: scene.output.clone(),
        bytes_written,
        stats,
    })
}
