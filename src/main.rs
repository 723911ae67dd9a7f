//! Edge Raster: single-triangle software rasterizer
//!
//! Fills a triangle on a CPU pixel buffer using edge functions:
//! - Three edge functions, strict inside test
//! - Barycentric weights from edge distances, blended corner colors
//! - Uncompressed 24-bit BMP output

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod rasterizer;
mod bmp;
mod scene;
mod app;

use clap::Parser;
use scene::{load_scene, save_scene, SceneConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Largest canvas side accepted on the command line
const MAX_DIMENSION: i64 = 16384;

#[derive(Parser, Debug)]
#[command(name = "edge-raster", version, about = "Rasterize a triangle into a BMP file")]
struct Args {
    /// Scene file (RON); the built-in 512x512 scene is used when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Output bitmap path (overrides the scene)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Canvas width; without --scene the triangle is re-inscribed
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION))]
    width: Option<u32>,

    /// Canvas height; without --scene the triangle is re-inscribed
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION))]
    height: Option<u32>,

    /// Write the effective scene as RON before rendering
    #[arg(long)]
    save_scene: Option<PathBuf>,
}

/// Build the scene from the command line
fn resolve_scene(args: &Args) -> Result<SceneConfig, app::AppError> {
    let width = args.width.map(|w| w as usize);
    let height = args.height.map(|h| h as usize);

    let mut scene = match &args.scene {
        Some(path) => {
            log::info!("Loading scene {}", path.display());
            load_scene(path)?
        }
        None => {
            let defaults = SceneConfig::default();
            SceneConfig::inscribed(
                width.unwrap_or(defaults.width),
                height.unwrap_or(defaults.height),
            )
        }
    };

    if args.scene.is_some() {
        if let Some(width) = width {
            scene.width = width;
        }
        if let Some(height) = height {
            scene.height = height;
        }
    }
    if let Some(output) = &args.output {
        scene.output = output.clone();
    }

    if let Some(path) = &args.save_scene {
        save_scene(&scene, path)?;
        log::info!("Saved scene to {}", path.display());
    }

    Ok(scene)
}

/// Print the failure regardless of the log filter and pick the exit code
fn report_failure<W: Write>(err: &app::AppError, out: &mut W) -> ExitCode {
    let _ = writeln!(out, "{}", err);
    err.exit_code()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::debug!("edge-raster v{} {:?}", VERSION, args);

    match resolve_scene(&args).and_then(|scene| app::run(&scene)) {
        Ok(summary) => {
            println!(
                "{}: {} bytes, {} pixels covered",
                summary.output.display(),
                summary.bytes_written,
                summary.stats.covered
            );
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e, &mut std::io::stderr()),
    }
}
