//! Scene loading and saving

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use super::SceneConfig;

/// Error type for scene loading
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneConfig, SceneError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_scene_from_str(&contents)
}

/// Load a scene from a RON string
pub fn load_scene_from_str(s: &str) -> Result<SceneConfig, SceneError> {
    Ok(ron::from_str(s)?)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &SceneConfig, path: P) -> Result<(), SceneError> {
    let path = path.as_ref();
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(scene, config)?;
    fs::write(path, contents).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
