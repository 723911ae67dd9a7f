//! Scene description: canvas, triangle and output destination
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

mod config;
mod io;

pub use config::*;
pub use io::*;
