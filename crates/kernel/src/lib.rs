//! Scene kernel: owns the cube and camera and steps them once per frame.
//!
//! # Invariants
//! - Frame order: camera angles, facing, command intake, roll advance,
//!   camera follow, output.
//! - Configuration is validated before any state exists.
//! - Every discrete change is recorded as a [`SceneEvent`].

mod config;
mod scene;

pub use config::{LoadError, SceneConfig};
pub use scene::{DebugValues, FrameOutput, Scene, SceneEvent};

pub fn crate_info() -> &'static str {
    "cuberoll-kernel v0.1.0"
}
