//! Orbit camera: a third-person view locked onto the cube.
//!
//! # Invariants
//! - Pitch stays inside the configured policy bounds, never at a pole.
//! - Distance stays inside `[min_distance, max_distance]`.
//! - The eye position is derived, never stored.

mod config;
mod facing;
mod orbit;

pub use config::{OrbitConfig, PitchPolicy};
pub use facing::{FACING_EPSILON, resolve_facing};
pub use orbit::{CameraPose, OrbitCamera};

pub fn crate_info() -> &'static str {
    "cuberoll-camera v0.1.0"
}
