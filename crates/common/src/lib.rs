//! Shared vocabulary for the rolling cube workspace.
//!
//! # Invariants
//! - A [`Cardinal`] is never diagonal.
//! - Configuration is validated once, at construction, via [`ConfigError`].

mod error;
mod types;

pub use error::{ConfigError, require_finite, require_positive, require_range};
pub use types::{Cardinal, MoveCommand};

/// World up axis shared by the camera and the roll table.
pub const UP: glam::Vec3 = glam::Vec3::Y;

pub fn crate_info() -> &'static str {
    "cuberoll-common v0.1.0"
}
