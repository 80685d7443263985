use cuberoll_common::{Cardinal, ConfigError, require_finite, require_positive};
use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Cube geometry, starting placement and roll speeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Edge length. One roll moves the cube by exactly one edge length.
    pub size: f32,
    /// World (x, z) of the center of cell (0, 0).
    pub origin: Vec2,
    pub start_cell: IVec2,
    pub start_facing: Cardinal,
    /// Progress units per second at normal speed.
    pub normal_speed: f32,
    /// Progress units per second while boosting.
    pub fast_speed: f32,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            // Cube sits inside the unit square next to the origin, not on a grid line.
            origin: Vec2::new(0.5, 0.5),
            start_cell: IVec2::ZERO,
            start_facing: Cardinal::NegX,
            normal_speed: 2.5,
            fast_speed: 4.5,
        }
    }
}

impl CubeConfig {
    /// Reject configurations that would stall or corrupt the roll animation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("cube.size", self.size)?;
        require_finite("cube.origin.x", self.origin.x)?;
        require_finite("cube.origin.y", self.origin.y)?;
        require_positive("cube.normal_speed", self.normal_speed)?;
        require_positive("cube.fast_speed", self.fast_speed)?;
        Ok(())
    }
}
