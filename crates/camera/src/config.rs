use std::f32::consts::FRAC_PI_2;

use cuberoll_common::{ConfigError, require_positive, require_range};
use serde::{Deserialize, Serialize};

/// How far the camera may tilt above or below the horizon.
///
/// One policy is picked per deployment; they are never blended. Every bound
/// stays strictly inside (-pi/2, pi/2) because at a pole the look direction
/// has no horizontal component to derive a facing from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PitchPolicy {
    /// Stays above the floor and short of straight down: [0.1, pi/2 - 0.3].
    #[default]
    FloorAvoiding,
    /// Nearly a full hemisphere either way, stopping just short of the poles.
    FreeOrbit,
    Custom { min: f32, max: f32 },
}

const POLE_MARGIN: f32 = 0.01;

impl PitchPolicy {
    /// `(min, max)` pitch in radians.
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Self::FloorAvoiding => (0.1, FRAC_PI_2 - 0.3),
            Self::FreeOrbit => (-(FRAC_PI_2 - POLE_MARGIN), FRAC_PI_2 - POLE_MARGIN),
            Self::Custom { min, max } => (min, max),
        }
    }

    pub fn validate(self) -> Result<(), ConfigError> {
        let (min, max) = self.bounds();
        require_range("camera.pitch", min, max)?;
        for value in [min, max] {
            if value.abs() >= FRAC_PI_2 {
                return Err(ConfigError::PitchOutOfRange { value });
            }
        }
        Ok(())
    }
}

/// Orbit camera tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Radians per pixel of drag.
    pub sensitivity: f32,
    /// Distance units per scroll notch.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub pitch: PitchPolicy,
    /// Fraction of the remaining gap to the follow point closed per second.
    pub follow_rate: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Initial world-space eye position. Yaw, pitch and distance are derived
    /// from it and the cube's start position.
    pub eye: glam::Vec3,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.003,
            zoom_speed: 1.0,
            min_distance: 5.0,
            max_distance: 20.0,
            pitch: PitchPolicy::default(),
            follow_rate: 2.5,
            fov_y_degrees: 45.0,
            eye: glam::Vec3::new(6.0, 6.0, 2.0),
        }
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("camera.sensitivity", self.sensitivity)?;
        require_positive("camera.zoom_speed", self.zoom_speed)?;
        require_positive("camera.min_distance", self.min_distance)?;
        require_range("camera.distance", self.min_distance, self.max_distance)?;
        require_positive("camera.follow_rate", self.follow_rate)?;
        require_positive("camera.fov_y_degrees", self.fov_y_degrees)?;
        self.pitch.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_floor_avoiding_and_valid() {
        let config = OrbitConfig::default();
        assert_eq!(config.pitch, PitchPolicy::FloorAvoiding);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builtin_policies_stay_off_the_poles() {
        for policy in [PitchPolicy::FloorAvoiding, PitchPolicy::FreeOrbit] {
            let (min, max) = policy.bounds();
            assert!(min > -FRAC_PI_2 && max < FRAC_PI_2);
            assert!(policy.validate().is_ok());
        }
    }

    #[test]
    fn pole_bounds_are_rejected() {
        let policy = PitchPolicy::Custom {
            min: -FRAC_PI_2,
            max: 0.5,
        };
        assert!(matches!(
            policy.validate(),
            Err(ConfigError::PitchOutOfRange { .. })
        ));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let config = OrbitConfig {
            min_distance: 10.0,
            max_distance: 2.0,
            ..OrbitConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
        let policy = PitchPolicy::Custom { min: 0.5, max: 0.2 };
        assert!(policy.validate().is_err());
    }
}
