use cuberoll_common::{Cardinal, ConfigError, UP};
use glam::{Mat4, Vec3};

use crate::config::OrbitConfig;
use crate::facing::resolve_facing;

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Everything a renderer needs to set up its view for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl CameraPose {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, NEAR, FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Third-person camera orbiting a moving target.
///
/// Only the target and the spherical coordinates are stored; the eye
/// position is recomputed on every read so it can never fall out of sync.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    config: OrbitConfig,
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl OrbitCamera {
    /// Build a camera from explicit spherical coordinates, clamped to the
    /// configured bounds.
    pub fn new(
        config: OrbitConfig,
        target: Vec3,
        yaw: f32,
        pitch: f32,
        distance: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (min_pitch, max_pitch) = config.pitch.bounds();
        Ok(Self {
            pitch: pitch.clamp(min_pitch, max_pitch),
            distance: distance.clamp(config.min_distance, config.max_distance),
            config,
            target,
            yaw,
        })
    }

    /// Build a camera looking at `target` from the configured eye position.
    pub fn looking_at(config: OrbitConfig, target: Vec3) -> Result<Self, ConfigError> {
        let offset = config.eye - target;
        let distance = offset.length();
        let (yaw, pitch) = if distance > f32::EPSILON {
            (
                offset.x.atan2(offset.z),
                (offset.y / distance).clamp(-1.0, 1.0).asin(),
            )
        } else {
            (0.0, 0.0)
        };
        Self::new(config, target, yaw, pitch, distance)
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply a cursor drag in pixels.
    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) {
        let (min_pitch, max_pitch) = self.config.pitch.bounds();
        self.yaw -= dx * self.config.sensitivity;
        self.pitch = (self.pitch + dy * self.config.sensitivity).clamp(min_pitch, max_pitch);
    }

    /// Apply scroll-wheel notches. Positive zooms in.
    pub fn on_scroll(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.distance = (self.distance - delta * self.config.zoom_speed)
            .clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Ease the target toward `follow`, closing `follow_rate * dt` of the gap.
    pub fn update(&mut self, follow: Vec3, dt: f32) {
        let t = (self.config.follow_rate * dt).clamp(0.0, 1.0);
        if t > 0.0 {
            self.target = self.target.lerp(follow, t);
        }
    }

    /// Offset from target to eye.
    fn offset(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn position(&self) -> Vec3 {
        self.target + self.offset()
    }

    /// Direction from the eye to the target. Independent of where the target
    /// is, so facing can be resolved before the target moves this frame.
    pub fn look_direction(&self) -> Vec3 {
        -self.offset()
    }

    /// Cardinal facing implied by the current yaw, or `None` when looking
    /// straight down.
    pub fn facing(&self) -> Option<Cardinal> {
        resolve_facing(self.look_direction())
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position(),
            target: self.target,
            up: UP,
            fov_y: self.config.fov_y_degrees.to_radians(),
        }
    }
}
