use std::f32::consts::FRAC_PI_2;

use cuberoll_common::{Cardinal, MoveCommand};
use glam::{Mat4, Vec3};

use crate::table::RollStep;

/// Angle of a single roll.
pub const ROLL_ANGLE: f32 = FRAC_PI_2;

/// Progress at or above `1 - SETTLE_EPSILON` counts as complete, so that
/// summing f32 frame times that should land on 1.0 cannot stop a hair short.
pub const SETTLE_EPSILON: f32 = 1e-5;

/// Eased progress `t²(3 − 2t)`, with `t` clamped to [0, 1] first.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// An in-flight roll over one bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollAnimation {
    pub command: MoveCommand,
    pub direction: Cardinal,
    /// World-space point on the edge the cube rolls over.
    pub pivot: Vec3,
    pub axis: Vec3,
    /// Linear progress in [0, 1].
    pub progress: f32,
    pub target_angle: f32,
    /// Progress units per second.
    pub speed: f32,
}

impl RollAnimation {
    /// Start a roll for a cube currently centered at `center`.
    pub fn start(command: MoveCommand, step: &RollStep, center: Vec3, speed: f32) -> Self {
        Self {
            command,
            direction: step.direction,
            pivot: center + step.pivot_offset,
            axis: step.axis,
            progress: 0.0,
            target_angle: ROLL_ANGLE,
            speed,
        }
    }

    /// Current eased rotation angle. Exactly `target_angle` at progress 1.
    pub fn angle(&self) -> f32 {
        self.target_angle * smoothstep(self.progress)
    }

    /// Advance by `dt` seconds. Once the roll is complete `progress` is
    /// pinned to exactly 1 and the progress that ran past the end is
    /// returned, so a roll queued behind this one can pick it up.
    ///
    /// Non-positive `dt` leaves the animation untouched.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if dt > 0.0 {
            self.progress += dt * self.speed;
        }
        if self.progress >= 1.0 - SETTLE_EPSILON {
            let overflow = (self.progress - 1.0).max(0.0);
            self.progress = 1.0;
            return Some(overflow);
        }
        None
    }

    /// Seed a roll that starts mid-frame with progress left over from the
    /// roll before it. Held short of completion so every roll is drawn for
    /// at least one frame.
    pub fn carry_over(&mut self, overflow: f32) {
        self.progress = overflow.clamp(0.0, 1.0 - 2.0 * SETTLE_EPSILON);
    }

    /// Rotation about the pivot edge: translate the pivot to the origin,
    /// rotate, translate back.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.pivot)
            * Mat4::from_axis_angle(self.axis, self.angle())
            * Mat4::from_translation(-self.pivot)
    }
}
