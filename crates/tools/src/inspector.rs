use cuberoll_common::{Cardinal, MoveCommand};
use cuberoll_kernel::{DebugValues, Scene};
use glam::IVec2;

/// Scene inspector for developer tooling.
///
/// Turns the kernel's raw debug values into display-ready units (degrees,
/// plain arrays) for overlays and logs.
pub struct SceneInspector;

impl SceneInspector {
    /// Readout of the scene as of its last step.
    pub fn readout(scene: &Scene) -> Readout {
        Self::from_debug(scene.frame(), &scene.output().debug)
    }

    pub fn from_debug(frame: u64, debug: &DebugValues) -> Readout {
        Readout {
            frame,
            cell: debug.cell,
            position: debug.position.to_array(),
            destination: debug.destination.to_array(),
            facing: debug.facing,
            rotation_axis: debug.rotation_axis.map(|axis| axis.to_array()),
            angle_degrees: debug.angle.to_degrees(),
            queued: debug.queued,
            camera_target: debug.camera_target.to_array(),
            yaw_degrees: debug.yaw.to_degrees(),
            pitch_degrees: debug.pitch.to_degrees(),
            distance: debug.distance,
        }
    }
}

/// Summary of the cube and camera for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub frame: u64,
    pub cell: IVec2,
    pub position: [f32; 3],
    pub destination: [f32; 3],
    pub facing: Cardinal,
    pub rotation_axis: Option<[f32; 3]>,
    pub angle_degrees: f32,
    pub queued: Option<MoveCommand>,
    pub camera_target: [f32; 3],
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub distance: f32,
}

fn fmt_vec(v: [f32; 3]) -> String {
    format!("({:.2}, {:.2}, {:.2})", v[0], v[1], v[2])
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame={} cell=({}, {}) pos={} dest={} facing={} angle={:.0}",
            self.frame,
            self.cell.x,
            self.cell.y,
            fmt_vec(self.position),
            fmt_vec(self.destination),
            self.facing,
            self.angle_degrees,
        )?;
        if let Some(axis) = self.rotation_axis {
            write!(f, " axis={}", fmt_vec(axis))?;
        }
        if let Some(queued) = self.queued {
            write!(f, " queued={queued:?}")?;
        }
        write!(
            f,
            " | camera target={} yaw={:.2} pitch={:.2} dist={:.2}",
            fmt_vec(self.camera_target),
            self.yaw_degrees,
            self.pitch_degrees,
            self.distance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuberoll_input::{InputFrame, Key};
    use cuberoll_kernel::SceneConfig;

    #[test]
    fn readout_of_fresh_scene() {
        let scene = Scene::new(SceneConfig::default()).unwrap();
        let readout = SceneInspector::readout(&scene);
        assert_eq!(readout.frame, 0);
        assert_eq!(readout.position, [0.5, 0.5, 0.5]);
        assert_eq!(readout.facing, Cardinal::NegX);
        assert_eq!(readout.rotation_axis, None);
        assert_eq!(readout.angle_degrees, 0.0);
    }

    #[test]
    fn readout_mid_roll_shows_axis_and_queue() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        scene.step(&InputFrame::idle(0.1).with_key(Key::W));
        scene.step(&InputFrame::idle(0.1).with_key(Key::A));
        let readout = SceneInspector::readout(&scene);
        assert_eq!(readout.rotation_axis, Some([0.0, 0.0, 1.0]));
        assert_eq!(readout.queued, Some(MoveCommand::StrafeLeft));
        assert!(readout.angle_degrees > 0.0 && readout.angle_degrees < 90.0);

        let s = readout.to_string();
        assert!(s.contains("frame=2"));
        assert!(s.contains("facing=-X"));
        assert!(s.contains("axis=(0.00, 0.00, 1.00)"));
        assert!(s.contains("queued=StrafeLeft"));
    }

    #[test]
    fn display_of_idle_scene_omits_axis() {
        let scene = Scene::new(SceneConfig::default()).unwrap();
        let s = SceneInspector::readout(&scene).to_string();
        assert!(s.contains("pos=(0.50, 0.50, 0.50)"));
        assert!(!s.contains("axis="));
        assert!(!s.contains("queued="));
    }
}
