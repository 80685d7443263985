use cuberoll_camera::{CameraPose, OrbitCamera};
use cuberoll_common::{Cardinal, ConfigError, MoveCommand};
use cuberoll_input::{DragTracker, InputFrame};
use cuberoll_motion::{CommandOutcome, RollMotion, SpeedMode};
use glam::{IVec2, Mat4, Vec2, Vec3};

use crate::config::SceneConfig;

/// A record of every discrete change the scene makes.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The camera turned far enough to remap forward.
    FacingChanged { from: Cardinal, to: Cardinal },
    /// A roll began from `from`. `from_queue` marks a queued command picked
    /// up in the same frame the previous roll settled.
    RollStarted {
        command: MoveCommand,
        direction: Cardinal,
        from: IVec2,
        from_queue: bool,
    },
    /// A command arrived mid-roll and now waits. `replaced` was dropped.
    RollQueued {
        command: MoveCommand,
        replaced: Option<MoveCommand>,
    },
    /// A roll completed and the cube rests on `cell`.
    RollSettled { cell: IVec2 },
}

/// Plain values the debug overlay may print.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugValues {
    pub cell: IVec2,
    /// Settled center, before the in-flight rotation.
    pub position: Vec3,
    /// Center as drawn this frame.
    pub center: Vec3,
    pub destination: Vec3,
    pub facing: Cardinal,
    pub rotation_axis: Option<Vec3>,
    /// Radians.
    pub angle: f32,
    pub progress: f32,
    pub queued: Option<MoveCommand>,
    pub speed_mode: SpeedMode,
    pub camera_target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

/// What a frame hands to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub frame: u64,
    /// Model matrix for a cube mesh centered on the origin.
    pub cube_model: Mat4,
    pub camera: CameraPose,
    pub debug: DebugValues,
}

/// The rolling cube and its camera, advanced one frame at a time.
///
/// Owns all state; nothing here blocks or spawns. Within a frame the order
/// is fixed: camera angles, facing, command intake, roll advance, camera
/// follow, output.
#[derive(Debug, Clone)]
pub struct Scene {
    motion: RollMotion,
    camera: OrbitCamera,
    drag: DragTracker,
    frame: u64,
    event_log: Vec<SceneEvent>,
}

impl Scene {
    /// Validate `config` and place the cube and camera at their start poses.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        let motion = RollMotion::new(config.cube)?;
        let camera = OrbitCamera::looking_at(config.camera, motion.grid_position())?;
        let mut scene = Self {
            motion,
            camera,
            drag: DragTracker::new(),
            frame: 0,
            event_log: Vec::new(),
        };
        scene.sync_facing();
        Ok(scene)
    }

    pub fn motion(&self) -> &RollMotion {
        &self.motion
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn events(&self) -> &[SceneEvent] {
        &self.event_log
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Run one frame of input through the pipeline.
    pub fn step(&mut self, input: &InputFrame) -> FrameOutput {
        let _span = tracing::info_span!("scene_step", frame = self.frame).entered();

        let delta = self.drag.delta(input.drag_cursor);
        if delta != Vec2::ZERO {
            self.camera.on_drag_delta(delta.x, delta.y);
        }
        self.camera.on_scroll(input.scroll);

        self.sync_facing();

        self.motion.set_speed_mode(if input.boost {
            SpeedMode::Fast
        } else {
            SpeedMode::Normal
        });
        if let Some(command) = input.command() {
            self.intake(command);
        }

        let report = self.motion.advance(input.dt);
        if let Some(cell) = report.settled {
            self.event_log.push(SceneEvent::RollSettled { cell });
        }
        if let Some(anim) = report.started {
            self.event_log.push(SceneEvent::RollStarted {
                command: anim.command,
                direction: anim.direction,
                from: self.motion.cell(),
                from_queue: true,
            });
        }

        self.camera.update(self.motion.destination(), input.dt);
        self.frame += 1;

        tracing::trace!(
            dt = input.dt,
            angle = self.motion.angle(),
            progress = self.motion.progress(),
            "frame stepped"
        );
        self.output()
    }

    fn intake(&mut self, command: MoveCommand) {
        let from = self.motion.cell();
        let event = match self.motion.command(command) {
            CommandOutcome::Started(anim) => SceneEvent::RollStarted {
                command,
                direction: anim.direction,
                from,
                from_queue: false,
            },
            CommandOutcome::Queued { replaced } => SceneEvent::RollQueued { command, replaced },
        };
        self.event_log.push(event);
    }

    /// Re-derive facing from the camera. Skipped when the look direction is
    /// degenerate, keeping the previous facing.
    fn sync_facing(&mut self) {
        let Some(facing) = self.camera.facing() else {
            return;
        };
        let from = self.motion.facing();
        if self.motion.set_facing(facing) {
            self.event_log.push(SceneEvent::FacingChanged { from, to: facing });
        }
    }

    /// Output for the current state without advancing.
    pub fn output(&self) -> FrameOutput {
        let cube_model = self.motion.model_matrix();
        let anim = self.motion.animation();
        FrameOutput {
            frame: self.frame,
            cube_model,
            camera: self.camera.pose(),
            debug: DebugValues {
                cell: self.motion.cell(),
                position: self.motion.grid_position(),
                center: cube_model.transform_point3(Vec3::ZERO),
                destination: self.motion.destination(),
                facing: self.motion.facing(),
                rotation_axis: anim.map(|a| a.axis),
                angle: self.motion.angle(),
                progress: self.motion.progress(),
                queued: self.motion.queued(),
                speed_mode: self.motion.speed_mode(),
                camera_target: self.camera.target(),
                yaw: self.camera.yaw(),
                pitch: self.camera.pitch(),
                distance: self.camera.distance(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuberoll_camera::PitchPolicy;
    use cuberoll_input::Key;
    use cuberoll_motion::{CubeConfig, ROLL_ANGLE};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn origin_scene(speed: f32) -> Scene {
        let config = SceneConfig {
            cube: CubeConfig {
                origin: Vec2::ZERO,
                normal_speed: speed,
                ..CubeConfig::default()
            },
            ..SceneConfig::default()
        };
        Scene::new(config).unwrap()
    }

    #[test]
    fn starts_facing_away_from_default_eye() {
        let scene = Scene::new(SceneConfig::default()).unwrap();
        assert_eq!(scene.motion().facing(), Cardinal::NegX);
        assert!(scene.events().is_empty());
        let out = scene.output();
        assert_eq!(out.debug.position, Vec3::splat(0.5));
        assert_eq!(out.camera.target, Vec3::splat(0.5));
    }

    #[test]
    fn invalid_config_fails_at_construction() {
        let mut config = SceneConfig::default();
        config.camera.min_distance = 30.0;
        assert!(Scene::new(config).is_err());
    }

    #[test]
    fn worked_example_forward_facing_neg_x() {
        let mut scene = origin_scene(2.0);
        let out = scene.step(&InputFrame::idle(0.1).with_key(Key::W));
        assert!(out.debug.angle > 0.0);
        assert_eq!(out.debug.rotation_axis, Some(Vec3::Z));
        for _ in 0..3 {
            scene.step(&InputFrame::idle(0.1));
        }
        let out = scene.step(&InputFrame::idle(0.1));
        assert_eq!(out.debug.position, Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(out.debug.cell, IVec2::new(-1, 0));
        assert_eq!(out.debug.rotation_axis, None);
        assert_eq!(
            scene.events(),
            &[
                SceneEvent::RollStarted {
                    command: MoveCommand::Forward,
                    direction: Cardinal::NegX,
                    from: IVec2::ZERO,
                    from_queue: false,
                },
                SceneEvent::RollSettled {
                    cell: IVec2::new(-1, 0)
                },
            ]
        );
        assert_eq!(ROLL_ANGLE.to_degrees(), 90.0);
    }

    #[test]
    fn idle_zero_dt_frames_change_nothing() {
        let mut scene = origin_scene(2.0);
        scene.step(&InputFrame::idle(0.05).with_key(Key::A));
        scene.step(&InputFrame::idle(0.05).with_key(Key::D));
        let before = scene.output();
        for _ in 0..20 {
            let out = scene.step(&InputFrame::idle(0.0));
            assert_eq!(out.debug, before.debug);
            assert_eq!(out.cube_model, before.cube_model);
            assert_eq!(out.camera, before.camera);
        }
    }

    #[test]
    fn queued_roll_has_no_idle_frame() {
        let mut scene = origin_scene(2.0);
        scene.step(&InputFrame::idle(0.1).with_key(Key::W));
        scene.step(&InputFrame::idle(0.1).with_key(Key::S));
        scene.drain_events();
        loop {
            let out = scene.step(&InputFrame::idle(0.1));
            let events = scene.drain_events();
            if events.is_empty() {
                assert!(out.debug.rotation_axis.is_some());
                continue;
            }
            assert_eq!(
                events,
                vec![
                    SceneEvent::RollSettled {
                        cell: IVec2::new(-1, 0)
                    },
                    SceneEvent::RollStarted {
                        command: MoveCommand::Back,
                        direction: Cardinal::PosX,
                        from: IVec2::new(-1, 0),
                        from_queue: true,
                    },
                ]
            );
            // Already rolling again in the settling frame.
            assert!(out.debug.rotation_axis.is_some());
            break;
        }
    }

    #[test]
    fn settling_frame_already_shows_the_queued_roll() {
        let mut scene = origin_scene(2.0);
        scene.step(&InputFrame::idle(0.15).with_key(Key::W));
        scene.step(&InputFrame::idle(0.15).with_key(Key::W));
        scene.step(&InputFrame::idle(0.15));
        scene.drain_events();

        // 0.3 per frame: the fourth frame lands at 1.2.
        let out = scene.step(&InputFrame::idle(0.15));
        assert_eq!(out.debug.cell, IVec2::new(-1, 0));
        assert!(matches!(scene.events()[0], SceneEvent::RollSettled { .. }));
        assert!(out.debug.angle > 0.0);
        assert!((out.debug.progress - 0.2).abs() < 1e-5);
        let rest = Mat4::from_translation(out.debug.position);
        assert!(!out.cube_model.abs_diff_eq(rest, 1e-4));
    }

    #[test]
    fn looking_straight_down_keeps_previous_facing() {
        let mut config = SceneConfig::default();
        config.camera.pitch = PitchPolicy::Custom {
            min: 0.1,
            max: FRAC_PI_2 - 1e-6,
        };
        let mut scene = Scene::new(config).unwrap();
        assert_eq!(scene.motion().facing(), Cardinal::NegX);

        scene.step(&InputFrame::idle(0.0).with_drag(Vec2::ZERO));
        let sensitivity = scene.camera().config().sensitivity;
        // Half a turn of yaw while pitching over the top.
        let drag = Vec2::new(PI / sensitivity, 10.0 / sensitivity);
        let out = scene.step(&InputFrame::idle(0.1).with_drag(drag).with_key(Key::W));

        assert_eq!(scene.camera().pitch(), FRAC_PI_2 - 1e-6);
        assert_eq!(scene.camera().facing(), None);
        assert_eq!(out.debug.facing, Cardinal::NegX);
        // Only the roll, no facing change.
        assert_eq!(scene.events().len(), 1);
        assert!(matches!(
            scene.events()[0],
            SceneEvent::RollStarted {
                direction: Cardinal::NegX,
                ..
            }
        ));
    }

    #[test]
    fn drag_in_the_same_frame_redirects_the_roll() {
        let mut scene = origin_scene(2.0);
        scene.step(&InputFrame::idle(0.0).with_drag(Vec2::ZERO));
        let half_turn = std::f32::consts::PI / scene.camera().config().sensitivity;
        let out = scene.step(
            &InputFrame::idle(0.1)
                .with_drag(Vec2::new(half_turn, 0.0))
                .with_key(Key::W),
        );
        assert_eq!(out.debug.facing, Cardinal::PosX);
        assert_eq!(
            scene.events()[0],
            SceneEvent::FacingChanged {
                from: Cardinal::NegX,
                to: Cardinal::PosX
            }
        );
        assert!(matches!(
            scene.events()[1],
            SceneEvent::RollStarted {
                direction: Cardinal::PosX,
                ..
            }
        ));
    }

    #[test]
    fn camera_trails_then_catches_up() {
        let mut scene = origin_scene(2.0);
        let out = scene.step(&InputFrame::idle(0.1).with_key(Key::W));
        // Following the destination, but only part of the way.
        assert!(out.debug.camera_target.x < 0.0);
        assert!(out.debug.camera_target.x > -1.0);
        for _ in 0..200 {
            scene.step(&InputFrame::idle(0.05));
        }
        let out = scene.output();
        assert!(out.debug.camera_target.abs_diff_eq(Vec3::new(-1.0, 0.5, 0.0), 1e-3));
        let eye_offset = out.camera.position - out.camera.target;
        assert!((eye_offset.length() - out.debug.distance).abs() < 1e-3);
    }

    #[test]
    fn scroll_and_boost_apply() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        let distance = scene.camera().distance();
        let out = scene.step(
            &InputFrame::idle(0.1)
                .with_scroll(1.0)
                .with_boost(true)
                .with_key(Key::D),
        );
        assert_eq!(out.debug.distance, distance - 1.0);
        assert_eq!(out.debug.speed_mode, SpeedMode::Fast);
        assert!((out.debug.progress - 0.45).abs() < 1e-6);
    }

    #[test]
    fn frame_counter_advances() {
        let mut scene = origin_scene(2.0);
        scene.step(&InputFrame::idle(0.016));
        scene.step(&InputFrame::idle(0.016));
        assert_eq!(scene.frame(), 2);
        assert_eq!(scene.output().frame, 2);
    }
}
