use cuberoll_common::{Cardinal, ConfigError, MoveCommand};
use glam::{IVec2, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::RollAnimation;
use crate::config::CubeConfig;
use crate::table::RollTable;

/// Which configured roll speed applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedMode {
    #[default]
    Normal,
    Fast,
}

/// Logical cube state. `cell` only changes when a roll completes.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    pub cell: IVec2,
    pub facing: Cardinal,
    pub animation: Option<RollAnimation>,
}

/// What happened to a command handed to [`RollMotion::command`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    /// The cube was idle and started rolling.
    Started(RollAnimation),
    /// A roll is in flight; the command waits in the queue. `replaced` is the
    /// previously queued command, which is dropped.
    Queued { replaced: Option<MoveCommand> },
}

/// Result of one [`RollMotion::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// The roll that completed this tick, with progress pinned to 1.
    pub finished: Option<RollAnimation>,
    /// Cell the cube settled into, if a roll completed.
    pub settled: Option<IVec2>,
    /// The queued roll started in the same tick as the settle.
    pub started: Option<RollAnimation>,
}

/// Idle / Animating state machine for a cube rolling over a grid.
///
/// The grid cell is integral and only updated on completion, so the settled
/// position never accumulates floating-point error no matter how many rolls
/// run. The in-flight rotation is kept separately and composed on top of it.
#[derive(Debug, Clone)]
pub struct RollMotion {
    config: CubeConfig,
    table: RollTable,
    state: CubeState,
    queued: Option<MoveCommand>,
    speed_mode: SpeedMode,
}

impl RollMotion {
    pub fn new(config: CubeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = CubeState {
            cell: config.start_cell,
            facing: config.start_facing,
            animation: None,
        };
        Ok(Self {
            table: RollTable::new(config.size),
            config,
            state,
            queued: None,
            speed_mode: SpeedMode::Normal,
        })
    }

    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    pub fn table(&self) -> &RollTable {
        &self.table
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn cell(&self) -> IVec2 {
        self.state.cell
    }

    pub fn facing(&self) -> Cardinal {
        self.state.facing
    }

    pub fn animation(&self) -> Option<&RollAnimation> {
        self.state.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.state.animation.is_some()
    }

    pub fn queued(&self) -> Option<MoveCommand> {
        self.queued
    }

    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    /// Progress units per second for the current speed mode.
    pub fn speed(&self) -> f32 {
        match self.speed_mode {
            SpeedMode::Normal => self.config.normal_speed,
            SpeedMode::Fast => self.config.fast_speed,
        }
    }

    /// Switch speed mode. Applies to the roll in flight as well.
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        if self.speed_mode == mode {
            return;
        }
        self.speed_mode = mode;
        let speed = self.speed();
        if let Some(anim) = &mut self.state.animation {
            anim.speed = speed;
        }
    }

    /// Update the facing used for commands that start from now on. A roll
    /// already in flight keeps its direction. Returns `true` if it changed.
    pub fn set_facing(&mut self, facing: Cardinal) -> bool {
        if self.state.facing == facing {
            return false;
        }
        tracing::debug!(from = %self.state.facing, to = %facing, "facing changed");
        self.state.facing = facing;
        true
    }

    /// World center of `cell` with the cube resting on the ground.
    pub fn cell_position(&self, cell: IVec2) -> Vec3 {
        let size = self.config.size;
        Vec3::new(
            self.config.origin.x + cell.x as f32 * size,
            size * 0.5,
            self.config.origin.y + cell.y as f32 * size,
        )
    }

    /// Settled center, before any in-flight rotation.
    pub fn grid_position(&self) -> Vec3 {
        self.cell_position(self.state.cell)
    }

    /// Where the cube will rest once the roll in flight completes.
    pub fn destination(&self) -> Vec3 {
        match &self.state.animation {
            Some(anim) => self.cell_position(self.state.cell + anim.direction.step()),
            None => self.grid_position(),
        }
    }

    /// Accept a command: start rolling if idle, otherwise overwrite the
    /// one-slot queue (last command wins).
    pub fn command(&mut self, command: MoveCommand) -> CommandOutcome {
        if self.state.animation.is_some() {
            let replaced = self.queued.replace(command);
            if let Some(dropped) = replaced {
                tracing::debug!(?dropped, ?command, "queued roll replaced");
            } else {
                tracing::debug!(?command, "roll queued");
            }
            return CommandOutcome::Queued { replaced };
        }
        CommandOutcome::Started(self.start(command, 0.0))
    }

    /// Start rolling, `carried` progress already in.
    fn start(&mut self, command: MoveCommand, carried: f32) -> RollAnimation {
        let step = self.table.get(self.state.facing, command);
        let mut anim = RollAnimation::start(command, step, self.grid_position(), self.speed());
        anim.carry_over(carried);
        tracing::debug!(
            ?command,
            facing = %self.state.facing,
            direction = %anim.direction,
            cell = ?self.state.cell,
            "roll started"
        );
        self.state.animation = Some(anim);
        anim
    }

    /// Advance the roll in flight by `dt` seconds.
    ///
    /// On completion the cell moves by exactly one step and, if a command is
    /// queued, the next roll starts within this same call with the overshoot
    /// of the finished roll already applied, so a held key never shows an
    /// idle frame.
    pub fn advance(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();
        let Some(anim) = &mut self.state.animation else {
            return report;
        };
        let Some(overflow) = anim.advance(dt) else {
            return report;
        };

        let finished = *anim;
        self.state.animation = None;
        self.state.cell += finished.direction.step();
        tracing::debug!(cell = ?self.state.cell, "roll settled");
        report.finished = Some(finished);
        report.settled = Some(self.state.cell);

        if let Some(next) = self.queued.take() {
            report.started = Some(self.start(next, overflow));
        }
        report
    }

    /// Current roll angle in radians, 0 when idle.
    pub fn angle(&self) -> f32 {
        self.state.animation.map_or(0.0, |a| a.angle())
    }

    pub fn progress(&self) -> f32 {
        self.state.animation.map_or(0.0, |a| a.progress)
    }

    /// Pivot rotation of the roll in flight, identity when idle.
    pub fn roll_transform(&self) -> Mat4 {
        self.state
            .animation
            .map_or(Mat4::IDENTITY, |a| a.transform())
    }

    /// Model matrix for a cube mesh centered on the origin.
    pub fn model_matrix(&self) -> Mat4 {
        self.roll_transform() * Mat4::from_translation(self.grid_position())
    }
}
