use cuberoll_common::{Cardinal, MoveCommand, UP};
use glam::Vec3;

/// Everything needed to start one roll, independent of where the cube is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollStep {
    /// World direction the cube travels.
    pub direction: Cardinal,
    /// Pivot edge relative to the cube center: the bottom edge on the
    /// destination side.
    pub pivot_offset: Vec3,
    /// Rotation axis. A positive angle about it carries the cube toward the
    /// destination.
    pub axis: Vec3,
}

impl RollStep {
    fn new(direction: Cardinal, size: f32) -> Self {
        let half = size * 0.5;
        let unit = direction.unit();
        Self {
            direction,
            pivot_offset: unit * half - UP * half,
            axis: roll_axis(direction),
        }
    }
}

/// `up × direction`, written out so no component comes out as `-0.0`.
fn roll_axis(direction: Cardinal) -> Vec3 {
    match direction {
        Cardinal::PosX => Vec3::NEG_Z,
        Cardinal::NegX => Vec3::Z,
        Cardinal::PosZ => Vec3::X,
        Cardinal::NegZ => Vec3::NEG_X,
    }
}

/// The 16 `(facing, command)` combinations, precomputed.
#[derive(Debug, Clone)]
pub struct RollTable {
    size: f32,
    entries: [RollStep; 16],
}

fn slot(facing: Cardinal, command: MoveCommand) -> usize {
    facing as usize * 4 + command as usize
}

impl RollTable {
    pub fn new(size: f32) -> Self {
        let entries = std::array::from_fn(|i| {
            let facing = Cardinal::ALL[i / 4];
            let command = MoveCommand::ALL[i % 4];
            RollStep::new(command.resolve(facing), size)
        });
        Self { size, entries }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn get(&self, facing: Cardinal, command: MoveCommand) -> &RollStep {
        &self.entries[slot(facing, command)]
    }

    /// Unit world displacement for `command` while facing `facing`.
    pub fn resolve_displacement(&self, facing: Cardinal, command: MoveCommand) -> Vec3 {
        self.get(facing, command).direction.unit()
    }

    /// All entries in facing-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cardinal, MoveCommand, &RollStep)> + '_ {
        Cardinal::ALL.into_iter().flat_map(move |facing| {
            MoveCommand::ALL
                .into_iter()
                .map(move |command| (facing, command, self.get(facing, command)))
        })
    }
}
