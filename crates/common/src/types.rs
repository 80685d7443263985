use glam::{IVec2, Vec3};
use serde::{Deserialize, Serialize};

/// One of the four horizontal world axes.
///
/// Used both for the cube's facing (the world direction currently mapped to
/// [`MoveCommand::Forward`]) and for the displacement of a single roll. Never
/// diagonal: exactly one component of [`Cardinal::unit`] is ±1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    PosX,
    NegX,
    PosZ,
    NegZ,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [Self::PosX, Self::NegX, Self::PosZ, Self::NegZ];

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::X,
            Self::NegX => Vec3::NEG_X,
            Self::PosZ => Vec3::Z,
            Self::NegZ => Vec3::NEG_Z,
        }
    }

    /// Integer grid delta on the (x, z) plane.
    pub fn step(self) -> IVec2 {
        match self {
            Self::PosX => IVec2::new(1, 0),
            Self::NegX => IVec2::new(-1, 0),
            Self::PosZ => IVec2::new(0, 1),
            Self::NegZ => IVec2::new(0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosZ => Self::NegZ,
            Self::NegZ => Self::PosZ,
        }
    }

    /// The axis to the right of this one when standing on the ground plane
    /// looking along it (`unit × up`).
    pub fn right(self) -> Self {
        match self {
            Self::PosX => Self::PosZ,
            Self::NegX => Self::NegZ,
            Self::PosZ => Self::NegX,
            Self::NegZ => Self::PosX,
        }
    }

    pub fn left(self) -> Self {
        self.right().opposite()
    }
}

impl std::fmt::Display for Cardinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PosX => "+X",
            Self::NegX => "-X",
            Self::PosZ => "+Z",
            Self::NegZ => "-Z",
        };
        f.write_str(s)
    }
}

/// A movement-relative roll request, resolved against the current facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCommand {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
}

impl MoveCommand {
    pub const ALL: [MoveCommand; 4] = [
        Self::Forward,
        Self::Back,
        Self::StrafeLeft,
        Self::StrafeRight,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Back,
            Self::Back => Self::Forward,
            Self::StrafeLeft => Self::StrafeRight,
            Self::StrafeRight => Self::StrafeLeft,
        }
    }

    /// World direction of this command for a cube facing `facing`.
    pub fn resolve(self, facing: Cardinal) -> Cardinal {
        match self {
            Self::Forward => facing,
            Self::Back => facing.opposite(),
            Self::StrafeLeft => facing.left(),
            Self::StrafeRight => facing.right(),
        }
    }
}
