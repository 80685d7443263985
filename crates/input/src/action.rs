use cuberoll_common::MoveCommand;
use serde::{Deserialize, Serialize};

/// Physical keys the roll controls listen to.
///
/// The host input layer reports these as press edges, never as held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
}

impl Key {
    /// The roll command bound to this key.
    pub fn command(self) -> MoveCommand {
        match self {
            Self::W | Self::ArrowUp => MoveCommand::Forward,
            Self::S | Self::ArrowDown => MoveCommand::Back,
            Self::A | Self::ArrowLeft => MoveCommand::StrafeLeft,
            Self::D | Self::ArrowRight => MoveCommand::StrafeRight,
        }
    }

    /// Parse a WASD letter, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Self::W),
            'a' => Some(Self::A),
            's' => Some(Self::S),
            'd' => Some(Self::D),
            _ => None,
        }
    }
}

fn priority(command: MoveCommand) -> u8 {
    match command {
        MoveCommand::Forward => 0,
        MoveCommand::Back => 1,
        MoveCommand::StrafeLeft => 2,
        MoveCommand::StrafeRight => 3,
    }
}

/// Pick one command from the keys pressed in a single frame:
/// forward beats back beats left beats right.
pub fn pressed_command(keys: &[Key]) -> Option<MoveCommand> {
    keys.iter()
        .map(|k| k.command())
        .min_by_key(|c| priority(*c))
}
