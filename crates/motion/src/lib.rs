//! Roll motion: a cube that rolls one grid cell at a time over a bottom edge.
//!
//! # Invariants
//! - The settled cell is integral and only changes when a roll completes.
//! - At most one command is queued; a newer one replaces it.
//! - A roll in flight always runs to completion.

mod animation;
mod config;
mod motion;
mod table;

pub use animation::{ROLL_ANGLE, RollAnimation, SETTLE_EPSILON, smoothstep};
pub use config::CubeConfig;
pub use motion::{CommandOutcome, CubeState, RollMotion, SpeedMode, TickReport};
pub use table::{RollStep, RollTable};

pub fn crate_info() -> &'static str {
    "cuberoll-motion v0.1.0"
}
