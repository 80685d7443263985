//! Input: host-agnostic key edges, drag, scroll and boost for one frame.
//!
//! # Invariants
//! - Keys are press edges, not held state.
//! - At most one roll command is produced per frame.

pub mod action;
mod frame;

pub use action::{Key, pressed_command};
pub use frame::{DragTracker, InputFrame};

pub fn crate_info() -> &'static str {
    "cuberoll-input v0.1.0"
}
