//! Developer tooling: scene readouts and frame timing.
//!
//! # Invariants
//! - Tools only read scene state; they never step or mutate it.

mod inspector;
mod timer;

pub use inspector::{Readout, SceneInspector};
pub use timer::FrameTimer;

pub fn crate_info() -> &'static str {
    "cuberoll-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
