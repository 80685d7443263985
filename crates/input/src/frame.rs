use cuberoll_common::MoveCommand;
use glam::Vec2;

use crate::action::{Key, pressed_command};

/// Everything the host input layer reports for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Elapsed seconds since the previous frame.
    pub dt: f32,
    /// Keys that went down this frame.
    pub pressed: Vec<Key>,
    /// Cursor position while the drag button is held, `None` otherwise.
    pub drag_cursor: Option<Vec2>,
    /// Scroll-wheel notches this frame.
    pub scroll: f32,
    /// Fast-roll modifier held.
    pub boost: bool,
}

impl InputFrame {
    /// A frame with no input besides elapsed time.
    pub fn idle(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.pressed.push(key);
        self
    }

    pub fn with_drag(mut self, cursor: Vec2) -> Self {
        self.drag_cursor = Some(cursor);
        self
    }

    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_boost(mut self, boost: bool) -> Self {
        self.boost = boost;
        self
    }

    /// The single roll command this frame asks for, if any.
    pub fn command(&self) -> Option<MoveCommand> {
        pressed_command(&self.pressed)
    }
}

/// Turns absolute cursor positions into per-frame drag deltas.
///
/// The first frame of a drag reports no motion; releasing the button forgets
/// the last position so the next drag does not jump.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    last: Option<Vec2>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    pub fn delta(&mut self, cursor: Option<Vec2>) -> Vec2 {
        let Some(pos) = cursor else {
            self.last = None;
            return Vec2::ZERO;
        };
        let delta = self.last.map_or(Vec2::ZERO, |last| pos - last);
        self.last = Some(pos);
        delta
    }
}
