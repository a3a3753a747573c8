//! # Input Module
//!
//! Everything the transform core learns from the outside world arrives as one
//! [`FrameInput`] per frame: elapsed time, held movement actions, the mouse
//! delta since the previous frame and the button states.
//!
//! - [`InputTracker`] turns winit window events into that snapshot
//! - [`KeyBindings`] maps physical keys to [`Action`]s
//! - [`FrameClock`] measures the elapsed time between frames
//!
//! An empty snapshot means "no change"; it is never an error.

pub mod bindings;
pub mod clock;
pub mod tracker;

use std::collections::HashSet;
use std::time::Duration;

pub use bindings::KeyBindings;
pub use clock::FrameClock;
pub use tracker::InputTracker;

/// Movement actions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    MoveUp,
    MoveDown,
}

/// Mouse button state sampled at the end of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
}

/// What a mouse drag is steering this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Left button: rotate the displayed object.
    Object,
    /// Right button: turn the camera.
    Camera,
}

/// Input gathered during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Time since the previous frame.
    pub elapsed: Duration,
    /// Actions whose keys are held down.
    pub held: HashSet<Action>,
    /// Cursor movement in pixels since the previous frame, `(dx, dy)` with
    /// `dy` growing downwards.
    pub mouse_delta: (f32, f32),
    pub buttons: MouseButtons,
}

impl FrameInput {
    /// A frame with no input besides the passage of time.
    pub fn idle(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }

    pub fn with_held(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn with_mouse_delta(mut self, dx: f32, dy: f32) -> Self {
        self.mouse_delta = (dx, dy);
        self
    }

    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// The left button wins when both buttons are down.
    pub fn drag(&self) -> Option<DragTarget> {
        if self.buttons.left {
            Some(DragTarget::Object)
        } else if self.buttons.right {
            Some(DragTarget::Camera)
        } else {
            None
        }
    }
}

/// Picks the active direction of one movement axis.
///
/// Returns `1.0` for `positive`, `-1.0` for `negative` and `0.0` for neither.
/// When both are held the positive action takes precedence.
pub(crate) fn axis(input: &FrameInput, positive: Action, negative: Action) -> f32 {
    if input.is_held(positive) {
        1.0
    } else if input.is_held(negative) {
        -1.0
    } else {
        0.0
    }
}
