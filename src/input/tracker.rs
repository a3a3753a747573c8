use std::collections::HashSet;
use std::time::Duration;

use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::{Action, FrameInput, KeyBindings, MouseButtons};

/// Collects winit window events between frames and hands them out as one
/// [`FrameInput`] per frame.
///
/// Key and button state persists across frames; the mouse delta is reset by
/// every [`take_frame`](Self::take_frame).
#[derive(Debug, Clone)]
pub struct InputTracker {
    bindings: KeyBindings,
    pressed: HashSet<KeyCode>,
    buttons: MouseButtons,
    last_cursor: Option<(f64, f64)>,
    mouse_delta: (f32, f32),
    quit_requested: bool,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed: HashSet::new(),
            buttons: MouseButtons::default(),
            last_cursor: None,
            mouse_delta: (0.0, 0.0),
            quit_requested: false,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Feeds a window event. Returns `true` when the event changed input state.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key_changed(code, event.state);
                    return true;
                }
                false
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.button_changed(*button, *state);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                true
            }
            _ => false,
        }
    }

    pub fn key_changed(&mut self, key: KeyCode, state: ElementState) {
        if key == KeyCode::Escape && state == ElementState::Pressed {
            log::info!("Escape pressed, quit requested");
            self.quit_requested = true;
            return;
        }

        match state {
            ElementState::Pressed => {
                self.pressed.insert(key);
            }
            ElementState::Released => {
                self.pressed.remove(&key);
            }
        }
    }

    /// Actions whose keys are currently down. Two keys bound to the same
    /// action keep it held until both are released.
    pub fn held_actions(&self) -> HashSet<Action> {
        self.pressed
            .iter()
            .filter_map(|key| self.bindings.action_for(*key))
            .collect()
    }

    /// A press re-anchors the drag: motion before it never counts as drag
    /// motion.
    pub fn button_changed(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        let slot = match button {
            MouseButton::Left => &mut self.buttons.left,
            MouseButton::Right => &mut self.buttons.right,
            _ => return,
        };
        let was_pressed = std::mem::replace(slot, pressed);
        if pressed && !was_pressed {
            self.mouse_delta = (0.0, 0.0);
        }
    }

    /// Tracks the cursor. The delta only grows while a button is held.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.last_cursor {
            if self.buttons.left || self.buttons.right {
                self.mouse_delta.0 += (x - last_x) as f32;
                self.mouse_delta.1 += (y - last_y) as f32;
            }
        }
        self.last_cursor = Some((x, y));
    }

    /// Drops every held key and button, e.g. when the window loses focus and
    /// release events will never arrive.
    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.buttons = MouseButtons::default();
        self.last_cursor = None;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Snapshot of this frame's input. Resets the accumulated mouse delta.
    pub fn take_frame(&mut self, elapsed: Duration) -> FrameInput {
        let mouse_delta = std::mem::take(&mut self.mouse_delta);
        FrameInput {
            elapsed,
            held: self.held_actions(),
            mouse_delta,
            buttons: self.buttons,
        }
    }
}
