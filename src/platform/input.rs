//! Input mapping
//!
//! Turns host key names and pointer coordinates into simulation commands.

use crate::sim::Direction;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Launch,
    Pause,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "Enter" => Some(Key::Launch),
            "p" | "P" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// One-shot command produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Launch,
    TogglePause,
}

/// Held movement keys, sampled by the paddle timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Record a key press. Launch and pause fire once per press.
    pub fn press(&mut self, key: Key) -> Option<KeyCommand> {
        match key {
            Key::Left => {
                self.left = true;
                None
            }
            Key::Right => {
                self.right = true;
                None
            }
            Key::Launch => Some(KeyCommand::Launch),
            Key::Pause => Some(KeyCommand::TogglePause),
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Launch | Key::Pause => {}
        }
    }

    /// Net direction; both held cancel out
    pub fn direction(&self) -> Option<Direction> {
        match (self.left, self.right) {
            (true, false) => Some(Direction::Left),
            (false, true) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Scale a client-space pointer x into canvas space.
///
/// The canvas may be displayed at a different size than its logical width.
/// Returns `None` when the displayed rect is degenerate or the input is not
/// finite.
pub fn pointer_to_canvas(
    client_x: f32,
    rect_left: f32,
    rect_width: f32,
    canvas_width: f32,
) -> Option<f32> {
    if rect_width.is_nan() || rect_width <= 0.0 || !client_x.is_finite() || !rect_left.is_finite() {
        return None;
    }
    let scale = canvas_width / rect_width;
    let x = (client_x - rect_left) * scale;
    x.is_finite().then_some(x)
}
