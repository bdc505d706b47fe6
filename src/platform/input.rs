//! Host input to `Command` translation
//!
//! Pure and platform-free so it can be driven from DOM callbacks or tests.

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::Command;

/// HUD buttons outside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Pause,
    Restart,
}

/// Pointer tracking (mouse or first touch)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Last known position in logical canvas space
    pub pos: Option<Vec2>,
    pub down: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(&mut self, pos: Vec2) -> Command {
        self.pos = Some(pos);
        Command::UpdateAim { point: pos }
    }

    pub fn on_down(&mut self) {
        self.down = true;
    }

    /// Releasing always asks for a shot; the session decides if it is valid
    pub fn on_up(&mut self) -> Command {
        self.down = false;
        Command::Release
    }
}

/// Keyboard shortcuts: P toggles pause, R restarts
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "p" | "P" => Some(Command::TogglePause),
        "r" | "R" => Some(Command::Restart),
        _ => None,
    }
}

pub fn command_for_button(button: Button) -> Command {
    match button {
        Button::Pause => Command::TogglePause,
        Button::Restart => Command::Restart,
    }
}

/// Map a client-space point onto the logical canvas, given the canvas's
/// on-screen rectangle (left, top, width, height).
pub fn client_to_canvas(client: Vec2, rect: (f32, f32, f32, f32)) -> Option<Vec2> {
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (client.x - left) * (CANVAS_WIDTH / width),
        (client.y - top) * (CANVAS_HEIGHT / height),
    ))
}

/// CSS display size for the canvas: as wide as the parent allows (up to the
/// logical width), keeping the logical aspect ratio.
pub fn display_size(parent_width: f32) -> (f32, f32) {
    let ratio = CANVAS_WIDTH / CANVAS_HEIGHT;
    let w = parent_width.min(CANVAS_WIDTH).max(0.0);
    (w, (w / ratio).round())
}
