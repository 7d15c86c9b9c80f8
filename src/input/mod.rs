//! # Input Module
//!
//! Input handling for player interactions.
//!
//! Key bindings:
//! - `WASD` / arrow keys: move (held)
//! - `E`: use a door, then pick up items
//! - `P`: open the first unsolved puzzle in the room
//! - `I`: toggle the inventory
//! - `Enter`: start, submit an answer, restart from an end screen
//! - `Esc`: pause/resume, close a puzzle, quit from an end screen
//! - `R`: clear the pattern sequence; `1`-`4` or clicks pick pattern switches

pub mod commands;

pub use commands::*;

use crate::game::Position;
use macroquad::prelude::*;

/// Input handler for processing player commands.
///
/// Polls macroquad once per frame and converts what it sees into
/// [`InputEvent`]s plus a held movement vector.
pub struct InputHandler {
    /// Whether the arrow keys move the player in addition to WASD
    pub arrow_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

const KEY_BINDINGS: [(KeyCode, Key); 7] = [
    (KeyCode::Enter, Key::Enter),
    (KeyCode::Escape, Key::Escape),
    (KeyCode::Backspace, Key::Backspace),
    (KeyCode::E, Key::Interact),
    (KeyCode::P, Key::Puzzle),
    (KeyCode::I, Key::Inventory),
    (KeyCode::R, Key::Reset),
];

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self {
            arrow_keys_enabled: true,
        }
    }

    /// Asks macroquad to report window close requests instead of exiting.
    pub fn capture_quit(&self) {
        prevent_quit();
    }

    /// Collects the discrete events of this frame.
    ///
    /// macroquad does not report the relative order of key presses and typed
    /// characters within a frame, so see [`frame_events`] for the order used.
    pub fn poll_events(&self) -> Vec<InputEvent> {
        let keys = KEY_BINDINGS
            .iter()
            .filter(|(code, _)| is_key_pressed(*code))
            .map(|(_, key)| *key);

        let mut text = Vec::new();
        while let Some(c) = get_char_pressed() {
            text.push(c);
        }

        let click = is_mouse_button_pressed(MouseButton::Left).then(|| {
            let (x, y) = mouse_position();
            Position::new(x, y)
        });

        frame_events(is_quit_requested(), text, keys, click)
    }

    /// Direction the player is currently holding, not normalized.
    pub fn movement(&self) -> Position {
        let mut direction = Position::origin();
        let held = |wasd: KeyCode, arrow: KeyCode| {
            is_key_down(wasd) || (self.arrow_keys_enabled && is_key_down(arrow))
        };

        if held(KeyCode::W, KeyCode::Up) {
            direction.y -= 1.0;
        }
        if held(KeyCode::S, KeyCode::Down) {
            direction.y += 1.0;
        }
        if held(KeyCode::A, KeyCode::Left) {
            direction.x -= 1.0;
        }
        if held(KeyCode::D, KeyCode::Right) {
            direction.x += 1.0;
        }
        direction
    }
}

/// Orders one frame of raw input: close, typed text, keys, mouse.
///
/// Text goes before keys so that an answer typed in the same frame as
/// `Enter` is submitted whole, and a `Backspace` edits what was just typed.
/// Control characters are dropped; their keys arrive as [`Key`] presses.
pub fn frame_events(
    quit: bool,
    text: impl IntoIterator<Item = char>,
    keys: impl IntoIterator<Item = Key>,
    click: Option<Position>,
) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if quit {
        events.push(InputEvent::CloseRequested);
    }
    events.extend(
        text.into_iter()
            .filter(|c| !c.is_control())
            .map(InputEvent::Text),
    );
    events.extend(keys.into_iter().map(InputEvent::KeyPressed));
    events.extend(click.map(InputEvent::MouseClick));
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_comes_before_keys() {
        let events = frame_events(false, "echo\r".chars(), [Key::Enter], None);
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], InputEvent::Text('e'));
        assert_eq!(events[3], InputEvent::Text('o'));
        assert_eq!(events[4], InputEvent::KeyPressed(Key::Enter));
    }

    #[test]
    fn test_close_first_and_click_last() {
        let click = Position::new(12.0, 34.0);
        let events = frame_events(true, ['x'], [Key::Escape], Some(click));
        assert_eq!(
            events,
            vec![
                InputEvent::CloseRequested,
                InputEvent::Text('x'),
                InputEvent::KeyPressed(Key::Escape),
                InputEvent::MouseClick(click),
            ]
        );
    }
}
