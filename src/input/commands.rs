//! # Input Events
//!
//! Backend-neutral input the game controller consumes. The macroquad handler in
//! the parent module produces these; tests construct them directly.

use crate::game::Position;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Start the run, submit an answer, restart from an end screen
    Enter,
    /// Pause/resume, close a puzzle, quit from an end screen
    Escape,
    /// Delete the last typed character
    Backspace,
    /// Use a door and pick up items
    Interact,
    /// Open the first unsolved puzzle in the room
    Puzzle,
    /// Show or hide the inventory
    Inventory,
    /// Clear the pattern puzzle sequence
    Reset,
}

/// One discrete input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    /// A printable character was typed
    Text(char),
    /// Left mouse button pressed at a screen position
    MouseClick(Position),
    /// The window close button was used
    CloseRequested,
}
