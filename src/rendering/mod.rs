//! # Rendering Module
//!
//! 2D drawing with macroquad: the room view, the HUD, puzzle overlays and the
//! menu and end screens. Nothing here mutates game state.

pub mod assets;
pub mod display;
pub mod ui;

pub use assets::*;
pub use display::*;
pub use ui::*;
