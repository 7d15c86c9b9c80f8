//! # Museum Escape
//!
//! A small top-down escape room. The player sneaks through the rooms of a museum,
//! avoids patrolling guards, collects items, solves puzzles and has to reach the
//! exit hall with every puzzle solved before the countdown runs out.
//!
//! ## Architecture Overview
//!
//! - **Game State**: a single [`GameState`] controller owns the mode state machine,
//!   the player, the countdown, the inventory and the room arena
//! - **World**: rooms indexed by id, each owning its puzzles, items, guards and doors
//! - **Generation**: the room graph is declared as data ([`WorldConfig`]) and built at startup
//! - **Input**: macroquad input is translated into backend-neutral [`InputEvent`]s
//! - **Rendering**: macroquad 2D drawing, driven once per frame by the scene loop
//!
//! Everything under `game` and `generation` is free of window state, so the
//! whole rule set can be driven headless from tests.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

pub use scenes::SceneManager;

/// Core error type for the escape game.
#[derive(thiserror::Error, Debug)]
pub enum EscapeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// World layout is malformed
    #[error("Invalid world config: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the crate.
pub type EscapeResult<T> = Result<T, EscapeError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Window width in pixels
    pub const WINDOW_WIDTH: f32 = 800.0;

    /// Window height in pixels
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Default countdown in seconds (ten minutes)
    pub const DEFAULT_TIME_LIMIT: f32 = 600.0;

    /// Default number of inventory slots
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

    /// Seconds removed from the countdown on the first guard detection
    pub const DEFAULT_DETECTION_PENALTY: f32 = 5.0;

    /// Seconds a guard stays silent after reporting a detection
    pub const DETECTION_COOLDOWN: f32 = 2.0;

    /// Default guard detection radius in pixels
    pub const DEFAULT_DETECTION_RADIUS: f32 = 60.0;

    /// Player movement speed in pixels per second
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Player sprite edge length in pixels
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Item sprite edge length in pixels
    pub const ITEM_SIZE: f32 = 20.0;

    /// Door sprite width in pixels
    pub const DOOR_WIDTH: f32 = 30.0;

    /// Door sprite height in pixels
    pub const DOOR_HEIGHT: f32 = 60.0;

    /// Longest riddle answer the input box accepts
    pub const MAX_ANSWER_LENGTH: usize = 30;

    /// Default notification lifetime in seconds
    pub const NOTIFICATION_SECONDS: f32 = 2.0;

    /// Lifetime of notifications the player must read carefully
    pub const LONG_NOTIFICATION_SECONDS: f32 = 10.0;
}
