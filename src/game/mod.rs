//! # Game Module
//!
//! Core game state management, world representation, and the objects that live in it.
//!
//! This module contains the building blocks of the escape room:
//! - The mode state machine and interaction rules ([`GameState`])
//! - Rooms, doors, items, puzzles and guards
//! - The player, the countdown timer and the inventory

pub mod door;
pub mod guard;
pub mod inventory;
pub mod items;
pub mod player;
pub mod puzzle;
pub mod room;
pub mod state;
pub mod timer;
pub mod world;

pub use door::*;
pub use guard::*;
pub use inventory::*;
pub use items::*;
pub use player::*;
pub use puzzle::*;
pub use room::*;
pub use state::*;
pub use timer::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Identifier of a room in the room graph.
pub type RoomId = u32;

/// Represents a 2D point in screen space (pixels).
///
/// # Examples
///
/// ```
/// use museum_escape::Position;
///
/// let pos = Position::new(10.0, 5.0);
/// assert_eq!(pos.x, 10.0);
/// assert_eq!(pos.y, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Calculates the Euclidean distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::Position;
    ///
    /// let a = Position::new(0.0, 0.0);
    /// let b = Position::new(3.0, 4.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    pub fn distance(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length of the vector from the origin to this position.
    pub fn length(self) -> f32 {
        self.distance(Position::origin())
    }

    /// Returns the unit vector in the same direction, or the origin for a zero vector.
    pub fn normalized(self) -> Position {
        let len = self.length();
        if len == 0.0 {
            Position::origin()
        } else {
            Position::new(self.x / len, self.y / len)
        }
    }

    /// Moves towards `target` by at most `max_step`.
    ///
    /// Returns the new position and whether the target was reached.
    pub fn step_towards(self, target: Position, max_step: f32) -> (Position, bool) {
        let remaining = self.distance(target);
        if remaining <= max_step {
            return (target, true);
        }
        let dir = (target - self).normalized();
        (self + dir.scaled(max_step), false)
    }

    /// Multiplies both coordinates by `factor`.
    pub fn scaled(self, factor: f32) -> Position {
        Position::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle used for collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates bounds of the given size anchored at `top_left`.
    pub fn at(top_left: Position, width: f32, height: f32) -> Self {
        Self::new(top_left.x, top_left.y, width, height)
    }

    /// Top-left corner.
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Centre point.
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the two rectangles share a non-empty area.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::Bounds;
    ///
    /// let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.intersects(&Bounds::new(5.0, 5.0, 10.0, 10.0)));
    /// assert!(!a.intersects(&Bounds::new(10.0, 0.0, 10.0, 10.0)));
    /// ```
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true if the point lies inside the rectangle.
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Clamps a top-left position so that a box of `size` stays inside these bounds.
    pub fn clamp_box(&self, top_left: Position, width: f32, height: f32) -> Position {
        let max_x = (self.right() - width).max(self.x);
        let max_y = (self.bottom() - height).max(self.y);
        Position::new(top_left.x.clamp(self.x, max_x), top_left.y.clamp(self.y, max_y))
    }
}
