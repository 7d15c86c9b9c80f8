//! # Player
//!
//! The player's body in the room and how alarmed the guards are.

use crate::config::{PLAYER_SIZE, PLAYER_SPEED};
use crate::game::{Bounds, ItemId, Position};

/// How far guard detections have escalated. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    Unwarned,
    Warned,
    Caught,
}

/// The player character.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Position,
    pub speed: f32,
    alert: AlertLevel,
    items: Vec<ItemId>,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            speed: PLAYER_SPEED,
            alert: AlertLevel::Unwarned,
            items: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.position, PLAYER_SIZE, PLAYER_SIZE)
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Moves along `direction` for `dt` seconds, staying inside `area`.
    pub fn walk(&mut self, direction: Position, dt: f32, area: &Bounds) {
        let step = direction.normalized().scaled(self.speed * dt);
        self.position = area.clamp_box(self.position + step, PLAYER_SIZE, PLAYER_SIZE);
    }

    /// Handles of the items the player has picked up.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn add_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    pub fn alert(&self) -> AlertLevel {
        self.alert
    }

    pub fn is_warned(&self) -> bool {
        self.alert >= AlertLevel::Warned
    }

    pub fn is_caught(&self) -> bool {
        self.alert == AlertLevel::Caught
    }

    /// Escalates the alert level by one step and returns the new level.
    pub fn escalate(&mut self) -> AlertLevel {
        self.alert = match self.alert {
            AlertLevel::Unwarned => AlertLevel::Warned,
            AlertLevel::Warned | AlertLevel::Caught => AlertLevel::Caught,
        };
        self.alert
    }
}
