//! # Doors
//!
//! Connectors between rooms. A locked door may name a required-key token.

use crate::config::{DOOR_HEIGHT, DOOR_WIDTH};
use crate::game::{Bounds, Position, RoomId};
use serde::{Deserialize, Serialize};

/// A door leading from its owning room to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub position: Position,
    pub target: RoomId,
    locked: bool,
    required_key: Option<String>,
}

impl Door {
    /// Creates an unlocked door.
    pub fn open(position: Position, target: RoomId) -> Self {
        Self {
            position,
            target,
            locked: false,
            required_key: None,
        }
    }

    /// Creates a locked door. `None` (or an empty token) opens on first approach.
    pub fn locked(position: Position, target: RoomId, required_key: Option<String>) -> Self {
        Self {
            position,
            target,
            locked: true,
            required_key: required_key.filter(|token| !token.is_empty()),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Token of the key this door wants, if any.
    pub fn required_key(&self) -> Option<&str> {
        self.required_key.as_deref()
    }

    /// Unlocks the door for good.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Tries to open the door with a key token, unlocking it for good on success.
    ///
    /// Succeeds when the token matches or the door needs no key. An unlocked door
    /// always opens, whatever token is offered.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::{Door, Position};
    ///
    /// let mut door = Door::locked(Position::origin(), 3, Some("master_key".to_string()));
    /// assert!(!door.try_open(Some("wrong")));
    /// assert!(door.try_open(Some("master_key")));
    /// assert!(!door.is_locked());
    /// assert!(door.try_open(None));
    /// ```
    pub fn try_open(&mut self, key_token: Option<&str>) -> bool {
        if !self.locked {
            return true;
        }
        let matches = match (&self.required_key, key_token) {
            (None, _) => true,
            (Some(required), Some(offered)) => required == offered,
            (Some(_), None) => false,
        };
        if matches {
            self.unlock();
        }
        matches
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.position, DOOR_WIDTH, DOOR_HEIGHT)
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.bounds().intersects(other)
    }
}
