//! # Items
//!
//! Collectible objects placed in rooms: plain collectibles, keys and passcodes.

use crate::config::ITEM_SIZE;
use crate::game::{Bounds, Position, RoomId};
use serde::{Deserialize, Serialize};

/// Stable handle to an item: the room that owns it and its slot in that room.
///
/// Items are never removed from a room, so a slot index stays valid for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId {
    pub room: RoomId,
    pub slot: usize,
}

impl ItemId {
    pub fn new(room: RoomId, slot: usize) -> Self {
        Self { room, slot }
    }
}

/// Variant payload carried by an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// Plain collectible without any payload
    Collectible,
    /// Opens the door whose required-key token matches
    Key { token: String },
    /// Carries a numeric code the player needs elsewhere
    Passcode { code: String },
}

/// An item lying in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub position: Position,
    pub kind: ItemKind,
    #[serde(default)]
    collected: bool,
}

impl Item {
    /// Creates a plain collectible.
    pub fn collectible(name: impl Into<String>, description: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            position,
            kind: ItemKind::Collectible,
            collected: false,
        }
    }

    /// Creates a key that opens doors requiring `token`.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::{Item, Position};
    ///
    /// let key = Item::key("Master Key", "master_key", Position::new(650.0, 500.0));
    /// assert_eq!(key.key_token(), Some("master_key"));
    /// assert!(!key.is_collected());
    /// ```
    pub fn key(name: impl Into<String>, token: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            description: "A key to unlock doors".to_string(),
            position,
            kind: ItemKind::Key {
                token: token.into(),
            },
            collected: false,
        }
    }

    /// Creates a passcode note carrying `code`.
    pub fn passcode(name: impl Into<String>, code: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            description: "A numeric passcode".to_string(),
            position,
            kind: ItemKind::Passcode { code: code.into() },
            collected: false,
        }
    }

    /// Whether the player has picked this item up.
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the item collected.
    ///
    /// Returns false if it was already collected; the flag never goes back.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    /// Collision box of the item sprite.
    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.position, ITEM_SIZE, ITEM_SIZE)
    }

    /// Door token for keys.
    pub fn key_token(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Key { token } => Some(token),
            _ => None,
        }
    }

    /// Code for passcodes.
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Passcode { code } => Some(code),
            _ => None,
        }
    }
}
