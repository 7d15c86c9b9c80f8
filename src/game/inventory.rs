//! # Inventory
//!
//! Bounded, ordered list of collected items.

use crate::game::{Item, ItemId};
use serde::{Deserialize, Serialize};

/// One occupied inventory slot.
///
/// The item itself stays owned by its room; the slot keeps the handle and the name
/// so key checks do not need to walk the room arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySlot {
    pub id: ItemId,
    pub name: String,
}

/// Fixed-capacity inventory with a visibility toggle for the overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<InventorySlot>,
    capacity: usize,
    visible: bool,
}

impl Inventory {
    /// Creates an empty inventory holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            visible: false,
        }
    }

    /// Adds an item. Returns false and leaves the inventory untouched when full.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::{Inventory, Item, ItemId, Position};
    ///
    /// let mut inventory = Inventory::new(1);
    /// let key = Item::key("Master Key", "master_key", Position::origin());
    /// assert!(inventory.add_item(ItemId::new(2, 0), &key));
    /// assert!(!inventory.add_item(ItemId::new(2, 1), &key));
    /// assert_eq!(inventory.len(), 1);
    /// ```
    pub fn add_item(&mut self, id: ItemId, item: &Item) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(InventorySlot {
            id,
            name: item.name.clone(),
        });
        true
    }

    /// Removes the first item with the given name.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.slots.iter().position(|slot| slot.name == name) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.slots.iter().any(|slot| slot.name == name)
    }

    /// Handle of the first item with the given name.
    pub fn get_item(&self, name: &str) -> Option<ItemId> {
        self.slots.iter().find(|slot| slot.name == name).map(|slot| slot.id)
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
