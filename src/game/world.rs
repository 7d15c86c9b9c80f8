//! # World
//!
//! Arena of rooms indexed by id, plus the room-graph specific table that maps
//! required-key tokens to the human-readable key names the inventory holds.

use crate::game::{Item, ItemId, Puzzle, Room, RoomId};
use std::collections::{BTreeMap, HashMap};

/// Handle to a puzzle: owning room plus index in that room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleRef {
    pub room: RoomId,
    pub index: usize,
}

/// The room graph.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: BTreeMap<RoomId, Room>,
    key_names: HashMap<String, String>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room, replacing any room with the same id.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id(), room);
    }

    /// Registers the key name that opens doors requiring `token`.
    pub fn add_key_name(&mut self, token: impl Into<String>, name: impl Into<String>) {
        self.key_names.insert(token.into(), name.into());
    }

    /// Key name for a required-key token.
    pub fn key_name(&self, token: &str) -> Option<&str> {
        self.key_names.get(token).map(String::as_str)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    /// Rooms in ascending id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.room(id.room)?.items().get(id.slot)
    }

    pub fn puzzle(&self, puzzle: PuzzleRef) -> Option<&Puzzle> {
        self.room(puzzle.room)?.puzzles().get(puzzle.index)
    }

    pub fn puzzle_mut(&mut self, puzzle: PuzzleRef) -> Option<&mut Puzzle> {
        self.room_mut(puzzle.room)?.puzzle_mut(puzzle.index)
    }

    /// True when every puzzle in every room is solved.
    pub fn all_puzzles_solved(&self) -> bool {
        self.rooms.values().all(Room::all_puzzles_solved)
    }

    /// Total and solved puzzle counts across the world.
    pub fn puzzle_progress(&self) -> (usize, usize) {
        self.rooms
            .values()
            .flat_map(|room| room.puzzles())
            .fold((0, 0), |(solved, total), puzzle| {
                (solved + usize::from(puzzle.is_solved()), total + 1)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Bounds, Position};

    fn world() -> World {
        let mut world = World::new();
        let mut storage = Room::new(2, "Storage Room", Bounds::new(0.0, 0.0, 800.0, 600.0));
        storage.add_puzzle(Puzzle::code_lock("1"));
        storage.add_item(Item::key("Master Key", "master_key", Position::origin()));
        world.add_room(storage);

        let mut artifacts = Room::new(3, "Artifact Room", Bounds::new(0.0, 0.0, 800.0, 600.0));
        artifacts.add_puzzle(Puzzle::riddle("?", "echo"));
        world.add_room(artifacts);

        world.add_key_name("master_key", "Master Key");
        world
    }

    #[test]
    fn test_lookups() {
        let world = world();
        assert_eq!(world.room_count(), 2);
        assert!(world.room(1).is_none());
        assert_eq!(world.room(3).unwrap().name(), "Artifact Room");
        assert_eq!(world.key_name("master_key"), Some("Master Key"));
        assert_eq!(world.key_name("security_card"), None);
        assert_eq!(world.item(ItemId::new(2, 0)).unwrap().name, "Master Key");
        assert!(world.item(ItemId::new(2, 5)).is_none());
        assert!(world.puzzle(PuzzleRef { room: 9, index: 0 }).is_none());
    }

    #[test]
    fn test_all_puzzles_solved_spans_every_room() {
        let mut world = world();
        assert!(!world.all_puzzles_solved());
        assert_eq!(world.puzzle_progress(), (0, 2));

        world.puzzle_mut(PuzzleRef { room: 2, index: 0 }).unwrap().solve("1");
        assert!(!world.all_puzzles_solved());
        assert_eq!(world.puzzle_progress(), (1, 2));

        world.puzzle_mut(PuzzleRef { room: 3, index: 0 }).unwrap().solve("echo");
        assert!(world.all_puzzles_solved());
    }
}
