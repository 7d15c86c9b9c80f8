//! # Rooms
//!
//! A room owns everything situated in it: puzzles, items, guards and doors.

use crate::game::{Bounds, Door, Guard, Item, ItemId, Puzzle, RoomId};

/// One area of the museum.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    name: String,
    bounds: Bounds,
    exit: bool,
    visited: bool,
    /// Optional background image path
    pub background: Option<String>,
    puzzles: Vec<Puzzle>,
    items: Vec<Item>,
    guards: Vec<Guard>,
    doors: Vec<Door>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id,
            name: name.into(),
            bounds,
            exit: false,
            visited: false,
            background: None,
            puzzles: Vec::new(),
            items: Vec::new(),
            guards: Vec::new(),
            doors: Vec::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }

    pub fn set_exit(&mut self, exit: bool) {
        self.exit = exit;
    }

    pub fn has_been_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn add_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzles.push(puzzle);
    }

    /// Adds an item and returns its handle.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        self.items.push(item);
        ItemId::new(self.id, self.items.len() - 1)
    }

    pub fn add_guard(&mut self, guard: Guard) {
        self.guards.push(guard);
    }

    pub fn add_door(&mut self, door: Door) {
        self.doors.push(door);
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn puzzle_mut(&mut self, index: usize) -> Option<&mut Puzzle> {
        self.puzzles.get_mut(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_mut(&mut self, slot: usize) -> Option<&mut Item> {
        self.items.get_mut(slot)
    }

    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    pub fn guards_mut(&mut self) -> &mut [Guard] {
        &mut self.guards
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door_mut(&mut self, index: usize) -> Option<&mut Door> {
        self.doors.get_mut(index)
    }

    /// Index of the first puzzle that is still unsolved.
    pub fn first_unsolved_puzzle(&self) -> Option<usize> {
        self.puzzles.iter().position(|puzzle| !puzzle.is_solved())
    }

    /// Index of the first door touching `bounds`.
    pub fn door_at(&self, bounds: &Bounds) -> Option<usize> {
        self.doors.iter().position(|door| door.intersects(bounds))
    }

    /// Slots of uncollected items touching `bounds`.
    pub fn items_at(&self, bounds: &Bounds) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_collected() && item.bounds().intersects(bounds))
            .map(|(slot, _)| slot)
            .collect()
    }

    pub fn all_puzzles_solved(&self) -> bool {
        self.puzzles.iter().all(Puzzle::is_solved)
    }

    /// Per-frame update of the things living in the room.
    pub fn update(&mut self, dt: f32) {
        for guard in &mut self.guards {
            guard.update(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn room() -> Room {
        Room::new(2, "Storage Room", Bounds::new(0.0, 0.0, 800.0, 600.0))
    }

    #[test]
    fn test_all_puzzles_solved_tracks_every_puzzle() {
        let mut room = room();
        assert!(room.all_puzzles_solved());

        room.add_puzzle(Puzzle::code_lock("12"));
        room.add_puzzle(Puzzle::riddle("?", "echo"));
        assert!(!room.all_puzzles_solved());
        assert_eq!(room.first_unsolved_puzzle(), Some(0));

        room.puzzle_mut(0).unwrap().solve("12");
        assert!(!room.all_puzzles_solved());
        assert_eq!(room.first_unsolved_puzzle(), Some(1));

        room.puzzle_mut(1).unwrap().solve("echo");
        assert!(room.all_puzzles_solved());
        assert_eq!(room.first_unsolved_puzzle(), None);
    }

    #[test]
    fn test_add_item_returns_stable_handles() {
        let mut room = room();
        let a = room.add_item(Item::collectible("A", "", Position::origin()));
        let b = room.add_item(Item::collectible("B", "", Position::origin()));
        assert_eq!(a, ItemId::new(2, 0));
        assert_eq!(b, ItemId::new(2, 1));
    }

    #[test]
    fn test_items_at_skips_collected() {
        let mut room = room();
        room.add_item(Item::collectible("A", "", Position::new(100.0, 100.0)));
        room.add_item(Item::collectible("B", "", Position::new(110.0, 100.0)));
        room.add_item(Item::collectible("C", "", Position::new(500.0, 500.0)));

        let player = Bounds::new(95.0, 95.0, 30.0, 30.0);
        assert_eq!(room.items_at(&player), vec![0, 1]);

        room.item_mut(0).unwrap().collect();
        assert_eq!(room.items_at(&player), vec![1]);
    }

    #[test]
    fn test_door_at_returns_first_match() {
        let mut room = room();
        room.add_door(Door::open(Position::new(750.0, 300.0), 3));
        room.add_door(Door::open(Position::new(760.0, 300.0), 4));
        let player = Bounds::new(755.0, 310.0, 30.0, 30.0);
        assert_eq!(room.door_at(&player), Some(0));
        assert_eq!(room.door_at(&Bounds::new(0.0, 0.0, 10.0, 10.0)), None);
    }
}
