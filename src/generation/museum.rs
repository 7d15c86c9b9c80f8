//! # Museum Layout
//!
//! The built-in five-room museum, embedded as JSON.
//!
//! Entrance Hall → Storage Room (pattern puzzle, rewards the Master Key) →
//! Artifact Room (riddle, Secret Code passcode) → Security Office (code lock,
//! rewards the Security Card) → Exit Hall.

use crate::generation::WorldConfig;
use crate::EscapeResult;

/// Raw JSON of the built-in layout.
pub const MUSEUM_LAYOUT: &str = include_str!("../../assets/museum.json");

impl WorldConfig {
    /// Parses and validates the built-in museum.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::WorldConfig;
    ///
    /// let config = WorldConfig::museum().unwrap();
    /// assert_eq!(config.rooms.len(), 5);
    /// ```
    pub fn museum() -> EscapeResult<Self> {
        Self::from_json(MUSEUM_LAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PuzzleKind, Symbol};

    #[test]
    fn test_museum_flow() {
        let config = WorldConfig::museum().unwrap();
        let world = config.build_world();

        assert_eq!(config.start_room, 1);
        assert_eq!(world.room_count(), 5);
        assert!(world.room(5).unwrap().is_exit());
        assert_eq!(world.key_name("master_key"), Some("Master Key"));
        assert_eq!(world.key_name("security_card"), Some("Security Card"));

        let storage = world.room(2).unwrap();
        match storage.puzzles()[0].kind() {
            PuzzleKind::Pattern(state) => assert_eq!(
                state.target(),
                &[Symbol::Blue, Symbol::Green, Symbol::Red, Symbol::Yellow]
            ),
            other => panic!("unexpected puzzle {:?}", other),
        }
        assert!(storage.doors().iter().any(|d| d.target == 3 && d.is_locked()));

        let artifacts = world.room(3).unwrap();
        assert_eq!(artifacts.items()[0].code(), Some("4738"));

        let office = world.room(4).unwrap();
        assert_eq!(office.guards().len(), 2);
        let reward = office.puzzles()[0].reward.as_ref().unwrap();
        assert_eq!(reward.item.name, "Security Card");
    }
}
