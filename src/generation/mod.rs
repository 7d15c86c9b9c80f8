//! # Generation Module
//!
//! Builds the room graph from a declarative layout.
//!
//! Rooms, doors, items, guards, puzzles and puzzle rewards are described by a
//! [`WorldConfig`] (JSON via serde) that is validated and turned into a [`World`]
//! at startup. The built-in museum lives in [`museum`].

pub mod museum;

pub use museum::*;

use crate::config;
use crate::game::{Bounds, Door, Guard, Item, ItemKind, Position, Puzzle, Reward, Room, RoomId, Symbol, World};
use crate::{EscapeError, EscapeResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Complete layout of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Room the player starts in
    pub start_room: RoomId,
    /// Player position at the start of the run
    #[serde(default = "default_player_start")]
    pub player_start: Position,
    /// Player position after walking through a door
    #[serde(default = "default_entry_point")]
    pub entry_point: Position,
    /// Countdown in seconds
    #[serde(default = "default_time_limit")]
    pub time_limit: f32,
    #[serde(default = "default_inventory_capacity")]
    pub inventory_capacity: usize,
    /// Seconds lost on the first guard detection
    #[serde(default = "default_detection_penalty")]
    pub detection_penalty: f32,
    /// Required-key token to the name of the item that opens it
    #[serde(default)]
    pub key_names: BTreeMap<String, String>,
    pub rooms: Vec<RoomConfig>,
}

/// One room of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub id: RoomId,
    pub name: String,
    #[serde(default = "default_room_bounds")]
    pub bounds: Bounds,
    #[serde(default)]
    pub exit: bool,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub doors: Vec<DoorConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub guards: Vec<GuardConfig>,
    #[serde(default)]
    pub puzzles: Vec<PuzzleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorConfig {
    pub position: Position,
    pub target: RoomId,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub required_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub position: Position,
    #[serde(default = "default_item_kind")]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    pub position: Position,
    pub speed: f32,
    #[serde(default = "default_detection_radius")]
    pub detection_radius: f32,
    #[serde(default)]
    pub patrol: Vec<Position>,
}

/// Variant-specific puzzle parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PuzzleSpec {
    Riddle { question: String, answer: String },
    Pattern { sequence: Vec<Symbol> },
    CodeLock { code: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    #[serde(flatten)]
    pub spec: PuzzleSpec,
    #[serde(default)]
    pub activation_notice: Option<String>,
    #[serde(default)]
    pub reward: Option<RewardConfig>,
}

/// Item that appears in the room when its puzzle is solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub item: ItemConfig,
    pub notice: String,
}

fn default_player_start() -> Position {
    Position::new(100.0, 100.0)
}

fn default_entry_point() -> Position {
    Position::new(100.0, 300.0)
}

fn default_time_limit() -> f32 {
    config::DEFAULT_TIME_LIMIT
}

fn default_inventory_capacity() -> usize {
    config::DEFAULT_INVENTORY_CAPACITY
}

fn default_detection_penalty() -> f32 {
    config::DEFAULT_DETECTION_PENALTY
}

fn default_detection_radius() -> f32 {
    config::DEFAULT_DETECTION_RADIUS
}

fn default_room_bounds() -> Bounds {
    Bounds::new(0.0, 0.0, config::WINDOW_WIDTH, config::WINDOW_HEIGHT)
}

fn default_item_kind() -> ItemKind {
    ItemKind::Collectible
}

impl WorldConfig {
    /// Parses a layout from JSON and validates it.
    pub fn from_json(json: &str) -> EscapeResult<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a layout file.
    pub fn load(path: impl AsRef<Path>) -> EscapeResult<Self> {
        let path = path.as_ref();
        debug!("Loading world layout from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> EscapeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the layout for mistakes that would make the run unplayable.
    ///
    /// Dangling door targets and tokens without a key name only produce warnings;
    /// at runtime they behave as inert doors.
    pub fn validate(&self) -> EscapeResult<()> {
        if self.rooms.is_empty() {
            return Err(invalid("layout has no rooms"));
        }
        if !(self.time_limit > 0.0) {
            return Err(invalid(format!("time limit must be positive, got {}", self.time_limit)));
        }
        if self.inventory_capacity == 0 {
            return Err(invalid("inventory capacity must be at least 1"));
        }

        let mut ids = HashSet::new();
        for room in &self.rooms {
            if !ids.insert(room.id) {
                return Err(invalid(format!("duplicate room id {}", room.id)));
            }
        }
        if !ids.contains(&self.start_room) {
            return Err(invalid(format!("start room {} does not exist", self.start_room)));
        }
        if !self.rooms.iter().any(|room| room.exit) {
            return Err(invalid("layout has no exit room"));
        }

        for room in &self.rooms {
            for puzzle in &room.puzzles {
                validate_puzzle(room, &puzzle.spec)?;
            }
            for door in &room.doors {
                if !ids.contains(&door.target) {
                    warn!(
                        "Door in room {} leads to unknown room {}; it will not open",
                        room.id, door.target
                    );
                }
                if let Some(token) = door.required_key.as_deref().filter(|t| !t.is_empty()) {
                    if !self.key_names.contains_key(token) {
                        warn!(
                            "Door in room {} needs key token '{}' with no key name mapping",
                            room.id, token
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Builds a fresh world from this layout.
    pub fn build_world(&self) -> World {
        let mut world = World::new();
        for (token, name) in &self.key_names {
            world.add_key_name(token.clone(), name.clone());
        }
        for room in &self.rooms {
            world.add_room(room.build());
        }
        world
    }
}

impl RoomConfig {
    fn build(&self) -> Room {
        let mut room = Room::new(self.id, self.name.clone(), self.bounds);
        room.set_exit(self.exit);
        room.background = self.background.clone();

        for door in &self.doors {
            room.add_door(door.build());
        }
        for item in &self.items {
            room.add_item(item.build());
        }
        for guard in &self.guards {
            room.add_guard(
                Guard::new(guard.position, guard.speed, guard.detection_radius)
                    .with_patrol(guard.patrol.iter().copied()),
            );
        }
        for puzzle in &self.puzzles {
            room.add_puzzle(puzzle.build());
        }
        room
    }
}

impl DoorConfig {
    fn build(&self) -> Door {
        if self.locked {
            Door::locked(self.position, self.target, self.required_key.clone())
        } else {
            Door::open(self.position, self.target)
        }
    }
}

impl ItemConfig {
    fn build(&self) -> Item {
        let mut item = match &self.kind {
            ItemKind::Collectible => Item::collectible(self.name.clone(), "", self.position),
            ItemKind::Key { token } => Item::key(self.name.clone(), token.clone(), self.position),
            ItemKind::Passcode { code } => Item::passcode(self.name.clone(), code.clone(), self.position),
        };
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        item
    }
}

impl PuzzleConfig {
    fn build(&self) -> Puzzle {
        let mut puzzle = match &self.spec {
            PuzzleSpec::Riddle { question, answer } => Puzzle::riddle(question.clone(), answer),
            PuzzleSpec::Pattern { sequence } => Puzzle::pattern(sequence.clone()),
            PuzzleSpec::CodeLock { code } => Puzzle::code_lock(code.clone()),
        };
        if let Some(notice) = &self.activation_notice {
            puzzle = puzzle.with_activation_notice(notice.clone());
        }
        if let Some(reward) = &self.reward {
            puzzle = puzzle.with_reward(Reward {
                item: reward.item.build(),
                notice: reward.notice.clone(),
            });
        }
        puzzle
    }
}

fn validate_puzzle(room: &RoomConfig, spec: &PuzzleSpec) -> EscapeResult<()> {
    match spec {
        PuzzleSpec::Riddle { answer, .. } if answer.trim().is_empty() => Err(invalid(format!(
            "riddle in room {} has an empty answer",
            room.id
        ))),
        PuzzleSpec::Pattern { sequence } if sequence.is_empty() => Err(invalid(format!(
            "pattern puzzle in room {} has an empty sequence",
            room.id
        ))),
        PuzzleSpec::CodeLock { code } if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) => {
            Err(invalid(format!(
                "code lock in room {} needs a digit-only code, got '{}'",
                room.id, code
            )))
        }
        _ => Ok(()),
    }
}

fn invalid(message: impl Into<String>) -> EscapeError {
    EscapeError::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> WorldConfig {
        WorldConfig::from_json(
            r#"{
                "start_room": 1,
                "rooms": [
                    {"id": 1, "name": "Hall", "exit": true,
                     "puzzles": [{"type": "code_lock", "code": "12"}]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = minimal();
        assert_eq!(config.time_limit, config::DEFAULT_TIME_LIMIT);
        assert_eq!(config.inventory_capacity, config::DEFAULT_INVENTORY_CAPACITY);
        assert_eq!(config.rooms[0].bounds, Bounds::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(config.entry_point, Position::new(100.0, 300.0));
    }

    #[test]
    fn test_rejects_duplicate_room_ids() {
        let mut config = minimal();
        config.rooms.push(config.rooms[0].clone());
        assert!(matches!(config.validate(), Err(EscapeError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_missing_start_and_exit() {
        let mut config = minimal();
        config.start_room = 7;
        assert!(config.validate().is_err());

        let mut config = minimal();
        config.rooms[0].exit = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_puzzles() {
        let mut config = minimal();
        config.rooms[0].puzzles[0].spec = PuzzleSpec::CodeLock {
            code: "12a".to_string(),
        };
        assert!(config.validate().is_err());

        config.rooms[0].puzzles[0].spec = PuzzleSpec::Pattern { sequence: vec![] };
        assert!(config.validate().is_err());

        config.rooms[0].puzzles[0].spec = PuzzleSpec::Riddle {
            question: "?".to_string(),
            answer: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_dangling_door_is_only_a_warning() {
        let mut config = minimal();
        config.rooms[0].doors.push(DoorConfig {
            position: Position::new(750.0, 300.0),
            target: 42,
            locked: true,
            required_key: Some("ghost_key".to_string()),
        });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_world() {
        let config = minimal();
        let world = config.build_world();
        assert_eq!(world.room_count(), 1);
        let hall = world.room(1).unwrap();
        assert!(hall.is_exit());
        assert_eq!(hall.puzzles().len(), 1);
        assert!(!world.all_puzzles_solved());
    }

    #[test]
    fn test_reward_and_notice_are_attached() {
        let config = WorldConfig::from_json(
            r#"{
                "start_room": 1,
                "key_names": {"master_key": "Master Key"},
                "rooms": [
                    {"id": 1, "name": "Storage", "exit": true,
                     "puzzles": [{
                        "type": "pattern",
                        "sequence": ["blue", "green", "red", "yellow"],
                        "activation_notice": "Watch the lights",
                        "reward": {
                            "item": {"name": "Master Key", "position": {"x": 650.0, "y": 500.0},
                                     "kind": {"type": "key", "token": "master_key"}},
                            "notice": "Master Key appeared!"
                        }
                     }]}
                ]
            }"#,
        )
        .unwrap();

        let world = config.build_world();
        let puzzle = &world.room(1).unwrap().puzzles()[0];
        assert_eq!(puzzle.activation_notice.as_deref(), Some("Watch the lights"));
        let reward = puzzle.reward.as_ref().unwrap();
        assert_eq!(reward.item.key_token(), Some("master_key"));
        assert_eq!(reward.item.description, "A key to unlock doors");
        assert_eq!(world.key_name("master_key"), Some("Master Key"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = minimal();
        let json = config.to_json().unwrap();
        assert_eq!(WorldConfig::from_json(&json).unwrap(), config);
    }
}
