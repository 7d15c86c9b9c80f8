//! Loading and validating layouts from disk.

use museum_escape::{EscapeError, GameMode, GameState, InputEvent, Key, Position, WorldConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const TWO_ROOMS: &str = r#"{
  "start_room": 10,
  "time_limit": 90.0,
  "inventory_capacity": 1,
  "rooms": [
    {
      "id": 10,
      "name": "Cellar",
      "items": [
        { "name": "Lamp", "position": { "x": 300.0, "y": 300.0 } },
        { "name": "Rope", "position": { "x": 310.0, "y": 300.0 } }
      ],
      "doors": [ { "position": { "x": 750.0, "y": 300.0 }, "target": 20, "locked": true } ]
    },
    { "id": 20, "name": "Street", "exit": true }
  ]
}"#;

fn write_layout(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write layout");
    file
}

#[test]
fn test_load_from_file_with_defaults() {
    let file = write_layout(TWO_ROOMS);
    let config = WorldConfig::load(file.path()).unwrap();

    assert_eq!(config.start_room, 10);
    assert_eq!(config.time_limit, 90.0);
    assert_eq!(config.entry_point, Position::new(100.0, 300.0));
    assert_eq!(config.detection_penalty, 5.0);
    assert_eq!(config.rooms[0].bounds.width, 800.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = WorldConfig::load(dir.path().join("nope.json"));
    assert!(matches!(result, Err(EscapeError::Io(_))));
}

#[test]
fn test_malformed_json_is_serde_error() {
    let file = write_layout("{ \"rooms\": [");
    assert!(matches!(
        WorldConfig::load(file.path()),
        Err(EscapeError::Serde(_))
    ));
}

#[test]
fn test_layout_without_exit_is_rejected() {
    let json = TWO_ROOMS.replace("\"exit\": true", "\"exit\": false");
    assert!(matches!(
        WorldConfig::from_json(&json),
        Err(EscapeError::InvalidConfig(_))
    ));
}

#[test]
fn test_bad_code_lock_is_rejected() {
    let json = r#"{
      "start_room": 1,
      "rooms": [ { "id": 1, "name": "Vault", "exit": true,
                   "puzzles": [ { "type": "code_lock", "code": "12a4" } ] } ]
    }"#;
    assert!(matches!(
        WorldConfig::from_json(json),
        Err(EscapeError::InvalidConfig(_))
    ));
}

#[test]
fn test_saved_layout_loads_back() {
    let config = WorldConfig::museum().unwrap();
    let file = write_layout(&config.to_json().unwrap());
    assert_eq!(WorldConfig::load(file.path()).unwrap(), config);
}

#[test]
fn test_full_inventory_leaves_items_behind() {
    let mut state = GameState::new(WorldConfig::from_json(TWO_ROOMS).unwrap()).unwrap();
    state.handle_events(&[InputEvent::KeyPressed(Key::Enter)]);

    state.player.set_position(Position::new(295.0, 295.0));
    state.handle_events(&[InputEvent::KeyPressed(Key::Interact)]);

    assert_eq!(state.inventory.len(), 1);
    assert!(state.inventory.has_item("Lamp"));
    let room = state.current_room().unwrap();
    assert!(!room.items()[1].is_collected());
    assert_eq!(
        state.notification().unwrap().text,
        "Inventory full! Can't pick up Rope"
    );
}

#[test]
fn test_keyless_locked_door_opens_on_use() {
    let mut state = GameState::new(WorldConfig::from_json(TWO_ROOMS).unwrap()).unwrap();
    state.handle_events(&[InputEvent::KeyPressed(Key::Enter)]);

    state.player.set_position(Position::new(745.0, 310.0));
    state.handle_events(&[InputEvent::KeyPressed(Key::Interact)]);
    assert_eq!(state.current_room_id(), 20);

    // the exit has no puzzles left to solve
    state.update(0.01, Position::origin());
    assert_eq!(state.mode(), GameMode::Victory);
}

#[test]
fn test_door_wants_the_key_token_not_just_the_name() {
    let json = r#"{
      "start_room": 1,
      "key_names": { "master_key": "Master Key" },
      "rooms": [
        {
          "id": 1,
          "name": "Gift Shop",
          "items": [ { "name": "Master Key", "position": { "x": 300.0, "y": 300.0 } } ],
          "doors": [ { "position": { "x": 750.0, "y": 300.0 }, "target": 2,
                       "locked": true, "required_key": "master_key" } ]
        },
        { "id": 2, "name": "Street", "exit": true }
      ]
    }"#;
    let mut state = GameState::new(WorldConfig::from_json(json).unwrap()).unwrap();
    state.handle_events(&[InputEvent::KeyPressed(Key::Enter)]);

    // a souvenir named like the key, without its token
    state.player.set_position(Position::new(295.0, 295.0));
    state.handle_events(&[InputEvent::KeyPressed(Key::Interact)]);
    assert!(state.inventory.has_item("Master Key"));

    state.player.set_position(Position::new(745.0, 310.0));
    state.handle_events(&[InputEvent::KeyPressed(Key::Interact)]);
    assert_eq!(state.current_room_id(), 1);
    assert_eq!(state.notification().unwrap().text, "LOCKED! Need Master Key");
}
