//! # Game State Management
//!
//! The escape room controller. A single [`GameState`] owns the mode state machine,
//! the room arena, the player, the countdown and the inventory, and applies every
//! gameplay rule: interaction resolution, puzzle rewards and penalties, guard
//! detection and the win/lose checks.

use crate::config::{LONG_NOTIFICATION_SECONDS, NOTIFICATION_SECONDS};
use crate::game::{
    Countdown, Inventory, Item, ItemId, Player, Position, Puzzle, PuzzleInput, PuzzleOutcome,
    PuzzleRef, Reward, Room, RoomId, Symbol, World,
};
use crate::generation::WorldConfig;
use crate::input::{InputEvent, Key};
use crate::EscapeResult;
use log::{debug, info, warn};
use std::fmt;

/// Why a run ended in defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatReason {
    /// The countdown reached zero
    TimeExpired,
    /// A guard spotted the player a second time
    Caught,
}

/// Top-level mode of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, waiting for Enter
    Menu,
    /// Free movement in the current room
    Playing,
    /// A puzzle overlay has focus, the countdown is paused
    PuzzleActive,
    Paused,
    GameOver(DefeatReason),
    Victory,
}

impl GameMode {
    /// True for the two terminal modes.
    pub fn is_finished(self) -> bool {
        matches!(self, GameMode::GameOver(_) | GameMode::Victory)
    }
}

/// Colour class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
    /// Something the player has to remember, like a passcode
    Hint,
}

/// Short-lived banner shown above the room.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub tone: Tone,
    remaining: f32,
}

impl Notification {
    pub fn new(text: impl Into<String>, tone: Tone, duration: f32) -> Self {
        Self {
            text: text.into(),
            tone,
            remaining: duration,
        }
    }

    /// Seconds until the banner disappears.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }
}

/// Something noteworthy that happened during a run.
///
/// Events feed the statistics and the on-screen message log.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RunStarted,
    Paused,
    Resumed,
    RoomEntered {
        room: RoomId,
        name: String,
        first_visit: bool,
    },
    DoorUnlocked {
        room: RoomId,
        key: String,
    },
    DoorLocked {
        room: RoomId,
        required: String,
    },
    ItemCollected {
        item: ItemId,
        name: String,
    },
    InventoryFull {
        name: String,
    },
    PuzzleActivated {
        puzzle: PuzzleRef,
    },
    PuzzleClosed {
        puzzle: PuzzleRef,
    },
    PuzzleSolved {
        puzzle: PuzzleRef,
        bonus: u32,
    },
    PuzzleFailed {
        puzzle: PuzzleRef,
    },
    RewardSpawned {
        item: ItemId,
        name: String,
    },
    PlayerWarned {
        penalty: f32,
    },
    PlayerCaught,
    Victory,
    Defeat {
        reason: DefeatReason,
    },
    Reset,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::RunStarted => write!(f, "The museum doors close behind you. Find a way out!"),
            GameEvent::Paused => write!(f, "Game paused"),
            GameEvent::Resumed => write!(f, "Game resumed"),
            GameEvent::RoomEntered { name, .. } => write!(f, "Entered {}", name),
            GameEvent::DoorUnlocked { key, .. } => write!(f, "Door unlocked with {}", key),
            GameEvent::DoorLocked { required, .. } => {
                write!(f, "Door is locked. You need: {}", required)
            }
            GameEvent::ItemCollected { name, .. } => write!(f, "Picked up {}", name),
            GameEvent::InventoryFull { name } => write!(f, "Inventory full, left {} behind", name),
            GameEvent::PuzzleActivated { .. } => write!(f, "Puzzle opened"),
            GameEvent::PuzzleClosed { .. } => write!(f, "Puzzle closed"),
            GameEvent::PuzzleSolved { bonus, .. } => write!(f, "Puzzle solved! +{}s", bonus),
            GameEvent::PuzzleFailed { .. } => write!(f, "Wrong answer"),
            GameEvent::RewardSpawned { name, .. } => write!(f, "{} appeared in the room", name),
            GameEvent::PlayerWarned { penalty } => {
                write!(f, "A guard spotted you! -{}s", penalty)
            }
            GameEvent::PlayerCaught => write!(f, "Caught by a guard"),
            GameEvent::Victory => write!(f, "You escaped!"),
            GameEvent::Defeat { reason } => match reason {
                DefeatReason::TimeExpired => write!(f, "Time ran out"),
                DefeatReason::Caught => write!(f, "You were caught"),
            },
            GameEvent::Reset => write!(f, "New run ready"),
        }
    }
}

/// Game statistics tracking player progress, shown on the end screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStatistics {
    /// Puzzles solved this run
    pub puzzles_solved: u32,
    /// Wrong puzzle submissions
    pub wrong_answers: u32,
    /// Items picked up
    pub items_collected: u32,
    /// Distinct rooms entered, the start room included
    pub rooms_visited: u32,
    /// Locked doors opened with a key
    pub doors_unlocked: u32,
    /// Times a guard spotted the player
    pub detections: u32,
}

impl GameStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PuzzleSolved { .. } => self.puzzles_solved += 1,
            GameEvent::PuzzleFailed { .. } => self.wrong_answers += 1,
            GameEvent::ItemCollected { .. } => self.items_collected += 1,
            GameEvent::RoomEntered {
                first_visit: true, ..
            } => self.rooms_visited += 1,
            GameEvent::DoorUnlocked { .. } => self.doors_unlocked += 1,
            GameEvent::PlayerWarned { .. } | GameEvent::PlayerCaught => self.detections += 1,
            _ => {}
        }
    }
}

/// The escape room controller.
///
/// Window-free: input arrives as [`InputEvent`]s plus a movement vector, and
/// everything the renderer needs is readable through accessors.
#[derive(Debug, Clone)]
pub struct GameState {
    config: WorldConfig,
    /// Room arena
    pub world: World,
    pub player: Player,
    /// Run countdown
    pub timer: Countdown,
    pub inventory: Inventory,
    /// Progress counters for the end screens
    pub statistics: GameStatistics,
    mode: GameMode,
    current_room: RoomId,
    active_puzzle: Option<PuzzleRef>,
    notification: Option<Notification>,
    events: Vec<GameEvent>,
    quit_requested: bool,
}

impl GameState {
    /// Validates the layout and builds a fresh run in [`GameMode::Menu`].
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::{GameMode, GameState, WorldConfig};
    ///
    /// let state = GameState::new(WorldConfig::museum().unwrap()).unwrap();
    /// assert_eq!(state.mode(), GameMode::Menu);
    /// assert_eq!(state.current_room_id(), 1);
    /// ```
    pub fn new(config: WorldConfig) -> EscapeResult<Self> {
        config.validate()?;
        info!(
            "Building world: {} rooms, {:.0}s on the clock",
            config.rooms.len(),
            config.time_limit
        );

        Ok(Self {
            world: config.build_world(),
            player: Player::new(config.player_start),
            timer: Countdown::new(config.time_limit),
            inventory: Inventory::new(config.inventory_capacity),
            statistics: GameStatistics::new(),
            mode: GameMode::Menu,
            current_room: config.start_room,
            active_puzzle: None,
            notification: None,
            events: Vec::new(),
            quit_requested: false,
            config,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn current_room_id(&self) -> RoomId {
        self.current_room
    }

    /// The room the player is in. `None` only for a broken room graph.
    pub fn current_room(&self) -> Option<&Room> {
        self.world.room(self.current_room)
    }

    pub fn active_puzzle_ref(&self) -> Option<PuzzleRef> {
        self.active_puzzle
    }

    /// The puzzle overlay currently shown, if any.
    pub fn active_puzzle(&self) -> Option<&Puzzle> {
        self.active_puzzle.and_then(|puzzle| self.world.puzzle(puzzle))
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Takes the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Handles one frame's worth of input.
    ///
    /// Dispatch stops at the first event that changes the mode, so the
    /// character of a key that opened a puzzle never lands in its input box.
    pub fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            let before = self.mode;
            self.handle_event(event);
            if self.mode != before || self.quit_requested {
                break;
            }
        }
    }

    /// Routes one input event according to the current mode.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if *event == InputEvent::CloseRequested {
            info!("Window close requested");
            self.quit_requested = true;
            return;
        }

        match self.mode {
            GameMode::Menu => match event {
                InputEvent::KeyPressed(Key::Enter) => {
                    self.start();
                }
                InputEvent::KeyPressed(Key::Escape) => self.quit_requested = true,
                _ => {}
            },
            GameMode::Playing => match event {
                InputEvent::KeyPressed(Key::Escape) => {
                    self.pause();
                }
                InputEvent::KeyPressed(Key::Inventory) => self.inventory.toggle_visibility(),
                InputEvent::KeyPressed(Key::Interact) => self.interact(),
                InputEvent::KeyPressed(Key::Puzzle) => {
                    self.activate_puzzle();
                }
                _ => {}
            },
            GameMode::PuzzleActive => {
                if let Some(input) = Self::puzzle_input_for(event) {
                    self.puzzle_input(input);
                } else if *event == InputEvent::KeyPressed(Key::Escape) {
                    self.close_puzzle();
                }
            }
            GameMode::Paused => {
                if *event == InputEvent::KeyPressed(Key::Escape) {
                    self.resume();
                }
            }
            GameMode::GameOver(_) | GameMode::Victory => match event {
                InputEvent::KeyPressed(Key::Enter) => self.reset(),
                InputEvent::KeyPressed(Key::Escape) => self.quit_requested = true,
                _ => {}
            },
        }
    }

    fn puzzle_input_for(event: &InputEvent) -> Option<PuzzleInput> {
        match event {
            InputEvent::KeyPressed(Key::Enter) => Some(PuzzleInput::Submit),
            InputEvent::KeyPressed(Key::Backspace) => Some(PuzzleInput::Backspace),
            InputEvent::KeyPressed(Key::Reset) => Some(PuzzleInput::Reset),
            InputEvent::Text(c) => Some(PuzzleInput::Char(*c)),
            InputEvent::MouseClick(point) => Symbol::at_point(*point).map(PuzzleInput::Select),
            _ => None,
        }
    }

    /// Menu → Playing. Starts the countdown and marks the start room visited.
    pub fn start(&mut self) -> bool {
        if self.mode != GameMode::Menu {
            return false;
        }

        self.mode = GameMode::Playing;
        self.timer.start();
        self.emit(GameEvent::RunStarted);
        info!("Run started");

        if let Some(room) = self.world.room_mut(self.current_room) {
            let first_visit = !room.has_been_visited();
            room.set_visited(true);
            let name = room.name().to_string();
            self.emit(GameEvent::RoomEntered {
                room: self.current_room,
                name,
                first_visit,
            });
        }
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        self.mode = GameMode::Paused;
        self.timer.pause();
        self.emit(GameEvent::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.mode != GameMode::Paused {
            return false;
        }
        self.mode = GameMode::Playing;
        self.timer.resume();
        self.emit(GameEvent::Resumed);
        true
    }

    /// Rebuilds the run from the layout and returns to the menu.
    pub fn reset(&mut self) {
        self.world = self.config.build_world();
        self.player = Player::new(self.config.player_start);
        self.timer = Countdown::new(self.config.time_limit);
        self.inventory = Inventory::new(self.config.inventory_capacity);
        self.statistics = GameStatistics::new();
        self.mode = GameMode::Menu;
        self.current_room = self.config.start_room;
        self.active_puzzle = None;
        self.notification = None;
        self.events.clear();
        self.emit(GameEvent::Reset);
        info!("Run reset");
    }

    /// Moves the player into `target`, placing them at the entry point.
    ///
    /// Returns false and leaves everything untouched for an unknown room.
    pub fn change_room(&mut self, target: RoomId) -> bool {
        let Some(room) = self.world.room_mut(target) else {
            warn!("Door leads to unknown room {}", target);
            return false;
        };

        let first_visit = !room.has_been_visited();
        room.set_visited(true);
        let name = room.name().to_string();

        self.current_room = target;
        self.player.set_position(self.config.entry_point);
        info!("Entered room {} ({})", target, name);
        self.emit(GameEvent::RoomEntered {
            room: target,
            name,
            first_visit,
        });
        true
    }

    /// Uses the first door the player overlaps, then picks up overlapping items.
    ///
    /// Pickup runs against whatever room the player is in afterwards.
    pub fn interact(&mut self) {
        if self.mode != GameMode::Playing {
            return;
        }
        self.use_door();
        self.pick_up_items();
    }

    fn use_door(&mut self) {
        let player_bounds = self.player.bounds();
        let room_id = self.current_room;
        let Some(room) = self.world.room_mut(room_id) else {
            return;
        };
        let Some(index) = room.door_at(&player_bounds) else {
            return;
        };
        let Some(door) = room.door_mut(index) else {
            return;
        };
        let target = door.target;

        // Doors without a required key swing open on first use.
        if door.try_open(None) {
            self.change_room(target);
            return;
        }

        let Some(token) = door.required_key().map(str::to_owned) else {
            return;
        };
        let Some(key_name) = self.world.key_name(&token).map(str::to_owned) else {
            debug!("No item is registered for key token {}", token);
            return;
        };

        let held_token = self
            .inventory
            .get_item(&key_name)
            .and_then(|id| self.world.item(id))
            .and_then(Item::key_token)
            .map(str::to_owned);
        let opened = match held_token {
            Some(held) => self
                .world
                .room_mut(room_id)
                .and_then(|room| room.door_mut(index))
                .is_some_and(|door| door.try_open(Some(&held))),
            None => false,
        };

        if opened {
            info!("Unlocked door to room {} with {}", target, key_name);
            self.notify(format!("Door unlocked with {}!", key_name), Tone::Success);
            self.emit(GameEvent::DoorUnlocked {
                room: target,
                key: key_name,
            });
            self.change_room(target);
        } else {
            self.notify(format!("LOCKED! Need {}", key_name), Tone::Danger);
            self.emit(GameEvent::DoorLocked {
                room: target,
                required: key_name,
            });
        }
    }

    fn pick_up_items(&mut self) {
        let player_bounds = self.player.bounds();
        let room_id = self.current_room;
        let Some(slots) = self
            .world
            .room(room_id)
            .map(|room| room.items_at(&player_bounds))
        else {
            return;
        };

        for slot in slots {
            let id = ItemId::new(room_id, slot);

            if self.inventory.is_full() {
                let name = self
                    .world
                    .item(id)
                    .map(|item| item.name.clone())
                    .unwrap_or_default();
                debug!("Inventory full, {} stays in room {}", name, room_id);
                self.notify(format!("Inventory full! Can't pick up {}", name), Tone::Danger);
                self.emit(GameEvent::InventoryFull { name });
                continue;
            }

            let Some(item) = self
                .world
                .room_mut(room_id)
                .and_then(|room| room.item_mut(slot))
            else {
                continue;
            };
            if !item.collect() {
                continue;
            }
            let item = item.clone();

            self.inventory.add_item(id, &item);
            self.player.add_item(id);
            info!("Collected {}", item.name);

            match item.code() {
                Some(code) => self.notify_for(
                    format!("{}: {} - Remember this!", item.name.to_uppercase(), code),
                    Tone::Hint,
                    LONG_NOTIFICATION_SECONDS,
                ),
                None => self.notify(format!("Picked up: {}", item.name), Tone::Info),
            }
            self.emit(GameEvent::ItemCollected {
                item: id,
                name: item.name,
            });
        }
    }

    /// Opens the first unsolved puzzle of the current room.
    pub fn activate_puzzle(&mut self) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        let Some(index) = self.current_room().and_then(Room::first_unsolved_puzzle) else {
            debug!("No unsolved puzzle in room {}", self.current_room);
            return false;
        };

        let puzzle = PuzzleRef {
            room: self.current_room,
            index,
        };
        self.active_puzzle = Some(puzzle);
        self.mode = GameMode::PuzzleActive;
        self.timer.pause();

        let notice = self
            .world
            .puzzle(puzzle)
            .and_then(|p| p.activation_notice.clone());
        match notice {
            Some(notice) => self.notify_for(notice, Tone::Hint, 2.0 * NOTIFICATION_SECONDS),
            None => self.notify("Puzzle activated! Press ESC to close", Tone::Info),
        }
        self.emit(GameEvent::PuzzleActivated { puzzle });
        true
    }

    /// Leaves the puzzle overlay without solving it.
    pub fn close_puzzle(&mut self) -> bool {
        if self.mode != GameMode::PuzzleActive {
            return false;
        }
        self.mode = GameMode::Playing;
        self.timer.resume();
        if let Some(puzzle) = self.active_puzzle.take() {
            self.emit(GameEvent::PuzzleClosed { puzzle });
        }
        true
    }

    /// Feeds input to the active puzzle and applies the time effects.
    ///
    /// A wrong submission is counted but leaves the countdown alone. The bonus
    /// and the reward only apply on the transition to solved; the overlay stays
    /// open until the player closes it.
    pub fn puzzle_input(&mut self, input: PuzzleInput) -> PuzzleOutcome {
        if self.mode != GameMode::PuzzleActive {
            return PuzzleOutcome::Pending;
        }
        let Some(puzzle_ref) = self.active_puzzle else {
            return PuzzleOutcome::Pending;
        };
        let Some(puzzle) = self.world.puzzle_mut(puzzle_ref) else {
            return PuzzleOutcome::Pending;
        };

        let was_solved = puzzle.is_solved();
        let outcome = puzzle.handle_input(input);
        let solved_now = !was_solved && puzzle.is_solved();
        let bonus = puzzle.time_bonus;
        let reward = if solved_now { puzzle.reward.clone() } else { None };

        if solved_now {
            self.on_puzzle_solved(puzzle_ref, bonus, reward);
        } else if outcome == PuzzleOutcome::Wrong {
            debug!("Wrong answer for {:?}", puzzle_ref);
            self.emit(GameEvent::PuzzleFailed { puzzle: puzzle_ref });
        }
        outcome
    }

    fn on_puzzle_solved(&mut self, puzzle: PuzzleRef, bonus: u32, reward: Option<Reward>) {
        self.timer.add_time(bonus as f32);
        info!("Puzzle {:?} solved, +{}s", puzzle, bonus);
        self.emit(GameEvent::PuzzleSolved { puzzle, bonus });

        match reward {
            Some(reward) => {
                let name = reward.item.name.clone();
                let spawned = self
                    .world
                    .room_mut(puzzle.room)
                    .map(|room| room.add_item(reward.item));
                if let Some(item) = spawned {
                    info!("{} spawned in room {}", name, puzzle.room);
                    self.notify_for(reward.notice, Tone::Warning, 2.0 * NOTIFICATION_SECONDS);
                    self.emit(GameEvent::RewardSpawned { item, name });
                }
            }
            None => self.notify(format!("Puzzle Solved! +{}s", bonus), Tone::Success),
        }
    }

    /// Advances one frame: movement, guards, and the win/lose checks.
    ///
    /// Only [`GameMode::Playing`] advances the simulation; every other mode
    /// just lets the notification fade.
    pub fn update(&mut self, dt: f32, movement: Position) {
        if matches!(self.mode, GameMode::Playing | GameMode::PuzzleActive) {
            self.tick_notification(dt);
        }
        if self.mode != GameMode::Playing {
            return;
        }

        self.timer.update(dt);

        let Some(room) = self.world.room_mut(self.current_room) else {
            debug!("Current room {} is missing, skipping frame", self.current_room);
            return;
        };
        let area = room.bounds();
        self.player.walk(movement, dt, &area);
        room.update(dt);

        if self.check_guards() {
            return;
        }
        self.check_victory();
        if self.mode == GameMode::Playing && self.timer.is_expired() {
            self.finish(GameMode::GameOver(DefeatReason::TimeExpired));
        }
    }

    /// Returns true when the player was caught.
    fn check_guards(&mut self) -> bool {
        let player_bounds = self.player.bounds();
        let Some(room) = self.world.room_mut(self.current_room) else {
            return false;
        };

        let mut detections = 0;
        for guard in room.guards_mut() {
            if guard.detect_player(&player_bounds) {
                detections += 1;
            }
        }

        for _ in 0..detections {
            if self.player.is_warned() {
                self.player.escalate();
                warn!("Player caught in room {}", self.current_room);
                self.notify("CAUGHT! Game Over!", Tone::Danger);
                self.emit(GameEvent::PlayerCaught);
                self.finish(GameMode::GameOver(DefeatReason::Caught));
                return true;
            }

            self.player.escalate();
            let penalty = self.config.detection_penalty;
            self.timer.subtract_time(penalty);
            warn!("Player spotted, -{}s", penalty);
            self.notify_for(
                "WARNING! Spotted by a guard!",
                Tone::Warning,
                1.5 * NOTIFICATION_SECONDS,
            );
            self.emit(GameEvent::PlayerWarned { penalty });
        }
        false
    }

    fn check_victory(&mut self) {
        let Some(room) = self.current_room() else {
            return;
        };
        if !room.is_exit() {
            return;
        }

        if self.world.all_puzzles_solved() {
            self.notify("ESCAPED! You win!", Tone::Success);
            self.finish(GameMode::Victory);
        } else {
            self.notify("Solve ALL puzzles to escape!", Tone::Danger);
        }
    }

    fn finish(&mut self, mode: GameMode) {
        self.mode = mode;
        self.timer.stop();
        self.active_puzzle = None;
        match mode {
            GameMode::Victory => {
                info!("Escaped with {} left", self.timer.display());
                self.emit(GameEvent::Victory);
            }
            GameMode::GameOver(reason) => {
                info!("Run lost: {:?}", reason);
                self.emit(GameEvent::Defeat { reason });
            }
            _ => {}
        }
    }

    /// Shows a notification for the default lifetime.
    pub fn notify(&mut self, text: impl Into<String>, tone: Tone) {
        self.notify_for(text, tone, NOTIFICATION_SECONDS);
    }

    /// Shows a notification, replacing the current one.
    ///
    /// Repeating the text of a live notification only refreshes its lifetime.
    pub fn notify_for(&mut self, text: impl Into<String>, tone: Tone, duration: f32) {
        let text = text.into();
        if let Some(current) = self.notification.as_mut() {
            if current.text == text {
                current.remaining = current.remaining.max(duration);
                return;
            }
        }
        debug!("Notification: {}", text);
        self.notification = Some(Notification::new(text, tone, duration));
    }

    fn tick_notification(&mut self, dt: f32) {
        if let Some(notification) = self.notification.as_mut() {
            if !notification.tick(dt) {
                self.notification = None;
            }
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.statistics.update_from_event(&event);
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Bounds;
    use crate::generation::{DoorConfig, GuardConfig, PuzzleConfig, PuzzleSpec, RoomConfig};

    fn room(id: RoomId, name: &str) -> RoomConfig {
        RoomConfig {
            id,
            name: name.to_string(),
            bounds: Bounds::new(0.0, 0.0, 800.0, 600.0),
            exit: false,
            background: None,
            doors: Vec::new(),
            items: Vec::new(),
            guards: Vec::new(),
            puzzles: Vec::new(),
        }
    }

    /// Two rooms, a riddle in the first, the second is the exit.
    fn two_room_config() -> WorldConfig {
        let mut start = room(1, "Lobby");
        start.doors.push(DoorConfig {
            position: Position::new(750.0, 300.0),
            target: 2,
            locked: false,
            required_key: None,
        });
        start.puzzles.push(PuzzleConfig {
            spec: PuzzleSpec::Riddle {
                question: "What has keys but can't open locks?".to_string(),
                answer: "piano".to_string(),
            },
            activation_notice: None,
            reward: None,
        });
        let mut exit = room(2, "Exit");
        exit.exit = true;

        WorldConfig {
            start_room: 1,
            player_start: Position::new(100.0, 100.0),
            entry_point: Position::new(100.0, 300.0),
            time_limit: 600.0,
            inventory_capacity: 10,
            detection_penalty: 5.0,
            key_names: Default::default(),
            rooms: vec![start, exit],
        }
    }

    fn started(config: WorldConfig) -> GameState {
        let mut state = GameState::new(config).unwrap();
        assert!(state.start());
        state
    }

    fn type_text(state: &mut GameState, text: &str) {
        for c in text.chars() {
            state.handle_event(&InputEvent::Text(c));
        }
    }

    #[test]
    fn test_menu_starts_on_enter() {
        let mut state = GameState::new(two_room_config()).unwrap();
        state.update(5.0, Position::origin());
        assert_eq!(state.timer.remaining(), state.config().time_limit);

        state.handle_event(&InputEvent::KeyPressed(Key::Enter));
        assert_eq!(state.mode(), GameMode::Playing);
        assert!(state.timer.is_running());
        assert!(state.current_room().unwrap().has_been_visited());
        assert_eq!(state.statistics.rooms_visited, 1);
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let mut state = started(two_room_config());
        state.handle_event(&InputEvent::KeyPressed(Key::Escape));
        assert_eq!(state.mode(), GameMode::Paused);

        let before = state.player.position;
        state.update(3.0, Position::new(1.0, 0.0));
        assert_eq!(state.player.position, before);
        assert_eq!(state.timer.remaining(), state.config().time_limit);

        state.handle_event(&InputEvent::KeyPressed(Key::Escape));
        assert_eq!(state.mode(), GameMode::Playing);
    }

    #[test]
    fn test_puzzle_key_does_not_type_into_the_riddle() {
        let mut state = started(two_room_config());
        state.handle_events(&[
            InputEvent::KeyPressed(Key::Puzzle),
            InputEvent::Text('p'),
        ]);
        assert_eq!(state.mode(), GameMode::PuzzleActive);
        match state.active_puzzle().unwrap().kind() {
            crate::game::PuzzleKind::Riddle(riddle) => assert_eq!(riddle.input(), ""),
            other => panic!("unexpected puzzle {:?}", other),
        }
    }

    #[test]
    fn test_wrong_then_right_answer() {
        let mut state = started(two_room_config());
        assert!(state.activate_puzzle());
        assert!(!state.timer.is_running());

        type_text(&mut state, "organ");
        state.handle_event(&InputEvent::KeyPressed(Key::Enter));
        assert_eq!(state.mode(), GameMode::PuzzleActive);
        assert_eq!(state.timer.remaining(), 600.0);
        assert_eq!(state.statistics.wrong_answers, 1);

        type_text(&mut state, "Piano");
        state.handle_event(&InputEvent::KeyPressed(Key::Enter));
        assert_eq!(state.mode(), GameMode::PuzzleActive);
        assert_eq!(state.timer.remaining(), 600.0 + 30.0);
        assert!(state.world.all_puzzles_solved());
        assert_eq!(state.statistics.puzzles_solved, 1);

        // further input is ignored and the bonus is not paid twice
        state.handle_event(&InputEvent::KeyPressed(Key::Enter));
        assert_eq!(state.timer.remaining(), 600.0 + 30.0);

        state.handle_event(&InputEvent::KeyPressed(Key::Escape));
        assert_eq!(state.mode(), GameMode::Playing);
        // solved puzzles are skipped
        assert!(!state.activate_puzzle());
    }

    #[test]
    fn test_answer_and_enter_in_one_frame() {
        let mut state = started(two_room_config());
        assert!(state.activate_puzzle());

        let frame = crate::input::frame_events(false, "piano".chars(), [Key::Enter], None);
        state.handle_events(&frame);

        assert!(state.world.all_puzzles_solved());
        assert_eq!(state.statistics.wrong_answers, 0);
    }

    #[test]
    fn test_escape_closes_puzzle_and_resumes_timer() {
        let mut state = started(two_room_config());
        state.activate_puzzle();
        state.handle_event(&InputEvent::KeyPressed(Key::Escape));
        assert_eq!(state.mode(), GameMode::Playing);
        assert!(state.timer.is_running());
        assert!(state.active_puzzle().is_none());
    }

    #[test]
    fn test_exit_requires_every_puzzle() {
        let mut state = started(two_room_config());
        assert!(state.change_room(2));
        state.update(0.1, Position::origin());
        assert_eq!(state.mode(), GameMode::Playing);
        assert_eq!(
            state.notification().unwrap().text,
            "Solve ALL puzzles to escape!"
        );

        state.world.puzzle_mut(PuzzleRef { room: 1, index: 0 }).unwrap().solve("piano");
        state.update(0.1, Position::origin());
        assert_eq!(state.mode(), GameMode::Victory);
        assert!(!state.timer.is_running());
    }

    #[test]
    fn test_time_expiry_is_defeat() {
        let mut config = two_room_config();
        config.time_limit = 1.0;
        let mut state = started(config);
        state.update(1.0, Position::origin());
        assert_eq!(state.mode(), GameMode::GameOver(DefeatReason::TimeExpired));
    }

    #[test]
    fn test_door_moves_player_to_entry_point() {
        let mut state = started(two_room_config());
        state.player.set_position(Position::new(745.0, 310.0));
        state.handle_event(&InputEvent::KeyPressed(Key::Interact));
        assert_eq!(state.current_room_id(), 2);
        assert_eq!(state.player.position, state.config().entry_point);
        assert_eq!(state.statistics.rooms_visited, 2);
    }

    #[test]
    fn test_unknown_room_is_a_no_op() {
        let mut state = started(two_room_config());
        assert!(!state.change_room(42));
        assert_eq!(state.current_room_id(), 1);
    }

    #[test]
    fn test_second_detection_is_caught() {
        let mut config = two_room_config();
        config.rooms[0].guards.push(GuardConfig {
            position: Position::new(100.0, 100.0),
            speed: 0.0,
            detection_radius: 60.0,
            patrol: Vec::new(),
        });
        let mut state = started(config);

        state.player.set_position(Position::new(100.0, 100.0));
        state.update(0.01, Position::origin());
        assert!(state.player.is_warned());
        assert_eq!(state.mode(), GameMode::Playing);
        assert!(state.timer.remaining() < 600.0 - 4.9);

        // staying in sight does not re-trigger
        state.update(0.01, Position::origin());
        assert_eq!(state.mode(), GameMode::Playing);

        state.player.set_position(Position::new(500.0, 500.0));
        state.update(2.5, Position::origin());
        state.player.set_position(Position::new(100.0, 100.0));
        state.update(0.01, Position::origin());
        assert_eq!(state.mode(), GameMode::GameOver(DefeatReason::Caught));
        assert_eq!(state.statistics.detections, 2);
    }

    #[test]
    fn test_end_screen_enter_resets_to_menu() {
        let mut config = two_room_config();
        config.time_limit = 1.0;
        let mut state = started(config);
        state.update(2.0, Position::origin());
        assert!(state.mode().is_finished());

        state.handle_event(&InputEvent::KeyPressed(Key::Enter));
        assert_eq!(state.mode(), GameMode::Menu);
        assert_eq!(state.current_room_id(), 1);
        assert_eq!(state.statistics, GameStatistics::new());
        assert!(!state.world.all_puzzles_solved());
    }

    #[test]
    fn test_close_request_quits_from_any_mode() {
        let mut state = started(two_room_config());
        state.activate_puzzle();
        state.handle_event(&InputEvent::CloseRequested);
        assert!(state.should_quit());
    }

    #[test]
    fn test_notifications_expire() {
        let mut state = started(two_room_config());
        state.notify("hello", Tone::Info);
        state.update(NOTIFICATION_SECONDS / 2.0, Position::origin());
        assert!(state.notification().is_some());
        state.update(NOTIFICATION_SECONDS, Position::origin());
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_events_drain_once() {
        let mut state = started(two_room_config());
        let events = state.drain_events();
        assert_eq!(events[0], GameEvent::RunStarted);
        assert!(state.drain_events().is_empty());
    }
}
