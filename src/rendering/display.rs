//! # Display Management
//!
//! Screen management and 2D graphics rendering functionality using macroquad.

use crate::config::{PLAYER_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::{GameMode, GameState, Guard, ItemKind, Player, Room, World};
use crate::rendering::{AssetStore, UI};
use crate::{EscapeError, EscapeResult};
use macroquad::prelude::*;

const ROOM_FLOOR: Color = Color::new(40.0 / 255.0, 40.0 / 255.0, 50.0 / 255.0, 1.0);
const OPEN_DOOR: Color = Color::new(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0);

/// Macroquad display manager for the game.
///
/// Draws whatever the [`GameState`] mode calls for and keeps a short log of
/// game events along the bottom edge.
pub struct MacroquadDisplay {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Message history
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Font and room backgrounds
    pub assets: AssetStore,
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Loads the assets for `world` and prepares the display.
    pub async fn new(world: &World) -> EscapeResult<Self> {
        let assets = AssetStore::load(world).await;
        let ui = UI::new(assets.font().cloned());

        Ok(Self {
            screen_width: WINDOW_WIDTH,
            screen_height: WINDOW_HEIGHT,
            messages: Vec::new(),
            max_messages: 100,
            assets,
            ui,
        })
    }

    /// Renders the complete screen for the current mode.
    ///
    /// Fails with [`EscapeError::InvalidState`] when the current room is
    /// missing; nothing of the room view is drawn then.
    pub fn render_game(&self, state: &GameState) -> EscapeResult<()> {
        clear_background(Color::new(20.0 / 255.0, 20.0 / 255.0, 30.0 / 255.0, 1.0));

        match state.mode() {
            GameMode::Menu => {
                self.ui.render_menu();
                return Ok(());
            }
            GameMode::Victory => {
                self.render_room_view(state)?;
                self.ui
                    .render_end_screen(None, &state.statistics, &state.timer.display());
                return Ok(());
            }
            GameMode::GameOver(reason) => {
                self.render_room_view(state)?;
                self.ui
                    .render_end_screen(Some(reason), &state.statistics, &state.timer.display());
                return Ok(());
            }
            GameMode::Playing | GameMode::PuzzleActive | GameMode::Paused => {}
        }

        self.render_room_view(state)?;

        if state.inventory.is_visible() {
            self.ui.render_inventory(&state.inventory, &state.world);
        }

        match state.mode() {
            GameMode::PuzzleActive => {
                if let Some(puzzle) = state.active_puzzle() {
                    self.ui.render_puzzle(puzzle);
                }
            }
            GameMode::Paused => self.ui.render_paused(),
            _ => {}
        }

        if let Some(notification) = state.notification() {
            self.ui.render_notification(notification);
        }
        Ok(())
    }

    /// Room, its contents, the player, the HUD and the message log.
    fn render_room_view(&self, state: &GameState) -> EscapeResult<()> {
        let room = state.current_room().ok_or_else(|| {
            EscapeError::InvalidState(format!("No room {}", state.current_room_id()))
        })?;

        self.render_room(room);
        self.render_player(&state.player);
        self.ui
            .render_hud(room.name(), &state.timer, state.world.puzzle_progress());

        if state.mode() == GameMode::Playing && room.first_unsolved_puzzle().is_some() {
            self.ui.text(
                "A puzzle is hidden here. Press P to try it.",
                10.0,
                self.screen_height - 95.0,
                18,
                YELLOW,
            );
        }
        self.render_messages();
        Ok(())
    }

    fn render_room(&self, room: &Room) {
        let bounds = room.bounds();
        match self.assets.background(room.id()) {
            Some(texture) => draw_texture_ex(
                texture,
                bounds.x,
                bounds.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(bounds.width, bounds.height)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(bounds.x, bounds.y, bounds.width, bounds.height, ROOM_FLOOR),
        }

        for door in room.doors() {
            let area = door.bounds();
            let color = if door.is_locked() { RED } else { OPEN_DOOR };
            draw_rectangle(area.x, area.y, area.width, area.height, color);
            draw_rectangle_lines(area.x, area.y, area.width, area.height, 2.0, WHITE);
        }

        for item in room.items().iter().filter(|item| !item.is_collected()) {
            let area = item.bounds();
            let color = match item.kind {
                ItemKind::Key { .. } => SKYBLUE,
                ItemKind::Passcode { .. } => MAGENTA,
                ItemKind::Collectible => WHITE,
            };
            draw_rectangle(area.x, area.y, area.width, area.height, color);
        }

        for guard in room.guards() {
            self.render_guard(guard);
        }
    }

    fn render_guard(&self, guard: &Guard) {
        let (x, y) = (guard.position.x, guard.position.y);
        draw_circle(x, y, guard.detection_radius, Color::new(1.0, 0.0, 0.0, 0.15));
        draw_circle_lines(x, y, guard.detection_radius, 1.0, Color::new(1.0, 0.3, 0.3, 0.6));
        draw_circle(x, y, 15.0, RED);
    }

    fn render_player(&self, player: &Player) {
        let color = if player.is_warned() { ORANGE } else { BLUE };
        draw_rectangle(player.position.x, player.position.y, PLAYER_SIZE, PLAYER_SIZE, color);
        draw_rectangle_lines(
            player.position.x,
            player.position.y,
            PLAYER_SIZE,
            PLAYER_SIZE,
            2.0,
            WHITE,
        );
    }

    /// Renders the message area.
    fn render_messages(&self) {
        let message_area_y = self.screen_height - 60.0;
        let message_count = 3;
        let line_height = 18.0;

        draw_rectangle(
            0.0,
            message_area_y - 16.0,
            self.screen_width,
            76.0,
            Color::new(0.0, 0.0, 0.0, 0.6),
        );

        let start_index = self.messages.len().saturating_sub(message_count);
        for (i, message) in self.messages.iter().skip(start_index).enumerate() {
            let y = message_area_y + i as f32 * line_height;
            self.ui.text(message, 10.0, y, 16, LIGHTGRAY);
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }
}
