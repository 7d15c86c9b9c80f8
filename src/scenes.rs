//! # Scene Management System
//!
//! The per-frame loop: poll input, advance the [`GameState`], forward its events
//! to the message log and draw. Which screen is drawn follows the game mode, so
//! the loop itself carries no scene state.

use crate::{EscapeResult, GameEvent, GameState, InputHandler, MacroquadDisplay};
use log::{info, warn};
use macroquad::prelude::*;

/// Longest frame step fed to the simulation, in seconds.
const MAX_FRAME_TIME: f32 = 0.25;

/// The main scene manager that drives the game until it quits.
pub struct SceneManager {
    game_state: GameState,
    display: MacroquadDisplay,
    input_handler: InputHandler,
}

impl SceneManager {
    /// Creates a new scene manager, loading the display assets for the world.
    pub async fn new(game_state: GameState, input_handler: InputHandler) -> EscapeResult<Self> {
        let mut display = MacroquadDisplay::new(&game_state.world).await?;
        display.add_message("Welcome to the museum. Press ENTER to begin.".to_string());

        Ok(Self {
            game_state,
            display,
            input_handler,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Runs the main loop until the player quits or closes the window.
    pub async fn run(&mut self) -> EscapeResult<()> {
        self.input_handler.capture_quit();

        loop {
            let events = self.input_handler.poll_events();
            self.game_state.handle_events(&events);
            if self.game_state.should_quit() {
                break;
            }

            let dt = get_frame_time().min(MAX_FRAME_TIME);
            let movement = self.input_handler.movement();
            self.game_state.update(dt, movement);
            self.forward_events();

            if let Err(e) = self.display.render_game(&self.game_state) {
                warn!("Skipping frame: {}", e);
            }
            next_frame().await;
        }

        info!("Game loop ended");
        Ok(())
    }

    /// Moves the controller's events into the on-screen message log.
    fn forward_events(&mut self) {
        for event in self.game_state.drain_events() {
            if event == GameEvent::Reset {
                self.display.messages.clear();
            }
            self.display.add_message(event.to_string());
        }
    }
}
