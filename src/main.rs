//! # Museum Escape Main Entry Point
//!
//! Parses the command line, sets up logging, builds the run from the built-in
//! museum or a layout file and hands over to the scene loop.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use museum_escape::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use museum_escape::{EscapeError, EscapeResult, GameState, InputHandler, SceneManager, WorldConfig};
use std::path::PathBuf;

/// Command line arguments for Museum Escape.
#[derive(Parser, Debug)]
#[command(name = "museum-escape")]
#[command(about = "Sneak past the guards, solve the puzzles, escape the museum")]
#[command(version)]
struct Args {
    /// JSON layout to play instead of the built-in museum
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Override the countdown, in seconds
    #[arg(short, long)]
    time_limit: Option<f32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Museum Escape".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> EscapeResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Museum Escape v{}", museum_escape::VERSION);

    run_game(&args).await.map_err(|e| {
        error!("{}", e);
        e
    })
}

/// Initializes the logging system based on the specified log level.
///
/// `RUST_LOG` wins over `--log-level` when set.
fn initialize_logging(log_level: &str) -> EscapeResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| EscapeError::InvalidState(format!("Logging setup failed: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .map_err(|e| EscapeError::InvalidState(format!("Logging setup failed: {}", e)))?;
    }

    Ok(())
}

/// Builds the world and runs the scene loop.
async fn run_game(args: &Args) -> EscapeResult<()> {
    let mut config = match &args.world {
        Some(path) => {
            info!("Loading layout from {}", path.display());
            WorldConfig::load(path)?
        }
        None => WorldConfig::museum()?,
    };

    if let Some(limit) = args.time_limit {
        info!("Countdown overridden to {}s", limit);
        config.time_limit = limit;
    }

    let game_state = GameState::new(config)?;
    let mut scenes = SceneManager::new(game_state, InputHandler::new()).await?;
    scenes.run().await
}
