//! # Asset Loading
//!
//! Font and room backgrounds. Every asset is optional: a missing file is logged
//! and the renderer falls back to the built-in font or a flat room colour.

use crate::game::{RoomId, World};
use log::{debug, warn};
use macroquad::prelude::*;
use std::collections::HashMap;

/// Font files tried in order.
pub const FONT_CANDIDATES: [&str; 2] = ["assets/arial.ttf", "arial.ttf"];

/// Loaded textures and font.
pub struct AssetStore {
    font: Option<Font>,
    backgrounds: HashMap<RoomId, Texture2D>,
}

impl AssetStore {
    /// Loads the first available font and the background of every room.
    pub async fn load(world: &World) -> Self {
        let mut store = Self {
            font: Self::load_font().await,
            backgrounds: HashMap::new(),
        };

        for room in world.rooms() {
            let Some(path) = room.background.as_deref() else {
                continue;
            };
            match load_texture(path).await {
                Ok(texture) => {
                    debug!("Loaded background {} for room {}", path, room.id());
                    store.backgrounds.insert(room.id(), texture);
                }
                Err(e) => warn!(
                    "Background {} for {} unavailable ({}), using a flat colour",
                    path,
                    room.name(),
                    e
                ),
            }
        }
        debug!(
            "{} of {} room backgrounds loaded",
            store.background_count(),
            world.room_count()
        );
        store
    }

    async fn load_font() -> Option<Font> {
        for path in FONT_CANDIDATES {
            match load_ttf_font(path).await {
                Ok(font) => {
                    debug!("Loaded font {}", path);
                    return Some(font);
                }
                Err(e) => debug!("Font {} not loaded: {}", path, e),
            }
        }
        warn!("No font file found, falling back to the default font");
        None
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn background(&self, room: RoomId) -> Option<&Texture2D> {
        self.backgrounds.get(&room)
    }

    pub fn background_count(&self) -> usize {
        self.backgrounds.len()
    }
}
