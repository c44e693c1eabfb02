//! Scene drawing
//!
//! `render` walks the game state in draw order and hands each entity to a
//! `Surface`. The browser build draws onto a Canvas 2D context; tests record
//! the calls instead.

use glam::Vec2;

use crate::sim::{Entity, GameState, Sprite};

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// Something a frame can be drawn onto
pub trait Surface {
    /// Cover the whole surface with the terrain tile
    fn fill_background(&mut self, width: f32, height: f32);

    /// Draw the sprite's current frame with its top-left corner at `pos`
    fn draw_sprite(&mut self, pos: Vec2, sprite: &Sprite);
}

/// Draw one frame: background, player (while alive), then bullets, enemies,
/// explosions and megaliths, each list on top of the previous one
pub fn render<S: Surface>(state: &GameState, surface: &mut S) {
    surface.fill_background(state.tuning.canvas_width, state.tuning.canvas_height);

    if !state.is_game_over() {
        draw_entity(surface, &state.player);
    }

    for list in [
        &state.bullets,
        &state.enemies,
        &state.explosions,
        &state.megaliths,
    ] {
        for entity in list {
            draw_entity(surface, entity);
        }
    }
}

fn draw_entity<S: Surface>(surface: &mut S, entity: &Entity) {
    surface.draw_sprite(entity.pos, &entity.sprite);
}
