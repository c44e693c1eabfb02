//! Position integration and off-screen expiry

use glam::Vec2;

use super::state::{Entity, EntityKind, GameState};
use crate::input::{Key, KeyState};

/// Move the player by the held direction keys. Diagonals add up, so moving
/// diagonally is faster than moving along one axis.
pub fn steer_player(state: &mut GameState, keys: &KeyState, dt: f32) {
    let step = state.tuning.player_speed * dt;
    let pos = &mut state.player.pos;

    if keys.either(Key::Down, Key::S) {
        pos.y += step;
    }
    if keys.either(Key::Up, Key::W) {
        pos.y -= step;
    }
    if keys.either(Key::Left, Key::A) {
        pos.x -= step;
    }
    if keys.either(Key::Right, Key::D) {
        pos.x += step;
    }
}

/// Advance animations and move bullets and enemies, dropping whatever has
/// left the play area or finished exploding
pub fn advance(state: &mut GameState, dt: f32) {
    let (w, h) = (state.tuning.canvas_width, state.tuning.canvas_height);
    let bullet_speed = state.tuning.bullet_speed;
    let enemy_speed = state.tuning.enemy_speed;

    state.player.sprite.update(dt);

    state.bullets.retain_mut(|bullet| {
        if let EntityKind::Bullet(dir) = bullet.kind {
            bullet.pos += dir.velocity() * bullet_speed * dt;
        }
        let p = bullet.pos;
        !(p.y < 0.0 || p.y > h || p.x > w)
    });

    state.enemies.retain_mut(|enemy| {
        enemy.pos.x -= enemy_speed * dt;
        enemy.sprite.update(dt);
        enemy.pos.x + enemy.sprite.size.x >= 0.0
    });

    state.explosions.retain_mut(|explosion| {
        explosion.sprite.update(dt);
        !explosion.sprite.is_done()
    });
}

/// Snap an entity back inside the canvas
pub fn clamp_to_canvas(entity: &mut Entity, width: f32, height: f32) {
    let max = Vec2::new(width, height) - entity.sprite.size;
    let pos = &mut entity.pos;

    if pos.x < 0.0 {
        pos.x = 0.0;
    } else if pos.x > max.x {
        pos.x = max.x;
    }

    if pos.y < 0.0 {
        pos.y = 0.0;
    } else if pos.y > max.y {
        pos.y = max.y;
    }
}
