//! Axis-aligned box overlap and per-frame collision resolution
//!
//! The overlap test is half-open and lopsided at the edges:
//! `!(r1 <= x2 || x1 > r2 || b1 <= y2 || y1 > b2)`. A box whose left edge sits
//! exactly on another's right edge still counts as touching when it is the
//! first argument. Resolution passes always put the same kind of entity
//! first so outcomes are stable.

use glam::Vec2;

use super::motion::clamp_to_canvas;
use super::state::GameState;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Overlap test between `self` and `other`
    pub fn overlaps(&self, other: &Aabb) -> bool {
        collides(
            self.pos.x,
            self.pos.y,
            self.right(),
            self.bottom(),
            other.pos.x,
            other.pos.y,
            other.right(),
            other.bottom(),
        )
    }
}

/// Edge form of the overlap test: (x, y, right, bottom) for each box
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn collides(x: f32, y: f32, r: f32, b: f32, x2: f32, y2: f32, r2: f32, b2: f32) -> bool {
    !(r <= x2 || x > r2 || b <= y2 || y > b2)
}

/// Resolve every collision for this frame, in gameplay order
pub fn resolve(state: &mut GameState) {
    let (w, h) = (state.tuning.canvas_width, state.tuning.canvas_height);
    clamp_to_canvas(&mut state.player, w, h);

    enemies_vs_bullets(state);
    megaliths_vs_bullets(state);
    megaliths_vs_enemies(state);
}

/// Each enemy is destroyed by the first bullet it overlaps (one bullet per
/// enemy). Any enemy touching the player ends the game, even one that was
/// destroyed in the same pass.
fn enemies_vs_bullets(state: &mut GameState) {
    let player = state.player.bounds();
    let kill_score = state.tuning.kill_score;

    let mut i = 0;
    while i < state.enemies.len() {
        let enemy_box = state.enemies[i].bounds();
        let hit = state
            .bullets
            .iter()
            .position(|b| enemy_box.overlaps(&b.bounds()));

        if let Some(j) = hit {
            let enemy = state.enemies.remove(i);
            state.bullets.remove(j);
            state.award(kill_score);
            state.spawn_explosion(enemy.pos);
            log::debug!("Enemy {} destroyed at {:?}", enemy.id, enemy.pos);
        } else {
            i += 1;
        }

        if enemy_box.overlaps(&player) {
            state.game_over();
        }
    }
}

/// Megaliths swallow the first bullet they overlap and kill the player on
/// contact. They never break.
fn megaliths_vs_bullets(state: &mut GameState) {
    let player = state.player.bounds();

    for k in 0..state.megaliths.len() {
        let rock = state.megaliths[k].bounds();
        if let Some(j) = state.bullets.iter().position(|b| rock.overlaps(&b.bounds())) {
            state.bullets.remove(j);
        }

        if rock.overlaps(&player) {
            state.game_over();
        }
    }
}

/// An enemy running into a megalith is replaced by a fresh enemy nudged away
/// vertically: down if its centre is below the rock's centre, otherwise up.
/// At most one enemy per megalith is deflected per frame.
fn megaliths_vs_enemies(state: &mut GameState) {
    let player = state.player.bounds();
    let offset = state.tuning.deflect_offset;

    for k in 0..state.megaliths.len() {
        let rock = state.megaliths[k].bounds();

        let mut j = 0;
        while j < state.enemies.len() {
            let enemy_box = state.enemies[j].bounds();
            if rock.overlaps(&enemy_box) {
                let enemy = state.enemies.remove(j);
                let dy = if enemy_box.center().y > rock.center().y {
                    offset
                } else {
                    -offset
                };
                state.spawn_enemy(enemy.pos + Vec2::new(0.0, dy));
                break;
            }

            // Re-checked per scanned enemy; the result always matches the
            // megalith/player test above.
            if rock.overlaps(&player) {
                state.game_over();
            }
            j += 1;
        }
    }
}
