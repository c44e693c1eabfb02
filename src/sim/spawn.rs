//! Enemy spawning, megalith placement and firing

use glam::Vec2;
use rand::Rng;

use super::state::{BulletDir, ENEMY_SIZE, GameState};
use crate::input::{Key, KeyState};
use crate::tuning::ObstacleMode;

/// Megalith positions for a level. Spacing scales with the level so later
/// levels push some rocks off the right edge of the canvas.
pub fn megalith_layout(level: u32) -> [Vec2; 5] {
    let l = level as f32;
    [
        Vec2::new(100.0 * l, 10.0 * l),
        Vec2::new(300.0, 100.0 * l),
        Vec2::new(400.0 * l, 400.0),
        Vec2::new(150.0 * l, 400.0),
        Vec2::new(200.0 * l, 200.0),
    ]
}

/// Append the current level's megaliths according to the obstacle mode
pub fn place_megaliths(state: &mut GameState) {
    let level = state.level;
    match state.tuning.obstacle_mode {
        ObstacleMode::OncePerLevel if state.obstacles_placed == Some(level) => return,
        ObstacleMode::OncePerLevel => {
            log::debug!("Placing megaliths for level {}", level);
        }
        ObstacleMode::EveryFrame => {}
    }

    for pos in megalith_layout(level) {
        state.spawn_megalith(pos);
    }
    state.obstacles_placed = Some(level);
}

/// Chance that an enemy appears this frame: `1 - base^t`. Zero at the start
/// of a round, climbing toward certainty.
#[inline]
pub fn spawn_probability(game_time: f32, base: f32) -> f32 {
    1.0 - base.powf(game_time)
}

/// Roll the spawn ramp; on success an enemy enters at the right edge at a
/// random height. Returns whether one spawned.
pub fn maybe_spawn_enemy(state: &mut GameState) -> bool {
    let p = spawn_probability(state.game_time, state.tuning.spawn_base);
    let roll: f32 = state.rng().random();
    if roll >= p {
        return false;
    }

    let v: f32 = state.rng().random();
    let x = state.tuning.canvas_width;
    let y = v * (state.tuning.canvas_height - ENEMY_SIZE.y);
    state.spawn_enemy(Vec2::new(x, y));
    true
}

/// Fire a forward/up/down volley from the player's centre if the fire key is
/// held, the round is live and the cooldown has passed. `now_ms` is any
/// monotonic millisecond clock. Returns whether a volley was fired.
pub fn try_fire(state: &mut GameState, keys: &KeyState, now_ms: f64) -> bool {
    if !keys.is_down(Key::Space) || state.is_game_over() {
        return false;
    }
    if let Some(last) = state.last_fire_ms {
        if now_ms - last <= state.tuning.fire_cooldown_ms {
            return false;
        }
    }

    let origin = state.player.center();
    for dir in [BulletDir::Forward, BulletDir::Up, BulletDir::Down] {
        state.spawn_bullet(origin, dir);
    }
    state.last_fire_ms = Some(now_ms);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn fresh(tuning: Tuning) -> GameState {
        let mut state = GameState::new(11, tuning);
        state.reset();
        state
    }

    #[test]
    fn test_layout_for_level_two() {
        assert_eq!(
            megalith_layout(2),
            [
                Vec2::new(200.0, 20.0),
                Vec2::new(300.0, 200.0),
                Vec2::new(800.0, 400.0),
                Vec2::new(300.0, 400.0),
                Vec2::new(400.0, 200.0),
            ]
        );
    }

    #[test]
    fn test_megaliths_placed_once_per_level() {
        let mut state = fresh(Tuning::default());
        place_megaliths(&mut state);
        place_megaliths(&mut state);
        assert_eq!(state.megaliths.len(), 5);

        state.reset();
        place_megaliths(&mut state);
        assert_eq!(state.megaliths.len(), 5);
        assert_eq!(state.megaliths[1].pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_megaliths_every_frame_accumulate() {
        let tuning = Tuning {
            obstacle_mode: ObstacleMode::EveryFrame,
            ..Tuning::default()
        };
        let mut state = fresh(tuning);
        for _ in 0..3 {
            place_megaliths(&mut state);
        }
        assert_eq!(state.megaliths.len(), 15);
    }

    #[test]
    fn test_spawn_probability_ramp() {
        assert_eq!(spawn_probability(0.0, 0.993), 0.0);
        let mut last = 0.0;
        for t in 1..200 {
            let p = spawn_probability(t as f32, 0.993);
            assert!(p > last, "p({t}) = {p} not above {last}");
            last = p;
        }
        assert!(spawn_probability(5000.0, 0.993) > 0.999);
    }

    #[test]
    fn test_no_spawn_at_time_zero() {
        let mut state = fresh(Tuning::default());
        for _ in 0..1000 {
            assert!(!maybe_spawn_enemy(&mut state));
        }
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_spawned_enemies_enter_at_right_edge() {
        let mut state = fresh(Tuning::default());
        state.game_time = 10_000.0;
        for _ in 0..50 {
            maybe_spawn_enemy(&mut state);
        }
        assert!(!state.enemies.is_empty());
        for enemy in &state.enemies {
            assert_eq!(enemy.pos.x, 512.0);
            assert!(enemy.pos.y >= 0.0 && enemy.pos.y <= 480.0 - 39.0);
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = fresh(Tuning::default());
        let mut b = fresh(Tuning::default());
        a.game_time = 60.0;
        b.game_time = 60.0;
        for _ in 0..100 {
            assert_eq!(maybe_spawn_enemy(&mut a), maybe_spawn_enemy(&mut b));
        }
        let ys = |s: &GameState| s.enemies.iter().map(|e| e.pos.y).collect::<Vec<_>>();
        assert_eq!(ys(&a), ys(&b));
    }

    #[test]
    fn test_fire_spawns_three_bullets_at_centre() {
        let mut state = fresh(Tuning::default());
        let keys = KeyState::with(&[Key::Space]);
        assert!(try_fire(&mut state, &keys, 1000.0));

        assert_eq!(state.bullets.len(), 3);
        let centre = Vec2::new(50.0 + 19.5, 240.0 + 19.5);
        assert!(state.bullets.iter().all(|b| b.pos == centre));
        assert_eq!(state.last_fire_ms, Some(1000.0));
    }

    #[test]
    fn test_fire_rate_limit() {
        let mut state = fresh(Tuning::default());
        let keys = KeyState::with(&[Key::Space]);

        assert!(try_fire(&mut state, &keys, 1000.0));
        assert!(!try_fire(&mut state, &keys, 1050.0));
        assert!(!try_fire(&mut state, &keys, 1100.0));
        assert_eq!(state.bullets.len(), 3);

        assert!(try_fire(&mut state, &keys, 1100.5));
        assert_eq!(state.bullets.len(), 6);
    }

    #[test]
    fn test_no_fire_without_key_or_after_game_over() {
        let mut state = fresh(Tuning::default());
        assert!(!try_fire(&mut state, &KeyState::new(), 1000.0));

        state.game_over();
        assert!(!try_fire(&mut state, &KeyState::with(&[Key::Space]), 2000.0));
        assert!(state.bullets.is_empty());
    }
}
