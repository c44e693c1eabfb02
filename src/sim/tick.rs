//! Variable-timestep frame update
//!
//! One call per display frame: input and motion, spawning, then collision
//! resolution. Rendering happens afterwards from the resulting state.

use super::state::GameState;
use super::{collision, motion, spawn};
use crate::input::KeyState;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held this frame
    pub keys: KeyState,
    /// Wall-clock milliseconds, used for the fire cooldown
    pub now_ms: f64,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = state.tuning.frame_dt(dt);
    state.game_time += dt;

    motion::steer_player(state, &input.keys, dt);
    spawn::try_fire(state, &input.keys, input.now_ms);
    motion::advance(state, dt);

    spawn::place_megaliths(state);
    spawn::maybe_spawn_enemy(state);

    collision::resolve(state);

    log::trace!(
        "t={:.3} enemies={} bullets={} megaliths={}",
        state.game_time,
        state.enemies.len(),
        state.bullets.len(),
        state.megaliths.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::sim::state::GamePhase;
    use crate::tuning::{ObstacleMode, Tuning};
    use glam::Vec2;

    const FRAME: f32 = 1.0 / 60.0;

    fn session(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        state.reset();
        state
    }

    #[test]
    fn test_first_frame_places_level_layout() {
        let mut state = session(1);
        tick(&mut state, &TickInput::default(), FRAME);

        assert_eq!(state.level, 1);
        assert_eq!(state.megaliths.len(), 5);
        assert_eq!(state.megaliths[0].pos, Vec2::new(100.0, 10.0));
        assert!((state.game_time - FRAME).abs() < 1e-6);
    }

    #[test]
    fn test_megaliths_do_not_pile_up() {
        let mut state = session(1);
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), FRAME);
        }
        assert_eq!(state.megaliths.len(), 5);
    }

    #[test]
    fn test_every_frame_mode_piles_up() {
        let tuning = Tuning {
            obstacle_mode: ObstacleMode::EveryFrame,
            ..Tuning::default()
        };
        let mut state = GameState::new(1, tuning);
        state.reset();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), FRAME);
        }
        assert_eq!(state.megaliths.len(), 50);
    }

    #[test]
    fn test_player_clamped_after_long_frame() {
        let mut state = session(2);
        let input = TickInput {
            keys: KeyState::with(&[Key::Up, Key::Left]),
            now_ms: 0.0,
        };
        tick(&mut state, &input, 5.0);
        assert_eq!(state.player.pos, Vec2::ZERO);
    }

    #[test]
    fn test_time_never_runs_backward() {
        // A bad ceiling set in code skips `validate`; the frame dt still
        // bottoms out at zero
        let tuning = Tuning {
            max_frame_dt: Some(-0.5),
            ..Tuning::default()
        };
        let mut state = GameState::new(6, tuning);
        state.reset();
        state.spawn_enemy(Vec2::new(300.0, 300.0));

        tick(&mut state, &TickInput::default(), FRAME);

        assert_eq!(state.game_time, 0.0);
        assert_eq!(state.enemies[0].pos, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_held_fire_respects_cooldown() {
        let mut state = session(3);
        // Keep the volley clear of megaliths: move the player down first
        state.player.pos = Vec2::new(0.0, 300.0);
        let mut volleys = 0;
        for frame in 0..12 {
            let before = state.bullets.len();
            let input = TickInput {
                keys: KeyState::with(&[Key::Space]),
                now_ms: frame as f64 * 16.0,
            };
            tick(&mut state, &input, 0.0);
            if state.bullets.len() > before {
                volleys += 1;
            }
        }
        // Shots at t=0 and t=112 ms (first frame past the 100 ms cooldown)
        assert_eq!(volleys, 2);
    }

    #[test]
    fn test_game_over_latch_survives_quiet_frames() {
        let mut state = session(4);
        tick(&mut state, &TickInput::default(), 0.0);
        // Stand on the (300, 100) megalith
        state.player.pos = Vec2::new(300.0, 100.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        state.player.pos = Vec2::new(0.0, 440.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = session(5);
        tick(&mut state, &TickInput::default(), FRAME);
        state.game_over();
        state.score = 500;

        state.reset();
        tick(&mut state, &TickInput::default(), FRAME);

        assert_eq!(state.level, 2);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.megaliths.len(), 5);
        assert_eq!(state.megaliths[1].pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_determinism() {
        let mut a = session(99999);
        let mut b = session(99999);
        let inputs = [
            TickInput {
                keys: KeyState::with(&[Key::Down]),
                now_ms: 0.0,
            },
            TickInput {
                keys: KeyState::with(&[Key::Space, Key::D]),
                now_ms: 500.0,
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, FRAME);
            tick(&mut b, input, FRAME);
        }

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.player.pos, b.player.pos);
    }
}
