//! Game state and entity types
//!
//! One `GameState` value owns everything a play session mutates. Entities of
//! all kinds share a single `Entity` shape; the variant-specific bits live in
//! `EntityKind`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Aabb;
use super::sprite::Sprite;
use crate::consts::SPRITE_SHEET;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player died; the world keeps running but the player is hidden and
    /// cannot fire or score until reset
    GameOver,
}

/// Travel direction of a bullet, fixed when it is fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulletDir {
    Forward,
    Up,
    Down,
}

impl BulletDir {
    /// Unit velocity in screen space (y grows downward)
    pub fn velocity(self) -> Vec2 {
        match self {
            BulletDir::Forward => Vec2::X,
            BulletDir::Up => Vec2::NEG_Y,
            BulletDir::Down => Vec2::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Player,
    Bullet(BulletDir),
    Enemy,
    /// Removed once its play-once animation finishes
    Explosion,
    /// Static obstacle: absorbs bullets, deflects enemies, kills the player
    Megalith,
}

/// Anything drawn on the canvas
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
    pub sprite: Sprite,
    pub kind: EntityKind,
}

impl Entity {
    /// Collision box: position plus the current sprite frame size
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.sprite.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.sprite.size / 2.0
    }
}

// Sprite sheet layout
pub const PLAYER_SIZE: Vec2 = Vec2::new(39.0, 39.0);
pub const ENEMY_SIZE: Vec2 = Vec2::new(80.0, 39.0);
pub const EXPLOSION_SIZE: Vec2 = Vec2::new(39.0, 39.0);
pub const MEGALITH_SIZE: Vec2 = Vec2::new(30.0, 30.0);

fn player_sprite() -> Sprite {
    Sprite::looping(SPRITE_SHEET, Vec2::ZERO, PLAYER_SIZE, 16.0, vec![0, 1])
}

fn bullet_sprite(dir: BulletDir) -> Sprite {
    match dir {
        BulletDir::Forward => Sprite::still(SPRITE_SHEET, Vec2::new(0.0, 39.0), Vec2::new(18.0, 8.0)),
        BulletDir::Up => Sprite::still(SPRITE_SHEET, Vec2::new(0.0, 50.0), Vec2::new(9.0, 5.0)),
        BulletDir::Down => Sprite::still(SPRITE_SHEET, Vec2::new(0.0, 60.0), Vec2::new(9.0, 5.0)),
    }
}

fn enemy_sprite() -> Sprite {
    Sprite::looping(SPRITE_SHEET, Vec2::new(0.0, 78.0), ENEMY_SIZE, 6.0, vec![0, 1, 2, 3, 2, 1])
}

fn explosion_sprite() -> Sprite {
    Sprite::once(SPRITE_SHEET, Vec2::new(0.0, 117.0), EXPLOSION_SIZE, 16.0, (0..=12).collect())
}

fn megalith_sprite() -> Sprite {
    Sprite::looping(SPRITE_SHEET, Vec2::new(80.0, 5.0), MEGALITH_SIZE, 10.0, vec![0, 1])
}

/// Values the HUD and the native harness report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub score: u64,
    pub level: u32,
    pub game_over: bool,
    pub game_time: f32,
    pub bullets: usize,
    pub enemies: usize,
    pub explosions: usize,
    pub megaliths: usize,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    /// Seconds since the last reset (drives the spawn ramp)
    pub game_time: f32,
    /// Bumped on every reset, never lowered
    pub level: u32,
    pub score: u64,
    pub phase: GamePhase,
    /// Timestamp of the last triple shot (ms, caller's clock)
    pub last_fire_ms: Option<f64>,
    pub player: Entity,
    pub bullets: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub explosions: Vec<Entity>,
    pub megaliths: Vec<Entity>,
    /// Level the current megalith layout was placed for
    pub obstacles_placed: Option<u32>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a level-0 session. Callers `reset()` before the first frame,
    /// which starts play at level 1.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Entity {
            id: 0,
            pos: tuning.player_start(),
            sprite: player_sprite(),
            kind: EntityKind::Player,
        };

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            game_time: 0.0,
            level: 0,
            score: 0,
            phase: GamePhase::Playing,
            last_fire_ms: None,
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            megaliths: Vec::new(),
            obstacles_placed: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Latch the game-over state. Repeated calls are no-ops.
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over: level {} score {}", self.level, self.score);
    }

    /// Start the next round: clears the field and escalates the level
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.game_time = 0.0;
        self.score = 0;
        self.level = self.level.saturating_add(1);
        self.bullets.clear();
        self.enemies.clear();
        self.explosions.clear();
        self.megaliths.clear();
        self.obstacles_placed = None;
        self.player.pos = self.tuning.player_start();
        log::info!("Starting level {}", self.level);
    }

    /// Add points unless the round is already lost
    pub fn award(&mut self, points: u64) {
        if self.phase == GamePhase::Playing {
            self.score += points;
        }
    }

    fn make(&mut self, pos: Vec2, sprite: Sprite, kind: EntityKind) -> Entity {
        Entity {
            id: self.next_entity_id(),
            pos,
            sprite,
            kind,
        }
    }

    pub fn spawn_bullet(&mut self, pos: Vec2, dir: BulletDir) {
        let bullet = self.make(pos, bullet_sprite(dir), EntityKind::Bullet(dir));
        self.bullets.push(bullet);
    }

    pub fn spawn_enemy(&mut self, pos: Vec2) {
        let enemy = self.make(pos, enemy_sprite(), EntityKind::Enemy);
        self.enemies.push(enemy);
    }

    pub fn spawn_explosion(&mut self, pos: Vec2) {
        let explosion = self.make(pos, explosion_sprite(), EntityKind::Explosion);
        self.explosions.push(explosion);
    }

    pub fn spawn_megalith(&mut self, pos: Vec2) {
        let megalith = self.make(pos, megalith_sprite(), EntityKind::Megalith);
        self.megaliths.push(megalith);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            level: self.level,
            game_over: self.is_game_over(),
            game_time: self.game_time,
            bullets: self.bullets.len(),
            enemies: self.enemies.len(),
            explosions: self.explosions.len(),
            megaliths: self.megaliths.len(),
        }
    }
}
