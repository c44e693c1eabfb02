//! Game balance and surface configuration
//!
//! Every knob has a default matching the stock game, so a tuning document only
//! needs the fields it wants to change.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::state::{ENEMY_SIZE, EXPLOSION_SIZE, MEGALITH_SIZE, PLAYER_SIZE};

/// When the per-level megalith layout is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleMode {
    /// Once, on the first frame of each level
    #[default]
    OncePerLevel,
    /// Every frame (megaliths pile up on top of each other)
    EveryFrame,
}

impl ObstacleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleMode::OncePerLevel => "once_per_level",
            ObstacleMode::EveryFrame => "every_frame",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "once_per_level" | "once" => Some(ObstacleMode::OncePerLevel),
            "every_frame" | "always" => Some(ObstacleMode::EveryFrame),
            _ => None,
        }
    }
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Speeds (pixels/s) ===
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,

    // === Combat ===
    /// Shots closer together than this are dropped
    pub fire_cooldown_ms: f64,
    /// Base of the spawn ramp `1 - base^t`; must be in (0, 1)
    pub spawn_base: f32,
    pub kill_score: u64,
    pub deflect_offset: f32,
    pub obstacle_mode: ObstacleMode,

    // === Timing ===
    /// Upper bound on a frame's dt. `None` feeds the raw elapsed time through,
    /// so a long-backgrounded tab produces one large step.
    pub max_frame_dt: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_speed: PLAYER_SPEED,
            bullet_speed: BULLET_SPEED,
            enemy_speed: ENEMY_SPEED,

            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            spawn_base: SPAWN_BASE,
            kill_score: KILL_SCORE,
            deflect_offset: DEFLECT_OFFSET,
            obstacle_mode: ObstacleMode::OncePerLevel,

            max_frame_dt: None,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and check its ranges
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation can't run with. Comparisons are written
    /// so NaN fails them.
    pub fn validate(&self) -> Result<()> {
        fn out_of_range(field: &'static str, reason: &'static str) -> Result<()> {
            Err(GameError::TuningOutOfRange { field, reason })
        }

        let largest = PLAYER_SIZE
            .max(ENEMY_SIZE)
            .max(EXPLOSION_SIZE)
            .max(MEGALITH_SIZE);
        if !(self.canvas_width >= largest.x) {
            return out_of_range("canvas_width", "is narrower than the largest sprite");
        }
        if !(self.canvas_height >= largest.y) {
            return out_of_range("canvas_height", "is shorter than the largest sprite");
        }

        for (field, speed) in [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("enemy_speed", self.enemy_speed),
        ] {
            if !(speed >= 0.0) || !speed.is_finite() {
                return out_of_range(field, "must be a finite non-negative speed");
            }
        }

        if !(self.fire_cooldown_ms >= 0.0) {
            return out_of_range("fire_cooldown_ms", "must not be negative");
        }
        if !(self.spawn_base > 0.0 && self.spawn_base < 1.0) {
            return out_of_range("spawn_base", "must lie strictly between 0 and 1");
        }
        if !self.deflect_offset.is_finite() {
            return out_of_range("deflect_offset", "must be finite");
        }
        if let Some(max) = self.max_frame_dt {
            if !(max > 0.0) {
                return out_of_range("max_frame_dt", "must be positive");
            }
        }
        Ok(())
    }

    /// Where the player is placed on reset
    pub fn player_start(&self) -> glam::Vec2 {
        glam::Vec2::new(PLAYER_START_X, self.canvas_height / 2.0)
    }

    /// Apply the optional dt ceiling. The result is never negative.
    pub fn frame_dt(&self, dt: f32) -> f32 {
        let dt = match self.max_frame_dt {
            Some(max) => dt.min(max),
            None => dt,
        };
        dt.max(0.0)
    }

    /// Element holding an optional JSON tuning block (used only in wasm32)
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load tuning from `<script id="tuning" type="application/json">` (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(text) = text {
            match Self::from_json(&text) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from page");
                    return tuning;
                }
                Err(e) => log::warn!("Ignoring page tuning: {}", e),
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| GameError::AssetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
