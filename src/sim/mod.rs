//! Frame simulation module
//!
//! All gameplay logic lives here and stays free of browser types:
//! - Seeded RNG only
//! - Stable list order (spawn order, removals preserve the rest)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collides};
pub use spawn::{megalith_layout, spawn_probability};
pub use sprite::{Playback, SourceRect, Sprite};
pub use state::{BulletDir, Entity, EntityKind, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
