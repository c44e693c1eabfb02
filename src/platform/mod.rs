//! Browser platform layer
//!
//! Handles the page-facing pieces the simulation doesn't know about:
//! - Image preloading
//! - HUD / DOM hooks
//!
//! Keyboard and frame-callback wiring lives in the wasm entry point.

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod hud;
