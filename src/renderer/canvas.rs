//! Canvas 2D surface
//!
//! Sprites are blitted from preloaded sheets with `drawImage`; the background
//! is a repeating terrain pattern.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasPattern, CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::consts::TERRAIN;
use crate::error::{GameError, Result};
use crate::platform::assets::AssetStore;
use crate::sim::Sprite;

/// Fallback fill when the terrain image is unavailable
const BACKGROUND_COLOR: &str = "#3a5a2a";

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    assets: AssetStore,
    terrain: Option<CanvasPattern>,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, assets: AssetStore) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(GameError::ContextUnavailable("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::ContextUnavailable("2d context"))?;

        let terrain = assets
            .get(TERRAIN)
            .and_then(|img| ctx.create_pattern_with_html_image_element(img, "repeat").ok())
            .flatten();
        if terrain.is_none() {
            log::warn!("No terrain pattern, using flat background");
        }

        Ok(Self {
            ctx,
            assets,
            terrain,
        })
    }
}

impl Surface for CanvasSurface {
    fn fill_background(&mut self, width: f32, height: f32) {
        match &self.terrain {
            Some(pattern) => self.ctx.set_fill_style_canvas_pattern(pattern),
            None => self.ctx.set_fill_style_str(BACKGROUND_COLOR),
        }
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_sprite(&mut self, pos: Vec2, sprite: &Sprite) {
        let Some(sheet) = self.assets.get(sprite.sheet) else {
            return;
        };
        let src = sprite.source_rect();

        self.ctx.save();
        let _ = self.ctx.translate(pos.x as f64, pos.y as f64);
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                sheet,
                src.origin.x as f64,
                src.origin.y as f64,
                src.size.x as f64,
                src.size.y as f64,
                0.0,
                0.0,
                src.size.x as f64,
                src.size.y as f64,
            );
        self.ctx.restore();
    }
}
