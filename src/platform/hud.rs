//! Score/level display and the game-over panel

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{GameError, Result};
use crate::sim::Snapshot;

pub const SCORE_ID: &str = "score";
pub const LEVEL_ID: &str = "level";
pub const GAME_OVER_ID: &str = "game-over";
pub const OVERLAY_ID: &str = "game-over-overlay";
pub const RESTART_ID: &str = "play-again";

/// Look up a required element
pub fn element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GameError::MissingElement(id.to_string()))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement> {
    element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GameError::WrongElementType {
            id: id.to_string(),
            expected: "HTML element",
        })
}

pub struct Hud {
    score: Element,
    level: Element,
    game_over: HtmlElement,
    overlay: HtmlElement,
    /// Last values written, to skip redundant DOM writes
    shown: Option<(u64, u32, bool)>,
}

impl Hud {
    /// Bind every DOM hook up front so a broken page fails at startup
    pub fn bind(document: &Document) -> Result<Self> {
        // Restart button is wired separately but must exist too
        element(document, RESTART_ID)?;

        Ok(Self {
            score: element(document, SCORE_ID)?,
            level: element(document, LEVEL_ID)?,
            game_over: html_element(document, GAME_OVER_ID)?,
            overlay: html_element(document, OVERLAY_ID)?,
            shown: None,
        })
    }

    /// Reflect score, level and game-over visibility
    pub fn sync(&mut self, snapshot: &Snapshot) {
        let current = (snapshot.score, snapshot.level, snapshot.game_over);
        if self.shown == Some(current) {
            return;
        }

        self.score.set_text_content(Some(&snapshot.score.to_string()));
        self.level.set_text_content(Some(&snapshot.level.to_string()));

        let display = if snapshot.game_over { "block" } else { "none" };
        for panel in [&self.game_over, &self.overlay] {
            let _ = panel.style().set_property("display", display);
        }

        self.shown = Some(current);
    }
}
