//! Megalith Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use megalith_shooter::consts::{SPRITE_SHEET, TERRAIN};
    use megalith_shooter::platform::assets::AssetStore;
    use megalith_shooter::platform::hud::{self, Hud};
    use megalith_shooter::renderer::{self, CanvasSurface};
    use megalith_shooter::sim::{GameState, TickInput, tick};
    use megalith_shooter::{GameError, Key, KeyState, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        hud: Hud,
        keys: KeyState,
        last_time: f64,
    }

    impl Game {
        /// Run one simulation step
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let input = TickInput {
                keys: self.keys,
                now_ms: time,
            };
            tick(&mut self.state, &input, dt);
        }

        /// Render the current frame
        fn render(&mut self) {
            renderer::render(&self.state, &mut self.surface);
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            self.hud.sync(&self.state.snapshot());
        }

        /// Start the next level
        fn restart(&mut self) {
            self.state.reset();
            self.keys.release_all();
        }
    }

    fn js_context(what: &'static str) -> impl Fn(JsValue) -> GameError {
        move |_| GameError::ContextUnavailable(what)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Megalith Shooter starting...");

        if let Err(e) = start().await {
            log::error!("Startup failed: {}", e);
        }
    }

    async fn start() -> Result<(), GameError> {
        let window = web_sys::window().ok_or(GameError::ContextUnavailable("window"))?;
        let document = window
            .document()
            .ok_or(GameError::ContextUnavailable("document"))?;

        let tuning = Tuning::load();
        let hud = Hud::bind(&document)?;
        let canvas = create_canvas(&document, &tuning)?;

        let assets = AssetStore::load(&[SPRITE_SHEET, TERRAIN]).await?;
        let surface = CanvasSurface::new(&canvas, assets)?;

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, tuning);
        state.reset();
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            surface,
            hud,
            keys: KeyState::new(),
            last_time: 0.0,
        }));

        setup_input_handlers(&document, game.clone());
        setup_restart_button(&document, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Megalith Shooter running!");
        Ok(())
    }

    /// Create the drawing surface and append it to the page
    fn create_canvas(document: &Document, tuning: &Tuning) -> Result<HtmlCanvasElement, GameError> {
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(js_context("canvas element"))?
            .dyn_into()
            .map_err(|_| GameError::ContextUnavailable("canvas element"))?;
        canvas.set_width(tuning.canvas_width as u32);
        canvas.set_height(tuning.canvas_height as u32);

        document
            .body()
            .ok_or(GameError::ContextUnavailable("document body"))?
            .append_child(&canvas)
            .map_err(js_context("document body"))?;
        Ok(canvas)
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    game.borrow_mut().keys.press(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().keys.release(key);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events won't arrive while unfocused
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if !g.keys.is_empty() {
                    g.keys.release_all();
                    log::debug!("Released keys (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), GameError> {
        let btn = hud::element(document, hud::RESTART_ID)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            game.borrow_mut().restart();
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(js_context("restart button"))?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use megalith_shooter::{ObstacleMode, Tuning};

    env_logger::init();
    log::info!("Megalith Shooter (native) starting...");
    log::info!("Native mode runs a headless demo round - run with `trunk serve` for the web version");

    // Usage: megalith-shooter [tuning.json] [once_per_level|every_frame]
    let mut args = std::env::args().skip(1);
    let mut tuning = match args.next() {
        Some(path) => match Tuning::load_file(std::path::Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    if let Some(mode) = args.next() {
        match ObstacleMode::parse(&mode) {
            Some(mode) => tuning.obstacle_mode = mode,
            None => {
                log::error!("Unknown obstacle mode: {}", mode);
                std::process::exit(1);
            }
        }
    }

    let snapshot = demo::play_round(tuning, 2024);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use megalith_shooter::sim::{GameState, Snapshot, TickInput, tick};
    use megalith_shooter::{Key, KeyState, Tuning};

    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after two simulated minutes
    const MAX_FRAMES: u32 = 60 * 120;

    /// Play one round with a scripted pilot that sweeps up and down while
    /// holding fire, until it dies or time runs out
    pub fn play_round(tuning: Tuning, seed: u64) -> Snapshot {
        let mut state = GameState::new(seed, tuning);
        state.reset();

        let mut frames = 0;
        while frames < MAX_FRAMES && !state.is_game_over() {
            let sweep = if (frames / 90) % 2 == 0 { Key::Down } else { Key::Up };
            let input = TickInput {
                keys: KeyState::with(&[Key::Space, sweep]),
                now_ms: frames as f64 * FRAME_DT as f64 * 1000.0,
            };
            tick(&mut state, &input, FRAME_DT);
            frames += 1;
        }

        log::info!(
            "Round ended after {:.1}s: score {} ({})",
            state.game_time,
            state.score,
            if state.is_game_over() { "destroyed" } else { "survived" }
        );
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&state.enemies) {
                log::debug!("Enemies on field: {}", json);
            }
        }
        state.snapshot()
    }
}
