//! Brickfall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use brickfall::consts::*;
    use brickfall::persistence::LocalStorageStore;
    use brickfall::platform::{Command, key_to_command};
    use brickfall::renderer::{Frame, RenderState, build_frame};
    use brickfall::sim::{Arena, GameEvent, GameWorld, TickInput, tick};
    use brickfall::{HighScoreStore, Settings};

    /// Game instance holding all state
    struct Game {
        world: GameWorld,
        store: LocalStorageStore,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        /// Input received since the last simulation tick
        input: TickInput,
    }

    impl Game {
        fn new(arena: Arena) -> Self {
            let store = LocalStorageStore::new();
            let high_score = store.get();
            Self {
                world: GameWorld::new(arena, Settings::load(), high_score),
                store,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            if self.world.phase.is_terminal() {
                // Keep held-key state current for the next round
                let input = self.input.take();
                tick(&mut self.world, &input, &mut self.store);
                self.accumulator = 0.0;
                return;
            }

            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.take();
                for event in tick(&mut self.world, &input, &mut self.store) {
                    match event {
                        GameEvent::Won { .. } | GameEvent::Lost { .. } => {
                            log::info!("Round over: {:?}", event)
                        }
                        _ => log::debug!("{:?}", event),
                    }
                }
                self.accumulator -= SIM_DT;
                substeps += 1;

                if self.world.phase.is_terminal() {
                    self.accumulator = 0.0;
                    break;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, frame: &Frame) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        fn handle_command(&mut self, command: Command) {
            match command {
                Command::Paddle(event) => self.input.push(event),
                Command::Reset => {
                    if self.world.phase.is_terminal() {
                        self.restart();
                    }
                }
                Command::ToggleAutopilot => {
                    self.world.settings.autopilot = !self.world.settings.autopilot;
                    self.world.settings.save();
                    log::info!("Autopilot: {}", self.world.settings.autopilot);
                }
            }
        }

        /// Start a fresh round. Pending key events carry over.
        fn restart(&mut self) {
            self.world.reset();
            self.accumulator = 0.0;
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(frame: &Frame) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
            el.set_text_content(Some(&frame.hud.score.to_string()));
        }
        if let Some(el) = document.query_selector("#hud-high .hud-value").ok().flatten() {
            el.set_text_content(Some(&frame.hud.high_score.to_string()));
        }

        if let Some(el) = document.get_element_by_id("banner") {
            match frame.banner {
                Some(banner) => {
                    el.set_text_content(Some(banner.text()));
                    let _ = el.set_attribute("class", "");
                }
                None => {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        if let Some(el) = document.get_element_by_id("reset-btn") {
            let class = if frame.shows_reset() { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Brickfall starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element");
            return;
        };

        // Arena in CSS pixels, surface in physical pixels
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let arena = Arena::new(client_w as f32, client_h as f32);
        let game = Rc::new(RefCell::new(Game::new(arena)));
        log::info!(
            "Arena {}x{}, high score {}",
            arena.width,
            arena.height,
            game.borrow().world.high_score
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, arena).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_reset_button(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(game);

        log::info!("Brickfall running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (kind, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key.starts_with("Arrow") {
                    event.prevent_default();
                }
                if let Some(command) = key_to_command(&key, pressed) {
                    game.borrow_mut().handle_command(command);
                }
            });
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().handle_command(Command::Reset);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
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

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            let frame = build_frame(&g.world);
            g.render(&frame);
            update_hud(&frame);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Upper bound on ticks per demo round (about five minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICK_LIMIT: u64 = 5 * 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickfall::persistence::{FileStore, file::DEFAULT_FILE};
    use brickfall::sim::{Arena, GameEvent, GameWorld, TickInput, tick};
    use brickfall::{HighScoreStore, Settings};

    env_logger::init();
    log::info!("Brickfall (native) starting...");
    log::info!("Native mode runs a headless autopilot round - run with `trunk serve` to play");

    let mut settings = Settings::load();
    settings.autopilot = true;

    let mut store = FileStore::open(DEFAULT_FILE);
    log::info!("High score {} ({:?})", store.get(), store.path());

    let mut world = GameWorld::new(Arena::new(800.0, 600.0), settings, store.get());
    let input = TickInput::default();
    let mut bricks_destroyed = 0u32;

    while !world.phase.is_terminal() && world.time_ticks < DEMO_TICK_LIMIT {
        for event in tick(&mut world, &input, &mut store) {
            match event {
                GameEvent::BrickDestroyed { row, col } => {
                    bricks_destroyed += 1;
                    log::debug!("Brick ({}, {}) destroyed at tick {}", row, col, world.time_ticks);
                }
                GameEvent::Won { .. } | GameEvent::Lost { .. } => {
                    log::info!("Round over: {:?}", event)
                }
                _ => log::trace!("{:?}", event),
            }
        }
    }

    if !world.phase.is_terminal() {
        log::info!("Demo stopped after {} ticks", world.time_ticks);
    }
    println!(
        "{:?} after {} ticks: score {}/{} ({} bricks), high score {}",
        world.phase,
        world.time_ticks,
        world.score,
        world.winning_score(),
        bricks_destroyed,
        world.high_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
