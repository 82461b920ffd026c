//! Space Invasion entry point
//!
//! Handles platform-specific initialization and drives the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use space_invasion::renderer::CanvasRenderer;
    use space_invasion::sim::{FrameInput, FrameReport, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: FrameInput,
    }

    impl Game {
        fn new(renderer: CanvasRenderer, width: f32, height: f32, seed: u64) -> Self {
            Self {
                state: GameState::new(width, height, seed),
                renderer,
                input: FrameInput::default(),
            }
        }

        /// Advance one frame and redraw
        fn frame(&mut self, time: f64) -> FrameReport {
            let input = self.input;
            let report = tick(&mut self.state, &input, time);
            self.renderer.draw(&self.state);
            report
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Space Invasion starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(&canvas).expect("no 2d canvas context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            renderer,
            canvas.width() as f32,
            canvas.height() as f32,
            seed,
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_key_handlers(game.clone());
        setup_start_buttons(game);

        log::info!("Space Invasion ready, waiting for start");
    }

    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.set_key(&event.code(), true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().input.set_key(&event.code(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Both the initial start button and the post-game-over restart button
    /// trigger the same full reset.
    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    start_game(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn start_game(game: &Rc<RefCell<Game>>) {
        // The frame chain stops at game over, so schedule a fresh one unless
        // the run was somehow still active.
        let schedule = {
            let mut g = game.borrow_mut();
            let was_running = g.state.is_running();
            g.state.start();
            g.input = FrameInput::default();
            !was_running
        };

        let document = web_sys::window().unwrap().document().unwrap();
        update_score_display(&document, 0);
        set_hidden(&document, "game-over", true);
        set_hidden(&document, "start-btn", true);
        set_hidden(&document, "restart-btn", true);

        log::info!("Run started");

        if schedule {
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let (report, score, keep_running) = {
            let mut g = game.borrow_mut();
            let report = g.frame(time);
            (report, g.state.score, g.state.is_running())
        };

        if report.score_changed || report.game_over {
            let document = web_sys::window().unwrap().document().unwrap();
            if report.score_changed {
                update_score_display(&document, score);
            }
            if report.game_over {
                log::info!("Game over, final score {}", score);
                show_game_over(&document, score);
            }
        }

        if keep_running {
            request_animation_frame(game);
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn update_score_display(document: &Document, score: u32) {
        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&format!("Score: {}", score)));
        }
    }

    fn show_game_over(document: &Document, final_score: u32) {
        if let Some(el) = document.get_element_by_id("final-score") {
            el.set_text_content(Some(&format!("Your score: {}", final_score)));
        }
        set_hidden(document, "game-over", false);
        set_hidden(document, "restart-btn", false);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use space_invasion::sim::{FrameInput, GameState, tick};

    env_logger::init();
    log::info!("Space Invasion (native) starting...");
    log::info!("Native mode has no canvas - run with `trunk serve` for the web version");

    // Headless smoke run: drift right and hold fire until the run ends
    let mut state = GameState::new(480.0, 640.0, 0x5eed);
    state.start();
    let input = FrameInput {
        right: true,
        fire: true,
        ..Default::default()
    };

    let mut frames = 0u32;
    while state.is_running() && frames < 60 * 120 {
        let timestamp = frames as f64 * (1000.0 / 60.0);
        tick(&mut state, &input, timestamp);
        frames += 1;
    }

    log::info!("Simulated {} frames, final score {}", frames, state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
