//! Centipede entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use centipede::Settings;
    use centipede::platform::KeyState;
    use centipede::renderer::draw_frame;
    use centipede::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: KeyState,
        settings: Settings,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        /// One animation frame: clear, simulate, draw
        fn frame(&mut self, time: f64) {
            let input = self.keys.snapshot();
            tick(&mut self.state, &input, time);
            draw_frame(&mut self.ctx, &self.state, self.settings.show_grid);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Centipede starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(centipede::consts::FIELD_WIDTH as u32);
        canvas.set_height(centipede::consts::FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let state = settings.new_game(js_sys::Date::now() as u64);

        let game = Rc::new(RefCell::new(Game {
            state,
            keys: KeyState::new(),
            settings,
            ctx,
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);
        log::info!("Centipede running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if KeyState::is_game_key(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().keys.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups will not reach us, so drop everything held
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.clear();
                log::info!("Keys released (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
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
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Centipede (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    run_headless(centipede::Settings::load(), 60 * 60);
}

/// Play a scripted session at 60 fps against a recording canvas and report the outcome
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: centipede::Settings, frames: u32) {
    use centipede::renderer::{RecordingCanvas, draw_frame};
    use centipede::sim::{TickInput, tick};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut state = settings.new_game(seed);
    let mut canvas = RecordingCanvas::default();
    let mut draw_calls = 0usize;

    for f in 1..=frames {
        // Sweep across the field with fire held
        let sweep_right = (f / 120) % 2 == 0;
        let input = TickInput {
            left: !sweep_right,
            right: sweep_right,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, f as f64 * FRAME_MS);

        canvas.reset();
        draw_frame(&mut canvas, &state, settings.show_grid);
        draw_calls += canvas.commands.len();
    }

    println!(
        "Played {} frames: score {}, wave {}, {} segments left, {} mushrooms, {} draw calls",
        frames,
        state.score,
        state.wave,
        state.segments.len(),
        state.grid.len(),
        draw_calls
    );
}
