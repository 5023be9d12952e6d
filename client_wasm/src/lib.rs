//! Canvas client for Pong
//!
//! Runs the `game_core` loop driver on a `setInterval` timer and draws each
//! tick to a 2D canvas. Keyboard and touch controls feed the input latch.
//! Browser bindings are only compiled for the wasm32 target.

pub mod audio;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::audio::WebAudio;
    use crate::canvas::CanvasRenderer;
    use crate::input::{handle_key_down, handle_key_up};
    use crate::platform::{BrowserEnv, IntervalTicker};
    use game_core::{Config, Environment, Game, InputLatch, LoopDriver};
    use std::cell::RefCell;
    use std::fmt::Display;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    // Global client storage for WASM bindings
    thread_local! {
        static DRIVER: RefCell<Option<LoopDriver>> = const { RefCell::new(None) };
        static TICKER: RefCell<Option<IntervalTicker>> = const { RefCell::new(None) };
    }

    fn to_js(err: impl Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    fn on_tick() {
        DRIVER.with(|cell| match cell.try_borrow_mut() {
            Ok(mut slot) => {
                if let Some(driver) = slot.as_mut() {
                    driver.tick();
                }
            }
            Err(_) => BrowserEnv.log("Loop: driver busy, tick skipped".to_string()),
        });
    }

    fn with_input(f: impl FnOnce(&mut InputLatch)) {
        DRIVER.with(|cell| {
            if let Ok(mut slot) = cell.try_borrow_mut() {
                if let Some(driver) = slot.as_mut() {
                    f(driver.game_mut().input_mut());
                }
            }
        });
    }

    fn listen_keys(window: &web_sys::Window) -> Result<(), JsValue> {
        let on_down = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
            let key = event.key();
            with_input(|input| {
                if handle_key_down(&key, input) {
                    event.prevent_default();
                }
            });
        });
        let on_up = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
            let key = event.key();
            with_input(|input| {
                handle_key_up(&key, input);
            });
        });

        window.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;
        // Listeners live for the page
        on_down.forget();
        on_up.forget();
        Ok(())
    }

    /// Set up the game on the canvas with id `canvas_id` and start ticking
    #[wasm_bindgen]
    pub fn start(canvas_id: &str) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if DRIVER.with(|cell| cell.borrow().is_some()) {
            return Err(JsValue::from_str("Client already started"));
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element #{}", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))?;

        let game = Game::new(Config::new()).map_err(to_js)?;
        canvas.set_width(game.map().width as u32);
        canvas.set_height(game.map().height as u32);

        let renderer = CanvasRenderer::new(&canvas).map_err(to_js)?;
        let audio = WebAudio::new().map_err(to_js)?;
        let mut driver = LoopDriver::new(game, Box::new(renderer), Box::new(audio), Box::new(BrowserEnv));
        let period_ms = driver.schedule().period_ms();
        driver.render_only();
        DRIVER.with(|cell| *cell.borrow_mut() = Some(driver));

        listen_keys(&window)?;

        let ticker = IntervalTicker::start(period_ms, on_tick)?;
        TICKER.with(|cell| *cell.borrow_mut() = Some(ticker));
        Ok(())
    }

    /// Touch control: hold the paddle moving up
    #[wasm_bindgen]
    pub fn move_up() {
        with_input(|input| input.begin_move_up());
    }

    /// Touch control: hold the paddle moving down
    #[wasm_bindgen]
    pub fn move_down() {
        with_input(|input| input.begin_move_down());
    }

    #[wasm_bindgen]
    pub fn clear_move() {
        with_input(|input| input.clear_move());
    }

    /// Stop the tick timer. The last frame stays on the canvas.
    #[wasm_bindgen]
    pub fn stop() {
        TICKER.with(|cell| cell.borrow_mut().take());
    }
}
