//! Lane Dodger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

    use lane_dodger::game::KeyRoute;
    use lane_dodger::sim::Mode;
    use lane_dodger::ui::Hud;
    use lane_dodger::{Game, Settings};

    /// HUD backed by the page's score text, buttons and game-over panel
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_display(&self, id: &str, display: &str) {
            if let Some(el) = self
                .document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property("display", display);
            }
        }
    }

    impl Hud for DomHud {
        fn show_score(&mut self, score: u64) {
            self.set_text("score", &score.to_string());
        }

        fn show_final_score(&mut self, score: u64) {
            self.set_text("finalScore", &score.to_string());
        }

        fn mode_changed(&mut self, mode: Mode) {
            match mode {
                Mode::Menu => {}
                Mode::Playing => {
                    self.set_display("startBtn", "none");
                    self.set_display("pauseBtn", "inline-block");
                    self.set_display("gameOver", "none");
                    self.set_text("pauseBtn", "Pause");
                }
                Mode::Paused => self.set_text("pauseBtn", "Resume"),
                Mode::GameOver => {
                    self.set_display("gameOver", "block");
                    self.set_display("pauseBtn", "none");
                }
            }
        }
    }

    struct App {
        game: Game<DomHud>,
        ctx: CanvasRenderingContext2d,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Lane Dodger starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let hud = DomHud {
            document: document.clone(),
        };
        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings, seed, hud),
            ctx,
        }));

        setup_keyboard(app.clone())?;
        setup_buttons(&document, app.clone())?;
        setup_auto_pause(&document, app.clone())?;

        request_animation_frame(app);

        log::info!("Lane Dodger running!");
        Ok(())
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        let router = app.borrow().game.key_router();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let router = router.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match router.route(&event.key(), pressed, event.repeat()) {
                    KeyRoute::Unbound => return,
                    KeyRoute::TogglePause => {
                        app.borrow_mut().game.pause();
                    }
                    KeyRoute::Steered | KeyRoute::Ignored => {}
                }
                event.prevent_default();
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let commands: [(&str, fn(&mut Game<DomHud>)); 3] = [
            ("startBtn", |g| g.start()),
            ("pauseBtn", |g| {
                g.pause();
            }),
            ("restartBtn", |g| g.restart()),
        ];

        for (id, command) in commands {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} not found", id);
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                command(&mut app.borrow_mut().game);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_auto_pause(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Visibility change (tab switch, minimize)
        {
            let app = app.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    app.borrow_mut().game.auto_pause();
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.auto_pause();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let App { game, ctx } = &mut *guard;
            game.frame(ctx);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

/// Frames driven between surface resets in headless mode
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_CHUNK: u64 = 600;
/// Give up after this many frames (about half an hour at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_FRAMES: u64 = 60 * 60 * 30;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_dodger::renderer::RecordingSurface;
    use lane_dodger::sim::Mode;
    use lane_dodger::ui::LogHud;
    use lane_dodger::{Game, Settings, driver};

    env_logger::init();
    log::info!("Lane Dodger (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    let settings = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Settings::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    if let Ok(json) = settings.to_json() {
        log::debug!("Effective settings: {}", json);
    }

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut game = Game::new(settings, seed, LogHud::default());
    let mut surface = RecordingSurface::default();
    game.start();

    let mut frames = 0;
    while frames < HEADLESS_MAX_FRAMES && game.mode() != Mode::GameOver {
        surface.reset();
        frames += driver::run_until_game_over(&mut game, &mut surface, HEADLESS_CHUNK);
    }

    let world = game.world();
    log::info!(
        "Headless run finished after {} frames: score {}, speed {}, spawn interval {}",
        frames,
        world.score,
        world.speed,
        world.spawn_interval
    );
    println!("Final score: {}", world.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
