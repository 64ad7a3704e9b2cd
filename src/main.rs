//! Homing Orbs entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use homing_orbs::renderer::CanvasSurface;
    use homing_orbs::{FrameStatus, Game, Settings};

    /// Game plus the canvas it draws on
    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Homing Orbs starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Arena fills the window
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(homing_orbs::consts::DEFAULT_ARENA_WIDTH);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(homing_orbs::consts::DEFAULT_ARENA_HEIGHT);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Optional overrides: <canvas data-settings='{"enemy_speed": 2.0}'>
        let settings_json = canvas.get_attribute("data-settings");
        let settings = Settings::from_json_or_default(settings_json.as_deref())
            .with_arena(width, height);
        // Size the canvas from the sanitized arena so both agree
        canvas.set_width(settings.arena_width as u32);
        canvas.set_height(settings.arena_height as u32);
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);

        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings.clone(), seed),
            surface: CanvasSurface::new(ctx),
        }));

        setup_input_handlers(app.clone());
        setup_spawn_timer(app.clone(), settings.spawn_interval_ms);

        // Start game loop
        request_animation_frame(app);

        log::info!("Homing Orbs running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Click fires toward the pointer
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.game
                    .on_click(event.client_x() as f64, event.client_y() as f64);
            });
            let _ = window
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Movement keys
        for (kind, down) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                a.game.on_key(&event.key(), down);
            });
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_spawn_timer(app: Rc<RefCell<App>>, interval_ms: f64) {
        let window = web_sys::window().unwrap();
        let handle = Rc::new(Cell::new(None::<i32>));

        let handle_clone = handle.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut a = app.borrow_mut();
            if a.game.is_over() {
                // Nothing left to spawn for
                if let (Some(id), Some(window)) = (handle_clone.take(), web_sys::window()) {
                    window.clear_interval_with_handle(id);
                    log::info!("Spawn timer stopped");
                }
                return;
            }
            a.game.on_spawn_timer();
        });

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("Failed to start spawn timer: {:?}", e),
        }
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let status = {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            game.frame(surface)
        };

        match status {
            FrameStatus::Running => request_animation_frame(app),
            FrameStatus::GameOver => log::info!("Game loop halted"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Upper bound on ticks for the headless demo (two minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u64 = 2 * 60 * 60;

/// Ticks between auto-pilot shots
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FIRE_EVERY: u64 = 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use homing_orbs::renderer::RecordingSurface;
    use homing_orbs::{FrameStatus, Game, Settings};

    env_logger::init();
    log::info!("Homing Orbs (native) starting...");
    log::info!("Native mode runs a headless auto-pilot - build for wasm32 to play in the browser");

    let json = std::env::var("HOMING_ORBS_SETTINGS").ok();
    let settings = Settings::from_json_or_default(json.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut game = Game::new(settings, seed).with_tick_spawning();
    let mut surface = RecordingSurface::new();

    while game.state.time_ticks < DEMO_MAX_TICKS {
        // Shoot at the closest orb
        if game.state.time_ticks % DEMO_FIRE_EVERY == 0 {
            let player = game.state.player.pos();
            let target = game
                .state
                .enemies
                .iter()
                .map(|e| e.body.pos)
                .min_by(|a, b| {
                    a.distance(player)
                        .partial_cmp(&b.distance(player))
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            if let Some(target) = target {
                game.on_click(target.x, target.y);
            }
        }

        let status = game.frame(&mut surface);
        surface.drain();
        if status == FrameStatus::GameOver {
            break;
        }
    }

    game.redraw_game_over(&mut surface);
    for text in surface.texts() {
        println!("{}", text);
    }

    println!(
        "Survived {} ticks, score {}",
        game.state.time_ticks, game.state.score
    );
    match serde_json::to_string(&game.state.snapshot()) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}
