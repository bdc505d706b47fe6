//! Carrom Meta entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use carrom_meta::consts::*;
    use carrom_meta::persistence::Records;
    use carrom_meta::platform::{
        Button, LocalStorage, PointerInput, client_to_canvas, command_for_button, command_for_key,
        display_size, now_iso8601,
    };
    use carrom_meta::renderer::CanvasRenderer;
    use carrom_meta::settings::Settings;
    use carrom_meta::sim::{Board, Command, GameEvent, GamePhase, RenderFrame, Session, apply, tick};

    /// Game instance holding all state
    struct Game {
        session: Session,
        records: Records,
        store: LocalStorage,
        settings: Settings,
        renderer: CanvasRenderer,
        pointer: PointerInput,
        /// Commands received since the last frame, applied in arrival order
        pending: Vec<Command>,
    }

    impl Game {
        fn new(renderer: CanvasRenderer) -> Self {
            let store = LocalStorage::open();
            let records = Records::load(&store);
            let settings = Settings::load(&store);
            let mut renderer = renderer;
            renderer.aim_guide = settings.aim_guide;
            Self {
                session: Session::new(Board::default(), records.best_score),
                records,
                store,
                settings,
                renderer,
                pointer: PointerInput::new(),
                pending: Vec::new(),
            }
        }

        fn push(&mut self, command: Command) {
            self.pending.push(command);
        }

        /// Apply queued input, then advance one frame
        fn update(&mut self) {
            for command in std::mem::take(&mut self.pending) {
                if let Some(event) = apply(&mut self.session, command) {
                    self.handle_event(event);
                }
            }
            for event in tick(&mut self.session) {
                self.handle_event(event);
            }
        }

        fn handle_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::SessionEnded { .. } => {
                    self.records
                        .handle_event(&event, &mut self.store, now_iso8601());
                }
                GameEvent::ShotTaken { shots } => log::debug!("Shot #{}", shots),
                _ => {}
            }
        }

        fn render(&self) {
            let frame = RenderFrame::capture(&self.session, self.pointer.down);
            self.renderer.render(&frame);
        }

        /// Auto-pause when the player looks away (if enabled)
        fn auto_pause(&mut self, reason: &str) {
            if !self.settings.auto_pause {
                return;
            }
            if matches!(self.session.phase(), GamePhase::Aiming | GamePhase::Shooting) {
                self.push(Command::Pause);
                log::info!("Auto-paused ({})", reason);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Carrom Meta starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(canvas) = document
            .get_element_by_id("game")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No #game canvas on this page");
            return;
        };

        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        fit_canvas(&canvas);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new(CanvasRenderer::new(ctx, true))));

        setup_resize(&canvas);
        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Carrom Meta running!");
    }

    /// Scale the canvas's CSS size to its parent, keeping logical resolution
    fn fit_canvas(canvas: &HtmlCanvasElement) {
        let parent_width = canvas
            .parent_element()
            .map(|p| p.client_width() as f32)
            .unwrap_or(CANVAS_WIDTH);
        let (w, h) = display_size(parent_width);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", w));
        let _ = style.set_property("height", &format!("{}px", h));
    }

    fn setup_resize(canvas: &HtmlCanvasElement) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            fit_canvas(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Client coordinates to logical canvas space
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: f32, client_y: f32) -> Option<Vec2> {
        let rect = canvas.get_bounding_client_rect();
        client_to_canvas(
            Vec2::new(client_x, client_y),
            (
                rect.left() as f32,
                rect.top() as f32,
                rect.width() as f32,
                rect.height() as f32,
            ),
        )
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - aim / slide the striker
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(point) =
                    canvas_point(&canvas_clone, event.client_x() as f32, event.client_y() as f32)
                else {
                    return;
                };
                let mut g = game.borrow_mut();
                let command = g.pointer.on_move(point);
                g.push(command);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - start pulling back
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer.on_down();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - release the shot
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let command = g.pointer.on_up();
                g.push(command);
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move - same as mouse move (+ down on start)
        for (name, press) in [("touchstart", true), ("touchmove", false)] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let Some(point) =
                    canvas_point(&canvas_clone, touch.client_x() as f32, touch.client_y() as f32)
                else {
                    return;
                };
                let mut g = game.borrow_mut();
                let command = g.pointer.on_move(point);
                g.push(command);
                if press {
                    g.pointer.on_down();
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - release
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                let command = g.pointer.on_up();
                g.push(command);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = command_for_key(&event.key()) {
                    game.borrow_mut().push(command);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (id, button) in [("btn-pause", Button::Pause), ("btn-restart", Button::Restart)] {
            let Some(btn) = document.get_element_by_id(id) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().push(command_for_button(button));
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().auto_pause("tab hidden");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().auto_pause("window blur");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One display refresh: input, physics, draw. Keeps running after game
    /// over so the end screen stays up.
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Carrom Meta (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless self-play: aim every shot at the coin nearest a pocket until the
/// board is clear or the shot limit runs out.
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;

    use carrom_meta::persistence::{MemoryStore, Records};
    use carrom_meta::platform::now_iso8601;
    use carrom_meta::sim::{Board, Command, Disc, GamePhase, Session, apply, tick};

    const MAX_SHOTS: u32 = 300;
    const MAX_FRAMES_PER_SHOT: u32 = 2_000;

    fn pick_target(session: &Session) -> Option<&Disc> {
        let board = &session.board;
        let to_pocket = |c: &Disc| {
            board
                .pockets
                .iter()
                .map(|p| p.center.distance(c.pos))
                .fold(f32::INFINITY, f32::min)
        };
        session
            .active_coins()
            .min_by(|a, b| to_pocket(a).total_cmp(&to_pocket(b)))
    }

    pub fn run() {
        let mut store = MemoryStore::new();
        let mut records = Records::load(&store);
        let mut session = Session::new(Board::default(), records.best_score);

        while session.phase() != GamePhase::GameOver && session.shots < MAX_SHOTS {
            let Some(target) = pick_target(&session).map(|c| c.pos) else {
                break;
            };

            // Slide under the target, then pull straight back at full power
            apply(&mut session, Command::UpdateAim { point: target });
            tick(&mut session);
            let from = session.striker.pos;
            let aim = (from - target).try_normalize().unwrap_or(Vec2::Y) * 200.0;
            apply(&mut session, Command::Shoot { aim });

            for _ in 0..MAX_FRAMES_PER_SHOT {
                for event in tick(&mut session) {
                    records.handle_event(&event, &mut store, now_iso8601());
                }
                if session.phase() != GamePhase::Shooting {
                    break;
                }
            }
            log::debug!(
                "After shot {}: {} coins left",
                session.shots,
                session.coins_remaining()
            );
        }

        if session.game_over {
            log::info!("Board cleared in {} shots", session.shots);
        } else {
            log::info!(
                "Gave up after {} shots with {} coins left",
                session.shots,
                session.coins_remaining()
            );
        }
        println!(
            "shots={} remaining={} best={:?}",
            session.shots,
            session.coins_remaining(),
            records.best()
        );
    }
}
