//! Punchbag entry point
//!
//! The browser owns the camera, the MediaPipe hand tracker, and the three.js
//! scene; this side owns the simulation. JS pushes landmark frames in and
//! pulls a `SceneFrame` back out once per animation frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    use punchbag::consts::{MAX_SUBSTEPS, SIM_DT};
    use punchbag::render::SceneFrame;
    use punchbag::sim::{GameState, HandFrame, TickInput, hand_lost, ingest_hand_frame, tick};
    use punchbag::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                tuning: Tuning::load(),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run simulation ticks up to the current time
        fn update(&mut self, now_secs: f64) {
            if self.last_time == 0.0 {
                self.last_time = now_secs;
            }
            let dt = ((now_secs - self.last_time) as f32).min(0.1);
            self.last_time = now_secs;
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, &self.tuning, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.reset = false;
            }
        }
    }

    thread_local! {
        static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
    }

    /// Set up logging and the game instance. Called once from JS after the
    /// module loads.
    #[wasm_bindgen]
    pub fn init_game() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let seed = js_sys::Date::now() as u64;
        GAME.with(|g| {
            *g.borrow_mut() = Some(Game::new(seed));
        });
        log::info!("Punchbag initialized with seed: {}", seed);
    }

    /// Hand-tracking callback: one hand's 21 normalized landmarks as a flat
    /// [x, y, z, ...] buffer. Arrives at the tracker's cadence, not ours.
    #[wasm_bindgen]
    pub fn apply_hand_landmarks(flat: &[f32]) {
        let now = js_sys::Date::now() / 1000.0;
        GAME.with(|g| {
            if let Some(game) = g.borrow_mut().as_mut() {
                match HandFrame::from_normalized(flat, now) {
                    Some(frame) => {
                        ingest_hand_frame(&mut game.state, &frame, &game.tuning);
                    }
                    None => log::warn!("Dropping short landmark buffer ({} floats)", flat.len()),
                }
            }
        });
    }

    /// Hand-tracking callback fired when no hand is in view
    #[wasm_bindgen]
    pub fn notify_hand_lost() {
        GAME.with(|g| {
            if let Some(game) = g.borrow_mut().as_mut() {
                hand_lost(&mut game.state);
            }
        });
    }

    /// Advance the simulation to `now_ms` and return the scene to draw,
    /// serialized as JSON.
    #[wasm_bindgen]
    pub fn game_frame(now_ms: f64) -> String {
        GAME.with(|g| {
            let mut borrow = g.borrow_mut();
            let Some(game) = borrow.as_mut() else {
                return String::from("null");
            };
            game.update(now_ms / 1000.0);
            let frame = SceneFrame::capture(&game.state);
            serde_json::to_string(&frame).unwrap_or_else(|e| {
                log::error!("Scene serialization failed: {}", e);
                String::from("null")
            })
        })
    }

    /// Reset button: zero pendulum and score, clear particles
    #[wasm_bindgen]
    pub fn reset_game() {
        GAME.with(|g| {
            if let Some(game) = g.borrow_mut().as_mut() {
                game.input.reset = true;
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Punchbag (native) starting...");
    log::info!("The game needs a browser for camera + tracking - this is a headless demo");

    demo_punch();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry points are the exported functions; this just satisfies the compiler
}

/// Headless smoke run: land one scripted punch and swing the pendulum
#[cfg(not(target_arch = "wasm32"))]
fn demo_punch() {
    use glam::Vec3;
    use punchbag::consts::SIM_DT;
    use punchbag::sim::{GameState, HandFrame, TickInput, ingest_hand_frame, tick};
    use punchbag::tuning::Tuning;

    let tuning = Tuning::load();
    let mut state = GameState::new(42);

    let target = state.pendulum.bob_world_position(&tuning);
    let approach = HandFrame {
        joints: [target + Vec3::new(0.0, 0.0, 1.0); 21],
        timestamp: 0.0,
    };
    let impact = HandFrame {
        joints: [target; 21],
        timestamp: 0.5,
    };

    ingest_hand_frame(&mut state, &approach, &tuning);
    let event = ingest_hand_frame(&mut state, &impact, &tuning);
    println!("punch event: {:?}", event);

    for _ in 0..120 {
        tick(&mut state, &TickInput::default(), &tuning, SIM_DT);
    }
    println!(
        "after 2s: score {}, angle {:.3} rad, {} live particles",
        state.score, state.pendulum.angle, state.particles.len()
    );
    assert!(state.score > 0, "scripted punch should score");
}
