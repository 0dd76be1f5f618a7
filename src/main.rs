//! Treasure Dash entry point
//!
//! Native builds run a headless round loop; the browser build exposes a small
//! handle the page drives from its render loop.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use treasure_dash::platform::{FixedStep, PointerEvent, PointerSampler};
    use treasure_dash::{Config, RoundController};

    /// Round handle owned by the page
    #[wasm_bindgen]
    pub struct WebRound {
        round: RoundController,
        pointer: PointerSampler,
        stepper: FixedStep,
    }

    #[wasm_bindgen]
    impl WebRound {
        /// Build a round from optional JSON config text
        #[wasm_bindgen(constructor)]
        pub fn new(config_json: Option<String>) -> Result<WebRound, JsValue> {
            let config = match config_json {
                Some(json) => Config::from_json_str(&json),
                None => Ok(Config::default()),
            }
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

            let round =
                RoundController::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WebRound {
                round,
                pointer: PointerSampler::new(),
                stepper: FixedStep::default(),
            })
        }

        pub fn pointer_down(&mut self) {
            self.pointer.push(PointerEvent::Down);
        }

        pub fn pointer_up(&mut self) {
            self.pointer.push(PointerEvent::Up);
        }

        pub fn pointer_cancel(&mut self) {
            self.pointer.push(PointerEvent::Cancel);
        }

        /// Advance by a frame's elapsed seconds and return the snapshot as JSON
        pub fn frame(&mut self, dt: f32) -> Result<String, JsValue> {
            let ticks = self.stepper.advance(dt);
            let mut reset = false;
            for _ in 0..ticks {
                let input = self.pointer.sample();
                let snapshot = self
                    .round
                    .tick(&input)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                reset |= snapshot.reset;
            }

            let mut snapshot = self.round.snapshot();
            snapshot.reset = reset;
            serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
        }
    }

    #[wasm_bindgen(start)]
    pub fn wasm_main() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Treasure Dash starting...");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Treasure Dash (native) starting...");

    if let Err(e) = run_headless() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Walk the player toward the treasure with input held, logging every reset
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> Result<(), Box<dyn std::error::Error>> {
    use treasure_dash::consts::TICK_RATE;
    use treasure_dash::{Config, RoundController, TickInput};

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let ticks: u64 = match args.next() {
        Some(n) => n.parse()?,
        None => 10 * u64::from(TICK_RATE),
    };

    let mut round = RoundController::new(config)?;
    let input = TickInput::held();
    let mut resets = 0;
    for _ in 0..ticks {
        if round.tick(&input)?.reset {
            resets += 1;
        }
    }

    log::info!(
        "Ran {} ticks: {} resets, now in round {}",
        round.time_ticks(),
        resets,
        round.round()
    );
    println!("{}", serde_json::to_string_pretty(&round.snapshot())?);
    Ok(())
}
