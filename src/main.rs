//! Stack Tower entry point
//!
//! Native builds have no window: this runs a headless autopilot game at a
//! fixed frame rate and reports how far it got. The browser build uses the
//! `web` bindings from the library instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Stack Tower (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);

    if let Err(e) = native::run_demo(seed) {
        log::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use stack_tower::GameConfig;
    use stack_tower::persistence::JsonFileStore;
    use stack_tower::platform::FrameClock;
    use stack_tower::session::Session;
    use stack_tower::sim::{Autopilot, GameEvent};

    const VIEWPORT_WIDTH: f32 = 390.0;
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after ten minutes of simulated play
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    const BEST_SCORE_FILE: &str = "stack_tower_best.json";

    pub fn run_demo(seed: u64) -> Result<(), Box<dyn std::error::Error>> {
        let mut session = Session::new(GameConfig::default(), JsonFileStore::new(BEST_SCORE_FILE))?;
        let mut pilot = Autopilot::new(seed, 10.0);
        let mut clock = FrameClock::default();

        session.start(VIEWPORT_WIDTH)?;
        for frame in 0..MAX_FRAMES {
            for _ in 0..clock.advance(FRAME_DT) {
                session.tick(clock.step(), VIEWPORT_WIDTH)?;
            }
            if !pilot.wants_tap(session.game().state()) {
                continue;
            }
            for event in session.place()? {
                if let GameEvent::GameOver { score, level } = event {
                    let best = session.snapshot().best_score;
                    log::info!("Demo ended on frame {frame}: level {level}, score {score}, best {best}");
                    println!("seed {seed}: level {level}, score {score} (best {best})");
                    return Ok(());
                }
            }
        }

        let snap = session.snapshot();
        println!(
            "seed {seed}: still standing at level {} with score {}",
            snap.current_level, snap.score
        );
        Ok(())
    }
}
