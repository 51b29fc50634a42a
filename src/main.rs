//! Brick Breaker entry point
//!
//! Headless native shell: drives the engine at the fixed tick cadence with
//! an autoplay paddle standing in for the player, builds a frame per tick,
//! and logs score and terminal transitions. A windowed front end would hook
//! the same three seams: commands in, `advance` per tick, frame out.

use std::time::{Duration, Instant};

use brick_breaker::consts::*;
use brick_breaker::input::{self, Command, Outcome};
use brick_breaker::render::build_frame;
use brick_breaker::sim::{Direction, GameState, advance};

/// Demo runs before the shell quits on its own
const DEMO_RUNS: u32 = 3;
/// Per-run tick cap so a perfectly tracking paddle cannot play forever
const DEMO_RUN_TICKS: u64 = 3600;

/// Steer the paddle under the ball, one input event per tick at most.
/// Stand-in for a player; real input would arrive as key events instead.
fn autoplay(state: &GameState) -> Option<Command> {
    if state.is_game_over() {
        return None;
    }
    let paddle_center = state.paddle.x + PADDLE_WIDTH / 2.0;
    let delta = state.ball.pos.x - paddle_center;
    if delta < -PADDLE_STEP / 2.0 {
        Some(Command::MovePaddle(Direction::Left))
    } else if delta > PADDLE_STEP / 2.0 {
        Some(Command::MovePaddle(Direction::Right))
    } else {
        None
    }
}

fn handle(state: &mut GameState, cmd: Command) {
    if input::apply(state, cmd) == Outcome::Exit {
        std::process::exit(0);
    }
}

fn main() {
    env_logger::init();
    log::info!("{WINDOW_TITLE} starting (headless demo, {TICK_MS} ms tick)");

    let tick_interval = Duration::from_millis(TICK_MS);
    let mut state = GameState::new();
    let mut runs = 1;
    let mut run_ticks: u64 = 0;
    let mut last_score = 0;

    loop {
        let tick_start = Instant::now();

        if let Some(cmd) = autoplay(&state) {
            handle(&mut state, cmd);
        }
        advance(&mut state);
        run_ticks += 1;

        let frame = build_frame(&state);
        log::trace!("tick {run_ticks}: {} draw commands", frame.len());
        if state.score != last_score {
            log::info!("score {}", state.score);
            last_score = state.score;
        }

        let run_done = state.is_game_over() || run_ticks >= DEMO_RUN_TICKS;
        if run_done {
            log::info!(
                "run {runs}/{DEMO_RUNS} finished after {run_ticks} ticks, score {}",
                state.score
            );
            if let Ok(json) = serde_json::to_string(&state) {
                log::debug!("final state: {json}");
            }
            if runs >= DEMO_RUNS {
                handle(&mut state, Command::Quit);
            }
            // Restart requires the terminal phase; a timed-out run is
            // abandoned and re-initialized directly.
            if state.is_game_over() {
                handle(&mut state, Command::Restart);
            } else {
                state.reset();
            }
            runs += 1;
            run_ticks = 0;
            last_score = 0;
        }

        if let Some(remaining) = tick_interval.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
