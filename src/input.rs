//! Key event to engine command mapping
//!
//! The input source is an external collaborator delivering discrete key
//! events between ticks. Unmapped keys produce no command rather than an
//! error; quitting is an intentional process exit decided by the shell, not
//! by the engine.

use serde::{Deserialize, Serialize};

use crate::sim::{Direction, GameState};

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MovePaddle(Direction),
    Restart,
    Quit,
}

/// What the shell should do after a command was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// User requested exit; terminate the process, nothing to flush
    Exit,
}

/// Map a key event name to a command. Unrecognized keys map to `None`.
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" => Some(Command::MovePaddle(Direction::Left)),
        "ArrowRight" => Some(Command::MovePaddle(Direction::Right)),
        "r" | "R" => Some(Command::Restart),
        "q" | "Q" => Some(Command::Quit),
        _ => None,
    }
}

/// Apply a command to the engine between ticks.
///
/// `Restart` defers to the engine, which ignores it unless the game is
/// over. `Quit` mutates nothing and tells the shell to exit.
pub fn apply(state: &mut GameState, cmd: Command) -> Outcome {
    match cmd {
        Command::MovePaddle(dir) => {
            state.move_paddle(dir);
            Outcome::Continue
        }
        Command::Restart => {
            state.restart();
            Outcome::Continue
        }
        Command::Quit => {
            log::info!("quit requested, final score {}", state.score);
            Outcome::Exit
        }
    }
}
