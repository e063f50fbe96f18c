#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod agent;
pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod history;
pub mod movegen;
pub mod prompt;
pub mod replay;

pub use agent::{Agent, GreedyAgent, HumanAgent, RandomAgent};
pub use board::Board;
pub use error::GameError;
pub use game::{choose_side, Game, GameMode};
pub use history::History;
pub use prompt::{Console, InputSource, Prompt, ScriptedInput, StdinSource};
pub use replay::{MoveCursor, ReplayCommand, ReplayController, ReplayState};
