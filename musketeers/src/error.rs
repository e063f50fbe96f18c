use std::io;

use musketeer_types::Move;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("console i/o failed")]
    Io(#[from] io::Error),
    #[error("input closed while waiting for a command")]
    InputClosed,
    #[error("move {index} ({mv}) is not legal in that position")]
    IllegalMove { mv: Move, index: usize },
    #[error("history file is malformed")]
    HistoryFormat(#[from] ron::error::SpannedError),
    #[error("history could not be serialized")]
    HistoryEncode(#[from] ron::Error),
}
