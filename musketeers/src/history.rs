use std::{fs, path::Path};

use musketeer_types::Move;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::{board::Board, error::GameError};

/// Moves of one game in the order they were played from the starting position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub moves: Vec<Move>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Plays every move on a fresh board, checking each one against the rules.
    pub fn board_with_history(&self) -> Result<Board, GameError> {
        let mut board = Board::new();
        for (index, mv) in self.moves.iter().enumerate() {
            if board.is_game_over() || !board.is_valid_move(*mv) {
                return Err(GameError::IllegalMove { mv: *mv, index });
            }
            board.play(*mv);
        }
        Ok(board)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let path = path.as_ref();
        let text = ron::ser::to_string_pretty(self, PrettyConfig::default())?;
        fs::write(path, text)?;
        log::info!("saved {} moves to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let history: History = ron::from_str(&fs::read_to_string(path)?)?;
        log::info!("loaded {} moves from {}", history.len(), path.display());
        Ok(history)
    }
}

impl From<Vec<Move>> for History {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}
