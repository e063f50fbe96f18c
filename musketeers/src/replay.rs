//! Action replay: scrubbing back and forth through a finished game.
//!
//! A [`MoveCursor`] walks a fixed list of recorded moves in both directions and
//! a [`ReplayController`] maps console commands onto cursor steps, keeping the
//! borrowed [`Board`] in the position that matches the cursor.

use musketeer_types::Move;

use crate::{board::Board, error::GameError, prompt::Prompt};

/// Bidirectional iterator over a fixed list of moves.
///
/// The position counts how many moves have been applied, so it ranges over
/// `0..=len`: `0` is the starting position and `len` the final one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCursor {
    moves: Vec<Move>,
    index: usize,
}

impl MoveCursor {
    /// Cursor on the starting position.
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        Self {
            moves: moves.into(),
            index: 0,
        }
    }

    /// Cursor after the last move, matching a board that has played them all.
    pub fn at_end(moves: impl Into<Vec<Move>>) -> Self {
        let moves = moves.into();
        Self {
            index: moves.len(),
            moves,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index < self.moves.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// The move that a forward step would replay, `None` at the end.
    #[must_use]
    pub fn current(&self) -> Option<Move> {
        self.moves.get(self.index).copied()
    }

    /// Advances past the current move and returns it with its endpoints
    /// swapped, the form [`Board::redo_move`] takes.
    pub fn step_forward(&mut self) -> Option<Move> {
        let current = self.current()?;
        self.index += 1;
        Some(current.reversed())
    }

    /// Steps back over the previous move and returns it as recorded, the form
    /// [`Board::undo_move`] takes.
    pub fn step_backward(&mut self) -> Option<Move> {
        if !self.has_previous() {
            return None;
        }
        self.index -= 1;
        self.current()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    Active,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayCommand {
    Undo,
    Redo,
    Quit,
}

impl ReplayCommand {
    const OPTIONS: &'static str = "URQ";
}

pub struct ReplayController<'a> {
    cursor: MoveCursor,
    board: &'a mut Board,
    prompt: &'a mut dyn Prompt,
    state: ReplayState,
}

impl<'a> ReplayController<'a> {
    /// Replays `moves` on a board that currently shows the position after all of them.
    pub fn new(
        moves: impl Into<Vec<Move>>,
        board: &'a mut Board,
        prompt: &'a mut dyn Prompt,
    ) -> Self {
        Self::with_cursor(MoveCursor::at_end(moves), board, prompt)
    }

    /// The board must show the position the cursor points at.
    pub fn with_cursor(
        cursor: MoveCursor,
        board: &'a mut Board,
        prompt: &'a mut dyn Prompt,
    ) -> Self {
        Self {
            cursor,
            board,
            prompt,
            state: ReplayState::Active,
        }
    }

    #[must_use]
    pub fn state(&self) -> ReplayState {
        self.state
    }

    #[must_use]
    pub fn is_replay_over(&self) -> bool {
        self.state == ReplayState::Terminated
    }

    #[must_use]
    pub fn cursor(&self) -> &MoveCursor {
        &self.cursor
    }

    pub fn run(&mut self) -> Result<(), GameError> {
        write!(self.prompt.out(), "\nACTION REPLAY Mode\n{}", self.board)?;
        if self.cursor.is_empty() {
            writeln!(
                self.prompt.out(),
                "No moves to choose from. Exiting Action Replay Mode."
            )?;
            self.state = ReplayState::Terminated;
            return Ok(());
        }
        log::debug!("replaying {} moves", self.cursor.len());
        while !self.is_replay_over() {
            self.show_position()?;
            match self.read_command()? {
                ReplayCommand::Undo => {
                    self.undo()?;
                }
                ReplayCommand::Redo => {
                    self.redo()?;
                }
                ReplayCommand::Quit => self.state = ReplayState::Terminated,
            }
        }
        writeln!(self.prompt.out(), "\n\nExiting Action Replay Mode.\n")?;
        Ok(())
    }

    /// Takes back the previous move. Returns false when already at the start.
    pub fn undo(&mut self) -> Result<bool, GameError> {
        let Some(mv) = self.cursor.step_backward() else {
            writeln!(self.prompt.out(), "\nNo moves to undo.\n")?;
            return Ok(false);
        };
        self.board.undo_move(mv);
        log::debug!("undid {mv}, now at move {}", self.cursor.position());
        write!(
            self.prompt.out(),
            "\nUndo -> Move {}\n{}",
            self.cursor.position(),
            self.board
        )?;
        Ok(true)
    }

    /// Plays the next move again. Returns false when already at the end.
    pub fn redo(&mut self) -> Result<bool, GameError> {
        let Some(mv) = self.cursor.step_forward() else {
            writeln!(self.prompt.out(), "\nNo moves to redo.\n")?;
            return Ok(false);
        };
        self.board.redo_move(mv);
        log::debug!("redid {}, now at move {}", mv.reversed(), self.cursor.position());
        write!(
            self.prompt.out(),
            "\nRedo -> Move {}\n{}",
            self.cursor.position(),
            self.board
        )?;
        Ok(true)
    }

    fn show_position(&mut self) -> Result<(), GameError> {
        let position = self.cursor.position();
        let marker = if position == 0 {
            " (Start)"
        } else if !self.cursor.has_next() {
            " (End)"
        } else {
            ""
        };
        writeln!(self.prompt.out(), "\nCurrently on Move {position}{marker}")?;
        writeln!(
            self.prompt.out(),
            "\nU: Undo Move -------- R: Redo Move -------- Q: Quit Action Replay Mode"
        )?;
        write!(self.prompt.out(), "Choose an option: ")?;
        Ok(())
    }

    fn read_command(&mut self) -> Result<ReplayCommand, GameError> {
        let letter = self.prompt.choose(
            ReplayCommand::OPTIONS,
            "Invalid option. Enter U (Undo), R (Redo), or Q (Quit): ",
        )?;
        Ok(match letter {
            'U' => ReplayCommand::Undo,
            'R' => ReplayCommand::Redo,
            _ => ReplayCommand::Quit,
        })
    }
}
