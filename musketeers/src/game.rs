use std::fmt::Display;

use enum_map::{enum_map, EnumMap};
use musketeer_types::Side;

use crate::{
    agent::{Agent, GreedyAgent, HumanAgent, RandomAgent},
    board::Board,
    error::GameError,
    history::History,
    prompt::Prompt,
    replay::ReplayController,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Human,
    HumanRandom,
    HumanGreedy,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::Human,
        GameMode::HumanRandom,
        GameMode::HumanGreedy,
    ];

    /// Asks for a mode on the console.
    pub fn choose(prompt: &mut dyn Prompt) -> Result<Self, GameError> {
        for (idx, mode) in Self::ALL.iter().enumerate() {
            writeln!(prompt.out(), "{idx}: {mode}")?;
        }
        write!(prompt.out(), "Choose a game mode to play i.e. enter a number: ")?;
        let choice = prompt.choose("012", "Invalid option. Enter 0, 1, or 2: ")?;
        Ok(match choice {
            '1' => GameMode::HumanRandom,
            '2' => GameMode::HumanGreedy,
            _ => GameMode::Human,
        })
    }

    #[must_use]
    pub fn has_computer(self) -> bool {
        self != GameMode::Human
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Human => write!(f, "Human vs Human"),
            GameMode::HumanRandom => write!(f, "Human vs Computer (Random)"),
            GameMode::HumanGreedy => write!(f, "Human vs Computer (Greedy)"),
        }
    }
}

/// Asks which side the human plays against the computer.
pub fn choose_side(prompt: &mut dyn Prompt) -> Result<Side, GameError> {
    write!(prompt.out(), "Enter 'M' to be a Musketeer or 'G' to be a Guard: ")?;
    let choice = prompt.choose("MG", "Invalid option. Enter 'M' or 'G': ")?;
    Ok(if choice == 'M' {
        Side::Musketeer
    } else {
        Side::Guard
    })
}

/// One match between two agents on a board owned by the game.
pub struct Game<'p> {
    board: Board,
    agents: EnumMap<Side, Box<dyn Agent>>,
    history: History,
    prompt: &'p mut dyn Prompt,
}

impl<'p> Game<'p> {
    pub fn new(
        board: Board,
        agents: EnumMap<Side, Box<dyn Agent>>,
        prompt: &'p mut dyn Prompt,
    ) -> Self {
        Self {
            board,
            agents,
            history: History::new(),
            prompt,
        }
    }

    /// Standard board, with the computer (if any) playing the side the human does not.
    pub fn with_mode(
        mode: GameMode,
        human: Side,
        seed: u64,
        prompt: &'p mut dyn Prompt,
    ) -> Self {
        let computer = |side: Side| -> Box<dyn Agent> {
            match mode {
                _ if side == human => Box::new(HumanAgent),
                GameMode::Human => Box::new(HumanAgent),
                GameMode::HumanRandom => Box::new(RandomAgent::new(seed)),
                GameMode::HumanGreedy => Box::new(GreedyAgent::new(seed)),
            }
        };
        let agents = enum_map! {
            side => computer(side),
        };
        Self::new(Board::new(), agents, prompt)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    fn humans_playing(&self) -> bool {
        self.agents.values().all(|agent| agent.is_interactive())
    }

    /// Plays until one side wins and returns the winner.
    pub fn run(&mut self) -> Result<Side, GameError> {
        let winner = loop {
            if let Some(winner) = self.board.winner() {
                break winner;
            }
            write!(self.prompt.out(), "\n{}", self.board)?;
            let side = self.board.turn();
            if self.agents[side].is_interactive() {
                write!(
                    self.prompt.out(),
                    "[{side}] Enter 'M' to move or 'U' to undo: "
                )?;
                match self
                    .prompt
                    .choose("MU", "Invalid option. Enter 'M' or 'U': ")?
                {
                    'U' => self.undo()?,
                    _ => self.make_move()?,
                }
            } else {
                writeln!(
                    self.prompt.out(),
                    "[{}] Calculating move...",
                    self.agents[side].name()
                )?;
                self.make_move()?;
            }
        };
        write!(self.prompt.out(), "\n{}", self.board)?;
        writeln!(self.prompt.out(), "\n{winner} won!")?;
        log::info!("{winner} won after {} moves", self.history.len());
        Ok(winner)
    }

    /// Lets the agent on turn move and records the move.
    pub fn make_move(&mut self) -> Result<(), GameError> {
        let side = self.board.turn();
        let mv = self.agents[side].get_move(&self.board, &mut *self.prompt)?;
        log::debug!("{side} plays {mv}");
        self.history.push(mv);
        self.board.play(mv);
        Ok(())
    }

    /// Takes back the last move, or the last two against a computer so the
    /// human is on turn again.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.history.is_empty() {
            writeln!(self.prompt.out(), "No moves to undo.")?;
        } else if self.history.len() == 1 || self.humans_playing() {
            self.undo_last()?;
        } else {
            self.undo_last()?;
            self.undo_last()?;
        }
        Ok(())
    }

    fn undo_last(&mut self) -> Result<(), GameError> {
        if let Some(mv) = self.history.pop() {
            self.board.undo_move(mv);
            log::debug!("took back {mv}");
            writeln!(self.prompt.out(), "Undid the previous move.")?;
        }
        Ok(())
    }

    /// Offers an action replay of the finished game.
    pub fn end_game(&mut self) -> Result<(), GameError> {
        write!(
            self.prompt.out(),
            "\n\nGame Over! You can watch an interactive replay of this game if you want...\n\
             Enter either 'Y' or 'N': "
        )?;
        let choice = self
            .prompt
            .choose("YN", "Invalid option. Enter either 'Y' or 'N': ")?;
        if choice == 'Y' {
            ReplayController::new(
                self.history.moves.clone(),
                &mut self.board,
                &mut *self.prompt,
            )
            .run()?;
        }
        Ok(())
    }
}
