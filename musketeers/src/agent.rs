use itertools::Itertools;
use musketeer_types::{Cell, Move};
use rand::{seq::SliceRandom, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::{board::Board, error::GameError, prompt::Prompt};

/// Something that picks moves for one side.
pub trait Agent {
    fn name(&self) -> &'static str;

    /// Interactive agents get the in-game command menu before moving.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Picks a legal move for the side to move. Only called while the game is running.
    fn get_move(&mut self, board: &Board, prompt: &mut dyn Prompt) -> Result<Move, GameError>;
}

/// A person at the console.
#[derive(Debug, Default)]
pub struct HumanAgent;

impl HumanAgent {
    fn read_cell(
        prompt: &mut dyn Prompt,
        allowed: &[Cell],
        retry: &str,
    ) -> Result<Cell, GameError> {
        prompt.out().flush()?;
        loop {
            let token = prompt.next_token()?;
            match token.parse::<Cell>() {
                Ok(cell) if allowed.contains(&cell) => return Ok(cell),
                Ok(_) => {}
                Err(err) => log::debug!("{err}"),
            }
            write!(prompt.out(), "{retry}")?;
            prompt.out().flush()?;
        }
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> &'static str {
        "Human"
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn get_move(&mut self, board: &Board, prompt: &mut dyn Prompt) -> Result<Move, GameError> {
        let side = board.turn();
        let pieces = board.movable_pieces(side).iter().collect_vec();
        let listed = pieces.iter().join(", ");
        write!(
            prompt.out(),
            "[{side}] Possible pieces are {listed}. Enter the piece you want to move: "
        )?;
        let from = Self::read_cell(
            prompt,
            &pieces,
            &format!("Invalid piece. Enter one of {listed}: "),
        )?;

        let destinations = board.possible_destinations(from);
        let listed = destinations.iter().join(", ");
        write!(
            prompt.out(),
            "[{side}] Possible destinations are {listed}. Enter where you want to move: "
        )?;
        let to = Self::read_cell(
            prompt,
            &destinations,
            &format!("Invalid destination. Enter one of {listed}: "),
        )?;
        Ok(Move::new(from, to))
    }
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    rng: XorShiftRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn get_move(&mut self, board: &Board, _prompt: &mut dyn Prompt) -> Result<Move, GameError> {
        let moves = board.legal_moves();
        let mv = *moves
            .choose(&mut self.rng)
            .expect("a running game has a legal move");
        log::debug!("random agent picked {mv} out of {}", moves.len());
        Ok(mv)
    }
}

/// Looks one move ahead and plays the move with the best evaluation.
pub struct GreedyAgent {
    rng: XorShiftRng,
}

impl GreedyAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }
}

impl Agent for GreedyAgent {
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn get_move(&mut self, board: &Board, _prompt: &mut dyn Prompt) -> Result<Move, GameError> {
        let side = board.turn();
        let best = board
            .legal_moves()
            .into_iter()
            .max_set_by_key(|mv| {
                let mut next = board.clone();
                next.play(*mv);
                next.eval(side)
            });
        let mv = *best
            .choose(&mut self.rng)
            .expect("a running game has a legal move");
        log::debug!("greedy agent picked {mv} out of {} equal moves", best.len());
        Ok(mv)
    }
}
