use itertools::Itertools;
use musketeer_types::{Cell, Side};

use crate::board::Board;

const WIN: i64 = 10_000;

impl Board {
    /// Static evaluation of the position from the point of view of `side`.
    #[must_use]
    pub fn eval(&self, side: Side) -> i64 {
        match self.winner() {
            Some(winner) if winner == side => return WIN,
            Some(_) => return -WIN,
            None => {}
        }
        let musketeers = self.pieces(Side::Musketeer);

        // Spread out musketeers are hard to line up
        let spread: i64 = musketeers
            .iter()
            .tuple_combinations()
            .map(|(a, b)| i64::from(a.distance_to(b)))
            .sum();

        // Every pair already sharing a line is one step from losing
        let shared_lines = musketeers
            .iter()
            .tuple_combinations()
            .filter(|(a, b): &(Cell, Cell)| a.row() == b.row() || a.col() == b.col())
            .count();

        // Fewer captures left brings the musketeers closer to running out of moves
        let captures = self.moves_for(Side::Musketeer).len();

        #[allow(clippy::cast_possible_wrap)]
        let eval = spread * 10 - shared_lines as i64 * 25 - captures as i64 * 2;
        match side {
            Side::Musketeer => eval,
            Side::Guard => -eval,
        }
    }
}
