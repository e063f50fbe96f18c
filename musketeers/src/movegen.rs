use musketeer_types::{BitBoard, Cell, Move, Side};
use smallvec::SmallVec;

use crate::board::Board;

impl Board {
    /// Cells the piece on `cell` may step to. Musketeers step onto adjacent
    /// guards, guards step onto adjacent empty cells.
    #[must_use]
    pub fn possible_destinations(&self, cell: Cell) -> SmallVec<Cell, 4> {
        self.destination_set(cell).iter().collect()
    }

    fn destination_set(&self, cell: Cell) -> BitBoard {
        match self.side_on(cell) {
            Some(Side::Musketeer) => cell.neighbours() & self.pieces(Side::Guard),
            Some(Side::Guard) => cell.neighbours() - self.occupied(),
            None => BitBoard::EMPTY,
        }
    }

    /// Pieces of `side` that have at least one move.
    #[must_use]
    pub fn movable_pieces(&self, side: Side) -> BitBoard {
        self.pieces(side)
            .iter()
            .filter(|cell| !self.destination_set(*cell).is_empty())
            .collect()
    }

    #[must_use]
    pub fn moves_for(&self, side: Side) -> Vec<Move> {
        self.pieces(side)
            .iter()
            .flat_map(|from| {
                self.destination_set(from)
                    .iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Moves available to the side whose turn it is.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.moves_for(self.turn())
    }

    #[must_use]
    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.side_on(mv.from) == Some(self.turn()) && self.destination_set(mv.from).has(mv.to)
    }
}
