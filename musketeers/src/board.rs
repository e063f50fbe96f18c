use enum_map::{enum_map, EnumMap};
use itertools::Itertools;
use musketeer_types::{BitBoard, Cell, Move, Side};

/// Cells the musketeers start on: top right, centre and bottom left.
pub const MUSKETEER_START: [Cell; 3] = [Cell::new(0, 4), Cell::new(2, 2), Cell::new(4, 0)];

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pieces: EnumMap<Side, BitBoard>,
    turn: Side,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position, musketeers to move.
    #[must_use]
    pub fn new() -> Self {
        let musketeers: BitBoard = MUSKETEER_START.into_iter().collect();
        Self {
            pieces: enum_map! {
                Side::Musketeer => musketeers,
                Side::Guard => !musketeers,
            },
            turn: Side::Musketeer,
        }
    }

    /// Board with no pieces at all.
    #[must_use]
    pub fn empty(turn: Side) -> Self {
        Self {
            pieces: EnumMap::default(),
            turn,
        }
    }

    /// Toggles the state of a cell for a given side.
    fn xor(&mut self, cell: Cell, side: Side) {
        self.pieces[side] ^= cell.bitboard();
    }

    /// Puts a piece of `side` on an empty cell.
    pub fn set(&mut self, cell: Cell, side: Side) {
        assert!(
            self.side_on(cell).is_none(),
            "{cell} already holds {:?}, cannot place {side:?}",
            self.side_on(cell),
        );
        self.xor(cell, side);
    }

    /// Removes the piece of `side` from a cell.
    pub fn unset(&mut self, cell: Cell, side: Side) {
        assert!(
            self.side_on(cell) == Some(side),
            "{cell} holds {:?}, expected {side:?}",
            self.side_on(cell),
        );
        self.xor(cell, side);
    }

    #[must_use]
    pub fn side_on(&self, cell: Cell) -> Option<Side> {
        self.pieces
            .iter()
            .find(|(_, bb)| bb.has(cell))
            .map(|(side, _)| side)
    }

    #[must_use]
    pub fn pieces(&self, side: Side) -> BitBoard {
        self.pieces[side]
    }

    #[must_use]
    pub fn occupied(&self) -> BitBoard {
        self.pieces[Side::Musketeer] | self.pieces[Side::Guard]
    }

    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    fn next_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// Plays `mv` for whichever piece stands on `mv.from`.
    /// A musketeer captures the guard on `mv.to`.
    pub fn play(&mut self, mv: Move) {
        let side = self
            .side_on(mv.from)
            .unwrap_or_else(|| panic!("no piece to move on {}", mv.from));
        if side == Side::Musketeer {
            self.unset(mv.to, Side::Guard);
        }
        self.unset(mv.from, side);
        self.set(mv.to, side);
        self.next_turn();
    }

    /// Takes back a recorded move: the piece on `mv.to` returns to `mv.from`
    /// and a guard captured by a musketeer reappears on `mv.to`.
    pub fn undo_move(&mut self, mv: Move) {
        let side = self
            .side_on(mv.to)
            .unwrap_or_else(|| panic!("no piece to take back on {}", mv.to));
        self.unset(mv.to, side);
        self.set(mv.from, side);
        if side == Side::Musketeer {
            self.set(mv.to, Side::Guard);
        }
        self.next_turn();
    }

    /// Replays a recorded move handed over with its endpoints swapped,
    /// which is how a replay cursor yields moves when stepping forward.
    pub fn redo_move(&mut self, reversed: Move) {
        self.play(reversed.reversed());
    }

    /// True when all three musketeers share a row or a column.
    #[must_use]
    pub fn musketeers_aligned(&self) -> bool {
        let musketeers = self.pieces[Side::Musketeer];
        !musketeers.is_empty()
            && (musketeers.iter().map(Cell::row).all_equal()
                || musketeers.iter().map(Cell::col).all_equal())
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if self.musketeers_aligned() {
            Some(Side::Guard)
        } else if self.legal_moves().is_empty() {
            // Musketeers out of captures win, and so they do against boxed in guards
            Some(Side::Musketeer)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Builds a position from five rows of `M`, `G` and `_`.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; 5], turn: Side) -> Self {
        let mut board = Self::empty(turn);
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                // Grid is 5x5, indices fit into u8
                let cell = Cell::new(row as u8, col as u8);
                match c {
                    'M' => board.set(cell, Side::Musketeer),
                    'G' => board.set(cell, Side::Guard),
                    _ => {}
                }
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..Cell::SIZE {
            write!(f, " {}", (b'A' + col) as char)?;
        }
        writeln!(f)?;
        for row in 0..Cell::SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..Cell::SIZE {
                let symbol = self.side_on(Cell::new(row, col)).map_or('_', Side::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "to_move {:?}", self.turn)?;
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout() {
        let board = Board::new();
        assert_eq!(board.pieces(Side::Musketeer).len(), 3);
        assert_eq!(board.pieces(Side::Guard).len(), 22);
        assert_eq!(board.turn(), Side::Musketeer);
        assert_eq!(board.side_on("E1".parse().unwrap()), Some(Side::Musketeer));
        assert_eq!(board.side_on("A1".parse().unwrap()), Some(Side::Guard));
        assert!(!board.is_game_over());
    }

    #[test]
    fn render() {
        let expected = "  A B C D E\n\
                        1 G G G G M\n\
                        2 G G G G G\n\
                        3 G G M G G\n\
                        4 G G G G G\n\
                        5 M G G G G\n";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn capture_and_undo() {
        let mut board = Board::new();
        let start = board.clone();
        let mv = Move::new("C3".parse().unwrap(), "C2".parse().unwrap());
        board.play(mv);
        assert_eq!(board.pieces(Side::Guard).len(), 21);
        assert_eq!(board.side_on(mv.to), Some(Side::Musketeer));
        assert_eq!(board.side_on(mv.from), None);
        assert_eq!(board.turn(), Side::Guard);

        board.undo_move(mv);
        assert_eq!(board, start);
    }

    #[test]
    fn guard_move_undo_leaves_cell_empty() {
        let mut board = Board::new();
        let capture = Move::new("C3".parse().unwrap(), "C2".parse().unwrap());
        let step = Move::new("B3".parse().unwrap(), "C3".parse().unwrap());
        board.play(capture);
        let after_capture = board.clone();
        board.play(step);
        assert_eq!(board.side_on(step.to), Some(Side::Guard));
        board.undo_move(step);
        assert_eq!(board, after_capture);
        assert_eq!(board.side_on(step.to), None);
    }

    #[test]
    fn redo_takes_reversed_move() {
        let mv = Move::new("C3".parse().unwrap(), "C2".parse().unwrap());
        let mut played = Board::new();
        played.play(mv);
        let mut redone = Board::new();
        redone.redo_move(mv.reversed());
        assert_eq!(played, redone);
    }

    #[test]
    fn aligned_musketeers_lose() {
        let board = Board::from_rows(
            [
                "M _ G _ _",
                "M _ _ _ G",
                "M _ _ _ _",
                "_ G _ _ _",
                "_ _ _ _ G",
            ],
            Side::Musketeer,
        );
        assert!(board.musketeers_aligned());
        assert_eq!(board.winner(), Some(Side::Guard));
    }

    #[test]
    fn stuck_musketeers_win() {
        let board = Board::from_rows(
            [
                "M _ _ _ _",
                "_ _ M _ _",
                "_ _ _ _ G",
                "_ M _ _ _",
                "G _ _ _ _",
            ],
            Side::Musketeer,
        );
        assert!(!board.musketeers_aligned());
        assert_eq!(board.winner(), Some(Side::Musketeer));
    }

    #[test]
    fn boxed_in_guards_hand_musketeers_the_win() {
        // Guards to move, every guard is surrounded
        let board = Board::from_rows(
            [
                "G M _ _ _",
                "M _ _ _ _",
                "_ _ _ _ _",
                "_ _ _ _ _",
                "_ _ _ _ M",
            ],
            Side::Guard,
        );
        assert_eq!(board.winner(), Some(Side::Musketeer));
    }
}
